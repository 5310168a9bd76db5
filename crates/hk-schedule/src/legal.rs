//! Result shapes for legal-compliance checks of a generated calendar.
//!
//! Only the contract lives here: [`LegalChecker`] maps a [`CalendarData`] to
//! a [`LegalCheckResult`]. No checker ships with the crate.

use hk_core::{Hours, Size};
use hk_time::Date;
use serde::{Deserialize, Serialize};

use crate::aggregate::CalendarStatistics;
use crate::calendar::CalendarData;

/// Highest compliance score.
pub const MAX_COMPLIANCE_SCORE: u8 = 100;

/// Limit a violation was found against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Annual total hours.
    AnnualHours,
    /// Hours on a single day.
    DailyHours,
    /// Hours in a single week.
    WeeklyHours,
    /// Consecutive working days.
    ConsecutiveDays,
}

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Breaks the rule.
    Error,
    /// Suspicious but allowed.
    Warning,
}

/// Category of an advisory warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A value is close to its limit.
    ApproachingLimit,
    /// Hours are unevenly spread over the period.
    UnevenDistribution,
    /// Sustained high workload.
    HighWorkload,
}

/// A limit that was exceeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalViolation {
    /// Which limit.
    #[serde(rename = "type")]
    pub kind: ViolationType,
    /// Human-readable description.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// Dates involved, if the violation is local.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_dates: Vec<Date>,
    /// Observed value.
    pub current_value: f64,
    /// The limit.
    pub limit_value: f64,
}

/// An advisory finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalWarning {
    /// Category.
    #[serde(rename = "type")]
    pub kind: WarningType,
    /// Human-readable description.
    pub message: String,
    /// Dates involved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_dates: Vec<Date>,
    /// Further detail.
    pub details: String,
}

/// Headline figures of a check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCheckSummary {
    /// Annual total hours.
    pub total_annual_hours: Hours,
    /// Largest single-day hours.
    pub max_daily_hours: Hours,
    /// Largest single-week hours.
    pub max_weekly_hours: Hours,
    /// Longest run of consecutive working days.
    pub max_consecutive_days: Size,
    /// 0–100.
    pub compliance_score: u8,
}

impl LegalCheckSummary {
    /// Summary figures taken from `stats`; the score is capped at 100.
    pub fn from_statistics(stats: &CalendarStatistics, compliance_score: u8) -> Self {
        Self {
            total_annual_hours: stats.total_work_hours,
            max_daily_hours: stats.max_daily_hours,
            max_weekly_hours: stats.max_weekly_hours,
            max_consecutive_days: stats.consecutive_work_days,
            compliance_score: compliance_score.min(MAX_COMPLIANCE_SCORE),
        }
    }
}

/// Outcome of a compliance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalCheckResult {
    /// `true` when no violation has [`Severity::Error`].
    pub is_compliant: bool,
    /// Violations found.
    pub violations: Vec<LegalViolation>,
    /// Advisory warnings.
    pub warnings: Vec<LegalWarning>,
    /// Headline figures.
    pub summary: LegalCheckSummary,
}

impl LegalCheckResult {
    /// Assemble a result, deriving `is_compliant` from the violations.
    pub fn new(
        violations: Vec<LegalViolation>,
        warnings: Vec<LegalWarning>,
        summary: LegalCheckSummary,
    ) -> Self {
        Self {
            is_compliant: !violations.iter().any(|v| v.severity == Severity::Error),
            violations,
            warnings,
            summary,
        }
    }

    /// Violations with [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &LegalViolation> + '_ {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
    }
}

/// A compliance checker over generated calendars.
pub trait LegalChecker {
    /// Check `calendar`.
    fn check(&self, calendar: &CalendarData) -> LegalCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::generate_calendar;
    use crate::settings::CalendarSettings;

    /// Flags any day above a fixed daily limit.
    struct DailyLimit(Hours);

    impl LegalChecker for DailyLimit {
        fn check(&self, calendar: &CalendarData) -> LegalCheckResult {
            let over: Vec<Date> = calendar
                .days()
                .filter(|d| d.work_hours > self.0)
                .map(|d| d.date)
                .collect();
            let violations = if over.is_empty() {
                Vec::new()
            } else {
                vec![LegalViolation {
                    kind: ViolationType::DailyHours,
                    message: "daily limit exceeded".into(),
                    severity: Severity::Error,
                    affected_dates: over,
                    current_value: calendar.statistics.max_daily_hours,
                    limit_value: self.0,
                }]
            };
            let score = if violations.is_empty() { 100 } else { 50 };
            LegalCheckResult::new(
                violations,
                Vec::new(),
                LegalCheckSummary::from_statistics(&calendar.statistics, score),
            )
        }
    }

    #[test]
    fn checker_seam() {
        let cal = generate_calendar(&CalendarSettings::default_for_year(2024), &[]);
        let ok = DailyLimit(10.0).check(&cal);
        assert!(ok.is_compliant);
        assert_eq!(ok.summary.compliance_score, 100);
        assert_eq!(ok.summary.total_annual_hours, cal.total_work_hours);

        let strict = DailyLimit(7.0).check(&cal);
        assert!(!strict.is_compliant);
        assert_eq!(strict.errors().count(), 1);
        assert_eq!(strict.violations[0].affected_dates.len(), cal.total_work_days);
    }

    #[test]
    fn warnings_only_is_compliant() {
        let summary = LegalCheckSummary::from_statistics(&CalendarStatistics::default(), 250);
        assert_eq!(summary.compliance_score, MAX_COMPLIANCE_SCORE);
        let result = LegalCheckResult::new(
            vec![LegalViolation {
                kind: ViolationType::WeeklyHours,
                message: "close to 52 hours".into(),
                severity: Severity::Warning,
                affected_dates: Vec::new(),
                current_value: 50.0,
                limit_value: 52.0,
            }],
            vec![LegalWarning {
                kind: WarningType::UnevenDistribution,
                message: "busy March".into(),
                affected_dates: Vec::new(),
                details: String::new(),
            }],
            summary,
        );
        assert!(result.is_compliant);
        assert_eq!(result.errors().count(), 0);
    }
}
