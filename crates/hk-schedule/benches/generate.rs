use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hk_schedule::{apply_adjustments, generate_calendar, CalendarSettings, DateAdjustment};
use hk_time::{HolidayCalendar, Japan};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_calendar");

    for year in [2024u16, 2027] {
        let settings = CalendarSettings::default_for_year(year);
        let holidays = Japan.holidays_between(
            settings.start_date,
            settings.start_date.saturating_add_days(365),
        );
        group.bench_with_input(BenchmarkId::new("japan", year), &settings, |b, s| {
            b.iter(|| generate_calendar(black_box(s), black_box(&holidays)));
        });
    }

    group.finish();
}

fn bench_adjust(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_adjustments");

    let settings = CalendarSettings::default_for_year(2024);
    let calendar = generate_calendar(&settings, &[]);
    let adjustments: Vec<DateAdjustment> = calendar
        .days()
        .filter(|d| !d.is_work_day)
        .step_by(4)
        .map(|d| DateAdjustment::work(d.date, 4.0))
        .collect();

    group.bench_function("every_fourth_rest_day", |b| {
        b.iter(|| apply_adjustments(black_box(&calendar), black_box(&adjustments)));
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_adjust);
criterion_main!(benches);
