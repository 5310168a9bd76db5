/// String → value parsers for dates and hour labels.
pub mod data_parsers;

/// Value → string formatters for hour labels.
pub mod data_formatters;
