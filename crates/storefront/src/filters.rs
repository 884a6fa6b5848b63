//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

/// Formats a decimal amount as a price string (e.g., "$510.00").
///
/// Usage in templates: `{{ total|money }}`
#[askama::filter_fn]
pub fn money(amount: impl std::fmt::Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${amount:.2}"))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(
    _value: impl std::fmt::Display,
    _env: &dyn askama::Values,
) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
