use chrono::NaiveDate;

use crate::edgar::parsing::Fact;

pub const PERIOD_END_CONCEPT: &str = "DocumentPeriodEndDate";

/// Returns the value of the first valid `DocumentPeriodEndDate` fact, or an
/// empty string when the document has none.
///
/// The value is not date-parsed; context matching compares it verbatim.
pub fn resolve_period_end(facts: &[Fact]) -> String {
    facts
        .iter()
        .find(|fact| fact.is_valid() && fact.name == PERIOD_END_CONCEPT)
        .map(|fact| fact.value.clone())
        .unwrap_or_default()
}

/// Best-effort calendar date for a resolved period end.
pub fn calendar_date(period_end: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(period_end.trim(), "%Y-%m-%d").ok()
}
