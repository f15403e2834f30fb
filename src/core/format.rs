//! Display formatting for listed bills
//!
//! Dates come back from the store as ISO `YYYY-MM-DD` strings and are shown
//! in the product's short French form: `4 Avr. 04`.

use chrono::{Datelike, NaiveDate, ParseError};

/// Abbreviated French month names, index 0 = January. Truncated to three
/// letters; juin and juillet collapse to the same abbreviation.
const SHORT_MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format an ISO date for display (`2004-04-04` → `4 Avr. 04`).
///
/// Errors are the caller's concern: the list controller falls back to the
/// raw stored value instead of dropping the record.
pub fn format_date(iso: &str) -> Result<String, ParseError> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")?;
    let month = SHORT_MONTHS_FR[date.month0() as usize];
    Ok(format!("{} {}. {:02}", date.day(), month, date.year() % 100))
}
