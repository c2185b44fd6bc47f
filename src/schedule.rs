use crate::models::{Booking, DATE_FORMAT};
use chrono::NaiveDate;

/// The upcoming-bookings view: rows with unparsable dates are dropped, rows
/// before `today` are filtered out, and the rest sort ascending by parsed
/// date with ties broken by the slot's lexical string.
pub fn upcoming(rows: Vec<Booking>, today: NaiveDate) -> Vec<Booking> {
    let mut dated: Vec<(NaiveDate, Booking)> = rows
        .into_iter()
        .filter_map(|b| {
            NaiveDate::parse_from_str(&b.date, DATE_FORMAT)
                .ok()
                .map(|d| (d, b))
        })
        .filter(|(d, _)| *d >= today)
        .collect();

    dated.sort_by(|(da, a), (db, b)| {
        da.cmp(db)
            .then_with(|| a.time_slot.as_str().cmp(b.time_slot.as_str()))
    });

    dated.into_iter().map(|(_, b)| b).collect()
}
