use crate::models::{Booking, Department, NewBooking};
use chrono::{Datelike, Weekday};

/// Outcome of checking a candidate booking against the loaded sheet.
///
/// Checks run in a fixed order and only the first failure is reported:
/// weekday, then clash, then name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    RejectedWeekday,
    RejectedClash { name: String, department: Department },
    RejectedMissingName,
}

pub fn validate(table: &[Booking], candidate: &NewBooking) -> Verdict {
    if matches!(candidate.date.weekday(), Weekday::Fri | Weekday::Sun) {
        return Verdict::RejectedWeekday;
    }

    let date_str = candidate.date_string();
    if let Some(hit) = table
        .iter()
        .find(|b| b.date == date_str && b.time_slot == candidate.time_slot)
    {
        return Verdict::RejectedClash {
            name: hit.name.clone(),
            department: hit.department,
        };
    }

    if candidate.name.trim().is_empty() {
        return Verdict::RejectedMissingName;
    }

    Verdict::Accepted
}
