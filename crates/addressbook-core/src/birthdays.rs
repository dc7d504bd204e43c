//! Upcoming-birthday computation.
//!
//! A pure query over contact records: given a reference date, find every
//! record whose birthday occurs within the next seven days (today included,
//! the seventh day excluded) and compute the date on which to congratulate
//! them. Occurrences landing on a weekend are congratulated on the
//! following Monday; that shift affects the reported date only, never the
//! inclusion test.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Length of the forward-looking window, in days.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// One scheduled congratulation: who, and on which date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Congratulation date in canonical `DD.MM.YYYY` form.
    pub congratulation_date: String,
}

/// Compute upcoming birthdays for an iterator of records.
///
/// Records without a birthday are skipped. Output order follows the input
/// iterator's order.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let occurrence = next_occurrence(birthday.date(), today);

            let delta = (occurrence - today).num_days();
            if !(0..UPCOMING_WINDOW_DAYS).contains(&delta) {
                return None;
            }

            let congratulation = shift_off_weekend(occurrence);
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation.format("%d.%m.%Y").to_string(),
            })
        })
        .collect()
}

/// The birthday's next occurrence on or after `today`.
///
/// Substitutes `today`'s year into the birthday; if that date has already
/// passed this year, next year's occurrence is used instead. A birthday
/// falling exactly on `today` counts as this year's occurrence.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// The birthday observed in a specific year.
///
/// Naive year substitution fails only for Feb 29 in a non-leap year; that
/// case is observed on Mar 1, the day the birthday person has actually
/// completed another year.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}

/// Move a Saturday or Sunday date forward to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday() as i64; // 0=Mon ... 6=Sun
    if weekday >= 5 {
        date + Duration::days(7 - weekday)
    } else {
        date
    }
}
