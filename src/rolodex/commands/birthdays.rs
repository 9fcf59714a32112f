//! Upcoming birthdays.
//!
//! A contact qualifies when their birthday is today or within the next three days.
//! How "days until" is computed depends on [`BirthdayMode`]:
//!
//! - `DayOfMonth` subtracts today's day of the month from the birthday's day of the
//!   month and ignores the month entirely. A birthday on 12 March counts as "in two
//!   days" on 10 July. This is the default and matches how the contact book has
//!   always behaved.
//! - `Calendar` counts the days until the next anniversary of the month and day.
//!   29 February is celebrated on 28 February in non-leap years.
//!
//! Contacts without a birthday, or with one that does not parse, are skipped.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::BirthdayMode;
use crate::error::Result;
use crate::store::DataStore;
use crate::validation::Birthday;
use chrono::{Datelike, NaiveDate};

pub const WINDOW_DAYS: i64 = 3;
pub const NONE_UPCOMING: &str = "None of your contacts have birthdays within three days.";

pub fn run<S: DataStore>(store: &S, today: NaiveDate, mode: BirthdayMode) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for contact in store.list_contacts()? {
        let Some(birthday) = Birthday::parse(&contact.birthday) else {
            continue;
        };
        let Some(days) = days_until(birthday, today, mode) else {
            continue;
        };

        let message = match days {
            0 => format!("It's your contact '{}' birthday today.", contact.name),
            1..=WINDOW_DAYS => format!(
                "Your contact {} has a birthday in {}.",
                contact.name,
                in_days(days)
            ),
            _ => continue,
        };
        result.add_message(CmdMessage::info(message));
        result.listed_contacts.push(contact);
    }

    tracing::debug!(?mode, %today, upcoming = result.listed_contacts.len(), "birthday check");
    if result.messages.is_empty() {
        result.add_message(CmdMessage::info(NONE_UPCOMING));
    }
    Ok(result)
}

/// Days from `today` until the birthday, or `None` when no date can be formed.
pub fn days_until(birthday: Birthday, today: NaiveDate, mode: BirthdayMode) -> Option<i64> {
    match mode {
        BirthdayMode::DayOfMonth => Some(i64::from(birthday.day) - i64::from(today.day())),
        BirthdayMode::Calendar => {
            let this_year = anniversary(birthday, today.year())?;
            let next = if this_year >= today {
                this_year
            } else {
                anniversary(birthday, today.year() + 1)?
            };
            Some((next - today).num_days())
        }
    }
}

fn anniversary(birthday: Birthday, year: i32) -> Option<NaiveDate> {
    let month = birthday.month.number();
    NaiveDate::from_ymd_opt(year, month, birthday.day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, birthday.day - 1))
}

fn in_days(days: i64) -> &'static str {
    match days {
        1 => "one day",
        2 => "two days",
        _ => "three days",
    }
}
