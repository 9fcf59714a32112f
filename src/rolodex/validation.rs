//! # Field Validation
//!
//! Every attribute a contact can carry has a predicate here. Predicates are pure: they
//! take the raw text exactly as the operator typed it and answer `true` or `false`.
//! They never fail and never normalize; rejected input is handled by asking again
//! (see [`crate::prompt`]).
//!
//! ## Empty values
//!
//! Only the name is mandatory. Every other attribute accepts the empty string as
//! "not provided", and its structural rule is skipped entirely. That policy is written
//! once, in [`allow_empty_or`], and wrapped around each optional rule.
//!
//! ## Birthdays
//!
//! Birthdays are written `YEAR DAY MONTH` (`2004 23 May`). The year must lie between
//! [`MIN_BIRTH_YEAR`] and the current year, the month name is matched ignoring case, and
//! the day must exist in that month, counting 29 February only in leap years.

use crate::calendar::{days_in_month, is_leap_year, Month};
use crate::model::Attribute;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_BIRTH_YEAR: i32 = 1920;

static PHONE_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"^\+[0-9]{1,4} [0-9]{3} [0-9]{2} [0-9]{2} [0-9]{2}$")
            .expect("valid spaced phone regex"),
        Regex::new(r"^\+[0-9]{1,4}-[0-9]{3}-[0-9]{2}-[0-9]{2}-[0-9]{2}$")
            .expect("valid hyphenated phone regex"),
        Regex::new(r"^\+[0-9]{10,12}$").expect("valid compact phone regex"),
    ]
});

// The local part starts with a word character; dots, signs and percents may follow.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9._%+-]*@[A-Za-z0-9.-]+\.[A-Za-z]{2,7}$")
        .expect("valid email regex")
});

/// A composed validator for one attribute.
pub type Rule = Box<dyn Fn(&str) -> bool + Send + Sync>;

static ADDRESS_RULE: Lazy<Rule> = Lazy::new(|| allow_empty_or(|_| true));

static PHONE_RULE: Lazy<Rule> =
    Lazy::new(|| allow_empty_or(|t| PHONE_PATTERNS.iter().any(|p| p.is_match(t))));

static EMAIL_RULE: Lazy<Rule> = Lazy::new(|| allow_empty_or(|t| EMAIL_PATTERN.is_match(t)));

/// Wraps `rule` so that an empty input is accepted without consulting it.
pub fn allow_empty_or<F>(rule: F) -> Rule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Box::new(move |text| text.is_empty() || rule(text))
}

/// At least two characters, none of them an ASCII digit or punctuation mark.
///
/// Names are mandatory, so the empty string is rejected like any other short input.
pub fn valid_as_name(text: &str) -> bool {
    text.chars().count() >= 2
        && !text
            .chars()
            .any(|c| c.is_ascii_digit() || c.is_ascii_punctuation())
}

pub fn valid_as_address(text: &str) -> bool {
    (*ADDRESS_RULE)(text)
}

pub fn valid_as_phone_number(text: &str) -> bool {
    (*PHONE_RULE)(text)
}

pub fn valid_as_email(text: &str) -> bool {
    (*EMAIL_RULE)(text)
}

/// Checks a birthday against today's date.
pub fn valid_as_birthday(text: &str) -> bool {
    valid_as_birthday_on(text, Local::now().date_naive())
}

/// Checks a birthday against an explicit reference date.
///
/// The year ceiling moves with `today`, so this rule is composed per call.
pub fn valid_as_birthday_on(text: &str, today: NaiveDate) -> bool {
    let current_year = today.year();
    allow_empty_or(move |t| {
        Birthday::parse(t).is_some_and(|b| b.year >= MIN_BIRTH_YEAR && b.year <= current_year)
    })(text)
}

pub fn valid_as_notes(_text: &str) -> bool {
    true
}

/// Dispatches to the predicate for `attribute`.
///
/// Creation and single-attribute edits both go through this, so an edit is held to
/// exactly the rule the value would have faced at creation.
pub fn check(attribute: Attribute, text: &str) -> bool {
    match attribute {
        Attribute::Name => valid_as_name(text),
        Attribute::PhoneNumber => valid_as_phone_number(text),
        Attribute::Email => valid_as_email(text),
        Attribute::Address => valid_as_address(text),
        Attribute::Birthday => valid_as_birthday(text),
        Attribute::Notes => valid_as_notes(text),
    }
}

/// Capitalizes the first letter of every word and lower-cases the rest, leaving digits
/// and whitespace where they are. `2004 23 may` becomes `2004 23 May`.
pub fn normalize_birthday(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// A birthday split into its three parts.
///
/// Parsing checks shape and calendar validity (the day exists in that month and year)
/// but not the year range; that depends on the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    pub year: i32,
    pub day: u32,
    pub month: Month,
}

impl Birthday {
    pub fn parse(text: &str) -> Option<Birthday> {
        let mut tokens = text.split_whitespace();
        let (year, day, month) = (tokens.next()?, tokens.next()?, tokens.next()?);
        if tokens.next().is_some() {
            return None;
        }

        let year: i32 = year.parse().ok()?;
        let day: i64 = day.parse().ok()?;
        let month = Month::from_name(month)?;

        let leap_day = u32::from(month == Month::February && is_leap_year(year));
        let last_day = i64::from(days_in_month(month) + leap_day);
        if day < 1 || day > last_day {
            return None;
        }

        Some(Birthday {
            year,
            day: day as u32,
            month,
        })
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number(), self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_name_rules() {
        assert!(valid_as_name("Al"));
        assert!(valid_as_name("Anna Maria"));
        assert!(!valid_as_name("A"));
        assert!(!valid_as_name(""));
        assert!(!valid_as_name("A1"));
        assert!(!valid_as_name("O'Brien"));
        assert!(!valid_as_name("Jean-Luc"));
        assert!(!valid_as_name("bob."));
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        assert!(!valid_as_name("é"));
        assert!(valid_as_name("Zoë"));
    }

    #[test]
    fn test_empty_exemption() {
        assert!(valid_as_address(""));
        assert!(valid_as_phone_number(""));
        assert!(valid_as_email(""));
        assert!(valid_as_birthday(""));
        assert!(!valid_as_name(""));
    }

    #[test]
    fn test_allow_empty_or_skips_rule() {
        let never = allow_empty_or(|_| false);
        assert!(never(""));
        assert!(!never("x"));
    }

    #[test]
    fn test_address_accepts_anything() {
        assert!(valid_as_address("USA, New-York, Wall-Street, 23a"));
        assert!(valid_as_address("?"));
    }

    #[test]
    fn test_phone_formats() {
        assert!(valid_as_phone_number("+1 234 56 78 90"));
        assert!(valid_as_phone_number("+380 234 56 78 90"));
        assert!(valid_as_phone_number("+1-234-56-78-90"));
        assert!(valid_as_phone_number("+12345678901"));
        assert!(valid_as_phone_number("+1234567890"));
        assert!(valid_as_phone_number("+123456789012"));
    }

    #[test]
    fn test_phone_rejections() {
        assert!(!valid_as_phone_number("12345"));
        assert!(!valid_as_phone_number("+123456789"));
        assert!(!valid_as_phone_number("+1234567890123"));
        assert!(!valid_as_phone_number("+1 234-56 78 90"));
        assert!(!valid_as_phone_number("+12345 234 56 78 90"));
        // full match only
        assert!(!valid_as_phone_number("call +12345678901"));
        assert!(!valid_as_phone_number("+12345678901 "));
    }

    #[test]
    fn test_email() {
        assert!(valid_as_email("a@b.com"));
        assert!(valid_as_email("first.last+tag@mail.example.ORG"));
        assert!(!valid_as_email("a@@b.com"));
        assert!(!valid_as_email("a@b"));
        assert!(!valid_as_email("a@b.c"));
        assert!(!valid_as_email("a@b.abcdefgh"));
        assert!(!valid_as_email("a b@c.com"));
        assert!(!valid_as_email("a@b.c|m"));
    }

    #[test]
    fn test_email_local_part_starts_with_word_character() {
        for rejected in [".a@b.com", "%a@b.com", "-a@b.com", "+a@b.com"] {
            assert!(!valid_as_email(rejected), "{rejected} should be rejected");
        }
        assert!(valid_as_email("_a@b.com"));
        assert!(valid_as_email("a.b%c+d-e@b.com"));
        assert!(valid_as_email("7@b.com"));
    }

    #[test]
    fn test_static_rules_accept_empty() {
        assert!((*PHONE_RULE)(""));
        assert!(!(*PHONE_RULE)("12345"));
        assert!((*EMAIL_RULE)(""));
        assert!((*ADDRESS_RULE)("anything"));
    }

    #[test]
    fn test_birthday_examples() {
        let today = today();
        assert!(valid_as_birthday_on("2004 23 May", today));
        assert!(valid_as_birthday_on("2004 23 may", today));
        assert!(!valid_as_birthday_on("1919 1 May", today));
        assert!(valid_as_birthday_on("1920 1 May", today));
        assert!(!valid_as_birthday_on("2004 32 May", today));
        assert!(!valid_as_birthday_on("2004 0 May", today));
        assert!(valid_as_birthday_on("2000 29 February", today));
        assert!(!valid_as_birthday_on("2001 29 February", today));
        assert!(!valid_as_birthday_on("2000 30 February", today));
    }

    #[test]
    fn test_birthday_year_ceiling_follows_today() {
        let today = today();
        assert!(valid_as_birthday_on("2024 1 May", today));
        assert!(!valid_as_birthday_on("2025 1 May", today));
    }

    #[test]
    fn test_leap_day_only_extends_february() {
        let today = today();
        assert!(!valid_as_birthday_on("2000 31 April", today));
        assert!(!valid_as_birthday_on("2000 32 January", today));
    }

    #[test]
    fn test_birthday_shape() {
        let today = today();
        assert!(!valid_as_birthday_on("2004 May", today));
        assert!(!valid_as_birthday_on("2004 23 May extra", today));
        assert!(!valid_as_birthday_on("two 23 May", today));
        assert!(!valid_as_birthday_on("2004 x May", today));
        assert!(!valid_as_birthday_on("2004 23 Mai", today));
        assert!(!valid_as_birthday_on("23 May 2004", today));
    }

    #[test]
    fn test_normalize_birthday() {
        assert_eq!(normalize_birthday("2004 23 may"), "2004 23 May");
        assert_eq!(normalize_birthday("2004 23 MAY"), "2004 23 May");
        assert_eq!(normalize_birthday("2004 23 May"), "2004 23 May");
        assert_eq!(normalize_birthday(""), "");
    }

    #[test]
    fn test_parse_birthday() {
        let b = Birthday::parse("2000 29 february").unwrap();
        assert_eq!(b.year, 2000);
        assert_eq!(b.day, 29);
        assert_eq!(b.month, Month::February);
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(2000, 2, 29));
        assert!(Birthday::parse("").is_none());
    }

    #[test]
    fn test_check_dispatch() {
        assert!(check(Attribute::Name, "Al"));
        assert!(!check(Attribute::Name, ""));
        assert!(check(Attribute::PhoneNumber, ""));
        assert!(!check(Attribute::Email, "nope"));
        assert!(check(Attribute::Notes, "anything at all"));
    }
}
