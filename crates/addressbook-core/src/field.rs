//! Validated field newtypes for contact records.
//!
//! Each field type enforces its format rule exactly once, at construction.
//! A value that fails validation is returned to the caller inside
//! [`InvalidFormat`] and never stored, so any field you can hold is valid
//! by construction.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidFormat, Result};

/// A contact's name. Non-empty; the unique key inside an address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validate and wrap a raw name.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidFormat::EmptyName);
        }
        Ok(Name(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = InvalidFormat;

    fn try_from(raw: String) -> Result<Self> {
        Name::new(raw)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}

/// A phone number: exactly 10 ASCII decimal digits, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Validate and wrap a raw phone number.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.len() != 10 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidFormat::Phone { value: raw });
        }
        Ok(Phone(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = InvalidFormat;

    fn from_str(raw: &str) -> Result<Self> {
        Phone::new(raw)
    }
}

impl TryFrom<String> for Phone {
    type Error = InvalidFormat;

    fn try_from(raw: String) -> Result<Self> {
        Phone::new(raw)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> String {
        phone.0
    }
}

/// A birthday, parsed strictly from `DD.MM.YYYY` and stored as a calendar
/// date. The canonical textual form is recoverable via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse and validate a raw birthday string.
    ///
    /// The pattern is stricter than chrono's `%d.%m.%Y`, which tolerates
    /// one-digit day and month: here every component must have its exact
    /// width, and the components must denote a real calendar date.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || InvalidFormat::Birthday {
            value: raw.to_string(),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

        let mut parts = raw.split('.');
        let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(d), Some(m), Some(y), None)
                if d.len() == 2
                    && m.len() == 2
                    && y.len() == 4
                    && all_digits(d)
                    && all_digits(m)
                    && all_digits(y) =>
            {
                let d: u32 = d.parse().map_err(|_| invalid())?;
                let m: u32 = m.parse().map_err(|_| invalid())?;
                let y: i32 = y.parse().map_err(|_| invalid())?;
                (d, m, y)
            }
            _ => return Err(invalid()),
        };

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
        Ok(Birthday(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

impl FromStr for Birthday {
    type Err = InvalidFormat;

    fn from_str(raw: &str) -> Result<Self> {
        Birthday::parse(raw)
    }
}

impl TryFrom<String> for Birthday {
    type Error = InvalidFormat;

    fn try_from(raw: String) -> Result<Self> {
        Birthday::parse(&raw)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> String {
        birthday.to_string()
    }
}
