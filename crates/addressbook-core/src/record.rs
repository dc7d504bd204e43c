//! Contact record aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{Birthday, Name, Phone};

/// One contact: a name, zero or more phones, and an optional birthday.
///
/// Phones keep insertion order and may repeat; there is no dedup policy.
/// A record is created with a name only and grows incrementally via
/// [`Record::add_phone`] and [`Record::set_birthday`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with the given name, no phones, no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// On failure the phone list is left untouched.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Validate `raw` and set it as the birthday, replacing any prior value.
    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        let birthday = Birthday::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidFormat;

    #[test]
    fn new_record_starts_empty() {
        let record = Record::new("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn new_record_rejects_empty_name() {
        assert_eq!(Record::new("").unwrap_err(), InvalidFormat::EmptyName);
    }

    #[test]
    fn add_phone_keeps_insertion_order_and_duplicates() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0667654321").unwrap();
        record.add_phone("0501234567").unwrap();

        let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, ["0501234567", "0667654321", "0501234567"]);
    }

    #[test]
    fn failed_add_phone_does_not_mutate() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        assert!(record.add_phone("nope").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn set_birthday_replaces_prior_value() {
        let mut record = Record::new("Alice").unwrap();
        record.set_birthday("01.01.1990").unwrap();
        record.set_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");

        assert!(record.set_birthday("31.02.1990").is_err());
        // a failed update keeps the previous birthday
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn display_matches_describe_format() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0667654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 0501234567; 0667654321"
        );

        record.set_birthday("10.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 0501234567; 0667654321, birthday: 10.06.1990"
        );
    }

    #[test]
    fn record_serialization_round_trips() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.set_birthday("10.06.1990").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, record);

        // invalid field values are rejected on the way in as well
        let bad = r#"{"name":"Alice","phones":["123"]}"#;
        assert!(serde_json::from_str::<Record>(bad).is_err());
    }
}
