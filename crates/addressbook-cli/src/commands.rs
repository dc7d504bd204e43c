//! Command handlers for the assistant bot.
//!
//! Each handler takes its arguments plus the address book and returns an
//! explicit `Result`: the dispatch layer pattern-matches on the outcome
//! and decides how to present it. Handlers never print and never touch
//! the process; the only failure modes are a field validation error or a
//! misused command line.

use addressbook_core::{AddressBook, InvalidFormat, Record, UpcomingBirthday};
use chrono::NaiveDate;
use thiserror::Error;

/// Why a command could not run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the verb
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// A field value was rejected by validation
    #[error(transparent)]
    Invalid(#[from] InvalidFormat),
}

/// What a successful command produced.
///
/// Borrowed record views keep `all`/`phone` allocation-free; the view layer
/// decides how to render each variant.
#[derive(Debug)]
pub enum Outcome<'a> {
    Message(String),
    Contacts(Vec<&'a Record>),
    Birthdays(Vec<UpcomingBirthday>),
}

fn two_args<'s>(args: &[&'s str], usage: &'static str) -> Result<(&'s str, &'s str), CommandError> {
    match args {
        &[a, b] => Ok((a, b)),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn one_arg<'s>(args: &[&'s str], usage: &'static str) -> Result<&'s str, CommandError> {
    match args {
        &[a] => Ok(a),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// `add NAME PHONE`: create the record if needed, then append the phone.
///
/// The record is inserted before the phone is validated, matching the
/// historical behavior where a bad phone still leaves the (empty) contact
/// in the book.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> Result<Outcome<'static>, CommandError> {
    let (name, phone) = two_args(args, "add NAME PHONE")?;

    if book.find(name).is_none() {
        book.add_record(Record::new(name)?);
    }
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }

    Ok(Outcome::Message("Contact added/updated.".to_string()))
}

/// `phone NAME`: show one contact, or report that it does not exist.
pub fn show_phone<'a>(
    args: &[&str],
    book: &'a AddressBook,
) -> Result<Outcome<'a>, CommandError> {
    let name = one_arg(args, "phone NAME")?;

    match book.find(name) {
        Some(record) => Ok(Outcome::Contacts(vec![record])),
        None => Ok(Outcome::Message("Contact not found.".to_string())),
    }
}

/// `all`: every record in the book.
pub fn show_all(book: &AddressBook) -> Result<Outcome<'_>, CommandError> {
    Ok(Outcome::Contacts(book.iter().collect()))
}

/// `add-birthday NAME DD.MM.YYYY`: set or replace a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> Result<Outcome<'static>, CommandError> {
    let (name, raw) = two_args(args, "add-birthday NAME DD.MM.YYYY")?;

    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(raw)?;
            Ok(Outcome::Message("Birthday added.".to_string()))
        }
        None => Ok(Outcome::Message("Contact not found.".to_string())),
    }
}

/// `show-birthday NAME`: one contact's birthday in canonical form.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> Result<Outcome<'static>, CommandError> {
    let name = one_arg(args, "show-birthday NAME")?;

    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => Ok(Outcome::Message(format!("{name}: {birthday}"))),
            None => Ok(Outcome::Message("Birthday not set.".to_string())),
        },
        None => Ok(Outcome::Message("Contact not found.".to_string())),
    }
}

/// `birthdays`: congratulation dates for the next seven days.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> Result<Outcome<'static>, CommandError> {
    Ok(Outcome::Birthdays(book.upcoming_birthdays(today)))
}
