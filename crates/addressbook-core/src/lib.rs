//! # Addressbook Core Library
//!
//! Core business logic for the addressbook assistant: validated contact
//! fields, contact records, the in-memory address book, and the
//! upcoming-birthday scheduler. The interactive command loop and all
//! presentation live in the CLI crate; this library performs no I/O and
//! never prints.
//!
//! ## Key Components
//!
//! - [`Name`], [`Phone`], [`Birthday`]: validated field newtypes
//! - [`Record`]: one contact's name, phones, and optional birthday
//! - [`AddressBook`]: name-keyed record store
//! - [`upcoming_birthdays`]: the seven-day congratulation window query

pub mod birthdays;
pub mod book;
pub mod error;
pub mod field;
pub mod record;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use book::AddressBook;
pub use error::{InvalidFormat, Result};
pub use field::{Birthday, Name, Phone};
pub use record::Record;
