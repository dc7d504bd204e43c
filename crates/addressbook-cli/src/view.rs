//! Presentation capability for the assistant bot.
//!
//! Handlers never print; the REPL hands their results to a [`View`].
//! Swapping in a different front end (a network or file-based presenter)
//! means implementing this trait, nothing else.

use addressbook_core::{Record, UpcomingBirthday};

/// Everything a front end must be able to show.
pub trait View {
    fn display_message(&mut self, message: &str);
    fn display_contacts(&mut self, contacts: &[&Record]);
    fn display_birthdays(&mut self, birthdays: &[UpcomingBirthday]);
}

/// Console front end: one line per item on stdout.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl View for ConsoleView {
    fn display_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn display_contacts(&mut self, contacts: &[&Record]) {
        if contacts.is_empty() {
            self.display_message("No contacts found.");
        } else {
            for record in contacts {
                println!("{record}");
            }
        }
    }

    fn display_birthdays(&mut self, birthdays: &[UpcomingBirthday]) {
        if birthdays.is_empty() {
            self.display_message("No upcoming birthdays.");
        } else {
            for entry in birthdays {
                println!("{}: {}", entry.name, entry.congratulation_date);
            }
        }
    }
}
