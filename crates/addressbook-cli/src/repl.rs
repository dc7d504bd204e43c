//! Interactive command loop.
//!
//! Reads one line at a time, lowercases the verb, dispatches to a handler
//! and pattern-matches the result into the view. One command is fully
//! processed before the next line is read; a handler error is shown to the
//! user and the loop keeps running.

use std::io::{self, BufRead, Write};

use addressbook_core::AddressBook;
use chrono::NaiveDate;
use tracing::debug;

use crate::commands::{self, Outcome};
use crate::view::View;

const PROMPT: &str = "Enter a command: ";

/// Run the assistant bot over `input` until `close`/`exit` or end of input.
pub fn run<R: BufRead>(
    mut input: R,
    book: &mut AddressBook,
    view: &mut dyn View,
    today: NaiveDate,
) -> io::Result<()> {
    view.display_message("Welcome to the assistant bot!");

    let mut line = String::new();
    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // end of input behaves like an exit
            break;
        }

        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            continue;
        };
        let verb = verb.to_lowercase();
        let args: Vec<&str> = parts.collect();
        debug!(verb = %verb, args = args.len(), "dispatching command");

        match verb.as_str() {
            "close" | "exit" => {
                view.display_message("Good bye!");
                break;
            }
            "hello" => view.display_message("How can I help you?"),
            "add" => present(view, commands::add_contact(&args, book)),
            "phone" => present(view, commands::show_phone(&args, book)),
            "all" => present(view, commands::show_all(book)),
            "add-birthday" => present(view, commands::add_birthday(&args, book)),
            "show-birthday" => present(view, commands::show_birthday(&args, book)),
            "birthdays" => present(view, commands::birthdays(book, today)),
            _ => view.display_message("Invalid command."),
        }
    }

    Ok(())
}

/// Render a handler result through the view.
fn present(view: &mut dyn View, result: Result<Outcome<'_>, commands::CommandError>) {
    match result {
        Ok(Outcome::Message(message)) => view.display_message(&message),
        Ok(Outcome::Contacts(contacts)) => view.display_contacts(&contacts),
        Ok(Outcome::Birthdays(entries)) => view.display_birthdays(&entries),
        Err(error) => view.display_message(&format!("Error: {error}")),
    }
}
