//! The interactive menu loop.
//!
//! Every handler reads through the [`Prompter`] and writes to its output, so a whole
//! session can be replayed from a string in tests. A handler returns `Ok(false)` when
//! input ran out mid-dialogue; the loop then ends like an exit.

use super::print::{render_contacts, render_messages, render_table};
use chrono::{Local, NaiveDate};
use rolodex::api::{AttributeEdit, CmdResult, Lookup, NotesEdit, RolodexApi};
use rolodex::commands::{delete, edit};
use rolodex::error::Result;
use rolodex::index::resolve;
use rolodex::model::{Attribute, Contact, ContactFields, ATTRIBUTES};
use rolodex::prompt::{attribute_prompt, Prompter};
use rolodex::store::DataStore;
use rolodex::tags::parse_tags;
use std::io::{BufRead, Write};

const MAIN_MENU: &str = "
Menu:
    1. Create a new contact
    2. Edit contact
    3. Find by coming birthday
    4. Display contacts
    5. Delete contact
    6. Search contacts by name or phone number
    7. Search contacts by notes
    0. Exit
Choose a number: ";

const ATTRIBUTE_MENU: &str = "Choose attribute to edit:
    1. Name
    2. Phone
    3. Email
    4. Address
    5. Birthday
    6. Notes
    0. Cancel
Your choice: ";

const NOTES_MENU: &str = "
1. Edit note.
2. Delete note.
3. Edit tags.
Your choice: ";

pub(crate) struct Menu<S: DataStore, R, W> {
    api: RolodexApi<S>,
    io: Prompter<R, W>,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<S: DataStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub(crate) fn new(api: RolodexApi<S>, io: Prompter<R, W>) -> Self {
        Self {
            api,
            io,
            today: local_today,
        }
    }

    #[cfg(test)]
    fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        self.io
            .say("Hello, I'm your contact book. I can help you organize your contacts.")?;
        loop {
            let Some(choice) = self.io.ask(MAIN_MENU)? else {
                return Ok(());
            };
            tracing::debug!(choice = choice.trim(), "menu choice");

            let more_input = match choice.trim() {
                "1" => self.create()?,
                "2" => self.edit()?,
                "3" => self.upcoming_birthdays()?,
                "4" => self.display()?,
                "5" => self.delete()?,
                "6" => self.search(false)?,
                "7" => self.search(true)?,
                "0" => return Ok(()),
                other => {
                    self.io
                        .say(&format!("Unknown option '{}'. Choose 0-7.", other))?;
                    true
                }
            };
            if !more_input {
                return Ok(());
            }
        }
    }

    fn report(&mut self, result: &CmdResult) -> Result<()> {
        write!(self.io.output(), "{}", render_messages(&result.messages))?;
        Ok(())
    }

    fn create(&mut self) -> Result<bool> {
        let mut fields = ContactFields::default();
        for info in ATTRIBUTES {
            let value = if info.attribute == Attribute::Notes {
                self.io.ask(&attribute_prompt(Attribute::Notes))?
            } else {
                self.io.prompt_attribute(info.attribute)?
            };
            let Some(value) = value else {
                return Ok(false);
            };
            match info.attribute {
                Attribute::Name => fields.name = value,
                Attribute::PhoneNumber => fields.phone_number = value,
                Attribute::Email => fields.email = value,
                Attribute::Address => fields.address = value,
                Attribute::Birthday => fields.birthday = value,
                Attribute::Notes => fields.notes = value,
            }
        }

        let result = self.api.create_contact(fields)?;
        self.report(&result)?;
        Ok(true)
    }

    fn edit(&mut self) -> Result<bool> {
        let Some(query) = self.io.ask("Enter contact name to edit: ")? else {
            return Ok(false);
        };

        let contact = match self.api.find_for_edit(&query)? {
            Lookup::NotFound => None,
            Lookup::Unique(contact) => Some(contact),
            Lookup::Ambiguous(candidates) => {
                let rows: Vec<Vec<String>> = candidates
                    .iter()
                    .map(|c| vec![c.index.to_string(), c.contact.name.clone()])
                    .collect();
                let table = render_table(&["№".to_string(), "Name".to_string()], &rows);
                write!(self.io.output(), "{}", table)?;

                let Some(raw) = self.io.ask("Choose number contact to change: ")? else {
                    return Ok(false);
                };
                resolve(&candidates, &raw).map(|c| c.contact.clone())
            }
        };

        match contact {
            Some(contact) => self.edit_attribute(&contact),
            None => {
                self.report(&edit::not_found())?;
                Ok(true)
            }
        }
    }

    fn edit_attribute(&mut self, contact: &Contact) -> Result<bool> {
        let Some(choice) = self.io.ask(ATTRIBUTE_MENU)? else {
            return Ok(false);
        };

        let (attribute, make_edit): (Attribute, fn(String) -> AttributeEdit) = match choice.trim() {
            "1" => (Attribute::Name, AttributeEdit::Name),
            "2" => (Attribute::PhoneNumber, AttributeEdit::PhoneNumber),
            "3" => (Attribute::Email, AttributeEdit::Email),
            "4" => (Attribute::Address, AttributeEdit::Address),
            "5" => (Attribute::Birthday, AttributeEdit::Birthday),
            "6" => return self.edit_notes(contact),
            _ => {
                self.io.say("Edit cancelled.")?;
                return Ok(true);
            }
        };

        let Some(value) = self.io.prompt_attribute(attribute)? else {
            return Ok(false);
        };
        let change = make_edit(value);
        let result = self.api.edit_contact(&contact.id, change)?;
        self.report(&result)?;
        Ok(true)
    }

    fn edit_notes(&mut self, contact: &Contact) -> Result<bool> {
        let Some(choice) = self.io.ask(NOTES_MENU)? else {
            return Ok(false);
        };

        let change = match choice.trim() {
            "1" => match self.io.ask("Please enter your new note: ")? {
                Some(text) => NotesEdit::Edit(text),
                None => return Ok(false),
            },
            "2" => NotesEdit::Delete,
            "3" => {
                let prompt = format!(
                    "Enter tags separated by commas (current: {}): ",
                    contact.notes.tags_display()
                );
                let line = self.io.prompt_until(
                    |line| parse_tags(line).is_ok(),
                    &prompt,
                    "Tags must start with a letter and use only letters, digits, '_' and '-'.",
                )?;
                match line {
                    Some(line) => NotesEdit::Tag(line),
                    None => return Ok(false),
                }
            }
            _ => {
                self.io.say("Edit cancelled.")?;
                return Ok(true);
            }
        };

        let result = self
            .api
            .edit_contact(&contact.id, AttributeEdit::Notes(change))?;
        self.report(&result)?;
        Ok(true)
    }

    fn upcoming_birthdays(&mut self) -> Result<bool> {
        let result = self.api.upcoming_birthdays((self.today)())?;
        self.report(&result)?;
        Ok(true)
    }

    fn display(&mut self) -> Result<bool> {
        let result = self.api.list_contacts()?;
        write!(
            self.io.output(),
            "{}",
            render_contacts(&result.listed_contacts)
        )?;
        Ok(true)
    }

    fn delete(&mut self) -> Result<bool> {
        let Some(name) = self
            .io
            .ask("Enter the name of the contact you want to delete: ")?
        else {
            return Ok(false);
        };

        let result = match self.api.find_for_delete(&name)? {
            Lookup::NotFound => delete::not_found(&name),
            Lookup::Unique(contact) => self.api.delete_contact(&contact.id)?,
            Lookup::Ambiguous(candidates) => {
                self.io.say(delete::AMBIGUOUS)?;
                let rows: Vec<Vec<String>> = candidates
                    .iter()
                    .map(|c| {
                        vec![
                            c.index.to_string(),
                            c.contact.name.clone(),
                            c.contact.phone_number.clone(),
                        ]
                    })
                    .collect();
                let headers = ["ID".to_string(), "Name".to_string(), "Phone".to_string()];
                write!(self.io.output(), "{}", render_table(&headers, &rows))?;

                let Some(raw) = self.io.ask("Enter the ID of the contact to delete: ")? else {
                    return Ok(false);
                };
                self.api.delete_selected(&candidates, &raw)?
            }
        };
        self.report(&result)?;
        Ok(true)
    }

    fn search(&mut self, by_notes: bool) -> Result<bool> {
        let prompt = if by_notes {
            "Enter the notes to search for: "
        } else {
            "Enter the name or phone number to search for: "
        };
        let Some(term) = self.io.ask(prompt)? else {
            return Ok(false);
        };

        let result = self.api.search_contacts(&term, by_notes)?;
        if !result.listed_contacts.is_empty() {
            let heading = if by_notes {
                "Search results by notes:"
            } else {
                "Search results:"
            };
            self.io.say(&format!("\n{}", heading))?;
            write!(
                self.io.output(),
                "{}",
                render_contacts(&result.listed_contacts)
            )?;
        }
        self.report(&result)?;
        Ok(true)
    }
}
