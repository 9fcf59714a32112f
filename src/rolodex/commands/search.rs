use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;

/// Which fields a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    NameOrPhone,
    Notes,
}

/// Case-insensitive substring search, reported in store order.
///
/// The term is trimmed and lower-cased first. Notes search only considers contacts
/// that actually have notes.
pub fn run<S: DataStore>(store: &S, term: &str, field: SearchField) -> Result<CmdResult> {
    let needle = term.trim().to_lowercase();

    let matches: Vec<Contact> = store
        .list_contacts()?
        .into_iter()
        .filter(|c| match field {
            SearchField::NameOrPhone => {
                c.name.to_lowercase().contains(&needle)
                    || (!c.phone_number.is_empty() && c.phone_number.contains(&needle))
            }
            SearchField::Notes => {
                !c.notes.is_empty() && c.notes.value().to_lowercase().contains(&needle)
            }
        })
        .collect();
    tracing::debug!(term = %needle, ?field, matches = matches.len(), "search");

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(match field {
            SearchField::Notes => format!("No contacts found with notes containing '{}'.", needle),
            SearchField::NameOrPhone => format!("No contacts found for '{}'.", term),
        }));
    }
    Ok(result.with_listed_contacts(matches))
}
