use crate::commands::{lookup as lookup_by, AttributeEdit, CmdMessage, CmdResult, Lookup, NotesEdit};
use crate::error::{Result, RolodexError};
use crate::index::MatchPolicy;
use crate::model::NotesOutcome;
use crate::store::DataStore;
use crate::tags::parse_tags;
use crate::validation::{check, normalize_birthday};
use uuid::Uuid;

pub const NOT_FOUND: &str = "Contact not found. Please try again.";
pub const SAVED: &str = "Changes have been saved";

/// Finds contacts whose name contains `query`, ignoring case.
pub fn lookup<S: DataStore>(store: &S, query: &str) -> Result<Lookup> {
    lookup_by(store, query, MatchPolicy::Substring)
}

/// Result reported when a lookup or selection did not land on a contact.
pub fn not_found() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(NOT_FOUND))
}

/// Applies a single-attribute edit to the contact with `id`.
///
/// The new value must pass the same rule it would at creation. Nothing is written
/// when it does not.
pub fn run<S: DataStore>(store: &mut S, id: &Uuid, edit: AttributeEdit) -> Result<CmdResult> {
    let mut contact = store.get_contact(id)?;
    let attribute = edit.attribute();
    let mut result = CmdResult::default();

    let ensure_valid = |value: &str| -> Result<()> {
        if check(attribute, value) {
            Ok(())
        } else {
            Err(RolodexError::InvalidField {
                attribute,
                value: value.to_string(),
            })
        }
    };

    match edit {
        AttributeEdit::Name(value) => {
            ensure_valid(&value)?;
            contact.name = value;
        }
        AttributeEdit::PhoneNumber(value) => {
            ensure_valid(&value)?;
            contact.phone_number = value;
        }
        AttributeEdit::Email(value) => {
            ensure_valid(&value)?;
            contact.email = value;
        }
        AttributeEdit::Address(value) => {
            ensure_valid(&value)?;
            contact.address = value;
        }
        AttributeEdit::Birthday(value) => {
            ensure_valid(&value)?;
            contact.birthday = normalize_birthday(&value);
        }
        AttributeEdit::Notes(NotesEdit::Edit(value)) => contact.notes.set_value(value),
        AttributeEdit::Notes(NotesEdit::Delete) => {
            let outcome = contact.notes.delete();
            result.add_message(match outcome {
                NotesOutcome::Deleted => CmdMessage::success(outcome.message()),
                NotesOutcome::NothingToDelete => CmdMessage::info(outcome.message()),
            });
        }
        AttributeEdit::Notes(NotesEdit::Tag(line)) => contact.notes.set_tags(parse_tags(&line)?),
    }

    store.save_contact(&contact)?;
    tracing::info!(id = %contact.id, %attribute, "contact edited");

    result.add_message(CmdMessage::success(SAVED));
    Ok(result.with_affected_contacts(vec![contact]))
}
