use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::model::{Contact, ContactFields, ATTRIBUTES};
use crate::store::DataStore;
use crate::validation::{check, normalize_birthday};

/// Validates every field and appends the new contact.
///
/// Interactive callers have already validated each field while prompting; the
/// re-check keeps a contact from ever existing with a field that fails its rule.
pub fn run<S: DataStore>(store: &mut S, mut fields: ContactFields) -> Result<CmdResult> {
    for info in ATTRIBUTES {
        let value = fields.get(info.attribute);
        if !check(info.attribute, value) {
            return Err(RolodexError::InvalidField {
                attribute: info.attribute,
                value: value.to_string(),
            });
        }
    }
    fields.birthday = normalize_birthday(&fields.birthday);

    let contact = Contact::new(fields);
    store.add_contact(contact.clone())?;
    tracing::info!(id = %contact.id, "contact created");

    Ok(CmdResult::default()
        .with_affected_contacts(vec![contact])
        .with_message(CmdMessage::success("Contact has been created.")))
}
