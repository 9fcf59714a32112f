use crate::error::Result;
use crate::index::{find_candidates, Candidate, MatchPolicy};
use crate::model::{Attribute, Contact};
use crate::store::DataStore;

pub mod birthdays;
pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<Contact>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }
}

/// Outcome of looking a contact up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    NotFound,
    Unique(Contact),
    Ambiguous(Vec<Candidate>),
}

pub(crate) fn lookup<S: DataStore>(store: &S, query: &str, policy: MatchPolicy) -> Result<Lookup> {
    let mut candidates = find_candidates(store.list_contacts()?, query, policy);
    tracing::debug!(query, ?policy, matches = candidates.len(), "name lookup");
    Ok(match candidates.len() {
        0 => Lookup::NotFound,
        1 => Lookup::Unique(candidates.remove(0).contact),
        _ => Lookup::Ambiguous(candidates),
    })
}

/// What to do with a contact's notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesEdit {
    /// Replace the note text; empty text leaves it unchanged
    Edit(String),
    /// Clear the note text
    Delete,
    /// Replace the tags with a comma-separated list; an empty list leaves them unchanged
    Tag(String),
}

/// A change to exactly one attribute of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeEdit {
    Name(String),
    PhoneNumber(String),
    Email(String),
    Address(String),
    Birthday(String),
    Notes(NotesEdit),
}

impl AttributeEdit {
    pub fn attribute(&self) -> Attribute {
        match self {
            AttributeEdit::Name(_) => Attribute::Name,
            AttributeEdit::PhoneNumber(_) => Attribute::PhoneNumber,
            AttributeEdit::Email(_) => Attribute::Email,
            AttributeEdit::Address(_) => Attribute::Address,
            AttributeEdit::Birthday(_) => Attribute::Birthday,
            AttributeEdit::Notes(_) => Attribute::Notes,
        }
    }
}
