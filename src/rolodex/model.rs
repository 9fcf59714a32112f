use std::fmt;
use uuid::Uuid;

/// The attributes a contact carries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    PhoneNumber,
    Email,
    Address,
    Birthday,
    Notes,
}

/// Label and example hint for one attribute. Used for prompts and table headers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeInfo {
    pub attribute: Attribute,
    pub label: &'static str,
    pub key: &'static str,
    pub example: Option<&'static str>,
}

pub static ATTRIBUTES: &[AttributeInfo] = &[
    AttributeInfo {
        attribute: Attribute::Name,
        label: "name",
        key: "name",
        example: None,
    },
    AttributeInfo {
        attribute: Attribute::PhoneNumber,
        label: "phone number",
        key: "phone_number",
        example: None,
    },
    AttributeInfo {
        attribute: Attribute::Email,
        label: "email address",
        key: "email",
        example: None,
    },
    AttributeInfo {
        attribute: Attribute::Address,
        label: "address",
        key: "address",
        example: Some("USA, New-York, Wall-Street, 23a"),
    },
    AttributeInfo {
        attribute: Attribute::Birthday,
        label: "birthday date",
        key: "birthday",
        example: Some("2004 23 May"),
    },
    AttributeInfo {
        attribute: Attribute::Notes,
        label: "notes",
        key: "notes",
        example: None,
    },
];

impl Attribute {
    pub fn info(&self) -> &'static AttributeInfo {
        // ATTRIBUTES is declared in enum order
        &ATTRIBUTES[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of [`Notes::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesOutcome {
    Deleted,
    NothingToDelete,
}

impl NotesOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            NotesOutcome::Deleted => "Notes have been deleted.",
            NotesOutcome::NothingToDelete => "There are no notes.",
        }
    }
}

/// Free-text notes with optional tags.
///
/// Assigning an empty value or an empty tag list leaves the previous one in place;
/// clearing the text is only possible through [`Notes::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    value: String,
    tags: Vec<String>,
}

impl Notes {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tags: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.value = value;
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        if !tags.is_empty() {
            self.tags = tags;
        }
    }

    pub fn tags_display(&self) -> String {
        if self.tags.is_empty() {
            "There are no tags.".to_string()
        } else {
            self.tags.join(", ")
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn delete(&mut self) -> NotesOutcome {
        if self.value.is_empty() {
            NotesOutcome::NothingToDelete
        } else {
            self.value.clear();
            NotesOutcome::Deleted
        }
    }
}

/// Raw field values for a new contact, as collected by a UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub birthday: String,
    pub notes: String,
}

impl ContactFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Name => &self.name,
            Attribute::PhoneNumber => &self.phone_number,
            Attribute::Email => &self.email,
            Attribute::Address => &self.address,
            Attribute::Birthday => &self.birthday,
            Attribute::Notes => &self.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub birthday: String,
    pub notes: Notes,
}

impl Contact {
    pub fn new(fields: ContactFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            phone_number: fields.phone_number,
            email: fields.email,
            address: fields.address,
            birthday: fields.birthday,
            notes: Notes::new(fields.notes),
        }
    }

    /// The displayed fields, in [`ATTRIBUTES`] order.
    pub fn row(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.phone_number.clone(),
            self.email.clone(),
            self.address.clone(),
            self.birthday.clone(),
            self.notes.value().to_string(),
        ]
    }
}
