//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between command logic and wherever contacts
//! live. Commands are generic over it, so they never depend on a concrete container.
//!
//! Contacts are held in memory only; [`memory::InMemoryStore`] is the single
//! implementation. A store must:
//!
//! - keep insertion order, which is the order every listing, search and candidate
//!   list is reported in
//! - allow duplicate names; contacts are told apart by their `id`

use crate::error::Result;
use crate::model::Contact;
use uuid::Uuid;

pub mod memory;

pub trait DataStore {
    /// Append a new contact
    fn add_contact(&mut self, contact: Contact) -> Result<()>;

    /// Replace the stored contact with the same id
    fn save_contact(&mut self, contact: &Contact) -> Result<()>;

    /// Get a contact by id
    fn get_contact(&self, id: &Uuid) -> Result<Contact>;

    /// All contacts, in insertion order
    fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Remove a contact, returning it
    fn delete_contact(&mut self, id: &Uuid) -> Result<Contact>;
}
