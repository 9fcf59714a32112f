//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every UI.
//! It dispatches to `commands/*.rs`, carries the loaded configuration, and returns
//! structured results. It holds no business logic and does no I/O.
//!
//! `RolodexApi<S: DataStore>` is generic over the store, so tests can hand it any
//! prepared [`InMemoryStore`](crate::store::memory::InMemoryStore).

use crate::commands::{self, search::SearchField};
use crate::config::RolodexConfig;
use crate::error::Result;
use crate::index::Candidate;
use crate::model::ContactFields;
use crate::store::DataStore;
use chrono::NaiveDate;
use uuid::Uuid;

pub struct RolodexApi<S: DataStore> {
    store: S,
    config: RolodexConfig,
}

impl<S: DataStore> RolodexApi<S> {
    pub fn new(store: S, config: RolodexConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &RolodexConfig {
        &self.config
    }

    pub fn create_contact(&mut self, fields: ContactFields) -> Result<CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_for_edit(&self, query: &str) -> Result<Lookup> {
        commands::edit::lookup(&self.store, query)
    }

    pub fn edit_contact(&mut self, id: &Uuid, edit: AttributeEdit) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, id, edit)
    }

    pub fn find_for_delete(&self, name: &str) -> Result<Lookup> {
        commands::delete::lookup(&self.store, name)
    }

    pub fn delete_contact(&mut self, id: &Uuid) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn delete_selected(&mut self, candidates: &[Candidate], raw: &str) -> Result<CmdResult> {
        commands::delete::run_selection(&mut self.store, candidates, raw)
    }

    pub fn search_contacts(&self, term: &str, by_notes: bool) -> Result<CmdResult> {
        let field = if by_notes {
            SearchField::Notes
        } else {
            SearchField::NameOrPhone
        };
        commands::search::run(&self.store, term, field)
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::birthdays::run(&self.store, today, self.config.birthday_mode)
    }
}

pub use commands::{AttributeEdit, CmdMessage, CmdResult, Lookup, MessageLevel, NotesEdit};
