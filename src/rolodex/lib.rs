//! # Rolodex Architecture
//!
//! Rolodex is a contact book whose decision logic lives in a UI-agnostic library. The
//! menu-driven binary is one client of it; tests are another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, tables, logging setup                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Matching, search, birthday proximity, mutations          │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field validation ([`validation`], [`calendar`], [`tags`]) sits beside the command
//! layer: pure predicates shared by the interactive prompts and by the commands, so an
//! edit never runs a lighter rule than creation did.
//!
//! ## Ambiguous matches
//!
//! Names are not unique. Whenever a query matches several contacts the caller gets the
//! ordered candidate list first and resolves the operator's raw selection with
//! [`index::resolve`]. See index.rs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: `Contact`, `Notes` and the attribute descriptor list
//! - [`index`]: Candidate indexing and selection
//! - [`validation`]: Per-attribute predicates
//! - [`calendar`]: Month lengths and leap years
//! - [`tags`]: Note tag naming rules
//! - [`prompt`]: Repeat-until-valid input collection
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod prompt;
pub mod store;
pub mod tags;
pub mod validation;
