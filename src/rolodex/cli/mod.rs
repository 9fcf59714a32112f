//! Terminal client: argument parsing, logging setup, the menu loop and table output.
//! Everything here is binary-only; the library never prints.

pub(crate) mod args;
pub(crate) mod menu;
pub(crate) mod print;
pub(crate) mod setup;
