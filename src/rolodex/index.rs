//! # Candidate Indexing
//!
//! Contact names are not unique, so any name lookup can come back with several
//! contacts. Resolving that is a two-step protocol:
//!
//! 1. [`find_candidates`] lists every contact the query matches, in store order, each
//!    tagged with a 0-based display index.
//! 2. [`resolve`] maps the operator's raw selection (the text they typed) back to one
//!    of those candidates, or to nothing if the text is not a number in range.
//!
//! The menu uses both steps when more than one contact matches; tests drive the same
//! functions directly.
//!
//! ## Match policies
//!
//! Editing and deleting deliberately match names differently:
//!
//! - edit uses [`MatchPolicy::Substring`]: `john` finds `Johnathan`
//! - delete uses [`MatchPolicy::Exact`]: only `johnathan` finds `Johnathan`
//!
//! Both ignore case.

use crate::model::Contact;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    Substring,
    Exact,
}

impl MatchPolicy {
    pub fn matches(&self, name: &str, query: &str) -> bool {
        let name = name.to_lowercase();
        let query = query.to_lowercase();
        match self {
            MatchPolicy::Substring => name.contains(&query),
            MatchPolicy::Exact => name == query,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub contact: Contact,
}

pub fn find_candidates(contacts: Vec<Contact>, query: &str, policy: MatchPolicy) -> Vec<Candidate> {
    contacts
        .into_iter()
        .filter(|c| policy.matches(&c.name, query))
        .enumerate()
        .map(|(index, contact)| Candidate { index, contact })
        .collect()
}

/// Picks the candidate whose index the operator typed.
///
/// Only plain decimal digits are accepted: no sign, no surrounding whitespace.
/// Anything else, or an index out of range, resolves to `None`.
pub fn resolve<'a>(candidates: &'a [Candidate], raw: &str) -> Option<&'a Candidate> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: usize = raw.parse().ok()?;
    candidates.get(index)
}
