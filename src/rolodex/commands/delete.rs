use crate::commands::{lookup as lookup_by, CmdMessage, CmdResult, Lookup};
use crate::error::Result;
use crate::index::{resolve, Candidate, MatchPolicy};
use crate::store::DataStore;
use uuid::Uuid;

pub const AMBIGUOUS: &str = "Contacts with the same name found. Please select the contact to delete:";
pub const INVALID_ID: &str = "Invalid ID. No contact has been deleted.";

/// Finds contacts whose name equals `name`, ignoring case.
pub fn lookup<S: DataStore>(store: &S, name: &str) -> Result<Lookup> {
    lookup_by(store, name, MatchPolicy::Exact)
}

pub fn not_found(name: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "No contact with the name '{}' found.",
        name
    )))
}

pub fn run<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let contact = store.delete_contact(id)?;
    tracing::info!(id = %contact.id, "contact deleted");
    let message = CmdMessage::success(format!("{} has been deleted.", contact.name));
    Ok(CmdResult::default()
        .with_affected_contacts(vec![contact])
        .with_message(message))
}

/// Deletes the candidate the operator picked, or nothing if the pick is invalid.
pub fn run_selection<S: DataStore>(
    store: &mut S,
    candidates: &[Candidate],
    raw: &str,
) -> Result<CmdResult> {
    match resolve(candidates, raw) {
        Some(candidate) => run(store, &candidate.contact.id),
        None => {
            tracing::debug!(selection = raw, "invalid delete selection");
            Ok(CmdResult::default().with_message(CmdMessage::warning(INVALID_ID)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lookup_requires_whole_name() {
        let fixture = StoreFixture::new().with_contact("Johnathan");
        assert_eq!(lookup(&fixture.store, "john").unwrap(), Lookup::NotFound);
        assert!(matches!(
            lookup(&fixture.store, "JOHNATHAN").unwrap(),
            Lookup::Unique(_)
        ));
    }

    #[test]
    fn deletes_unique_match() {
        let mut fixture = StoreFixture::new().with_contact("Ann").with_contact("Bob");
        let Lookup::Unique(ann) = lookup(&fixture.store, "ann").unwrap() else {
            panic!("expected unique match");
        };
        let result = run(&mut fixture.store, &ann.id).unwrap();
        assert_eq!(result.messages[0].content, "Ann has been deleted.");
        assert_eq!(fixture.names(), ["Bob"]);
    }

    #[test]
    fn duplicate_names_need_a_selection() {
        let mut fixture = StoreFixture::new()
            .with_phone("Ann", "+11111111111")
            .with_contact("Bob")
            .with_phone("ann", "+22222222222");
        let Lookup::Ambiguous(candidates) = lookup(&fixture.store, "Ann").unwrap() else {
            panic!("expected ambiguous match");
        };
        assert_eq!(candidates.len(), 2);

        run_selection(&mut fixture.store, &candidates, "1").unwrap();
        let remaining = fixture.store.list_contacts().unwrap();
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].phone_number, "+11111111111");
        assert_eq!(remaining[1].name, "Bob");
    }

    #[test]
    fn invalid_selection_deletes_nothing() {
        let mut fixture = StoreFixture::new().with_contact("Ann").with_contact("Ann");
        let Lookup::Ambiguous(candidates) = lookup(&fixture.store, "ann").unwrap() else {
            panic!("expected ambiguous match");
        };

        for raw in ["2", "-1", "+1", " 0", "abc", ""] {
            let result = run_selection(&mut fixture.store, &candidates, raw).unwrap();
            assert_eq!(result.messages[0].content, INVALID_ID);
        }
        assert_eq!(fixture.names().len(), 2);
    }

    #[test]
    fn not_found_message_names_the_query() {
        assert_eq!(
            not_found("Zed").messages[0].content,
            "No contact with the name 'Zed' found."
        );
    }
}
