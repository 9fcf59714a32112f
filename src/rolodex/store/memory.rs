use super::DataStore;
use crate::error::{Result, RolodexError};
use crate::model::Contact;
use uuid::Uuid;

/// Ordered, in-memory contact storage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &Uuid) -> Result<usize> {
        self.contacts
            .iter()
            .position(|c| &c.id == id)
            .ok_or(RolodexError::ContactNotFound(*id))
    }
}

impl DataStore for InMemoryStore {
    fn add_contact(&mut self, contact: Contact) -> Result<()> {
        self.contacts.push(contact);
        Ok(())
    }

    fn save_contact(&mut self, contact: &Contact) -> Result<()> {
        let pos = self.position(&contact.id)?;
        self.contacts[pos] = contact.clone();
        Ok(())
    }

    fn get_contact(&self, id: &Uuid) -> Result<Contact> {
        let pos = self.position(id)?;
        Ok(self.contacts[pos].clone())
    }

    fn list_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn delete_contact(&mut self, id: &Uuid) -> Result<Contact> {
        let pos = self.position(id)?;
        Ok(self.contacts.remove(pos))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactFields;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(self, name: &str) -> Self {
            self.with_fields(ContactFields::named(name))
        }

        pub fn with_phone(self, name: &str, phone: &str) -> Self {
            self.with_fields(ContactFields {
                phone_number: phone.to_string(),
                ..ContactFields::named(name)
            })
        }

        pub fn with_notes(self, name: &str, notes: &str) -> Self {
            self.with_fields(ContactFields {
                notes: notes.to_string(),
                ..ContactFields::named(name)
            })
        }

        pub fn with_birthday(self, name: &str, birthday: &str) -> Self {
            self.with_fields(ContactFields {
                birthday: birthday.to_string(),
                ..ContactFields::named(name)
            })
        }

        pub fn with_fields(mut self, fields: ContactFields) -> Self {
            self.store.add_contact(Contact::new(fields)).unwrap();
            self
        }

        pub fn names(&self) -> Vec<String> {
            self.store
                .list_contacts()
                .unwrap()
                .into_iter()
                .map(|c| c.name)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactFields;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut store = InMemoryStore::new();
        for name in ["Zed", "Amy", "Zed"] {
            store
                .add_contact(Contact::new(ContactFields::named(name)))
                .unwrap();
        }
        let names: Vec<_> = store
            .list_contacts()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Zed", "Amy", "Zed"]);
    }

    #[test]
    fn save_replaces_in_place() {
        let mut store = InMemoryStore::new();
        let first = Contact::new(ContactFields::named("First"));
        let mut second = Contact::new(ContactFields::named("Second"));
        store.add_contact(first).unwrap();
        store.add_contact(second.clone()).unwrap();

        second.email = "s@example.com".into();
        store.save_contact(&second).unwrap();

        let all = store.list_contacts().unwrap();
        assert_eq!(all[1].email, "s@example.com");
        assert_eq!(all[0].name, "First");
    }

    #[test]
    fn delete_missing_contact_errors() {
        let mut store = InMemoryStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.delete_contact(&id),
            Err(RolodexError::ContactNotFound(missing)) if missing == id
        ));
    }
}
