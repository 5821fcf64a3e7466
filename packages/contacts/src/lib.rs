#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Emergency contact registry and the national helpline directory.
//!
//! Personal contacts persist through the `sakhi_store` seam under a
//! single key; the helpline directory ships fixed with the crate.

use sakhi_store::{KeyValueStore, StoreError, load_record, save_record};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Storage key for the persisted contact list.
pub const CONTACTS_KEY: &str = "emergencyContacts";

/// Relationship recorded when none is given.
const DEFAULT_RELATIONSHIP: &str = "Contact";

/// Errors from contact registry operations.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Name or phone number was blank.
    #[error("name and phone number are required")]
    MissingField,

    /// The underlying store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// A fixed national helpline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Helpline {
    pub name: &'static str,
    pub number: &'static str,
}

/// National emergency numbers shown alongside personal contacts.
pub const HELPLINES: &[Helpline] = &[
    Helpline {
        name: "Police",
        number: "100",
    },
    Helpline {
        name: "Fire Department",
        number: "101",
    },
    Helpline {
        name: "Hospital Emergency",
        number: "102",
    },
    Helpline {
        name: "Women Helpline",
        number: "1091",
    },
];

/// A personally registered emergency contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Random identifier assigned at registration.
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Relationship to the owner, e.g. "Sister".
    pub relationship: String,
}

/// Personal contact registry persisted through the store seam.
#[derive(Clone, Copy)]
pub struct ContactRegistry<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ContactRegistry<'a> {
    /// Creates a registry over the given store.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Lists registered contacts in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] if the store fails or holds malformed
    /// data.
    pub async fn list(&self) -> Result<Vec<EmergencyContact>, ContactError> {
        Ok(load_record(self.store, CONTACTS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Registers a contact and returns it with its assigned id.
    ///
    /// Name and phone are required; a blank relationship is recorded as
    /// "Contact".
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] when name or phone is
    /// blank, or a store error.
    pub async fn add(
        &self,
        name: &str,
        phone: &str,
        relationship: &str,
    ) -> Result<EmergencyContact, ContactError> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(ContactError::MissingField);
        }

        let relationship = relationship.trim();
        let contact = EmergencyContact {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            relationship: if relationship.is_empty() {
                DEFAULT_RELATIONSHIP.to_string()
            } else {
                relationship.to_string()
            },
        };

        let mut contacts = self.list().await?;
        contacts.push(contact.clone());
        save_record(self.store, CONTACTS_KEY, &contacts).await?;
        Ok(contact)
    }

    /// Removes the contact with the given id, reporting whether anything
    /// was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] if the store fails.
    pub async fn remove(&self, id: &str) -> Result<bool, ContactError> {
        let mut contacts = self.list().await?;
        let before = contacts.len();
        contacts.retain(|contact| contact.id != id);
        if contacts.len() == before {
            return Ok(false);
        }

        save_record(self.store, CONTACTS_KEY, &contacts).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakhi_store::MemoryStore;

    #[test]
    fn helpline_directory_is_fixed() {
        assert_eq!(HELPLINES.len(), 4);
        assert_eq!(HELPLINES[0].name, "Police");
        assert_eq!(HELPLINES[0].number, "100");
        assert_eq!(HELPLINES[3].number, "1091");
    }

    #[tokio::test]
    async fn contacts_persist_in_insertion_order() {
        let store = MemoryStore::new();
        let registry = ContactRegistry::new(&store);

        registry.add("Mom", "919324100000", "Mother").await.unwrap();
        registry.add("Asha", "918828300000", "").await.unwrap();

        let contacts = registry.list().await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Mom");
        assert_eq!(contacts[0].relationship, "Mother");
        assert_eq!(contacts[1].name, "Asha");
        assert_eq!(contacts[1].relationship, "Contact");
        assert_ne!(contacts[0].id, contacts[1].id);
    }

    #[tokio::test]
    async fn blank_name_or_phone_is_rejected() {
        let store = MemoryStore::new();
        let registry = ContactRegistry::new(&store);

        assert!(matches!(
            registry.add("", "12345", "").await,
            Err(ContactError::MissingField)
        ));
        assert!(matches!(
            registry.add("Asha", "   ", "").await,
            Err(ContactError::MissingField)
        ));
        assert!(registry.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_reports_whether_a_contact_existed() {
        let store = MemoryStore::new();
        let registry = ContactRegistry::new(&store);

        let contact = registry.add("Asha", "12345", "").await.unwrap();
        assert!(registry.remove(&contact.id).await.unwrap());
        assert!(!registry.remove(&contact.id).await.unwrap());
        assert!(registry.list().await.unwrap().is_empty());
    }
}
