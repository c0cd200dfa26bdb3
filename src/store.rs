//! In-memory profile storage backing the demo API.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub user_id: u64,
    pub display_name: String,
    pub email_address: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/user-profiles`, after its keys were normalized to snake case.
#[derive(Debug, Deserialize, Validate)]
pub struct NewProfile {
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email_address: String,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    profiles: BTreeMap<u64, Profile>,
}

/// Cloneable handle to the shared profile map.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    inner: Arc<RwLock<Inner>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a few profiles.
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        for (name, email) in [
            ("Ada Lovelace", "ada@example.com"),
            ("Alan Turing", "alan@example.com"),
            ("Grace Hopper", "grace@example.com"),
        ] {
            inner.insert(NewProfile {
                display_name: name.to_string(),
                email_address: email.to_string(),
            });
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    pub async fn list(&self) -> Vec<Profile> {
        self.inner.read().await.profiles.values().cloned().collect()
    }

    pub async fn get(&self, user_id: u64) -> Option<Profile> {
        self.inner.read().await.profiles.get(&user_id).cloned()
    }

    /// First profile matching `predicate`.
    pub async fn find(&self, predicate: impl Fn(&Profile) -> bool) -> Option<Profile> {
        self.inner
            .read()
            .await
            .profiles
            .values()
            .find(|profile| predicate(profile))
            .cloned()
    }

    pub async fn create(&self, new: NewProfile) -> Profile {
        self.inner.write().await.insert(new)
    }
}

impl Inner {
    fn insert(&mut self, new: NewProfile) -> Profile {
        self.next_id += 1;
        let profile = Profile {
            user_id: self.next_id,
            display_name: new.display_name,
            email_address: new.email_address,
            created_at: Utc::now(),
        };
        self.profiles.insert(profile.user_id, profile.clone());
        profile
    }
}
