use crate::error::StoreError;
use crate::models::UserRecord;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Identity attributes supplied by the identity provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl Identity {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }
}

/// Fields written by an upsert. `None` leaves an existing value alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpsert {
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// External user record store, keyed by email
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn upsert(&self, user: UserUpsert) -> Result<UserRecord, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// Store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn upsert(&self, user: UserUpsert) -> Result<UserRecord, StoreError> {
        let now = Utc::now();
        let mut users = self.users.write().await;

        let record = users
            .entry(user.email.clone())
            .and_modify(|existing| {
                if let Some(name) = &user.name {
                    existing.name = Some(name.clone());
                }
                if let Some(avatar) = &user.avatar {
                    existing.avatar = Some(avatar.clone());
                }
                existing.updated_at = now;
            })
            .or_insert_with(|| {
                debug!(email = %user.email, "Creating user record");
                UserRecord {
                    id: Uuid::new_v4(),
                    name: user.name.clone(),
                    email: user.email.clone(),
                    avatar: user.avatar.clone(),
                    created_at: now,
                    updated_at: now,
                }
            });

        Ok(record.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}
