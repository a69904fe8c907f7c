//! Job application store.
//!
//! [`JobStore`] mirrors the operations the hosted record store exposes to the
//! board. Every call is scoped to the signed-in user.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::job::{JobApplication, JobError, JobStatus, NewJobApplication};

/// Identifier issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("User not authenticated")]
    Unauthorized,
    #[error("Job application not found: {0}")]
    NotFound(Uuid),
    #[error(transparent)]
    Invalid(#[from] JobError),
}

#[async_trait]
pub trait JobStore: std::fmt::Debug + Send + Sync {
    /// The user's applications, newest first.
    async fn list(&self, user: &UserId) -> Result<Vec<JobApplication>, StoreError>;

    async fn add(&self, user: &UserId, new: NewJobApplication) -> Result<JobApplication, StoreError>;

    /// Moves an application to `status` and stamps `updated_at`.
    async fn update_status(
        &self,
        user: &UserId,
        id: Uuid,
        status: JobStatus,
    ) -> Result<JobApplication, StoreError>;

    async fn delete(&self, user: &UserId, id: Uuid) -> Result<(), StoreError>;
}

#[derive(Debug)]
struct StoredApplication {
    owner: UserId,
    // Insertion sequence; breaks ties between equal creation times.
    seq: u64,
    application: JobApplication,
}

#[derive(Debug, Default)]
struct InMemoryJobStoreState {
    applications: HashMap<Uuid, StoredApplication>,
    next_seq: u64,
}

/// Process-local [`JobStore`] for tests and offline use.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    state: RwLock<InMemoryJobStoreState>,
    clock: Option<fn() -> DateTime<Utc>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `clock` instead of the system time to stamp records.
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            clock: Some(clock),
            ..Self::default()
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.map_or_else(Utc::now, |clock| clock())
    }
}

fn check_user(user: &UserId) -> Result<(), StoreError> {
    if user.0.is_empty() {
        return Err(StoreError::Unauthorized);
    }
    Ok(())
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn list(&self, user: &UserId) -> Result<Vec<JobApplication>, StoreError> {
        check_user(user)?;
        let guard = self.state.read().await;

        let mut owned: Vec<&StoredApplication> = guard
            .applications
            .values()
            .filter(|stored| &stored.owner == user)
            .collect();
        owned.sort_by(|a, b| {
            b.application
                .created_at
                .cmp(&a.application.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(owned.into_iter().map(|stored| stored.application.clone()).collect())
    }

    async fn add(&self, user: &UserId, new: NewJobApplication) -> Result<JobApplication, StoreError> {
        check_user(user)?;
        new.validate()?;

        let application = JobApplication::from_new(new, self.now());
        let mut guard = self.state.write().await;
        let seq = guard.next_seq;
        guard.next_seq += 1;
        guard.applications.insert(
            application.id,
            StoredApplication {
                owner: user.clone(),
                seq,
                application: application.clone(),
            },
        );

        #[cfg(feature = "tracing")]
        tracing::info!("job application {} added", application.id);

        Ok(application)
    }

    async fn update_status(
        &self,
        user: &UserId,
        id: Uuid,
        status: JobStatus,
    ) -> Result<JobApplication, StoreError> {
        check_user(user)?;
        let now = self.now();
        let mut guard = self.state.write().await;

        match guard.applications.get_mut(&id) {
            Some(stored) if &stored.owner == user => {
                stored.application.status = status;
                stored.application.updated_at = Some(now);

                #[cfg(feature = "tracing")]
                tracing::info!("job application {} moved to {}", id, status);

                Ok(stored.application.clone())
            }
            _ => Err(StoreError::NotFound(id)),
        }
    }

    async fn delete(&self, user: &UserId, id: Uuid) -> Result<(), StoreError> {
        check_user(user)?;
        let mut guard = self.state.write().await;

        let owned = guard
            .applications
            .get(&id)
            .is_some_and(|stored| &stored.owner == user);
        if !owned {
            return Err(StoreError::NotFound(id));
        }
        guard.applications.remove(&id);

        #[cfg(feature = "tracing")]
        tracing::info!("job application {} deleted", id);

        Ok(())
    }
}
