use std::sync::Arc;

use crate::config::BootstrapConfig;
use crate::error::BootstrapResult;
use crate::event::{BootstrapEvent, EventSink};
use crate::principal::AppPrincipal;
use crate::session::AdminSession;

/// What to do when the application user is already defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateUserPolicy {
    /// Let the server reject the second `createUser` and abort the run.
    #[default]
    Fail,
    /// Look the user up first and leave an existing one untouched.
    Skip,
}

/// What a finished run changed on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOutcome {
    pub user_created: bool,
    pub database: String,
    pub collection: String,
}

/// Creates the application user and its collection over one admin session.
pub struct Bootstrapper<S> {
    config: BootstrapConfig,
    session: S,
    policy: DuplicateUserPolicy,
    event_sinks: Vec<Arc<dyn EventSink>>,
}

impl<S: AdminSession> Bootstrapper<S> {
    pub fn new(config: BootstrapConfig, session: S) -> Self {
        Self {
            config,
            session,
            policy: DuplicateUserPolicy::default(),
            event_sinks: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicateUserPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn add_event_sink(&mut self, sink: Arc<dyn EventSink>) {
        self.event_sinks.push(sink);
    }

    async fn emit(&self, event: BootstrapEvent) {
        for sink in &self.event_sinks {
            sink.emit(event.clone()).await;
        }
    }

    /// Run the whole procedure: user first, then collection.
    ///
    /// Consumes the bootstrapper so the session is released once the run ends.
    pub async fn run(self) -> BootstrapResult<BootstrapOutcome> {
        self.config.validate()?;
        let database = self.config.database.clone();

        self.emit(BootstrapEvent::Started {
            username: self.config.username.clone(),
            database: database.clone(),
        })
        .await;

        let user_created = self.create_application_user().await?;
        self.ensure_collection_exists().await?;

        self.emit(BootstrapEvent::Completed {
            database: database.clone(),
            collection: self.config.collection.clone(),
        })
        .await;

        Ok(BootstrapOutcome {
            user_created,
            database,
            collection: self.config.collection,
        })
    }

    /// Returns `false` only when the policy is `Skip` and the user was found.
    pub async fn create_application_user(&self) -> BootstrapResult<bool> {
        self.config.validate()?;
        let database = &self.config.database;
        let principal = AppPrincipal::for_config(&self.config);

        if self.policy == DuplicateUserPolicy::Skip
            && self
                .session
                .user_exists(database, principal.username())
                .await?
        {
            self.emit(BootstrapEvent::UserSkipped {
                username: principal.username().to_string(),
                database: database.clone(),
            })
            .await;
            return Ok(false);
        }

        self.session.create_user(database, &principal).await?;
        tracing::debug!(user = %principal.username(), database = %database, "User created");
        Ok(true)
    }

    pub async fn ensure_collection_exists(&self) -> BootstrapResult<()> {
        let database = &self.config.database;
        let collection = &self.config.collection;
        self.config.validate()?;
        self.session.create_collection(database, collection).await?;
        tracing::debug!(database = %database, collection = %collection, "Collection ensured");
        Ok(())
    }
}
