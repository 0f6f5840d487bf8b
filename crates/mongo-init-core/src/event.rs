use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapEvent {
    Started { username: String, database: String },
    UserSkipped { username: String, database: String },
    Completed { database: String, collection: String },
}

/// Sink for bootstrap lifecycle events.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: BootstrapEvent);
}

/// Channel-based event sink that forwards events to a receiver.
pub struct ChannelEventSink {
    tx: tokio::sync::mpsc::UnboundedSender<BootstrapEvent>,
}

impl ChannelEventSink {
    pub fn new() -> (Self, tokio::sync::mpsc::UnboundedReceiver<BootstrapEvent>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl EventSink for ChannelEventSink {
    async fn emit(&self, event: BootstrapEvent) {
        let _ = self.tx.send(event);
    }
}

/// Writes the start and completion lines through `tracing`.
pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn emit(&self, event: BootstrapEvent) {
        match event {
            BootstrapEvent::Started { username, database } => {
                tracing::info!(
                    user = %username,
                    database = %database,
                    "Creating app user '{username}' on db '{database}' ..."
                );
            }
            BootstrapEvent::UserSkipped { username, database } => {
                tracing::warn!(
                    user = %username,
                    database = %database,
                    "App user already exists, leaving it unchanged"
                );
            }
            BootstrapEvent::Completed {
                database,
                collection,
            } => {
                tracing::info!(database = %database, collection = %collection, "Mongo init done.");
            }
        }
    }
}
