use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher emits domain events to the log stream; the catalog has no
// outbound network surface, so the log is the event sink.
#[derive(Debug, Default)]
pub struct LogPublisher {
}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!("published event {}", json.as_str());
        Ok(())
    }
}
