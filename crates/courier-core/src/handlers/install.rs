use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{EventOutcome, InstallEvent};
use crate::error::CourierError;
use crate::ports::WorkerScope;
use crate::typed::Handler;

/// Skips the waiting phase so the new agent version activates immediately.
pub struct InstallHandler {
    scope: Arc<dyn WorkerScope>,
}

impl InstallHandler {
    pub fn new(scope: Arc<dyn WorkerScope>) -> Self {
        Self { scope }
    }
}

#[async_trait]
impl Handler<InstallEvent> for InstallHandler {
    async fn handle(&self, _event: InstallEvent) -> Result<EventOutcome, CourierError> {
        self.scope.skip_waiting().await?;
        tracing::info!("installed, skipping waiting phase");
        Ok(EventOutcome::Installed)
    }
}
