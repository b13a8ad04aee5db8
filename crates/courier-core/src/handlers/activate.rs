use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ActivateEvent, EventOutcome};
use crate::error::CourierError;
use crate::ports::{CacheStorage, WorkerScope};
use crate::typed::Handler;

/// Purges caches left by earlier versions, then claims open windows.
///
/// Purging happens before the claim so a stale cache never serves a window
/// this version controls.
pub struct ActivateHandler {
    caches: Arc<dyn CacheStorage>,
    scope: Arc<dyn WorkerScope>,
    keep: String,
}

impl ActivateHandler {
    pub fn new(caches: Arc<dyn CacheStorage>, scope: Arc<dyn WorkerScope>, keep: impl Into<String>) -> Self {
        Self {
            caches,
            scope,
            keep: keep.into(),
        }
    }
}

#[async_trait]
impl Handler<ActivateEvent> for ActivateHandler {
    async fn handle(&self, _event: ActivateEvent) -> Result<EventOutcome, CourierError> {
        let mut purged = Vec::new();
        for name in self.caches.keys().await? {
            if name == self.keep {
                continue;
            }
            if self.caches.delete(&name).await? {
                tracing::debug!(cache = %name, "purged stale cache");
                purged.push(name);
            }
        }
        self.scope.claim_clients().await?;
        tracing::info!(purged = purged.len(), keep = %self.keep, "activated");
        Ok(EventOutcome::Activated { purged })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientQuery;
    use crate::impls::{HostCall, InMemoryHost};
    use crate::ports::WindowClients;

    #[tokio::test]
    async fn purges_every_cache_but_the_current_one_before_claiming() {
        let host = InMemoryHost::new();
        host.caches.insert("courier-v0");
        host.caches.insert("courier-v1");
        host.caches.insert("runtime-assets-old");
        let handler = ActivateHandler::new(host.caches.clone(), host.scope.clone(), "courier-v1");

        let outcome = handler.handle(ActivateEvent).await.unwrap();

        assert_eq!(
            outcome,
            EventOutcome::Activated {
                purged: vec!["courier-v0".to_string(), "runtime-assets-old".to_string()]
            }
        );
        assert_eq!(host.caches.names(), vec!["courier-v1".to_string()]);
        assert_eq!(host.journal.calls().last(), Some(&HostCall::ClaimClients));
    }

    #[tokio::test]
    async fn claim_takes_control_of_open_windows() {
        let host = InMemoryHost::new();
        host.windows
            .add_client("/#/courses", crate::domain::ClientType::Window, false);
        let handler = ActivateHandler::new(host.caches.clone(), host.scope.clone(), "courier-v1");

        handler.handle(ActivateEvent).await.unwrap();

        let query = ClientQuery {
            include_uncontrolled: false,
            ..ClientQuery::windows()
        };
        let controlled = host.windows.match_all(query).await.unwrap().unwrap();
        assert_eq!(controlled.len(), 1);
    }
}
