//! Agent - ディスパッチテーブルでホストイベントを handler に振り分ける

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::domain::{EventKind, EventOutcome, HostEvent};
use crate::error::CourierError;
use crate::typed::TypedRegistry;

use super::lifetime::EventLifetime;

/// Agent は構築済みの TypedRegistry を持ち、実行時は読むだけ
pub struct Agent {
    registry: Arc<TypedRegistry>,
}

impl Agent {
    pub(crate) fn new(registry: TypedRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registered_kinds(&self) -> Vec<EventKind> {
        self.registry.registered_kinds()
    }

    /// Hand one event to its handler.
    ///
    /// The handler runs on its own task; the returned lifetime settles when
    /// every async step of the handler has completed.
    pub fn dispatch(&self, event: HostEvent) -> Result<EventLifetime, CourierError> {
        let kind = event.kind();
        let handler = self
            .registry
            .get(kind)
            .ok_or(CourierError::HandlerNotFound(kind))?;
        let runtime = Handle::try_current().map_err(|_| CourierError::NoRuntime)?;

        tracing::debug!(%kind, "dispatching host event");
        let join = runtime.spawn(async move { handler.handle_dyn(event).await });
        Ok(EventLifetime::new(kind, join))
    }

    /// Dispatch and wait for the event to settle.
    pub async fn handle(&self, event: HostEvent) -> Result<EventOutcome, CourierError> {
        self.dispatch(event)?.settled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AgentBuilder;
    use crate::config::AgentConfig;
    use crate::domain::{ActivateEvent, InstallEvent, NotificationClickEvent, PushEvent};
    use crate::handlers::PushHandler;
    use crate::impls::{HostCall, InMemoryHost};
    use crate::ports::HostError;
    use serde_json::json;

    fn agent(host: &InMemoryHost) -> Agent {
        AgentBuilder::new()
            .with_default_handlers(host.ports(), &AgentConfig::default())
            .unwrap()
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn push_then_click_opens_deep_link() {
        let host = InMemoryHost::new();
        let agent = agent(&host);
        let text = json!({ "title": "Ana", "body": "see you", "type": "chat", "data": { "chatId": "41" } });

        let shown = agent
            .handle(HostEvent::Push(PushEvent::new(text.to_string())))
            .await
            .unwrap();
        let EventOutcome::NotificationShown(record) = shown else {
            panic!("expected NotificationShown, got {shown:?}");
        };

        let clicked = agent
            .handle(HostEvent::NotificationClick(NotificationClickEvent::new(record)))
            .await
            .unwrap();

        assert_eq!(clicked.opened_url(), Some("/#/chat?id=41"));
    }

    #[tokio::test]
    async fn lifecycle_events_skip_waiting_and_purge() {
        let host = InMemoryHost::new();
        host.caches.insert("courier-v0");
        let agent = agent(&host);

        agent.handle(HostEvent::Install(InstallEvent)).await.unwrap();
        agent.handle(HostEvent::Activate(ActivateEvent)).await.unwrap();

        assert_eq!(
            host.journal.calls(),
            vec![
                HostCall::SkipWaiting,
                HostCall::CacheKeys,
                HostCall::CacheDelete("courier-v0".to_string()),
                HostCall::ClaimClients,
            ]
        );
    }

    #[tokio::test]
    async fn unregistered_kind_is_rejected() {
        let host = InMemoryHost::new();
        let agent = AgentBuilder::new()
            .register::<PushEvent, _>(PushHandler::new(host.tray.clone()))
            .unwrap()
            .build()
            .unwrap();

        let err = agent.dispatch(HostEvent::Install(InstallEvent)).err().unwrap();
        assert!(matches!(err, CourierError::HandlerNotFound(EventKind::Install)));
    }

    #[tokio::test]
    async fn host_failure_surfaces_through_settled() {
        let host = InMemoryHost::new();
        host.tray
            .fail_next_show(HostError::OperationFailed("tray full".to_string()));
        let agent = agent(&host);

        let lifetime = agent.dispatch(HostEvent::Push(PushEvent::empty())).unwrap();
        assert_eq!(lifetime.kind(), EventKind::Push);

        let err = lifetime.settled().await.unwrap_err();
        assert!(matches!(err, CourierError::Host(HostError::OperationFailed(_))));
    }

    #[tokio::test]
    async fn lifetime_covers_the_whole_handler() {
        let host = InMemoryHost::new();
        host.windows.add_window("/#/courses");
        let agent = agent(&host);
        let record = match agent.handle(HostEvent::Push(PushEvent::empty())).await.unwrap() {
            EventOutcome::NotificationShown(record) => record,
            other => panic!("expected NotificationShown, got {other:?}"),
        };

        let lifetime = agent
            .dispatch(HostEvent::NotificationClick(NotificationClickEvent::new(record)))
            .unwrap();
        let outcome = lifetime.settled().await.unwrap();

        // by the time the lifetime settles the focus call has happened
        assert!(outcome.focused_window().is_some());
        assert!(matches!(host.journal.calls().last(), Some(HostCall::Focus(_))));
    }

    #[test]
    fn dispatch_outside_a_runtime_is_an_error() {
        let host = InMemoryHost::new();
        let agent = agent(&host);
        let err = agent.dispatch(HostEvent::Install(InstallEvent)).err().unwrap();
        assert!(matches!(err, CourierError::NoRuntime));
    }
}
