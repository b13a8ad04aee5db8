use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ClickDecision, ClientQuery, EventOutcome, NotificationClickEvent, decide_click};
use crate::error::CourierError;
use crate::ports::{NotificationTray, WindowClients};
use crate::typed::Handler;

/// Closes the clicked notification, then focuses the first open window or
/// opens the deep link when there is none.
pub struct NotificationClickHandler {
    tray: Arc<dyn NotificationTray>,
    windows: Arc<dyn WindowClients>,
}

impl NotificationClickHandler {
    pub fn new(tray: Arc<dyn NotificationTray>, windows: Arc<dyn WindowClients>) -> Self {
        Self { tray, windows }
    }
}

#[async_trait]
impl Handler<NotificationClickEvent> for NotificationClickHandler {
    async fn handle(&self, event: NotificationClickEvent) -> Result<EventOutcome, CourierError> {
        let notification = event.notification;
        if !self.tray.close(&notification.id) {
            tracing::debug!(notification = %notification.id, "clicked notification was already closed");
        }

        let windows = self
            .windows
            .match_all(ClientQuery::windows())
            .await?
            .unwrap_or_default();

        match decide_click(&notification.data, &windows) {
            ClickDecision::Focus(id) => {
                let window = self.windows.focus(&id).await?;
                tracing::debug!(window = %window.id, "focused existing window");
                Ok(EventOutcome::Focused(window))
            }
            ClickDecision::Open(route) => {
                let url = route.to_url();
                let window = self.windows.open_window(&url).await?;
                if window.is_none() {
                    tracing::warn!(%url, "host declined to open a window");
                }
                Ok(EventOutcome::Opened { url, window })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientType, NotificationRecord, PushEvent};
    use crate::handlers::PushHandler;
    use crate::impls::{HostCall, InMemoryHost};
    use serde_json::{Value, json};

    async fn notify(host: &InMemoryHost, payload: Value) -> NotificationRecord {
        let outcome = PushHandler::new(host.tray.clone())
            .handle(PushEvent::new(payload.to_string()))
            .await
            .unwrap();
        match outcome {
            EventOutcome::NotificationShown(record) => record,
            other => panic!("expected NotificationShown, got {other:?}"),
        }
    }

    fn handler(host: &InMemoryHost) -> NotificationClickHandler {
        NotificationClickHandler::new(host.tray.clone(), host.windows.clone())
    }

    #[tokio::test]
    async fn chat_click_without_windows_opens_chat_deep_link() {
        let host = InMemoryHost::new();
        let record = notify(&host, json!({ "type": "chat", "data": { "chatId": "room-17" } })).await;

        let outcome = handler(&host)
            .handle(NotificationClickEvent::new(record))
            .await
            .unwrap();

        assert_eq!(outcome.opened_url(), Some("/#/chat?id=room-17"));
        assert_eq!(host.journal.opened_urls(), vec!["/#/chat?id=room-17".to_string()]);
    }

    #[tokio::test]
    async fn calendar_click_without_windows_opens_calendar_deep_link() {
        let host = InMemoryHost::new();
        let record = notify(&host, json!({ "type": "calendar", "data": { "calendarId": 88 } })).await;

        let outcome = handler(&host)
            .handle(NotificationClickEvent::new(record))
            .await
            .unwrap();

        assert_eq!(outcome.opened_url(), Some("/#/calendar?id=88"));
        assert_eq!(host.journal.opened_urls().len(), 1);
    }

    #[tokio::test]
    async fn unknown_type_without_windows_opens_root() {
        let host = InMemoryHost::new();
        let record = notify(&host, json!({ "type": "payment", "data": { "chatId": "x" } })).await;

        let outcome = handler(&host)
            .handle(NotificationClickEvent::new(record))
            .await
            .unwrap();

        assert_eq!(outcome.opened_url(), Some("/"));
    }

    #[tokio::test]
    async fn open_window_focuses_first_and_never_navigates() {
        let host = InMemoryHost::new();
        let first = host.windows.add_window("/#/courses");
        host.windows.add_window("/#/calendar");
        let record = notify(&host, json!({ "type": "chat", "data": { "chatId": "room-1" } })).await;

        let outcome = handler(&host)
            .handle(NotificationClickEvent::new(record))
            .await
            .unwrap();

        assert_eq!(outcome.focused_window(), Some(first.id));
        assert!(host.journal.opened_urls().is_empty());
        // focusing does not change where the window points
        assert_eq!(host.windows.clients()[0].url, "/#/courses");
    }

    #[tokio::test]
    async fn uncontrolled_windows_count_as_open() {
        let host = InMemoryHost::new();
        let window = host.windows.add_client("/#/courses", ClientType::Window, false);
        let record = notify(&host, json!({ "type": "chat" })).await;

        let outcome = handler(&host)
            .handle(NotificationClickEvent::new(record))
            .await
            .unwrap();

        assert_eq!(outcome.focused_window(), Some(window.id));
    }

    #[tokio::test]
    async fn click_closes_notification_before_touching_windows() {
        let host = InMemoryHost::new();
        let record = notify(&host, json!({})).await;
        let id = record.id;
        host.journal.clear();

        handler(&host)
            .handle(NotificationClickEvent::new(record))
            .await
            .unwrap();

        let calls = host.journal.calls();
        assert_eq!(calls[0], HostCall::Close(id));
        assert_eq!(calls[1], HostCall::MatchAll);
        assert!(host.tray.open_notifications().is_empty());
    }

    #[tokio::test]
    async fn clicking_an_already_closed_notification_is_fine() {
        let host = InMemoryHost::new();
        let record = notify(&host, json!({ "type": "chat", "data": { "chatId": "a" } })).await;
        let handler = handler(&host);

        handler
            .handle(NotificationClickEvent::new(record.clone()))
            .await
            .unwrap();
        let second = handler.handle(NotificationClickEvent::new(record)).await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn missing_window_list_is_treated_as_empty() {
        let host = InMemoryHost::new();
        host.windows.add_window("/#/courses");
        host.windows.report_missing_list(true);
        let record = notify(&host, json!({ "type": "chat", "data": { "chatId": "z" } })).await;

        let outcome = handler(&host)
            .handle(NotificationClickEvent::new(record))
            .await
            .unwrap();

        assert_eq!(outcome.opened_url(), Some("/#/chat?id=z"));
    }

    #[tokio::test]
    async fn declined_open_still_settles() {
        let host = InMemoryHost::new();
        host.windows.refuse_open(true);
        let record = notify(&host, json!({})).await;

        let outcome = handler(&host)
            .handle(NotificationClickEvent::new(record))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            EventOutcome::Opened {
                url: "/".to_string(),
                window: None
            }
        );
    }
}
