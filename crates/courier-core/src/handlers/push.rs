use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{EventOutcome, PushEvent, PushPayload};
use crate::error::CourierError;
use crate::ports::NotificationTray;
use crate::typed::Handler;

/// Turns a push into a visible notification.
///
/// A payload that cannot be parsed still produces a (blank) notification.
/// Tray failures are returned as-is.
pub struct PushHandler {
    tray: Arc<dyn NotificationTray>,
}

impl PushHandler {
    pub fn new(tray: Arc<dyn NotificationTray>) -> Self {
        Self { tray }
    }
}

#[async_trait]
impl Handler<PushEvent> for PushHandler {
    async fn handle(&self, event: PushEvent) -> Result<EventOutcome, CourierError> {
        let payload = PushPayload::parse(event.text.as_deref());
        let record = self.tray.show(payload.to_request()).await?;
        tracing::debug!(
            notification = %record.id,
            kind = ?record.data.kind(),
            "notification shown"
        );
        Ok(EventOutcome::NotificationShown(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationKind;
    use crate::impls::InMemoryHost;
    use crate::ports::HostError;
    use rstest::rstest;
    use serde_json::json;

    fn shown(outcome: EventOutcome) -> crate::domain::NotificationRecord {
        match outcome {
            EventOutcome::NotificationShown(record) => record,
            other => panic!("expected NotificationShown, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn shows_title_body_and_merged_data() {
        let host = InMemoryHost::new();
        let handler = PushHandler::new(host.tray.clone());
        let text = json!({
            "title": "Assignment graded",
            "body": "Algebra II: 18/20",
            "type": "calendar",
            "data": { "calendarId": "cal-3", "type": "grade" }
        })
        .to_string();

        let record = shown(handler.handle(PushEvent::new(text)).await.unwrap());

        assert_eq!(record.title.as_deref(), Some("Assignment graded"));
        assert_eq!(record.body.as_deref(), Some("Algebra II: 18/20"));
        assert_eq!(record.data.kind(), NotificationKind::Calendar);
        assert_eq!(record.data.calendar_id().as_deref(), Some("cal-3"));
        assert_eq!(host.tray.open_notifications(), vec![record]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some("{\"title\": "))]
    #[case(Some("<html>502</html>"))]
    #[tokio::test]
    async fn unusable_payload_shows_blank_notification(#[case] text: Option<&str>) {
        let host = InMemoryHost::new();
        let handler = PushHandler::new(host.tray.clone());
        let event = PushEvent {
            text: text.map(str::to_string),
        };

        let record = shown(handler.handle(event).await.unwrap());

        assert_eq!(record.title, None);
        assert_eq!(record.body, None);
        assert!(record.data.0.is_empty());
    }

    #[tokio::test]
    async fn tray_failure_propagates() {
        let host = InMemoryHost::new();
        host.tray
            .fail_next_show(HostError::Unavailable("notifications denied".to_string()));
        let handler = PushHandler::new(host.tray.clone());

        let err = handler.handle(PushEvent::new("{}")).await.unwrap_err();

        assert!(matches!(err, CourierError::Host(HostError::Unavailable(_))));
        assert!(host.tray.open_notifications().is_empty());
    }
}
