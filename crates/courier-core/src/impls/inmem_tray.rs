//! InMemoryNotificationTray - 開発用の通知トレイ

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::journal::{HostCall, HostJournal};
use crate::domain::{NotificationId, NotificationRecord, NotificationRequest};
use crate::ports::{Clock, HostError, IdGenerator, NotificationTray};
use crate::sync::lock;

/// InMemoryNotificationTray は表示中の通知を Vec で保持
///
/// `fail_next_show` で次の `show` を失敗させられます（エラー伝播のテスト用）。
pub struct InMemoryNotificationTray {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    journal: HostJournal,
    open: Mutex<Vec<NotificationRecord>>,
    fail_next: Mutex<Option<HostError>>,
}

impl InMemoryNotificationTray {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>, journal: HostJournal) -> Self {
        Self {
            clock,
            ids,
            journal,
            open: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// Notifications currently shown, oldest first.
    pub fn open_notifications(&self) -> Vec<NotificationRecord> {
        lock(&self.open).clone()
    }

    pub fn fail_next_show(&self, error: HostError) {
        *lock(&self.fail_next) = Some(error);
    }
}

#[async_trait]
impl NotificationTray for InMemoryNotificationTray {
    async fn show(&self, request: NotificationRequest) -> Result<NotificationRecord, HostError> {
        if let Some(error) = lock(&self.fail_next).take() {
            return Err(error);
        }
        let record =
            NotificationRecord::from_request(self.ids.generate_notification_id(), request, self.clock.now());
        self.journal.record(HostCall::Show(record.id));
        lock(&self.open).push(record.clone());
        Ok(record)
    }

    fn close(&self, id: &NotificationId) -> bool {
        self.journal.record(HostCall::Close(*id));
        let mut open = lock(&self.open);
        let before = open.len();
        open.retain(|record| record.id != *id);
        open.len() != before
    }
}
