//! NotificationTray port - プラットフォームの通知トレイ

use async_trait::async_trait;

use crate::domain::{NotificationId, NotificationRecord, NotificationRequest};
use crate::ports::HostError;

/// NotificationTray は通知の表示と消去を担当
///
/// # 設計原則
/// - `show` は非同期（ホストの表示要求が settle するまで event を閉じない）
/// - `close` は冪等（既に閉じた通知・不明な ID でもエラーにしない）
#[async_trait]
pub trait NotificationTray: Send + Sync {
    async fn show(&self, request: NotificationRequest) -> Result<NotificationRecord, HostError>;

    /// Returns whether the notification was still open.
    fn close(&self, id: &NotificationId) -> bool;
}
