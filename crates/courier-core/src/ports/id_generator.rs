//! IdGenerator port - ID 生成の抽象化
//!
//! ホストが払い出す NotificationId / WindowId を生成します。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース

use crate::domain::ids::{NotificationId, WindowId};
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator はホスト側の ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数タスクから使える）
pub trait IdGenerator: Send + Sync {
    fn generate_notification_id(&self) -> NotificationId;

    fn generate_window_id(&self) -> WindowId;
}

/// UlidGenerator は Clock の時刻を timestamp 部に使う ULID 生成器
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn next_ulid(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_notification_id(&self) -> NotificationId {
        NotificationId::from(self.next_ulid())
    }

    fn generate_window_id(&self) -> WindowId {
        WindowId::from(self.next_ulid())
    }
}
