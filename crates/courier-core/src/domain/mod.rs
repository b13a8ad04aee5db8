//! Domain model (ids, payloads, routes, events, decisions, progress).
//!
//! ホスト環境に依存しない値型と純粋関数だけを置きます。
//! 副作用は ports 経由で handlers / progress が実行します。

pub mod decision;
pub mod events;
pub mod ids;
pub mod notification;
pub mod payload;
pub mod progress;
pub mod route;

pub use decision::{ClickDecision, decide_click};
pub use events::{
    ActivateEvent, EventKind, EventOutcome, HostEvent, InstallEvent, NotificationClickEvent,
    PushEvent,
};
pub use ids::{NotificationId, WindowId};
pub use notification::{ClientQuery, ClientType, NotificationRecord, WindowClient};
pub use payload::{
    NotificationData, NotificationKind, NotificationOptions, NotificationRequest, PushPayload,
};
pub use progress::{FinishStep, Phase, ProgressCurve, ProgressState};
pub use route::Route;
