//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait はホスト環境（通知トレイ、ウィンドウ一覧、キャッシュ、
//! ワーカー自身のライフサイクル）へのインターフェースを提供し、
//! 実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - すべての非同期操作は handler の中で await される（event の寿命を延ばす）
//! - 失敗は `HostError` で返し、エージェント内部ではリトライしない

pub mod cache_storage;
pub mod clock;
pub mod error;
pub mod id_generator;
pub mod notification_tray;
pub mod window_clients;
pub mod worker_scope;

// 主要な trait を再エクスポート
pub use self::cache_storage::CacheStorage;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::error::HostError;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::notification_tray::NotificationTray;
pub use self::window_clients::WindowClients;
pub use self::worker_scope::WorkerScope;
