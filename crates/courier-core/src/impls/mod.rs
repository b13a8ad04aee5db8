//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports の in-memory 実装を含めます。
//! CLI のホストと各テストがこれを使います。
//!
//! # 含まれる実装
//! - **InMemoryNotificationTray**: 通知トレイ
//! - **InMemoryWindowClients**: ウィンドウ一覧
//! - **InMemoryCacheStorage**: キャッシュ一覧
//! - **InMemoryWorkerScope**: skip_waiting / claim_clients
//! - **InMemoryHost**: 上記を 1 つの HostJournal で束ねたもの

pub mod host;
pub mod inmem_cache;
pub mod inmem_scope;
pub mod inmem_tray;
pub mod inmem_windows;
pub mod journal;

// 主要な型を再エクスポート
pub use self::host::InMemoryHost;
pub use self::inmem_cache::InMemoryCacheStorage;
pub use self::inmem_scope::InMemoryWorkerScope;
pub use self::inmem_tray::InMemoryNotificationTray;
pub use self::inmem_windows::InMemoryWindowClients;
pub use self::journal::{HostCall, HostJournal};
