//! courier-core
//!
//! Core building blocks for the courier notification agent and the
//! navigation progress indicator.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, payload, route, events, decision, progress）
//! - **ports**: 抽象化レイヤー（NotificationTray, WindowClients, CacheStorage, WorkerScope, Clock, IdGenerator）
//! - **typed**: 型付き Event API（Event trait, Handler trait, TypedRegistry）
//! - **handlers**: install / activate / push / notification_click の handler
//! - **app**: エージェントの構築とディスパッチ（AgentBuilder, Agent, EventLifetime）
//! - **progress**: ProgressIndicator
//! - **impls**: in-memory 実装（開発用・テスト用）
//! - **config**: 設定（TOML）

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod impls;
pub mod ports;
pub mod progress;
pub mod typed;

mod sync;

pub use app::{Agent, AgentBuilder, EventLifetime, HostPorts};
pub use config::{AgentConfig, CourierConfig, ProgressConfig};
pub use error::CourierError;
pub use progress::ProgressIndicator;
