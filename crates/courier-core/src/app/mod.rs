//! App - アプリケーション層
//!
//! このモジュールは、ports と handlers を組み合わせてエージェントを構成します。
//!
//! # 主要コンポーネント
//! - **AgentBuilder**: エージェントの構築とワイヤリング（fail-fast）
//! - **Agent**: EventKind をキーにしたディスパッチ
//! - **EventLifetime**: イベントの寿命（ホストが await するハンドル）
//! - **HostPorts**: handler に渡す port の束

pub mod agent;
pub mod builder;
pub mod host;
pub mod lifetime;

// 主要な型を再エクスポート
pub use self::agent::Agent;
pub use self::builder::{AgentBuilder, BuildError};
pub use self::host::HostPorts;
pub use self::lifetime::EventLifetime;
