//! WorkerScope port - エージェント自身のライフサイクル操作

use async_trait::async_trait;

use crate::ports::HostError;

/// WorkerScope は新バージョンを即時に有効化するための操作
///
/// - `skip_waiting`: waiting フェーズを飛ばす（install 時）
/// - `claim_clients`: 既に開いているウィンドウを新バージョンの管理下に置く（activate 時）
#[async_trait]
pub trait WorkerScope: Send + Sync {
    async fn skip_waiting(&self) -> Result<(), HostError>;

    async fn claim_clients(&self) -> Result<(), HostError>;
}
