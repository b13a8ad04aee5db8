//! WindowClients port - アプリケーションウィンドウの列挙・フォーカス・オープン

use async_trait::async_trait;

use crate::domain::{ClientQuery, WindowClient, WindowId};
use crate::ports::HostError;

/// WindowClients はホストのクライアント一覧を操作
///
/// # 設計原則
/// - `match_all` の順序はホスト定義（エージェント側で並べ替えない）
/// - `None` は「一覧なし」として空扱い
/// - `open_window` はホストが開けなかった場合 `None` を返しうる
#[async_trait]
pub trait WindowClients: Send + Sync {
    async fn match_all(&self, query: ClientQuery) -> Result<Option<Vec<WindowClient>>, HostError>;

    async fn focus(&self, id: &WindowId) -> Result<WindowClient, HostError>;

    async fn open_window(&self, url: &str) -> Result<Option<WindowClient>, HostError>;
}
