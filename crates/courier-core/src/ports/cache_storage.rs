//! CacheStorage port - 名前付きキャッシュの一覧と削除

use async_trait::async_trait;

use crate::ports::HostError;

/// CacheStorage は過去バージョンが残したキャッシュを掃除するために使う
#[async_trait]
pub trait CacheStorage: Send + Sync {
    async fn keys(&self) -> Result<Vec<String>, HostError>;

    /// Returns whether a cache with that name existed.
    async fn delete(&self, name: &str) -> Result<bool, HostError>;
}
