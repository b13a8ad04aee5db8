//! HostError - ホスト操作の失敗

/// Ports が返すエラー
///
/// # 設計原則
/// - エージェント内部ではリトライしない（ホスト側のエラー処理に委ねる）
/// - handler はそのまま `CourierError::Host` として上に伝播する
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("host operation failed: {0}")]
    OperationFailed(String),

    #[error("host capability unavailable: {0}")]
    Unavailable(String),
}
