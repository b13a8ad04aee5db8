//! EventLifetime - イベントの寿命を表すハンドル
//!
//! ホストは `settled()` が返るまでイベントを「処理中」として扱い、
//! バックグラウンドコンテキストを破棄してはいけません。
//! handler は spawn されたタスク上で最後まで走るので、
//! 途中の await（表示要求、ウィンドウ列挙、focus/open）もすべてこの寿命に含まれます。

use tokio::task::JoinHandle;

use crate::domain::{EventKind, EventOutcome};
use crate::error::CourierError;

#[must_use = "the host must await `settled()` before treating the event as processed"]
pub struct EventLifetime {
    kind: EventKind,
    join: JoinHandle<Result<EventOutcome, CourierError>>,
}

impl EventLifetime {
    pub(crate) fn new(kind: EventKind, join: JoinHandle<Result<EventOutcome, CourierError>>) -> Self {
        Self { kind, join }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// True once the handler finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the handler. Host failures come back as `CourierError::Host`;
    /// a panicking or cancelled handler as `CourierError::Aborted`.
    pub async fn settled(self) -> Result<EventOutcome, CourierError> {
        match self.join.await {
            Ok(result) => result,
            Err(e) => Err(CourierError::Aborted(format!("{} handler: {e}", self.kind))),
        }
    }
}
