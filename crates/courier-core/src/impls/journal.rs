//! HostJournal - in-memory ホストへの呼び出し記録
//!
//! 各 in-memory 実装は同じ journal を共有し、呼び出し順をテストで検証できます。

use std::sync::{Arc, Mutex};

use crate::domain::{NotificationId, WindowId};
use crate::sync::lock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Show(NotificationId),
    Close(NotificationId),
    MatchAll,
    Focus(WindowId),
    Open(String),
    CacheKeys,
    CacheDelete(String),
    SkipWaiting,
    ClaimClients,
}

#[derive(Debug, Clone, Default)]
pub struct HostJournal {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

impl HostJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: HostCall) {
        lock(&self.calls).push(call);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        lock(&self.calls).clone()
    }

    /// URLs passed to `open_window`, in call order.
    pub fn opened_urls(&self) -> Vec<String> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                HostCall::Open(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}
