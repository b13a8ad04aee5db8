//! InMemoryHost - in-memory 実装一式

use std::sync::Arc;

use super::inmem_cache::InMemoryCacheStorage;
use super::inmem_scope::InMemoryWorkerScope;
use super::inmem_tray::InMemoryNotificationTray;
use super::inmem_windows::InMemoryWindowClients;
use super::journal::HostJournal;
use crate::app::HostPorts;
use crate::ports::{Clock, SystemClock, UlidGenerator};

/// InMemoryHost は全 port の in-memory 実装を 1 つの journal で束ねる
///
/// # 使用例
/// ```ignore
/// let host = InMemoryHost::new();
/// host.windows.add_window("/#/courses");
/// let agent = AgentBuilder::new()
///     .with_default_handlers(host.ports(), &AgentConfig::default())?
///     .build()?;
/// ```
pub struct InMemoryHost {
    pub journal: HostJournal,
    pub tray: Arc<InMemoryNotificationTray>,
    pub windows: Arc<InMemoryWindowClients>,
    pub caches: Arc<InMemoryCacheStorage>,
    pub scope: Arc<InMemoryWorkerScope>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let journal = HostJournal::new();
        let ids = Arc::new(UlidGenerator::new(Arc::clone(&clock)));
        let windows = Arc::new(InMemoryWindowClients::new(ids.clone(), journal.clone()));
        Self {
            tray: Arc::new(InMemoryNotificationTray::new(clock, ids, journal.clone())),
            caches: Arc::new(InMemoryCacheStorage::new(journal.clone())),
            scope: Arc::new(InMemoryWorkerScope::new(journal.clone(), Arc::clone(&windows))),
            windows,
            journal,
        }
    }

    pub fn ports(&self) -> HostPorts {
        HostPorts {
            tray: self.tray.clone(),
            windows: self.windows.clone(),
            caches: self.caches.clone(),
            scope: self.scope.clone(),
        }
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}
