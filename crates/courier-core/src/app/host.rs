//! HostPorts - handler に渡すホスト実装の束

use std::sync::Arc;

use crate::ports::{CacheStorage, NotificationTray, WindowClients, WorkerScope};

/// HostPorts はホスト環境の各 port を保持
///
/// clone は Arc のコピーだけです。
#[derive(Clone)]
pub struct HostPorts {
    pub tray: Arc<dyn NotificationTray>,
    pub windows: Arc<dyn WindowClients>,
    pub caches: Arc<dyn CacheStorage>,
    pub scope: Arc<dyn WorkerScope>,
}
