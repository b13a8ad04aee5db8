//! InMemoryWindowClients - 開発用のウィンドウ一覧

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::journal::{HostCall, HostJournal};
use crate::domain::{ClientQuery, ClientType, WindowClient, WindowId};
use crate::ports::{HostError, IdGenerator, WindowClients};
use crate::sync::lock;

/// InMemoryWindowClients は開いているクライアントを登録順で保持
///
/// # 実装詳細
/// - `match_all` は登録順（= ホスト定義の順序）で返す
/// - `focus` したウィンドウだけが focused = true になる
/// - `report_missing_list` で `match_all` が `None` を返すホストを再現
pub struct InMemoryWindowClients {
    ids: Arc<dyn IdGenerator>,
    journal: HostJournal,
    clients: Mutex<Vec<WindowClient>>,
    missing_list: Mutex<bool>,
    refuse_open: Mutex<bool>,
}

impl InMemoryWindowClients {
    pub fn new(ids: Arc<dyn IdGenerator>, journal: HostJournal) -> Self {
        Self {
            ids,
            journal,
            clients: Mutex::new(Vec::new()),
            missing_list: Mutex::new(false),
            refuse_open: Mutex::new(false),
        }
    }

    /// Register an already-open client and return it.
    pub fn add_client(&self, url: &str, client_type: ClientType, controlled: bool) -> WindowClient {
        let client = WindowClient {
            id: self.ids.generate_window_id(),
            url: url.to_string(),
            client_type,
            focused: false,
            controlled,
        };
        lock(&self.clients).push(client.clone());
        client
    }

    pub fn add_window(&self, url: &str) -> WindowClient {
        self.add_client(url, ClientType::Window, true)
    }

    pub fn clients(&self) -> Vec<WindowClient> {
        lock(&self.clients).clone()
    }

    pub fn close_all(&self) {
        lock(&self.clients).clear();
    }

    pub fn report_missing_list(&self, missing: bool) {
        *lock(&self.missing_list) = missing;
    }

    /// Make `open_window` resolve to `None`, as a host does when it declines.
    pub fn refuse_open(&self, refuse: bool) {
        *lock(&self.refuse_open) = refuse;
    }

    /// Mark every window controlled (what `claim_clients` does on a real host).
    pub fn control_all(&self) {
        for client in lock(&self.clients).iter_mut() {
            client.controlled = true;
        }
    }
}

#[async_trait]
impl WindowClients for InMemoryWindowClients {
    async fn match_all(&self, query: ClientQuery) -> Result<Option<Vec<WindowClient>>, HostError> {
        self.journal.record(HostCall::MatchAll);
        if *lock(&self.missing_list) {
            return Ok(None);
        }
        let matched = lock(&self.clients)
            .iter()
            .filter(|c| query.client_type.matches(c.client_type))
            .filter(|c| query.include_uncontrolled || c.controlled)
            .cloned()
            .collect();
        Ok(Some(matched))
    }

    async fn focus(&self, id: &WindowId) -> Result<WindowClient, HostError> {
        self.journal.record(HostCall::Focus(*id));
        let mut clients = lock(&self.clients);
        let mut focused = None;
        for client in clients.iter_mut() {
            client.focused = client.id == *id;
            if client.focused {
                focused = Some(client.clone());
            }
        }
        focused.ok_or_else(|| HostError::OperationFailed(format!("no client {id} to focus")))
    }

    async fn open_window(&self, url: &str) -> Result<Option<WindowClient>, HostError> {
        self.journal.record(HostCall::Open(url.to_string()));
        if *lock(&self.refuse_open) {
            return Ok(None);
        }
        let client = WindowClient {
            id: self.ids.generate_window_id(),
            url: url.to_string(),
            client_type: ClientType::Window,
            focused: true,
            controlled: true,
        };
        let mut clients = lock(&self.clients);
        for other in clients.iter_mut() {
            other.focused = false;
        }
        clients.push(client.clone());
        Ok(Some(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{SystemClock, UlidGenerator};

    fn windows() -> InMemoryWindowClients {
        InMemoryWindowClients::new(Arc::new(UlidGenerator::new(SystemClock)), HostJournal::new())
    }

    #[tokio::test]
    async fn match_all_filters_by_type_and_control() {
        let host = windows();
        let first = host.add_window("/#/courses");
        host.add_client("/sw-helper.js", ClientType::Worker, true);
        let uncontrolled = host.add_client("/#/chat", ClientType::Window, false);

        let all = host.match_all(ClientQuery::windows()).await.unwrap().unwrap();
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![first.id, uncontrolled.id]);

        let controlled_only = ClientQuery {
            client_type: ClientType::Window,
            include_uncontrolled: false,
        };
        let controlled = host.match_all(controlled_only).await.unwrap().unwrap();
        assert_eq!(controlled.len(), 1);
    }

    #[tokio::test]
    async fn focus_unknown_window_fails() {
        let host = windows();
        let ghost = WindowId::from_ulid(ulid::Ulid::new());
        assert!(host.focus(&ghost).await.is_err());
    }
}
