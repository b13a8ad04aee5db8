//! InMemoryWorkerScope - 開発用のライフサイクル操作

use std::sync::Arc;

use async_trait::async_trait;

use super::inmem_windows::InMemoryWindowClients;
use super::journal::{HostCall, HostJournal};
use crate::ports::{HostError, WorkerScope};

/// `claim_clients` marks every window as controlled, like a real host.
pub struct InMemoryWorkerScope {
    journal: HostJournal,
    windows: Arc<InMemoryWindowClients>,
}

impl InMemoryWorkerScope {
    pub fn new(journal: HostJournal, windows: Arc<InMemoryWindowClients>) -> Self {
        Self { journal, windows }
    }
}

#[async_trait]
impl WorkerScope for InMemoryWorkerScope {
    async fn skip_waiting(&self) -> Result<(), HostError> {
        self.journal.record(HostCall::SkipWaiting);
        Ok(())
    }

    async fn claim_clients(&self) -> Result<(), HostError> {
        self.journal.record(HostCall::ClaimClients);
        self.windows.control_all();
        Ok(())
    }
}
