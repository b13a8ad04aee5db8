//! InMemoryCacheStorage - 開発用のキャッシュ一覧

use std::sync::Mutex;

use async_trait::async_trait;

use super::journal::{HostCall, HostJournal};
use crate::ports::{CacheStorage, HostError};
use crate::sync::lock;

pub struct InMemoryCacheStorage {
    journal: HostJournal,
    names: Mutex<Vec<String>>,
}

impl InMemoryCacheStorage {
    pub fn new(journal: HostJournal) -> Self {
        Self {
            journal,
            names: Mutex::new(Vec::new()),
        }
    }

    pub fn insert(&self, name: &str) {
        let mut names = lock(&self.names);
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    pub fn names(&self) -> Vec<String> {
        lock(&self.names).clone()
    }
}

#[async_trait]
impl CacheStorage for InMemoryCacheStorage {
    async fn keys(&self) -> Result<Vec<String>, HostError> {
        self.journal.record(HostCall::CacheKeys);
        Ok(self.names())
    }

    async fn delete(&self, name: &str) -> Result<bool, HostError> {
        self.journal.record(HostCall::CacheDelete(name.to_string()));
        let mut names = lock(&self.names);
        let before = names.len();
        names.retain(|n| n != name);
        Ok(names.len() != before)
    }
}
