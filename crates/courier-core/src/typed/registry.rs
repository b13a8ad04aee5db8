//! TypedRegistry - EventKind をキーにしたディスパッチテーブル
//!
//! # 学習ポイント
//! - HashMap での型消去された trait object の管理
//! - Generic methods での登録と型安全性
//! - Arc による共有所有権（spawn したタスクに handler を渡す）

use crate::domain::EventKind;
use crate::typed::handler::TypedHandler;

use super::event::Event;
use super::handler::{DynHandler, Handler};
use std::collections::HashMap;
use std::sync::Arc;

/// TypedRegistry は型付き Handler を登録・管理
///
/// # 使用例
/// ```ignore
/// let mut registry = TypedRegistry::new();
/// registry.register::<PushEvent, _>(PushHandler::new(tray))?;
///
/// let handler = registry.get(EventKind::Push);
/// ```
///
/// 構築時（mutable）に登録し、実行時は immutable に参照するだけなのでロック不要です。
#[derive(Default)]
pub struct TypedRegistry {
    handlers: HashMap<EventKind, Arc<dyn DynHandler>>,
}

/// RegistryError は TypedRegistry の操作エラー
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Handler for event kind '{0}' is already registered")]
    AlreadyRegistered(EventKind),
}

impl TypedRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<E: Event, H: Handler<E> + 'static>(
        &mut self,
        handler: H,
    ) -> Result<(), RegistryError> {
        if self.handlers.contains_key(&E::KIND) {
            return Err(RegistryError::AlreadyRegistered(E::KIND));
        }
        let typed_handler = TypedHandler::<E, H>::new(handler);
        self.handlers.insert(E::KIND, Arc::new(typed_handler));
        Ok(())
    }

    pub fn get(&self, kind: EventKind) -> Option<Arc<dyn DynHandler>> {
        self.handlers.get(&kind).cloned()
    }

    /// Registered kinds, sorted.
    pub fn registered_kinds(&self) -> Vec<EventKind> {
        let mut kinds: Vec<EventKind> = self.handlers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventOutcome, InstallEvent, PushEvent};
    use crate::error::CourierError;
    use crate::typed::handler::tests::InstalledHandler;
    use async_trait::async_trait;

    struct EchoPushHandler;

    #[async_trait]
    impl Handler<PushEvent> for EchoPushHandler {
        async fn handle(&self, _event: PushEvent) -> Result<EventOutcome, CourierError> {
            Ok(EventOutcome::Installed)
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = TypedRegistry::new();
        registry.register::<InstallEvent, _>(InstalledHandler).unwrap();

        let retrieved = registry.get(EventKind::Install).unwrap();
        assert_eq!(retrieved.kind(), EventKind::Install);
        assert!(registry.get(EventKind::Push).is_none());
    }

    #[test]
    fn test_double_registration() {
        let mut registry = TypedRegistry::new();
        registry.register::<InstallEvent, _>(InstalledHandler).unwrap();
        let result = registry.register::<InstallEvent, _>(InstalledHandler);
        assert!(matches!(
            result,
            Err(RegistryError::AlreadyRegistered(EventKind::Install))
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registered_kinds_are_sorted() {
        let mut registry = TypedRegistry::new();
        registry.register::<PushEvent, _>(EchoPushHandler).unwrap();
        registry.register::<InstallEvent, _>(InstalledHandler).unwrap();
        assert_eq!(
            registry.registered_kinds(),
            vec![EventKind::Install, EventKind::Push]
        );
    }
}
