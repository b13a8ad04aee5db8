//! AgentBuilder - エージェントの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use crate::config::AgentConfig;
use crate::domain::{ActivateEvent, EventKind, InstallEvent, NotificationClickEvent, PushEvent};
use crate::handlers::{ActivateHandler, InstallHandler, NotificationClickHandler, PushHandler};
use crate::typed::{Event, Handler, RegistryError, TypedRegistry};

use super::agent::Agent;
use super::host::HostPorts;

/// AgentBuilder はエージェントを構築
///
/// # 使用例
/// ```ignore
/// let agent = AgentBuilder::new()
///     .with_default_handlers(host.ports(), &config.agent)?
///     .expect_events(&EventKind::ALL)
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - expect_events() で期待される EventKind を登録
/// - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
/// - 不足があれば BuildError を返す
pub struct AgentBuilder {
    registry: TypedRegistry,
    expected: Option<Vec<EventKind>>,
}

/// BuildError はエージェント構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing event handlers: {0:?}. These events were expected but not registered.")]
    MissingEvents(Vec<EventKind>),
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            registry: TypedRegistry::new(),
            expected: None,
        }
    }

    pub fn register<E: Event, H: Handler<E> + 'static>(
        mut self,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.registry.register::<E, H>(handler)?;
        Ok(self)
    }

    /// Register install, activate, push and notification-click handlers.
    pub fn with_default_handlers(
        self,
        host: HostPorts,
        config: &AgentConfig,
    ) -> Result<Self, RegistryError> {
        self.register::<InstallEvent, _>(InstallHandler::new(host.scope.clone()))?
            .register::<ActivateEvent, _>(ActivateHandler::new(
                host.caches.clone(),
                host.scope.clone(),
                config.cache_name.clone(),
            ))?
            .register::<PushEvent, _>(PushHandler::new(host.tray.clone()))?
            .register::<NotificationClickEvent, _>(NotificationClickHandler::new(
                host.tray,
                host.windows,
            ))
    }

    pub fn expect_events(mut self, kinds: &[EventKind]) -> Self {
        self.expected = Some(kinds.to_vec());
        self
    }

    pub fn build(self) -> Result<Agent, BuildError> {
        if let Some(expected) = &self.expected {
            let registered = self.registry.registered_kinds();
            let missing: Vec<EventKind> = expected
                .iter()
                .filter(|kind| !registered.contains(kind))
                .copied()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingEvents(missing));
            }
        }
        Ok(Agent::new(self.registry))
    }
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
