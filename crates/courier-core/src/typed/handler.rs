//! Handler trait - Event を処理する Handler の定義
//!
//! # 学習ポイント
//! - ジェネリック trait (Handler<E>)
//! - Object-safe trait (DynHandler)
//! - Type erasure パターン (TypedHandler<E, H> → DynHandler)

use super::event::Event;
use crate::domain::{EventKind, EventOutcome, HostEvent};
use crate::error::CourierError;
use async_trait::async_trait;
use std::marker::PhantomData;

/// Handler は Event を処理して EventOutcome を返す
///
/// 戻り値の future が settle するまでがイベントの寿命です。
/// handler 内の非同期処理はすべて await してから返してください。
#[async_trait]
pub trait Handler<E: Event>: Send + Sync {
    async fn handle(&self, event: E) -> Result<EventOutcome, CourierError>;
}

/// DynHandler は object-safe な Handler の抽象化
///
/// HashMap<EventKind, Arc<dyn DynHandler>> に格納するために使います。
#[async_trait]
pub trait DynHandler: Send + Sync {
    async fn handle_dyn(&self, event: HostEvent) -> Result<EventOutcome, CourierError>;
    fn kind(&self) -> EventKind;
}

pub struct TypedHandler<E: Event, H: Handler<E>> {
    handler: H,
    _marker: PhantomData<fn(E)>,
}

impl<E: Event, H: Handler<E>> TypedHandler<E, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Event, H: Handler<E>> DynHandler for TypedHandler<E, H> {
    async fn handle_dyn(&self, event: HostEvent) -> Result<EventOutcome, CourierError> {
        let event = E::from_host(event).map_err(|other| CourierError::EventMismatch {
            expected: E::KIND,
            actual: other.kind(),
        })?;
        self.handler.handle(event).await
    }

    fn kind(&self) -> EventKind {
        E::KIND
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{InstallEvent, PushEvent};

    pub(crate) struct InstalledHandler;

    #[async_trait]
    impl Handler<InstallEvent> for InstalledHandler {
        async fn handle(&self, _event: InstallEvent) -> Result<EventOutcome, CourierError> {
            Ok(EventOutcome::Installed)
        }
    }

    #[tokio::test]
    async fn typed_handler_accepts_its_kind() {
        let typed = TypedHandler::<InstallEvent, _>::new(InstalledHandler);
        assert_eq!(typed.kind(), EventKind::Install);

        let outcome = typed.handle_dyn(HostEvent::Install(InstallEvent)).await.unwrap();
        assert_eq!(outcome, EventOutcome::Installed);
    }

    #[tokio::test]
    async fn typed_handler_rejects_other_kinds() {
        let typed = TypedHandler::<InstallEvent, _>::new(InstalledHandler);
        let err = typed
            .handle_dyn(HostEvent::Push(PushEvent::empty()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CourierError::EventMismatch {
                expected: EventKind::Install,
                actual: EventKind::Push
            }
        ));
    }
}
