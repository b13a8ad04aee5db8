//! Event trait - 型付きイベントの定義
//!
//! # 学習ポイント
//! - Associated Constants (`const KIND`)
//! - enum (`HostEvent`) と個別の struct の相互変換

use crate::domain::{
    ActivateEvent, EventKind, HostEvent, InstallEvent, NotificationClickEvent, PushEvent,
};

/// Event は EventKind と型を対応付ける
///
/// `from_host` は種類が合わなければ元のイベントをそのまま返します。
pub trait Event: Send + Sync + Sized + 'static {
    const KIND: EventKind;

    fn from_host(event: HostEvent) -> Result<Self, HostEvent>;

    fn into_host(self) -> HostEvent;
}

impl Event for InstallEvent {
    const KIND: EventKind = EventKind::Install;

    fn from_host(event: HostEvent) -> Result<Self, HostEvent> {
        match event {
            HostEvent::Install(e) => Ok(e),
            other => Err(other),
        }
    }

    fn into_host(self) -> HostEvent {
        HostEvent::Install(self)
    }
}

impl Event for ActivateEvent {
    const KIND: EventKind = EventKind::Activate;

    fn from_host(event: HostEvent) -> Result<Self, HostEvent> {
        match event {
            HostEvent::Activate(e) => Ok(e),
            other => Err(other),
        }
    }

    fn into_host(self) -> HostEvent {
        HostEvent::Activate(self)
    }
}

impl Event for PushEvent {
    const KIND: EventKind = EventKind::Push;

    fn from_host(event: HostEvent) -> Result<Self, HostEvent> {
        match event {
            HostEvent::Push(e) => Ok(e),
            other => Err(other),
        }
    }

    fn into_host(self) -> HostEvent {
        HostEvent::Push(self)
    }
}

impl Event for NotificationClickEvent {
    const KIND: EventKind = EventKind::NotificationClick;

    fn from_host(event: HostEvent) -> Result<Self, HostEvent> {
        match event {
            HostEvent::NotificationClick(e) => Ok(e),
            other => Err(other),
        }
    }

    fn into_host(self) -> HostEvent {
        HostEvent::NotificationClick(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_line_up_with_host_events() {
        assert_eq!(PushEvent::empty().into_host().kind(), PushEvent::KIND);
        assert_eq!(InstallEvent.into_host().kind(), InstallEvent::KIND);
        assert_eq!(ActivateEvent.into_host().kind(), ActivateEvent::KIND);
    }

    #[test]
    fn mismatched_event_is_handed_back() {
        let host = HostEvent::Install(InstallEvent);
        let back = PushEvent::from_host(host.clone()).unwrap_err();
        assert_eq!(back, host);
    }
}
