//! Events - ホストから届くイベントと、その処理結果
//!
//! ホスト（ブラウザの service worker 相当）は 4 種類のイベントを配送します。
//! 各イベントは `EventKind` をキーにディスパッチテーブルで handler に振り分けられ、
//! handler は `EventOutcome` を返して完了します。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::WindowId;
use super::notification::{NotificationRecord, WindowClient};

/// Dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Install,
    Activate,
    Push,
    NotificationClick,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Install,
        EventKind::Activate,
        EventKind::Push,
        EventKind::NotificationClick,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Install => "install",
            EventKind::Activate => "activate",
            EventKind::Push => "push",
            EventKind::NotificationClick => "notification_click",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivateEvent;

/// Inbound push; the text may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushEvent {
    pub text: Option<String>,
}

impl PushEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn empty() -> Self {
        Self { text: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationClickEvent {
    pub notification: NotificationRecord,
    /// Action button pressed, if any.
    pub action: Option<String>,
}

impl NotificationClickEvent {
    pub fn new(notification: NotificationRecord) -> Self {
        Self {
            notification,
            action: None,
        }
    }
}

/// Everything the host can deliver to the agent.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Install(InstallEvent),
    Activate(ActivateEvent),
    Push(PushEvent),
    NotificationClick(NotificationClickEvent),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::Install(_) => EventKind::Install,
            HostEvent::Activate(_) => EventKind::Activate,
            HostEvent::Push(_) => EventKind::Push,
            HostEvent::NotificationClick(_) => EventKind::NotificationClick,
        }
    }
}

/// What a settled event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Installed,
    Activated { purged: Vec<String> },
    NotificationShown(NotificationRecord),
    Focused(WindowClient),
    Opened { url: String, window: Option<WindowClient> },
}

impl EventOutcome {
    pub fn focused_window(&self) -> Option<WindowId> {
        match self {
            EventOutcome::Focused(window) => Some(window.id),
            _ => None,
        }
    }

    pub fn opened_url(&self) -> Option<&str> {
        match self {
            EventOutcome::Opened { url, .. } => Some(url),
            _ => None,
        }
    }
}
