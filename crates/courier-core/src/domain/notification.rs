//! Host-owned records the agent refers to: shown notifications and open
//! application windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{NotificationId, WindowId};
use super::payload::{NotificationData, NotificationRequest};

/// A notification as it sits in the platform tray.
///
/// A direct projection of the push payload; the tray owns it and the agent
/// only uses `id` to close it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub data: NotificationData,
    pub shown_at: DateTime<Utc>,
}

impl NotificationRecord {
    pub fn from_request(id: NotificationId, request: NotificationRequest, shown_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: request.title,
            body: request.options.body,
            data: request.options.data,
            shown_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientType {
    Window,
    Worker,
    SharedWorker,
    All,
}

impl ClientType {
    pub fn matches(self, other: ClientType) -> bool {
        self == ClientType::All || self == other
    }
}

/// Filter passed to `WindowClients::match_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientQuery {
    pub client_type: ClientType,
    /// Also list windows not yet controlled by this agent version.
    pub include_uncontrolled: bool,
}

impl ClientQuery {
    /// Every application window, controlled or not.
    pub fn windows() -> Self {
        Self {
            client_type: ClientType::Window,
            include_uncontrolled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowClient {
    pub id: WindowId,
    pub url: String,
    pub client_type: ClientType,
    pub focused: bool,
    /// Whether the current agent version controls this client.
    pub controlled: bool,
}
