//! Push payloads and the notification data derived from them.
//!
//! Payload text comes from a server-side notifier and is untrusted. Parsing
//! never fails: anything unusable degrades to an empty payload, and every
//! field is read best-effort.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed push message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PushPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub data: Option<Map<String, Value>>,
    /// Top-level `type`. Re-applied on top of `data` when building
    /// [`NotificationData`].
    pub kind: Option<Value>,
}

impl PushPayload {
    /// Parse raw push text. `None`, malformed JSON and non-object roots all
    /// give the empty payload.
    pub fn parse(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::default();
        };
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(root)) => Self::from_object(root),
            Ok(other) => {
                tracing::warn!(kind = json_kind(&other), "push payload is not a JSON object");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed push payload");
                Self::default()
            }
        }
    }

    fn from_object(mut root: Map<String, Value>) -> Self {
        let data = match root.remove("data") {
            Some(Value::Object(data)) => Some(data),
            Some(Value::Null) | None => None,
            Some(other) => {
                tracing::debug!(kind = json_kind(&other), "ignoring non-object push data");
                None
            }
        };
        Self {
            title: take_string(&mut root, "title"),
            body: take_string(&mut root, "body"),
            data,
            kind: root.remove("type").filter(|v| !v.is_null()),
        }
    }

    /// `{...data, type}`: the top-level `type` always wins, including when it
    /// is absent (the key is then dropped).
    pub fn notification_data(&self) -> NotificationData {
        let mut merged = self.data.clone().unwrap_or_default();
        match &self.kind {
            Some(kind) => {
                merged.insert("type".to_string(), kind.clone());
            }
            None => {
                merged.remove("type");
            }
        }
        NotificationData(merged)
    }

    /// What the agent asks the notification tray to display.
    pub fn to_request(&self) -> NotificationRequest {
        NotificationRequest {
            title: self.title.clone(),
            options: NotificationOptions {
                body: self.body.clone(),
                data: self.notification_data(),
            },
        }
    }
}

fn take_string(root: &mut Map<String, Value>, key: &str) -> Option<String> {
    match root.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Destination view encoded in the notification's `type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Chat,
    Calendar,
    /// Any other string, or a missing / non-string `type`.
    Other(Option<String>),
}

/// Data attached to a displayed notification and read back at click time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationData(pub Map<String, Value>);

impl NotificationData {
    pub fn kind(&self) -> NotificationKind {
        match self.0.get("type").and_then(Value::as_str) {
            Some("chat") => NotificationKind::Chat,
            Some("calendar") => NotificationKind::Calendar,
            other => NotificationKind::Other(other.map(str::to_string)),
        }
    }

    pub fn chat_id(&self) -> Option<String> {
        self.id_field("chatId")
    }

    pub fn calendar_id(&self) -> Option<String> {
        self.id_field("calendarId")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn id_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// `(title, { body, data })` handed to the tray.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: Option<String>,
    pub options: NotificationOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub body: Option<String>,
    pub data: NotificationData,
}
