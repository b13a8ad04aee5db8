//! Deep links into the single-page application.

use std::fmt;

use super::payload::{NotificationData, NotificationKind};

/// Hash-routed view opened when no application window exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Chat(Option<String>),
    Calendar(Option<String>),
    Root,
}

impl Route {
    pub fn for_data(data: &NotificationData) -> Self {
        match data.kind() {
            NotificationKind::Chat => Route::Chat(data.chat_id()),
            NotificationKind::Calendar => Route::Calendar(data.calendar_id()),
            NotificationKind::Other(_) => Route::Root,
        }
    }

    pub fn to_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Chat(Some(id)) => write!(f, "/#/chat?id={id}"),
            Route::Chat(None) => f.write_str("/#/chat"),
            Route::Calendar(Some(id)) => write!(f, "/#/calendar?id={id}"),
            Route::Calendar(None) => f.write_str("/#/calendar"),
            Route::Root => f.write_str("/"),
        }
    }
}
