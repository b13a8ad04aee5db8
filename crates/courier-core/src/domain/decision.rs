//! Click decision: what to do with the application windows when a
//! notification is clicked.
//!
//! This module is pure: it takes the notification data and the window list
//! the host enumerated and returns the action. Executing it is the click
//! handler's job.

use super::ids::WindowId;
use super::notification::WindowClient;
use super::payload::NotificationData;
use super::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickDecision {
    /// Bring an existing window forward. No navigation happens.
    Focus(WindowId),
    /// No window is open: open one at the deep link.
    Open(Route),
}

/// The first window in host order wins; the list is never re-sorted.
pub fn decide_click(data: &NotificationData, windows: &[WindowClient]) -> ClickDecision {
    match windows.first() {
        Some(window) => ClickDecision::Focus(window.id),
        None => ClickDecision::Open(Route::for_data(data)),
    }
}
