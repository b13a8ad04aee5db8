//! Handlers - ホストイベントごとの処理
//!
//! 各 handler は ports だけに依存し、判断は domain の純粋関数に任せます。
//!
//! | EventKind | Handler |
//! |---|---|
//! | install | InstallHandler |
//! | activate | ActivateHandler |
//! | push | PushHandler |
//! | notification_click | NotificationClickHandler |

pub mod activate;
pub mod click;
pub mod install;
pub mod push;

pub use self::activate::ActivateHandler;
pub use self::click::NotificationClickHandler;
pub use self::install::InstallHandler;
pub use self::push::PushHandler;
