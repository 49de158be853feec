//! Notification module for ghostpad
//!
//! Transient status-line messages (export confirmations and the like) that
//! expire on their own after a few seconds.

mod state;

pub use state::NotificationState;
