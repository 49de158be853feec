//! ghostpad - a distraction-free terminal writing pad with inline AI
//! continuations
//!
//! The editor keeps a single persisted note. After a pause in typing it asks a
//! completion endpoint for a short continuation, streams it in as dimmed ghost
//! text, and lets the user accept (Tab), retry (Shift+Tab), or dismiss (Esc)
//! it without leaving the keyboard.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod ghost;
pub mod notification;
pub mod store;
pub mod suggestion;
