//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the auth view of the current user, `menu` holds transient
//! navigation chrome, and `auth_watcher` is the only writer of `session`.

pub mod auth_watcher;
pub mod menu;
pub mod session;
