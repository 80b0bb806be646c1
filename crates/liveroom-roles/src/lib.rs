//! Liveroom Roles
//!
//! Role and visibility model for a live collaborative editing session.
//!
//! # Model
//!
//! - Records: which ids the session store lists as owners and editors
//! - Mode: whether the editor record is enforced (Classroom) or every
//!   non-owner may edit (Open)
//! - Classification: a pure projection of presence and records into
//!   owners, editors and spectators
//! - Follow: whose viewport the local viewer mirrors
//!
//! Roles are never stored. They are recomputed from the records on every
//! query, so a mode switch or a rejoin can never leave a stale role behind.

pub mod authority;
pub mod classify;
pub mod config;
pub mod follow;
pub mod panel;
pub mod session;

pub use authority::*;
pub use classify::*;
pub use config::*;
pub use follow::*;
pub use panel::*;
pub use session::*;
