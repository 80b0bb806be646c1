//! Liveroom Runtime - Session handle and event dispatch
//!
//! The role model itself is synchronous and single-writer. This crate puts
//! it behind a shared handle so the UI and the presence feed can both reach
//! it, and applies inbound events in delivery order:
//! 1. Presence (join / leave)
//! 2. Room snapshots from the session store
//! 3. User commands (mode, promote, demote, follow)
//! 4. Room actions passed through to the embedding layer

pub mod event;
pub mod handle;
pub mod observability;
pub mod room;

pub use event::*;
pub use handle::*;
pub use observability::*;
pub use room::*;
