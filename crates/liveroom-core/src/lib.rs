//! Liveroom Core - Fundamental types for a live collaborative session
//!
//! This crate defines the vocabulary shared by the role model and runtime:
//! - Identifiers (ParticipantId, RoomId)
//! - Session mode (Open, Classroom)
//! - Derived roles (Owner, Editor, Spectator)
//! - Participants and the error type

pub mod id;
pub mod mode;
pub mod participant;
pub mod error;

pub use id::*;
pub use mode::*;
pub use participant::*;
pub use error::*;
