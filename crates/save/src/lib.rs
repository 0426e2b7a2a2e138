//! Edit-session persistence: versioned binary round-trip of the action
//! history, its cursor, and the layout the session started from.

mod atomic_write;
pub mod file_header;
pub mod save_error;
pub mod session_codec;
pub mod session_io;
mod session_plugin;
pub mod session_types;

pub use save_error::SaveError;
pub use session_io::{load_session, save_session, RestoredSession};
pub use session_plugin::{LoadSessionEvent, SaveSessionEvent, SessionPlugin};
