//! Name-to-character input method engine.
//!
//! Typing a name such as `smile`, or a prefixed form such as `:smile`,
//! looks the name up and commits the matching character. The key state
//! machine lives in `uniemoji-session`; this crate binds it to a host
//! framework through [`EngineHost`].

pub mod engine;
mod trace_init;

pub use engine::{Engine, EngineHost};
pub use trace_init::{init_tracing, log_filter};

pub use uniemoji_core::{lookup, settings};
pub use uniemoji_core::lookup::{Candidate, CharacterLookup, TableLookup};
pub use uniemoji_core::settings::{Settings, SettingsError};
pub use uniemoji_session::{
    keysym, modifier, HostAction, InputSession, KeyResponse, LookupTableView, SessionConfig,
    SessionState,
};

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
