//! Incremental input state machine for name-to-character input.
//!
//! `InputSession` consumes raw key events one at a time, keeps the preedit
//! buffer and the candidate list, and returns `KeyResponse`s describing what
//! the host should do (commit text, redraw preedit, update the lookup table).
//!
//! Candidate lookups never run inside a key handler. `invalidate()` fills a
//! single pending slot and asks the host to call `run_idle()` at its next
//! idle point; any number of edits before that collapse into one lookup.

pub(crate) mod types;

mod auto_commit;
mod candidate_gen;
mod commit;
mod key_handlers;
pub mod lookup_table;
mod navigation;
pub mod prefix;
mod response;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

use uniemoji_core::lookup::{Candidate, CharacterLookup};

pub use lookup_table::LookupTable;
pub use prefix::PrefixTracker;
pub use types::{
    keysym, modifier, HostAction, KeyResponse, LookupTableView, SessionConfig, SessionState,
};

/// Stateful input session encapsulating all key processing.
pub struct InputSession {
    lookup: Arc<dyn CharacterLookup>,
    config: SessionConfig,

    preedit: String,
    prefixes: PrefixTracker,
    table: LookupTable,

    /// Single-slot idle work: set by `invalidate`, drained by `run_idle`.
    recompute_pending: bool,

    // Output accumulated while handling one event
    actions: Vec<HostAction>,
    idle_requested: bool,
}

impl InputSession {
    pub fn new(lookup: Arc<dyn CharacterLookup>, config: SessionConfig) -> Self {
        let prefixes = PrefixTracker::new(config.prefixes.iter().cloned());
        let table = LookupTable::new(config.page_size);
        Self {
            lookup,
            config,
            preedit: String::new(),
            prefixes,
            table,
            recompute_pending: false,
            actions: Vec::new(),
            idle_requested: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        if self.recompute_pending {
            SessionState::PendingRecompute
        } else if self.preedit.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Composing
        }
    }

    pub fn is_composing(&self) -> bool {
        !self.preedit.is_empty()
    }

    pub fn preedit(&self) -> &str {
        &self.preedit
    }

    pub fn active_prefixes(&self) -> &[String] {
        self.prefixes.active()
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.table.candidates()
    }

    pub fn cursor_pos(&self) -> usize {
        self.table.cursor_pos()
    }

    pub fn is_recompute_pending(&self) -> bool {
        self.recompute_pending
    }

    /// Focus gained. Nothing to restore: compositions never span focus.
    pub fn focus_in(&mut self) -> KeyResponse {
        debug!("focus_in");
        self.finish(false)
    }

    pub fn focus_out(&mut self) -> KeyResponse {
        debug!("focus_out");
        self.reset()
    }

    /// Host reset: drop the preedit without committing it.
    ///
    /// Prefix tracking state is left as is, unlike `commit`.
    pub fn reset(&mut self) -> KeyResponse {
        debug!("reset");
        self.preedit.clear();
        self.finish(false)
    }

    /// Collect the actions accumulated for the current event.
    fn finish(&mut self, consumed: bool) -> KeyResponse {
        KeyResponse {
            consumed,
            actions: std::mem::take(&mut self.actions),
            schedule_idle: std::mem::take(&mut self.idle_requested),
        }
    }
}
