use tracing::debug;

use super::types::KeyResponse;
use super::InputSession;

impl InputSession {
    /// Queue a candidate recompute for the next idle slot. Idempotent while
    /// one is already queued; the queued run reads the preedit as it is then.
    pub fn invalidate(&mut self) {
        if self.recompute_pending {
            return;
        }
        self.recompute_pending = true;
        self.idle_requested = true;
    }

    /// Drain the idle slot. Returns `None` if nothing was queued.
    pub fn run_idle(&mut self) -> Option<KeyResponse> {
        if !self.recompute_pending {
            return None;
        }
        self.recompute_candidates();
        Some(self.finish(false))
    }

    /// Query text: the preedit minus the first active prefix.
    ///
    /// Only the first activated prefix is stripped even when several are
    /// active.
    pub(super) fn query(&self) -> String {
        match self.prefixes.active().first() {
            Some(prefix) => self.preedit.chars().skip(prefix.chars().count()).collect(),
            None => self.preedit.clone(),
        }
    }

    /// Rebuild the candidate list from the current preedit, redraw, then
    /// apply the auto-commit rules.
    pub(super) fn recompute_candidates(&mut self) {
        self.table.clear();
        if !self.preedit.is_empty() {
            let query = self.query();
            let results = self.lookup.find_characters(&query, self.prefixes.active());
            debug!(
                preedit = %self.preedit,
                query = %query,
                results = results.len(),
                "recompute"
            );
            self.table.set_candidates(results);
        }
        self.redraw_all();
        self.recompute_pending = false;
        self.auto_commit();
    }
}
