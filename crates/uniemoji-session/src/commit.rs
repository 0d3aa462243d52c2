use tracing::debug;

use super::types::{HostAction, KeyResponse};
use super::InputSession;

impl InputSession {
    /// Commit the raw preedit as literal text (no-op text-wise when empty)
    /// and clear the composition.
    pub fn commit(&mut self) -> KeyResponse {
        self.commit_preedit();
        self.finish(true)
    }

    pub(super) fn commit_preedit(&mut self) {
        let text = std::mem::take(&mut self.preedit);
        self.commit_string(text, true);
    }

    pub(super) fn commit_candidate(&mut self) {
        let Some(text) = self.table.current().map(|c| c.text.clone()) else {
            return;
        };
        self.commit_string(text, true);
    }

    /// Send `text` to the host and end the composition.
    ///
    /// With `refresh`, an empty recompute follows so the host drops its
    /// preedit and candidate list. Without it the current widgets stay as
    /// they are until the next redraw.
    pub(super) fn commit_string(&mut self, text: String, refresh: bool) {
        debug!(text = %text, refresh, "commit");
        if !text.is_empty() {
            self.actions.push(HostAction::Commit(text));
        }
        self.preedit.clear();
        if refresh {
            self.recompute_candidates();
        }
        self.prefixes.reset();
    }
}
