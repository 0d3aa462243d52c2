use tracing::debug;

use super::InputSession;

impl InputSession {
    /// Commit without confirmation when the lookup leaves no real choice.
    ///
    /// - one candidate: commit it
    /// - no candidate and text typed past the prefix: commit the preedit
    ///   literally, leaving the widgets as just drawn
    pub(super) fn auto_commit(&mut self) {
        if self.table.len() == 1 && self.config.commit_on_single_candidate {
            debug!("auto-commit single candidate");
            self.commit_candidate();
        } else if self.table.is_empty()
            && self.config.commit_on_zero_candidates
            && self.preedit.chars().count() > self.prefixes.max_active_len()
        {
            debug!(preedit = %self.preedit, "auto-commit literal text");
            let text = std::mem::take(&mut self.preedit);
            self.commit_string(text, false);
        }
    }
}
