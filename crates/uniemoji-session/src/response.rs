use super::types::HostAction;
use super::InputSession;

impl InputSession {
    /// Auxiliary and preedit text only; the candidate list is untouched.
    pub(super) fn redraw_preedit(&mut self) {
        let len = self.preedit.chars().count();
        let visible = len > 0;
        self.actions.push(HostAction::UpdateAuxiliary {
            text: self.preedit.clone(),
            visible,
        });
        self.actions.push(HostAction::UpdatePreedit {
            text: self.preedit.clone(),
            cursor: len,
            visible,
        });
    }

    pub(super) fn redraw_lookup_table(&mut self) {
        self.actions
            .push(HostAction::UpdateLookupTable(self.table.view()));
    }

    pub(super) fn redraw_all(&mut self) {
        self.redraw_preedit();
        self.redraw_lookup_table();
    }
}
