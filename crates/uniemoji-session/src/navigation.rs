use super::types::KeyResponse;
use super::InputSession;

#[derive(Debug, Clone, Copy)]
pub(super) enum Move {
    PageUp,
    PageDown,
    Up,
    Down,
}

impl InputSession {
    /// Popup page-up button. Consumed when the cursor moved.
    pub fn page_up(&mut self) -> KeyResponse {
        let moved = self.move_cursor(Move::PageUp);
        self.finish(moved)
    }

    pub fn page_down(&mut self) -> KeyResponse {
        let moved = self.move_cursor(Move::PageDown);
        self.finish(moved)
    }

    pub fn cursor_up(&mut self) -> KeyResponse {
        let moved = self.move_cursor(Move::Up);
        self.finish(moved)
    }

    pub fn cursor_down(&mut self) -> KeyResponse {
        let moved = self.move_cursor(Move::Down);
        self.finish(moved)
    }

    /// A visible row of the candidate popup was clicked.
    pub fn candidate_clicked(&mut self, row: usize) -> KeyResponse {
        let committed = self.select_in_page(row);
        self.finish(committed)
    }

    pub(super) fn move_cursor(&mut self, step: Move) -> bool {
        let moved = match step {
            Move::PageUp => self.table.page_up(),
            Move::PageDown => self.table.page_down(),
            Move::Up => self.table.cursor_up(),
            Move::Down => self.table.cursor_down(),
        };
        if moved {
            self.redraw_lookup_table();
        }
        moved
    }

    /// Move to `row` of the current page and commit it.
    pub(super) fn select_in_page(&mut self, row: usize) -> bool {
        if !self.table.set_cursor_pos_in_current_page(row) {
            return false;
        }
        self.commit_candidate();
        true
    }
}
