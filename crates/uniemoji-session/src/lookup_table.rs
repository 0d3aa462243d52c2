//! Paged candidate list with a wrapping cursor.

use uniemoji_core::lookup::Candidate;

use super::types::LookupTableView;

#[derive(Debug, Clone)]
pub struct LookupTable {
    candidates: Vec<Candidate>,
    page_size: usize,
    cursor: usize,
}

impl LookupTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            candidates: Vec::new(),
            page_size: page_size.max(1),
            cursor: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
        self.cursor = 0;
    }

    /// Replace the list wholesale and move the cursor back to the top.
    pub fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.cursor = 0;
    }

    /// Candidate under the cursor.
    pub fn current(&self) -> Option<&Candidate> {
        self.candidates.get(self.cursor)
    }

    fn last_page_start(&self) -> usize {
        (self.len() - 1) / self.page_size * self.page_size
    }

    /// Move the cursor to `index` of the current page. Fails if the row is
    /// outside the page or past the last candidate.
    pub fn set_cursor_pos_in_current_page(&mut self, index: usize) -> bool {
        if index >= self.page_size {
            return false;
        }
        let page_start = self.cursor / self.page_size * self.page_size;
        let pos = page_start + index;
        if pos >= self.len() {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// One page back; from the first page wrap to the same row of the last.
    /// Returns whether the cursor moved.
    pub fn page_up(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = if self.cursor < self.page_size {
            let row = self.cursor % self.page_size;
            (self.last_page_start() + row).min(self.len() - 1)
        } else {
            self.cursor - self.page_size
        };
        self.move_to(target)
    }

    /// One page forward; from the last page wrap to the same row of the first.
    pub fn page_down(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = if self.cursor >= self.last_page_start() {
            self.cursor % self.page_size
        } else {
            (self.cursor + self.page_size).min(self.len() - 1)
        };
        self.move_to(target)
    }

    pub fn cursor_up(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = if self.cursor == 0 {
            self.len() - 1
        } else {
            self.cursor - 1
        };
        self.move_to(target)
    }

    pub fn cursor_down(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = if self.cursor + 1 >= self.len() {
            0
        } else {
            self.cursor + 1
        };
        self.move_to(target)
    }

    fn move_to(&mut self, target: usize) -> bool {
        let moved = target != self.cursor;
        self.cursor = target;
        moved
    }

    pub fn view(&self) -> LookupTableView {
        LookupTableView {
            labels: self.candidates.iter().map(|c| c.display.clone()).collect(),
            page_size: self.page_size,
            cursor: self.cursor,
            visible: !self.is_empty(),
        }
    }
}
