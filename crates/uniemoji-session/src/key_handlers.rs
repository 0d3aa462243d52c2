use tracing::debug_span;

use super::navigation::Move;
use super::types::{digit_row, is_composing_char, keysym, modifier, printable_ascii, KeyResponse};
use super::InputSession;

impl InputSession {
    /// Process a key event. `keycode` is the hardware code and is ignored.
    pub fn handle_key(&mut self, keyval: u32, keycode: u32, state: u32) -> KeyResponse {
        let _span = debug_span!("handle_key", keyval, keycode, state).entered();
        let consumed = self.dispatch_key(keyval, state);
        self.finish(consumed)
    }

    fn dispatch_key(&mut self, keyval: u32, state: u32) -> bool {
        // Releases belong to the host
        if state & modifier::RELEASE != 0 {
            return false;
        }

        // Ctrl/Alt combos: commit what we have, then let the host act on the combo
        if state & modifier::COMBO != 0 {
            self.commit_preedit();
            return false;
        }

        if self.prefixes.is_configured() {
            if let Some(consumed) = self.handle_prefix_key(keyval) {
                return consumed;
            }
        }

        if !self.preedit.is_empty() {
            if let Some(consumed) = self.handle_composing_key(keyval) {
                return consumed;
            }
        }

        self.handle_text_key(keyval, state)
    }

    /// Prefix-mode handling. `None` falls through to the composing rules,
    /// which happens for printable keys once a prefix is active.
    fn handle_prefix_key(&mut self, keyval: u32) -> Option<bool> {
        match keyval {
            keysym::ESCAPE => {
                self.prefixes.clear_tail();
                self.commit_preedit();
                Some(false)
            }
            keysym::BACKSPACE => {
                if !self.prefixes.has_active() {
                    if self.preedit.pop().is_none() {
                        self.prefixes.observe_backspace("");
                        return Some(false);
                    }
                    self.prefixes.observe_backspace(&self.preedit);
                    self.redraw_preedit();
                } else {
                    self.preedit.pop();
                    self.prefixes.observe_backspace(&self.preedit);
                    self.redraw_preedit();
                    self.invalidate();
                }
                Some(true)
            }
            _ => {
                let ch = printable_ascii(keyval)?;
                let mut typed = self.preedit.clone();
                typed.push(ch);
                let partial_match = self.prefixes.observe_printable(ch, &typed);
                if self.prefixes.has_active() {
                    return None;
                }
                if partial_match {
                    // Possibly the start of a prefix: hold it without a lookup
                    self.preedit = typed;
                    self.redraw_preedit();
                } else {
                    self.commit_string(typed, true);
                }
                Some(true)
            }
        }
    }

    /// Keys with a meaning while the preedit is non-empty.
    fn handle_composing_key(&mut self, keyval: u32) -> Option<bool> {
        let consumed = match keyval {
            keysym::RETURN | keysym::KP_ENTER => {
                if self.table.is_empty() {
                    self.commit_preedit();
                    false
                } else {
                    self.commit_candidate();
                    true
                }
            }
            // Only reachable without prefixes; prefix mode handles these above
            keysym::ESCAPE => {
                self.preedit.clear();
                self.recompute_candidates();
                true
            }
            keysym::BACKSPACE => {
                self.preedit.pop();
                self.invalidate();
                true
            }
            keysym::PAGE_UP | keysym::KP_PAGE_UP | keysym::LEFT | keysym::KP_LEFT => {
                self.move_cursor(Move::PageUp)
            }
            keysym::PAGE_DOWN | keysym::KP_PAGE_DOWN | keysym::RIGHT | keysym::KP_RIGHT => {
                self.move_cursor(Move::PageDown)
            }
            keysym::UP | keysym::KP_UP => self.move_cursor(Move::Up),
            keysym::DOWN | keysym::KP_DOWN => self.move_cursor(Move::Down),
            _ => {
                let row = digit_row(keyval)?;
                self.select_in_page(row)
            }
        };
        Some(consumed)
    }

    /// Space, plain text, and everything left over.
    fn handle_text_key(&mut self, keyval: u32, state: u32) -> bool {
        if keyval == keysym::SPACE {
            if self.preedit.is_empty() {
                // A bare space stays a space
                return false;
            }
            if self.table.is_empty() {
                let mut text = std::mem::take(&mut self.preedit);
                text.push(' ');
                self.commit_string(text, true);
                return true;
            }
        }

        if is_composing_char(keyval) {
            if state & (modifier::CONTROL | modifier::MOD1) == 0 {
                if let Some(ch) = printable_ascii(keyval) {
                    self.preedit.push(ch);
                    self.invalidate();
                    return true;
                }
            }
        } else if keyval < 0x80 && !self.preedit.is_empty() {
            self.commit_preedit();
        }
        false
    }
}
