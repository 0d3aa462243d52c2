//! Trigger-prefix tracking.
//!
//! Keeps a rolling tail of the last printable keys (no longer than the
//! longest configured prefix) and the ordered set of prefixes judged to be
//! present at the start of the preedit.

use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct PrefixTracker {
    prefixes: Vec<String>,
    max_prefix_len: usize,
    /// Most recent printable keys, at most `max_prefix_len` chars.
    tail: String,
    /// Active prefixes in activation order.
    active: Vec<String>,
    max_active_len: usize,
}

impl PrefixTracker {
    /// Set the prefix vocabulary. Empty strings are dropped and duplicates
    /// collapsed; an empty vocabulary disables prefix mode.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab: Vec<String> = Vec::new();
        for p in prefixes {
            let p = p.into();
            if p.is_empty() {
                warn!("ignoring empty trigger prefix");
                continue;
            }
            if !vocab.contains(&p) {
                vocab.push(p);
            }
        }
        let max_prefix_len = vocab.iter().map(|p| p.chars().count()).max().unwrap_or(0);
        debug!(prefixes = ?vocab, max_prefix_len, "prefix vocabulary configured");
        Self {
            prefixes: vocab,
            max_prefix_len,
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.prefixes.is_empty()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn max_prefix_len(&self) -> usize {
        self.max_prefix_len
    }

    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Length of the longest active prefix, 0 when none is active.
    pub fn max_active_len(&self) -> usize {
        self.max_active_len
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Forget active prefixes and the key tail.
    pub fn reset(&mut self) {
        self.active.clear();
        self.max_active_len = 0;
        self.tail.clear();
    }

    pub fn clear_tail(&mut self) {
        self.tail.clear();
    }

    /// Record a printable key. `buffer` is the preedit as it would read with
    /// `ch` appended. Returns true if the tail ends with the beginning of at
    /// least one prefix (the user may be typing it).
    ///
    /// A prefix becomes active when the tail contains it whole and `buffer`
    /// starts with it. The tail alone is not enough: with `[":", "ab"]`,
    /// typing `:ab` must not activate `"ab"`.
    pub fn observe_printable(&mut self, ch: char, buffer: &str) -> bool {
        self.tail.push(ch);
        let excess = self.tail.chars().count().saturating_sub(self.max_prefix_len);
        if excess > 0 {
            let cut = self
                .tail
                .char_indices()
                .nth(excess)
                .map_or(self.tail.len(), |(i, _)| i);
            self.tail.drain(..cut);
        }

        let tail: Vec<char> = self.tail.chars().collect();
        let mut partial_match = false;
        let mut activated = Vec::new();
        for prefix in &self.prefixes {
            let len = prefix.chars().count();
            let partial = (1..=len).any(|i| {
                let suffix: String = tail[tail.len().saturating_sub(i)..].iter().collect();
                prefix.starts_with(&suffix)
            });
            if partial {
                partial_match = true;
                if self.tail.contains(prefix.as_str()) && buffer.starts_with(prefix.as_str()) {
                    activated.push(prefix.clone());
                }
            }
        }
        for prefix in activated {
            self.activate(prefix);
        }
        partial_match
    }

    /// Record a backspace. `buffer` is the preedit after the deletion;
    /// active prefixes it no longer starts with are evicted.
    pub fn observe_backspace(&mut self, buffer: &str) {
        self.tail.pop();
        let before = self.active.len();
        self.active.retain(|p| buffer.starts_with(p.as_str()));
        if self.active.len() != before {
            debug!(active = ?self.active, "prefix evicted");
            self.max_active_len = self
                .active
                .iter()
                .map(|p| p.chars().count())
                .max()
                .unwrap_or(0);
        }
    }

    fn activate(&mut self, prefix: String) {
        if self.active.contains(&prefix) {
            return;
        }
        debug!(prefix = %prefix, "prefix activated");
        self.max_active_len = self.max_active_len.max(prefix.chars().count());
        self.active.push(prefix);
    }
}
