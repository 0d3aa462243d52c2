use uniemoji_core::settings::Settings;

/// X11 keysyms delivered by the host in `keyval`.
pub mod keysym {
    pub const SPACE: u32 = 0x0020;
    pub const KEY_0: u32 = 0x0030;
    pub const KEY_1: u32 = 0x0031;
    pub const KEY_9: u32 = 0x0039;
    pub const TILDE: u32 = 0x007e;

    pub const BACKSPACE: u32 = 0xff08;
    pub const RETURN: u32 = 0xff0d;
    pub const ESCAPE: u32 = 0xff1b;
    pub const LEFT: u32 = 0xff51;
    pub const UP: u32 = 0xff52;
    pub const RIGHT: u32 = 0xff53;
    pub const DOWN: u32 = 0xff54;
    pub const PAGE_UP: u32 = 0xff55;
    pub const PAGE_DOWN: u32 = 0xff56;

    pub const KP_ENTER: u32 = 0xff8d;
    pub const KP_LEFT: u32 = 0xff96;
    pub const KP_UP: u32 = 0xff97;
    pub const KP_RIGHT: u32 = 0xff98;
    pub const KP_DOWN: u32 = 0xff99;
    pub const KP_PAGE_UP: u32 = 0xff9a;
    pub const KP_PAGE_DOWN: u32 = 0xff9b;
    pub const KP_0: u32 = 0xffb0;
    pub const KP_1: u32 = 0xffb1;
    pub const KP_9: u32 = 0xffb9;

    pub const SHIFT_L: u32 = 0xffe1;
}

/// Modifier-state bits delivered by the host in `state`.
pub mod modifier {
    pub const SHIFT: u32 = 1 << 0;
    pub const LOCK: u32 = 1 << 1;
    pub const CONTROL: u32 = 1 << 2;
    pub const MOD1: u32 = 1 << 3;
    pub const MOD2: u32 = 1 << 4;
    pub const RELEASE: u32 = 1 << 30;

    /// Any of these held turns the key into a pass-through combination.
    pub const COMBO: u32 = CONTROL | MOD1 | MOD2;
}

/// Index into the current candidate page selected by a digit key:
/// `1` is row 0 and `0` is row 9, for both the main row and the keypad.
pub(crate) fn digit_row(keyval: u32) -> Option<usize> {
    match keyval {
        keysym::KEY_1..=keysym::KEY_9 => Some((keyval - keysym::KEY_1) as usize),
        keysym::KEY_0 => Some(9),
        keysym::KP_1..=keysym::KP_9 => Some((keyval - keysym::KP_1) as usize),
        keysym::KP_0 => Some(9),
        _ => None,
    }
}

/// Printable ASCII except digits: characters that extend the preedit.
pub(crate) fn is_composing_char(keyval: u32) -> bool {
    (keysym::SPACE..keysym::KEY_0).contains(&keyval)
        || (keysym::KEY_9 + 1..=keysym::TILDE).contains(&keyval)
}

pub(crate) fn printable_ascii(keyval: u32) -> Option<char> {
    if (keysym::SPACE..=keysym::TILDE).contains(&keyval) {
        char::from_u32(keyval)
    } else {
        None
    }
}

/// Composition status as seen from outside the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Empty preedit and nothing scheduled.
    Idle,
    /// Non-empty preedit; the candidate list may be empty or populated.
    Composing,
    /// A recompute is queued and waits for `run_idle`.
    PendingRecompute,
}

/// Options the session reads once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub commit_on_single_candidate: bool,
    pub commit_on_zero_candidates: bool,
    pub page_size: usize,
    pub prefixes: Vec<String>,
}

impl From<&Settings> for SessionConfig {
    fn from(s: &Settings) -> Self {
        Self {
            commit_on_single_candidate: s.commit_on_single_candidate,
            commit_on_zero_candidates: s.commit_on_zero_candidates,
            page_size: s.page_size,
            prefixes: s.prefixes.clone(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

/// Snapshot of the candidate list in the shape the host lookup table wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTableView {
    /// Display strings of every candidate; the host pages them itself.
    pub labels: Vec<String>,
    pub page_size: usize,
    /// Absolute cursor position.
    pub cursor: usize,
    pub visible: bool,
}

impl LookupTableView {
    fn page_start(&self) -> usize {
        self.cursor / self.page_size.max(1) * self.page_size.max(1)
    }

    /// Labels of the page holding the cursor.
    pub fn page_labels(&self) -> &[String] {
        let start = self.page_start().min(self.labels.len());
        let end = (start + self.page_size).min(self.labels.len());
        &self.labels[start..end]
    }

    /// Cursor row within the current page.
    pub fn cursor_in_page(&self) -> usize {
        self.cursor - self.page_start()
    }
}

/// One outbound call to the host, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    /// Insert text into the target application. Never empty.
    Commit(String),
    /// Inline preedit, underlined over `0..cursor`.
    UpdatePreedit {
        text: String,
        cursor: usize,
        visible: bool,
    },
    /// The same buffer, shown above the candidate list.
    UpdateAuxiliary { text: String, visible: bool },
    UpdateLookupTable(LookupTableView),
}

/// Result of a key event or an idle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub actions: Vec<HostAction>,
    /// A recompute was queued; the host must call `run_idle` at its next
    /// idle slot.
    pub schedule_idle: bool,
}

impl KeyResponse {
    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
            schedule_idle: false,
        }
    }

    /// Concatenated text of every `Commit` action.
    pub fn committed(&self) -> Option<String> {
        let mut out: Option<String> = None;
        for action in &self.actions {
            if let HostAction::Commit(text) = action {
                out.get_or_insert_with(String::new).push_str(text);
            }
        }
        out
    }

    /// The last lookup table update, if any.
    pub fn lookup_table(&self) -> Option<&LookupTableView> {
        self.actions.iter().rev().find_map(|a| match a {
            HostAction::UpdateLookupTable(view) => Some(view),
            _ => None,
        })
    }

    /// The last preedit update, if any.
    pub fn preedit(&self) -> Option<&str> {
        self.actions.iter().rev().find_map(|a| match a {
            HostAction::UpdatePreedit { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
