//! Keystroke simulation against a table lookup.
//!
//! Key spec syntax: printable ASCII types itself, `{NAME}` names a special
//! key. Names: `BS`, `ESC`, `ENTER`, `KP_ENTER`, `SPACE`, `UP`, `DOWN`,
//! `LEFT`, `RIGHT`, `PGUP`, `PGDN`, `LBRACE`, `IDLE` (drain the pending
//! recompute), and `C-x` / `A-x` for Ctrl or Alt plus a character.

use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use uniemoji_engine::{
    keysym, modifier, CharacterLookup, Engine, EngineHost, LookupTableView, Settings,
};

use super::lookup_ops::open_table;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeySpecError {
    #[error("unknown key name {{{0}}}")]
    UnknownKey(String),
    #[error("unterminated '{{' at offset {0}")]
    Unterminated(usize),
    #[error("not a printable ASCII key: {0:?}")]
    NotAscii(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Key { keyval: u32, state: u32 },
    Idle,
}

/// Parse a key spec into labelled strokes.
pub fn parse_keys(spec: &str) -> Result<Vec<(String, Stroke)>, KeySpecError> {
    let mut out = Vec::new();
    let mut chars = spec.char_indices();
    while let Some((offset, ch)) = chars.next() {
        if ch != '{' {
            if !(' '..='~').contains(&ch) {
                return Err(KeySpecError::NotAscii(ch));
            }
            out.push((
                ch.to_string(),
                Stroke::Key {
                    keyval: ch as u32,
                    state: 0,
                },
            ));
            continue;
        }
        let mut name = String::new();
        let mut closed = false;
        for (_, c) in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            name.push(c);
        }
        if !closed {
            return Err(KeySpecError::Unterminated(offset));
        }
        let stroke = named_stroke(&name).ok_or_else(|| KeySpecError::UnknownKey(name.clone()))?;
        out.push((format!("{{{name}}}"), stroke));
    }
    Ok(out)
}

fn named_stroke(name: &str) -> Option<Stroke> {
    let key = |keyval| Some(Stroke::Key { keyval, state: 0 });
    match name {
        "BS" => key(keysym::BACKSPACE),
        "ESC" => key(keysym::ESCAPE),
        "ENTER" => key(keysym::RETURN),
        "KP_ENTER" => key(keysym::KP_ENTER),
        "SPACE" => key(keysym::SPACE),
        "UP" => key(keysym::UP),
        "DOWN" => key(keysym::DOWN),
        "LEFT" => key(keysym::LEFT),
        "RIGHT" => key(keysym::RIGHT),
        "PGUP" => key(keysym::PAGE_UP),
        "PGDN" => key(keysym::PAGE_DOWN),
        "LBRACE" => key('{' as u32),
        "IDLE" => Some(Stroke::Idle),
        _ => {
            let (state, rest) = if let Some(rest) = name.strip_prefix("C-") {
                (modifier::CONTROL, rest)
            } else if let Some(rest) = name.strip_prefix("A-") {
                (modifier::MOD1, rest)
            } else {
                return None;
            };
            let mut it = rest.chars();
            match (it.next(), it.next()) {
                (Some(c), None) if (' '..='~').contains(&c) => Some(Stroke::Key {
                    keyval: c as u32,
                    state,
                }),
                _ => None,
            }
        }
    }
}

/// Host stand-in that keeps the latest widget state.
#[derive(Debug, Default)]
struct TranscriptHost {
    commits: Vec<String>,
    preedit: String,
    candidates: Vec<String>,
    cursor: usize,
    idle_requested: bool,
}

impl EngineHost for TranscriptHost {
    fn commit_text(&mut self, text: &str) {
        self.commits.push(text.to_string());
    }

    fn update_preedit_text(
        &mut self,
        text: &str,
        _cursor: usize,
        _underline: Range<usize>,
        visible: bool,
    ) {
        self.preedit = if visible { text.to_string() } else { String::new() };
    }

    fn update_auxiliary_text(&mut self, _text: &str, _visible: bool) {}

    fn update_lookup_table(&mut self, table: &LookupTableView) {
        if table.visible {
            self.candidates = table.page_labels().to_vec();
            self.cursor = table.cursor_in_page();
        } else {
            self.candidates.clear();
            self.cursor = 0;
        }
    }

    fn schedule_idle(&mut self) {
        self.idle_requested = true;
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StepReport {
    pub key: String,
    /// `None` for idle runs.
    pub consumed: Option<bool>,
    pub commits: Vec<String>,
    pub preedit: String,
    /// Labels of the visible candidate page.
    pub candidates: Vec<String>,
    pub cursor: usize,
}

/// Feed `strokes` to a fresh engine. Unless `burst` is set, the pending
/// recompute is drained after every key like an idle host loop; any
/// recompute still pending at the end is drained as a final step.
pub fn run_simulation(
    lookup: Arc<dyn CharacterLookup>,
    settings: &Settings,
    strokes: &[(String, Stroke)],
    burst: bool,
) -> Vec<StepReport> {
    let mut engine = Engine::new(TranscriptHost::default(), lookup, settings);
    engine.focus_in();
    let mut reports = Vec::new();

    for (label, stroke) in strokes {
        let before = engine.host().commits.len();
        let consumed = match *stroke {
            Stroke::Key { keyval, state } => {
                let consumed = engine.process_key_event(keyval, 0, state);
                let idle = std::mem::take(&mut engine.host_mut().idle_requested);
                if idle && !burst {
                    engine.run_idle();
                }
                Some(consumed)
            }
            Stroke::Idle => {
                engine.host_mut().idle_requested = false;
                engine.run_idle();
                None
            }
        };
        debug!(key = %label, ?consumed, "simulated stroke");
        reports.push(snapshot(&engine, label, consumed, before));
    }

    if engine.session().is_recompute_pending() {
        let before = engine.host().commits.len();
        engine.run_idle();
        reports.push(snapshot(&engine, "{IDLE}", None, before));
    }
    reports
}

fn snapshot(
    engine: &Engine<TranscriptHost>,
    label: &str,
    consumed: Option<bool>,
    commits_before: usize,
) -> StepReport {
    let host = engine.host();
    StepReport {
        key: label.to_string(),
        consumed,
        commits: host.commits[commits_before..].to_vec(),
        preedit: host.preedit.clone(),
        candidates: host.candidates.clone(),
        cursor: host.cursor,
    }
}

pub fn simulate(
    table_file: &str,
    settings_file: Option<&str>,
    prefixes: Option<Vec<String>>,
    keys: &str,
    burst: bool,
    json: bool,
) {
    let table = die!(open_table(table_file), "Error opening table {table_file}: {}");
    let mut settings = match settings_file {
        Some(path) => die!(Settings::from_path(path), "Error: {}"),
        None => Settings::default(),
    };
    if let Some(prefixes) = prefixes {
        settings.prefixes = prefixes;
    }
    let strokes = die!(parse_keys(keys), "Error in key spec: {}");
    let reports = run_simulation(Arc::new(table), &settings, &strokes, burst);

    if json {
        let out = die!(
            serde_json::to_string_pretty(&reports),
            "Error encoding JSON: {}"
        );
        println!("{out}");
        return;
    }

    let mut committed = String::new();
    for r in &reports {
        let consumed = match r.consumed {
            Some(true) => "consumed",
            Some(false) => "passed",
            None => "idle",
        };
        print!("{:<10} {:<8} preedit={:?}", r.key, consumed, r.preedit);
        if !r.commits.is_empty() {
            print!(" commit={:?}", r.commits);
        }
        if !r.candidates.is_empty() {
            print!(" [{}] cursor={}", r.candidates.join(" | "), r.cursor);
        }
        println!();
        for c in &r.commits {
            committed.push_str(c);
        }
    }
    println!("committed: {committed:?}");
}
