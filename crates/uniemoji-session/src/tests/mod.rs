mod basic;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uniemoji_core::lookup::{Candidate, CharacterLookup};

use super::types::{keysym, modifier};
use super::{InputSession, KeyResponse, SessionConfig};

/// Fixed query → candidates map that records every query it serves.
#[derive(Default)]
pub(super) struct MapLookup {
    map: HashMap<String, Vec<Candidate>>,
    queries: Mutex<Vec<(String, Vec<String>)>>,
}

impl MapLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, results: &[(&str, &str)]) -> Self {
        self.map.insert(
            query.to_string(),
            results
                .iter()
                .map(|(text, display)| Candidate::new(*text, *display))
                .collect(),
        );
        self
    }

    pub fn queries(&self) -> Vec<(String, Vec<String>)> {
        self.queries.lock().unwrap().clone()
    }
}

impl CharacterLookup for MapLookup {
    fn find_characters(&self, query: &str, active_prefixes: &[String]) -> Vec<Candidate> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), active_prefixes.to_vec()));
        self.map.get(query).cloned().unwrap_or_default()
    }
}

pub(super) fn smile_lookup() -> MapLookup {
    MapLookup::new()
        .with("smile", &[("😀", "😀: smile")])
        .with(
            "heart",
            &[("❤", "❤: heart"), ("💔", "💔: broken heart"), ("💖", "💖: sparkling heart")],
        )
}

/// Twelve candidates for "arrow", enough for two pages of ten.
pub(super) fn arrow_lookup() -> MapLookup {
    let arrows: Vec<(String, String)> = (0..12)
        .map(|i| {
            let ch = char::from_u32(0x2190 + i).unwrap().to_string();
            let label = format!("{ch}: arrow {i}");
            (ch, label)
        })
        .collect();
    let refs: Vec<(&str, &str)> = arrows
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    MapLookup::new().with("arrow", &refs)
}

pub(super) fn config(prefixes: &[&str]) -> SessionConfig {
    SessionConfig {
        prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        ..SessionConfig::default()
    }
}

pub(super) fn make_session(prefixes: &[&str], lookup: MapLookup) -> (InputSession, Arc<MapLookup>) {
    make_session_with(config(prefixes), lookup)
}

pub(super) fn make_session_with(
    config: SessionConfig,
    lookup: MapLookup,
) -> (InputSession, Arc<MapLookup>) {
    let lookup = Arc::new(lookup);
    let session = InputSession::new(lookup.clone(), config);
    (session, lookup)
}

pub(super) fn press(session: &mut InputSession, keyval: u32) -> KeyResponse {
    session.handle_key(keyval, 0, 0)
}

pub(super) fn release(session: &mut InputSession, keyval: u32) -> KeyResponse {
    session.handle_key(keyval, 0, modifier::RELEASE)
}

pub(super) fn ctrl(session: &mut InputSession, keyval: u32) -> KeyResponse {
    session.handle_key(keyval, 0, modifier::CONTROL)
}

// Helper: simulate typing a string one character at a time, without
// running idle work in between
pub(super) fn type_string(session: &mut InputSession, s: &str) -> Vec<KeyResponse> {
    s.chars()
        .map(|ch| press(session, ch as u32))
        .collect()
}

/// Type `s`, draining the idle slot after every key like a host event loop.
/// Returns everything committed along the way.
pub(super) fn type_and_idle(session: &mut InputSession, s: &str) -> String {
    let mut committed = String::new();
    for ch in s.chars() {
        let resp = press(session, ch as u32);
        if let Some(text) = resp.committed() {
            committed.push_str(&text);
        }
        if let Some(resp) = session.run_idle() {
            if let Some(text) = resp.committed() {
                committed.push_str(&text);
            }
        }
    }
    committed
}

pub(super) const BACKSPACE: u32 = keysym::BACKSPACE;
pub(super) const ESCAPE: u32 = keysym::ESCAPE;
pub(super) const RETURN: u32 = keysym::RETURN;
