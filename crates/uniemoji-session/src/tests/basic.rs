use super::*;
use crate::types::{digit_row, is_composing_char, printable_ascii};
use crate::{HostAction, LookupTableView, SessionState};

// --- Key classification ---

#[test]
fn test_digit_row() {
    assert_eq!(digit_row('1' as u32), Some(0));
    assert_eq!(digit_row('9' as u32), Some(8));
    assert_eq!(digit_row('0' as u32), Some(9));
    assert_eq!(digit_row(keysym::KP_1), Some(0));
    assert_eq!(digit_row(keysym::KP_0), Some(9));
    assert_eq!(digit_row('a' as u32), None);
}

#[test]
fn test_composing_chars_exclude_digits() {
    assert!(is_composing_char(' ' as u32));
    assert!(is_composing_char('/' as u32));
    assert!(is_composing_char(':' as u32));
    assert!(is_composing_char('~' as u32));
    assert!(!is_composing_char('5' as u32));
    assert!(!is_composing_char(0x7f));
    assert!(!is_composing_char(keysym::BACKSPACE));
    assert_eq!(printable_ascii('a' as u32), Some('a'));
    assert_eq!(printable_ascii(0x7f), None);
}

// --- Without prefixes: every printable key composes ---

#[test]
fn test_typing_appends_and_schedules_once() {
    let (mut session, lookup) = make_session(&[], MapLookup::new());
    let responses = type_string(&mut session, "abc");

    assert!(responses.iter().all(|r| r.consumed));
    assert!(responses[0].schedule_idle);
    // already queued: later keys do not ask again
    assert!(!responses[1].schedule_idle);
    assert!(!responses[2].schedule_idle);
    assert_eq!(session.preedit(), "abc");
    assert_eq!(session.state(), SessionState::PendingRecompute);
    assert!(lookup.queries().is_empty());
}

#[test]
fn test_idle_recompute_coalesces_edits() {
    let mut cfg = config(&[]);
    cfg.commit_on_zero_candidates = false;
    let (mut session, lookup) = make_session_with(cfg, MapLookup::new());
    type_string(&mut session, "smi");
    press(&mut session, BACKSPACE);
    type_string(&mut session, "ile");
    session.invalidate();
    session.invalidate();

    let resp = session.run_idle().expect("recompute queued");
    assert_eq!(lookup.queries(), vec![("smile".to_string(), vec![])]);
    assert!(resp.lookup_table().is_some());
    assert!(session.run_idle().is_none());
    assert_eq!(session.state(), SessionState::Composing);
}

#[test]
fn test_recompute_redraws_in_order() {
    let mut cfg = config(&[]);
    cfg.commit_on_single_candidate = false;
    let (mut session, _) = make_session_with(cfg, smile_lookup());
    type_string(&mut session, "smile");
    let resp = session.run_idle().unwrap();
    assert_eq!(
        resp.actions,
        vec![
            HostAction::UpdateAuxiliary {
                text: "smile".to_string(),
                visible: true,
            },
            HostAction::UpdatePreedit {
                text: "smile".to_string(),
                cursor: 5,
                visible: true,
            },
            HostAction::UpdateLookupTable(LookupTableView {
                labels: vec!["😀: smile".to_string()],
                page_size: 10,
                cursor: 0,
                visible: true,
            }),
        ]
    );
}

#[test]
fn test_release_is_never_consumed() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    type_string(&mut session, "ab");
    let resp = release(&mut session, 'c' as u32);
    assert!(!resp.consumed);
    assert!(resp.actions.is_empty());
    assert_eq!(session.preedit(), "ab");
}

#[test]
fn test_modifier_combo_commits_and_passes_through() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    type_string(&mut session, "hea");
    let resp = ctrl(&mut session, 'c' as u32);
    assert!(!resp.consumed);
    assert_eq!(resp.committed().as_deref(), Some("hea"));
    assert_eq!(session.preedit(), "");
}

#[test]
fn test_modifier_combo_with_empty_preedit_commits_nothing() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    let resp = session.handle_key('v' as u32, 0, modifier::MOD1);
    assert!(!resp.consumed);
    assert_eq!(resp.committed(), None);
}

#[test]
fn test_bare_space_passes_through() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    let resp = press(&mut session, keysym::SPACE);
    assert!(!resp.consumed);
    assert!(resp.actions.is_empty());
}

#[test]
fn test_space_without_candidates_commits_text_and_space() {
    let mut cfg = config(&[]);
    cfg.commit_on_zero_candidates = false;
    let (mut session, _) = make_session_with(cfg, MapLookup::new());
    type_string(&mut session, "hi");
    session.run_idle();
    let resp = press(&mut session, keysym::SPACE);
    assert!(resp.consumed);
    assert_eq!(resp.committed().as_deref(), Some("hi "));
    assert_eq!(session.preedit(), "");
}

#[test]
fn test_space_with_candidates_extends_query() {
    let mut cfg = config(&[]);
    cfg.commit_on_single_candidate = false;
    let (mut session, _) = make_session_with(cfg, smile_lookup());
    type_string(&mut session, "heart");
    session.run_idle();
    assert_eq!(session.candidates().len(), 3);

    let resp = press(&mut session, keysym::SPACE);
    assert!(resp.consumed);
    assert_eq!(resp.committed(), None);
    assert_eq!(session.preedit(), "heart ");
}

#[test]
fn test_backspace_shrinks_and_invalidates() {
    let mut cfg = config(&[]);
    cfg.commit_on_zero_candidates = false;
    let (mut session, _) = make_session_with(cfg, MapLookup::new());
    type_string(&mut session, "ab");
    session.run_idle();
    let resp = press(&mut session, BACKSPACE);
    assert!(resp.consumed);
    assert!(resp.schedule_idle);
    assert_eq!(session.preedit(), "a");
}

#[test]
fn test_backspace_with_empty_preedit_passes_through() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    let resp = press(&mut session, BACKSPACE);
    assert!(!resp.consumed);
}

#[test]
fn test_escape_without_prefixes_clears_and_hides() {
    let mut cfg = config(&[]);
    cfg.commit_on_single_candidate = false;
    let (mut session, _) = make_session_with(cfg, smile_lookup());
    type_string(&mut session, "heart");
    session.run_idle();

    let resp = press(&mut session, ESCAPE);
    assert!(resp.consumed);
    assert_eq!(resp.committed(), None);
    assert_eq!(session.preedit(), "");
    assert!(session.candidates().is_empty());
    let table = resp.lookup_table().unwrap();
    assert!(!table.visible);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_digit_with_empty_preedit_passes_through() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    let resp = press(&mut session, '3' as u32);
    assert!(!resp.consumed);
    assert!(resp.actions.is_empty());
}

#[test]
fn test_non_ascii_key_keeps_preedit() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    type_string(&mut session, "ab");
    let resp = press(&mut session, keysym::SHIFT_L);
    assert!(!resp.consumed);
    assert_eq!(resp.committed(), None);
    assert_eq!(session.preedit(), "ab");
}

#[test]
fn test_unhandled_ascii_commits_preedit() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    type_string(&mut session, "ab");
    // DEL is ASCII but neither text nor a composing key
    let resp = press(&mut session, 0x7f);
    assert!(!resp.consumed);
    assert_eq!(resp.committed().as_deref(), Some("ab"));
}

#[test]
fn test_enter_without_candidates_commits_raw_and_passes_through() {
    let mut cfg = config(&[]);
    cfg.commit_on_zero_candidates = false;
    let (mut session, _) = make_session_with(cfg, MapLookup::new());
    type_string(&mut session, "xyz");
    session.run_idle();
    let resp = press(&mut session, RETURN);
    assert!(!resp.consumed);
    assert_eq!(resp.committed().as_deref(), Some("xyz"));
}

#[test]
fn test_enter_with_empty_preedit_passes_through() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    let resp = press(&mut session, keysym::KP_ENTER);
    assert!(!resp.consumed);
    assert!(resp.actions.is_empty());
}

#[test]
fn test_explicit_commit_clears_everything() {
    let mut cfg = config(&[":"]);
    cfg.commit_on_single_candidate = false;
    let (mut session, _) = make_session_with(cfg, smile_lookup());
    type_string(&mut session, ":heart");
    session.run_idle();
    assert!(!session.candidates().is_empty());

    let resp = session.commit();
    assert_eq!(resp.committed().as_deref(), Some(":heart"));
    assert_eq!(session.preedit(), "");
    assert!(session.active_prefixes().is_empty());
    assert!(session.candidates().is_empty());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_reset_drops_preedit_without_commit() {
    let (mut session, _) = make_session(&[":"], smile_lookup());
    type_string(&mut session, ":hea");
    let resp = session.reset();
    assert_eq!(resp.committed(), None);
    assert_eq!(session.preedit(), "");
    // prefix tracking survives a reset
    assert_eq!(session.active_prefixes(), &[":".to_string()]);
}

#[test]
fn test_focus_out_resets() {
    let (mut session, _) = make_session(&[], MapLookup::new());
    type_string(&mut session, "ab");
    assert!(session.focus_in().actions.is_empty());
    session.focus_out();
    assert_eq!(session.preedit(), "");
}

#[test]
fn test_pending_recompute_after_reset_hides_list() {
    let (mut session, lookup) = make_session(&[], MapLookup::new());
    type_string(&mut session, "ab");
    session.reset();
    let resp = session.run_idle().unwrap();
    assert!(lookup.queries().is_empty());
    assert_eq!(resp.committed(), None);
    assert!(!resp.lookup_table().unwrap().visible);
    assert_eq!(session.state(), SessionState::Idle);
}
