//! Host-facing adapter around [`InputSession`].
//!
//! The host framework calls the `Engine` methods with raw events; the engine
//! forwards them to the session and replays every resulting [`HostAction`]
//! onto an [`EngineHost`].

use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use uniemoji_core::lookup::CharacterLookup;
use uniemoji_core::settings::Settings;
use uniemoji_session::{
    HostAction, InputSession, KeyResponse, LookupTableView, SessionConfig, SessionState,
};


/// Outbound calls into the host input-method framework.
pub trait EngineHost {
    /// Insert `text` into the target application.
    fn commit_text(&mut self, text: &str);

    /// Inline composition text. `underline` is a char range within `text`.
    fn update_preedit_text(
        &mut self,
        text: &str,
        cursor: usize,
        underline: Range<usize>,
        visible: bool,
    );

    fn update_auxiliary_text(&mut self, text: &str, visible: bool);

    fn update_lookup_table(&mut self, table: &LookupTableView);

    /// Call [`Engine::run_idle`] once the event loop has nothing else to do.
    fn schedule_idle(&mut self);
}

/// Input-method engine bound to one host.
pub struct Engine<H: EngineHost> {
    session: InputSession,
    host: H,
}

impl<H: EngineHost> Engine<H> {
    /// Host entry point: install the trace subscriber at the level the
    /// `debug` setting asks for, then build the engine. Subscriber setup
    /// runs once per process; later calls only build an engine.
    pub fn bootstrap(
        host: H,
        lookup: Arc<dyn CharacterLookup>,
        settings: &Settings,
        log_dir: &Path,
    ) -> Self {
        crate::trace_init::init_tracing(log_dir, settings.debug);
        Self::new(host, lookup, settings)
    }

    pub fn new(host: H, lookup: Arc<dyn CharacterLookup>, settings: &Settings) -> Self {
        info!(
            prefixes = ?settings.prefixes,
            page_size = settings.page_size,
            debug = settings.debug,
            "engine created"
        );
        Self::with_config(host, lookup, SessionConfig::from(settings))
    }

    pub fn with_config(host: H, lookup: Arc<dyn CharacterLookup>, config: SessionConfig) -> Self {
        Self {
            session: InputSession::new(lookup, config),
            host,
        }
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns whether the key was consumed; unconsumed keys belong to the
    /// host.
    pub fn process_key_event(&mut self, keyval: u32, keycode: u32, state: u32) -> bool {
        let resp = self.session.handle_key(keyval, keycode, state);
        self.dispatch(resp)
    }

    pub fn focus_in(&mut self) {
        let resp = self.session.focus_in();
        self.dispatch(resp);
    }

    pub fn focus_out(&mut self) {
        let resp = self.session.focus_out();
        self.dispatch(resp);
    }

    pub fn reset(&mut self) {
        let resp = self.session.reset();
        self.dispatch(resp);
    }

    /// `index` is the clicked row of the visible page.
    pub fn candidate_clicked(&mut self, index: usize) -> bool {
        let resp = self.session.candidate_clicked(index);
        self.dispatch(resp)
    }

    pub fn page_up(&mut self) -> bool {
        let resp = self.session.page_up();
        self.dispatch(resp)
    }

    pub fn page_down(&mut self) -> bool {
        let resp = self.session.page_down();
        self.dispatch(resp)
    }

    pub fn cursor_up(&mut self) -> bool {
        let resp = self.session.cursor_up();
        self.dispatch(resp)
    }

    pub fn cursor_down(&mut self) -> bool {
        let resp = self.session.cursor_down();
        self.dispatch(resp)
    }

    /// Drain the pending recompute. Returns false when there was nothing to
    /// do, so an idle callback can unregister itself.
    pub fn run_idle(&mut self) -> bool {
        match self.session.run_idle() {
            Some(resp) => {
                self.dispatch(resp);
                true
            }
            None => false,
        }
    }

    fn dispatch(&mut self, resp: KeyResponse) -> bool {
        for action in resp.actions {
            match action {
                HostAction::Commit(text) => {
                    debug!(text = %text, "host commit");
                    self.host.commit_text(&text);
                }
                HostAction::UpdatePreedit {
                    text,
                    cursor,
                    visible,
                } => {
                    let len = text.chars().count();
                    self.host.update_preedit_text(&text, cursor, 0..len, visible);
                }
                HostAction::UpdateAuxiliary { text, visible } => {
                    self.host.update_auxiliary_text(&text, visible);
                }
                HostAction::UpdateLookupTable(view) => {
                    self.host.update_lookup_table(&view);
                }
            }
        }
        if resp.schedule_idle {
            self.host.schedule_idle();
        }
        resp.consumed
    }
}
