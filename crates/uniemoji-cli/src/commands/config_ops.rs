use uniemoji_engine::settings::default_toml;
use uniemoji_engine::{Settings, SettingsError};

pub fn settings_export() {
    print!("{}", default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(load(file), "Error: {}");
    println!("OK: {}", summary(&s));
}

pub fn load(file: &str) -> Result<Settings, SettingsError> {
    Settings::from_path(file)
}

/// Whether a settings file asks for debug logging. Unreadable files count
/// as no; the command that loads them reports the error.
pub fn debug_enabled(file: &str) -> bool {
    load(file).is_ok_and(|s| s.debug)
}

pub fn summary(s: &Settings) -> String {
    format!(
        "prefixes={:?}, page_size={}, commit_on_single_candidate={}, commit_on_zero_candidates={}, debug={}",
        s.prefixes, s.page_size, s.commit_on_single_candidate, s.commit_on_zero_candidates, s.debug
    )
}
