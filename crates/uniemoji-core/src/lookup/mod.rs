//! The character lookup boundary.
//!
//! `CharacterLookup` maps a typed query (with the trigger prefix already
//! stripped) to an ordered list of candidates. The input session treats it as
//! an opaque service: an empty result and a failed lookup look the same.
//! `TableLookup` is a small name-table implementation backed by TSV data.

mod candidate;
mod table;

pub use candidate::Candidate;
pub use table::{TableLookup, DEFAULT_MAX_RESULTS};

use std::io;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

pub trait CharacterLookup: Send + Sync {
    /// Candidates for `query`, in the order they should be listed.
    ///
    /// `active_prefixes` holds the trigger prefixes in activation order, so
    /// an implementation may serve different tables per prefix.
    fn find_characters(&self, query: &str, active_prefixes: &[String]) -> Vec<Candidate>;
}

impl<T: CharacterLookup + ?Sized> CharacterLookup for Arc<T> {
    fn find_characters(&self, query: &str, active_prefixes: &[String]) -> Vec<Candidate> {
        (**self).find_characters(query, active_prefixes)
    }
}

impl<T: CharacterLookup + ?Sized> CharacterLookup for Box<T> {
    fn find_characters(&self, query: &str, active_prefixes: &[String]) -> Vec<Candidate> {
        (**self).find_characters(query, active_prefixes)
    }
}
