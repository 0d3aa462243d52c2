use serde::{Deserialize, Serialize};

/// One lookup result: the text to commit and the label shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub display: String,
}

impl Candidate {
    pub fn new(text: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display: display.into(),
        }
    }
}
