//! Terminal rendering of view snapshots
//!
//! The component itself does not draw anything; this module turns the
//! snapshots it publishes into lines for the `countdown` binary.

pub mod text;

use crate::state::ViewSnapshot;

/// How snapshots are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputFormat::Json } else { OutputFormat::Text }
    }

    /// Render one snapshot
    pub fn render(&self, snapshot: &ViewSnapshot) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Text => Ok(text::render_text(snapshot)),
            OutputFormat::Json => serde_json::to_string(snapshot),
        }
    }
}
