//! Envelope codec configuration.

use serde::{Deserialize, Serialize};

/// OAEP label binding wrapped keys to this envelope format.
pub const DEFAULT_OAEP_LABEL: &str = "json-envelope-v1";

/// Configuration for [`EnvelopeCodec`](crate::EnvelopeCodec).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// OAEP label used when wrapping and unwrapping the data key.
    /// Envelopes only open under the label they were sealed with.
    pub oaep_label: String,

    /// Emit two-space indented JSON instead of a single line.
    pub pretty: bool,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            oaep_label: DEFAULT_OAEP_LABEL.to_string(),
            pretty: true,
        }
    }
}
