use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Audio asset details attached to a video program or clip.
///
/// The schema of this object is owned by the audio side of the MAM
/// integration; this crate carries it through as an opaque JSON object
/// without inspecting or reshaping its keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioAssetInfo(pub Map<String, Value>);

impl AudioAssetInfo {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The raw pass-through payload
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for AudioAssetInfo {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
