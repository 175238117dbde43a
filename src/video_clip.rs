use crate::audio_asset::AudioAssetInfo;
use crate::error::MetadataError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::trace;

// Wire names of the MediaFlex JSON contract. The casing is irregular (a mix
// of PascalCase and lowerCamelCase) but it is what existing producers and
// consumers emit, so every key must match exactly as written here.
const VIDEO_TYPE: &str = "VideoType";
const DESCRIPTION: &str = "Description";
const PLASMA_ID: &str = "PlasmaID";
const YLE_ID: &str = "YleID";
const MD5: &str = "MD5";
const START_OF_FILE: &str = "StartOfFile";
const END_OF_FILE: &str = "EndOfFile";
const START_OF_MEDIA: &str = "StartOfMedia";
const END_OF_MEDIA: &str = "EndOfMedia";
const TIME_CODE_TYPE: &str = "timeCodeType";
const RESOLUTION: &str = "resolution";
const CODEC: &str = "codec";
const BITRATE: &str = "bitrate";
const PI: &str = "pi";
const ASPECT_RATIO: &str = "aspectRatio";
const FRAME_RATE: &str = "frameRate";
const TRANSMISSION_READY: &str = "TransmissionReady";
const AUDIO_ASSET_INFO: &str = "AudioAssetInfo";
const AUDIO_BIT_RATE: &str = "audioBitRate";
const AUDIO_CODEC: &str = "audioCodec";
const ADDITIONAL_INFO: &str = "additionalinfo";

/// Technical and descriptive metadata for a video program or clip exchanged
/// with the MAM system.
///
/// Every field is optional on the wire: a missing key leaves the field in its
/// default state, and serializing always emits all keys (with `null` for
/// unset values) so a record round-trips without loss.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoClipMetadata {
    /// Video classification (program, clip, advertisement)
    pub video_type: Option<String>,
    /// Free-text description for cataloging
    pub description: Option<String>,
    /// Identifier of the asset in the Plasma system
    pub plasma_id: Option<String>,
    /// Identifier of the asset in the Yle system
    pub yle_id: Option<String>,
    /// MD5 digest of the media file as hex text
    pub md5: Option<String>,
    /// Timecode of the first frame of the file
    pub start_of_file: Option<String>,
    /// Timecode of the last frame of the file
    pub end_of_file: Option<String>,
    /// Timecode where the actual content starts (after bars/slate)
    pub start_of_media: Option<String>,
    /// Timecode where the actual content ends
    pub end_of_media: Option<String>,
    /// Timecode mode (drop-frame or non-drop-frame)
    pub time_code_type: Option<String>,
    /// Picture resolution, e.g. "1920x1080"
    pub resolution: Option<String>,
    /// Video codec name
    pub codec: Option<String>,
    /// Video bitrate in kbps, carried as text
    pub bitrate: Option<String>,
    /// Picture-info annotation, e.g. chroma subsampling
    pub pi: Option<String>,
    /// Display aspect ratio, e.g. "16:9"
    pub aspect_ratio: Option<String>,
    /// Frames per second (0 = unset)
    pub frame_rate: u32,
    /// Whether the asset is cleared for transmission
    pub transmission_ready: bool,
    /// Opaque audio asset payload, schema owned by the audio pipeline
    pub audio_asset_info: Option<AudioAssetInfo>,
    /// Audio bitrate, carried as text
    pub audio_bit_rate: Option<String>,
    /// Audio codec name
    pub audio_codec: Option<String>,
    /// Free-form extension field
    pub additional_info: Option<String>,
}

impl VideoClipMetadata {
    /// Parse a metadata record from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, MetadataError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| MetadataError::MalformedPayload(e.to_string()))?;
        Self::from_json_value(value)
    }

    /// Map a JSON value onto a metadata record using the wire-name table.
    ///
    /// Unknown keys are ignored, missing keys keep their defaults, and a
    /// value of the wrong type fails with [`MetadataError::MalformedField`]
    /// naming the offending key.
    pub fn from_json_value(value: Value) -> Result<Self, MetadataError> {
        let mut obj = match value {
            Value::Object(obj) => obj,
            other => {
                return Err(MetadataError::MalformedPayload(format!(
                    "expected a JSON object, got {}",
                    json_type_name(&other)
                )));
            }
        };

        let metadata = Self {
            video_type: take_string(&mut obj, VIDEO_TYPE)?,
            description: take_string(&mut obj, DESCRIPTION)?,
            plasma_id: take_string(&mut obj, PLASMA_ID)?,
            yle_id: take_string(&mut obj, YLE_ID)?,
            md5: take_string(&mut obj, MD5)?,
            start_of_file: take_string(&mut obj, START_OF_FILE)?,
            end_of_file: take_string(&mut obj, END_OF_FILE)?,
            start_of_media: take_string(&mut obj, START_OF_MEDIA)?,
            end_of_media: take_string(&mut obj, END_OF_MEDIA)?,
            time_code_type: take_string(&mut obj, TIME_CODE_TYPE)?,
            resolution: take_string(&mut obj, RESOLUTION)?,
            codec: take_string(&mut obj, CODEC)?,
            bitrate: take_string(&mut obj, BITRATE)?,
            pi: take_string(&mut obj, PI)?,
            aspect_ratio: take_string(&mut obj, ASPECT_RATIO)?,
            frame_rate: take_u32(&mut obj, FRAME_RATE)?,
            transmission_ready: take_bool(&mut obj, TRANSMISSION_READY)?,
            audio_asset_info: take_audio_info(&mut obj, AUDIO_ASSET_INFO)?,
            audio_bit_rate: take_string(&mut obj, AUDIO_BIT_RATE)?,
            audio_codec: take_string(&mut obj, AUDIO_CODEC)?,
            additional_info: take_string(&mut obj, ADDITIONAL_INFO)?,
        };

        for key in obj.keys() {
            trace!("Ignoring unknown key {key} in clip metadata payload");
        }

        Ok(metadata)
    }

    /// Serialize the record to a JSON value with the exact wire names.
    ///
    /// All keys are emitted, including `null` for unset fields.
    pub fn to_json_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(VIDEO_TYPE.to_string(), string_value(&self.video_type));
        obj.insert(DESCRIPTION.to_string(), string_value(&self.description));
        obj.insert(PLASMA_ID.to_string(), string_value(&self.plasma_id));
        obj.insert(YLE_ID.to_string(), string_value(&self.yle_id));
        obj.insert(MD5.to_string(), string_value(&self.md5));
        obj.insert(START_OF_FILE.to_string(), string_value(&self.start_of_file));
        obj.insert(END_OF_FILE.to_string(), string_value(&self.end_of_file));
        obj.insert(
            START_OF_MEDIA.to_string(),
            string_value(&self.start_of_media),
        );
        obj.insert(END_OF_MEDIA.to_string(), string_value(&self.end_of_media));
        obj.insert(
            TIME_CODE_TYPE.to_string(),
            string_value(&self.time_code_type),
        );
        obj.insert(RESOLUTION.to_string(), string_value(&self.resolution));
        obj.insert(CODEC.to_string(), string_value(&self.codec));
        obj.insert(BITRATE.to_string(), string_value(&self.bitrate));
        obj.insert(PI.to_string(), string_value(&self.pi));
        obj.insert(ASPECT_RATIO.to_string(), string_value(&self.aspect_ratio));
        obj.insert(FRAME_RATE.to_string(), Value::from(self.frame_rate));
        obj.insert(
            TRANSMISSION_READY.to_string(),
            Value::Bool(self.transmission_ready),
        );
        obj.insert(
            AUDIO_ASSET_INFO.to_string(),
            match &self.audio_asset_info {
                Some(info) => info.clone().into_value(),
                None => Value::Null,
            },
        );
        obj.insert(AUDIO_BIT_RATE.to_string(), string_value(&self.audio_bit_rate));
        obj.insert(AUDIO_CODEC.to_string(), string_value(&self.audio_codec));
        obj.insert(
            ADDITIONAL_INFO.to_string(),
            string_value(&self.additional_info),
        );
        Value::Object(obj)
    }

    /// Serialize the record to JSON text
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }
}

impl Serialize for VideoClipMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VideoClipMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(value).map_err(serde::de::Error::custom)
    }
}

fn string_value(field: &Option<String>) -> Value {
    match field {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn take_string(
    obj: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, MetadataError> {
    match obj.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(MetadataError::MalformedField {
            field,
            expected: "string",
        }),
    }
}

fn take_u32(obj: &mut Map<String, Value>, field: &'static str) -> Result<u32, MetadataError> {
    match obj.remove(field) {
        None => Ok(0),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or(MetadataError::MalformedField {
                field,
                expected: "unsigned integer",
            }),
        Some(_) => Err(MetadataError::MalformedField {
            field,
            expected: "unsigned integer",
        }),
    }
}

fn take_bool(obj: &mut Map<String, Value>, field: &'static str) -> Result<bool, MetadataError> {
    match obj.remove(field) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(b),
        Some(_) => Err(MetadataError::MalformedField {
            field,
            expected: "boolean",
        }),
    }
}

fn take_audio_info(
    obj: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<AudioAssetInfo>, MetadataError> {
    match obj.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(fields)) => Ok(Some(AudioAssetInfo::new(fields))),
        Some(_) => Err(MetadataError::MalformedField {
            field,
            expected: "object",
        }),
    }
}
