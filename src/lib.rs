//! Metadata exchange types for a MediaFlex UMS media asset management
//! integration. The crate only defines the wire records and their JSON
//! mapping; transport and connector logic live in the calling system.

pub mod audio_asset;
pub mod error;
pub mod video_clip;

//
// Re-export
//
pub use audio_asset::AudioAssetInfo;
pub use error::MetadataError;
pub use video_clip::VideoClipMetadata;
