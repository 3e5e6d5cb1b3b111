//! Track model and its line-oriented text codec.

pub mod codec;
pub mod model;

pub use codec::{parse_track, parse_track_file, serialize_track};
pub use model::{Stats, Track, TrackElement, ASSERTABLE_PREFIX, WITH_SUMMARY_KIND};
