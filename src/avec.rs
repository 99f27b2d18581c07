//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module cover the usual round trip with a device:
//! exchanging requests for replies over a reader, collecting the descriptor
//! table, pairing waypoints with absolute times, and rendering a track as
//! GPX.
//!
//! # Example
//!
//! ```
//! use breadcrumb::{avec, sans::{Track, request}};
//!
//! let descriptors = avec::exchange(&mut port, &request::DESCRIPTORS)?;
//! let descriptors = avec::decode_descriptors(&descriptors);
//!
//! let reply = avec::exchange(&mut port, &request::TRACK)?;
//! let track = Track::new(&reply);
//!
//! // The device sends the latest track whatever was asked for.
//! let begin = track
//!     .track_id()
//!     .and_then(|id| descriptors.get(&id))
//!     .and_then(|d| d.begin_time())
//!     .unwrap_or_default();
//!
//! avec::write_track(&mut out, &track, begin)?;
//! ```

#[cfg(feature = "std")]
pub mod gpx;
#[cfg(feature = "std")]
pub mod reader;
#[cfg(feature = "std")]
pub mod table;
pub mod timeline;

#[cfg(feature = "std")]
pub use gpx::write_track;
#[cfg(feature = "std")]
pub use reader::{exchange, read_reply};
#[cfg(feature = "std")]
pub use table::decode as decode_descriptors;
pub use timeline::Timeline;
