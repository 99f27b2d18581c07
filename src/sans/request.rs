//! Request messages.
//!
//! Requests share the header of every other message. Their checksum
//! algorithm is unknown, so only these captured literals are known to be
//! accepted.

/// Request the descriptor table of all recorded tracks.
pub const DESCRIPTORS: [u8; 8] = [0x48, 0x59, 0x03, 0x01, 0x00, 0x00, 0x04, 0x0f];

/// Request a track.
///
/// The byte at offset 0x06 nominally selects a track, but the device ignores
/// it and always sends the most recently recorded one. Read the identifier of
/// what was actually sent with [`Track::track_id`](super::track::Track::track_id).
pub const TRACK: [u8; 9] = [0x48, 0x59, 0x03, 0x02, 0x01, 0x00, 0x01, 0x07, 0x1b];
