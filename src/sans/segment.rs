//! Track segments.
//!
//! The device answers a track request with one, but usually several,
//! segment messages. Each carries a contiguous run of waypoints:
//!
//! ```text
//! | offset | type   | description
//! |--------|--------|-------------------------------------------------
//! | 0x00   |        | message header, family 0x03, command 0x02
//! | 0x06   | byte   | track identifier
//! | 0x08   | byte   | segment number, 0...n
//! | 0x0a   | uint16 | number of waypoints claimed by the segment
//! | 0x26   |        | first waypoint record
//! |        | byte   | checksum, unknown algorithm
//! |        | byte   | checksum, unknown algorithm
//! ```

use core::iter::FusedIterator;

use log::debug;
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned, little_endian::U16};

use super::{
    field,
    header::{HEADER_LEN, MessageHeader, PADDING},
    waypoint::{WAYPOINT_LEN, Waypoint},
};

/// Offset of the first waypoint record within a segment.
pub const WAYPOINTS_BEGIN: usize = size_of::<SegmentHeader>();

/// On-wire layout of the fixed part of a segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, Unaligned)]
pub struct SegmentHeader {
    pub message: MessageHeader,
    pub track_id: u8,
    _reserved0: u8,
    pub segment_no: u8,
    _reserved1: u8,
    pub waypoint_count: U16,
    _reserved2: [u8; 26],
}

/// A run of waypoints received as one message.
///
/// Produced by [`Track::segments`](super::track::Track::segments). The view
/// spans exactly one framed message, so nothing read through it can spill
/// into a neighbouring segment.
#[derive(Debug, Clone, Copy)]
pub struct TrackSegment<'a> {
    r: &'a [u8],
    header: &'a SegmentHeader,
}

impl<'a> TrackSegment<'a> {
    /// View a framed segment message.
    ///
    /// Fails if the message is too short to hold the fixed segment fields.
    pub fn new(r: &'a [u8]) -> Result<Self, field::Error> {
        let header = field::read::<SegmentHeader>(r, 0)?;
        Ok(Self { r, header })
    }

    /// The identifier of the track this segment belongs to.
    pub fn track_id(&self) -> u8 {
        self.header.track_id
    }

    /// The sequence number of this segment within its track.
    pub fn segment_no(&self) -> u8 {
        self.header.segment_no
    }

    /// The number of waypoints the segment claims to hold.
    ///
    /// This is not trusted by [`TrackSegment::waypoints`].
    pub fn waypoint_count(&self) -> u16 {
        self.header.waypoint_count.get()
    }

    /// Length of the message in bytes.
    pub fn message_len(&self) -> usize {
        self.r.len()
    }

    /// The raw message bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.r
    }

    /// The two trailing checksum bytes, unverified.
    pub fn checksum(&self) -> Option<[u8; 2]> {
        let at = self.r.len().checked_sub(PADDING - HEADER_LEN)?;
        field::read::<[u8; 2]>(self.r, at).ok().copied()
    }

    /// The waypoints in this segment, in recorded order.
    ///
    /// Iteration is bounded by the length of the message, not by
    /// [`TrackSegment::waypoint_count`], which firmware does not always keep
    /// consistent.
    pub fn waypoints(&self) -> Waypoints<'a> {
        let waypoints = Waypoints {
            r: self.r,
            offset: WAYPOINTS_BEGIN,
        };

        if waypoints.len() != self.waypoint_count() as usize {
            debug!(
                "Segment {} claims {} waypoints, has room for {}.",
                self.segment_no(),
                self.waypoint_count(),
                waypoints.len(),
            );
        }

        waypoints
    }
}

/// Iterator over the waypoints of a segment.
#[derive(Debug, Clone)]
pub struct Waypoints<'a> {
    r: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Waypoints<'a> {
    type Item = Waypoint<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // A record must end strictly before the message does; the last two
        // bytes are always the checksum.
        if self.offset + WAYPOINT_LEN >= self.r.len() {
            self.offset = self.r.len();
            return None;
        }

        let waypoint = Waypoint::decode(&self.r[self.offset..]).ok()?;
        self.offset += WAYPOINT_LEN;

        Some(waypoint)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.r.len().saturating_sub(self.offset + 1) / WAYPOINT_LEN;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Waypoints<'_> {}

impl FusedIterator for Waypoints<'_> {}
