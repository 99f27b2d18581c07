//! Track descriptors.
//!
//! The reply to a [`request::DESCRIPTORS`](super::request::DESCRIPTORS) is a
//! single message holding zero or more fixed-size slots, one per recorded
//! track, followed by the usual checksum:
//!
//! ```text
//! | offset | type   | description
//! |--------|--------|-------------------------------------------------
//! | 0x00   | byte   | track identifier
//! | 0x04   | uint16 | number of waypoints (a hint only)
//! | 0x08   | byte   | years after 2000
//! | 0x09   | byte   | month, 1...12
//! | 0x0a   | byte   | day of month, 1...31
//! | 0x0b   | byte   | hours, 0...23 (GMT)
//! | 0x0c   | byte   | minutes, 0...59
//! | 0x0d   | byte   | seconds, 0...59
//! | 0x1e   | uint16 | calories / 10
//! ```
//!
//! Slots are counted by the length of the reply alone.

use core::iter::FusedIterator;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, trace};
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned, little_endian::U16};

use super::{
    field,
    header::{HEADER_LEN, Kind, has_message},
};

/// Offset of the first slot within the reply.
pub const DESCRIPTORS_BEGIN: usize = HEADER_LEN;

/// Size of a slot in bytes.
pub const DESCRIPTOR_LEN: usize = size_of::<DescriptorSlot>();

/// On-wire layout of a descriptor slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, Unaligned)]
pub struct DescriptorSlot {
    pub track_id: u8,
    _reserved0: [u8; 3],
    pub waypoint_count: U16,
    _reserved1: [u8; 2],
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    _reserved2: [u8; 16],
    pub calories: U16,
}

/// Summary of a recorded track.
#[derive(Debug, Clone, Copy)]
pub struct TrackDescriptor<'a>(&'a DescriptorSlot);

impl<'a> TrackDescriptor<'a> {
    /// Decode the slot at the start of a slice.
    pub fn decode(r: &'a [u8]) -> Result<Self, field::Error> {
        field::read(r, 0).map(TrackDescriptor)
    }

    /// The underlying slot.
    pub fn slot(&self) -> &'a DescriptorSlot {
        self.0
    }

    pub fn track_id(&self) -> u8 {
        self.0.track_id
    }

    /// The number of waypoints recorded. Not always consistent with the
    /// segments eventually received.
    pub fn waypoint_count(&self) -> u16 {
        self.0.waypoint_count.get()
    }

    /// The time recording began, if the stored date is valid.
    pub fn begin_time(&self) -> Option<DateTime<Utc>> {
        let s = self.0;

        let date = NaiveDate::from_ymd_opt(2000 + s.year as i32, s.month as u32, s.day as u32)?;
        let time = date.and_hms_opt(s.hour as u32, s.minute as u32, s.second as u32)?;

        Some(time.and_utc())
    }

    /// Calories burned.
    pub fn calories(&self) -> u32 {
        self.0.calories.get() as u32 * 10
    }
}

/// Iterator over the descriptors in a reply.
#[derive(Debug, Clone)]
pub struct Descriptors<'a> {
    r: &'a [u8],
}

impl<'a> Descriptors<'a> {
    /// Iterate the slots of a reply to a descriptors request.
    ///
    /// A reply not opening with a descriptors header holds no slots.
    pub fn new(r: &'a [u8]) -> Self {
        if !has_message(r, 0, Kind::Descriptors) {
            if !r.is_empty() {
                debug!("Reply of {} bytes is not a descriptor table.", r.len());
            }
            return Self { r: &[] };
        }

        Self {
            r: &r[DESCRIPTORS_BEGIN..],
        }
    }
}

impl<'a> Iterator for Descriptors<'a> {
    type Item = TrackDescriptor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Ok(descriptor) = TrackDescriptor::decode(self.r) else {
            self.r = &[];
            return None;
        };

        trace!("Found descriptor for track {}.", descriptor.track_id());
        self.r = &self.r[DESCRIPTOR_LEN..];

        Some(descriptor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.r.len() / DESCRIPTOR_LEN;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Descriptors<'_> {}

impl FusedIterator for Descriptors<'_> {}
