//! Waypoint records.
//!
//! ```text
//! | offset | type    | description
//! |--------|---------|---------------------------------------
//! | 0x00   | float32 | longitude in degrees
//! | 0x04   | float32 | latitude in degrees
//! | 0x08   | uint16  | speed in km/h
//! | 0x0a   | uint16  | altitude in meters
//! | 0x0c   | uint16  | seconds elapsed since the previous waypoint
//! | 0x0e   | uint16  | heart rate in beats per minute
//! ```

use zerocopy::{
    FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned,
    little_endian::{F32, U16},
};

use super::field;

/// Size of a waypoint record in bytes.
pub const WAYPOINT_LEN: usize = size_of::<WaypointRecord>();

/// On-wire layout of a waypoint record.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
pub struct WaypointRecord {
    pub longitude: F32,
    pub latitude: F32,
    pub speed: U16,
    pub altitude: U16,
    pub delay: U16,
    pub heart_rate: U16,
}

/// A sample of position, speed, altitude and heart rate.
///
/// Values are passed through as recorded; nothing is range checked.
#[derive(Debug, Clone, Copy)]
pub struct Waypoint<'a>(&'a WaypointRecord);

impl<'a> Waypoint<'a> {
    /// Decode the waypoint record at the start of a slice.
    pub fn decode(r: &'a [u8]) -> Result<Self, field::Error> {
        field::read(r, 0).map(Waypoint)
    }

    /// The underlying record.
    pub fn record(&self) -> &'a WaypointRecord {
        self.0
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f32 {
        self.0.longitude.get()
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f32 {
        self.0.latitude.get()
    }

    /// Speed in km/h.
    pub fn speed(&self) -> u16 {
        self.0.speed.get()
    }

    /// Altitude in meters.
    pub fn altitude(&self) -> u16 {
        self.0.altitude.get()
    }

    /// Seconds elapsed since the previous waypoint, or since the start of the
    /// track for the first.
    pub fn delay(&self) -> u16 {
        self.0.delay.get()
    }

    /// Heart rate in beats per minute.
    pub fn heart_rate(&self) -> u16 {
        self.0.heart_rate.get()
    }
}
