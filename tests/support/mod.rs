#![allow(dead_code)]

use std::{
    collections::VecDeque,
    io::{self, ErrorKind, Read, Write},
};

use breadcrumb::sans::{request, waypoint::WaypointRecord};
use zerocopy::{
    IntoBytes,
    little_endian::{F32, U16},
};

pub const CHECKSUM: [u8; 2] = [0x5a, 0xa5];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn waypoint(
    longitude: f32,
    latitude: f32,
    speed: u16,
    altitude: u16,
    delay: u16,
    heart_rate: u16,
) -> WaypointRecord {
    WaypointRecord {
        longitude: F32::new(longitude),
        latitude: F32::new(latitude),
        speed: U16::new(speed),
        altitude: U16::new(altitude),
        delay: U16::new(delay),
        heart_rate: U16::new(heart_rate),
    }
}

/// A waypoint distinguishable by its index alone.
pub fn nth_waypoint(n: u16) -> WaypointRecord {
    waypoint(24.0 + n as f32, 60.0 + n as f32, n, 100 + n, n, 60 + n)
}

pub fn message(family: u8, command: u8, payload: &[u8]) -> Vec<u8> {
    let mut m = vec![0x48, 0x59, family, command];
    m.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    m.extend_from_slice(payload);
    m.extend_from_slice(&CHECKSUM);
    m
}

pub fn segment_payload(
    track_id: u8,
    segment_no: u8,
    waypoint_count: u16,
    records: &[WaypointRecord],
) -> Vec<u8> {
    let mut payload = vec![track_id, 0, segment_no, 0];
    payload.extend_from_slice(&waypoint_count.to_le_bytes());
    payload.extend_from_slice(&[0; 26]);
    for record in records {
        payload.extend_from_slice(record.as_bytes());
    }
    payload
}

pub fn segment(track_id: u8, segment_no: u8, records: &[WaypointRecord]) -> Vec<u8> {
    let payload = segment_payload(track_id, segment_no, records.len() as u16, records);
    message(0x03, 0x02, &payload)
}

pub fn acknowledge() -> Vec<u8> {
    message(0x01, 0x00, &[0x03, 0x02])
}

pub fn slot(
    track_id: u8,
    waypoint_count: u16,
    [year, month, day, hour, minute, second]: [u8; 6],
    calories: u16,
) -> [u8; 32] {
    let mut slot = [0; 32];
    slot[0x00] = track_id;
    slot[0x04..0x06].copy_from_slice(&waypoint_count.to_le_bytes());
    slot[0x08..0x0e].copy_from_slice(&[year, month, day, hour, minute, second]);
    slot[0x1e..0x20].copy_from_slice(&calories.to_le_bytes());
    slot
}

pub fn descriptors(slots: &[[u8; 32]]) -> Vec<u8> {
    message(0x03, 0x01, &slots.concat())
}

/// A device replying to requests as the GD-003 does, in chunks, and timing
/// out once it has nothing more to send.
pub struct Device {
    pub descriptors: Vec<u8>,
    pub latest_track: Vec<u8>,
    pub requests: Vec<Vec<u8>>,
    pub chunk: usize,
    pending: VecDeque<u8>,
    interrupt: bool,
}

impl Device {
    pub fn new(descriptors: Vec<u8>, latest_track: Vec<u8>) -> Self {
        Self {
            descriptors,
            latest_track,
            requests: vec![],
            chunk: 64,
            pending: VecDeque::new(),
            interrupt: true,
        }
    }
}

impl Write for Device {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.requests.push(buf.to_vec());

        let reply = if buf == request::DESCRIPTORS {
            &self.descriptors
        } else if buf.len() == request::TRACK.len() && buf[..6] == request::TRACK[..6] {
            // The track identifier at offset 0x06 is ignored.
            &self.latest_track
        } else {
            return Ok(buf.len());
        };

        self.pending.extend(reply);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Device {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt {
            self.interrupt = false;
            return Err(ErrorKind::Interrupted.into());
        }

        if self.pending.is_empty() {
            return Err(ErrorKind::TimedOut.into());
        }

        let n = buf.len().min(self.chunk).min(self.pending.len());
        for (b, p) in buf.iter_mut().zip(self.pending.drain(..n)) {
            *b = p;
        }
        Ok(n)
    }
}
