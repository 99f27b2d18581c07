//! Tracks.
//!
//! A track is the full reply to a [`request::TRACK`](super::request::TRACK):
//! the concatenation of its segment messages, with nothing marking the last.

use core::iter::FusedIterator;

use either::Either::{Left, Right};
use log::debug;

use super::{
    field,
    header::{End, Kind, frame},
    segment::{SegmentHeader, TrackSegment},
};

/// A decoded reply to a track request.
#[derive(Debug, Clone, Copy)]
pub struct Track<'a> {
    r: &'a [u8],
}

impl<'a> Track<'a> {
    /// View a reply to a track request. No bytes are read until iteration.
    pub fn new(r: &'a [u8]) -> Self {
        Self { r }
    }

    /// The identifier of the track, read from the first segment.
    ///
    /// The device ignores the identifier sent with a request, so this is the
    /// only reliable source. Returns `None` if the reply is too short.
    pub fn track_id(&self) -> Option<u8> {
        let header = field::read::<SegmentHeader>(self.r, 0).ok()?;
        Some(header.track_id)
    }

    /// The raw reply.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.r
    }

    /// The segments of the track, in received order.
    pub fn segments(&self) -> Segments<'a> {
        Segments {
            state: State::Scanning(self.r),
        }
    }
}

impl<'a> IntoIterator for &Track<'a> {
    type Item = TrackSegment<'a>;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}

#[derive(Debug, Clone)]
enum State<'a> {
    /// Bytes from the next expected segment header onward.
    Scanning(&'a [u8]),
    Done(End),
}

/// Iterator over the segments of a track.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    state: State<'a>,
}

impl Segments<'_> {
    /// Why iteration ended, once it has.
    pub fn end(&self) -> Option<End> {
        match self.state {
            State::Scanning(_) => None,
            State::Done(end) => Some(end),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = TrackSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let State::Scanning(r) = self.state else {
            return None;
        };

        let (message, rest) = match frame(r, Kind::Track) {
            Left(framed) => framed,
            Right(end) => {
                self.state = State::Done(end);
                return None;
            }
        };

        // A message too short for the segment fields cannot be trusted to
        // frame the next one either.
        let segment = match TrackSegment::new(message) {
            Ok(segment) => segment,
            Err(err) => {
                debug!("Discarding undersized segment: {err}");
                self.state = State::Done(End::Undersized {
                    length: message.len(),
                });
                return None;
            }
        };

        self.state = State::Scanning(rest);

        Some(segment)
    }
}

impl FusedIterator for Segments<'_> {}
