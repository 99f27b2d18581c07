//! Message headers and framing.
//!
//! Every message, in either direction, begins with the same six bytes:
//!
//! ```text
//! | offset | type   | description
//! |--------|--------|-------------------------------------------------
//! | 0x00   | byte   | fixed 'H' (0x48)
//! | 0x01   | byte   | fixed 'Y' (0x59)
//! | 0x02   | byte   | family
//! | 0x03   | byte   | command
//! | 0x04   | uint16 | payload size, excluding header and checksum
//! ```
//!
//! Two checksum bytes of unknown algorithm follow the payload. They are never
//! verified.
//!
//! The protocol has no terminator, so framing a reply means trusting each
//! embedded size in turn. There is no way to resynchronise after a corrupt
//! size, and none is attempted.

use either::Either::{self, Left, Right};
use log::{debug, trace};
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned, little_endian::U16};

use super::field;

/// Fixed signature opening every message.
pub const MAGIC: [u8; 2] = *b"HY";

/// Bytes of every message not counted by its payload size: the six header
/// bytes and the two trailing checksum bytes.
pub const PADDING: usize = 8;

/// Size of the header in bytes.
pub const HEADER_LEN: usize = size_of::<MessageHeader>();

/// On-wire layout of a message header.
#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, Unaligned)]
pub struct MessageHeader {
    pub signature: [u8; 2],
    pub family: u8,
    pub command: u8,
    pub size: U16,
}

impl MessageHeader {
    /// The kind of message this header introduces, if it is known.
    pub fn kind(&self) -> Option<Kind> {
        if self.signature != MAGIC {
            return None;
        }

        Kind::from_bytes(self.family, self.command)
    }

    /// Total length of the message, including header and checksum.
    pub fn message_len(&self) -> usize {
        self.size.get() as usize + PADDING
    }
}

/// A known family and command pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Acknowledgement occasionally sent after the last track segment.
    Acknowledge,
    /// Track descriptor table ("get descriptors").
    Descriptors,
    /// Track segment ("get track").
    Track,
}

impl Kind {
    /// The family byte.
    pub const fn family(self) -> u8 {
        match self {
            Kind::Acknowledge => 0x01,
            Kind::Descriptors | Kind::Track => 0x03,
        }
    }

    /// The command byte.
    pub const fn command(self) -> u8 {
        match self {
            Kind::Acknowledge => 0x00,
            Kind::Descriptors => 0x01,
            Kind::Track => 0x02,
        }
    }

    fn from_bytes(family: u8, command: u8) -> Option<Self> {
        match (family, command) {
            (0x01, 0x00) => Some(Kind::Acknowledge),
            (0x03, 0x01) => Some(Kind::Descriptors),
            (0x03, 0x02) => Some(Kind::Track),
            _ => None,
        }
    }
}

/// Whether a header of the given kind begins at an offset.
pub fn has_message(r: &[u8], offset: usize, kind: Kind) -> bool {
    field::read::<MessageHeader>(r, offset).is_ok_and(|h| h.kind() == Some(kind))
}

/// Total length of the message beginning at an offset, trusting its size
/// field.
pub fn message_length(r: &[u8], offset: usize) -> Result<usize, field::Error> {
    field::read::<MessageHeader>(r, offset).map(MessageHeader::message_len)
}

/// Reason a stream of messages ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// No bytes remain.
    Exhausted,
    /// The next bytes are not a header of the expected kind. This includes a
    /// header cut short, and known messages of another kind.
    Foreign(Option<Kind>),
    /// The final message is incomplete.
    Truncated { length: usize, available: usize },
    /// A message framed, but is too short to hold its fixed fields.
    Undersized { length: usize },
}

/// Split the leading message of a kind from the remainder of a buffer.
///
/// Returns the message, including its header and checksum, and the bytes
/// following it. Otherwise returns why no message could be framed. Every
/// [`End`] is a normal end of data: replies are assembled by polling a serial
/// line, and routinely stop partway through a message.
pub fn frame(r: &[u8], kind: Kind) -> Either<(&[u8], &[u8]), End> {
    if r.is_empty() {
        return Right(End::Exhausted);
    }

    let Ok(header) = field::read::<MessageHeader>(r, 0) else {
        debug!("Header cut short after {} bytes.", r.len());
        return Right(End::Foreign(None));
    };

    let found = header.kind();
    if found != Some(kind) {
        debug!("Expected {kind:?} header, found {found:?}.");
        return Right(End::Foreign(found));
    }

    let length = header.message_len();
    if length > r.len() {
        debug!(
            "{kind:?} message of {length} bytes truncated to {}.",
            r.len()
        );
        return Right(End::Truncated {
            length,
            available: r.len(),
        });
    }

    trace!("Framed {kind:?} message of {length} bytes.");

    Left(r.split_at(length))
}
