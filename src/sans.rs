//! Allocation-free views over device replies.
//!
//! Nothing in this module performs I/O or allocates. Each decoder borrows a
//! reply assembled by the caller and reads from it lazily. See
//! [`crate::avec`] for the convenience layer built on top.
//!
//! # Architecture
//!
//! A reply is a run of messages, each opening with a [`header::MessageHeader`]
//! whose size field is the only way to find the next. Framing is therefore a
//! single step, [`header::frame`], which either splits off one message or
//! reports why the run has ended.
//!
//! Two replies are understood:
//!
//! - The descriptor table, one message of fixed-size slots. Iterate it with
//! [`descriptor::Descriptors`].
//!
//! - A track, any number of segment messages. Iterate it with
//! [`track::Track::segments`], then each segment with
//! [`segment::TrackSegment::waypoints`].
//!
//! Both iterators close over their own position, and both are fused: once a
//! run ends it stays ended.
//!
//! Some properties of the protocol are not represented here and must be
//! handled by the caller:
//!
//! - Knowing when the device has finished replying. Nothing in a reply marks
//! its end.
//!
//! - Reconstructing absolute times. Waypoints carry only the delay since
//! their predecessor; see [`crate::avec::timeline`].
//!
//! Checksums are never verified.

pub mod descriptor;
pub mod field;
pub mod header;
pub mod request;
pub mod segment;
pub mod track;
pub mod waypoint;

pub use descriptor::{Descriptors, TrackDescriptor};
pub use segment::TrackSegment;
pub use track::Track;
pub use waypoint::Waypoint;
