#![no_std]

//! An efficient decoder for the GD-003 sports watch serial protocol.
//!
//! The watch answers requests over a serial line with runs of binary
//! messages. Breadcrumb reads recorded tracks out of these replies: a table
//! of descriptors summarising each track, and the segments and waypoints of
//! the most recent one.
//!
//! Most users should begin with the functions in the [`avec`] module. The
//! decoders themselves live in the [`sans`] module, which neither allocates
//! nor performs I/O, and hands out views borrowing the reply.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based exchange, the descriptor table and GPX
//! rendering (default).

pub mod avec;
pub mod sans;
