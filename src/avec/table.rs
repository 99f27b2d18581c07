//! Descriptor table decoder.
//!
//! _Requires Cargo feature `std`._

use std::collections::BTreeMap;

use log::debug;

use crate::sans::{Descriptors, TrackDescriptor};

extern crate std;

/// Decode a reply to a descriptors request into descriptors by track
/// identifier.
///
/// The protocol does not promise unique identifiers; a later slot replaces
/// an earlier one with the same identifier. A reply holding no complete slot
/// yields an empty table.
///
/// This method is also re-exported as `breadcrumb::avec::decode_descriptors`.
pub fn decode(r: &[u8]) -> BTreeMap<u8, TrackDescriptor<'_>> {
    let mut table = BTreeMap::new();

    for descriptor in Descriptors::new(r) {
        let id = descriptor.track_id();
        if table.insert(id, descriptor).is_some() {
            debug!("Duplicate descriptor for track {id}, keeping the last.");
        }
    }

    table
}
