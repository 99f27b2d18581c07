//! GPX rendering.
//!
//! _Requires Cargo feature `std`._

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use log::debug;

use crate::sans::{Track, TrackSegment};

use super::timeline::Timeline;

extern crate std;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const PREAMBLE: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#,
    "\n",
    r#"<gpx xmlns="http://www.topografix.com/GPX/1/1""#,
    r#" xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1""#,
    r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#,
    r#" creator="breadcrumb" version="1.1""#,
    r#" xsi:schemaLocation="http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd"#,
    r#" http://www.garmin.com/xmlschemas/TrackPointExtension/v1 http://www.garmin.com/xmlschemas/TrackPointExtensionv1.xsd">"#,
    "\n",
);

/// Render a track as a GPX document, returning the number of waypoints
/// written.
///
/// The document holds a single `<trk>`, with one `<trkseg>` per segment and
/// one `<trkpt>` per waypoint. Times accumulate from `begin` across segment
/// boundaries.
///
/// Segments are decoded as they are written, so nothing beyond the reply
/// itself is buffered.
pub fn write_track(
    w: &mut impl Write,
    track: &Track<'_>,
    begin: DateTime<Utc>,
) -> io::Result<usize> {
    w.write_all(PREAMBLE.as_bytes())?;
    writeln!(w, "  <metadata>")?;
    writeln!(w, "    <time>{}</time>", begin.format(TIME_FORMAT))?;
    writeln!(w, "  </metadata>")?;

    writeln!(w, "  <trk>")?;
    if let Some(id) = track.track_id() {
        writeln!(w, "    <number>{id}</number>")?;
    }

    let mut time = begin;
    let mut total = 0;

    for segment in track.segments() {
        let (count, end) = write_segment(w, &segment, time)?;
        debug!("Segment {} - {count} waypoints.", segment.segment_no());

        time = end;
        total += count;
    }

    writeln!(w, "  </trk>")?;
    writeln!(w, "</gpx>")?;

    debug!("Wrote {total} waypoints.");

    Ok(total)
}

/// Render one `<trkseg>`, returning the number of waypoints written and the
/// time of the last.
fn write_segment(
    w: &mut impl Write,
    segment: &TrackSegment<'_>,
    begin: DateTime<Utc>,
) -> io::Result<(usize, DateTime<Utc>)> {
    writeln!(w, "    <trkseg>")?;

    let mut timeline = Timeline::new(begin, segment.waypoints());
    let mut count = 0;

    for (time, waypoint) in &mut timeline {
        writeln!(
            w,
            r#"      <trkpt lat="{:.6}" lon="{:.6}">"#,
            waypoint.latitude(),
            waypoint.longitude()
        )?;
        writeln!(w, "        <ele>{}</ele>", waypoint.altitude())?;
        writeln!(w, "        <time>{}</time>", time.format(TIME_FORMAT))?;
        writeln!(w, "        <extensions>")?;
        writeln!(w, "          <gpxtpx:TrackPointExtension>")?;
        writeln!(w, "            <gpxtpx:hr>{}</gpxtpx:hr>", waypoint.heart_rate())?;
        writeln!(w, "          </gpxtpx:TrackPointExtension>")?;
        writeln!(w, "        </extensions>")?;
        writeln!(w, "      </trkpt>")?;

        count += 1;
    }

    writeln!(w, "    </trkseg>")?;

    Ok((count, timeline.time()))
}
