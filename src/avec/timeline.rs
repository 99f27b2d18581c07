//! Absolute times for waypoints.

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

use crate::sans::Waypoint;

/// Iterator adapter pairing waypoints with the time they were recorded.
///
/// Each waypoint stores only the delay since the one before it, so times
/// accumulate from the begin time of the track, in order. Skipping or
/// reordering waypoints before this adapter corrupts every later time.
#[derive(Debug, Clone)]
pub struct Timeline<I> {
    time: DateTime<Utc>,
    waypoints: I,
}

impl<I> Timeline<I> {
    /// Start a clock at `begin`, usually
    /// [`TrackDescriptor::begin_time`](crate::sans::TrackDescriptor::begin_time).
    pub fn new(begin: DateTime<Utc>, waypoints: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            time: begin,
            waypoints: waypoints.into_iter(),
        }
    }

    /// Time of the last waypoint yielded, or the begin time if none has been.
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Carry the clock over to another run of waypoints, such as the next
    /// segment of the same track.
    pub fn continue_with<J>(self, waypoints: impl IntoIterator<IntoIter = J>) -> Timeline<J> {
        Timeline::new(self.time, waypoints)
    }
}

impl<'a, I> Iterator for Timeline<I>
where
    I: Iterator<Item = Waypoint<'a>>,
{
    type Item = (DateTime<Utc>, Waypoint<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let waypoint = self.waypoints.next()?;

        let delay = TimeDelta::seconds(waypoint.delay().into());
        let Some(time) = self.time.checked_add_signed(delay) else {
            debug!("Clock overflowed adding {} seconds.", waypoint.delay());
            return None;
        };
        self.time = time;

        Some((time, waypoint))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.waypoints.size_hint();
        (0, upper)
    }
}
