use crate::utils::time::MINUTES_PER_DAY;

/// Half-open `[start_minute, end_minute)` span of a day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeInterval {
    pub start_minute: u32,
    pub end_minute: u32,
}

impl TimeInterval {
    pub fn new(start_minute: u32, end_minute: u32) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Build the intervals covered by a wall-clock span.
    /// A span ending before it starts crosses midnight and is split in two.
    /// Zero-length pieces are dropped.
    pub fn from_wall_clock(start: u32, end: u32) -> Vec<TimeInterval> {
        let start = start.min(MINUTES_PER_DAY);
        let end = end.min(MINUTES_PER_DAY);

        let pieces = if end < start {
            vec![
                TimeInterval::new(start, MINUTES_PER_DAY),
                TimeInterval::new(0, end),
            ]
        } else {
            vec![TimeInterval::new(start, end)]
        };

        pieces.into_iter().filter(|i| !i.is_empty()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.end_minute <= self.start_minute
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    pub fn shifted(&self, offset: u32) -> TimeInterval {
        TimeInterval::new(self.start_minute + offset, self.end_minute + offset)
    }

    /// Intersection with `[lo, hi)`, or None when they do not overlap.
    pub fn clip(&self, lo: u32, hi: u32) -> Option<TimeInterval> {
        let clipped = TimeInterval::new(self.start_minute.max(lo), self.end_minute.min(hi));
        (!clipped.is_empty()).then_some(clipped)
    }
}

/// Sort by start and fold overlapping or touching intervals together.
pub fn merge_intervals(mut intervals: Vec<TimeInterval>) -> Vec<TimeInterval> {
    intervals.sort();

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(intervals.len());
    for next in intervals {
        match merged.last_mut() {
            Some(prev) if next.start_minute <= prev.end_minute => {
                prev.end_minute = prev.end_minute.max(next.end_minute);
            }
            _ => merged.push(next),
        }
    }

    merged
}
