//! Rolling-year window over a sorted series.

use super::provider::PricePoint;
use chrono::{DateTime, Utc};

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
pub const ROLLING_WINDOW_DAYS: i64 = 365;

/// Closed interval `[start_ms, end_ms]` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl Window {
    /// The `days`-long window ending at `now`.
    pub fn trailing(now: DateTime<Utc>, days: i64) -> Self {
        let end_ms = now.timestamp_millis();
        Self {
            start_ms: end_ms - days * MS_PER_DAY,
            end_ms,
        }
    }

    /// The 365-day window ending at `now`.
    pub fn rolling_year(now: DateTime<Utc>) -> Self {
        Self::trailing(now, ROLLING_WINDOW_DAYS)
    }

    pub fn contains(&self, t: i64) -> bool {
        self.start_ms <= t && t <= self.end_ms
    }

    /// Keep the points inside the window, preserving order.
    pub fn apply(&self, points: &[PricePoint]) -> Vec<PricePoint> {
        points.iter().copied().filter(|p| self.contains(p.t)).collect()
    }
}

/// Restrict a series to the 365 days ending at `now` (both ends inclusive).
pub fn keep_rolling_year(points: &[PricePoint], now: DateTime<Utc>) -> Vec<PricePoint> {
    Window::rolling_year(now).apply(points)
}
