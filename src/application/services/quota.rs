use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};

/// Send caps for the two quota windows.
#[derive(Debug, Clone)]
pub struct QuotaConfig {
    pub hourly_limit: u32,
    pub daily_limit: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            hourly_limit: 150,
            daily_limit: 1000,
        }
    }
}

#[derive(Debug)]
struct QuotaWindow {
    count: u32,
    window_started_at: DateTime<Utc>,
    limit: u32,
    period: Duration,
}

impl QuotaWindow {
    fn new(limit: u32, period: Duration, now: DateTime<Utc>) -> Self {
        Self {
            count: 0,
            window_started_at: now,
            limit,
            period,
        }
    }

    /// Fixed-window reset: the count drops to zero the moment a full period
    /// has elapsed, never gradually. A burst at the end of one window may be
    /// followed by a full burst at the start of the next.
    fn roll_over(&mut self, now: DateTime<Utc>) {
        if now - self.window_started_at >= self.period {
            self.count = 0;
            self.window_started_at = now;
        }
    }

    fn is_exhausted(&self) -> bool {
        self.count >= self.limit
    }
}

struct Windows {
    hour: QuotaWindow,
    day: QuotaWindow,
}

/// Process-wide send quota. Both counters live behind one mutex so the
/// check-and-increment in `try_consume` is indivisible across concurrent
/// dispatches. The lock is never held across an await point.
pub struct QuotaTracker {
    windows: Mutex<Windows>,
}

impl QuotaTracker {
    pub fn new(config: QuotaConfig) -> Self {
        let now = Utc::now();
        Self {
            windows: Mutex::new(Windows {
                hour: QuotaWindow::new(config.hourly_limit, Duration::hours(1), now),
                day: QuotaWindow::new(config.daily_limit, Duration::hours(24), now),
            }),
        }
    }

    /// Grants one send unit if both windows have capacity after rollover.
    /// A denial mutates nothing.
    pub fn try_consume(&self) -> bool {
        self.try_consume_at(Utc::now())
    }

    pub fn try_consume_at(&self, now: DateTime<Utc>) -> bool {
        let mut windows = self.lock();
        windows.hour.roll_over(now);
        windows.day.roll_over(now);

        if windows.hour.is_exhausted() || windows.day.is_exhausted() {
            return false;
        }

        windows.hour.count += 1;
        windows.day.count += 1;
        true
    }

    /// Current (hour, day) counts after rollover. Read-only snapshot.
    pub fn usage(&self) -> (u32, u32) {
        self.usage_at(Utc::now())
    }

    pub fn usage_at(&self, now: DateTime<Utc>) -> (u32, u32) {
        let mut windows = self.lock();
        windows.hour.roll_over(now);
        windows.day.roll_over(now);
        (windows.hour.count, windows.day.count)
    }

    fn lock(&self) -> MutexGuard<'_, Windows> {
        // a poisoned lock still holds consistent counters
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
