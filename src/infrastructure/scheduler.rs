use std::sync::Arc;

use chrono::{Datelike, Duration, Local, NaiveDateTime, NaiveTime, Weekday};
use tokio::task::JoinHandle;

use crate::{
    application::usecases::scan_scheduled_drops::ScanScheduledDropsUseCase,
    domain::value_objects::DropSlot,
};

#[derive(Debug, Clone)]
pub struct DropScheduleConfig {
    pub day: Weekday,
    pub time: NaiveTime,
}

/// Weekly timer that fires the scheduled-drop scan at one fixed local-time
/// slot. The handler tolerates re-entry: a double fire rescans and
/// dispatches whatever the store still matches.
pub struct DropScanWorker {
    usecase: Arc<ScanScheduledDropsUseCase>,
    config: DropScheduleConfig,
}

impl DropScanWorker {
    pub fn new(usecase: Arc<ScanScheduledDropsUseCase>, config: DropScheduleConfig) -> Self {
        Self { usecase, config }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(self) {
        let slot = DropSlot::new(self.config.day, self.config.time);
        loop {
            let wait =
                until_next_occurrence(Local::now().naive_local(), self.config.day, self.config.time);
            let sleep_for = wait.to_std().unwrap_or_default();
            tracing::info!(
                day = %slot.day,
                time = %slot.time,
                seconds = sleep_for.as_secs(),
                "next drop scan scheduled"
            );
            tokio::time::sleep(sleep_for).await;

            match self.usecase.execute(&slot).await {
                Ok(dispatched) => {
                    tracing::info!(dispatched, "drop scan cycle complete");
                }
                Err(err) => {
                    // abandoned until the next weekly firing, no retry
                    tracing::error!(error = %err, "drop scan cycle failed");
                }
            }
        }
    }
}

/// Time until the next `day` at `time`, strictly in the future.
fn until_next_occurrence(now: NaiveDateTime, day: Weekday, time: NaiveTime) -> Duration {
    let days_ahead =
        (day.num_days_from_monday() + 7 - now.weekday().num_days_from_monday()) % 7;
    let mut target = (now.date() + Duration::days(i64::from(days_ahead))).and_time(time);
    if target <= now {
        target += Duration::days(7);
    }
    target - now
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn five_pm() -> NaiveTime {
        NaiveTime::from_hms_opt(17, 0, 0).unwrap()
    }

    #[test]
    fn same_day_before_slot_waits_until_slot() {
        // 2026-08-04 is a Tuesday
        let wait = until_next_occurrence(at(2026, 8, 4, 10, 0), Weekday::Tue, five_pm());
        assert_eq!(wait, Duration::hours(7));
    }

    #[test]
    fn same_day_after_slot_waits_until_next_week() {
        let wait = until_next_occurrence(at(2026, 8, 4, 18, 0), Weekday::Tue, five_pm());
        assert_eq!(wait, Duration::days(7) - Duration::hours(1));
    }

    #[test]
    fn exactly_at_slot_waits_a_full_week() {
        let wait = until_next_occurrence(at(2026, 8, 4, 17, 0), Weekday::Tue, five_pm());
        assert_eq!(wait, Duration::days(7));
    }

    #[test]
    fn earlier_weekday_wraps_forward() {
        // from a Wednesday to the following Tuesday
        let wait = until_next_occurrence(at(2026, 8, 5, 17, 0), Weekday::Tue, five_pm());
        assert_eq!(wait, Duration::days(6));
    }
}
