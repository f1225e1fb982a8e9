//! Cycle-budget duty log.
//!
//! The log spans exactly the driver's reported cycle hours, one entry per
//! hour. Hour 1 is the pickup, the final hour is the dropoff when the driver
//! is already at the dropoff location, and the middle hour of every
//! `day_hours` block is a rest hour. The flat log is then cut into day sheets
//! of `day_hours` entries each.

use crate::models::duty::{DayLog, DutyLogEntry, DutyStatus};
use crate::models::trip::MAX_CYCLE_HOURS;

pub const DEFAULT_DAY_HOURS: u32 = 9;

pub fn total_hours(cycle_hours: f64) -> u32 {
    if !cycle_hours.is_finite() || cycle_hours <= 0.0 {
        return 0;
    }

    cycle_hours.min(MAX_CYCLE_HOURS).floor() as u32
}

pub fn build_log(cycle_hours: f64, at_dropoff: bool, day_hours: u32) -> Vec<DutyLogEntry> {
    let total = total_hours(cycle_hours);
    if total == 0 {
        return Vec::new();
    }
    let day_hours = day_hours.max(1);

    let mut log: Vec<DutyLogEntry> = (1..=total)
        .map(|hour| DutyLogEntry {
            hour,
            status: DutyStatus::Driving,
        })
        .collect();

    log[0].status = DutyStatus::Pickup;
    if at_dropoff {
        log[total as usize - 1].status = DutyStatus::Dropoff;
    }

    let mut block_start = 1;
    while block_start <= total {
        let midpoint = block_start + day_hours / 2;
        if midpoint <= total {
            let entry = &mut log[midpoint as usize - 1];
            if entry.status == DutyStatus::Driving {
                entry.status = DutyStatus::Resting;
            }
        }
        block_start += day_hours;
    }

    log
}

pub fn group_by_day(log: Vec<DutyLogEntry>, day_hours: u32) -> Vec<DayLog> {
    let day_hours = day_hours.max(1) as usize;

    log.chunks(day_hours)
        .enumerate()
        .map(|(idx, entries)| DayLog {
            day: idx as u32 + 1,
            entries: entries.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_log, group_by_day, total_hours};
    use crate::models::duty::DutyStatus;

    #[test]
    fn ten_hours_fill_two_day_sheets() {
        let log = build_log(10.0, false, 9);
        assert_eq!(log.len(), 10);

        let days = group_by_day(log, 9);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[0].entries.len(), 9);
        assert_eq!(days[1].day, 2);
        assert_eq!(days[1].entries.len(), 1);
        assert_eq!(days[1].entries[0].hour, 10);
    }

    #[test]
    fn first_hour_is_pickup_and_midpoint_rests() {
        let log = build_log(10.0, false, 9);

        assert_eq!(log[0].status, DutyStatus::Pickup);
        assert_eq!(log[4].hour, 5);
        assert_eq!(log[4].status, DutyStatus::Resting);
        assert_eq!(log[9].status, DutyStatus::Driving);

        let resting = log.iter().filter(|e| e.status == DutyStatus::Resting).count();
        assert_eq!(resting, 1);
    }

    #[test]
    fn last_hour_is_dropoff_only_when_already_there() {
        let there = build_log(10.0, true, 9);
        assert_eq!(there[9].status, DutyStatus::Dropoff);

        let elsewhere = build_log(10.0, false, 9);
        assert_eq!(elsewhere[9].status, DutyStatus::Driving);
    }

    #[test]
    fn dropoff_label_survives_midpoint_rule() {
        let log = build_log(5.0, true, 9);
        assert_eq!(log[4].status, DutyStatus::Dropoff);
    }

    #[test]
    fn every_full_block_gets_a_rest_hour() {
        let log = build_log(27.0, false, 9);
        let resting: Vec<u32> = log
            .iter()
            .filter(|e| e.status == DutyStatus::Resting)
            .map(|e| e.hour)
            .collect();
        assert_eq!(resting, vec![5, 14, 23]);
    }

    #[test]
    fn partial_final_block_rests_at_its_midpoint() {
        let log = build_log(14.0, false, 9);
        let resting: Vec<u32> = log
            .iter()
            .filter(|e| e.status == DutyStatus::Resting)
            .map(|e| e.hour)
            .collect();
        assert_eq!(resting, vec![5, 14]);

        let short = build_log(13.0, false, 9);
        assert_eq!(
            short.iter().filter(|e| e.status == DutyStatus::Resting).count(),
            1
        );
    }

    #[test]
    fn budget_is_capped_at_the_cycle_limit() {
        assert_eq!(total_hours(1e12), 70);
        assert_eq!(build_log(1e12, false, 9).len(), 70);
    }

    #[test]
    fn fractional_hours_are_truncated() {
        assert_eq!(total_hours(10.9), 10);
        assert_eq!(build_log(0.5, false, 9).len(), 0);
    }

    #[test]
    fn invalid_cycle_hours_yield_empty_log() {
        for hours in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            assert!(build_log(hours, true, 9).is_empty());
        }
        assert!(group_by_day(Vec::new(), 9).is_empty());
    }
}
