use std::time::Duration;

use chrono::Timelike;

const CYCLE_MS: u64 = 5 * 60 * 1000;

/// Delay until the next 5-minute wall-clock boundary.
///
/// A call made exactly on a boundary gets the full cycle, never zero, so
/// the reload fires at the *next* boundary.
pub fn reload_delay<T: Timelike>(now: &T) -> Duration {
    let into_cycle = (u64::from(now.minute() % 5) * 60_000
        + u64::from(now.second()) * 1_000
        + u64::from(now.nanosecond() / 1_000_000))
        % CYCLE_MS;
    if into_cycle == 0 {
        Duration::from_millis(CYCLE_MS)
    } else {
        Duration::from_millis(CYCLE_MS - into_cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap()
    }

    #[test]
    fn mid_cycle_targets_next_boundary() {
        assert_eq!(
            reload_delay(&at(12, 4, 30, 500)),
            Duration::from_millis(29_500)
        );
    }

    #[test]
    fn exact_boundary_waits_a_full_cycle() {
        assert_eq!(
            reload_delay(&at(12, 5, 0, 0)),
            Duration::from_millis(300_000)
        );
        assert_eq!(
            reload_delay(&at(0, 0, 0, 0)),
            Duration::from_millis(300_000)
        );
    }

    #[test]
    fn one_millisecond_past_boundary() {
        assert_eq!(
            reload_delay(&at(12, 5, 0, 1)),
            Duration::from_millis(299_999)
        );
    }

    #[test]
    fn one_millisecond_before_boundary() {
        assert_eq!(reload_delay(&at(23, 59, 59, 999)), Duration::from_millis(1));
    }
}
