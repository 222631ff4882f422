use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Name reported while a manual override suspends the schedule.
pub const HOLD_PERIOD: &str = "Hold";

/// How close (in hours) a tick must land to a period boundary for a hold to
/// exit. Discrete drivers rarely hit a boundary exactly, so anything inside
/// this window counts as the crossing.
pub const BOUNDARY_TOLERANCE_HOURS: f64 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Period {
    pub name: String,
    #[serde(rename = "startHour")]
    pub start_hour: f64,
    #[serde(rename = "endHour")]
    pub end_hour: f64,
    #[serde(rename = "targetTemp")]
    pub target_temperature: i32,
}

impl Period {
    /// Interval containment on the 24-hour clock; `end < start` wraps
    /// through midnight.
    fn contains(&self, time_of_day: f64) -> bool {
        if self.start_hour <= self.end_hour {
            self.start_hour <= time_of_day && time_of_day < self.end_hour
        } else {
            time_of_day >= self.start_hour || time_of_day < self.end_hour
        }
    }

    fn starts_near(&self, time_of_day: f64) -> bool {
        (time_of_day - self.start_hour).abs() < BOUNDARY_TOLERANCE_HOURS
    }

    fn ends_near(&self, time_of_day: f64) -> bool {
        (time_of_day - self.end_hour).abs() < BOUNDARY_TOLERANCE_HOURS
    }

    fn validate(&self) -> Result<(), Error> {
        for (label, bound) in [("startHour", self.start_hour), ("endHour", self.end_hour)] {
            if !bound.is_finite() || !(0.0..24.0).contains(&bound) {
                return Err(Error::InvalidConfig(format!(
                    "period \"{}\": {label} {bound} is outside [0, 24)",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// Per-tick schedule outcome: the period in force, its target, and whether a
/// manual override is holding that target in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    pub active_period: String,
    pub target_temperature: i32,
    pub held: bool,
}

/// Ordered period table covering the full 24-hour cycle. Immutable once
/// constructed; all coverage checking happens in `new`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTable {
    periods: Vec<Period>,
}

impl ScheduleTable {
    pub fn new(periods: Vec<Period>) -> Result<Self, Error> {
        if periods.is_empty() {
            return Err(Error::InvalidConfig("period table is empty".to_string()));
        }

        for period in &periods {
            period.validate()?;
        }

        for hour in 0..24 {
            let covering = periods
                .iter()
                .filter(|period| period.contains(hour as f64))
                .count();
            match covering {
                1 => {}
                0 => {
                    return Err(Error::InvalidInput(format!(
                        "hour {hour} is not covered by any period"
                    )))
                }
                n => {
                    return Err(Error::InvalidInput(format!(
                        "hour {hour} is covered by {n} periods"
                    )))
                }
            }
        }

        Ok(Self { periods })
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn initial_state(&self) -> ScheduleState {
        // `new` guarantees at least one period.
        let first = &self.periods[0];
        ScheduleState {
            active_period: first.name.clone(),
            target_temperature: first.target_temperature,
            held: false,
        }
    }

    /// Advance the schedule state by one tick.
    ///
    /// An override press wins over everything else this tick and enters (or
    /// extends) the hold. A hold in force survives until some period boundary
    /// falls within tolerance of `time_of_day`. Otherwise the containing
    /// period's name and target are adopted.
    pub fn resolve(
        &self,
        state: &mut ScheduleState,
        time_of_day: f64,
        override_up: bool,
        override_down: bool,
    ) -> Result<(), Error> {
        if !(0.0..24.0).contains(&time_of_day) {
            return Err(Error::InvalidInput(format!(
                "time of day {time_of_day} is outside [0, 24)"
            )));
        }

        if override_up || override_down {
            state.held = true;
            state.active_period = HOLD_PERIOD.to_string();
            if override_up {
                state.target_temperature += 1;
            }
            if override_down {
                state.target_temperature -= 1;
            }
        } else if state.held {
            if let Some(period) = self.boundary(time_of_day) {
                state.held = false;
                state.active_period = period.name.clone();
                state.target_temperature = period.target_temperature;
            }
        } else if let Some(period) = self.containing(time_of_day) {
            state.active_period = period.name.clone();
            state.target_temperature = period.target_temperature;
        }

        Ok(())
    }

    fn containing(&self, time_of_day: f64) -> Option<&Period> {
        self.periods
            .iter()
            .find(|period| period.contains(time_of_day))
    }

    /// The period a hold exits into when `time_of_day` sits on a boundary.
    /// A start match wins over an end match so the hold hands over to the
    /// period beginning at the crossing, not the one that just finished.
    fn boundary(&self, time_of_day: f64) -> Option<&Period> {
        self.periods
            .iter()
            .find(|period| period.starts_near(time_of_day))
            .or_else(|| {
                self.periods
                    .iter()
                    .find(|period| period.ends_near(time_of_day))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn period(name: &str, start: f64, end: f64, target: i32) -> Period {
        Period {
            name: name.to_string(),
            start_hour: start,
            end_hour: end,
            target_temperature: target,
        }
    }

    fn work_home_sleep() -> ScheduleTable {
        ScheduleTable::new(vec![
            period("Work", 7.0, 16.0, 68),
            period("Home", 16.0, 22.0, 72),
            period("Sleep", 22.0, 7.0, 65),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_containing_period() {
        let table = work_home_sleep();
        let mut state = table.initial_state();

        table.resolve(&mut state, 10.0, false, false).unwrap();

        assert_eq!(state.active_period, "Work");
        assert_eq!(state.target_temperature, 68);
        assert!(!state.held);
    }

    #[test]
    fn midnight_wrap_resolves_to_sleep() {
        let table = work_home_sleep();
        let mut state = table.initial_state();

        table.resolve(&mut state, 23.5, false, false).unwrap();
        assert_eq!(state.active_period, "Sleep");

        table.resolve(&mut state, 3.0, false, false).unwrap();
        assert_eq!(state.active_period, "Sleep");
        assert_eq!(state.target_temperature, 65);
    }

    #[test]
    fn every_time_of_day_resolves_to_one_period() {
        let table = work_home_sleep();

        for tenth in 0..240 {
            let time_of_day = tenth as f64 / 10.0;
            let mut state = table.initial_state();
            table.resolve(&mut state, time_of_day, false, false).unwrap();

            assert!(!state.held);
            assert!(
                ["Work", "Home", "Sleep"].contains(&state.active_period.as_str()),
                "t={time_of_day} resolved to {}",
                state.active_period
            );
        }
    }

    #[test]
    fn override_enters_hold_and_bumps_target() {
        let table = work_home_sleep();
        let mut state = table.initial_state();
        table.resolve(&mut state, 10.0, false, false).unwrap();

        table.resolve(&mut state, 10.1, true, false).unwrap();

        assert!(state.held);
        assert_eq!(state.active_period, HOLD_PERIOD);
        assert_eq!(state.target_temperature, 69);
    }

    #[test]
    fn simultaneous_overrides_cancel_out() {
        let table = work_home_sleep();
        let mut state = table.initial_state();
        table.resolve(&mut state, 10.0, false, false).unwrap();

        table.resolve(&mut state, 10.1, true, true).unwrap();

        assert!(state.held);
        assert_eq!(state.target_temperature, 68);
    }

    #[test]
    fn hold_survives_away_from_boundaries() {
        let table = work_home_sleep();
        let mut state = table.initial_state();
        table.resolve(&mut state, 10.0, false, true).unwrap();

        table.resolve(&mut state, 12.0, false, false).unwrap();
        table.resolve(&mut state, 15.5, false, false).unwrap();

        assert!(state.held);
        assert_eq!(state.active_period, HOLD_PERIOD);
        assert_eq!(state.target_temperature, 67);
    }

    #[test]
    fn hold_exits_into_period_starting_at_boundary() {
        let table = work_home_sleep();
        let mut state = table.initial_state();
        table.resolve(&mut state, 10.0, true, false).unwrap();
        assert_eq!(state.target_temperature, 69);

        // 16.0 is Work's end and Home's start; the hold hands over to Home.
        table.resolve(&mut state, 16.0, false, false).unwrap();

        assert!(!state.held);
        assert_eq!(state.active_period, "Home");
        assert_eq!(state.target_temperature, 72);
    }

    #[test]
    fn repeated_overrides_keep_adjusting_held_target() {
        let table = work_home_sleep();
        let mut state = table.initial_state();

        table.resolve(&mut state, 8.0, true, false).unwrap();
        table.resolve(&mut state, 8.1, true, false).unwrap();
        table.resolve(&mut state, 8.2, true, false).unwrap();

        assert_eq!(state.target_temperature, 71);
        assert!(state.held);
    }

    #[test]
    fn rejects_time_outside_clock() {
        let table = work_home_sleep();
        let mut state = table.initial_state();
        let before = state.clone();

        assert!(matches!(
            table.resolve(&mut state, 24.0, false, false),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            table.resolve(&mut state, -0.1, true, false),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            table.resolve(&mut state, f64::NAN, false, false),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn empty_table_rejected() {
        assert!(matches!(
            ScheduleTable::new(Vec::new()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn uncovered_hour_rejected() {
        let result = ScheduleTable::new(vec![
            period("Day", 8.0, 20.0, 70),
            period("Night", 22.0, 8.0, 64),
        ]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn doubly_covered_hour_rejected() {
        let result = ScheduleTable::new(vec![
            period("Day", 6.0, 20.0, 70),
            period("Night", 18.0, 6.0, 64),
        ]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn period_bound_off_clock_rejected() {
        let result = ScheduleTable::new(vec![period("All", 0.0, 25.0, 70)]);

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
