use std::f64::consts::PI;

use thermostat_core::ControlMode;

/// Commanded-mode program: four-hour blocks cycling Off, Heating, Off,
/// Cooling, Off, Heating across the day.
pub fn mode_program(time_of_day: f64) -> ControlMode {
    match time_of_day {
        t if t < 4.0 => ControlMode::Off,
        t if t < 8.0 => ControlMode::Heating,
        t if t < 12.0 => ControlMode::Off,
        t if t < 16.0 => ControlMode::Cooling,
        t if t < 20.0 => ControlMode::Off,
        _ => ControlMode::Heating,
    }
}

/// Room trace: two full sine swings around 68°F over the run. The room is an
/// external signal, not a modeled response to the actuators.
pub fn room_temperature(elapsed_hours: f64, duration_hours: f64) -> f64 {
    68.0 + 4.0 * (4.0 * PI * elapsed_hours / duration_hours).sin()
}

/// A configured button press lands on the single tick closest to its hour.
pub fn fires(event_hour: f64, time_of_day: f64, step_hours: f64) -> bool {
    (time_of_day - event_hour).abs() < step_hours / 2.0
}
