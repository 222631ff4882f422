use crate::config::ControllerConfig;
use crate::error::Error;
use crate::schedule::{ScheduleState, ScheduleTable};
use crate::types::{ControlMode, OperatingState, TickInput, TickOutput};

/// The thermostat controller: a schedule resolver feeding a hysteresis state
/// machine, advanced once per driver tick.
///
/// The whole state lives in this one value. A tick either completes and
/// returns the output snapshot, or returns an error with nothing mutated.
#[derive(Debug, Clone)]
pub struct Controller {
    table: ScheduleTable,
    deadband: f64,
    mode: ControlMode,
    state: OperatingState,
    schedule: ScheduleState,
    room_temperature: f64,
}

impl Controller {
    pub fn new(config: ControllerConfig) -> Result<Self, Error> {
        if !config.deadband.is_finite() || config.deadband < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "deadband {} must be finite and >= 0",
                config.deadband
            )));
        }

        let table = ScheduleTable::new(config.periods)?;
        let schedule = table.initial_state();

        Ok(Self {
            table,
            deadband: config.deadband,
            mode: config.initial_mode,
            state: OperatingState::base_for(config.initial_mode),
            schedule,
            room_temperature: config.initial_room_temperature,
        })
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn state(&self) -> OperatingState {
        self.state
    }

    pub fn schedule(&self) -> &ScheduleState {
        &self.schedule
    }

    pub fn room_temperature(&self) -> f64 {
        self.room_temperature
    }

    pub fn heating_active(&self) -> bool {
        self.state == OperatingState::ActiveHeating
    }

    pub fn cooling_active(&self) -> bool {
        self.state == OperatingState::ActiveCooling
    }

    /// Advance one tick: schedule resolution first, then the state machine,
    /// never interleaved. The resolver validates the clock before anything
    /// mutates, so a failed tick leaves the controller as it was.
    pub fn tick(&mut self, input: &TickInput) -> Result<TickOutput, Error> {
        self.table.resolve(
            &mut self.schedule,
            input.time_of_day,
            input.override_up,
            input.override_down,
        )?;

        self.room_temperature = input.room_temperature;
        self.step(input.mode);

        Ok(self.output())
    }

    pub fn output(&self) -> TickOutput {
        TickOutput {
            schedule: self.schedule.active_period.clone(),
            state: self.state.as_str(),
            target_temperature: self.schedule.target_temperature,
            room_temperature: self.room_temperature,
            heating_active: self.heating_active(),
            cooling_active: self.cooling_active(),
            held: self.schedule.held,
        }
    }

    fn step(&mut self, commanded: ControlMode) {
        if commanded != self.mode {
            // A direct Heating<->Cooling switch re-evaluates under the new
            // mode's rules; no actuator state carries across.
            self.mode = commanded;
            self.state = OperatingState::base_for(commanded);
        }

        let target = f64::from(self.schedule.target_temperature);
        let lower = target - self.deadband;
        let upper = target + self.deadband;

        match self.mode {
            ControlMode::Off => self.state = OperatingState::Idle,
            ControlMode::Heating => {
                if self.room_temperature < lower {
                    self.state = OperatingState::ActiveHeating;
                } else if self.room_temperature > upper {
                    self.state = OperatingState::Heating;
                }
                // Inside the band the previous state stands.
            }
            ControlMode::Cooling => {
                if self.room_temperature > upper {
                    self.state = OperatingState::ActiveCooling;
                } else if self.room_temperature < lower {
                    self.state = OperatingState::Cooling;
                }
            }
        }
    }
}
