use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ControlMode {
    Off,
    Heating,
    Cooling,
}

impl ControlMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Heating => "HEATING",
            Self::Cooling => "COOLING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingState {
    Idle,
    Heating,
    ActiveHeating,
    Cooling,
    ActiveCooling,
}

impl OperatingState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Heating => "HEATING",
            Self::ActiveHeating => "ACTIVE_HEATING",
            Self::Cooling => "COOLING",
            Self::ActiveCooling => "ACTIVE_COOLING",
        }
    }

    /// The de-energized state a freshly commanded mode starts from.
    pub fn base_for(mode: ControlMode) -> Self {
        match mode {
            ControlMode::Off => Self::Idle,
            ControlMode::Heating => Self::Heating,
            ControlMode::Cooling => Self::Cooling,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    #[serde(rename = "timeOfDay")]
    pub time_of_day: f64,
    pub mode: ControlMode,
    #[serde(rename = "overrideUp")]
    pub override_up: bool,
    #[serde(rename = "overrideDown")]
    pub override_down: bool,
    #[serde(rename = "roomTemp")]
    pub room_temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickOutput {
    pub schedule: String,
    pub state: &'static str,
    #[serde(rename = "targetTemp")]
    pub target_temperature: i32,
    #[serde(rename = "roomTemp")]
    pub room_temperature: f64,
    #[serde(rename = "heatingActive")]
    pub heating_active: bool,
    #[serde(rename = "coolingActive")]
    pub cooling_active: bool,
    pub held: bool,
}
