use serde::{Deserialize, Serialize};

use crate::schedule::Period;
use crate::types::ControlMode;

/// Construction-time controller configuration. Validated by
/// `Controller::new`; nothing here changes after start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerConfig {
    pub periods: Vec<Period>,
    pub deadband: f64,
    #[serde(rename = "initialRoomTemp")]
    pub initial_room_temperature: f64,
    #[serde(rename = "initialMode")]
    pub initial_mode: ControlMode,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            periods: vec![
                Period {
                    name: "Work".to_string(),
                    start_hour: 7.0,
                    end_hour: 16.0,
                    target_temperature: 68,
                },
                Period {
                    name: "Home".to_string(),
                    start_hour: 16.0,
                    end_hour: 22.0,
                    target_temperature: 72,
                },
                Period {
                    name: "Sleep".to_string(),
                    start_hour: 22.0,
                    end_hour: 7.0,
                    target_temperature: 65,
                },
            ],
            deadband: 1.0,
            initial_room_temperature: 72.0,
            initial_mode: ControlMode::Off,
        }
    }
}
