use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use thermostat_core::{Controller, ControllerConfig, TickInput};

use crate::signals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverrideDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideEvent {
    pub hour: f64,
    pub direction: OverrideDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(rename = "durationHours")]
    pub duration_hours: f64,
    #[serde(rename = "stepHours")]
    pub step_hours: f64,
    pub overrides: Vec<OverrideEvent>,
    pub controller: ControllerConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_hours: 24.0,
            step_hours: 0.1,
            overrides: vec![
                OverrideEvent {
                    hour: 5.3,
                    direction: OverrideDirection::Up,
                },
                OverrideEvent {
                    hour: 9.7,
                    direction: OverrideDirection::Up,
                },
                OverrideEvent {
                    hour: 13.6,
                    direction: OverrideDirection::Down,
                },
                OverrideEvent {
                    hour: 21.4,
                    direction: OverrideDirection::Down,
                },
            ],
            controller: ControllerConfig::default(),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    for (label, value) in [
        ("durationHours", config.duration_hours),
        ("stepHours", config.step_hours),
    ] {
        if !value.is_finite() || value <= 0.0 {
            anyhow::bail!("{label} must be a positive number, got {value}");
        }
    }

    let mut controller = Controller::new(config.controller.clone())
        .context("controller rejected the scenario configuration")?;

    let steps = (config.duration_hours / config.step_hours).round() as u64;
    info!(steps, "simulation starting");

    println!(
        "{:>5}  {:<8} {:<9} {:<15} {:>6} {:>7} {:>5} {:>5} {:>5}",
        "time", "mode", "schedule", "state", "target", "room", "heat", "cool", "hold"
    );

    for step in 0..steps {
        let input = build_input(&config, step);

        match controller.tick(&input) {
            Ok(out) => println!(
                "{:5.1}  {:<8} {:<9} {:<15} {:>6} {:>7.2} {:>5} {:>5} {:>5}",
                input.time_of_day,
                input.mode.as_str(),
                out.schedule,
                out.state,
                out.target_temperature,
                out.room_temperature,
                out.heating_active as u8,
                out.cooling_active as u8,
                out.held as u8,
            ),
            Err(err) => warn!(
                "tick at t={:.1} skipped: {err}",
                input.time_of_day
            ),
        }
    }

    info!("simulation finished");
    Ok(())
}

/// Synthesize the driver-side inputs for one tick of the run.
fn build_input(config: &SimulationConfig, step: u64) -> TickInput {
    let elapsed = step as f64 * config.step_hours;
    let time_of_day = elapsed % 24.0;

    let pressed = |direction: OverrideDirection| {
        config
            .overrides
            .iter()
            .filter(|event| event.direction == direction)
            .any(|event| signals::fires(event.hour, time_of_day, config.step_hours))
    };

    TickInput {
        time_of_day,
        mode: signals::mode_program(time_of_day),
        override_up: pressed(OverrideDirection::Up),
        override_down: pressed(OverrideDirection::Down),
        room_temperature: signals::room_temperature(elapsed, config.duration_hours),
    }
}

fn load_config() -> anyhow::Result<SimulationConfig> {
    let Some(path) = std::env::var_os("SIMULATOR_CONFIG") else {
        return Ok(SimulationConfig::default());
    };

    let path = PathBuf::from(path);
    let raw = std::fs::read(&path)
        .with_context(|| format!("failed to read scenario file {}", path.display()))?;
    serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse scenario file {}", path.display()))
}
