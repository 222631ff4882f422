pub mod config;
pub mod controller;
pub mod error;
pub mod schedule;
pub mod types;

pub use config::ControllerConfig;
pub use controller::Controller;
pub use error::Error;
pub use schedule::{Period, ScheduleState, ScheduleTable, BOUNDARY_TOLERANCE_HOURS, HOLD_PERIOD};
pub use types::{ControlMode, OperatingState, TickInput, TickOutput};
