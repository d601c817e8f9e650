// Library exports for soc-dashboard
pub mod config;
pub mod scheduler;
pub mod simulation;
pub mod ui;
pub mod utils;
pub mod visualization;

pub use config::settings;
pub use scheduler::{Scheduler, TaskId};
pub use simulation::{flows, logs, metrics, traffic};
pub use ui::app;
pub use utils::formatting;
pub use visualization::{charts, layouts, widgets};

// Error types
pub use anyhow::{Error, Result};
