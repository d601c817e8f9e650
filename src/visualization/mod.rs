pub mod charts;
pub mod widgets;
pub mod layouts;

pub use charts::{BandwidthChart, ClassificationChart};
pub use widgets::{
    DashboardStats, FlowPanel, LogTable, PortStatusPanel, ResourceGauges, StatsPanel,
    SystemStatusPanel,
};
pub use layouts::{DashboardLayout, FlowsLayout, LogsLayout};
