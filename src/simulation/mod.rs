pub mod traffic;
pub mod logs;
pub mod flows;
pub mod metrics;

pub use traffic::{TrafficGenerator, TrafficSample};
pub use logs::{Classification, LogEntry, LogSynthesizer, MaliciousKind, Protocol};
pub use flows::{FlowGenerator, FlowPair};
pub use metrics::ResourceMetric;
