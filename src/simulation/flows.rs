use rand::Rng;
use serde::Serialize;

/// Fixed catalog for the decorative flow panel; both ends of a pair are
/// drawn from this set.
pub const COUNTRY_CODES: [&str; 10] = [
    "US", "CN", "RU", "DE", "GB", "BR", "IN", "JP", "FR", "KR",
];

/// A synthetic origin/destination country pair. Visualization only; no
/// relation to the traffic samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowPair {
    pub origin: &'static str,
    pub destination: &'static str,
}

pub struct FlowGenerator {
    flow_count: usize,
}

impl FlowGenerator {
    pub fn new() -> Self {
        Self { flow_count: 50 }
    }

    pub fn with_count(flow_count: usize) -> Self {
        Self { flow_count }
    }

    /// Regenerate the full flow set; the previous set is discarded wholesale
    /// by the caller.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<FlowPair> {
        (0..self.flow_count)
            .map(|_| FlowPair {
                origin: COUNTRY_CODES[rng.gen_range(0..COUNTRY_CODES.len())],
                destination: COUNTRY_CODES[rng.gen_range(0..COUNTRY_CODES.len())],
            })
            .collect()
    }
}

impl Default for FlowGenerator {
    fn default() -> Self {
        Self::new()
    }
}
