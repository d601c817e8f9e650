use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One synthetic measurement of inbound/outbound bandwidth at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficSample {
    pub inbound: u32,
    pub outbound: u32,
    pub timestamp: SystemTime,
}

impl TrafficSample {
    pub fn total_volume(&self) -> u32 {
        self.inbound + self.outbound
    }
}

pub struct TrafficGenerator {
    sample_interval: Duration,
    max_volume: u32,
}

impl TrafficGenerator {
    pub fn new() -> Self {
        Self {
            sample_interval: Duration::from_millis(2000),
            max_volume: 30,
        }
    }

    pub fn with_config(sample_interval_ms: u64, max_volume: u32) -> Self {
        Self {
            sample_interval: Duration::from_millis(sample_interval_ms),
            max_volume,
        }
    }

    /// Generate `count` samples spaced at the sample interval, ending at now.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<TrafficSample> {
        self.generate_at(count, SystemTime::now(), rng)
    }

    /// Generate `count` samples ending at an explicit instant. Volumes are
    /// drawn independently and uniformly from [0, max_volume).
    pub fn generate_at<R: Rng>(
        &self,
        count: usize,
        now: SystemTime,
        rng: &mut R,
    ) -> Vec<TrafficSample> {
        (0..count)
            .map(|i| {
                let offset = self.sample_interval * (count - 1 - i) as u32;
                TrafficSample {
                    inbound: rng.gen_range(0..self.max_volume),
                    outbound: rng.gen_range(0..self.max_volume),
                    timestamp: now - offset,
                }
            })
            .collect()
    }
}

impl Default for TrafficGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_count_and_spacing() {
        let generator = TrafficGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

        let samples = generator.generate_at(30, now, &mut rng);
        assert_eq!(samples.len(), 30);
        assert_eq!(samples.last().map(|s| s.timestamp), Some(now));

        for pair in samples.windows(2) {
            let gap = pair[1]
                .timestamp
                .duration_since(pair[0].timestamp)
                .expect("timestamps must be strictly increasing");
            assert_eq!(gap, Duration::from_millis(2000));
        }
    }

    #[test]
    fn test_generate_zero_count_is_empty() {
        let generator = TrafficGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generator.generate(0, &mut rng).is_empty());
    }

    #[test]
    fn test_volume_bounds() {
        let generator = TrafficGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let now = SystemTime::now();

        for sample in generator.generate_at(500, now, &mut rng) {
            assert!(sample.inbound < 30);
            assert!(sample.outbound < 30);
        }
    }

    #[test]
    fn test_single_sample_at_now() {
        let generator = TrafficGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(500);

        let samples = generator.generate_at(1, now, &mut rng);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp, now);
        assert!(samples[0].inbound < 30 && samples[0].outbound < 30);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let generator = TrafficGenerator::new();
        let now = SystemTime::now();

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        assert_eq!(
            generator.generate_at(10, now, &mut rng_a),
            generator.generate_at(10, now, &mut rng_b)
        );
    }
}
