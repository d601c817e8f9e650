use rand::Rng;
use serde::Serialize;

/// A gauge metric that drifts by a bounded random step each cycle. Purely
/// cosmetic; not derived from the traffic data.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceMetric {
    pub name: &'static str,
    pub current: f64,
    pub max: f64,
    pub unit: &'static str,
    step_size: f64,
}

impl ResourceMetric {
    pub fn new(name: &'static str, current: f64, max: f64, unit: &'static str, step_size: f64) -> Self {
        Self {
            name,
            current,
            max,
            unit,
            step_size,
        }
    }

    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let delta = rng.gen_range(-self.step_size..=self.step_size);
        self.current = (self.current + delta).clamp(0.0, self.max);
    }

    pub fn ratio(&self) -> f64 {
        if self.max > 0.0 {
            (self.current / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// The fixed metric set shown on the dashboard gauges.
pub fn default_metrics() -> Vec<ResourceMetric> {
    vec![
        ResourceMetric::new("CPU", 42.0, 100.0, "%", 6.0),
        ResourceMetric::new("Memory", 58.0, 100.0, "%", 4.0),
        ResourceMetric::new("Disk I/O", 120.0, 500.0, "MB/s", 40.0),
        ResourceMetric::new("Network Load", 35.0, 100.0, "%", 8.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_walk_stays_clamped() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut metric = ResourceMetric::new("CPU", 99.0, 100.0, "%", 50.0);

        for _ in 0..1000 {
            metric.step(&mut rng);
            assert!(metric.current >= 0.0);
            assert!(metric.current <= metric.max);
        }
    }

    #[test]
    fn test_ratio_bounds() {
        let metric = ResourceMetric::new("Memory", 50.0, 100.0, "%", 1.0);
        assert_eq!(metric.ratio(), 0.5);

        let broken = ResourceMetric::new("None", 10.0, 0.0, "%", 1.0);
        assert_eq!(broken.ratio(), 0.0);
    }

    #[test]
    fn test_default_metric_set() {
        let metrics = default_metrics();
        assert!(!metrics.is_empty());
        for metric in &metrics {
            assert!(metric.current <= metric.max);
        }
    }
}
