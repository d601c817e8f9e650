use crate::simulation::traffic::TrafficSample;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    Tcp,
    Udp,
    Http,
    Https,
    Dns,
    Ftp,
    Ssh,
}

pub const PROTOCOLS: [Protocol; 7] = [
    Protocol::Tcp,
    Protocol::Udp,
    Protocol::Http,
    Protocol::Https,
    Protocol::Dns,
    Protocol::Ftp,
    Protocol::Ssh,
];

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
            Protocol::Http => "HTTP",
            Protocol::Https => "HTTPS",
            Protocol::Dns => "DNS",
            Protocol::Ftp => "FTP",
            Protocol::Ssh => "SSH",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaliciousKind {
    DdosAttack,
    PortScan,
    BruteForce,
    SqlInjection,
    CrossSiteScripting,
    MalwareC2,
    Phishing,
    DataExfiltration,
    Ransomware,
}

pub const MALICIOUS_KINDS: [MaliciousKind; 9] = [
    MaliciousKind::DdosAttack,
    MaliciousKind::PortScan,
    MaliciousKind::BruteForce,
    MaliciousKind::SqlInjection,
    MaliciousKind::CrossSiteScripting,
    MaliciousKind::MalwareC2,
    MaliciousKind::Phishing,
    MaliciousKind::DataExfiltration,
    MaliciousKind::Ransomware,
];

impl fmt::Display for MaliciousKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaliciousKind::DdosAttack => "DDoS Attack",
            MaliciousKind::PortScan => "Port Scan",
            MaliciousKind::BruteForce => "Brute Force",
            MaliciousKind::SqlInjection => "SQL Injection",
            MaliciousKind::CrossSiteScripting => "Cross-Site Scripting",
            MaliciousKind::MalwareC2 => "Malware C2",
            MaliciousKind::Phishing => "Phishing",
            MaliciousKind::DataExfiltration => "Data Exfiltration",
            MaliciousKind::Ransomware => "Ransomware",
        };
        write!(f, "{}", name)
    }
}

/// Assigned category of a log entry. A closed variant rather than a
/// free-form string, so consumers match instead of prefix-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Normal,
    Malicious(MaliciousKind),
    Novel,
}

impl Classification {
    pub fn is_malicious(&self) -> bool {
        matches!(self, Classification::Malicious(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Normal => write!(f, "Normal"),
            Classification::Malicious(kind) => write!(f, "Malicious: {}", kind),
            Classification::Novel => write!(f, "Novel Pattern"),
        }
    }
}

/// One synthetic network event derived from a traffic sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: SystemTime,
    pub src_addr: Ipv4Addr,
    pub src_port: u16,
    pub dst_addr: Ipv4Addr,
    pub dst_port: u16,
    pub protocol: Protocol,
    pub classification: Classification,
    pub volume: u32,
}

pub struct LogSynthesizer {
    normal_weight: f64,
    malicious_weight: f64,
}

impl LogSynthesizer {
    pub fn new() -> Self {
        Self {
            normal_weight: 0.6,
            malicious_weight: 0.3,
        }
    }

    /// Weights are cumulative thresholds; novel takes the remainder up to 1.
    pub fn with_weights(normal_weight: f64, malicious_weight: f64) -> Self {
        Self {
            normal_weight,
            malicious_weight,
        }
    }

    /// Expand each sample into `inbound + outbound` log entries and prepend
    /// them to `history` (newest first). The caller owns truncation to the
    /// retention bound.
    pub fn synthesize<R: Rng>(
        &self,
        samples: &[TrafficSample],
        mut history: Vec<LogEntry>,
        rng: &mut R,
    ) -> Vec<LogEntry> {
        let mut merged = Vec::new();
        for sample in samples {
            for _ in 0..sample.total_volume() {
                merged.push(self.synthesize_entry(sample.timestamp, rng));
            }
        }
        merged.append(&mut history);
        merged
    }

    pub fn classify<R: Rng>(&self, rng: &mut R) -> Classification {
        let roll: f64 = rng.gen();
        if roll < self.normal_weight {
            Classification::Normal
        } else if roll < self.normal_weight + self.malicious_weight {
            let kind = MALICIOUS_KINDS[rng.gen_range(0..MALICIOUS_KINDS.len())];
            Classification::Malicious(kind)
        } else {
            Classification::Novel
        }
    }

    fn synthesize_entry<R: Rng>(&self, timestamp: SystemTime, rng: &mut R) -> LogEntry {
        LogEntry {
            timestamp,
            src_addr: Ipv4Addr::from(rng.gen::<[u8; 4]>()),
            src_port: rng.gen::<u16>(),
            dst_addr: Ipv4Addr::from(rng.gen::<[u8; 4]>()),
            dst_port: rng.gen::<u16>(),
            protocol: PROTOCOLS[rng.gen_range(0..PROTOCOLS.len())],
            classification: self.classify(rng),
            volume: rng.gen_range(0..1000),
        }
    }
}

impl Default for LogSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::SystemTime;

    fn sample(inbound: u32, outbound: u32) -> TrafficSample {
        TrafficSample {
            inbound,
            outbound,
            timestamp: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_entry_count_matches_sample_volume() {
        let synthesizer = LogSynthesizer::new();
        let mut rng = StdRng::seed_from_u64(3);

        let merged = synthesizer.synthesize(&[sample(3, 2)], Vec::new(), &mut rng);
        assert_eq!(merged.len(), 5);
    }

    #[test]
    fn test_empty_samples_leave_history_unchanged() {
        let synthesizer = LogSynthesizer::new();
        let mut rng = StdRng::seed_from_u64(3);

        let history = synthesizer.synthesize(&[sample(1, 1)], Vec::new(), &mut rng);
        let unchanged = synthesizer.synthesize(&[], history.clone(), &mut rng);
        assert_eq!(unchanged, history);
    }

    #[test]
    fn test_new_entries_are_prepended() {
        let synthesizer = LogSynthesizer::new();
        let mut rng = StdRng::seed_from_u64(5);

        let old = synthesizer.synthesize(&[sample(1, 0)], Vec::new(), &mut rng);
        let oldest = old[0].clone();

        let merged = synthesizer.synthesize(&[sample(2, 1)], old, &mut rng);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.last(), Some(&oldest));
    }

    #[test]
    fn test_zero_volume_sample_yields_no_entries() {
        let synthesizer = LogSynthesizer::new();
        let mut rng = StdRng::seed_from_u64(11);

        let merged = synthesizer.synthesize(&[sample(0, 0)], Vec::new(), &mut rng);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_classification_distribution() {
        let synthesizer = LogSynthesizer::new();
        let mut rng = StdRng::seed_from_u64(2024);

        let mut normal = 0usize;
        let mut malicious = 0usize;
        let mut novel = 0usize;
        let draws = 100_000;

        for _ in 0..draws {
            match synthesizer.classify(&mut rng) {
                Classification::Normal => normal += 1,
                Classification::Malicious(_) => malicious += 1,
                Classification::Novel => novel += 1,
            }
        }

        let pct = |count: usize| count as f64 / draws as f64;
        assert!((pct(normal) - 0.6).abs() < 0.02);
        assert!((pct(malicious) - 0.3).abs() < 0.02);
        assert!((pct(novel) - 0.1).abs() < 0.02);
    }

    #[test]
    fn test_entry_fields_within_range() {
        let synthesizer = LogSynthesizer::new();
        let mut rng = StdRng::seed_from_u64(17);

        let merged = synthesizer.synthesize(&[sample(29, 29)], Vec::new(), &mut rng);
        for entry in &merged {
            assert!(entry.volume < 1000);
            assert!(PROTOCOLS.contains(&entry.protocol));
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(PROTOCOLS.len(), 7);
        assert_eq!(MALICIOUS_KINDS.len(), 9);
    }
}
