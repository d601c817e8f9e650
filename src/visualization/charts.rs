use ratatui::{
    prelude::*,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};
use std::collections::VecDeque;

use crate::simulation::logs::{Classification, LogEntry};
use crate::simulation::traffic::TrafficSample;

/// Inbound/outbound line chart over the traffic sample window.
pub struct BandwidthChart {
    inbound: Vec<(f64, f64)>,
    outbound: Vec<(f64, f64)>,
    window: usize,
}

impl BandwidthChart {
    pub fn new(window: usize) -> Self {
        Self {
            inbound: Vec::new(),
            outbound: Vec::new(),
            window,
        }
    }

    pub fn update_samples(&mut self, samples: &VecDeque<TrafficSample>) {
        self.inbound = samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, s.inbound as f64))
            .collect();
        self.outbound = samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, s.outbound as f64))
            .collect();
    }

    pub fn render(&self, area: Rect, frame: &mut Frame) {
        if self.inbound.is_empty() {
            let block = Block::default().title("Bandwidth").borders(Borders::ALL);
            frame.render_widget(block, area);
            return;
        }

        let datasets = vec![
            Dataset::default()
                .name("Inbound")
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(Color::Cyan))
                .graph_type(GraphType::Line)
                .data(&self.inbound),
            Dataset::default()
                .name("Outbound")
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(Color::Magenta))
                .graph_type(GraphType::Line)
                .data(&self.outbound),
        ];

        let max_x = (self.window.saturating_sub(1)).max(1) as f64;
        let max_volume = self
            .inbound
            .iter()
            .chain(self.outbound.iter())
            .map(|(_, v)| *v)
            .fold(0.0, f64::max)
            .max(1.0);

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title("Bandwidth (volume units)")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .x_axis(
                Axis::default()
                    .title("Samples")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, max_x])
                    .labels(vec!["oldest".into(), "now".into()]),
            )
            .y_axis(
                Axis::default()
                    .title("Volume")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, max_volume])
                    .labels(vec![
                        "0".into(),
                        format!("{:.0}", max_volume / 2.0).into(),
                        format!("{:.0}", max_volume).into(),
                    ]),
            );

        frame.render_widget(chart, area);
    }
}

/// Bar chart of log entry counts per classification bucket.
pub struct ClassificationChart {
    counts: Vec<(String, u64)>,
}

impl ClassificationChart {
    pub fn new() -> Self {
        Self { counts: Vec::new() }
    }

    pub fn update_data(&mut self, entries: &[LogEntry]) {
        let mut normal = 0u64;
        let mut malicious = 0u64;
        let mut novel = 0u64;

        for entry in entries {
            match entry.classification {
                Classification::Normal => normal += 1,
                Classification::Malicious(_) => malicious += 1,
                Classification::Novel => novel += 1,
            }
        }

        self.counts = vec![
            ("Normal".to_string(), normal),
            ("Malicious".to_string(), malicious),
            ("Novel".to_string(), novel),
        ];
    }

    pub fn render(&self, area: Rect, frame: &mut Frame) {
        use ratatui::widgets::BarChart;

        if self.counts.iter().all(|(_, count)| *count == 0) {
            let block = Block::default()
                .title("Classification Breakdown")
                .borders(Borders::ALL);
            frame.render_widget(block, area);
            return;
        }

        let data: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title("Classification Breakdown")
                    .borders(Borders::ALL),
            )
            .data(&data)
            .bar_width(9)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Yellow))
            .value_style(Style::default().fg(Color::Black).bg(Color::Yellow));

        frame.render_widget(chart, area);
    }
}

impl Default for ClassificationChart {
    fn default() -> Self {
        Self::new()
    }
}
