use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table},
};
use std::time::Duration;

use crate::simulation::flows::FlowPair;
use crate::simulation::logs::{Classification, LogEntry};
use crate::simulation::metrics::ResourceMetric;
use crate::utils::formatting::{format_duration, format_timestamp};

/// Scrollable table over the log history (newest first).
pub struct LogTable {
    selected: usize,
    scroll_offset: usize,
}

impl LogTable {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_offset: 0,
        }
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn render(&mut self, entries: &[LogEntry], area: Rect, frame: &mut Frame) {
        let header_cells = ["Time", "Source", "Destination", "Proto", "Classification", "Vol"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        if self.selected >= entries.len() && !entries.is_empty() {
            self.selected = entries.len() - 1;
        }

        let visible_height = area.height.saturating_sub(4) as usize;

        // Keep the selection inside the visible slice
        if self.selected >= self.scroll_offset + visible_height.max(1) {
            self.scroll_offset = self.selected.saturating_sub(visible_height.saturating_sub(1));
        } else if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }

        let rows = entries
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height.max(1))
            .enumerate()
            .map(|(i, entry)| {
                let classification_color = match entry.classification {
                    Classification::Normal => Color::Green,
                    Classification::Malicious(_) => Color::Red,
                    Classification::Novel => Color::Yellow,
                };

                let style = if self.scroll_offset + i == self.selected {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else {
                    Style::default().fg(classification_color)
                };

                Row::new(vec![
                    Cell::from(format_timestamp(entry.timestamp)),
                    Cell::from(format!("{}:{}", entry.src_addr, entry.src_port)),
                    Cell::from(format!("{}:{}", entry.dst_addr, entry.dst_port)),
                    Cell::from(entry.protocol.to_string()),
                    Cell::from(entry.classification.to_string()),
                    Cell::from(entry.volume.to_string()),
                ])
                .style(style)
            });

        let widths = [
            Constraint::Length(9),  // Time
            Constraint::Length(21), // Source
            Constraint::Length(21), // Destination
            Constraint::Length(6),  // Protocol
            Constraint::Min(22),    // Classification
            Constraint::Length(5),  // Volume
        ];

        let table = Table::new(rows)
            .widths(&widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Network Log ({} entries)", entries.len())),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_widget(table, area);
    }
}

impl Default for LogTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Origin → destination country pairs for the flow panel.
pub struct FlowPanel {
    pairs: Vec<FlowPair>,
}

impl FlowPanel {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn update_flows(&mut self, flows: &[FlowPair]) {
        self.pairs = flows.to_vec();
    }

    pub fn render(&self, area: Rect, frame: &mut Frame) {
        if self.pairs.is_empty() {
            let block = Block::default()
                .title("Traffic Flows")
                .borders(Borders::ALL);
            frame.render_widget(block, area);
            return;
        }

        let items: Vec<ListItem> = self
            .pairs
            .iter()
            .take(area.height.saturating_sub(2) as usize)
            .enumerate()
            .map(|(i, pair)| {
                let color = if pair.origin == pair.destination {
                    Color::DarkGray
                } else {
                    Color::Cyan
                };
                let text = format!("{:2} {} -> {}", i + 1, pair.origin, pair.destination);
                ListItem::new(text).style(Style::default().fg(color))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Traffic Flows ({})", self.pairs.len()))
                    .borders(Borders::ALL),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(list, area);
    }
}

impl Default for FlowPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// One gauge per resource metric, stacked vertically.
pub struct ResourceGauges;

impl ResourceGauges {
    pub fn render(metrics: &[ResourceMetric], area: Rect, frame: &mut Frame) {
        if metrics.is_empty() {
            let block = Block::default().title("Resources").borders(Borders::ALL);
            frame.render_widget(block, area);
            return;
        }

        let constraints: Vec<Constraint> = metrics
            .iter()
            .map(|_| Constraint::Ratio(1, metrics.len() as u32))
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (metric, chunk) in metrics.iter().zip(chunks.iter()) {
            let percentage = (metric.ratio() * 100.0) as u16;
            let gauge_color = if metric.ratio() > 0.85 {
                Color::Red
            } else if metric.ratio() > 0.6 {
                Color::Yellow
            } else {
                Color::Cyan
            };

            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .title(format!(
                            "{} ({:.0} {})",
                            metric.name, metric.current, metric.unit
                        ))
                        .borders(Borders::ALL),
                )
                .gauge_style(Style::default().fg(gauge_color))
                .percent(percentage);

            frame.render_widget(gauge, *chunk);
        }
    }
}

#[derive(Clone, Default)]
pub struct DashboardStats {
    pub total_logs: usize,
    pub malicious_logs: usize,
    pub novel_logs: usize,
    pub window_len: usize,
    pub current_inbound: u32,
    pub current_outbound: u32,
    pub flow_count: usize,
    pub uptime: Duration,
}

pub struct StatsPanel {
    stats: DashboardStats,
}

impl StatsPanel {
    pub fn new() -> Self {
        Self {
            stats: DashboardStats::default(),
        }
    }

    pub fn update_stats(&mut self, stats: DashboardStats) {
        self.stats = stats;
    }

    pub fn render(&self, area: Rect, frame: &mut Frame) {
        let uptime_str = format_duration(self.stats.uptime.as_secs());

        let content = format!(
            "Log Entries: {}\n\
             Malicious: {}\n\
             Novel: {}\n\
             Sample Window: {}\n\
             Inbound Now: {}\n\
             Outbound Now: {}\n\
             Active Flows: {}\n\
             Uptime: {}",
            self.stats.total_logs,
            self.stats.malicious_logs,
            self.stats.novel_logs,
            self.stats.window_len,
            self.stats.current_inbound,
            self.stats.current_outbound,
            self.stats.flow_count,
            uptime_str
        );

        let paragraph = Paragraph::new(content)
            .block(Block::default().title("Statistics").borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .wrap(ratatui::widgets::Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self::new()
    }
}

const SYSTEM_STATUS: &[(&str, &str)] = &[
    ("Core Systems", "ONLINE"),
    ("Threat Intel Feed", "SYNCED"),
    ("Sensor Grid", "NOMINAL"),
    ("Archive Node", "STANDBY"),
];

/// Static system-health lines plus uptime.
pub struct SystemStatusPanel;

impl SystemStatusPanel {
    pub fn render(uptime: Duration, area: Rect, frame: &mut Frame) {
        let mut lines: Vec<Line> = SYSTEM_STATUS
            .iter()
            .map(|(name, status)| {
                let color = match *status {
                    "ONLINE" | "NOMINAL" | "SYNCED" => Color::Green,
                    "STANDBY" => Color::Yellow,
                    _ => Color::Red,
                };
                Line::from(vec![
                    Span::raw(format!("{:18}", name)),
                    Span::styled(*status, Style::default().fg(color)),
                ])
            })
            .collect();
        lines.push(Line::from(format!(
            "{:18}{}",
            "Uptime",
            format_duration(uptime.as_secs())
        )));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("System Status").borders(Borders::ALL));

        frame.render_widget(paragraph, area);
    }
}

const PORT_STATUS: &[(u16, &str, &str)] = &[
    (21, "FTP", "filtered"),
    (22, "SSH", "open"),
    (53, "DNS", "open"),
    (80, "HTTP", "open"),
    (443, "HTTPS", "open"),
    (3306, "MySQL", "closed"),
    (3389, "RDP", "filtered"),
    (8080, "HTTP-Alt", "closed"),
];

/// Static well-known port table.
pub struct PortStatusPanel;

impl PortStatusPanel {
    pub fn render(area: Rect, frame: &mut Frame) {
        let header = Row::new(vec!["Port", "Service", "Status"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = PORT_STATUS
            .iter()
            .map(|(port, service, status)| {
                let color = match *status {
                    "open" => Color::Green,
                    "filtered" => Color::Yellow,
                    _ => Color::DarkGray,
                };
                Row::new(vec![
                    Cell::from(port.to_string()),
                    Cell::from(*service),
                    Cell::from(*status).style(Style::default().fg(color)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
        ];

        let table = Table::new(rows)
            .widths(&widths)
            .header(header)
            .block(Block::default().title("Port Status").borders(Borders::ALL));

        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_table_creation() {
        let table = LogTable::new();
        assert_eq!(table.selected, 0);
        assert_eq!(table.scroll_offset, 0);
    }

    #[test]
    fn test_log_table_navigation_wraps() {
        let mut table = LogTable::new();
        table.next(3);
        table.next(3);
        assert_eq!(table.selected, 2);
        table.next(3);
        assert_eq!(table.selected, 0);
        table.previous(3);
        assert_eq!(table.selected, 2);
    }

    #[test]
    fn test_log_table_navigation_empty() {
        let mut table = LogTable::new();
        table.next(0);
        table.previous(0);
        assert_eq!(table.selected, 0);
    }

    #[test]
    fn test_flow_panel_update() {
        let mut panel = FlowPanel::new();
        panel.update_flows(&[FlowPair {
            origin: "US",
            destination: "JP",
        }]);
        assert_eq!(panel.pairs.len(), 1);
    }

    #[test]
    fn test_static_panels_have_rows() {
        assert!(!SYSTEM_STATUS.is_empty());
        assert!(!PORT_STATUS.is_empty());
    }
}
