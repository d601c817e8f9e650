use ratatui::prelude::*;

pub struct DashboardLayout;
pub struct LogsLayout;
pub struct FlowsLayout;

impl DashboardLayout {
    /// [header, bandwidth chart, classification chart, gauges, stats,
    ///  system status, footer]
    pub fn create_layout(area: Rect) -> Vec<Rect> {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(65), // Charts
                Constraint::Percentage(35), // Side panel
            ])
            .split(main_chunks[1]);

        let chart_sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(55), // Bandwidth chart
                Constraint::Percentage(45), // Classification chart
            ])
            .split(content_chunks[0]);

        let side_sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45), // Resource gauges
                Constraint::Percentage(33), // Stats panel
                Constraint::Percentage(22), // System status
            ])
            .split(content_chunks[1]);

        vec![
            main_chunks[0],
            chart_sections[0],
            chart_sections[1],
            side_sections[0],
            side_sections[1],
            side_sections[2],
            main_chunks[2],
        ]
    }
}

impl LogsLayout {
    /// [header, log table, footer]
    pub fn create_layout(area: Rect) -> Vec<Rect> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        vec![chunks[0], chunks[1], chunks[2]]
    }
}

impl FlowsLayout {
    /// [header, flow list, port status, footer]
    pub fn create_layout(area: Rect) -> Vec<Rect> {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[1]);

        vec![
            main_chunks[0],
            content_chunks[0],
            content_chunks[1],
            main_chunks[2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_layout() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = DashboardLayout::create_layout(area);
        assert_eq!(layout.len(), 7);
    }

    #[test]
    fn test_logs_layout() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = LogsLayout::create_layout(area);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn test_flows_layout() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = FlowsLayout::create_layout(area);
        assert_eq!(layout.len(), 4);
    }
}
