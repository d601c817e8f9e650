use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::scheduler::{Scheduler, TaskId};
use crate::simulation::flows::{FlowGenerator, FlowPair};
use crate::simulation::logs::{LogEntry, LogSynthesizer};
use crate::simulation::metrics::{default_metrics, ResourceMetric};
use crate::simulation::traffic::{TrafficGenerator, TrafficSample};
use crate::visualization::{
    BandwidthChart, ClassificationChart, DashboardLayout, DashboardStats, FlowPanel, FlowsLayout,
    LogTable, LogsLayout, PortStatusPanel, ResourceGauges, StatsPanel, SystemStatusPanel,
};

pub struct App {
    pub should_quit: bool,
    pub selected_tab: usize,
    pub traffic_window: VecDeque<TrafficSample>,
    pub log_history: Vec<LogEntry>,
    pub flows: Vec<FlowPair>,
    pub metrics: Vec<ResourceMetric>,
    pub status_line: Option<String>,
    config: Config,
    rng: StdRng,
    traffic_generator: TrafficGenerator,
    synthesizer: LogSynthesizer,
    flow_generator: FlowGenerator,
    scheduler: Scheduler,
    traffic_task: TaskId,
    log_task: TaskId,
    flow_task: TaskId,
    metric_task: TaskId,
    last_tick: Instant,
    started_at: Instant,
    bandwidth_chart: BandwidthChart,
    classification_chart: ClassificationChart,
    log_table: LogTable,
    flow_panel: FlowPanel,
    stats_panel: StatsPanel,
}

impl App {
    pub fn new(config: Config, seed: u64) -> App {
        let sim = &config.simulation;
        let mut rng = StdRng::seed_from_u64(seed);

        let traffic_generator =
            TrafficGenerator::with_config(sim.sample_interval_ms, sim.max_sample_volume);
        let synthesizer = LogSynthesizer::with_weights(sim.weights.normal, sim.weights.malicious);
        let flow_generator = FlowGenerator::with_count(sim.flow_count);

        let mut scheduler = Scheduler::new();
        let traffic_task =
            scheduler.register("traffic", Duration::from_millis(sim.sample_interval_ms));
        let log_task = scheduler.register("logs", Duration::from_millis(sim.log_interval_ms));
        let flow_task = scheduler.register("flows", Duration::from_millis(sim.flow_interval_ms));
        let metric_task =
            scheduler.register("metrics", Duration::from_millis(sim.metric_interval_ms));

        // Prime the display so the first frame is not empty
        let traffic_window: VecDeque<TrafficSample> =
            traffic_generator.generate(sim.sample_window, &mut rng).into();
        let flows = flow_generator.generate(&mut rng);

        let selected_tab = match config.ui.default_view.as_str() {
            "logs" => 1,
            "flows" => 2,
            _ => 0,
        };

        let sample_window = sim.sample_window;
        App {
            should_quit: false,
            selected_tab,
            traffic_window,
            log_history: Vec::new(),
            flows,
            metrics: default_metrics(),
            status_line: None,
            config,
            rng,
            traffic_generator,
            synthesizer,
            flow_generator,
            scheduler,
            traffic_task,
            log_task,
            flow_task,
            metric_task,
            last_tick: Instant::now(),
            started_at: Instant::now(),
            bandwidth_chart: BandwidthChart::new(sample_window),
            classification_chart: ClassificationChart::new(),
            log_table: LogTable::new(),
            flow_panel: FlowPanel::new(),
            stats_panel: StatsPanel::new(),
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let poll_timeout = Duration::from_millis(self.config.ui.refresh_rate_ms);

        loop {
            // Fire every periodic task that came due since the last pass
            let delta = self.last_tick.elapsed();
            self.last_tick = Instant::now();
            for task in self.scheduler.advance(delta) {
                self.dispatch(task);
            }

            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code);
                }
            }
        }

        // Cleanup
        self.scheduler.clear();
        disable_raw_mode()?;
        io::stdout().execute(LeaveAlternateScreen)?;
        io::stdout().execute(DisableMouseCapture)?;
        Ok(())
    }

    fn dispatch(&mut self, task: TaskId) {
        if task == self.traffic_task {
            self.on_traffic_tick();
        } else if task == self.log_task {
            self.on_log_tick();
        } else if task == self.flow_task {
            self.on_flow_tick();
        } else if task == self.metric_task {
            self.on_metric_tick();
        }
    }

    /// Append one fresh sample and evict beyond the window bound.
    pub fn on_traffic_tick(&mut self) {
        if let Some(sample) = self.traffic_generator.generate(1, &mut self.rng).pop() {
            log::debug!(
                "traffic tick: inbound={} outbound={}",
                sample.inbound,
                sample.outbound
            );
            self.traffic_window.push_back(sample);
        }
        while self.traffic_window.len() > self.config.simulation.sample_window {
            self.traffic_window.pop_front();
        }
    }

    /// Synthesize logs from only the most recent sample, then truncate the
    /// history to its retention bound. A missing sample is skipped.
    pub fn on_log_tick(&mut self) {
        let latest = match self.traffic_window.back() {
            Some(sample) => *sample,
            None => return,
        };

        let history = std::mem::take(&mut self.log_history);
        let mut merged = self.synthesizer.synthesize(&[latest], history, &mut self.rng);
        merged.truncate(self.config.simulation.log_history);
        log::debug!("log tick: history={}", merged.len());
        self.log_history = merged;
    }

    /// Replace the flow set wholesale.
    pub fn on_flow_tick(&mut self) {
        self.flows = self.flow_generator.generate(&mut self.rng);
    }

    pub fn on_metric_tick(&mut self) {
        for metric in &mut self.metrics {
            metric.step(&mut self.rng);
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.selected_tab = (self.selected_tab + 1) % 3,
            KeyCode::Char('1') => self.selected_tab = 0,
            KeyCode::Char('2') => self.selected_tab = 1,
            KeyCode::Char('3') => self.selected_tab = 2,
            KeyCode::Down => self.log_table.next(self.log_history.len()),
            KeyCode::Up => self.log_table.previous(self.log_history.len()),
            KeyCode::Char('e') => match self.export_logs() {
                Ok(path) => self.status_line = Some(format!("Exported log history to {}", path)),
                Err(e) => self.status_line = Some(format!("Export failed: {}", e)),
            },
            _ => {}
        }
    }

    /// Dump the current log history as pretty-printed JSON.
    pub fn export_logs(&self) -> crate::Result<String> {
        let path = "soc-logs.json".to_string();
        let json = serde_json::to_string_pretty(&self.log_history)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    fn dashboard_stats(&self) -> DashboardStats {
        let malicious_logs = self
            .log_history
            .iter()
            .filter(|entry| entry.classification.is_malicious())
            .count();
        let novel_logs = self
            .log_history
            .iter()
            .filter(|entry| entry.classification == crate::simulation::logs::Classification::Novel)
            .count();
        let (current_inbound, current_outbound) = self
            .traffic_window
            .back()
            .map(|sample| (sample.inbound, sample.outbound))
            .unwrap_or((0, 0));

        DashboardStats {
            total_logs: self.log_history.len(),
            malicious_logs,
            novel_logs,
            window_len: self.traffic_window.len(),
            current_inbound,
            current_outbound,
            flow_count: self.flows.len(),
            uptime: self.started_at.elapsed(),
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        self.bandwidth_chart.update_samples(&self.traffic_window);
        self.classification_chart.update_data(&self.log_history);
        self.flow_panel.update_flows(&self.flows);
        self.stats_panel.update_stats(self.dashboard_stats());

        match self.selected_tab {
            1 => self.draw_logs(f),
            2 => self.draw_flows(f),
            _ => self.draw_dashboard(f),
        }
    }

    fn draw_dashboard(&mut self, f: &mut Frame) {
        let chunks = DashboardLayout::create_layout(f.size());

        self.draw_header(f, chunks[0]);
        self.bandwidth_chart.render(chunks[1], f);
        self.classification_chart.render(chunks[2], f);
        ResourceGauges::render(&self.metrics, chunks[3], f);
        self.stats_panel.render(chunks[4], f);
        SystemStatusPanel::render(self.started_at.elapsed(), chunks[5], f);
        self.draw_footer(f, chunks[6]);
    }

    fn draw_logs(&mut self, f: &mut Frame) {
        let chunks = LogsLayout::create_layout(f.size());

        self.draw_header(f, chunks[0]);
        self.log_table.render(&self.log_history, chunks[1], f);
        self.draw_footer(f, chunks[2]);
    }

    fn draw_flows(&mut self, f: &mut Frame) {
        let chunks = FlowsLayout::create_layout(f.size());

        self.draw_header(f, chunks[0]);
        self.flow_panel.render(chunks[1], f);
        PortStatusPanel::render(chunks[2], f);
        self.draw_footer(f, chunks[3]);
    }

    fn draw_header(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let tabs = ["Dashboard", "Logs", "Flows"];
        let selected_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let normal_style = Style::default().fg(Color::White);

        let tab_titles: Vec<Line> = tabs
            .iter()
            .enumerate()
            .map(|(i, &tab)| {
                let style = if i == self.selected_tab {
                    selected_style
                } else {
                    normal_style
                };
                Line::from(Span::styled(format!(" {} ", tab), style))
            })
            .collect();

        let header = Paragraph::new(tab_titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("SOC Dashboard"),
            )
            .alignment(Alignment::Center);

        f.render_widget(header, area);
    }

    fn draw_footer(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let text = match &self.status_line {
            Some(status) => status.clone(),
            None => {
                "Press 'q' to quit | Tab/1-3 to switch tabs | Up/Down to scroll logs | 'e' to export"
                    .to_string()
            }
        };

        let footer = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);

        f.render_widget(footer, area);
    }
}
