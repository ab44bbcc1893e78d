mod cursor;
mod logging;
mod noise;

use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use nulai_config::{Config, GridConfig};
use nulai_core::{AccentTheme, NEUTRAL_TINT, PAGE_BACKGROUND, Vec2};
use nulai_fonts::{GLYPH_HEIGHT, build_title_art, title_art_width};
use nulai_grid::{
    AUDIENCES, OrbitParams, OrbitalGrid, Rotation, Ticker,
    render::{CellMetrics, Viewport, render_grid},
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::cursor::CursorFollower;
use crate::noise::NoiseField;

/// Orbiting audience grid for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Center title text
    #[arg(short, long)]
    title: Option<String>,

    /// Disable the grain background
    #[arg(long)]
    no_noise: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = logging::init() {
        log::info!("logging to {}", path.display());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(title) = cli.title {
        config.title = title;
    }
    if cli.no_noise {
        config.display.noise = false;
    }

    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = enable_pointer().and_then(|()| App::new(config).run(terminal));
    disable_pointer();
    ratatui::restore();
    result
}

fn enable_pointer() -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
    Ok(())
}

fn disable_pointer() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture, DisableFocusChange) {
        log::warn!("failed to release mouse capture: {e}");
    }
}

fn orbit_params(grid: &GridConfig) -> OrbitParams {
    OrbitParams {
        ring_count: grid.ring_count,
        base_radius: grid.base_radius,
        ring_spacing: grid.ring_spacing,
        stretch_x: grid.stretch_x,
        stretch_y: grid.stretch_y,
        exclusion: Vec2::new(grid.exclusion_x, grid.exclusion_y),
        glow_radius: grid.glow_radius,
        title_padding: Vec2::new(grid.title_padding_x, grid.title_padding_y),
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    accent: AccentTheme,
    /// `None` when the grid is disabled.
    grid: Option<OrbitalGrid>,
    rotation: Rotation,
    /// Frame clock. `None` while paused.
    ticker: Option<Ticker>,
    /// Time of the last tick applied to the rotation.
    last_tick: Option<Instant>,
    metrics: CellMetrics,
    /// Grid container from the last drawn frame.
    viewport: Option<Viewport>,
    /// Whether the title overlap pass has run.
    overlap_checked: bool,
    /// Whether the pointer is inside the grid container.
    pointer_inside: bool,
    noise: NoiseField,
    show_noise: bool,
    cursor: CursorFollower,
    title_art: Vec<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let grid = config.grid.enabled.then(|| {
            let params = orbit_params(&config.grid);
            match &config.grid.catalog {
                Some(catalog) => OrbitalGrid::new(catalog.as_slice(), params),
                None => OrbitalGrid::new(AUDIENCES, params),
            }
        });
        if grid.is_none() {
            log::info!("grid disabled");
        }

        // Capture system time as seed for the grain
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self {
            running: false,
            accent: config.accent,
            grid,
            rotation: Rotation::new(
                config.animation.rotation_step,
                config.animation.rotation_mode,
            ),
            ticker: None,
            last_tick: None,
            metrics: CellMetrics {
                width_px: config.display.cell_width_px,
                height_px: config.display.cell_height_px,
            },
            viewport: None,
            overlap_checked: false,
            pointer_inside: false,
            noise: NoiseField::new(seed, config.display.noise_density),
            show_noise: config.display.noise,
            cursor: CursorFollower::new(config.display.cursor_ease),
            title_art: build_title_art(&config.title),
            config,
        }
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.config.animation.frame_interval_ms)
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.ticker = Some(Ticker::start(self.frame_interval()));
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.on_frame();
        }
        Ok(())
    }

    /// Apply pending frame ticks. Ticks that piled up while drawing collapse
    /// into one displayed frame.
    fn on_frame(&mut self) {
        let Some(ticker) = &self.ticker else {
            return;
        };
        let Some(tick) = ticker.drain().pop() else {
            return;
        };

        let elapsed = self
            .last_tick
            .map(|t| tick.at.saturating_duration_since(t))
            .unwrap_or(ticker.interval());
        self.last_tick = Some(tick.at);

        self.rotation.advance(elapsed);
        if let Some(grid) = &mut self.grid {
            grid.reposition(&self.rotation);
        }
        self.cursor.update();
    }

    /// Cells covered by the title block and tagline, centered in `area`.
    fn title_rect(&self, area: Rect) -> Rect {
        let width = title_art_width(&self.config.title).max(self.config.tagline.chars().count());
        let height = if self.config.tagline.is_empty() {
            GLYPH_HEIGHT
        } else {
            GLYPH_HEIGHT + 2
        };
        let width = width.min(area.width as usize) as u16;
        let height = height.min(area.height as usize) as u16;
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [main, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        if self.show_noise {
            self.noise.render(frame, area);
        } else {
            let page = Block::new().style(Style::new().bg(PAGE_BACKGROUND.into()));
            frame.render_widget(page, area);
        }

        let title_rect = self.title_rect(main);
        self.viewport = self
            .grid
            .as_ref()
            .and_then(|_| Viewport::new(Some(main), self.metrics));

        if let (Some(grid), Some(viewport)) = (&mut self.grid, &self.viewport) {
            if !self.overlap_checked {
                let title_box = viewport.cells_to_world(title_rect);
                let hidden = grid.hide_overlapping(title_box, &self.metrics);
                log::info!("{hidden} labels hidden behind the title");
                self.overlap_checked = true;
            }
            render_grid(frame.buffer_mut(), viewport, grid, self.accent);
        }

        self.render_title(frame, title_rect);
        self.cursor.render(frame.buffer_mut(), area, self.accent);

        // Render help text
        let color = self.accent.color();
        let paused = if self.ticker.is_some() { " pause  " } else { " resume  " };
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "space".bold().fg(color),
            paused.dark_gray(),
            "c".bold().fg(color),
            " accent  ".dark_gray(),
            "n".bold().fg(color),
            " grain".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, help_area);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(GLYPH_HEIGHT as u16), // Block letters
            Constraint::Length(1),                   // Spacing
            Constraint::Length(1),                   // Tagline
        ])
        .split(area);

        let title_style = Style::new()
            .fg(NEUTRAL_TINT.into())
            .add_modifier(Modifier::BOLD);
        let title_text: Vec<Line> = self
            .title_art
            .iter()
            .map(|s| Line::from(s.as_str()).style(title_style))
            .collect();
        frame.render_widget(
            Paragraph::new(title_text).alignment(Alignment::Center),
            chunks[0],
        );

        if !self.config.tagline.is_empty() {
            let tagline = Paragraph::new(self.config.tagline.as_str())
                .style(Style::new().fg(self.accent.color()))
                .alignment(Alignment::Center);
            frame.render_widget(tagline, chunks[2]);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most one frame interval, then drains whatever else is queued
    /// so pointer motion never lags behind the animation.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let mut timeout = self.frame_interval();
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.on_pointer_leave(),
                _ => {}
            }
            timeout = Duration::ZERO;
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.toggle_rotation(),
            (_, KeyCode::Char('c')) => self.cycle_accent(),
            (_, KeyCode::Char('n')) => self.show_noise = !self.show_noise,
            _ => {}
        }
    }

    /// Pointer motion over the terminal.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return;
        }
        self.cursor.set_target(mouse.column, mouse.row);

        let Some(viewport) = self.viewport else {
            return;
        };
        if !viewport.contains(mouse.column, mouse.row) {
            if self.pointer_inside {
                self.on_pointer_leave();
            }
            return;
        }
        let Some(grid) = &mut self.grid else {
            return;
        };

        self.pointer_inside = true;
        let pointer = viewport.cell_to_world(mouse.column, mouse.row);
        grid.on_pointer_move(pointer);
        let hovering = grid.label_at(pointer, &self.metrics).is_some();
        self.cursor.set_hovering(hovering);
    }

    /// Pointer left the grid container or the terminal lost focus.
    fn on_pointer_leave(&mut self) {
        self.pointer_inside = false;
        if let Some(grid) = &mut self.grid {
            grid.on_pointer_leave();
        }
        self.cursor.clear();
    }

    /// Stop or restart the frame clock.
    fn toggle_rotation(&mut self) {
        match self.ticker.take() {
            Some(ticker) => {
                ticker.stop();
                log::debug!("rotation paused at {:.4} rad", self.rotation.angle());
            }
            None => {
                self.last_tick = None;
                self.ticker = Some(Ticker::start(self.frame_interval()));
            }
        }
    }

    /// Cycle through available accent colors.
    fn cycle_accent(&mut self) {
        self.accent = self.accent.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse_move(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
    }

    #[test]
    fn test_orbit_params_from_config() {
        let params = orbit_params(&GridConfig::default());
        assert_eq!(params, OrbitParams::default());
    }

    #[test]
    fn test_first_frame_runs_overlap_pass_once() {
        let mut app = App::new(Config::default());
        draw(&mut app, 200, 50);
        assert!(app.overlap_checked);
        let grid = app.grid.as_ref().unwrap();
        let hidden = grid.labels().iter().filter(|l| !l.visible).count();

        draw(&mut app, 200, 50);
        let grid = app.grid.as_ref().unwrap();
        assert_eq!(grid.labels().iter().filter(|l| !l.visible).count(), hidden);
    }

    #[test]
    fn test_pointer_lights_nearest_label() {
        let mut app = App::new(Config::default());
        draw(&mut app, 200, 50);

        let viewport = app.viewport.unwrap();
        let grid = app.grid.as_ref().unwrap();
        let (index, offset) = grid
            .offsets()
            .iter()
            .enumerate()
            .find(|(i, _)| grid.labels()[*i].visible)
            .map(|(i, o)| (i, *o))
            .unwrap();
        let (col, row) = viewport.world_to_cell(offset);

        app.on_mouse_event(mouse_move(col as u16, row as u16));
        assert!(app.pointer_inside);
        let h = app.grid.as_ref().unwrap().highlights()[index];
        assert!(h.intensity > 0.5);

        // Moving onto the help line leaves the grid container.
        app.on_mouse_event(mouse_move(0, 49));
        assert!(!app.pointer_inside);
        let grid = app.grid.as_ref().unwrap();
        assert!(grid.highlights().iter().all(|h| h.glow.is_none()));
    }

    #[test]
    fn test_title_rect_clamps_wide_titles() {
        let mut config = Config::default();
        config.tagline = "X".repeat(usize::from(u16::MAX) + 11);
        let app = App::new(config);
        let area = Rect::new(0, 0, 120, 40);
        let rect = app.title_rect(area);
        assert_eq!(rect.width, 120);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.height, (GLYPH_HEIGHT + 2) as u16);
    }

    #[test]
    fn test_disabled_grid_is_silent() {
        let mut config = Config::default();
        config.grid.enabled = false;
        let mut app = App::new(config);
        draw(&mut app, 120, 40);
        assert!(app.viewport.is_none());
        app.on_mouse_event(mouse_move(10, 10));
        app.on_pointer_leave();
        assert!(!app.pointer_inside);
    }

    #[test]
    fn test_keys() {
        let mut app = App::new(Config::default());
        app.on_key_event(key(KeyCode::Char('c')));
        assert_eq!(app.accent, AccentTheme::Cyan);
        app.on_key_event(key(KeyCode::Char('n')));
        assert!(!app.show_noise);

        app.on_key_event(key(KeyCode::Char(' ')));
        assert!(app.ticker.is_some());
        app.on_key_event(key(KeyCode::Char(' ')));
        assert!(app.ticker.is_none());

        app.running = true;
        app.on_key_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_frames_advance_rotation() {
        let mut app = App::new(Config::default());
        app.ticker = Some(Ticker::start(Duration::from_millis(2)));
        let start = app.rotation.angle();
        std::thread::sleep(Duration::from_millis(20));
        app.on_frame();
        assert!(app.rotation.angle() > start);

        // One displayed frame advances by exactly one step.
        assert!((app.rotation.angle() - start - 0.0003).abs() < 1e-6);
    }
}
