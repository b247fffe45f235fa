//! Terminal UI example using crossterm and ratatui.
//!
//! This example demonstrates how to drive hint_mini from a terminal application.
//! A grid of fake buttons gets hint badges; type a hint to "click" one, type
//! other letters to search, Esc to quit.
//! Run with: cargo run --example tui_crossterm
//! Set RUST_LOG=hint_mini=trace to log engine decisions to hint_mini_demo.log.

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hint_mini::{
    ClickAction, ElementProvider, KeyCode, KeyEvent, Modifiers, Outcome, SelectionController,
    SessionSnapshot, Target, TargetActivator,
};
use kurbo::Rect;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect as Area},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const BUTTON_WIDTH: f64 = 18.0;
const BUTTON_HEIGHT: f64 = 3.0;

/// Fake element provider: a fixed grid of buttons in terminal cells
struct ButtonGrid {
    names: Vec<&'static str>,
}

impl ButtonGrid {
    fn new() -> Self {
        Self {
            names: vec![
                "Save", "Save As", "Open", "Close", "Back", "Forward", "Reload", "Settings",
                "Help", "Search", "Cancel", "Apply", "Share", "Print", "Zoom In", "Zoom Out",
                "Copy", "Paste", "Undo", "Redo", "Bold", "Italic", "Export", "Quit",
            ],
        }
    }
}

impl ElementProvider for ButtonGrid {
    fn targets(&mut self) -> Vec<Target> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let x = (i % 4) as f64 * (BUTTON_WIDTH + 1.0);
                let y = (i / 4) as f64 * BUTTON_HEIGHT;
                Target::new(i as u64, *name, Rect::new(x, y, x + BUTTON_WIDTH, y + BUTTON_HEIGHT))
            })
            .collect()
    }
}

/// Activator that just reports what would have been clicked
#[derive(Default)]
struct StatusActivator {
    last: Option<String>,
}

impl TargetActivator for StatusActivator {
    fn activate(&mut self, target: &Target, action: ClickAction) {
        let verb = match action {
            ClickAction::LeftClick => "Clicked",
            ClickAction::RightClick => "Right-clicked",
            ClickAction::DoubleClick => "Double-clicked",
            ClickAction::MoveOnly => "Moved to",
        };
        self.last = Some(format!("{verb} \"{}\"", target.label));
    }
}

struct App {
    controller: SelectionController,
    provider: ButtonGrid,
    activator: StatusActivator,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let mut app = Self {
            controller: SelectionController::default(),
            provider: ButtonGrid::new(),
            activator: StatusActivator::default(),
            should_quit: false,
        };
        app.controller.begin_from(&mut app.provider);
        app
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        let Some(key) = convert_crossterm_event(event) else {
            return;
        };

        match self.controller.handle_key(key).dispatch(&mut self.activator) {
            Outcome::Exit => self.should_quit = true,
            // Start over so the demo keeps going
            Outcome::Commit { .. } => self.controller.begin_from(&mut self.provider),
            Outcome::Redraw | Outcome::Ignored => {}
        }
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<KeyEvent> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }
    if event.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        mods |= Modifiers::META;
    }

    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        _ => return None,
    };
    Some(KeyEvent::new(code, mods))
}

fn button_area(bounds: Rect, canvas: Area) -> Option<Area> {
    let x = canvas.x as f64 + 1.0 + bounds.x0;
    let y = canvas.y as f64 + 1.0 + bounds.y0;
    let right = (canvas.x + canvas.width).saturating_sub(1) as f64;
    let bottom = (canvas.y + canvas.height).saturating_sub(1) as f64;
    if x + bounds.width() > right || y + bounds.height() > bottom {
        return None;
    }
    Some(Area::new(x as u16, y as u16, bounds.width() as u16, bounds.height() as u16))
}

fn draw_buttons(f: &mut Frame, canvas: Area, snapshot: &SessionSnapshot) {
    for (index, (label, target)) in snapshot.hints.iter().enumerate() {
        let Some(area) = button_area(target.bounds, canvas) else {
            continue;
        };
        let reachable = label.starts_with(snapshot.typed_hint_chars.as_str());
        let rotated = !snapshot.typed_hint_chars.is_empty() && index == snapshot.rotation_index;

        let badge_style = if reachable {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let border_style = if rotated {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let title = Line::from(vec![Span::styled(format!(" {label} "), badge_style)]);
        let button = Paragraph::new(target.label.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
        f.render_widget(button, area);
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(f.size());

    let canvas = Block::default()
        .borders(Borders::ALL)
        .title("hint_mini demo");
    f.render_widget(canvas, chunks[0]);

    let status_text = match app.controller.snapshot() {
        Some(snapshot) => {
            draw_buttons(f, chunks[0], &snapshot);
            let last = app.activator.last.as_deref().unwrap_or("-");
            format!(
                "hint: {:<3} search: {:<12} last: {}",
                snapshot.typed_hint_chars, snapshot.free_text_query, last
            )
        }
        None => "no session".to_string(),
    };

    // Status line
    let status = Paragraph::new(status_text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);
}

fn init_logging() {
    let Ok(filter) = tracing_subscriber::EnvFilter::try_from_default_env() else {
        return;
    };
    if let Ok(file) = std::fs::File::create("hint_mini_demo.log") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }
}

fn main() -> Result<(), io::Error> {
    init_logging();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_crossterm_event(key);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
