//! GUI example using egui.
//!
//! This example demonstrates how to overlay hint_mini badges on real widgets.
//! Press F to show hints, type a hint to click a button (Shift: right click,
//! Cmd: double click, Alt: move only), type other letters to search, Esc to cancel.
//! Run with: cargo run --example egui_app

use eframe::egui;
use hint_mini::{
    ClickAction, KeyCode, KeyEvent, Modifiers, Outcome, SelectionController, Target,
    TargetActivator,
};

const BUTTONS: [&str; 12] = [
    "New", "Open", "Save", "Save As", "Export", "Print", "Undo", "Redo", "Cut", "Copy", "Paste",
    "Preferences",
];

fn to_kurbo(rect: egui::Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

fn convert_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    let mut mods = Modifiers::empty();
    mods.set(Modifiers::SHIFT, modifiers.shift);
    mods.set(Modifiers::CTRL, modifiers.ctrl);
    mods.set(Modifiers::ALT, modifiers.alt);
    mods.set(Modifiers::META, modifiers.mac_cmd);
    mods
}

fn convert_egui_event(event: &egui::Event, modifiers: egui::Modifiers) -> Vec<KeyEvent> {
    let mods = convert_modifiers(modifiers);
    match event {
        egui::Event::Text(text) => text
            .chars()
            .map(|c| KeyEvent::new(KeyCode::Char(c), mods))
            .collect(),
        egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => {
            let mods = convert_modifiers(*modifiers);
            let code = match key {
                egui::Key::Escape => KeyCode::Esc,
                egui::Key::Enter => KeyCode::Enter,
                egui::Key::Backspace => KeyCode::Backspace,
                egui::Key::Tab => KeyCode::Tab,
                _ => return Vec::new(),
            };
            vec![KeyEvent::new(code, mods)]
        }
        _ => Vec::new(),
    }
}

/// Counts "clicks" per button instead of synthesising pointer events
#[derive(Default)]
struct ClickLog {
    counts: Vec<u32>,
    last: String,
}

impl TargetActivator for ClickLog {
    fn activate(&mut self, target: &Target, action: ClickAction) {
        if let Some(count) = self.counts.get_mut(target.id.0 as usize) {
            *count += 1;
        }
        self.last = format!("{action:?} on \"{}\"", target.label);
    }
}

struct HintApp {
    controller: SelectionController,
    clicks: ClickLog,
    button_rects: Vec<egui::Rect>,
}

impl Default for HintApp {
    fn default() -> Self {
        Self {
            controller: SelectionController::default(),
            clicks: ClickLog {
                counts: vec![0; BUTTONS.len()],
                last: String::new(),
            },
            button_rects: Vec::new(),
        }
    }
}

impl HintApp {
    fn targets(&self) -> Vec<Target> {
        self.button_rects
            .iter()
            .zip(BUTTONS)
            .enumerate()
            .map(|(i, (rect, name))| Target::new(i as u64, name, to_kurbo(*rect)))
            .collect()
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        if !self.controller.is_active() {
            if ctx.input(|i| i.key_pressed(egui::Key::F)) {
                let targets = self.targets();
                self.controller.begin_session(targets);
            }
            return;
        }

        let (events, modifiers) = ctx.input(|i| (i.events.clone(), i.modifiers));
        for event in &events {
            for key in convert_egui_event(event, modifiers) {
                let outcome = self.controller.handle_key(key).dispatch(&mut self.clicks);
                if matches!(outcome, Outcome::Exit | Outcome::Commit { .. }) {
                    return;
                }
            }
        }
    }

    fn paint_hints(&self, ctx: &egui::Context) {
        let Some(snapshot) = self.controller.snapshot() else {
            return;
        };
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("hint_badges"),
        ));
        for (label, target) in snapshot.reachable() {
            let pos = egui::pos2(target.bounds.x0 as f32, target.bounds.y0 as f32);
            let galley = painter.layout_no_wrap(
                label.clone(),
                egui::FontId::monospace(13.0),
                egui::Color32::BLACK,
            );
            let badge = egui::Rect::from_min_size(pos, galley.size() + egui::vec2(6.0, 2.0));
            painter.rect_filled(badge, 3.0, egui::Color32::from_rgb(255, 204, 0));
            painter.galley(pos + egui::vec2(3.0, 1.0), galley, egui::Color32::BLACK);
        }
    }
}

impl eframe::App for HintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("hint_mini GUI Demo");
            ui.label("Press F for hints.");
            ui.separator();

            let mut rects = Vec::with_capacity(BUTTONS.len());
            egui::Grid::new("buttons").spacing([12.0, 12.0]).show(ui, |ui| {
                for (i, name) in BUTTONS.iter().enumerate() {
                    let response = ui.add_sized([110.0, 32.0], egui::Button::new(*name));
                    if response.clicked() {
                        self.clicks.activate(
                            &Target::new(i as u64, *name, to_kurbo(response.rect)),
                            ClickAction::LeftClick,
                        );
                    }
                    rects.push(response.rect);
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
            self.button_rects = rects;

            ui.separator();

            // Status line
            ui.horizontal(|ui| {
                match self.controller.snapshot() {
                    Some(snapshot) => ui.label(format!(
                        "hint: {}  search: {}",
                        snapshot.typed_hint_chars, snapshot.free_text_query
                    )),
                    None => ui.label("hints off"),
                };
                ui.label(format!("last: {}", self.clicks.last));
            });
            ui.label(format!("clicks: {:?}", self.clicks.counts));
        });

        self.paint_hints(ctx);
    }
}

fn main() -> Result<(), eframe::Error> {
    if let Ok(filter) = tracing_subscriber::EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "hint_mini GUI Demo",
        options,
        Box::new(|_cc| Box::<HintApp>::default()),
    )
}
