use tracing::{debug, trace, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::automaton::{AutomatonState, InputAutomaton};
use crate::config::{HintConfig, fold};
use crate::error::Result;
use crate::fuzzy;
use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::labels::LabelAssigner;
use crate::traits::ElementProvider;
use crate::types::{ClickAction, Outcome, Target};

/// State for one activation, from `begin_session` until exit or commit.
#[derive(Debug, Clone)]
struct SelectionSession {
    all_targets: Vec<Target>,
    filtered_targets: Vec<Target>,
    // parallel to filtered_targets
    labels: Vec<String>,
    typed_hint_chars: String,
    free_text_query: String,
    rotation_index: usize,
    automaton: InputAutomaton,
}

impl SelectionSession {
    fn new(targets: Vec<Target>, assigner: &LabelAssigner) -> Self {
        let mut session = Self {
            all_targets: targets,
            filtered_targets: Vec::new(),
            labels: Vec::new(),
            typed_hint_chars: String::new(),
            free_text_query: String::new(),
            rotation_index: 0,
            automaton: InputAutomaton::new(),
        };
        session.refilter(assigner);
        session
    }

    /// Recomputes the filtered set from the query and relabels it from scratch.
    fn refilter(&mut self, assigner: &LabelAssigner) {
        let mut filtered = fuzzy::filter_and_sort(&self.all_targets, &self.free_text_query);
        let labels = assigner.generate(filtered.len());
        if labels.len() < filtered.len() {
            warn!(
                targets = filtered.len(),
                labels = labels.len(),
                "more targets than labels; dropping the unlabelled tail"
            );
            filtered.truncate(labels.len());
        }

        self.automaton.clear();
        for label in &labels {
            self.automaton.register(label);
        }
        self.filtered_targets = filtered;
        self.labels = labels;
        self.typed_hint_chars.clear();
        self.rotation_index = 0;
        trace!(
            query = %self.free_text_query,
            remaining = self.filtered_targets.len(),
            "refiltered"
        );
    }

    fn commit_at(&self, index: usize, mods: Modifiers) -> Outcome {
        let Some(target) = self.filtered_targets.get(index) else {
            return Outcome::Ignored;
        };
        Outcome::Commit {
            target: target.clone(),
            action: ClickAction::from_modifiers(mods),
        }
    }

    fn type_hint_char(&mut self, ch: char, mods: Modifiers, assigner: &LabelAssigner) -> Outcome {
        let hint = fold(ch);
        self.typed_hint_chars.push(hint);
        match self.automaton.advance(hint) {
            AutomatonState::Match => {
                let index = self
                    .automaton
                    .matched()
                    .and_then(|label| self.labels.iter().position(|l| l == label));
                match index {
                    Some(index) => self.commit_at(index, mods),
                    None => self.degrade_to_search(ch, assigner),
                }
            }
            AutomatonState::Advancable | AutomatonState::WordsAdded => Outcome::Redraw,
            AutomatonState::Deadend | AutomatonState::Initialized => {
                self.degrade_to_search(ch, assigner)
            }
        }
    }

    /// A hint prefix that leads nowhere becomes a search character.
    fn degrade_to_search(&mut self, ch: char, assigner: &LabelAssigner) -> Outcome {
        trace!(typed = %self.typed_hint_chars, "hint dead end, searching instead");
        self.automaton.reset();
        self.push_query(ch, assigner)
    }

    fn push_query(&mut self, ch: char, assigner: &LabelAssigner) -> Outcome {
        self.free_text_query.extend(ch.to_lowercase());
        self.refilter(assigner);
        Outcome::Redraw
    }

    fn erase(&mut self, assigner: &LabelAssigner) -> Outcome {
        if self.typed_hint_chars.pop().is_some() {
            self.automaton.reset();
            self.automaton.advance_str(&self.typed_hint_chars);
            return Outcome::Redraw;
        }
        match self.free_text_query.grapheme_indices(true).next_back() {
            Some((start, _)) => {
                self.free_text_query.truncate(start);
                self.refilter(assigner);
                Outcome::Redraw
            }
            None => Outcome::Ignored,
        }
    }

    fn rotate(&mut self) -> Outcome {
        if self.typed_hint_chars.is_empty() || self.filtered_targets.is_empty() {
            return Outcome::Ignored;
        }
        self.rotation_index = (self.rotation_index + 1) % self.filtered_targets.len();
        Outcome::Redraw
    }

    fn commit_current(&self, mods: Modifiers) -> Outcome {
        if self.filtered_targets.is_empty() {
            return Outcome::Ignored;
        }
        let index = self.rotation_index.min(self.filtered_targets.len() - 1);
        self.commit_at(index, mods)
    }
}

/// Read-only view of the live session for renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// `(label, target)` for every filtered target, in rank order.
    pub hints: Vec<(String, Target)>,
    /// Hint characters typed so far, uppercase.
    pub typed_hint_chars: String,
    /// Current search query, lowercase.
    pub free_text_query: String,
    /// Index into `hints` that Enter would commit.
    pub rotation_index: usize,
    /// State of the hint matcher after `typed_hint_chars`.
    pub automaton_state: AutomatonState,
}

impl SessionSnapshot {
    /// Hints whose label still starts with the typed characters.
    pub fn reachable(&self) -> impl Iterator<Item = &(String, Target)> + '_ {
        self.hints
            .iter()
            .filter(|(label, _)| label.starts_with(self.typed_hint_chars.as_str()))
    }
}

pub struct ControllerBuilder {
    config: HintConfig,
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self {
            config: HintConfig::default(),
        }
    }
}

impl ControllerBuilder {
    pub fn config(mut self, config: HintConfig) -> Self {
        self.config = config;
        self
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.config.alphabet = alphabet.into();
        self
    }

    pub fn build(self) -> Result<SelectionController> {
        let alphabet = self.config.alphabet()?;
        Ok(SelectionController {
            assigner: LabelAssigner::new(alphabet),
            config: self.config,
            session: None,
        })
    }
}

/// Routes keystrokes to hint matching or fuzzy search and reports selections.
#[derive(Debug, Clone)]
pub struct SelectionController {
    config: HintConfig,
    assigner: LabelAssigner,
    session: Option<SelectionSession>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            config: HintConfig::default(),
            assigner: LabelAssigner::default(),
            session: None,
        }
    }
}

impl SelectionController {
    pub fn new(config: HintConfig) -> Result<Self> {
        ControllerBuilder::default().config(config).build()
    }

    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::default()
    }

    pub fn config(&self) -> &HintConfig {
        &self.config
    }

    /// Starts a session over `targets`, replacing any live one.
    pub fn begin_session(&mut self, targets: Vec<Target>) {
        debug!(targets = targets.len(), "hint session started");
        self.session = Some(SelectionSession::new(targets, &self.assigner));
    }

    pub fn begin_from<P: ElementProvider>(&mut self, provider: &mut P) {
        self.begin_session(provider.targets());
    }

    pub fn end_session(&mut self) {
        self.session = None;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(|s| SessionSnapshot {
            hints: s
                .labels
                .iter()
                .cloned()
                .zip(s.filtered_targets.iter().cloned())
                .collect(),
            typed_hint_chars: s.typed_hint_chars.clone(),
            free_text_query: s.free_text_query.clone(),
            rotation_index: s.rotation_index,
            automaton_state: s.automaton.state(),
        })
    }

    /// Indices of filtered targets whose bounds overlap target `index`, itself included.
    pub fn overlapping(&self, index: usize) -> Vec<usize> {
        let Some(session) = &self.session else {
            return Vec::new();
        };
        let Some(anchor) = session.filtered_targets.get(index) else {
            return Vec::new();
        };
        session
            .filtered_targets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.overlaps(anchor))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            return Outcome::Ignored;
        };
        trace!(?event, "hint key");

        if is_exit(&event, self.config.cancel_chord) {
            return self.settle(Outcome::Exit);
        }

        let outcome = match event.code {
            KeyCode::Backspace => session.erase(&self.assigner),
            KeyCode::Enter if self.config.commit_on_enter => session.commit_current(event.mods),
            KeyCode::Tab if self.config.rotate_on_tab => session.rotate(),
            _ => match event.printable() {
                Some(ch) if self.assigner.alphabet().contains(ch) => {
                    if session.filtered_targets.is_empty() {
                        Outcome::Ignored
                    } else {
                        session.type_hint_char(ch, event.mods, &self.assigner)
                    }
                }
                Some(ch) => session.push_query(ch, &self.assigner),
                None => Outcome::Ignored,
            },
        };
        self.settle(outcome)
    }

    /// Replaces the search query with `text` from a host text field.
    ///
    /// Commits right away when exactly one target survives the filter.
    pub fn handle_free_text(&mut self, text: &str, mods: Modifiers) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            return Outcome::Ignored;
        };
        session.free_text_query = text.to_lowercase();
        session.refilter(&self.assigner);
        let outcome = if session.filtered_targets.len() == 1 {
            session.commit_at(0, mods)
        } else {
            Outcome::Redraw
        };
        self.settle(outcome)
    }

    /// Cycles the rotation index through the filtered targets.
    pub fn rotate(&mut self) -> Outcome {
        match self.session.as_mut() {
            Some(session) => session.rotate(),
            None => Outcome::Ignored,
        }
    }

    pub fn commit_current_selection(&mut self, mods: Modifiers) -> Outcome {
        let outcome = match &self.session {
            Some(session) => session.commit_current(mods),
            None => Outcome::Ignored,
        };
        self.settle(outcome)
    }

    /// Ends the session on exit or commit.
    fn settle(&mut self, outcome: Outcome) -> Outcome {
        match &outcome {
            Outcome::Exit => {
                debug!("hint session cancelled");
                self.session = None;
            }
            Outcome::Commit { target, action } => {
                debug!(label = %target.label, ?action, "hint session committed");
                self.session = None;
            }
            Outcome::Ignored | Outcome::Redraw => {}
        }
        outcome
    }
}

fn is_exit(event: &KeyEvent, cancel_chord: char) -> bool {
    match event.code {
        KeyCode::Esc | KeyCode::Char('\u{1b}') => true,
        KeyCode::Char(c) => event.mods.contains(Modifiers::CTRL) && c == cancel_chord,
        _ => false,
    }
}
