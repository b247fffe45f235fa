use kurbo::Rect;

use crate::key::Modifiers;
use crate::traits::TargetActivator;

/// Opaque handle the element provider uses to find a target again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

/// The accessibility role of a target.
///
/// The engine never branches on roles; they are carried through for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Push buttons, including pop-up and menu buttons.
    Button,
    /// Hyperlinks.
    Link,
    /// Entries in a menu or menu bar.
    MenuItem,
    CheckBox,
    RadioButton,
    /// Editable text: fields, areas, combo and search boxes.
    TextField,
    /// A tab or tab group.
    Tab,
    /// Table or outline cells and rows.
    Cell,
    Image,
    /// A role the boundary layer does not model.
    Other(String),
}

impl Role {
    /// Parses a role name, accepting both `AXButton` and `button` spellings.
    pub fn from_name(name: &str) -> Self {
        let bare = name.strip_prefix("AX").unwrap_or(name);
        match bare.to_ascii_lowercase().as_str() {
            "button" | "popupbutton" | "menubutton" => Role::Button,
            "link" => Role::Link,
            "menuitem" | "menubaritem" => Role::MenuItem,
            "checkbox" => Role::CheckBox,
            "radiobutton" => Role::RadioButton,
            "textfield" | "textarea" | "combobox" | "searchfield" => Role::TextField,
            "tab" | "tabgroup" => Role::Tab,
            "cell" | "row" => Role::Cell,
            "image" => Role::Image,
            _ => Role::Other(name.to_string()),
        }
    }
}

/// Actions an element advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetAction {
    /// Default activation, what a left click does.
    Press,
    /// Opens the element's context menu.
    ShowMenu,
    /// Confirms a dialog or field.
    Confirm,
    /// Selects a value from a list.
    Pick,
    /// Steps a slider or stepper up.
    Increment,
    /// Steps a slider or stepper down.
    Decrement,
    /// Brings a window to the front.
    Raise,
    /// Dismisses a dialog or menu.
    Cancel,
}

impl TargetAction {
    /// Parses an action name (`AXPress`, `press`, `show-menu`, ...).
    ///
    /// Returns `None` for actions outside the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        let bare = name.strip_prefix("AX").unwrap_or(name);
        let folded: String = bare
            .chars()
            .filter(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "press" => Some(Self::Press),
            "showmenu" => Some(Self::ShowMenu),
            "confirm" => Some(Self::Confirm),
            "pick" => Some(Self::Pick),
            "increment" => Some(Self::Increment),
            "decrement" => Some(Self::Decrement),
            "raise" => Some(Self::Raise),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// A selectable on-screen element, captured once per session.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Handle for reaching the element again on commit.
    pub id: TargetId,
    /// Display text; searched by the fuzzy filter.
    pub label: String,
    /// What kind of element this is.
    pub role: Role,
    /// Screen-space bounding box.
    pub bounds: Rect,
    /// Actions the element advertises, in provider order.
    pub actions: Vec<TargetAction>,
    /// Stable identifier, searched alongside the label when present.
    pub identifier: Option<String>,
}

impl Target {
    pub fn new(id: u64, label: impl Into<String>, bounds: Rect) -> Self {
        Self {
            id: TargetId(id),
            label: label.into(),
            role: Role::Button,
            bounds,
            actions: vec![TargetAction::Press],
            identifier: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Replaces the action set from raw names, dropping unsupported ones.
    pub fn with_action_names<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.actions = names.into_iter().filter_map(TargetAction::from_name).collect();
        self
    }

    pub fn supports(&self, action: TargetAction) -> bool {
        self.actions.contains(&action)
    }

    /// True when both boxes share area, or coincide exactly (zero-sized boxes included).
    pub fn overlaps(&self, other: &Target) -> bool {
        self.bounds == other.bounds || self.bounds.intersect(other.bounds).area() > 0.0
    }
}

/// The physical interaction performed on a committed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    LeftClick,
    RightClick,
    DoubleClick,
    MoveOnly,
}

impl ClickAction {
    /// Resolves the click type from held modifiers.
    ///
    /// Priority: Shift, then Command, then Option. Control never changes the
    /// click type.
    pub fn from_modifiers(mods: Modifiers) -> Self {
        if mods.contains(Modifiers::SHIFT) {
            ClickAction::RightClick
        } else if mods.contains(Modifiers::META) {
            ClickAction::DoubleClick
        } else if mods.contains(Modifiers::ALT) {
            ClickAction::MoveOnly
        } else {
            ClickAction::LeftClick
        }
    }
}

/// What the host should do after the controller consumed an input.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// Session state changed; redraw hints.
    Redraw,
    /// The session was cancelled; tear down the overlay.
    Exit,
    /// A target was selected; the session is over.
    Commit { target: Target, action: ClickAction },
}

impl Outcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, Outcome::Commit { .. })
    }

    /// Forwards a commit to the activator and hands the outcome back.
    pub fn dispatch<A: TargetActivator>(self, activator: &mut A) -> Outcome {
        if let Outcome::Commit { target, action } = &self {
            activator.activate(target, *action);
        }
        self
    }
}
