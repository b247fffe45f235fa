pub mod automaton;
pub mod config;
pub mod controller;
pub mod error;
pub mod fuzzy;
pub mod key;
pub mod labels;
pub mod traits;
pub mod trie;
pub mod types;

pub use crate::automaton::{AutomatonState, InputAutomaton};
pub use crate::config::{Alphabet, HintConfig};
pub use crate::controller::{ControllerBuilder, SelectionController, SessionSnapshot};
pub use crate::error::ConfigError;
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::labels::LabelAssigner;
pub use crate::traits::{ElementProvider, TargetActivator};
pub use crate::trie::Trie;
pub use crate::types::{ClickAction, Outcome, Role, Target, TargetAction, TargetId};
