use hint_mini::{ClickAction, Target, TargetActivator, TargetId};

/// Remembers every activation instead of clicking anything.
#[derive(Default, Debug, Clone)]
pub struct RecordingActivator {
    pub activations: Vec<(TargetId, ClickAction)>,
}

impl RecordingActivator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetActivator for RecordingActivator {
    fn activate(&mut self, target: &Target, action: ClickAction) {
        self.activations.push((target.id, action));
    }
}
