use crate::types::{ClickAction, Target};

/// Enumerates the selectable elements currently on screen.
///
/// Implementations may gather elements off-thread, but must hand the list back
/// on the thread that drives the controller.
pub trait ElementProvider {
    fn targets(&mut self) -> Vec<Target>;
}

/// Performs the click or pointer move for a committed selection.
pub trait TargetActivator {
    fn activate(&mut self, target: &Target, action: ClickAction);
}
