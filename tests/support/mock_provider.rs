use hint_mini::{ElementProvider, Target};
use kurbo::Rect;

/// Hands out a fixed snapshot of targets.
#[derive(Default, Debug, Clone)]
pub struct MockProvider {
    targets: Vec<Target>,
    pub calls: usize,
}

impl MockProvider {
    pub fn new(targets: Vec<Target>) -> Self {
        Self { targets, calls: 0 }
    }

    pub fn with_labels(labels: &[&str]) -> Self {
        Self::new(row(labels))
    }
}

impl ElementProvider for MockProvider {
    fn targets(&mut self) -> Vec<Target> {
        self.calls += 1;
        self.targets.clone()
    }
}

/// Lays targets out left to right without overlap; ids follow input order.
pub fn row(labels: &[&str]) -> Vec<Target> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = i as f64 * 100.0;
            Target::new(i as u64, *label, Rect::new(x, 0.0, x + 80.0, 20.0))
        })
        .collect()
}

/// Stacks every target on the same box.
pub fn stacked(count: usize) -> Vec<Target> {
    (0..count)
        .map(|i| Target::new(i as u64, format!("item {i}"), Rect::new(10.0, 10.0, 90.0, 30.0)))
        .collect()
}
