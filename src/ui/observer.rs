use std::collections::BTreeMap;

use ratatui::layout::Rect;

use crate::ui::adapter::ContainerId;

/// Size change reported for one observed container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizeEntry {
    pub target: ContainerId,
    pub rect: Rect,
}

impl ResizeEntry {
    pub fn new(target: ContainerId, rect: Rect) -> Self {
        Self { target, rect }
    }
}

/// Reports observed containers whose rectangle changed since the previous poll. A freshly
/// observed container is reported on the first poll that can locate it.
#[derive(Debug, Default)]
pub struct ResizeObserver {
    observed: BTreeMap<ContainerId, Option<Rect>>,
}

impl ResizeObserver {
    pub fn observe(&mut self, container: ContainerId) {
        self.observed.entry(container).or_insert(None);
    }

    pub fn poll<F>(&mut self, mut lookup: F) -> Vec<ResizeEntry>
    where
        F: FnMut(&ContainerId) -> Option<Rect>,
    {
        let mut entries = Vec::new();
        for (container, last) in self.observed.iter_mut() {
            let Some(rect) = lookup(container) else {
                continue;
            };
            if *last != Some(rect) {
                *last = Some(rect);
                entries.push(ResizeEntry::new(container.clone(), rect));
            }
        }
        entries
    }
}
