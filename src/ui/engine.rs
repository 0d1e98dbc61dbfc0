use std::collections::HashMap;

use log::{debug, warn};
use ratatui::layout::Rect;

use crate::ui::adapter::{ChartDataset, ChartEngine, ChartHandle, ContainerId, Theme};

/// One live chart: where it is bound, how it looks, and what it last drew.
#[derive(Clone, Debug)]
pub struct Surface {
    pub container: ContainerId,
    pub theme: Theme,
    /// Size fitted at `init` or the latest `resize`.
    pub size: Rect,
    pub dataset: Option<ChartDataset>,
}

/// Chart engine that keeps retained surfaces for the ratatui renderer.
#[derive(Debug, Default)]
pub struct TerminalEngine {
    next_id: u64,
    viewports: HashMap<ContainerId, Rect>,
    surfaces: HashMap<ChartHandle, Surface>,
}

impl TerminalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where `container` currently sits on screen. Surfaces pick this up on `resize`.
    pub fn set_viewport(&mut self, container: &ContainerId, rect: Rect) {
        self.viewports.insert(container.clone(), rect);
    }

    pub fn viewport(&self, container: &ContainerId) -> Option<Rect> {
        self.viewports.get(container).copied()
    }

    pub fn surface(&self, handle: ChartHandle) -> Option<&Surface> {
        self.surfaces.get(&handle)
    }

    pub fn surface_for(&self, container: &ContainerId) -> Option<&Surface> {
        self.surfaces
            .values()
            .find(|surface| &surface.container == container)
    }

    pub fn live_surfaces(&self) -> usize {
        self.surfaces.len()
    }
}

impl ChartEngine for TerminalEngine {
    fn init(&mut self, container: &ContainerId, theme: Theme) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle::from_raw(self.next_id);
        let size = self.viewport(container).unwrap_or_default();
        debug!(
            "init chart {} on `{}` ({} theme, {}x{})",
            handle.raw(),
            container,
            theme.label(),
            size.width,
            size.height
        );
        self.surfaces.insert(
            handle,
            Surface {
                container: container.clone(),
                theme,
                size,
                dataset: None,
            },
        );
        handle
    }

    fn dispose(&mut self, handle: ChartHandle) {
        if self.surfaces.remove(&handle).is_none() {
            warn!("dispose of unknown chart {}", handle.raw());
        }
    }

    fn resize(&mut self, handle: ChartHandle) {
        let Some(surface) = self.surfaces.get_mut(&handle) else {
            warn!("resize of unknown chart {}", handle.raw());
            return;
        };
        if let Some(rect) = self.viewports.get(&surface.container) {
            surface.size = *rect;
        }
    }

    fn set_option(&mut self, handle: ChartHandle, dataset: ChartDataset) {
        match self.surfaces.get_mut(&handle) {
            Some(surface) => surface.dataset = Some(dataset),
            None => warn!("draw on unknown chart {}", handle.raw()),
        }
    }
}
