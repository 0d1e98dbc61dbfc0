use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::fetch::TimeSeries;

/// Name of a layout region a chart can be bound to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Candlestick,
    Line,
}

impl ChartType {
    pub fn label(self) -> &'static str {
        match self {
            ChartType::Candlestick => "Candlestick",
            ChartType::Line => "Line",
        }
    }
}

/// Opaque id of one live chart instance. Only the engine that issued it knows what it refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct PriceChartData {
    pub symbol: String,
    pub chart_type: ChartType,
    pub series: Arc<TimeSeries>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieData {
    pub title: String,
    pub slices: Vec<(String, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GaugeData {
    pub title: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl GaugeData {
    /// Position of `value` inside `[min, max]`, clamped to `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if !span.is_finite() || span <= 0.0 || !self.value.is_finite() {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Everything a chart can be asked to display.
#[derive(Clone, Debug)]
pub enum ChartDataset {
    Price(PriceChartData),
    Pie(PieData),
    Gauge(GaugeData),
}

/// Chart rendering backend. Handles are only valid until they are passed to `dispose`.
pub trait ChartEngine {
    fn init(&mut self, container: &ContainerId, theme: Theme) -> ChartHandle;
    fn dispose(&mut self, handle: ChartHandle);
    fn resize(&mut self, handle: ChartHandle);
    fn set_option(&mut self, handle: ChartHandle, dataset: ChartDataset);
}

/// Lifecycle wrapper keeping exactly one chart handle per container.
pub struct RenderingAdapter<E: ChartEngine> {
    engine: E,
    handles: HashMap<ContainerId, ChartHandle>,
}

impl<E: ChartEngine> RenderingAdapter<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            handles: HashMap::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn handle(&self, container: &ContainerId) -> Option<ChartHandle> {
        self.handles.get(container).copied()
    }

    /// Bind a fresh chart to `container`. Any previous chart there is disposed first, since
    /// the engine cannot switch themes in place.
    pub fn create_chart(&mut self, container: &ContainerId, theme: Theme) -> ChartHandle {
        if let Some(previous) = self.handles.remove(container) {
            self.engine.dispose(previous);
        }
        let handle = self.engine.init(container, theme);
        self.handles.insert(container.clone(), handle);
        handle
    }

    pub fn dispose(&mut self, container: &ContainerId) {
        if let Some(handle) = self.handles.remove(container) {
            self.engine.dispose(handle);
        }
    }

    pub fn resize(&mut self, container: &ContainerId) {
        match self.handles.get(container) {
            Some(handle) => self.engine.resize(*handle),
            None => debug!("resize ignored: no chart bound to `{}`", container),
        }
    }

    pub fn draw_candlestick(&mut self, container: &ContainerId, data: PriceChartData) {
        self.draw(container, ChartDataset::Price(data));
    }

    pub fn draw_pie(&mut self, container: &ContainerId, data: PieData) {
        self.draw(container, ChartDataset::Pie(data));
    }

    pub fn draw_gauge(&mut self, container: &ContainerId, data: GaugeData) {
        self.draw(container, ChartDataset::Gauge(data));
    }

    fn draw(&mut self, container: &ContainerId, dataset: ChartDataset) {
        match self.handles.get(container) {
            Some(handle) => self.engine.set_option(*handle, dataset),
            None => debug!("draw ignored: no chart bound to `{}`", container),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum EngineCall {
        Init(ContainerId, Theme, ChartHandle),
        Dispose(ChartHandle),
        Resize(ChartHandle),
        Draw(ChartHandle, String),
    }

    /// Engine double that records every call and tracks which handles are still live.
    #[derive(Default)]
    pub struct RecordingEngine {
        next: u64,
        pub calls: Vec<EngineCall>,
        pub live: Vec<(ChartHandle, ContainerId)>,
    }

    impl RecordingEngine {
        pub fn live_for(&self, container: &ContainerId) -> usize {
            self.live.iter().filter(|(_, c)| c == container).count()
        }

        pub fn drawn_symbols(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    EngineCall::Draw(_, label) if label.starts_with("price:") => {
                        Some(label.trim_start_matches("price:").to_string())
                    }
                    _ => None,
                })
                .collect()
        }
    }

    impl ChartEngine for RecordingEngine {
        fn init(&mut self, container: &ContainerId, theme: Theme) -> ChartHandle {
            self.next += 1;
            let handle = ChartHandle::from_raw(self.next);
            self.live.push((handle, container.clone()));
            self.calls
                .push(EngineCall::Init(container.clone(), theme, handle));
            handle
        }

        fn dispose(&mut self, handle: ChartHandle) {
            assert!(
                self.live.iter().any(|(h, _)| *h == handle),
                "dispose on a dead handle"
            );
            self.live.retain(|(h, _)| *h != handle);
            self.calls.push(EngineCall::Dispose(handle));
        }

        fn resize(&mut self, handle: ChartHandle) {
            assert!(
                self.live.iter().any(|(h, _)| *h == handle),
                "resize on a dead handle"
            );
            self.calls.push(EngineCall::Resize(handle));
        }

        fn set_option(&mut self, handle: ChartHandle, dataset: ChartDataset) {
            assert!(
                self.live.iter().any(|(h, _)| *h == handle),
                "draw on a dead handle"
            );
            let label = match dataset {
                ChartDataset::Price(data) => format!("price:{}", data.symbol),
                ChartDataset::Pie(data) => format!("pie:{}", data.title),
                ChartDataset::Gauge(data) => format!("gauge:{}", data.title),
            };
            self.calls.push(EngineCall::Draw(handle, label));
        }
    }
}
