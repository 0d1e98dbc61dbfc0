use std::sync::Arc;

use log::debug;

use crate::config::Containers;
use crate::fetch::{AggregateIndicators, TimeSeries};
use crate::ui::adapter::{
    ChartEngine, ChartType, GaugeData, PieData, PriceChartData, RenderingAdapter, Theme,
};
use crate::ui::observer::ResizeEntry;

/// Theme used for the pie and gauge charts, which never change theme.
const AUX_THEME: Theme = Theme::Dark;
const ADX_SCALE: (f64, f64) = (0.0, 100.0);

/// Turns selection state and fetched data into rendering adapter calls.
pub struct ViewComposer<E: ChartEngine> {
    adapter: RenderingAdapter<E>,
    containers: Containers,
}

impl<E: ChartEngine> ViewComposer<E> {
    pub fn new(engine: E, containers: Containers) -> Self {
        Self {
            adapter: RenderingAdapter::new(engine),
            containers,
        }
    }

    /// Create the main, pie and gauge charts.
    pub fn mount(&mut self, main_theme: Theme) {
        self.adapter.create_chart(&self.containers.main, main_theme);
        self.adapter.create_chart(&self.containers.pie, AUX_THEME);
        self.adapter.create_chart(&self.containers.gauge, AUX_THEME);
    }

    pub fn adapter(&self) -> &RenderingAdapter<E> {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut RenderingAdapter<E> {
        &mut self.adapter
    }

    pub fn containers(&self) -> &Containers {
        &self.containers
    }

    pub fn redraw_main(&mut self, symbol: &str, series: Arc<TimeSeries>, chart_type: ChartType) {
        let data = PriceChartData {
            symbol: symbol.to_string(),
            chart_type,
            series,
        };
        self.adapter.draw_candlestick(&self.containers.main, data);
    }

    pub fn redraw_aux(&mut self, symbol: &str, indicators: &AggregateIndicators) {
        self.adapter.draw_pie(
            &self.containers.pie,
            PieData {
                title: format!("{} signals", symbol),
                slices: indicators.slices(),
            },
        );

        let (min, max) = ADX_SCALE;
        self.adapter.draw_gauge(
            &self.containers.gauge,
            GaugeData {
                title: format!("{} ADX", symbol),
                value: indicators.adx,
                min,
                max,
            },
        );
    }

    /// Swap the main chart for a fresh one with `theme`. The old handle is gone afterwards.
    pub fn replace_main_chart(&mut self, theme: Theme) {
        self.adapter.create_chart(&self.containers.main, theme);
    }

    /// Resize every chart when the first entry targets the main container. Returns whether
    /// anything was resized.
    pub fn on_container_resize(&mut self, entries: &[ResizeEntry]) -> bool {
        match entries.first() {
            Some(entry) if entry.target == self.containers.main => {
                self.adapter.resize(&self.containers.main);
                self.adapter.resize(&self.containers.pie);
                self.adapter.resize(&self.containers.gauge);
                true
            }
            Some(entry) => {
                debug!("ignoring resize for `{}`", entry.target);
                false
            }
            None => false,
        }
    }
}
