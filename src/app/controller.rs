use std::sync::Arc;

use log::{debug, info, warn};

use crate::app::state::{
    filter_by_market_cap, Loaded, LoadedIndicators, LoadedProfile, LoadedSeries,
    RequestSequence, SelectOption, Selector,
};
use crate::config::{ChartOption, Config};
use crate::error::{AppError, Result};
use crate::fetch::{
    AggregateIndicators, CompanyProfile, FetchDispatch, FetchEvent, FetchResult, Symbol,
    TimeSeries,
};
use crate::ui::adapter::{ChartEngine, Theme};
use crate::ui::composer::ViewComposer;
use crate::ui::notify::Notifier;
use crate::ui::observer::ResizeEntry;
use crate::utils::format_market_cap;

pub const FILTERED_MESSAGE: &str = "List filtered.";

/// What happened to a fetch result handed to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    /// A newer selection was made after this request was issued.
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOutcome {
    pub visible: usize,
    pub selected: String,
    pub reloaded: bool,
}

/// Owns the selection state and turns user and fetch events into fetches and redraws.
pub struct DashboardController<E: ChartEngine, D: FetchDispatch, N: Notifier> {
    composer: ViewComposer<E>,
    fetcher: D,
    notifier: N,
    symbols: Vec<Symbol>,
    symbol_select: Selector<String>,
    chart_select: Selector<ChartOption>,
    market_cap_select: Selector<f64>,
    active: Option<String>,
    sequence: RequestSequence,
    series: Option<LoadedSeries>,
    indicators: Option<LoadedIndicators>,
    profile: Option<LoadedProfile>,
    picks_loading: bool,
    pending: usize,
}

impl<E: ChartEngine, D: FetchDispatch, N: Notifier> DashboardController<E, D, N> {
    /// Build the controller and mount the charts with the first chart option's theme.
    pub fn new(config: &Config, engine: E, fetcher: D, notifier: N) -> Self {
        let chart_select = Selector::new(
            config
                .chart_options
                .iter()
                .map(|option| SelectOption::new(option.label.clone(), option.clone()))
                .collect(),
        );
        let market_cap_select = Selector::new(
            config
                .market_cap_options
                .iter()
                .map(|cap| SelectOption::new(format_market_cap(*cap), *cap))
                .collect(),
        );

        let mut composer = ViewComposer::new(engine, config.containers.clone());
        let theme = chart_select
            .selected_value()
            .map(|option| option.theme)
            .unwrap_or(Theme::Dark);
        composer.mount(theme);

        Self {
            composer,
            fetcher,
            notifier,
            symbols: Vec::new(),
            symbol_select: Selector::default(),
            chart_select,
            market_cap_select,
            active: None,
            sequence: RequestSequence::default(),
            series: None,
            indicators: None,
            profile: None,
            picks_loading: false,
            pending: 0,
        }
    }

    /// Request the top picks. Also used to reload them.
    pub fn start(&mut self) {
        info!("loading top picks");
        self.picks_loading = true;
        self.notifier.busy("Loading top picks");
        self.fetcher.load_top_picks();
    }

    pub fn handle_event(&mut self, event: FetchEvent) -> Result<Delivery> {
        match event {
            FetchEvent::TopPicks(result) => self.on_top_picks(result).map(|_| Delivery::Applied),
            FetchEvent::Series {
                seq,
                symbol,
                result,
            } => self.on_series(seq, symbol, result),
            FetchEvent::Indicators {
                seq,
                symbol,
                result,
            } => self.on_indicators(seq, symbol, result),
            FetchEvent::Profile {
                seq,
                symbol,
                result,
            } => self.on_profile(seq, symbol, result),
        }
    }

    /// Store a fresh symbol set, show all of it, and switch to its first entry.
    pub fn on_top_picks(&mut self, result: FetchResult<Vec<Symbol>>) -> Result<u64> {
        self.picks_loading = false;
        self.settle_spinner();

        let symbols = match result {
            Ok(symbols) if symbols.is_empty() => return Err(self.report(AppError::empty("symbols"))),
            Ok(symbols) => symbols,
            Err(err) => return Err(self.report(err)),
        };
        info!("received {} top picks", symbols.len());

        self.symbols = symbols;
        self.symbol_select
            .replace(symbol_options(self.symbols.iter()));
        self.market_cap_select.select(0);

        let first = self.symbols[0].ticker.clone();
        self.change_symbol(&first)
    }

    /// Make `ticker` the active symbol and request its data. Returns the request sequence number.
    pub fn change_symbol(&mut self, ticker: &str) -> Result<u64> {
        if !self.symbols.iter().any(|symbol| symbol.ticker == ticker) {
            return Err(self.report(AppError::message(format!("unknown symbol `{}`", ticker))));
        }

        if let Some(index) = self
            .symbol_select
            .options()
            .iter()
            .position(|option| option.value == ticker)
        {
            self.symbol_select.select(index);
        }

        let seq = self.sequence.next();
        debug!("symbol change to {} (seq {})", ticker, seq);
        self.active = Some(ticker.to_string());
        self.pending = 3;
        self.notifier.busy(&format!("Loading {}", ticker));
        self.fetcher.load_series(seq, ticker);
        self.fetcher.load_indicators(seq, ticker);
        self.fetcher.load_profile(seq, ticker);
        Ok(seq)
    }

    /// Symbol selector change. `None` when the option was already active.
    pub fn select_symbol_option(&mut self, index: usize) -> Result<Option<u64>> {
        let Some(ticker) = self
            .symbol_select
            .options()
            .get(index)
            .map(|option| option.value.clone())
        else {
            return Err(self.report(AppError::message(format!(
                "no symbol option at position {}",
                index
            ))));
        };

        if self.active.as_deref() == Some(ticker.as_str()) {
            return Ok(None);
        }
        self.change_symbol(&ticker).map(Some)
    }

    pub fn on_series(
        &mut self,
        seq: u64,
        symbol: String,
        result: FetchResult<TimeSeries>,
    ) -> Result<Delivery> {
        if !self.accept(seq, &symbol, "series") {
            return Ok(Delivery::Stale);
        }

        let series = match result {
            Ok(series) if series.is_empty() => {
                return Err(self.report(AppError::empty(format!("price history for {}", symbol))))
            }
            Ok(series) => series,
            Err(err) => return Err(self.report(err)),
        };
        debug!("{} candles for {}", series.len(), symbol);
        let loaded = Loaded::new(symbol, series);
        if let Some(option) = self.chart_select.selected_value() {
            self.composer
                .redraw_main(&loaded.symbol, Arc::clone(&loaded.data), option.chart_type);
        }
        self.series = Some(loaded);
        Ok(Delivery::Applied)
    }

    pub fn on_indicators(
        &mut self,
        seq: u64,
        symbol: String,
        result: FetchResult<AggregateIndicators>,
    ) -> Result<Delivery> {
        if !self.accept(seq, &symbol, "indicators") {
            return Ok(Delivery::Stale);
        }

        let indicators = result.map_err(|err| self.report(err))?;
        self.composer.redraw_aux(&symbol, &indicators);
        self.indicators = Some(Loaded::new(symbol, indicators));
        Ok(Delivery::Applied)
    }

    /// Company profile for the profile table. A failure leaves the table on the top-pick fields.
    pub fn on_profile(
        &mut self,
        seq: u64,
        symbol: String,
        result: FetchResult<CompanyProfile>,
    ) -> Result<Delivery> {
        if !self.accept(seq, &symbol, "profile") {
            return Ok(Delivery::Stale);
        }

        let profile = result.map_err(|err| self.report(err))?;
        self.profile = Some(Loaded::new(symbol, profile));
        Ok(Delivery::Applied)
    }

    /// Chart type selector change: recreate the main chart with the option's theme and redraw
    /// it from the cached series. Returns `false` when the option was already selected.
    pub fn select_chart_option(&mut self, index: usize) -> Result<bool> {
        if self.chart_select.position() == Some(index) {
            return Ok(false);
        }
        if !self.chart_select.select(index) {
            return Err(self.report(AppError::message(format!(
                "no chart option at position {}",
                index
            ))));
        }

        let Some(option) = self.chart_select.selected_value().cloned() else {
            return Ok(false);
        };
        info!("chart option changed to {}", option.label);
        self.composer.replace_main_chart(option.theme);

        if let Some(cached) = self.cached_series() {
            let symbol = cached.symbol.clone();
            let data = Arc::clone(&cached.data);
            self.composer.redraw_main(&symbol, data, option.chart_type);
        }
        Ok(true)
    }

    /// Narrow the symbol selector to symbols with at least `threshold` market capitalization.
    /// Nothing changes when no symbol qualifies.
    pub fn change_min_market_cap(&mut self, threshold: f64) -> Result<FilterOutcome> {
        let filtered = filter_by_market_cap(&self.symbols, threshold);
        let visible = filtered.len();
        let first = filtered.first().map(|symbol| symbol.ticker.clone());
        let options = symbol_options(filtered.into_iter());
        let Some(first) = first else {
            return Err(self.report(AppError::EmptyFilterResult { threshold }));
        };

        self.symbol_select.replace(options);

        let reloaded = self.active.as_deref() != Some(first.as_str());
        if reloaded {
            self.change_symbol(&first)?;
        }

        self.notifier.success(FILTERED_MESSAGE);
        Ok(FilterOutcome {
            visible,
            selected: first,
            reloaded,
        })
    }

    /// Market-cap selector change. The selector only moves when the filter succeeds.
    pub fn select_market_cap_option(&mut self, index: usize) -> Result<FilterOutcome> {
        let Some(threshold) = self
            .market_cap_select
            .options()
            .get(index)
            .map(|option| option.value)
        else {
            return Err(self.report(AppError::message(format!(
                "no market cap option at position {}",
                index
            ))));
        };

        let outcome = self.change_min_market_cap(threshold)?;
        self.market_cap_select.select(index);
        Ok(outcome)
    }

    pub fn on_container_resize(&mut self, entries: &[ResizeEntry]) -> bool {
        self.composer.on_container_resize(entries)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn active_symbol(&self) -> Option<&Symbol> {
        let active = self.active.as_deref()?;
        self.symbols.iter().find(|symbol| symbol.ticker == active)
    }

    pub fn symbol_selector(&self) -> &Selector<String> {
        &self.symbol_select
    }

    pub fn chart_selector(&self) -> &Selector<ChartOption> {
        &self.chart_select
    }

    pub fn market_cap_selector(&self) -> &Selector<f64> {
        &self.market_cap_select
    }

    /// Series of the active symbol, if it has arrived.
    pub fn cached_series(&self) -> Option<&LoadedSeries> {
        let active = self.active.as_deref()?;
        self.series.as_ref().filter(|loaded| loaded.is_for(active))
    }

    pub fn cached_indicators(&self) -> Option<&LoadedIndicators> {
        let active = self.active.as_deref()?;
        self.indicators.as_ref().filter(|loaded| loaded.is_for(active))
    }

    pub fn cached_profile(&self) -> Option<&LoadedProfile> {
        let active = self.active.as_deref()?;
        self.profile.as_ref().filter(|loaded| loaded.is_for(active))
    }

    pub fn is_loading(&self) -> bool {
        self.picks_loading || self.pending > 0
    }

    pub fn composer(&self) -> &ViewComposer<E> {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ViewComposer<E> {
        &mut self.composer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn fetcher(&self) -> &D {
        &self.fetcher
    }

    fn accept(&mut self, seq: u64, symbol: &str, what: &str) -> bool {
        if !self.sequence.is_current(seq) {
            debug!(
                "dropping stale {} for {} (seq {}, latest {})",
                what,
                symbol,
                seq,
                self.sequence.latest()
            );
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        self.settle_spinner();
        true
    }

    fn settle_spinner(&mut self) {
        if !self.is_loading() {
            self.notifier.idle();
        }
    }

    fn report(&mut self, err: AppError) -> AppError {
        warn!("{}", err);
        self.notifier.error(&err.to_string());
        err
    }
}

fn symbol_options<'a>(symbols: impl Iterator<Item = &'a Symbol>) -> Vec<SelectOption<String>> {
    symbols
        .map(|symbol| {
            let text = match symbol.market_capitalization {
                Some(cap) => format!("{} ({})", symbol.ticker, format_market_cap(cap)),
                None => symbol.ticker.clone(),
            };
            SelectOption::new(text, symbol.ticker.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ratatui::layout::Rect;

    use super::*;
    use crate::fetch::dispatch::testing::{RecordingDispatch, Request};
    use crate::fetch::Ohlc;
    use crate::ui::adapter::testing::{EngineCall, RecordingEngine};
    use crate::ui::adapter::ContainerId;
    use crate::ui::notify::testing::{Note, RecordingNotifier};

    type Controller = DashboardController<RecordingEngine, RecordingDispatch, RecordingNotifier>;

    fn controller() -> Controller {
        DashboardController::new(
            &Config::builtin(),
            RecordingEngine::default(),
            RecordingDispatch::default(),
            RecordingNotifier::default(),
        )
    }

    fn picks() -> Vec<Symbol> {
        vec![
            Symbol::new("AAA", Some(10.0)),
            Symbol::new("BBB", Some(5.0)),
            Symbol::new("CCC", Some(20.0)),
        ]
    }

    fn series() -> TimeSeries {
        let mut series = TimeSeries::new();
        series.push(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            Ohlc {
                open: 10.0,
                high: 12.0,
                low: 9.5,
                close: 11.0,
            },
            1_000.0,
        );
        series
    }

    fn loaded_controller() -> (Controller, u64) {
        let mut controller = controller();
        controller.start();
        let seq = controller.on_top_picks(Ok(picks())).unwrap();
        (controller, seq)
    }

    fn engine(controller: &Controller) -> &RecordingEngine {
        controller.composer().adapter().engine()
    }

    fn main_container() -> ContainerId {
        ContainerId::new("main-chart")
    }

    #[test]
    fn top_picks_populate_selector_and_load_first_symbol() {
        let (controller, seq) = loaded_controller();

        let tickers: Vec<&str> = controller
            .symbol_selector()
            .options()
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(tickers, vec!["AAA", "BBB", "CCC"]);
        assert_eq!(controller.symbol_selector().position(), Some(0));
        assert_eq!(controller.active_symbol().map(|s| s.ticker.as_str()), Some("AAA"));
        assert_eq!(
            controller.fetcher().requests,
            vec![
                Request::TopPicks,
                Request::Series(seq, "AAA".into()),
                Request::Indicators(seq, "AAA".into()),
                Request::Profile(seq, "AAA".into()),
            ]
        );
        assert!(controller.is_loading());
    }

    #[test]
    fn failed_top_picks_leave_state_untouched() {
        let mut controller = controller();
        controller.start();

        let err = controller
            .on_top_picks(Err(AppError::network("connection refused")))
            .unwrap_err();

        assert!(matches!(err, AppError::Network(_)));
        assert!(controller.symbols().is_empty());
        assert!(controller.active_symbol().is_none());
        assert_eq!(controller.notifier().errors().len(), 1);
        assert!(!controller.is_loading());

        let err = controller.on_top_picks(Ok(Vec::new())).unwrap_err();
        assert!(matches!(err, AppError::EmptyResult(_)));
    }

    #[test]
    fn filter_example_reloads_first_filtered_symbol() {
        let (mut controller, _) = loaded_controller();
        let seq_b = controller.select_symbol_option(1).unwrap().unwrap();
        controller
            .on_series(seq_b, "BBB".into(), Ok(series()))
            .unwrap();

        let outcome = controller.change_min_market_cap(10.0).unwrap();

        assert_eq!(
            outcome,
            FilterOutcome {
                visible: 2,
                selected: "AAA".into(),
                reloaded: true,
            }
        );
        let visible: Vec<&str> = controller
            .symbol_selector()
            .options()
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(visible, vec!["AAA", "CCC"]);

        let (seq_a, symbol) = controller.fetcher().series_requests().last().cloned().unwrap();
        assert_eq!(symbol, "AAA");
        controller.on_series(seq_a, symbol, Ok(series())).unwrap();

        assert_eq!(engine(&controller).drawn_symbols(), vec!["BBB", "AAA"]);
        assert_eq!(controller.notifier().successes(), vec![FILTERED_MESSAGE]);
    }

    #[test]
    fn filter_keeping_active_symbol_does_not_refetch() {
        let (mut controller, _) = loaded_controller();
        let before = controller.fetcher().requests.len();

        let outcome = controller.change_min_market_cap(10.0).unwrap();

        assert!(!outcome.reloaded);
        assert_eq!(controller.fetcher().requests.len(), before);
        assert_eq!(controller.notifier().successes(), vec![FILTERED_MESSAGE]);
    }

    #[test]
    fn empty_filter_fails_without_side_effects() {
        let (mut controller, _) = loaded_controller();
        let requests = controller.fetcher().requests.len();
        let engine_calls = engine(&controller).calls.len();

        let err = controller.select_market_cap_option(4).unwrap_err();

        assert!(matches!(err, AppError::EmptyFilterResult { .. }));
        assert_eq!(controller.active_symbol().map(|s| s.ticker.as_str()), Some("AAA"));
        assert_eq!(controller.symbol_selector().len(), 3);
        assert_eq!(controller.market_cap_selector().position(), Some(0));
        assert_eq!(controller.fetcher().requests.len(), requests);
        assert_eq!(engine(&controller).calls.len(), engine_calls);
        assert_eq!(controller.notifier().errors().len(), 1);
        assert!(controller.notifier().successes().is_empty());
    }

    #[test]
    fn older_response_arriving_last_is_dropped() {
        let (mut controller, _) = loaded_controller();
        let seq_a = controller.change_symbol("AAA").unwrap();
        let seq_b = controller.change_symbol("BBB").unwrap();

        assert_eq!(
            controller.on_series(seq_b, "BBB".into(), Ok(series())).unwrap(),
            Delivery::Applied
        );
        assert_eq!(
            controller.on_series(seq_a, "AAA".into(), Ok(series())).unwrap(),
            Delivery::Stale
        );
        assert_eq!(
            controller
                .on_indicators(seq_a, "AAA".into(), Ok(AggregateIndicators::default()))
                .unwrap(),
            Delivery::Stale
        );

        assert_eq!(engine(&controller).drawn_symbols(), vec!["BBB"]);
        assert_eq!(
            controller.cached_series().map(|s| s.symbol.as_str()),
            Some("BBB")
        );
    }

    #[test]
    fn spinner_clears_once_every_request_lands() {
        let (mut controller, seq) = loaded_controller();

        controller.on_series(seq, "AAA".into(), Ok(series())).unwrap();
        assert!(controller.is_loading());
        controller
            .on_indicators(seq, "AAA".into(), Ok(AggregateIndicators::default()))
            .unwrap();
        assert!(controller.is_loading());
        controller
            .on_profile(seq, "AAA".into(), Ok(CompanyProfile::default()))
            .unwrap();

        assert!(!controller.is_loading());
        assert_eq!(controller.notifier().notes.last(), Some(&Note::Idle));
    }

    #[test]
    fn chart_type_change_keeps_one_handle_and_redraws_from_cache() {
        let (mut controller, seq) = loaded_controller();
        controller.on_series(seq, "AAA".into(), Ok(series())).unwrap();
        let old = controller
            .composer()
            .adapter()
            .handle(&main_container())
            .unwrap();
        let requests = controller.fetcher().requests.len();
        let mark = engine(&controller).calls.len();

        assert!(controller.select_chart_option(1).unwrap());

        let new = controller
            .composer()
            .adapter()
            .handle(&main_container())
            .unwrap();
        assert_ne!(old, new);
        assert_eq!(engine(&controller).live_for(&main_container()), 1);
        assert_eq!(
            engine(&controller).calls[mark..],
            [
                EngineCall::Dispose(old),
                EngineCall::Init(main_container(), Theme::Light, new),
                EngineCall::Draw(new, "price:AAA".into()),
            ]
        );
        assert_eq!(controller.fetcher().requests.len(), requests);
        assert!(!controller.select_chart_option(1).unwrap());
    }

    #[test]
    fn chart_type_change_before_data_only_swaps_handle() {
        let (mut controller, seq) = loaded_controller();

        controller.select_chart_option(2).unwrap();
        assert!(engine(&controller).drawn_symbols().is_empty());

        controller.on_series(seq, "AAA".into(), Ok(series())).unwrap();
        let handle = controller
            .composer()
            .adapter()
            .handle(&main_container())
            .unwrap();
        assert_eq!(
            engine(&controller).calls.last(),
            Some(&EngineCall::Draw(handle, "price:AAA".into()))
        );
    }

    #[test]
    fn series_error_is_reported_and_keeps_previous_chart() {
        let (mut controller, seq) = loaded_controller();
        controller.on_series(seq, "AAA".into(), Ok(series())).unwrap();

        let seq = controller.change_symbol("CCC").unwrap();
        let err = controller
            .on_series(seq, "CCC".into(), Err(AppError::network("503")))
            .unwrap_err();

        assert!(matches!(err, AppError::Network(_)));
        assert_eq!(controller.notifier().errors().len(), 1);
        assert_eq!(engine(&controller).drawn_symbols(), vec!["AAA"]);
    }

    #[test]
    fn empty_series_is_reported_and_keeps_previous_chart() {
        let (mut controller, seq) = loaded_controller();
        controller.on_series(seq, "AAA".into(), Ok(series())).unwrap();
        let mark = engine(&controller).calls.len();

        let seq = controller.change_symbol("CCC").unwrap();
        let decoded = crate::fetch::history::decode_series("[]", "CCC");
        let err = controller.on_series(seq, "CCC".into(), decoded).unwrap_err();
        assert!(matches!(err, AppError::EmptyResult(_)));

        let err = controller
            .on_series(seq, "CCC".into(), Ok(TimeSeries::new()))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyResult(_)));

        assert_eq!(controller.notifier().errors().len(), 2);
        assert_eq!(engine(&controller).calls.len(), mark);
        assert_eq!(engine(&controller).drawn_symbols(), vec!["AAA"]);
        assert!(controller.cached_series().is_none());
    }

    #[test]
    fn profile_is_kept_only_for_the_active_symbol() {
        let (mut controller, seq_a) = loaded_controller();
        let profile = CompanyProfile {
            fields: vec![("Name".to_string(), "Alpha Corp".to_string())],
        };

        assert_eq!(
            controller
                .on_profile(seq_a, "AAA".into(), Ok(profile))
                .unwrap(),
            Delivery::Applied
        );
        assert_eq!(
            controller
                .cached_profile()
                .and_then(|loaded| loaded.data.get("Name")),
            Some("Alpha Corp")
        );

        let seq_b = controller.change_symbol("BBB").unwrap();
        assert!(controller.cached_profile().is_none());
        assert_eq!(
            controller
                .on_profile(seq_a, "AAA".into(), Ok(CompanyProfile::default()))
                .unwrap(),
            Delivery::Stale
        );
        assert!(controller
            .fetcher()
            .requests
            .contains(&Request::Profile(seq_b, "BBB".into())));
    }

    #[test]
    fn resize_for_other_container_makes_no_adapter_calls() {
        let (mut controller, _) = loaded_controller();
        let mark = engine(&controller).calls.len();

        let stray = ResizeEntry::new(ContainerId::new("elsewhere"), Rect::new(0, 0, 10, 4));
        assert!(!controller.on_container_resize(&[stray]));
        assert_eq!(engine(&controller).calls.len(), mark);

        let main = ResizeEntry::new(main_container(), Rect::new(0, 0, 100, 30));
        assert!(controller.on_container_resize(&[main]));
        assert_eq!(engine(&controller).calls.len(), mark + 3);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let (mut controller, _) = loaded_controller();
        assert!(controller.change_symbol("ZZZ").is_err());
        assert!(controller.select_symbol_option(99).is_err());
        assert_eq!(controller.active_symbol().map(|s| s.ticker.as_str()), Some("AAA"));
        assert_eq!(controller.select_symbol_option(0).unwrap(), None);
    }
}
