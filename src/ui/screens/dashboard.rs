use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::Frame;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};

use crate::app::controller::DashboardController;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{FetchDispatch, FetchEvent, Fetcher, MarketDataSource};
use crate::ui::adapter::ChartEngine;
use crate::ui::components::{
    render_profile, render_selector, render_status, render_surface, TerminalGuard,
};
use crate::ui::engine::TerminalEngine;
use crate::ui::layout::DashboardLayout;
use crate::ui::notify::{Notifier, StatusBar};
use crate::ui::observer::ResizeObserver;

const HINT: &str = "Tab focus · ←/→ change · r reload · q quit";

/// Which selector the arrow keys drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Symbol,
    ChartType,
    MarketCap,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Symbol => Focus::ChartType,
            Focus::ChartType => Focus::MarketCap,
            Focus::MarketCap => Focus::Symbol,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Symbol => Focus::MarketCap,
            Focus::ChartType => Focus::Symbol,
            Focus::MarketCap => Focus::ChartType,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Run the dashboard until the user quits. Fetches run on the current tokio runtime.
pub async fn run_dashboard<S: MarketDataSource>(config: &Config, source: S) -> Result<()> {
    let (fetcher, mut events) = Fetcher::new(source, Handle::current());
    let mut controller = DashboardController::new(
        config,
        TerminalEngine::new(),
        fetcher,
        StatusBar::new(config.snackbar_ttl),
    );
    let mut observer = ResizeObserver::default();
    observer.observe(config.containers.main.clone());
    let mut focus = Focus::Symbol;

    let mut guard = TerminalGuard::new()?;
    controller.start();

    loop {
        drain_events(&mut controller, &mut events);
        controller.notifier_mut().tick(Instant::now());

        let layout = DashboardLayout::compute(guard.size()?, &config.containers);
        for (container, rect) in layout.container_rects() {
            controller
                .composer_mut()
                .adapter_mut()
                .engine_mut()
                .set_viewport(container, rect);
        }
        let entries = observer.poll(|container| layout.rect_for(container));
        if !entries.is_empty() {
            controller.on_container_resize(&entries);
        }

        guard.draw(|f| render_dashboard(f, &layout, &controller, focus))?;

        if event::poll(config.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key(&mut controller, &mut focus, key) == KeyOutcome::Quit
                {
                    break;
                }
            }
        }
    }

    guard.restore()?;
    info!("dashboard closed");
    Ok(())
}

/// Hand every queued fetch result to the controller. Failures were already shown to the user.
pub fn drain_events<E, D, N>(
    controller: &mut DashboardController<E, D, N>,
    events: &mut UnboundedReceiver<FetchEvent>,
) -> usize
where
    E: ChartEngine,
    D: FetchDispatch,
    N: Notifier,
{
    let mut handled = 0;
    loop {
        match events.try_recv() {
            Ok(event) => {
                handled += 1;
                if let Err(err) = controller.handle_event(event) {
                    debug!("fetch result not applied: {}", err);
                }
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
    handled
}

pub fn handle_key<E, D, N>(
    controller: &mut DashboardController<E, D, N>,
    focus: &mut Focus,
    key: KeyEvent,
) -> KeyOutcome
where
    E: ChartEngine,
    D: FetchDispatch,
    N: Notifier,
{
    let step = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyOutcome::Quit
        }
        KeyCode::Tab => {
            *focus = focus.next();
            return KeyOutcome::Continue;
        }
        KeyCode::BackTab => {
            *focus = focus.prev();
            return KeyOutcome::Continue;
        }
        KeyCode::Char('r') => {
            controller.start();
            return KeyOutcome::Continue;
        }
        KeyCode::Left | KeyCode::Char('h') => -1,
        KeyCode::Right | KeyCode::Char('l') => 1,
        _ => return KeyOutcome::Continue,
    };

    let outcome = match *focus {
        Focus::Symbol => match controller.symbol_selector().neighbour(step) {
            Some(index) => controller.select_symbol_option(index).map(|_| ()),
            None => Ok(()),
        },
        Focus::ChartType => match controller.chart_selector().neighbour(step) {
            Some(index) => controller.select_chart_option(index).map(|_| ()),
            None => Ok(()),
        },
        Focus::MarketCap => match controller.market_cap_selector().neighbour(step) {
            Some(index) => controller.select_market_cap_option(index).map(|_| ()),
            None => Ok(()),
        },
    };
    if let Err(err) = outcome {
        debug!("selector change rejected: {}", err);
    }
    KeyOutcome::Continue
}

pub fn render_dashboard<D: FetchDispatch>(
    f: &mut Frame<'_>,
    layout: &DashboardLayout,
    controller: &DashboardController<TerminalEngine, D, StatusBar>,
    focus: Focus,
) {
    render_selector(
        f,
        layout.selectors[0],
        "Symbol",
        controller.symbol_selector(),
        focus == Focus::Symbol,
    );
    render_selector(
        f,
        layout.selectors[1],
        "Chart type",
        controller.chart_selector(),
        focus == Focus::ChartType,
    );
    render_selector(
        f,
        layout.selectors[2],
        "Min market cap",
        controller.market_cap_selector(),
        focus == Focus::MarketCap,
    );

    let composer = controller.composer();
    let engine = composer.adapter().engine();
    let containers = composer.containers();
    render_surface(
        f,
        layout.main,
        engine.surface_for(&containers.main),
        "Price chart",
    );
    render_surface(f, layout.pie, engine.surface_for(&containers.pie), "Signals");
    render_surface(f, layout.gauge, engine.surface_for(&containers.gauge), "ADX");
    render_profile(
        f,
        layout.profile,
        "Profile",
        controller.active_symbol(),
        controller
            .cached_profile()
            .map(|loaded| loaded.data.as_ref()),
    );
    render_status(f, layout.status, controller.notifier(), HINT);
}
