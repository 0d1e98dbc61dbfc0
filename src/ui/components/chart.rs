use std::f64::consts::TAU;

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Rectangle},
        Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Sparkline,
    },
};

use crate::fetch::Candle;
use crate::ui::adapter::{ChartDataset, ChartType, GaugeData, PieData, PriceChartData};
use crate::ui::components::utils::split_vertical;
use crate::ui::engine::Surface;
use crate::ui::styles::{palette, surface_style, Palette};
use crate::utils::format_axis_date;

const BODY_EPSILON: f64 = 1e-4;
const PRICE_TICKS: usize = 7;
const DATE_TICKS: usize = 6;
const VOLUME_HEIGHT: u16 = 4;
/// Angular step used when filling pie sectors with radial lines.
const PIE_STEP: f64 = 0.02;

/// Paint whatever the surface last received. `fallback` titles an empty container.
pub fn render_surface(f: &mut Frame<'_>, area: Rect, surface: Option<&Surface>, fallback: &str) {
    let Some(surface) = surface else {
        render_message(f, area, fallback, "No chart", None);
        return;
    };
    let colors = palette(surface.theme);

    match &surface.dataset {
        None => render_message(f, area, fallback, "Loading…", Some(&colors)),
        Some(ChartDataset::Price(data)) => {
            let fit_width = if surface.size.width > 0 {
                surface.size.width
            } else {
                area.width
            };
            match data.chart_type {
                ChartType::Candlestick => render_candlestick(f, area, data, &colors, fit_width),
                ChartType::Line => render_line(f, area, data, &colors, fit_width),
            }
        }
        Some(ChartDataset::Pie(data)) => render_pie(f, area, data, &colors),
        Some(ChartDataset::Gauge(data)) => render_gauge(f, area, data, &colors),
    }
}

fn themed_block<'a>(title: String, colors: Option<&Palette>) -> Block<'a> {
    let block = Block::default().borders(Borders::ALL).title(title);
    match colors {
        Some(colors) => block.style(surface_style(colors)),
        None => block,
    }
}

fn render_message(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    message: &str,
    colors: Option<&Palette>,
) {
    f.render_widget(
        Paragraph::new(message.to_string())
            .alignment(Alignment::Center)
            .block(themed_block(title.to_string(), colors)),
        area,
    );
}

fn render_candlestick(
    f: &mut Frame<'_>,
    area: Rect,
    data: &PriceChartData,
    colors: &Palette,
    fit_width: u16,
) {
    let candles = data.series.candles();
    if candles.is_empty() {
        render_message(
            f,
            area,
            &data.symbol,
            "No historical data returned for this symbol.",
            Some(colors),
        );
        return;
    }

    let draw_series = compress_to_width(&candles, fit_width);
    let title = price_title(data, &candles);

    let show_volume = area.height > VOLUME_HEIGHT + 6
        && draw_series.iter().any(|candle| candle.volume > 0.0);
    let (chart_area, volume_area) = if show_volume {
        let parts = split_vertical(
            area,
            &[Constraint::Min(6), Constraint::Length(VOLUME_HEIGHT)],
        );
        (parts[0], Some(parts[1]))
    } else {
        (area, None)
    };

    let Some((y_min, y_max)) = data.series.price_range() else {
        return;
    };

    let series_len = draw_series.len();
    let width_px = chart_area.width.max(1) as f64;
    let height_px = chart_area.height.max(1) as f64;

    let left_margin = 9.0;
    let axis_x = left_margin;
    let available_width = (width_px - left_margin - 1.0).max(1.0);
    let x_scale = if series_len > 1 {
        available_width / (series_len - 1) as f64
    } else {
        0.0
    };
    let base_width = if series_len > 1 {
        x_scale
    } else {
        available_width
    };
    let half_body = (base_width * 0.35).clamp(0.03, 0.3);
    let half_wick = half_body.min(0.2).max(0.03);
    let axis_x_end = axis_x + available_width;

    let axis_y = 1.0;
    let available_height = (height_px - 2.0).max(1.0);
    let price_range = (y_max - y_min).max(0.01);
    let price_scale = available_height / price_range;
    let axis_y_top = axis_y + available_height;

    let price_labels: Vec<(f64, String)> = compute_price_ticks(y_min, y_max, PRICE_TICKS)
        .into_iter()
        .filter(|value| value.is_finite())
        .map(|value| (value, format!("{:.2}", value)))
        .collect();
    let date_labels: Vec<(f64, String)> = compute_date_ticks(&draw_series, DATE_TICKS)
        .into_iter()
        .map(|(idx, label)| (axis_x + idx as f64 * x_scale, label))
        .collect();

    let colors = *colors;
    let canvas = Canvas::default()
        .block(themed_block(title, Some(&colors)))
        .background_color(colors.background)
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, width_px])
        .y_bounds([-1.0, height_px])
        .paint(move |ctx| {
            for (idx, candle) in draw_series.iter().enumerate() {
                let x = axis_x + idx as f64 * x_scale;
                let low = axis_y + (candle.low - y_min) * price_scale;
                let high = axis_y + (candle.high - y_min) * price_scale;
                let open = axis_y + (candle.open - y_min) * price_scale;
                let close = axis_y + (candle.close - y_min) * price_scale;
                let color = if candle.close >= candle.open {
                    colors.up
                } else {
                    colors.down
                };

                ctx.draw(&CanvasLine {
                    x1: x,
                    y1: low,
                    x2: x,
                    y2: high,
                    color,
                });

                let body_top = open.max(close);
                let body_bottom = open.min(close);
                if (body_top - body_bottom).abs() < BODY_EPSILON {
                    ctx.draw(&CanvasLine {
                        x1: x - half_wick,
                        y1: body_top,
                        x2: x + half_wick,
                        y2: body_top,
                        color,
                    });
                } else {
                    ctx.draw(&Rectangle {
                        x: x - half_body,
                        y: body_bottom,
                        width: half_body * 2.0,
                        height: body_top - body_bottom,
                        color,
                    });
                }
            }

            ctx.layer();
            ctx.draw(&CanvasLine {
                x1: axis_x,
                y1: axis_y,
                x2: axis_x_end,
                y2: axis_y,
                color: colors.axis,
            });
            ctx.draw(&CanvasLine {
                x1: axis_x,
                y1: axis_y,
                x2: axis_x,
                y2: axis_y_top,
                color: colors.axis,
            });

            for (value, label) in &price_labels {
                let y = axis_y + (value - y_min) * price_scale;
                if y < axis_y - 0.001 || y > axis_y_top + 0.001 {
                    continue;
                }
                ctx.print(0.0, y, label.clone().fg(colors.foreground));
            }
            for (x, label) in &date_labels {
                ctx.print(*x, -1.0, label.clone().fg(colors.foreground));
            }
        });
    f.render_widget(canvas, chart_area);

    if let Some(volume_area) = volume_area {
        render_volume(f, volume_area, &compress_to_width(&candles, volume_area.width / 2), &colors);
    }
}

fn render_volume(f: &mut Frame<'_>, area: Rect, candles: &[Candle], colors: &Palette) {
    let volumes: Vec<u64> = candles
        .iter()
        .map(|candle| candle.volume.max(0.0).round() as u64)
        .collect();
    f.render_widget(
        Sparkline::default()
            .block(themed_block("Volume".to_string(), Some(colors)))
            .style(Style::default().fg(colors.axis))
            .data(&volumes),
        area,
    );
}

fn render_line(
    f: &mut Frame<'_>,
    area: Rect,
    data: &PriceChartData,
    colors: &Palette,
    fit_width: u16,
) {
    let candles = data.series.candles();
    if candles.is_empty() {
        render_message(
            f,
            area,
            &data.symbol,
            "No historical data returned for this symbol.",
            Some(colors),
        );
        return;
    }

    let draw_series = compress_to_width(&candles, fit_width);
    let points: Vec<(f64, f64)> = draw_series
        .iter()
        .enumerate()
        .map(|(idx, candle)| (idx as f64, candle.close))
        .collect();
    let (y_min, y_max) = points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), (_, close)| (lo.min(*close), hi.max(*close)),
    );
    let ticks = compute_price_ticks(y_min, y_max, 3);
    let (lo, hi) = (ticks[0], ticks[ticks.len() - 1]);

    let date_labels: Vec<Span> = compute_date_ticks(&draw_series, 3)
        .into_iter()
        .map(|(_, label)| Span::from(label))
        .collect();

    let dataset = Dataset::default()
        .name(data.symbol.clone())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors.line))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(themed_block(price_title(data, &candles), Some(colors)))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(colors.axis))
                .bounds([0.0, (points.len().max(2) - 1) as f64])
                .labels(date_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(colors.axis))
                .bounds([lo, hi])
                .labels(
                    ticks
                        .iter()
                        .map(|value| Span::from(format!("{:.2}", value)))
                        .collect(),
                ),
        );
    f.render_widget(chart, area);
}

fn price_title(data: &PriceChartData, candles: &[Candle]) -> String {
    let mut title = format!("{} · {}", data.symbol, data.chart_type.label());
    if let (Some(first), Some(last), Some(close)) =
        (candles.first(), candles.last(), data.series.last_close())
    {
        title.push_str(&format!(
            " · {} sessions {} → {} · last {:.2}",
            candles.len(),
            first.timestamp.format("%Y-%m-%d"),
            last.timestamp.format("%Y-%m-%d"),
            close
        ));
    }
    title
}

fn render_pie(f: &mut Frame<'_>, area: Rect, data: &PieData, colors: &Palette) {
    let sectors = pie_sectors(&data.slices);
    if sectors.is_empty() {
        render_message(f, area, &data.title, "No signals", Some(colors));
        return;
    }

    let parts = split_vertical(area, &[Constraint::Min(3), Constraint::Length(1)]);
    let slice_colors = colors.slices;
    let canvas = Canvas::default()
        .block(themed_block(data.title.clone(), Some(colors)))
        .background_color(colors.background)
        .marker(Marker::Braille)
        .x_bounds([-1.6, 1.6])
        .y_bounds([-1.1, 1.1])
        .paint(move |ctx| {
            for (idx, (start, end)) in sectors.iter().enumerate() {
                let color = slice_colors[idx % slice_colors.len()];
                let mut angle = *start;
                while angle < *end {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: angle.cos(),
                        y2: angle.sin(),
                        color,
                    });
                    angle += PIE_STEP;
                }
            }
        });
    f.render_widget(canvas, parts[0]);

    let legend: Vec<Span> = data
        .slices
        .iter()
        .enumerate()
        .flat_map(|(idx, (label, value))| {
            [
                Span::styled("■ ", Style::default().fg(slice_colors[idx % slice_colors.len()])),
                Span::from(format!("{} {}  ", label, value)),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        parts[1],
    );
}

/// Start and end angle of every slice with a positive value, in slice order.
fn pie_sectors(slices: &[(String, f64)]) -> Vec<(f64, f64)> {
    let total: f64 = slices
        .iter()
        .map(|(_, value)| value.max(0.0))
        .filter(|value| value.is_finite())
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    slices
        .iter()
        .map(|(_, value)| {
            let sweep = if value.is_finite() {
                value.max(0.0) / total * TAU
            } else {
                0.0
            };
            let sector = (start, start + sweep);
            start += sweep;
            sector
        })
        .collect()
}

fn render_gauge(f: &mut Frame<'_>, area: Rect, data: &GaugeData, colors: &Palette) {
    f.render_widget(
        Gauge::default()
            .block(themed_block(data.title.clone(), Some(colors)))
            .gauge_style(Style::default().fg(colors.line).bg(colors.background))
            .ratio(data.ratio())
            .label(format!("{:.1} / {:.0}", data.value, data.max)),
        area,
    );
}

/// Merge neighbouring candles so at most two land in each column of `width`.
fn compress_to_width(candles: &[Candle], width: u16) -> Vec<Candle> {
    let max_points = usize::from(width.max(1)) * 2;
    if candles.len() <= max_points {
        return candles.to_vec();
    }

    let stride = (candles.len() + max_points - 1) / max_points;
    candles
        .chunks(stride)
        .filter_map(|chunk| {
            let (first, last) = (chunk.first()?, chunk.last()?);
            Some(Candle {
                timestamp: last.timestamp,
                open: first.open,
                close: last.close,
                high: chunk.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max),
                low: chunk.iter().map(|c| c.low).fold(f64::INFINITY, f64::min),
                volume: chunk.iter().map(|c| c.volume).sum(),
            })
        })
        .take(max_points)
        .collect()
}

fn compute_price_ticks(min: f64, max: f64, desired: usize) -> Vec<f64> {
    let desired = desired.max(2);
    if !min.is_finite() || !max.is_finite() {
        return vec![0.0, 1.0];
    }

    let mut low = min;
    let mut high = max.max(low + f64::EPSILON);
    if (high - low).abs() < 1e-6 {
        let span = if low.abs() < 1.0 { 1.0 } else { low.abs() * 0.05 };
        low -= span / 2.0;
        high += span / 2.0;
    }

    let step = (high - low) / (desired as f64 - 1.0);
    (0..desired).map(|i| low + step * i as f64).collect()
}

fn compute_date_ticks(candles: &[Candle], desired: usize) -> Vec<(usize, String)> {
    let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
        return Vec::new();
    };
    let last_index = candles.len() - 1;
    if last_index == 0 {
        return vec![(0, format_axis_date(first.timestamp, false, true))];
    }

    let desired = desired.max(2).min(candles.len());
    let step = last_index as f64 / (desired - 1) as f64;
    let mut indices: Vec<usize> = (0..desired)
        .map(|i| ((i as f64 * step).round() as usize).min(last_index))
        .collect();
    indices.sort_unstable();
    indices.dedup();

    let long_span = (last.timestamp - first.timestamp).num_days().abs() > 365;
    indices
        .into_iter()
        .map(|idx| {
            let edge = idx == 0 || idx == last_index;
            (
                idx,
                format_axis_date(candles[idx].timestamp, long_span, edge),
            )
        })
        .collect()
}
