//! Drawing a [`ChartSpec`] with egui_plot.
//!
//! Log axes are drawn in log10 space with `10^v` tick labels; values that
//! cannot be shown on a log axis become NaN. Date x values are plotted as days
//! since 1970-01-01.

use egui::{Align2, Color32};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, Points, Text};

use crate::chart::{days_to_date, ChartKind, ChartSpec, XValue};
use crate::data::selection::Scale;
use crate::events::HoverPayload;

/// Maximum pointer distance, in screen pixels, for a scatter point to count
/// as hovered.
pub const HOVER_RADIUS_PX: f32 = 12.0;

const MARKER_RADIUS: f32 = 3.0;
const SCATTER_RADIUS: f32 = 5.0;

fn to_axis(v: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Linear => v,
        Scale::Log => {
            if v > 0.0 {
                v.log10()
            } else {
                f64::NAN
            }
        }
    }
}

fn from_axis(v: f64, scale: Scale) -> f64 {
    match scale {
        Scale::Linear => v,
        Scale::Log => 10f64.powf(v),
    }
}

fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && !(1e-3..1e6).contains(&a) {
        format!("{:.1e}", v)
    } else if a >= 100.0 || v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.3}", v)
    }
}

/// Transformed `[x, y]` points of one series, in plot coordinates.
fn plot_points(spec: &ChartSpec, x: &[XValue], y: &[Option<f64>]) -> Vec<[f64; 2]> {
    x.iter()
        .zip(y.iter())
        .map(|(x, y)| {
            [
                to_axis(x.as_f64(), spec.x_axis.scale),
                y.map_or(f64::NAN, |v| to_axis(v, spec.y_axis.scale)),
            ]
        })
        .collect()
}

fn has_dates(spec: &ChartSpec) -> bool {
    spec.traces
        .iter()
        .flat_map(|t| t.x.first())
        .any(|x| matches!(x, XValue::Date(_)))
}

/// Build the annotation as a layout job; `**text**` lines are drawn strong.
fn annotation_job(text: &str, color: Color32) -> egui::text::LayoutJob {
    let style = egui::Style::default();
    let mut job = egui::text::LayoutJob::default();
    let lines: Vec<&str> = text.lines().collect();
    for (i, line) in lines.iter().copied().enumerate() {
        let strong = line.strip_prefix("**").and_then(|l| l.strip_suffix("**"));
        let mut body = strong.unwrap_or(line).to_string();
        if i + 1 < lines.len() {
            body.push('\n');
        }
        let mut rich = egui::RichText::new(body).color(color);
        if strong.is_some() {
            rich = rich.strong();
        }
        rich.append_to(&mut job, &style, egui::FontSelection::Default, egui::Align::LEFT);
    }
    job
}

/// Draw `spec` and return the hover payload for the scatter point nearest to
/// the pointer, if any is within [`HOVER_RADIUS_PX`].
///
/// Only scatter charts report hovers. `highlight` names a series to draw with
/// a larger marker.
pub fn draw_chart(
    ui: &mut egui::Ui,
    plot_id: &str,
    spec: &ChartSpec,
    highlight: Option<&str>,
) -> Option<HoverPayload> {
    let margins = spec.margins.map(|m| egui::Margin {
        left: m.left as i8,
        right: m.right as i8,
        top: m.top as i8,
        bottom: m.bottom as i8,
    });
    egui::Frame::NONE
        .inner_margin(margins.unwrap_or_default())
        .show(ui, |ui| draw_plot(ui, plot_id, spec, highlight))
        .inner
}

fn draw_plot(
    ui: &mut egui::Ui,
    plot_id: &str,
    spec: &ChartSpec,
    highlight: Option<&str>,
) -> Option<HoverPayload> {
    let x_scale = spec.x_axis.scale;
    let y_scale = spec.y_axis.scale;
    let dates = has_dates(spec);

    let mut plot = Plot::new(plot_id)
        .allow_scroll(false)
        .show_grid([spec.x_axis.show_grid, spec.y_axis.show_grid])
        .x_axis_formatter(move |mark, _range| {
            if dates {
                days_to_date(mark.value)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            } else {
                format_tick(from_axis(mark.value, x_scale))
            }
        })
        .y_axis_formatter(move |mark, _range| format_tick(from_axis(mark.value, y_scale)))
        .label_formatter(move |name, value| {
            let x = if dates {
                days_to_date(value.x)
                    .map(|d| d.to_string())
                    .unwrap_or_default()
            } else {
                format_tick(from_axis(value.x, x_scale))
            };
            let y = format_tick(from_axis(value.y, y_scale));
            if name.is_empty() {
                format!("x = {x}\ny = {y}")
            } else {
                format!("{name}\nx = {x}\ny = {y}")
            }
        });
    if let Some(h) = spec.height {
        plot = plot.height(h);
    }
    if let Some(t) = &spec.x_axis.title {
        plot = plot.x_axis_label(t.clone());
    }
    if let Some(t) = &spec.y_axis.title {
        plot = plot.y_axis_label(t.clone());
    }
    if spec.kind == ChartKind::Scatter {
        plot = plot.legend(Legend::default());
    }

    let text_color = ui.visuals().text_color();
    let resp = plot.show(ui, |plot_ui| {
        for trace in &spec.traces {
            let pts = plot_points(spec, &trace.x, &trace.y);
            let color: Color32 = trace.color.into();
            match spec.kind {
                ChartKind::LineMarkers => {
                    plot_ui.line(Line::new(&trace.name, pts.clone()).color(color));
                    plot_ui.points(
                        Points::new(&trace.name, pts)
                            .radius(MARKER_RADIUS)
                            .color(color),
                    );
                }
                ChartKind::Line => {
                    plot_ui.line(Line::new(&trace.name, pts).color(color));
                }
                ChartKind::Bar => {
                    let bars: Vec<Bar> = pts
                        .iter()
                        .filter(|p| p[1].is_finite())
                        .map(|p| Bar::new(p[0], p[1]).width(0.8))
                        .collect();
                    plot_ui.bar_chart(BarChart::new(&trace.name, bars).color(color));
                }
                ChartKind::Scatter => {
                    let radius = if highlight == Some(trace.name.as_str()) {
                        SCATTER_RADIUS * 1.6
                    } else {
                        SCATTER_RADIUS
                    };
                    plot_ui.points(Points::new(&trace.name, pts).radius(radius).color(color));
                }
            }
        }

        if let Some(ann) = &spec.annotation {
            let b = plot_ui.plot_bounds();
            let (min, max) = (b.min(), b.max());
            let pos = PlotPoint::new(
                min[0] + (max[0] - min[0]) * ann.x as f64,
                min[1] + (max[1] - min[1]) * ann.y as f64,
            );
            plot_ui.text(
                Text::new("annotation", pos, annotation_job(&ann.text, text_color))
                    .anchor(Align2::LEFT_BOTTOM),
            );
        }

        if spec.kind != ChartKind::Scatter {
            return None;
        }
        let pointer = plot_ui.pointer_coordinate()?;
        let pointer_px = plot_ui.screen_from_plot(pointer);
        let mut best: Option<(f32, &str)> = None;
        for trace in &spec.traces {
            let pts = plot_points(spec, &trace.x, &trace.y);
            for (p, id) in pts.iter().zip(trace.custom_data.iter()) {
                if !(p[0].is_finite() && p[1].is_finite()) {
                    continue;
                }
                let px = plot_ui.screen_from_plot(PlotPoint::new(p[0], p[1]));
                let d = px.distance(pointer_px);
                if d <= HOVER_RADIUS_PX && best.map_or(true, |(bd, _)| d < bd) {
                    best = Some((d, id.as_str()));
                }
            }
        }
        best.map(|(_, id)| HoverPayload::single(id))
    });
    resp.inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_axis_maps_non_positive_to_nan() {
        assert_eq!(to_axis(100.0, Scale::Log), 2.0);
        assert!(to_axis(0.0, Scale::Log).is_nan());
        assert!(to_axis(-5.0, Scale::Log).is_nan());
        assert_eq!(to_axis(-5.0, Scale::Linear), -5.0);
        assert!((from_axis(2.0, Scale::Log) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn tick_labels_are_compact() {
        assert_eq!(format_tick(1500.0), "1500");
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(0.125), "0.125");
        assert_eq!(format_tick(2.5e7), "2.5e7");
    }

    #[test]
    fn strong_first_line_loses_markers() {
        let job = annotation_job("**China**\nnew_cases", Color32::WHITE);
        assert_eq!(job.text, "China\nnew_cases");
    }
}
