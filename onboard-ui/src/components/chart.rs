//! Chart Component
//!
//! Weekly progress line chart using HTML5 Canvas.

use leptos::*;
use onboard::dashboard::ProgressPoint;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::use_app_state;

const LINE_COLOR: &str = "#6366f1"; // indigo-500
const GRID_ROWS: u32 = 4;

/// Plot area inside the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn for_canvas(width: f64, height: f64) -> Self {
        // Room for the day labels below
        Self {
            left: 20.0,
            top: 20.0,
            width: width - 40.0,
            height: height - 60.0,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Canvas coordinates for each point on a 0..=100 scale
fn point_positions(points: &[ProgressPoint], area: PlotArea) -> Vec<(f64, f64)> {
    let step = if points.len() > 1 {
        area.width / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let value = point.progress.min(100) as f64;
            let x = area.left + i as f64 * step;
            let y = area.bottom() - value / 100.0 * area.height;
            (x, y)
        })
        .collect()
}

/// Weekly progress card
#[component]
pub fn ProgressChart(
    points: Vec<ProgressPoint>,
    average: f64,
) -> impl IntoView {
    let state = use_app_state();
    let tokens = state.tokens;
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the mode changes or the canvas mounts
    let chart_points = points.clone();
    create_effect(move |_| {
        let dark = state.is_dark();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &chart_points, dark);
        }
    });

    view! {
        <div class=move || tokens.with(|t| format!(
            "{} rounded-2xl p-6 shadow-sm border {} mb-8 transition-all duration-300",
            t.card_bg, t.border
        ))>
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-3">
                    <div class=move || {
                        let bg = if state.is_dark() { "bg-indigo-500/20" } else { "bg-indigo-500/10" };
                        format!("p-2 {bg} rounded-lg text-indigo-600")
                    }>
                        "📈"
                    </div>
                    <h2 class=move || format!("text-xl font-semibold {}", tokens.with(|t| t.text.clone()))>
                        "Weekly Progress"
                    </h2>
                </div>
                <span class="text-sm text-indigo-600 bg-indigo-500/10 px-2 py-1 rounded-md">
                    {format!("{average:.0}% average")}
                </span>
            </div>

            <canvas
                node_ref=canvas_ref
                width="700"
                height="260"
                class="w-full h-64"
            />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[ProgressPoint], dark: bool) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::for_canvas(width, height);

    let (grid_color, label_color) = if dark {
        ("#374151", "#9CA3AF") // gray-700, gray-400
    } else {
        ("#E5E7EB", "#6B7280") // gray-200, gray-500
    };

    ctx.clear_rect(0.0, 0.0, width, height);

    // Horizontal grid lines
    ctx.set_stroke_style(&grid_color.into());
    ctx.set_line_width(1.0);
    for i in 0..=GRID_ROWS {
        let y = area.top + (i as f64 / GRID_ROWS as f64) * area.height;
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();
    }

    let positions = point_positions(points, area);

    // Line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(4.0);
    ctx.begin_path();
    for (i, &(x, y)) in positions.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points
    ctx.set_fill_style(&LINE_COLOR.into());
    for &(x, y) in &positions {
        ctx.begin_path();
        let _ = ctx.arc(x, y, 6.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Day labels
    ctx.set_fill_style(&label_color.into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (point, &(x, _)) in points.iter().zip(&positions) {
        let _ = ctx.fill_text(&point.day.to_string(), x, height - 12.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard::{DashboardModel, Profile};

    #[test]
    fn test_point_positions_span_plot_area() {
        let model = DashboardModel::new(&Profile::default(), false);
        let area = PlotArea::for_canvas(700.0, 260.0);
        let positions = point_positions(&model.weekly_progress, area);

        assert_eq!(positions.len(), 7);
        assert_eq!(positions[0].0, area.left);
        assert!((positions[6].0 - (area.left + area.width)).abs() < 1e-9);

        // Monday is 20%, Sunday 90%
        assert!((positions[0].1 - (area.bottom() - 0.2 * area.height)).abs() < 1e-9);
        assert!((positions[6].1 - (area.bottom() - 0.9 * area.height)).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_sits_on_left_edge() {
        let model = DashboardModel::new(&Profile::default(), false);
        let area = PlotArea::for_canvas(700.0, 260.0);
        let positions = point_positions(&model.weekly_progress[..1], area);
        assert_eq!(positions, vec![(area.left, area.bottom() - 0.2 * area.height)]);
    }
}
