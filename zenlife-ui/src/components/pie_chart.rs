//! Pie Chart Component
//!
//! Pie chart drawn on an HTML5 Canvas from precomputed slices.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use zenlife::summary::PieSlice;

/// Wedge colors for the bill breakdown
pub const BILL_COLORS: [&str; 3] = [
    "#f87171", // Red
    "#60a5fa", // Blue
    "#34d399", // Green
];

/// Wedge colors for grocery categories
pub const GROCERY_COLORS: [&str; 6] = [
    "#fcd34d", // Amber
    "#86efac", // Green
    "#a5b4fc", // Indigo
    "#fdba74", // Orange
    "#fca5a5", // Red
    "#93c5fd", // Blue
];

/// Pie chart with a legend
#[component]
pub fn PieChart(
    #[prop(into)]
    slices: Signal<Vec<PieSlice>>,
    colors: &'static [&'static str],
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the slices change
    create_effect(move |_| {
        let slices = slices.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices, colors);
        }
    });

    view! {
        <div class="flex flex-col items-center">
            <canvas
                node_ref=canvas_ref
                width="300"
                height="300"
                class="w-64 h-64"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    slices.get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, slice)| {
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", slice_color(colors, idx))
                                    />
                                    <span class="text-sm text-gray-700">{legend_label(&slice)}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn slice_color(colors: &[&'static str], idx: usize) -> &'static str {
    if colors.is_empty() {
        "#9ca3af"
    } else {
        colors[idx % colors.len()]
    }
}

/// "Electricity 48%"
fn legend_label(slice: &PieSlice) -> String {
    format!("{} {:.0}%", slice.label, slice.fraction * 100.0)
}

/// Draw the slices on canvas
fn draw_pie(canvas: &HtmlCanvasElement, slices: &[PieSlice], colors: &[&'static str]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 10.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    if slices.iter().all(|s| s.fraction <= 0.0) {
        ctx.set_fill_style(&"#6b7280".into()); // gray-500
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", cx - 28.0, cy);
        return;
    }

    for (idx, slice) in slices.iter().enumerate() {
        if slice.end_angle <= slice.start_angle {
            continue;
        }

        ctx.set_fill_style(&slice_color(colors, idx).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, slice.start_angle, slice.end_angle);
        ctx.close_path();
        ctx.fill();

        // Wedge separator
        ctx.set_stroke_style(&"#ffffff".into());
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
}
