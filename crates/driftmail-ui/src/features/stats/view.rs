//! Canvas painting for the stats page.
//!
//! Three paired line charts, drawn once from a single JSON fetch. No
//! animation, no tooltips, no point dots, no vertical gridlines, and
//! blank x labels; the y scale starts at zero.

use gloo::utils::document;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::features::stats::geometry::{self, colors};
use crate::features::stats::model::{ChartSpec, StatsPayload};
use crate::services::{dom, http};

const GRIDLINE_COLOR: &str = "#dddddd";
const FALLBACK_WIDTH: u32 = 600;
const FALLBACK_HEIGHT: u32 = 300;

pub(crate) fn bind() {
    let Some(marker) = dom::by_id("stats-chart") else {
        return;
    };
    let Some(url) = dom::data_attr(&marker, "url") else {
        gloo::console::error!("stats container is missing its data-url attribute");
        return;
    };
    spawn_local(async move {
        match http::get_json::<StatsPayload>(&url).await {
            Ok(payload) => {
                for chart in payload.charts() {
                    draw_chart(&chart);
                }
            }
            Err(err) => gloo::console::error!(format!("stats payload failed to load: {err}")),
        }
    });
}

fn draw_chart(chart: &ChartSpec<'_>) {
    let Some(container) = dom::by_id(chart.container_id) else {
        return;
    };
    let Some((canvas, context)) = prepend_canvas(&container) else {
        return;
    };
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    let max = geometry::series_max(&[chart.primary, chart.secondary]);

    draw_gridlines(&context, width, height, max);
    draw_series(
        &context,
        &geometry::polyline_segments(chart.primary, width, height, max),
        colors::PRIMARY_STROKE,
        colors::PRIMARY_FILL,
        height,
    );
    draw_series(
        &context,
        &geometry::polyline_segments(chart.secondary, width, height, max),
        colors::SECONDARY_STROKE,
        colors::SECONDARY_FILL,
        height,
    );
}

fn prepend_canvas(container: &Element) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;

    let container_width = u32::try_from(container.client_width()).unwrap_or(0);
    let container_height = u32::try_from(container.client_height()).unwrap_or(0);
    canvas.set_width(if container_width == 0 {
        FALLBACK_WIDTH
    } else {
        container_width
    });
    canvas.set_height(if container_height == 0 {
        FALLBACK_HEIGHT
    } else {
        container_height
    });

    container
        .insert_before(&canvas, container.first_child().as_ref())
        .ok()?;

    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, context))
}

fn draw_gridlines(context: &CanvasRenderingContext2d, width: f64, height: f64, max: f64) {
    if max <= 0.0 {
        return;
    }
    context.set_stroke_style_str(GRIDLINE_COLOR);
    context.set_line_width(1.0);
    let step = geometry::tick_step(max);
    let mut tick = step;
    while tick <= max {
        let y = height - (tick / max) * height;
        context.begin_path();
        context.move_to(0.0, y);
        context.line_to(width, y);
        context.stroke();
        tick += step;
    }
}

fn draw_series(
    context: &CanvasRenderingContext2d,
    segments: &[Vec<(f64, f64)>],
    stroke: &str,
    fill: &str,
    height: f64,
) {
    for segment in segments {
        let Some(&(first_x, first_y)) = segment.first() else {
            continue;
        };
        if segment.len() == 1 {
            // An isolated sample still gets a visible mark.
            context.set_fill_style_str(stroke);
            context.fill_rect(first_x - 1.0, first_y - 1.0, 3.0, 3.0);
            continue;
        }

        // Area under the segment down to the baseline.
        context.set_fill_style_str(fill);
        context.begin_path();
        context.move_to(first_x, height);
        for &(x, y) in segment {
            context.line_to(x, y);
        }
        if let Some(&(last_x, _)) = segment.last() {
            context.line_to(last_x, height);
        }
        context.close_path();
        context.fill();

        // The line itself.
        context.set_stroke_style_str(stroke);
        context.set_line_width(2.0);
        context.begin_path();
        context.move_to(first_x, first_y);
        for &(x, y) in segment.iter().skip(1) {
            context.line_to(x, y);
        }
        context.stroke();
    }
}
