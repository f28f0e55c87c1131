use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use super::data::{ChartKind, Series};
use crate::error::{PageError, PageResult};

const BACKGROUND: RGBColor = RGBColor(10, 14, 39);
const SKY: RGBColor = RGBColor(0, 212, 255);
const MINT: RGBColor = RGBColor(0, 255, 136);
const LEGEND: RGBColor = RGBColor(184, 197, 214);
const TICK: RGBColor = RGBColor(124, 141, 176);

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 320;

fn chart_err<E: std::fmt::Debug>(err: E) -> PageError {
    PageError::Chart(format!("{:?}", err))
}

/// Whether the canvas can hand out a 2D context at all.
pub fn has_drawing_surface(canvas: &HtmlCanvasElement) -> bool {
    matches!(canvas.get_context("2d"), Ok(Some(_)))
}

pub fn draw(kind: ChartKind, canvas: &HtmlCanvasElement, series: &Series) -> PageResult<()> {
    if series.values.is_empty() {
        return Ok(());
    }

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| PageError::Chart("canvas has no 2d context".into()))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| PageError::Chart("unexpected context type".into()))?;
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    context.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);

    let backend = CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or_else(|| PageError::Chart("canvas backend unavailable".into()))?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).map_err(chart_err)?;

    match kind {
        ChartKind::Temperature => draw_line(&root, kind, series)?,
        ChartKind::Precipitation => draw_bars(&root, kind, series)?,
    }

    root.present().map_err(chart_err)
}

fn value_range(values: &[f64], floor_at_zero: bool) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * 0.1).max(1.0);
    let low = if floor_at_zero { 0.0 } else { min - pad };
    (low, max + pad)
}

fn draw_line(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    kind: ChartKind,
    series: &Series,
) -> PageResult<()> {
    let (low, high) = value_range(&series.values, false);
    let len = series.values.len();

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .caption(kind.legend(), ("sans-serif", 16).into_font().color(&LEGEND))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..len, low..high)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(&LEGEND.mix(0.1))
        .light_line_style(&TRANSPARENT)
        .axis_style(&TICK)
        .x_labels(6)
        .x_label_formatter(&|x| series.labels.get(*x).cloned().unwrap_or_default())
        .y_label_formatter(&|y| format!("{:.0}", y))
        .label_style(("sans-serif", 12).into_font().color(&TICK))
        .draw()
        .map_err(chart_err)?;

    let points: Vec<(usize, f64)> = series.values.iter().cloned().enumerate().collect();

    chart
        .draw_series(
            AreaSeries::new(points.iter().cloned(), low, &SKY.mix(0.1)).border_style(SKY.stroke_width(3)),
        )
        .map_err(chart_err)?;

    chart
        .draw_series(points.iter().map(|(x, y)| Circle::new((*x, *y), 4, SKY.filled())))
        .map_err(chart_err)?;

    Ok(())
}

fn draw_bars(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    kind: ChartKind,
    series: &Series,
) -> PageResult<()> {
    let (low, high) = value_range(&series.values, true);
    let len = series.values.len();

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .caption(kind.legend(), ("sans-serif", 16).into_font().color(&LEGEND))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..len, low..high)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(&LEGEND.mix(0.1))
        .light_line_style(&TRANSPARENT)
        .axis_style(&TICK)
        .x_labels(len)
        .x_label_formatter(&|x| series.labels.get(*x).cloned().unwrap_or_default())
        .label_style(("sans-serif", 12).into_font().color(&TICK))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(series.values.iter().enumerate().map(|(i, value)| {
            let mut bar = Rectangle::new([(i, 0.0), (i + 1, *value)], MINT.mix(0.6).filled());
            bar.set_margin(0, 0, 6, 6);
            bar
        }))
        .map_err(chart_err)?;

    Ok(())
}
