use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::{debug, error};
use shared::models::chart::{layout_chart, table_rows, BarLayout, ChartScene, TextMark};
use shared::ChartData;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::config::Config;
use crate::timers::Debouncer;

const GRID_COLOR: &str = "#333";
const LABEL_COLOR: &str = "#888";
const BAR_GRADIENT: (&str, &str) = ("#9d4edd", "#00f5ff");
const GLOW_COLOR: &str = "#00f5ff";

/// Bar chart drawn on a canvas, with the same numbers mirrored into a
/// table for screen readers.
#[derive(Properties, PartialEq)]
pub struct ChartRendererProps {
    pub data: ChartData,
}

#[function_component(ChartRenderer)]
pub fn chart_renderer(props: &ChartRendererProps) -> Html {
    let canvas_ref = use_node_ref();
    // Last rendered dataset, read by the resize handler.
    let current = use_mut_ref(ChartData::default);

    {
        let canvas_ref = canvas_ref.clone();
        let current = current.clone();
        use_effect_with(props.data.clone(), move |data| {
            *current.borrow_mut() = data.clone();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                render(&canvas, data);
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let current = current.clone();
        use_effect_with((), move |_| {
            let debouncer = Rc::new(RefCell::new(Debouncer::new(Config::resize_debounce())));
            let listener = {
                let debouncer = debouncer.clone();
                EventListener::new(&gloo_utils::window(), "resize", move |_| {
                    let canvas_ref = canvas_ref.clone();
                    let current = current.clone();
                    debouncer.borrow_mut().call(move || {
                        if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                            render(&canvas, &current.borrow());
                        }
                    });
                })
            };
            move || {
                debouncer.borrow_mut().cancel();
                drop(listener);
            }
        });
    }

    html! {
        <div class="chart-container">
            <canvas id="games-chart" ref={canvas_ref} role="img" aria-describedby="games-chart-data"></canvas>
            <table id="games-chart-data" class="sr-only">
                <thead>
                    <tr><th>{"Date"}</th><th>{"Games"}</th></tr>
                </thead>
                <tbody>
                    { for table_rows(&props.data).into_iter().map(|(label, value)| html! {
                        <tr><td>{ label }</td><td>{ value }</td></tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn render(canvas: &HtmlCanvasElement, data: &ChartData) {
    if let Err(e) = draw(canvas, data) {
        error!("Chart render failed: {:?}", e);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

fn container_width(canvas: &HtmlCanvasElement) -> u32 {
    canvas
        .parent_element()
        .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
        .map(|parent| parent.offset_width().max(0) as u32)
        .unwrap_or(0)
}

fn draw(canvas: &HtmlCanvasElement, data: &ChartData) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    let width = container_width(canvas);
    let height = Config::chart_height();
    canvas.set_width(width);
    canvas.set_height(height);

    match layout_chart(data, width as f64, height as f64) {
        ChartScene::Placeholder(mark) => draw_placeholder(&ctx, &mark),
        ChartScene::Bars(layout) => {
            debug!("Drawing chart with {} bars", layout.bars.len());
            ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
            draw_bars(&ctx, &layout)
        }
    }
}

fn draw_placeholder(ctx: &CanvasRenderingContext2d, mark: &TextMark) -> Result<(), JsValue> {
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font("14px system-ui");
    ctx.set_text_align("center");
    ctx.fill_text(&mark.text, mark.x, mark.y)
}

fn draw_bars(ctx: &CanvasRenderingContext2d, layout: &BarLayout) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for line in &layout.gridlines {
        ctx.begin_path();
        ctx.move_to(line.x_start, line.y);
        ctx.line_to(line.x_end, line.y);
        ctx.stroke();
    }

    let gradient = ctx.create_linear_gradient(0.0, layout.baseline, 0.0, 0.0);
    gradient.add_color_stop(0.0, BAR_GRADIENT.0)?;
    gradient.add_color_stop(1.0, BAR_GRADIENT.1)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.set_shadow_color(GLOW_COLOR);
    for bar in &layout.bars {
        ctx.set_shadow_blur(10.0);
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
    }
    ctx.set_shadow_blur(0.0);

    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font("12px system-ui");
    ctx.set_text_align("center");
    for label in &layout.x_labels {
        ctx.fill_text(&label.text, label.x, label.y)?;
    }

    ctx.set_text_align("right");
    for tick in &layout.y_ticks {
        ctx.fill_text(&tick.text, tick.x, tick.y)?;
    }
    Ok(())
}
