use log::warn;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::charts::data::{ChartKind, Series};
use crate::charts::render::{self, CANVAS_HEIGHT, CANVAS_WIDTH};

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    pub kind: ChartKind,
    pub title: AttrValue,
    pub series: Option<Series>,
    pub fallback: bool,
    pub canvas_ref: NodeRef,
}

#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    // Redraw whenever a new revision of the data arrives
    {
        let canvas_ref = props.canvas_ref.clone();
        let kind = props.kind;
        use_effect_with_deps(
            move |(series, fallback): &(Option<Series>, bool)| {
                if !*fallback {
                    if let (Some(canvas), Some(series)) =
                        (canvas_ref.cast::<HtmlCanvasElement>(), series.as_ref())
                    {
                        if let Err(e) = render::draw(kind, &canvas, series) {
                            warn!("Failed to draw {:?} chart: {}", kind, e);
                        }
                    }
                }
                || ()
            },
            (props.series.clone(), props.fallback),
        );
    }

    html! {
        <div class="chart-card">
            <h3>{ props.title.clone() }</h3>
            <div class="chart-container">
                {
                    if props.fallback {
                        html! {
                            <p style="color: var(--text-secondary); text-align: center; padding: 2rem;">
                                {"Chart data loading..."}
                            </p>
                        }
                    } else {
                        html! {
                            <canvas
                                id={props.kind.canvas_id()}
                                ref={props.canvas_ref.clone()}
                                width={CANVAS_WIDTH.to_string()}
                                height={CANVAS_HEIGHT.to_string()}
                                style="max-width: 100%;"
                            />
                        }
                    }
                }
            </div>
        </div>
    }
}
