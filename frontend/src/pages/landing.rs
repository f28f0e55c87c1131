use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{Element, ErrorEvent, HtmlCanvasElement};
use yew::prelude::*;

use crate::alerts::AlertRecord;
use crate::charts::data::{self, ChartKind};
use crate::charts::render;
use crate::components::alert_panel::AlertPanel;
use crate::components::chart_panel::ChartPanel;
use crate::components::nav::Nav;
use crate::components::notification::NotificationStack;
use crate::config::PageConfig;
use crate::content::{
    self, ACTION_ITEMS, CLOUD_COUNT, HERO_BUTTONS, PROBLEM_CARDS, REVEAL_KEYS, SOLUTION_STEPS,
    STAT_COUNTERS,
};
use crate::controller::page::PageController;
use crate::controller::state::NotificationKind;
use crate::dom::{self, EventBinding, FramePump, GlobalApi, Heartbeat, VisibilityWatch};
use crate::error::PageResult;
use crate::navigation;

pub enum Msg {
    Tick,
    Scrolled,
    PointerMoved(f64),
    Resized,
    WindowLoaded,
    RuntimeError(String),
    AnchorClicked { href: String, control: Option<String> },
    ToggleMenu,
    ProblemHover(Option<usize>),
    CounterVisible(usize),
    SolutionVisible,
    Revealed(String),
    ActionClicked(usize),
    AwardExternal(f64),
    Notify(String, Option<String>),
    RefreshCharts,
}

const COUNTER_ATTR: &str = "data-counter";
const REVEAL_ATTR: &str = "data-reveal";

pub struct Landing {
    controller: PageController,
    origin_ms: f64,
    temperature_ref: NodeRef,
    precipitation_ref: NodeRef,
    counter_refs: Vec<NodeRef>,
    reveal_refs: Vec<NodeRef>,
    solution_ref: NodeRef,
    listeners: Vec<EventBinding>,
    watches: Vec<VisibilityWatch>,
    pump: Option<FramePump>,
    heartbeat: Option<Heartbeat>,
    api: Option<GlobalApi>,
}

impl Component for Landing {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = PageConfig::from_document();
        debug!("Page config: {:?}", config);
        Self {
            controller: PageController::new(config, StdRng::from_entropy(), data::today()),
            origin_ms: dom::now_ms(),
            temperature_ref: NodeRef::default(),
            precipitation_ref: NodeRef::default(),
            counter_refs: STAT_COUNTERS.iter().map(|_| NodeRef::default()).collect(),
            reveal_refs: REVEAL_KEYS.iter().map(|_| NodeRef::default()).collect(),
            solution_ref: NodeRef::default(),
            listeners: Vec::new(),
            watches: Vec::new(),
            pump: None,
            heartbeat: None,
            api: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        if let Err(e) = self.bind_window(ctx) {
            warn!("Window listeners unavailable: {}", e);
        }
        if let Err(e) = self.bind_observers(ctx) {
            warn!("Visibility observers unavailable: {}", e);
        }
        match FramePump::start(ctx.link().callback(|_| Msg::Tick)) {
            Ok(pump) => self.pump = Some(pump),
            Err(e) => warn!("Animation frames unavailable: {}", e),
        }
        self.heartbeat = Some(Heartbeat::start(ctx.link().callback(|_| Msg::Tick)));
        match GlobalApi::install(
            ctx.link().callback(Msg::AwardExternal),
            ctx.link().callback(|(message, kind): (String, Option<String>)| Msg::Notify(message, kind)),
            ctx.link().callback(|_| Msg::RefreshCharts),
        ) {
            Ok(api) => self.api = Some(api),
            Err(e) => warn!("Could not export {}: {}", GlobalApi::NAME, e),
        }

        if let Err(e) = dom::mark_body_loaded() {
            warn!("Could not mark body loaded: {}", e);
        }
        self.controller.start();
        self.controller.on_viewport_resize(dom::viewport_width());
        if dom::is_loaded() {
            self.controller.on_window_loaded();
        }
        info!("Landing page ready");
        ctx.link().send_message(Msg::Scrolled);
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => {
                let elapsed = (dom::now_ms() - self.origin_ms).max(0.0);
                self.controller.advance_to(elapsed as u64);
                true
            }
            Msg::Scrolled => match dom::scroll_snapshot() {
                Ok(snapshot) => {
                    self.controller.on_scroll(&snapshot);
                    true
                }
                Err(e) => {
                    debug!("Scroll snapshot failed: {}", e);
                    false
                }
            },
            Msg::PointerMoved(client_x) => {
                self.controller.on_pointer_move(client_x, dom::viewport_width());
                false
            }
            Msg::Resized => {
                self.controller.on_viewport_resize(dom::viewport_width());
                true
            }
            Msg::WindowLoaded => {
                self.controller.on_window_loaded();
                false
            }
            Msg::RuntimeError(message) => {
                gloo_console::error!("Chart error:", message.clone());
                let missing = self.charts_without_surface();
                self.controller.on_runtime_error(&message, &missing);
                true
            }
            Msg::AnchorClicked { href, control } => {
                let Some(target) = navigation::anchor_target(&href) else {
                    return false;
                };
                let exists = dom::element_exists(target);
                if let Some(id) = self
                    .controller
                    .on_anchor_click(target, exists, control.as_deref())
                {
                    if let Err(e) = dom::smooth_scroll_to(&id) {
                        warn!("Smooth scroll to #{} failed: {}", id, e);
                    }
                }
                true
            }
            Msg::ToggleMenu => {
                self.controller.toggle_menu();
                true
            }
            Msg::ProblemHover(index) => {
                self.controller.on_problem_hover(index);
                true
            }
            Msg::CounterVisible(index) => {
                self.controller.on_counter_visible(index);
                true
            }
            Msg::SolutionVisible => {
                self.controller.on_solution_visible();
                true
            }
            Msg::Revealed(key) => {
                self.controller.on_reveal(&key);
                true
            }
            Msg::ActionClicked(index) => self.controller.on_action_click(index),
            Msg::AwardExternal(amount) => self.controller.award_external(amount),
            Msg::Notify(message, kind) => {
                self.controller
                    .show_notification(&message, NotificationKind::parse(kind.as_deref()));
                true
            }
            Msg::RefreshCharts => {
                self.controller.refresh_charts();
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.shutdown();
        self.api = None;
        self.pump = None;
        self.heartbeat = None;
        self.watches.clear();
        self.listeners.clear();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let link = ctx.link();

        html! {
            <>
                <Nav
                    active={state.active_nav.clone()}
                    scrolled={state.navbar_scrolled}
                    show_menu_button={state.mobile_menu_button}
                    menu_open={state.menu_open}
                    on_anchor={link.callback(|href: String| Msg::AnchorClicked { href, control: None })}
                    on_toggle_menu={link.callback(|_: ()| Msg::ToggleMenu)}
                />
                { self.view_hero(ctx) }
                { self.view_problem(ctx) }
                { self.view_solution() }
                { self.view_dashboard() }
                { self.view_impact() }
                { self.view_action(ctx) }
                <footer class="footer">
                    <p>{"© 2024 ClimateAI. Building climate resilience with data."}</p>
                </footer>
                <NotificationStack notifications={state.notifications.clone()} />
            </>
        }
    }
}

impl Landing {
    fn bind_window(&mut self, ctx: &Context<Self>) -> PageResult<()> {
        let window = dom::window()?;
        let document = dom::document()?;

        let scrolled = ctx.link().callback(|_| Msg::Scrolled);
        self.listeners.push(EventBinding::new(&window, "scroll", move |_| {
            scrolled.emit(())
        })?);

        let resized = ctx.link().callback(|_| Msg::Resized);
        self.listeners.push(EventBinding::new(&window, "resize", move |_| {
            resized.emit(())
        })?);

        let pointer = ctx.link().callback(Msg::PointerMoved);
        self.listeners.push(EventBinding::new(&document, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                pointer.emit(mouse.client_x() as f64);
            }
        })?);

        let loaded = ctx.link().callback(|_| Msg::WindowLoaded);
        self.listeners.push(EventBinding::new(&window, "load", move |_| {
            loaded.emit(())
        })?);

        let failed = ctx.link().callback(Msg::RuntimeError);
        self.listeners.push(EventBinding::new(&window, "error", move |event| {
            let message = event
                .dyn_ref::<ErrorEvent>()
                .map(|e| e.message())
                .unwrap_or_else(|| "unknown error".to_string());
            failed.emit(message)
        })?);

        Ok(())
    }

    fn bind_observers(&mut self, ctx: &Context<Self>) -> PageResult<()> {
        let counters: Vec<Element> = self
            .counter_refs
            .iter()
            .filter_map(|r| r.cast::<Element>())
            .collect();
        if !counters.is_empty() {
            let visible = ctx.link().callback(Msg::CounterVisible);
            self.watches.push(VisibilityWatch::observe(
                &counters,
                0.5,
                "0px 0px -100px 0px",
                move |target| {
                    if let Some(index) = target
                        .get_attribute(COUNTER_ATTR)
                        .and_then(|v| v.parse::<usize>().ok())
                    {
                        visible.emit(index);
                    }
                },
            )?);
        }

        if let Some(solution) = self.solution_ref.cast::<Element>() {
            let visible = ctx.link().callback(|_| Msg::SolutionVisible);
            self.watches.push(VisibilityWatch::observe(&[solution], 0.3, "0px", move |_| {
                visible.emit(())
            })?);
        }

        let revealable: Vec<Element> = self
            .reveal_refs
            .iter()
            .filter_map(|r| r.cast::<Element>())
            .collect();
        if !revealable.is_empty() {
            let revealed = ctx.link().callback(Msg::Revealed);
            self.watches.push(VisibilityWatch::observe(
                &revealable,
                0.1,
                "0px 0px -100px 0px",
                move |target| {
                    if let Some(key) = target.get_attribute(REVEAL_ATTR) {
                        revealed.emit(key);
                    }
                },
            )?);
        }

        Ok(())
    }

    fn charts_without_surface(&self) -> Vec<ChartKind> {
        ChartKind::ALL
            .into_iter()
            .filter(|kind| {
                let canvas = self.chart_ref(*kind).cast::<HtmlCanvasElement>();
                !canvas.map(|c| render::has_drawing_surface(&c)).unwrap_or(false)
            })
            .collect()
    }

    fn chart_ref(&self, kind: ChartKind) -> &NodeRef {
        match kind {
            ChartKind::Temperature => &self.temperature_ref,
            ChartKind::Precipitation => &self.precipitation_ref,
        }
    }

    fn reveal_ref(&self, key: &str) -> NodeRef {
        REVEAL_KEYS
            .iter()
            .position(|k| *k == key)
            .and_then(|i| self.reveal_refs.get(i).cloned())
            .unwrap_or_default()
    }

    fn section_classes(&self, key: &'static str) -> Classes {
        let revealed = self.controller.state().revealed.contains(key);
        classes!(key, "reveal", revealed.then(|| "revealed"))
    }

    fn view_hero(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();

        html! {
            <section id="home" class="hero">
                <div class="clouds">
                    { for (0..CLOUD_COUNT).map(|i| html! {
                        <div
                            class={classes!("cloud", format!("cloud-{}", i + 1))}
                            style={self.controller.cloud_offset(i).to_css()}
                        ></div>
                    }) }
                </div>
                <div class="hero-content">
                    <h1 class="hero-title">{ state.headline_text() }</h1>
                    <p class="hero-subtitle">{ content::TAGLINE }</p>
                    <div class="hero-buttons">
                        { for HERO_BUTTONS.iter().enumerate().map(|(i, button)| {
                            let control = format!("hero-{}", i);
                            let pressed = state.pressed.contains(&control);
                            let href = format!("#{}", button.target);
                            let onclick = {
                                let href = href.clone();
                                ctx.link().callback(move |e: MouseEvent| {
                                    e.prevent_default();
                                    Msg::AnchorClicked { href: href.clone(), control: Some(control.clone()) }
                                })
                            };
                            html! {
                                <a
                                    {href}
                                    class={classes!("btn", if button.primary { "btn-primary" } else { "btn-secondary" })}
                                    style={if pressed { "transform: scale(0.95);" } else { "transform: scale(1);" }}
                                    {onclick}
                                >
                                    { button.label }
                                </a>
                            }
                        }) }
                    </div>
                </div>
            </section>
        }
    }

    fn view_problem(&self, ctx: &Context<Self>) -> Html {
        let hovered = self.controller.state().hovered_problem;

        html! {
            <section id="problem" class={self.section_classes("problem")} ref={self.reveal_ref("problem")} data-reveal="problem">
                <h2 class="section-title">{"The Climate Challenge"}</h2>
                <div class="problem-grid">
                    { for PROBLEM_CARDS.iter().enumerate().map(|(i, card)| {
                        let style = if hovered == Some(i) {
                            "transform: translateY(-10px) scale(1.02);"
                        } else {
                            "transform: translateY(0) scale(1);"
                        };
                        html! {
                            <div
                                class="problem-card"
                                {style}
                                onmouseenter={ctx.link().callback(move |_| Msg::ProblemHover(Some(i)))}
                                onmouseleave={ctx.link().callback(|_| Msg::ProblemHover(None))}
                            >
                                <i class={card.icon}></i>
                                <h3>{ card.title }</h3>
                                <p>{ card.body }</p>
                            </div>
                        }
                    }) }
                </div>
            </section>
        }
    }

    fn view_solution(&self) -> Html {
        let state = self.controller.state();
        let mut flow = Vec::with_capacity(SOLUTION_STEPS.len() * 2);
        for (i, step) in SOLUTION_STEPS.iter().enumerate() {
            let shown = state.solution_steps.get(i).copied().unwrap_or(false);
            flow.push(html! {
                <div
                    class="solution-step"
                    style={if shown { "opacity: 1; transform: translateY(0);" } else { "opacity: 0; transform: translateY(20px);" }}
                >
                    <i class={step.icon}></i>
                    <h4>{ step.title }</h4>
                    <p>{ step.body }</p>
                </div>
            });
            if let Some(shown) = state.solution_arrows.get(i).copied() {
                flow.push(html! {
                    <div
                        class="solution-arrow"
                        style={if shown { "opacity: 1; transform: scale(1);" } else { "opacity: 0; transform: scale(0.5);" }}
                    >
                        <i class="fas fa-arrow-right"></i>
                    </div>
                });
            }
        }

        html! {
            <section id="solution" class="solution" ref={self.solution_ref.clone()}>
                <h2 class="section-title">{"How It Works"}</h2>
                <div class="solution-flow">{ for flow }</div>
            </section>
        }
    }

    fn view_dashboard(&self) -> Html {
        let state = self.controller.state();
        let alert: Option<(AlertRecord, _)> = self
            .controller
            .current_alert()
            .zip(state.alert)
            .map(|(record, slot)| (record.clone(), slot));

        html! {
            <section id="dashboard" class={self.section_classes("dashboard")} ref={self.reveal_ref("dashboard")} data-reveal="dashboard">
                <h2 class="section-title">{"Live Climate Dashboard"}</h2>
                <div class="dashboard-grid">
                    <ChartPanel
                        kind={ChartKind::Temperature}
                        title="30-Day Temperature Trend"
                        series={state.temperature.clone()}
                        fallback={state.chart_fallback.contains(&ChartKind::Temperature)}
                        canvas_ref={self.temperature_ref.clone()}
                    />
                    <ChartPanel
                        kind={ChartKind::Precipitation}
                        title="7-Day Precipitation"
                        series={state.precipitation.clone()}
                        fallback={state.chart_fallback.contains(&ChartKind::Precipitation)}
                        canvas_ref={self.precipitation_ref.clone()}
                    />
                    <AlertPanel {alert} />
                </div>
            </section>
        }
    }

    fn view_impact(&self) -> Html {
        let state = self.controller.state();

        html! {
            <section id="impact" class={self.section_classes("impact")} ref={self.reveal_ref("impact")} data-reveal="impact">
                <h2 class="section-title">{"Our Impact"}</h2>
                <div class="stats-grid">
                    { for STAT_COUNTERS.iter().enumerate().map(|(i, stat)| {
                        let value = state
                            .counters
                            .get(i)
                            .and_then(|c| c.display)
                            .unwrap_or(0);
                        html! {
                            <div class="stat-card">
                                <span
                                    class="stat-number"
                                    ref={self.counter_refs.get(i).cloned().unwrap_or_default()}
                                    data-counter={i.to_string()}
                                    data-target={stat.target.to_string()}
                                >
                                    { value.to_string() }
                                </span>
                                <span class="stat-suffix">{ stat.suffix }</span>
                                <p class="stat-label">{ stat.label }</p>
                            </div>
                        }
                    }) }
                </div>
            </section>
        }
    }

    fn view_action(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let points_style = if state.points_pulse {
            "transform: scale(1.2);"
        } else {
            "transform: scale(1);"
        };

        html! {
            <section id="action" class={self.section_classes("action")} ref={self.reveal_ref("action")} data-reveal="action">
                <h2 class="section-title">{"Take Climate Action"}</h2>
                <div class="points-display">
                    <span>{"Your Green Points: "}</span>
                    <span id="pointsCounter" style={points_style}>{ state.points.to_string() }</span>
                </div>
                <div class="actions-grid">
                    { for ACTION_ITEMS.iter().enumerate().map(|(i, item)| {
                        let action = state.actions.get(i).copied().unwrap_or_default();
                        let card_style = if action.highlighted {
                            "transform: scale(1.05); box-shadow: 0 10px 30px rgba(46, 213, 115, 0.3);"
                        } else {
                            "transform: scale(1); box-shadow: none;"
                        };
                        html! {
                            <div class="action-card" style={card_style} data-points={item.points.to_string()}>
                                <i class={item.icon}></i>
                                <h3>{ item.title }</h3>
                                <p>{ item.body }</p>
                                <span class="action-points">{ format!("+{} points", item.points) }</span>
                                <button
                                    class={classes!("action-btn", action.completed.then(|| "completed"))}
                                    style={if action.completed { "background: var(--success-color);" } else { "" }}
                                    disabled={action.completed}
                                    onclick={ctx.link().callback(move |_| Msg::ActionClicked(i))}
                                >
                                    { if action.completed { "Completed!" } else { "Take Action" } }
                                </button>
                            </div>
                        }
                    }) }
                </div>
            </section>
        }
    }
}
