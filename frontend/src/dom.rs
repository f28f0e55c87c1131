//! Thin wrappers around the browser APIs the landing page listens to. Every
//! wrapper unregisters itself on drop so the page component can tear down by
//! dropping its bindings.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Object, Reflect};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};
use yew::Callback;

use crate::error::{PageError, PageResult};
use crate::navigation::{ScrollSnapshot, SectionBounds};

pub fn window() -> PageResult<Window> {
    web_sys::window().ok_or(PageError::MissingWindow)
}

pub fn document() -> PageResult<Document> {
    window()?.document().ok_or(PageError::MissingDocument)
}

/// Milliseconds since navigation start.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn element_exists(id: &str) -> bool {
    document()
        .map(|d| d.get_element_by_id(id).is_some())
        .unwrap_or(false)
}

pub fn is_loaded() -> bool {
    document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false)
}

pub fn mark_body_loaded() -> PageResult<()> {
    if let Some(body) = document()?.body() {
        body.class_list().add_1("loaded")?;
    }
    Ok(())
}

pub fn smooth_scroll_to(id: &str) -> PageResult<()> {
    let Some(target) = document()?.get_element_by_id(id) else {
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Current scroll offset plus the bounds of every `section[id]`.
pub fn scroll_snapshot() -> PageResult<ScrollSnapshot> {
    let window = window()?;
    let scroll_y = window.scroll_y()?;
    let nodes = document()?.query_selector_all("section[id]")?;

    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(section) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        sections.push(SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        });
    }

    Ok(ScrollSnapshot { scroll_y, sections })
}

pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> PageResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// requestAnimationFrame loop emitting once per frame until dropped.
pub struct FramePump {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FramePump {
    pub fn start(on_frame: Callback<()>) -> PageResult<Self> {
        let window = window()?;
        let running = Rc::new(Cell::new(true));
        let handle = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let next = closure.clone();
        let running_loop = running.clone();
        let handle_loop = handle.clone();
        let window_loop = window.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            if !running_loop.get() {
                return;
            }
            on_frame.emit(());
            if let Some(cb) = next.borrow().as_ref() {
                match window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => handle_loop.set(Some(id)),
                    Err(_) => running_loop.set(false),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match closure.borrow().as_ref() {
            Some(cb) => Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?),
            None => None,
        };
        handle.set(first);

        Ok(Self {
            running,
            handle,
            closure,
        })
    }
}

impl Drop for FramePump {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(window)) = (self.handle.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.closure.borrow_mut().take();
    }
}

/// Coarse timer that keeps the clock moving while animation frames are
/// paused in a background tab.
pub struct Heartbeat {
    _interval: Interval,
}

impl Heartbeat {
    pub const PERIOD_MS: u32 = 250;

    pub fn start(on_tick: Callback<()>) -> Self {
        Self {
            _interval: Interval::new(Self::PERIOD_MS, move || on_tick.emit(())),
        }
    }
}

/// IntersectionObserver that reports each element the first time it
/// intersects, then stops watching that element.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn observe<F>(
        targets: &[Element],
        threshold: f64,
        root_margin: &str,
        on_visible: F,
    ) -> PageResult<Self>
    where
        F: Fn(&Element) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `window.ClimateAI`, the hook other scripts on the page use.
pub struct GlobalApi {
    _award: Closure<dyn Fn(f64)>,
    _notify: Closure<dyn Fn(String, Option<String>)>,
    _refresh: Closure<dyn Fn()>,
}

impl GlobalApi {
    pub const NAME: &'static str = "ClimateAI";

    pub fn install(
        award: Callback<f64>,
        notify: Callback<(String, Option<String>)>,
        refresh: Callback<()>,
    ) -> PageResult<Self> {
        let window = window()?;
        let api = Object::new();

        let award_fn = Closure::wrap(Box::new(move |amount: f64| award.emit(amount)) as Box<dyn Fn(f64)>);
        let notify_fn = Closure::wrap(Box::new(move |message: String, kind: Option<String>| {
            notify.emit((message, kind))
        }) as Box<dyn Fn(String, Option<String>)>);
        let refresh_fn = Closure::wrap(Box::new(move || refresh.emit(())) as Box<dyn Fn()>);

        Reflect::set(&api, &"awardPoints".into(), award_fn.as_ref())?;
        Reflect::set(&api, &"showNotification".into(), notify_fn.as_ref())?;
        Reflect::set(&api, &"refreshCharts".into(), refresh_fn.as_ref())?;
        Reflect::set(window.as_ref(), &Self::NAME.into(), &api)?;

        Ok(Self {
            _award: award_fn,
            _notify: notify_fn,
            _refresh: refresh_fn,
        })
    }
}

impl Drop for GlobalApi {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = Reflect::delete_property(&window, &Self::NAME.into());
        }
    }
}
