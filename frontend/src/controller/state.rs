use std::collections::HashSet;

use crate::charts::data::{ChartKind, Series};
use crate::content;
use crate::motion::{CounterAnimation, Typewriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

impl NotificationKind {
    /// Unknown or missing kinds render as `Info`.
    pub fn parse(kind: Option<&str>) -> Self {
        match kind.map(str::trim) {
            Some(k) if k.eq_ignore_ascii_case("success") => NotificationKind::Success,
            _ => NotificationKind::Info,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Info => "notification-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Created off-screen to the right.
    Entering,
    Shown,
    /// Sliding back out, removal pending.
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

/// The single alert currently in the alerts panel. `serial` changes on every
/// rotation so the view re-creates the element and replays its transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSlot {
    pub index: usize,
    pub serial: u64,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    /// `None` until the counter first scrolls into view.
    pub display: Option<i64>,
    pub animation: Option<CounterAnimation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionState {
    pub completed: bool,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub loaded: bool,

    pub navbar_scrolled: bool,
    pub active_nav: Option<String>,
    pub pressed: HashSet<String>,
    pub mobile_menu_button: bool,
    pub menu_open: bool,

    pub scroll_y: f64,
    pub pointer_x: f64,
    pub headline: Option<Typewriter>,
    pub hovered_problem: Option<usize>,
    pub solution_started: bool,
    pub solution_steps: Vec<bool>,
    pub solution_arrows: Vec<bool>,
    pub revealed: HashSet<String>,

    pub counters: Vec<CounterState>,

    pub points: u64,
    pub points_pulse: bool,
    pub actions: Vec<ActionState>,
    pub notifications: Vec<Notification>,

    pub temperature: Option<Series>,
    pub precipitation: Option<Series>,
    pub chart_fallback: HashSet<ChartKind>,

    pub alert: Option<AlertSlot>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            loaded: false,
            navbar_scrolled: false,
            active_nav: None,
            pressed: HashSet::new(),
            mobile_menu_button: false,
            menu_open: false,
            scroll_y: 0.0,
            pointer_x: 0.0,
            headline: None,
            hovered_problem: None,
            solution_started: false,
            solution_steps: vec![false; content::SOLUTION_STEPS.len()],
            solution_arrows: vec![false; content::solution_arrow_count()],
            revealed: HashSet::new(),
            counters: vec![CounterState::default(); content::STAT_COUNTERS.len()],
            points: 0,
            points_pulse: false,
            actions: vec![ActionState::default(); content::ACTION_ITEMS.len()],
            notifications: Vec::new(),
            temperature: None,
            precipitation: None,
            chart_fallback: HashSet::new(),
            alert: None,
        }
    }

    pub fn series(&self, kind: ChartKind) -> Option<&Series> {
        match kind {
            ChartKind::Temperature => self.temperature.as_ref(),
            ChartKind::Precipitation => self.precipitation.as_ref(),
        }
    }

    pub fn headline_text(&self) -> String {
        match &self.headline {
            Some(typewriter) => typewriter.visible(),
            None => content::HEADLINE.to_string(),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
