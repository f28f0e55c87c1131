use chrono::NaiveDate;
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use super::state::{AlertSlot, Notification, NotificationKind, NotificationPhase, PageState};
use super::timeline::{TaskId, Timeline};
use crate::alerts::{AlertRecord, AlertRotation, CANNED_ALERTS};
use crate::charts::data::{self, ChartKind, Series};
use crate::config::PageConfig;
use crate::content;
use crate::motion::{self, CloudOffset, CounterAnimation, CounterStep, Typewriter};
use crate::navigation::{self, ScrollSnapshot};

#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    InitCharts,
    RefreshCharts,
    StartAlerts,
    RotateAlert,
    RevealAlert(u64),
    CounterFrame(usize),
    StartHeadline,
    TypeHeadline,
    ReleasePress(String),
    EndPointsPulse,
    EndCardHighlight(usize),
    NotificationEnter(u64),
    NotificationLeave(u64),
    NotificationRemove(u64),
    RevealSolutionStep(usize),
    RevealSolutionArrow(usize),
    ScrollSettled,
}

/// Owns every piece of page state and the timers that mutate it. The view
/// layer feeds it browser events (already reduced to plain data) and the
/// current time, then renders [`PageController::state`].
pub struct PageController<R = StdRng> {
    config: PageConfig,
    state: PageState,
    timeline: Timeline<Task>,
    alerts: AlertRotation,
    rng: R,
    today: NaiveDate,
    next_notification: u64,
    next_alert_serial: u64,
    chart_revision: u64,
    scroll_settle: Option<TaskId>,
    headline_scheduled: bool,
    started: bool,
    stopped: bool,
}

impl<R: Rng> PageController<R> {
    pub fn new(config: PageConfig, rng: R, today: NaiveDate) -> Self {
        Self {
            config,
            state: PageState::new(),
            timeline: Timeline::new(),
            alerts: AlertRotation::new(CANNED_ALERTS),
            rng,
            today,
            next_notification: 1,
            next_alert_serial: 1,
            chart_revision: 0,
            scroll_settle: None,
            headline_scheduled: false,
            started: false,
            stopped: false,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn now_ms(&self) -> u64 {
        self.timeline.now_ms()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timeline.pending()
    }

    pub fn current_alert(&self) -> Option<&'static AlertRecord> {
        self.state.alert.and_then(|slot| self.alerts.get(slot.index))
    }

    pub fn cloud_offset(&self, index: usize) -> CloudOffset {
        motion::cloud_offset(
            index,
            self.state.scroll_y,
            self.state.pointer_x,
            self.now_ms() as f64 / 1000.0,
        )
    }

    /// DOM ready: arm the chart, refresh and alert timers.
    pub fn start(&mut self) {
        if self.started || self.stopped {
            return;
        }
        self.started = true;
        self.state.loaded = true;
        self.timeline
            .schedule_once(self.config.chart_init_delay_ms, Task::InitCharts);
        self.timeline
            .schedule_every(self.config.chart_refresh_ms, Task::RefreshCharts);
        self.timeline
            .schedule_once(self.config.alert_start_delay_ms, Task::StartAlerts);
        info!("Page controller started");
    }

    /// Window `load`: the headline starts typing after a short pause.
    pub fn on_window_loaded(&mut self) {
        if self.headline_scheduled || self.stopped {
            return;
        }
        self.headline_scheduled = true;
        self.timeline
            .schedule_once(self.config.headline_delay_ms, Task::StartHeadline);
    }

    /// Stops every timer. The controller ignores time after this.
    pub fn shutdown(&mut self) {
        let cancelled = self.timeline.cancel_all();
        self.stopped = true;
        self.scroll_settle = None;
        info!("Page controller stopped, {} pending tasks cancelled", cancelled);
    }

    pub fn advance_to(&mut self, now_ms: u64) {
        if self.stopped {
            return;
        }
        while let Some((_, task)) = self.timeline.pop_due(now_ms) {
            self.run_task(task);
        }
        self.timeline.settle_at(now_ms);
    }

    pub fn advance_by(&mut self, delta_ms: u64) {
        let target = self.now_ms().saturating_add(delta_ms);
        self.advance_to(target);
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::InitCharts => self.init_charts(),
            Task::RefreshCharts => self.refresh_charts(),
            Task::StartAlerts => {
                self.show_next_alert();
                self.timeline
                    .schedule_every(self.config.alert_rotation_ms, Task::RotateAlert);
            }
            Task::RotateAlert => self.show_next_alert(),
            Task::RevealAlert(serial) => {
                if let Some(slot) = self.state.alert.as_mut().filter(|s| s.serial == serial) {
                    slot.revealed = true;
                }
            }
            Task::CounterFrame(index) => self.step_counter(index),
            Task::StartHeadline => {
                self.state.headline = Some(Typewriter::new(content::HEADLINE));
                self.type_headline();
            }
            Task::TypeHeadline => self.type_headline(),
            Task::ReleasePress(control) => {
                self.state.pressed.remove(&control);
            }
            Task::EndPointsPulse => self.state.points_pulse = false,
            Task::EndCardHighlight(index) => {
                if let Some(action) = self.state.actions.get_mut(index) {
                    action.highlighted = false;
                }
            }
            Task::NotificationEnter(id) => self.set_notification_phase(id, NotificationPhase::Shown),
            Task::NotificationLeave(id) => self.set_notification_phase(id, NotificationPhase::Leaving),
            Task::NotificationRemove(id) => self.state.notifications.retain(|n| n.id != id),
            Task::RevealSolutionStep(index) => {
                if let Some(step) = self.state.solution_steps.get_mut(index) {
                    *step = true;
                }
            }
            Task::RevealSolutionArrow(index) => {
                if let Some(arrow) = self.state.solution_arrows.get_mut(index) {
                    *arrow = true;
                }
            }
            Task::ScrollSettled => {
                self.scroll_settle = None;
            }
        }
    }

    // Navigation

    /// In-page anchor click. Returns the id to smooth-scroll to, or `None`
    /// when the target is missing (nothing changes then). `pressable` names
    /// the clicked control when it is button-styled.
    pub fn on_anchor_click(
        &mut self,
        target: &str,
        target_exists: bool,
        pressable: Option<&str>,
    ) -> Option<String> {
        if !target_exists {
            debug!("Anchor target #{} not on page", target);
            return None;
        }

        if content::has_nav_entry(target) {
            self.state.active_nav = Some(target.to_string());
        }

        if let Some(control) = pressable {
            self.state.pressed.insert(control.to_string());
            self.timeline.schedule_once(
                self.config.press_ms,
                Task::ReleasePress(control.to_string()),
            );
        }

        self.state.menu_open = false;
        Some(target.to_string())
    }

    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) {
        self.state.scroll_y = snapshot.scroll_y;
        self.state.navbar_scrolled =
            navigation::navbar_scrolled(snapshot.scroll_y, self.config.navbar_threshold_px);
        self.state.active_nav = navigation::current_section(
            snapshot.scroll_y,
            &snapshot.sections,
            self.config.section_offset_px,
        )
        .map(str::to_string);

        if self.stopped {
            return;
        }
        // Trailing throttle: restarted by every scroll, fires a no-op.
        if let Some(id) = self.scroll_settle.take() {
            self.timeline.cancel(id);
        }
        self.scroll_settle = Some(
            self.timeline
                .schedule_once(self.config.scroll_throttle_ms, Task::ScrollSettled),
        );
    }

    pub fn on_pointer_move(&mut self, client_x: f64, viewport_width: f64) {
        self.state.pointer_x = motion::normalize_pointer(client_x, viewport_width);
    }

    /// Load and resize. The mobile menu button, once shown, stays.
    pub fn on_viewport_resize(&mut self, width: f64) {
        if width <= self.config.mobile_breakpoint_px && !self.state.mobile_menu_button {
            debug!("Viewport {}px wide, adding mobile menu button", width);
            self.state.mobile_menu_button = true;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
    }

    // Reveal effects

    pub fn on_problem_hover(&mut self, index: Option<usize>) {
        self.state.hovered_problem = index;
    }

    pub fn on_counter_visible(&mut self, index: usize) {
        let (duration, frame) = (self.config.counter_duration_ms, self.config.frame_ms);
        let Some(counter) = self.state.counters.get_mut(index) else {
            return;
        };
        if counter.animation.is_some() {
            return;
        }
        let Some(stat) = content::STAT_COUNTERS.get(index) else {
            return;
        };
        counter.animation = Some(CounterAnimation::new(stat.target, duration, frame));
        self.step_counter(index);
    }

    fn step_counter(&mut self, index: usize) {
        let Some(counter) = self.state.counters.get_mut(index) else {
            return;
        };
        let Some(animation) = counter.animation.as_mut() else {
            return;
        };
        match animation.step() {
            CounterStep::Running(value) => {
                counter.display = Some(value);
                self.timeline
                    .schedule_once(self.config.frame_ms, Task::CounterFrame(index));
            }
            CounterStep::Done(value) => counter.display = Some(value),
        }
    }

    pub fn on_solution_visible(&mut self) {
        if self.state.solution_started {
            return;
        }
        self.state.solution_started = true;
        let stagger = self.config.solution_stagger_ms;
        for index in 0..self.state.solution_steps.len() {
            self.timeline
                .schedule_once(index as u64 * stagger, Task::RevealSolutionStep(index));
        }
        for index in 0..self.state.solution_arrows.len() {
            self.timeline
                .schedule_once((index as u64 + 1) * stagger, Task::RevealSolutionArrow(index));
        }
    }

    pub fn on_reveal(&mut self, key: &str) {
        if content::REVEAL_KEYS.contains(&key) {
            self.state.revealed.insert(key.to_string());
        }
    }

    fn type_headline(&mut self) {
        let more = match self.state.headline.as_mut() {
            Some(typewriter) => typewriter.type_next(),
            None => false,
        };
        if more {
            self.timeline
                .schedule_once(self.config.headline_char_ms, Task::TypeHeadline);
        }
    }

    // Points and notifications

    pub fn on_action_click(&mut self, index: usize) -> bool {
        let Some(item) = content::ACTION_ITEMS.get(index) else {
            return false;
        };
        let Some(action) = self.state.actions.get_mut(index) else {
            return false;
        };
        if action.completed {
            return false;
        }
        action.completed = true;
        action.highlighted = true;
        self.timeline
            .schedule_once(self.config.card_highlight_ms, Task::EndCardHighlight(index));
        info!("Action '{}' completed", item.title);
        self.award_points(item.points);
        true
    }

    pub fn award_points(&mut self, amount: u64) {
        self.state.points = self.state.points.saturating_add(amount);
        self.state.points_pulse = true;
        self.timeline
            .schedule_once(self.config.points_pulse_ms, Task::EndPointsPulse);
        self.show_notification(&format!("+{} Green Points!", amount), NotificationKind::Success);
    }

    /// Entry point for other scripts on the page, which may pass any number.
    pub fn award_external(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 || amount.fract() != 0.0 {
            warn!("Rejected point award of {}", amount);
            return false;
        }
        self.award_points(amount as u64);
        true
    }

    pub fn show_notification(&mut self, message: &str, kind: NotificationKind) -> u64 {
        let id = self.next_notification;
        self.next_notification += 1;
        self.state.notifications.push(Notification {
            id,
            message: message.to_string(),
            kind,
            phase: NotificationPhase::Entering,
        });

        let visible = self.config.notification_visible_ms;
        self.timeline
            .schedule_once(self.config.notification_enter_ms, Task::NotificationEnter(id));
        self.timeline
            .schedule_once(visible, Task::NotificationLeave(id));
        self.timeline.schedule_once(
            visible + self.config.notification_exit_ms,
            Task::NotificationRemove(id),
        );
        id
    }

    fn set_notification_phase(&mut self, id: u64, phase: NotificationPhase) {
        if let Some(notification) = self.state.notifications.iter_mut().find(|n| n.id == id) {
            notification.phase = phase;
        }
    }

    // Charts

    fn next_series(&mut self, kind: ChartKind, labels: Vec<String>) -> Series {
        let days = labels.len();
        let values = match kind {
            ChartKind::Temperature => data::generate_temperature_data(days, &mut self.rng),
            ChartKind::Precipitation => data::generate_precipitation_data(days, &mut self.rng),
        };
        self.chart_revision += 1;
        Series {
            labels,
            values,
            revision: self.chart_revision,
        }
    }

    fn init_charts(&mut self) {
        let temperature_labels = data::generate_date_labels(self.config.temperature_days, self.today);
        let precipitation_labels =
            data::generate_date_labels(self.config.precipitation_days, self.today);
        self.state.temperature = Some(self.next_series(ChartKind::Temperature, temperature_labels));
        self.state.precipitation =
            Some(self.next_series(ChartKind::Precipitation, precipitation_labels));
        info!("Charts initialised");
    }

    /// Regenerates the data of every initialised chart. Labels are kept.
    pub fn refresh_charts(&mut self) {
        for kind in ChartKind::ALL {
            let labels = match self.state.series(kind) {
                Some(series) => series.labels.clone(),
                None => continue,
            };
            let series = self.next_series(kind, labels);
            match kind {
                ChartKind::Temperature => self.state.temperature = Some(series),
                ChartKind::Precipitation => self.state.precipitation = Some(series),
            }
        }
        debug!("Chart data refreshed (revision {})", self.chart_revision);
    }

    /// Uncaught runtime error on the page. Charts whose canvas cannot draw are
    /// swapped for a placeholder.
    pub fn on_runtime_error(&mut self, message: &str, missing_surfaces: &[ChartKind]) {
        error!("Runtime error: {}", message);
        for kind in missing_surfaces {
            if self.state.chart_fallback.insert(*kind) {
                warn!("Chart {:?} has no drawing surface, showing placeholder", kind);
            }
        }
    }

    // Alerts

    fn show_next_alert(&mut self) {
        let Some(index) = self.alerts.advance() else {
            return;
        };
        let serial = self.next_alert_serial;
        self.next_alert_serial += 1;
        self.state.alert = Some(AlertSlot {
            index,
            serial,
            revealed: false,
        });
        self.timeline
            .schedule_once(self.config.alert_reveal_delay_ms, Task::RevealAlert(serial));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::SectionBounds;
    use rand::SeedableRng;

    fn controller() -> PageController {
        PageController::new(
            PageConfig::default(),
            StdRng::seed_from_u64(11),
            NaiveDate::from_ymd_opt(2024, 10, 16).unwrap(),
        )
    }

    fn started() -> PageController {
        let mut page = controller();
        page.start();
        page
    }

    fn action_index(points: u64) -> usize {
        content::ACTION_ITEMS
            .iter()
            .position(|a| a.points == points)
            .unwrap()
    }

    #[test]
    fn missing_anchor_target_changes_nothing() {
        let mut page = started();
        page.on_anchor_click("impact", true, None);
        let before = page.state().clone();

        assert_eq!(page.on_anchor_click("nowhere", false, Some("hero-0")), None);
        assert_eq!(page.state(), &before);
    }

    #[test]
    fn anchor_click_marks_nav_and_presses_button() {
        let mut page = started();
        let scroll = page.on_anchor_click("dashboard", true, Some("hero-0"));

        assert_eq!(scroll.as_deref(), Some("dashboard"));
        assert_eq!(page.state().active_nav.as_deref(), Some("dashboard"));
        assert!(page.state().pressed.contains("hero-0"));

        page.advance_by(149);
        assert!(page.state().pressed.contains("hero-0"));
        page.advance_by(1);
        assert!(page.state().pressed.is_empty());
    }

    #[test]
    fn anchor_without_nav_entry_keeps_active_link() {
        let mut page = started();
        page.on_anchor_click("impact", true, None);
        assert_eq!(page.on_anchor_click("footer", true, None).as_deref(), Some("footer"));
        assert_eq!(page.state().active_nav.as_deref(), Some("impact"));
    }

    #[test]
    fn scroll_updates_navbar_and_active_section() {
        let mut page = started();
        let sections = vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 900.0 },
            SectionBounds { id: "problem".into(), top: 900.0, height: 700.0 },
        ];

        page.on_scroll(&ScrollSnapshot { scroll_y: 50.0, sections: sections.clone() });
        assert!(!page.state().navbar_scrolled);
        assert_eq!(page.state().active_nav.as_deref(), Some("home"));

        page.on_scroll(&ScrollSnapshot { scroll_y: 850.0, sections: sections.clone() });
        assert!(page.state().navbar_scrolled);
        assert_eq!(page.state().active_nav.as_deref(), Some("problem"));

        page.on_scroll(&ScrollSnapshot { scroll_y: 4000.0, sections });
        assert_eq!(page.state().active_nav, None);
    }

    #[test]
    fn scroll_throttle_keeps_a_single_pending_task() {
        let mut page = controller();
        for y in 0..10 {
            page.on_scroll(&ScrollSnapshot { scroll_y: y as f64, sections: vec![] });
        }
        assert_eq!(page.pending_tasks(), 1);
        page.advance_by(16);
        assert_eq!(page.pending_tasks(), 0);
    }

    #[test]
    fn action_awards_once_and_then_is_inert() {
        let mut page = started();
        let index = action_index(25);

        assert!(page.on_action_click(index));
        assert_eq!(page.state().points, 25);
        assert!(page.state().actions[index].completed);

        let before = page.state().points;
        assert!(!page.on_action_click(index));
        assert_eq!(page.state().points, before);
    }

    #[test]
    fn two_actions_sum_to_thirty_five() {
        let mut page = started();
        page.on_action_click(action_index(10));
        page.on_action_click(action_index(25));

        assert_eq!(page.state().points.to_string(), "35");
        let messages: Vec<&str> = page
            .state()
            .notifications
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, vec!["+10 Green Points!", "+25 Green Points!"]);
    }

    #[test]
    fn points_pulse_and_card_highlight_are_transient() {
        let mut page = started();
        let index = action_index(10);
        page.on_action_click(index);
        assert!(page.state().points_pulse);
        assert!(page.state().actions[index].highlighted);

        page.advance_by(200);
        assert!(!page.state().points_pulse);
        assert!(page.state().actions[index].highlighted);
        page.advance_by(100);
        assert!(!page.state().actions[index].highlighted);
        assert!(page.state().actions[index].completed);
    }

    #[test]
    fn external_awards_reject_bad_amounts() {
        let mut page = started();
        assert!(page.award_external(15.0));
        assert!(!page.award_external(-5.0));
        assert!(!page.award_external(f64::NAN));
        assert!(!page.award_external(2.5));
        assert_eq!(page.state().points, 15);
    }

    #[test]
    fn notification_lifecycle() {
        let mut page = controller();
        let id = page.show_notification("hello", NotificationKind::Info);
        let phase = |page: &PageController| {
            page.state()
                .notifications
                .iter()
                .find(|n| n.id == id)
                .map(|n| n.phase)
        };

        assert_eq!(phase(&page), Some(NotificationPhase::Entering));
        page.advance_to(100);
        assert_eq!(phase(&page), Some(NotificationPhase::Shown));
        page.advance_to(3000);
        assert_eq!(phase(&page), Some(NotificationPhase::Leaving));
        page.advance_to(3299);
        assert!(phase(&page).is_some());
        page.advance_to(3300);
        assert_eq!(phase(&page), None);
    }

    #[test]
    fn notifications_stack_without_dedup() {
        let mut page = controller();
        page.show_notification("same", NotificationKind::Info);
        page.advance_to(50);
        page.show_notification("same", NotificationKind::Info);
        assert_eq!(page.state().notifications.len(), 2);
        page.advance_to(3300);
        assert_eq!(page.state().notifications.len(), 1);
        page.advance_to(3350);
        assert!(page.state().notifications.is_empty());
    }

    #[test]
    fn counter_runs_once_and_lands_on_target() {
        let mut page = started();
        let target = content::STAT_COUNTERS[1].target;

        page.on_counter_visible(1);
        let mut last = page.state().counters[1].display.unwrap();
        for _ in 0..200 {
            page.advance_by(16);
            let now = page.state().counters[1].display.unwrap();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, target);

        page.on_counter_visible(1);
        assert_eq!(page.state().counters[1].display, Some(target));
        assert_eq!(page.state().counters[0].display, None);
    }

    #[test]
    fn charts_appear_after_delay_and_refresh_in_place() {
        let mut page = started();
        page.advance_to(999);
        assert!(page.state().temperature.is_none());

        page.advance_to(1000);
        let temperature = page.state().temperature.clone().unwrap();
        let precipitation = page.state().precipitation.clone().unwrap();
        assert_eq!(temperature.values.len(), 30);
        assert_eq!(precipitation.labels.len(), 7);
        assert_eq!(precipitation.labels.last().unwrap(), "Oct 16");

        page.advance_to(30_000);
        let refreshed = page.state().temperature.clone().unwrap();
        assert_eq!(refreshed.labels, temperature.labels);
        assert!(refreshed.revision > temperature.revision);
        assert!(page
            .state()
            .precipitation
            .as_ref()
            .unwrap()
            .values
            .iter()
            .all(|v| (0.0..=20.0).contains(v)));
    }

    #[test]
    fn refresh_before_init_is_a_no_op() {
        let mut page = controller();
        page.refresh_charts();
        assert!(page.state().temperature.is_none());
        assert!(page.state().precipitation.is_none());
    }

    #[test]
    fn runtime_error_swaps_in_placeholders() {
        let mut page = started();
        page.on_runtime_error("boom", &[]);
        assert!(page.state().chart_fallback.is_empty());
        page.on_runtime_error("boom", &[ChartKind::Precipitation]);
        assert!(page.state().chart_fallback.contains(&ChartKind::Precipitation));
        assert!(!page.state().chart_fallback.contains(&ChartKind::Temperature));
    }

    #[test]
    fn alert_rotation_closes_its_cycle() {
        let mut page = started();
        page.advance_to(1999);
        assert!(page.current_alert().is_none());

        page.advance_to(2000);
        let first = page.current_alert().unwrap();
        assert!(!page.state().alert.unwrap().revealed);
        page.advance_to(2100);
        assert!(page.state().alert.unwrap().revealed);

        // Fourth display overall.
        page.advance_to(32_000);
        assert_eq!(page.current_alert(), Some(first));
        assert_eq!(page.state().alert.unwrap().serial, 4);
    }

    #[test]
    fn headline_types_after_load() {
        let mut page = started();
        page.on_window_loaded();
        page.advance_to(999);
        assert_eq!(page.state().headline_text(), content::HEADLINE);

        page.advance_to(1000);
        assert_eq!(page.state().headline_text().chars().count(), 1);

        let len = content::HEADLINE.chars().count() as u64;
        page.advance_to(1000 + (len - 1) * 50);
        assert_eq!(page.state().headline_text(), content::HEADLINE);
        assert!(page.state().headline.as_ref().unwrap().is_done());
    }

    #[test]
    fn solution_flow_staggers_steps_and_arrows() {
        let mut page = controller();
        page.on_solution_visible();
        page.advance_to(0);
        assert!(page.state().solution_steps[0]);
        assert!(!page.state().solution_arrows[0]);
        page.advance_to(200);
        assert!(page.state().solution_steps[1]);
        assert!(page.state().solution_arrows[0]);
        page.advance_to(10_000);
        assert!(page.state().solution_steps.iter().all(|s| *s));
        assert!(page.state().solution_arrows.iter().all(|a| *a));
    }

    #[test]
    fn hover_and_reveal_track_elements() {
        let mut page = controller();
        page.on_problem_hover(Some(1));
        assert_eq!(page.state().hovered_problem, Some(1));
        page.on_problem_hover(None);
        assert_eq!(page.state().hovered_problem, None);

        page.on_reveal("impact");
        page.on_reveal("impact");
        page.on_reveal("footer");
        assert_eq!(page.state().revealed.len(), 1);
        assert!(page.state().revealed.contains("impact"));
    }

    #[test]
    fn mobile_button_sticks_once_shown() {
        let mut page = controller();
        page.on_viewport_resize(1200.0);
        assert!(!page.state().mobile_menu_button);
        page.on_viewport_resize(768.0);
        assert!(page.state().mobile_menu_button);
        page.on_viewport_resize(1200.0);
        assert!(page.state().mobile_menu_button);

        page.toggle_menu();
        assert!(page.state().menu_open);
        page.toggle_menu();
        assert!(!page.state().menu_open);
    }

    #[test]
    fn shutdown_cancels_everything() {
        let mut page = started();
        page.on_window_loaded();
        page.show_notification("bye", NotificationKind::Info);
        assert!(page.pending_tasks() > 0);

        page.shutdown();
        assert_eq!(page.pending_tasks(), 0);
        page.advance_to(60_000);
        assert!(page.state().temperature.is_none());
        assert!(page.current_alert().is_none());
    }
}
