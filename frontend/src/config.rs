use log::warn;
use serde::Deserialize;

use crate::error::PageResult;

/// Id of the optional `<script type="application/json">` block that overrides
/// the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Timing and threshold constants for every page behavior. All durations are
/// milliseconds, all distances CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub section_offset_px: f64,
    pub navbar_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
    pub counter_duration_ms: u64,
    pub frame_ms: u64,
    pub chart_init_delay_ms: u64,
    pub chart_refresh_ms: u64,
    pub temperature_days: usize,
    pub precipitation_days: usize,
    pub alert_start_delay_ms: u64,
    pub alert_rotation_ms: u64,
    pub alert_reveal_delay_ms: u64,
    pub notification_visible_ms: u64,
    pub notification_enter_ms: u64,
    pub notification_exit_ms: u64,
    pub headline_delay_ms: u64,
    pub headline_char_ms: u64,
    pub press_ms: u64,
    pub points_pulse_ms: u64,
    pub card_highlight_ms: u64,
    pub scroll_throttle_ms: u64,
    pub solution_stagger_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            section_offset_px: 100.0,
            navbar_threshold_px: 100.0,
            mobile_breakpoint_px: 768.0,
            counter_duration_ms: 2000,
            frame_ms: 16,
            chart_init_delay_ms: 1000,
            chart_refresh_ms: 30_000,
            temperature_days: 30,
            precipitation_days: 7,
            alert_start_delay_ms: 2000,
            alert_rotation_ms: 10_000,
            alert_reveal_delay_ms: 100,
            notification_visible_ms: 3000,
            notification_enter_ms: 100,
            notification_exit_ms: 300,
            headline_delay_ms: 1000,
            headline_char_ms: 50,
            press_ms: 150,
            points_pulse_ms: 200,
            card_highlight_ms: 300,
            scroll_throttle_ms: 16,
            solution_stagger_ms: 200,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config block from the host page. A missing block means
    /// defaults; a malformed one is logged and also falls back to defaults.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring page config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_overrides_only_given_keys() {
        let config = PageConfig::from_json(r#"{"chart_refresh_ms": 5000, "temperature_days": 14}"#).unwrap();
        assert_eq!(config.chart_refresh_ms, 5000);
        assert_eq!(config.temperature_days, 14);
        assert_eq!(config.alert_rotation_ms, 10_000);
        assert_eq!(config.section_offset_px, 100.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{not json").is_err());
        assert!(PageConfig::from_json(r#"{"frame_ms": "fast"}"#).is_err());
    }
}
