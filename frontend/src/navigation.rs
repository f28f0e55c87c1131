#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    /// Sections with an id, in document order.
    pub sections: Vec<SectionBounds>,
}

/// Id of the section the viewport is in, shifting every section up by
/// `offset`. When sections overlap the later one wins.
pub fn current_section(scroll_y: f64, sections: &[SectionBounds], offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Strips the leading `#` of an in-page href. Anything else is not an
/// in-page anchor.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0, 800.0), ("problem", 800.0, 600.0), ("impact", 1400.0, 500.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds { id: id.to_string(), top, height })
            .collect()
    }

    #[test]
    fn offset_shifts_section_boundaries() {
        let s = sections();
        assert_eq!(current_section(0.0, &s, 100.0), Some("home"));
        assert_eq!(current_section(699.0, &s, 100.0), Some("home"));
        assert_eq!(current_section(700.0, &s, 100.0), Some("problem"));
        assert_eq!(current_section(1300.0, &s, 100.0), Some("impact"));
    }

    #[test]
    fn nothing_matches_past_the_last_section() {
        assert_eq!(current_section(5000.0, &sections(), 100.0), None);
        assert_eq!(current_section(10.0, &[], 100.0), None);
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let s = vec![
            SectionBounds { id: "outer".into(), top: 0.0, height: 1000.0 },
            SectionBounds { id: "inner".into(), top: 200.0, height: 100.0 },
        ];
        assert_eq!(current_section(150.0, &s, 100.0), Some("inner"));
    }

    #[test]
    fn navbar_threshold_is_strict() {
        assert!(!navbar_scrolled(100.0, 100.0));
        assert!(navbar_scrolled(100.5, 100.0));
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#impact"), Some("impact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.org"), None);
    }
}
