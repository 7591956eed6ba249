/// Sections watched for nav highlighting, in priority order.
///
/// "about" has no anchor on the page, so it never matches. It stays in the
/// list so re-adding an about section needs no tracker change.
pub const TRACKED_SECTIONS: [&str; 4] = ["home", "about", "projects", "contact"];

/// Vertical offset (px) from the viewport top, roughly the nav bar height.
pub const ACTIVE_THRESHOLD: f64 = 100.0;

/// Vertical extent of a section in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn spans(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Source of section geometry, normally the browser's layout.
pub trait SectionLayout {
    /// `None` when nothing with that id is rendered.
    fn bounds(&self, name: &str) -> Option<Rect>;
}

impl<F> SectionLayout for F
where
    F: Fn(&str) -> Option<Rect>,
{
    fn bounds(&self, name: &str) -> Option<Rect> {
        self(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTracker {
    active: Option<&'static str>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            active: Some(TRACKED_SECTIONS[0]),
        }
    }
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(active: Option<&'static str>) -> Self {
        Self { active }
    }

    /// Re-reads section geometry and updates the active section.
    ///
    /// The first tracked section spanning the threshold line wins. When none
    /// does, the previous value is kept.
    pub fn on_scroll(&mut self, layout: &impl SectionLayout) -> Option<&'static str> {
        if let Some(name) = TRACKED_SECTIONS.iter().copied().find(|name| {
            layout
                .bounds(name)
                .is_some_and(|rect| rect.spans(ACTIVE_THRESHOLD))
        }) {
            self.active = Some(name);
        }
        self.active
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn layout(rects: &[(&'static str, f64, f64)]) -> HashMap<&'static str, Rect> {
        rects
            .iter()
            .map(|&(name, top, bottom)| (name, Rect::new(top, bottom)))
            .collect()
    }

    fn lookup<'a>(map: &'a HashMap<&'static str, Rect>) -> impl Fn(&str) -> Option<Rect> + 'a {
        move |name| map.get(name).copied()
    }

    #[test]
    fn test_starts_on_home() {
        assert_eq!(SectionTracker::new().active(), Some("home"));
    }

    #[test]
    fn test_single_match() {
        let rects = layout(&[
            ("home", -900.0, -100.0),
            ("projects", 50.0, 700.0),
            ("contact", 700.0, 1400.0),
        ]);
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.on_scroll(&lookup(&rects)), Some("projects"));
        assert!(tracker.is_active("projects"));
        assert!(!tracker.is_active("home"));
    }

    #[test]
    fn test_home_matches_example() {
        let rects = layout(&[("home", -50.0, 200.0), ("projects", 300.0, 600.0)]);
        let mut tracker = SectionTracker::with_active(None);
        assert_eq!(tracker.on_scroll(&lookup(&rects)), Some("home"));
    }

    #[test]
    fn test_first_in_order_wins() {
        // overlapping geometry, both span the threshold
        let rects = layout(&[("contact", 0.0, 500.0), ("projects", 90.0, 110.0)]);
        let mut tracker = SectionTracker::with_active(None);
        assert_eq!(tracker.on_scroll(&lookup(&rects)), Some("projects"));
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let rects = layout(&[("home", -900.0, -100.0), ("projects", 150.0, 900.0)]);
        let mut tracker = SectionTracker::with_active(Some("contact"));
        assert_eq!(tracker.on_scroll(&lookup(&rects)), Some("contact"));

        let mut tracker = SectionTracker::with_active(None);
        assert_eq!(tracker.on_scroll(&lookup(&rects)), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let rects = layout(&[("contact", 100.0, 100.0)]);
        let mut tracker = SectionTracker::with_active(None);
        assert_eq!(tracker.on_scroll(&lookup(&rects)), Some("contact"));
    }

    #[test]
    fn test_missing_sections_skipped() {
        let empty = |_: &str| -> Option<Rect> { None };
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.on_scroll(&empty), Some("home"));
    }

    #[test]
    fn test_about_can_match_when_rendered() {
        let rects = layout(&[("about", 0.0, 400.0), ("projects", 0.0, 400.0)]);
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.on_scroll(&lookup(&rects)), Some("about"));
    }

    #[test]
    fn test_untracked_sections_ignored() {
        let rects = layout(&[("skills", 0.0, 400.0)]);
        let mut tracker = SectionTracker::with_active(Some("home"));
        assert_eq!(tracker.on_scroll(&lookup(&rects)), Some("home"));
    }
}
