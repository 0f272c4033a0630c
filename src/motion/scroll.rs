use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    Education,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Priority order used when several sections straddle the reference line.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viewport-relative vertical extent of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Read access to where each section currently sits in the viewport.
pub trait SectionGeometry {
    fn bounds(&self, section: SectionId) -> Option<Bounds>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    pub scrolled_after: f64,
    pub reference_line: f64,
    pub header_offset: f64,
}

impl ScrollThresholds {
    /// Page offset to scroll to so `section_top` lands just below the header.
    pub fn scroll_target(&self, section_top: f64, page_offset: f64) -> f64 {
        section_top + page_offset - self.header_offset
    }
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            scrolled_after: 100.0,
            reference_line: 200.0,
            header_offset: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollNav {
    scrolled: bool,
    active: SectionId,
    thresholds: ScrollThresholds,
}

impl ScrollNav {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            scrolled: false,
            active: SectionId::default(),
            thresholds,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn on_scroll(&mut self, offset_y: f64, geometry: &impl SectionGeometry) {
        self.scrolled = offset_y > self.thresholds.scrolled_after;
        let line = self.thresholds.reference_line;
        let current = SectionId::ALL.into_iter().find(|section| {
            geometry
                .bounds(*section)
                .is_some_and(|bounds| bounds.straddles(line))
        });
        if let Some(section) = current {
            self.active = section;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FakeGeometry(HashMap<SectionId, Bounds>);

    impl SectionGeometry for FakeGeometry {
        fn bounds(&self, section: SectionId) -> Option<Bounds> {
            self.0.get(&section).copied()
        }
    }

    /// Stacks sections of `height` pixels from page top, scrolled by `offset`.
    fn stacked(height: f64, offset: f64) -> FakeGeometry {
        FakeGeometry(
            SectionId::ALL
                .into_iter()
                .enumerate()
                .map(|(i, s)| {
                    let top = i as f64 * height - offset;
                    (s, Bounds { top, bottom: top + height })
                })
                .collect(),
        )
    }

    #[test]
    fn test_scrolled_flag() {
        let mut nav = ScrollNav::new(ScrollThresholds::default());
        let geometry = stacked(800.0, 0.0);
        nav.on_scroll(100.0, &geometry);
        assert!(!nav.scrolled());
        nav.on_scroll(100.5, &geometry);
        assert!(nav.scrolled());
        nav.on_scroll(0.0, &geometry);
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_active_follows_reference_line() {
        let mut nav = ScrollNav::new(ScrollThresholds::default());
        assert_eq!(nav.active(), SectionId::Home);

        nav.on_scroll(700.0, &stacked(800.0, 700.0));
        assert_eq!(nav.active(), SectionId::Education);

        nav.on_scroll(2500.0, &stacked(800.0, 2500.0));
        assert_eq!(nav.active(), SectionId::Projects);
    }

    #[test]
    fn test_first_in_order_wins() {
        let mut nav = ScrollNav::new(ScrollThresholds::default());
        let mut sections = HashMap::new();
        sections.insert(SectionId::Contact, Bounds { top: 0.0, bottom: 500.0 });
        sections.insert(SectionId::Skills, Bounds { top: 200.0, bottom: 400.0 });
        nav.on_scroll(300.0, &FakeGeometry(sections));
        assert_eq!(nav.active(), SectionId::Skills);
    }

    #[test]
    fn test_no_straddler_keeps_previous() {
        let mut nav = ScrollNav::new(ScrollThresholds::default());
        nav.on_scroll(1500.0, &stacked(800.0, 1500.0));
        assert_eq!(nav.active(), SectionId::Skills);

        let mut gap = HashMap::new();
        gap.insert(SectionId::Skills, Bounds { top: -600.0, bottom: 150.0 });
        gap.insert(SectionId::Projects, Bounds { top: 250.0, bottom: 900.0 });
        let before = nav.clone();
        nav.on_scroll(1500.0, &FakeGeometry(gap));
        assert_eq!(nav, before);

        nav.on_scroll(9000.0, &FakeGeometry(HashMap::new()));
        assert_eq!(nav.active(), SectionId::Skills);
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        let thresholds = ScrollThresholds::default();
        assert_eq!(thresholds.scroll_target(400.0, 1000.0), 1320.0);
        assert_eq!(thresholds.scroll_target(-200.0, 1000.0), 720.0);
    }

    #[test]
    fn test_section_ids_serialize_lowercase() {
        let json = serde_json::to_string(&SectionId::Projects).unwrap();
        assert_eq!(json, "\"projects\"");
        assert_eq!(SectionId::Projects.to_string(), "projects");
    }
}
