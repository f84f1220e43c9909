use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use yew::functional::Reducible;

use crate::config::{SCROLLED_THRESHOLD_PX, SPY_WINDOW_BOTTOM_PX, SPY_WINDOW_TOP_PX};

/// A named, vertically stacked region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Expertise,
    Experience,
    Projects,
    Skills,
    Education,
}

/// Scan order for the spy. Earlier entries win when several sections are in view.
pub const SECTIONS: [SectionId; 7] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Expertise,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Skills,
    SectionId::Education,
];

impl SectionId {
    /// The DOM id the section is rendered under.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Expertise => "expertise",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SECTIONS
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Where the page is looked at from. Implemented over the DOM in
/// `viewport.rs` and by an in-memory fake in tests.
pub trait Viewport {
    /// Vertical scroll offset of the page, in pixels.
    fn scroll_offset(&self) -> f64;

    /// Top edge of the section's element relative to the viewport, or `None`
    /// when the section is not rendered.
    fn section_top(&self, id: SectionId) -> Option<f64>;

    /// Starts an animated scroll that brings the section to the top of the
    /// viewport. Does not wait for the animation. Returns `false` when the
    /// section is not rendered.
    fn smooth_scroll_to(&self, id: SectionId) -> bool;
}

/// Geometry read during a single scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub tops: Vec<(SectionId, Option<f64>)>,
}

impl ScrollSample {
    pub fn measure<V: Viewport + ?Sized>(viewport: &V) -> Self {
        Self {
            offset: viewport.scroll_offset(),
            tops: SECTIONS
                .iter()
                .map(|&id| (id, viewport.section_top(id)))
                .collect(),
        }
    }

    fn top_of(&self, id: SectionId) -> Option<f64> {
        self.tops
            .iter()
            .find(|(section, _)| *section == id)
            .and_then(|(_, top)| *top)
    }
}

fn in_spy_window(top: f64) -> bool {
    (SPY_WINDOW_TOP_PX..=SPY_WINDOW_BOTTOM_PX).contains(&top)
}

/// Which nav control is highlighted and which nav bar style applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: SectionId,
    pub is_scrolled: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            is_scrolled: false,
        }
    }
}

impl NavigationState {
    /// State after a scroll event. The first registered section whose top is
    /// inside the spy window becomes active; with no match the previous
    /// section stays active.
    pub fn after_scroll(self, sample: &ScrollSample) -> Self {
        let active_section = SECTIONS
            .iter()
            .copied()
            .find(|&id| sample.top_of(id).map_or(false, in_spy_window))
            .unwrap_or(self.active_section);

        Self {
            active_section,
            is_scrolled: sample.offset > SCROLLED_THRESHOLD_PX,
        }
    }

    pub fn after_jump(self, id: SectionId) -> Self {
        Self {
            active_section: id,
            ..self
        }
    }
}

pub enum NavigationAction {
    Scrolled(ScrollSample),
    Jumped(SectionId),
}

impl Reducible for NavigationState {
    type Action = NavigationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavigationAction::Scrolled(sample) => self.after_scroll(&sample),
            NavigationAction::Jumped(id) => self.after_jump(id),
        };

        if next == *self {
            // Same Rc means no re-render.
            return self;
        }
        if next.active_section != self.active_section {
            debug!(
                "Active section {} -> {}",
                self.active_section, next.active_section
            );
        }
        Rc::new(next)
    }
}

/// Starts the smooth scroll and hands back the state commit to apply right
/// away. `None` when the section has no element on the page.
pub fn request_jump<V: Viewport + ?Sized>(
    viewport: &V,
    id: SectionId,
) -> Option<NavigationAction> {
    if viewport.smooth_scroll_to(id) {
        debug!("Jumping to section {}", id);
        Some(NavigationAction::Jumped(id))
    } else {
        debug!("Section {} is not rendered, ignoring jump", id);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeViewport {
        offset: f64,
        tops: HashMap<SectionId, f64>,
        requested: RefCell<Vec<SectionId>>,
    }

    impl FakeViewport {
        fn at(offset: f64) -> Self {
            Self {
                offset,
                ..Default::default()
            }
        }

        fn with(mut self, id: SectionId, top: f64) -> Self {
            self.tops.insert(id, top);
            self
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn section_top(&self, id: SectionId) -> Option<f64> {
            self.tops.get(&id).copied()
        }

        fn smooth_scroll_to(&self, id: SectionId) -> bool {
            if self.tops.contains_key(&id) {
                self.requested.borrow_mut().push(id);
                true
            } else {
                false
            }
        }
    }

    fn scroll(state: NavigationState, viewport: &FakeViewport) -> NavigationState {
        state.after_scroll(&ScrollSample::measure(viewport))
    }

    fn reduce(state: NavigationState, action: NavigationAction) -> NavigationState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_at_home_unscrolled() {
        let state = NavigationState::default();
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.is_scrolled);
    }

    #[test]
    fn scrolled_flag_follows_threshold_without_latching() {
        let mut state = NavigationState::default();

        state = scroll(state, &FakeViewport::at(51.0));
        assert!(state.is_scrolled);

        state = scroll(state, &FakeViewport::at(0.0));
        assert!(!state.is_scrolled);
    }

    #[test]
    fn scrolled_flag_is_strict_at_boundary() {
        let state = scroll(NavigationState::default(), &FakeViewport::at(50.0));
        assert!(!state.is_scrolled);

        let state = scroll(state, &FakeViewport::at(50.5));
        assert!(state.is_scrolled);

        let state = scroll(state, &FakeViewport::at(50.0));
        assert!(!state.is_scrolled);
    }

    #[test]
    fn same_offset_gives_same_result() {
        let viewport = FakeViewport::at(120.0).with(SectionId::Projects, 10.0);
        let once = scroll(NavigationState::default(), &viewport);
        let twice = scroll(once, &viewport);
        assert_eq!(once, twice);
    }

    #[test]
    fn single_section_in_window_becomes_active() {
        let viewport = FakeViewport::at(900.0)
            .with(SectionId::Home, -900.0)
            .with(SectionId::Experience, 120.0)
            .with(SectionId::Projects, 700.0);

        let state = scroll(NavigationState::default(), &viewport);
        assert_eq!(state.active_section, SectionId::Experience);
    }

    #[test]
    fn window_edges_are_inclusive() {
        let top_edge = FakeViewport::at(400.0).with(SectionId::Education, 0.0);
        assert_eq!(
            scroll(NavigationState::default(), &top_edge).active_section,
            SectionId::Education
        );

        let bottom_edge = FakeViewport::at(400.0).with(SectionId::Education, 300.0);
        assert_eq!(
            scroll(NavigationState::default(), &bottom_edge).active_section,
            SectionId::Education
        );

        let past = FakeViewport::at(400.0)
            .with(SectionId::Education, 300.5)
            .with(SectionId::About, -0.5);
        assert_eq!(
            scroll(NavigationState::default(), &past).active_section,
            SectionId::Home
        );
    }

    #[test]
    fn earliest_registered_section_wins_over_closest() {
        // Projects is closer to the top but About is registered first.
        let viewport = FakeViewport::at(600.0)
            .with(SectionId::Projects, 5.0)
            .with(SectionId::About, 280.0);

        let state = scroll(NavigationState::default(), &viewport);
        assert_eq!(state.active_section, SectionId::About);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let state = NavigationState {
            active_section: SectionId::Projects,
            is_scrolled: true,
        };
        let viewport = FakeViewport::at(2000.0)
            .with(SectionId::Projects, -400.0)
            .with(SectionId::Education, 650.0);

        let next = scroll(state, &viewport);
        assert_eq!(next.active_section, SectionId::Projects);
        assert!(next.is_scrolled);
    }

    #[test]
    fn unrendered_sections_are_skipped() {
        // Skills is registered but has no element.
        let viewport = FakeViewport::at(1500.0).with(SectionId::Education, 50.0);
        let sample = ScrollSample::measure(&viewport);
        assert_eq!(sample.top_of(SectionId::Skills), None);

        let state = NavigationState::default().after_scroll(&sample);
        assert_eq!(state.active_section, SectionId::Education);
    }

    #[test]
    fn jump_commits_before_animation_finishes() {
        let viewport = FakeViewport::at(0.0)
            .with(SectionId::Home, 0.0)
            .with(SectionId::Projects, 2400.0);

        let action = request_jump(&viewport, SectionId::Projects).expect("projects is rendered");
        let state = reduce(NavigationState::default(), action);

        assert_eq!(state.active_section, SectionId::Projects);
        assert!(!state.is_scrolled);
        assert_eq!(*viewport.requested.borrow(), vec![SectionId::Projects]);
    }

    #[test]
    fn later_scroll_corrects_jump_override() {
        let viewport = FakeViewport::at(0.0)
            .with(SectionId::Home, 0.0)
            .with(SectionId::Projects, 2400.0);
        let action = request_jump(&viewport, SectionId::Projects).expect("projects is rendered");
        let state = reduce(NavigationState::default(), action);

        // Viewport has not moved yet, so the next scroll event puts home back.
        let state = scroll(state, &viewport);
        assert_eq!(state.active_section, SectionId::Home);
    }

    #[test]
    fn jump_to_missing_element_is_a_no_op() {
        let viewport = FakeViewport::at(900.0).with(SectionId::Home, -900.0);
        let state = NavigationState {
            active_section: SectionId::Experience,
            is_scrolled: true,
        };

        let next = request_jump(&viewport, SectionId::Skills)
            .map_or(state, |action| reduce(state, action));

        assert_eq!(next.active_section, SectionId::Experience);
        assert!(next.is_scrolled);
        assert!(viewport.requested.borrow().is_empty());
    }

    fn jump_by_name(viewport: &FakeViewport, name: &str) -> Option<NavigationAction> {
        name.parse::<SectionId>()
            .ok()
            .and_then(|id| request_jump(viewport, id))
    }

    #[test]
    fn jump_to_unknown_name_is_a_no_op() {
        let viewport = FakeViewport::at(900.0)
            .with(SectionId::Home, -900.0)
            .with(SectionId::Projects, 1200.0);
        let state = NavigationState {
            active_section: SectionId::Experience,
            is_scrolled: true,
        };

        let next = jump_by_name(&viewport, "nonexistent")
            .map_or(state, |action| reduce(state, action));

        assert_eq!(next.active_section, SectionId::Experience);
        assert!(next.is_scrolled);
        assert!(viewport.requested.borrow().is_empty());
    }

    #[test]
    fn jump_by_name_resolves_registered_ids() {
        let viewport = FakeViewport::at(0.0).with(SectionId::Education, 3000.0);
        let action = jump_by_name(&viewport, "education").expect("education is rendered");
        let state = reduce(NavigationState::default(), action);
        assert_eq!(state.active_section, SectionId::Education);
    }

    #[test]
    fn unchanged_state_keeps_same_rc() {
        let state = Rc::new(NavigationState::default());
        let sample = ScrollSample::measure(&FakeViewport::at(10.0).with(SectionId::Home, 0.0));
        let next = state.clone().reduce(NavigationAction::Scrolled(sample));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn section_ids_round_trip_through_dom_names() {
        for id in SECTIONS {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "Projects".parse::<SectionId>(),
            Err(UnknownSection("Projects".to_string()))
        );
    }
}
