use std::fmt;

use tracing::debug;

use crate::card::{CardState, CardView};
use crate::carousel::navigation::{Navigation, Navigator};
use crate::carousel::state::SlideDirection;
use crate::error::{Error, Result};
use crate::project::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    Dot(usize),
    Previous,
    Next,
    ToggleCard,
}

/// Read-only state handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub transitioning: bool,
    pub expanded: bool,
}

#[derive(Debug)]
pub struct Carousel {
    items: Vec<Project>,
    navigator: Navigator,
    card: CardState,
    direction: SlideDirection,
}

impl Carousel {
    pub fn new(items: Vec<Project>, settle_window: f32) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        let navigator = Navigator::new(items.len(), settle_window);
        Ok(Self {
            items,
            navigator,
            card: CardState::new(),
            direction: SlideDirection::Forward,
        })
    }

    pub fn items(&self) -> &[Project] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    pub fn controls_enabled(&self) -> bool {
        !self.navigator.is_transitioning()
    }

    pub fn settle_progress(&self) -> f32 {
        self.navigator.settle_progress()
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn active_project(&self) -> &Project {
        &self.items[self.navigator.current_index()]
    }

    pub fn active_card(&self) -> &CardState {
        &self.card
    }

    pub fn active_view(&self) -> CardView<'_> {
        self.card.view(self.active_project())
    }

    /// 1-based position of the active slide and the slide count.
    pub fn position(&self) -> (usize, usize) {
        (self.navigator.current_index() + 1, self.items.len())
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.navigator.current_index(),
            transitioning: self.navigator.is_transitioning(),
            expanded: self.card.is_expanded(),
        }
    }

    pub fn go_to(&mut self, index: usize) -> Result<Navigation> {
        let outcome = self.navigator.go_to(index)?;
        self.on_navigation(outcome);
        Ok(outcome)
    }

    pub fn go_to_previous(&mut self) -> Result<Navigation> {
        let outcome = self.navigator.go_to_previous()?;
        if let Navigation::Moved { .. } = outcome {
            self.direction = SlideDirection::Backward;
        }
        self.remount(outcome);
        Ok(outcome)
    }

    pub fn go_to_next(&mut self) -> Result<Navigation> {
        let outcome = self.navigator.go_to_next()?;
        if let Navigation::Moved { .. } = outcome {
            self.direction = SlideDirection::Forward;
        }
        self.remount(outcome);
        Ok(outcome)
    }

    pub fn toggle_card(&mut self) {
        self.card.toggle();
        debug!(
            index = self.navigator.current_index(),
            expanded = self.card.is_expanded(),
            "card toggled"
        );
    }

    // Toggling never fails; navigation may be rejected or locked.
    pub fn handle(&mut self, input: CarouselInput) -> Result<Navigation> {
        match input {
            CarouselInput::Dot(index) => self.go_to(index),
            CarouselInput::Previous => self.go_to_previous(),
            CarouselInput::Next => self.go_to_next(),
            CarouselInput::ToggleCard => {
                self.toggle_card();
                Ok(Navigation::Toggled)
            }
        }
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        self.navigator.tick(dt)
    }

    fn on_navigation(&mut self, outcome: Navigation) {
        if let Navigation::Moved { from, to } = outcome {
            self.direction = if to > from {
                SlideDirection::Forward
            } else {
                SlideDirection::Backward
            };
        }
        self.remount(outcome);
    }

    fn remount(&mut self, outcome: Navigation) {
        if let Navigation::Moved { .. } = outcome {
            self.card = CardState::new();
        }
    }
}

impl fmt::Display for CarouselSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index={} transitioning={} expanded={}",
            self.current_index, self.transitioning, self.expanded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectLink;

    fn projects(titles: &[&str]) -> Vec<Project> {
        titles
            .iter()
            .map(|title| Project {
                image: format!("{title}.png").into(),
                title: title.to_string(),
                description: format!("About {title}"),
                skills: vec!["Rust".to_string()],
                link: ProjectLink::Label(title.to_string()),
            })
            .collect()
    }

    #[test]
    fn empty_project_list_is_rejected() {
        assert!(matches!(
            Carousel::new(Vec::new(), 0.3),
            Err(Error::EmptyCarousel)
        ));
    }

    #[test]
    fn position_is_one_based() {
        let mut carousel = Carousel::new(projects(&["A", "B", "C"]), 0.3).unwrap();
        assert_eq!(carousel.position(), (1, 3));
        carousel.go_to(2).unwrap();
        assert_eq!(carousel.position(), (3, 3));
    }

    #[test]
    fn toggle_input_reports_toggled() {
        let mut carousel = Carousel::new(projects(&["A", "B"]), 0.3).unwrap();
        assert_eq!(
            carousel.handle(CarouselInput::ToggleCard).unwrap(),
            Navigation::Toggled
        );
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn moving_resets_expanded_card() {
        let mut carousel = Carousel::new(projects(&["A", "B"]), 0.3).unwrap();
        carousel.handle(CarouselInput::ToggleCard).unwrap();
        assert!(carousel.snapshot().expanded);

        carousel.handle(CarouselInput::Dot(1)).unwrap();
        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.current_index, 1);
        assert!(snapshot.transitioning);
        assert!(!snapshot.expanded);
        assert_eq!(carousel.active_project().title, "B");
    }

    #[test]
    fn rejected_navigation_keeps_card_expanded() {
        let mut carousel = Carousel::new(projects(&["A", "B"]), 0.3).unwrap();
        carousel.toggle_card();

        assert!(carousel.go_to(0).is_ok());
        assert!(carousel.go_to(7).is_err());
        assert!(carousel.snapshot().expanded);
    }

    #[test]
    fn controls_disabled_until_lock_clears() {
        let mut carousel = Carousel::new(projects(&["A", "B", "C"]), 0.3).unwrap();
        carousel.go_to_next().unwrap();
        assert!(!carousel.controls_enabled());
        assert_eq!(
            carousel.handle(CarouselInput::Next).unwrap(),
            Navigation::Locked
        );

        assert!(carousel.tick(0.3));
        assert!(carousel.controls_enabled());
        assert_eq!(
            carousel.handle(CarouselInput::Next).unwrap(),
            Navigation::Moved { from: 1, to: 2 }
        );
    }

    #[test]
    fn direction_follows_the_request() {
        let mut carousel = Carousel::new(projects(&["A", "B", "C"]), 0.0).unwrap();

        carousel.go_to_previous().unwrap();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.direction(), SlideDirection::Backward);
        carousel.tick(0.0);

        carousel.go_to_next().unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), SlideDirection::Forward);
        carousel.tick(0.0);

        carousel.go_to(1).unwrap();
        assert_eq!(carousel.direction(), SlideDirection::Forward);
    }

    #[test]
    fn toggling_is_allowed_while_settling() {
        let mut carousel = Carousel::new(projects(&["A", "B"]), 0.3).unwrap();
        carousel.go_to_next().unwrap();
        carousel.toggle_card();
        assert!(carousel.snapshot().expanded);
        assert!(matches!(carousel.active_view(), CardView::Expanded { .. }));
    }
}
