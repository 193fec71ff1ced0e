use std::path::Path;

use crate::project::{Project, ProjectLink};

/// Expansion flag of the card currently on screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardState {
    expanded: bool,
}

/// What a card shows, borrowed from its project.
#[derive(Debug, PartialEq)]
pub enum CardView<'a> {
    /// Image preview, title, divider and a "show details" control.
    Collapsed { image: &'a Path, title: &'a str },
    /// Image, skill badges, title, divider, description, link and a "return" control.
    Expanded {
        image: &'a Path,
        skills: &'a [String],
        title: &'a str,
        description: &'a str,
        link: &'a ProjectLink,
    },
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn view<'a>(&self, project: &'a Project) -> CardView<'a> {
        if self.expanded {
            CardView::Expanded {
                image: &project.image,
                skills: &project.skills,
                title: &project.title,
                description: &project.description,
                link: &project.link,
            }
        } else {
            CardView::Collapsed {
                image: &project.image,
                title: &project.title,
            }
        }
    }
}

impl CardView<'_> {
    /// Label of the control that flips the card.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            CardView::Collapsed { .. } => "Show details",
            CardView::Expanded { .. } => "Return",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            image: "cover.png".into(),
            title: "Weather station".to_string(),
            description: "Reads sensors and plots them".to_string(),
            skills: vec!["Rust".to_string(), "Embedded".to_string()],
            link: ProjectLink::Label("Private".to_string()),
        }
    }

    #[test]
    fn starts_collapsed() {
        let card = CardState::new();
        assert!(!card.is_expanded());
        assert!(matches!(card.view(&project()), CardView::Collapsed { .. }));
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut card = CardState::new();
        card.toggle();
        assert!(card.is_expanded());
        card.toggle();
        assert!(!card.is_expanded());
    }

    #[test]
    fn expanded_view_carries_details_in_order() {
        let project = project();
        let mut card = CardState::new();
        card.toggle();

        match card.view(&project) {
            CardView::Expanded {
                skills,
                description,
                link,
                ..
            } => {
                assert_eq!(skills, ["Rust", "Embedded"]);
                assert_eq!(description, "Reads sensors and plots them");
                assert_eq!(link.label(), "Private");
            }
            other => panic!("expected expanded view, got {other:?}"),
        }
        assert_eq!(card.view(&project).toggle_label(), "Return");
    }
}
