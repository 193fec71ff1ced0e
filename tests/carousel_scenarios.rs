//! End-to-end carousel behavior through the public API.

use portfolio::*;

const SETTLE: f32 = 0.3;

fn projects(titles: &[&str]) -> Vec<Project> {
    titles
        .iter()
        .map(|title| Project {
            image: format!("{title}.png").into(),
            title: title.to_string(),
            description: format!("{title} description"),
            skills: vec!["Rust".to_string(), "Rust".to_string()],
            link: ProjectLink::Url {
                label: title.to_string(),
                url: format!("https://example.com/{title}"),
            },
        })
        .collect()
}

fn settle(carousel: &mut Carousel) {
    carousel.tick(SETTLE);
    assert!(!carousel.is_transitioning());
}

#[test]
fn three_slide_walkthrough() {
    let mut carousel = Carousel::new(projects(&["A", "B", "C"]), SETTLE).unwrap();
    assert_eq!(carousel.current_index(), 0);

    carousel.go_to_next().unwrap();
    assert_eq!(carousel.current_index(), 1);
    settle(&mut carousel);

    carousel.go_to_previous().unwrap();
    assert_eq!(carousel.current_index(), 0);
    settle(&mut carousel);

    carousel.go_to_previous().unwrap();
    assert_eq!(carousel.current_index(), 2);
    settle(&mut carousel);

    let err = carousel.go_to(5).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 5, len: 3 }));
    assert_eq!(carousel.current_index(), 2);
    assert!(!carousel.is_transitioning());
}

#[test]
fn expanded_card_is_not_inherited() {
    let mut carousel = Carousel::new(projects(&["A", "B", "C"]), SETTLE).unwrap();
    carousel.handle(CarouselInput::ToggleCard).unwrap();
    assert!(carousel.snapshot().expanded);

    carousel.handle(CarouselInput::Next).unwrap();
    assert_eq!(
        carousel.snapshot(),
        CarouselSnapshot {
            current_index: 1,
            transitioning: true,
            expanded: false,
        }
    );
    assert!(matches!(carousel.active_view(), CardView::Collapsed { title: "B", .. }));
}

#[test]
fn every_valid_index_locks_then_settles() {
    let mut carousel = Carousel::new(projects(&["A", "B", "C", "D"]), SETTLE).unwrap();
    for i in [3, 1, 2, 0] {
        let from = carousel.current_index();
        assert_eq!(carousel.go_to(i).unwrap(), Navigation::Moved { from, to: i });
        assert_eq!(carousel.current_index(), i);
        assert!(carousel.is_transitioning());
        assert!(!carousel.controls_enabled());

        settle(&mut carousel);
        assert!(carousel.controls_enabled());
    }
}

#[test]
fn same_index_and_locked_requests_are_no_ops() {
    let mut carousel = Carousel::new(projects(&["A", "B", "C"]), SETTLE).unwrap();
    assert_eq!(carousel.go_to(0).unwrap(), Navigation::Unchanged);
    assert!(!carousel.is_transitioning());

    carousel.go_to(2).unwrap();
    for input in [CarouselInput::Dot(1), CarouselInput::Next, CarouselInput::Previous] {
        assert_eq!(carousel.handle(input).unwrap(), Navigation::Locked);
    }
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn full_cycles_return_home() {
    let mut carousel = Carousel::new(projects(&["A", "B", "C", "D", "E"]), SETTLE).unwrap();
    for _ in 0..carousel.len() {
        carousel.go_to_next().unwrap();
        settle(&mut carousel);
    }
    assert_eq!(carousel.current_index(), 0);

    for _ in 0..carousel.len() {
        carousel.go_to_previous().unwrap();
        settle(&mut carousel);
    }
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn single_project_never_transitions() {
    let mut carousel = Carousel::new(projects(&["Solo"]), SETTLE).unwrap();
    for input in [CarouselInput::Next, CarouselInput::Previous, CarouselInput::Dot(0)] {
        assert_eq!(carousel.handle(input).unwrap(), Navigation::Unchanged);
        assert!(!carousel.is_transitioning());
    }
    assert_eq!(carousel.position(), (1, 1));
}
