use raylib::prelude::*;

use crate::carousel::{CarouselInput, CarouselSnapshot};

const MARGIN: f32 = 40.0;
const HEADER_HEIGHT: f32 = 72.0;
const TITLE_Y: f32 = 96.0;
const CATEGORY_Y: f32 = 190.0;
const CATEGORY_HEIGHT: f32 = 110.0;
const CARD_WIDTH: f32 = 600.0;
const CARD_HEIGHT: f32 = 300.0;
const CARD_Y: f32 = 324.0;
const ARROW_SIZE: f32 = 48.0;
const DOT_SPACING: f32 = 24.0;
const DOT_HIT: f32 = 20.0;
const SHOWCASE_HEIGHT: f32 = 110.0;
const BUTTON_HEIGHT: f32 = 36.0;
const FOOTER_HEIGHT: f32 = 56.0;
const CONTACT_SLOT: f32 = 110.0;

/// Something the pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    ToggleTheme,
    Carousel(CarouselInput),
    OpenShowcase(usize),
    OpenContact(usize),
    OpenProjectLink,
}

/// Element under the pointer that reacts to hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    Logo,
    ThemeSwitch,
    Category(usize),
    Card,
    Showcase(usize),
    Contact(usize),
}

/// Screen rectangles of every interactive or framed element.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub header: Rectangle,
    pub logo: Rectangle,
    pub theme_switch: Rectangle,
    pub title_y: f32,
    pub categories: Vec<Rectangle>,
    pub card: Rectangle,
    pub card_image: Rectangle,
    pub card_thumbnail: Rectangle,
    pub card_toggle: Rectangle,
    pub card_link: Rectangle,
    pub previous: Rectangle,
    pub next: Rectangle,
    pub dots: Vec<Rectangle>,
    pub position_y: f32,
    pub showcase: Rectangle,
    pub showcase_links: Vec<Rectangle>,
    pub footer: Rectangle,
    pub contacts: Vec<Rectangle>,
}

impl PageLayout {
    pub fn new(
        width: i32,
        height: i32,
        category_count: usize,
        project_count: usize,
        showcase_link_count: usize,
        contact_count: usize,
    ) -> Self {
        let width = width as f32;
        let height = height as f32;

        let header = Rectangle::new(0.0, 0.0, width, HEADER_HEIGHT);
        let logo = Rectangle::new(MARGIN, 18.0, 320.0, 36.0);
        let theme_switch = Rectangle::new(width - MARGIN - 56.0, 22.0, 56.0, 28.0);

        let categories = row_of(
            category_count,
            Rectangle::new(MARGIN, CATEGORY_Y, width - 2.0 * MARGIN, CATEGORY_HEIGHT),
            20.0,
        );

        let card_width = CARD_WIDTH.min(width - 2.0 * (MARGIN + ARROW_SIZE + 20.0));
        let card = Rectangle::new((width - card_width) / 2.0, CARD_Y, card_width, CARD_HEIGHT);
        let card_image = Rectangle::new(card.x + 20.0, card.y + 20.0, card.width - 40.0, 170.0);
        let card_thumbnail = Rectangle::new(card.x + 20.0, card.y + 20.0, 180.0, 110.0);
        let button_y = card.y + card.height - BUTTON_HEIGHT - 16.0;
        let card_toggle = Rectangle::new(card.x + 20.0, button_y, 150.0, BUTTON_HEIGHT);
        let card_link = Rectangle::new(card.x + card.width - 220.0, button_y, 200.0, BUTTON_HEIGHT);

        let arrow_y = card.y + (card.height - ARROW_SIZE) / 2.0;
        let previous = Rectangle::new(card.x - ARROW_SIZE - 20.0, arrow_y, ARROW_SIZE, ARROW_SIZE);
        let next = Rectangle::new(card.x + card.width + 20.0, arrow_y, ARROW_SIZE, ARROW_SIZE);

        let dots_y = card.y + card.height + 16.0;
        let dots_width = DOT_SPACING * project_count.saturating_sub(1) as f32;
        let first_dot_x = width / 2.0 - dots_width / 2.0;
        let dots = (0..project_count)
            .map(|i| {
                let cx = first_dot_x + DOT_SPACING * i as f32;
                Rectangle::new(cx - DOT_HIT / 2.0, dots_y, DOT_HIT, DOT_HIT)
            })
            .collect();
        let position_y = dots_y + DOT_HIT + 6.0;

        let showcase = Rectangle::new(
            MARGIN,
            position_y + 34.0,
            width - 2.0 * MARGIN,
            SHOWCASE_HEIGHT,
        );
        let showcase_links = (0..showcase_link_count)
            .map(|i| {
                Rectangle::new(
                    showcase.x + showcase.width - 20.0 - 190.0 * (showcase_link_count - i) as f32,
                    showcase.y + showcase.height - BUTTON_HEIGHT - 20.0,
                    170.0,
                    BUTTON_HEIGHT,
                )
            })
            .collect();

        let footer = Rectangle::new(0.0, height - FOOTER_HEIGHT, width, FOOTER_HEIGHT);
        let contacts = (0..contact_count)
            .map(|i| {
                Rectangle::new(
                    width - MARGIN - CONTACT_SLOT * (contact_count - i) as f32,
                    footer.y + 16.0,
                    CONTACT_SLOT - 10.0,
                    24.0,
                )
            })
            .collect();

        Self {
            width,
            height,
            header,
            logo,
            theme_switch,
            title_y: TITLE_Y,
            categories,
            card,
            card_image,
            card_thumbnail,
            card_toggle,
            card_link,
            previous,
            next,
            dots,
            position_y,
            showcase,
            showcase_links,
            footer,
            contacts,
        }
    }

    /// Map a pointer position to an action. `card_offset` is where the
    /// sliding card is drawn relative to its resting place. The project link
    /// only counts while the card is expanded and the link has a destination.
    pub fn hit(
        &self,
        point: Vector2,
        snapshot: &CarouselSnapshot,
        link_navigable: bool,
        card_offset: Vector2,
    ) -> Option<PageAction> {
        if self.theme_switch.check_collision_point_rec(point) {
            return Some(PageAction::ToggleTheme);
        }
        if self.previous.check_collision_point_rec(point) {
            return Some(PageAction::Carousel(CarouselInput::Previous));
        }
        if self.next.check_collision_point_rec(point) {
            return Some(PageAction::Carousel(CarouselInput::Next));
        }
        if let Some(i) = self.dots.iter().position(|r| r.check_collision_point_rec(point)) {
            return Some(PageAction::Carousel(CarouselInput::Dot(i)));
        }
        if shift(self.card_toggle, card_offset).check_collision_point_rec(point) {
            return Some(PageAction::Carousel(CarouselInput::ToggleCard));
        }
        if snapshot.expanded
            && link_navigable
            && shift(self.card_link, card_offset).check_collision_point_rec(point)
        {
            return Some(PageAction::OpenProjectLink);
        }
        if let Some(i) = self
            .showcase_links
            .iter()
            .position(|r| r.check_collision_point_rec(point))
        {
            return Some(PageAction::OpenShowcase(i));
        }
        self.contacts
            .iter()
            .position(|r| r.check_collision_point_rec(point))
            .map(PageAction::OpenContact)
    }

    pub fn hover_target(&self, point: Vector2, card_offset: Vector2) -> Option<HoverTarget> {
        if self.logo.check_collision_point_rec(point) {
            return Some(HoverTarget::Logo);
        }
        if self.theme_switch.check_collision_point_rec(point) {
            return Some(HoverTarget::ThemeSwitch);
        }
        if let Some(i) = self.categories.iter().position(|r| r.check_collision_point_rec(point)) {
            return Some(HoverTarget::Category(i));
        }
        if shift(self.card, card_offset).check_collision_point_rec(point) {
            return Some(HoverTarget::Card);
        }
        if let Some(i) = self
            .showcase_links
            .iter()
            .position(|r| r.check_collision_point_rec(point))
        {
            return Some(HoverTarget::Showcase(i));
        }
        self.contacts
            .iter()
            .position(|r| r.check_collision_point_rec(point))
            .map(HoverTarget::Contact)
    }
}

pub fn shift(rect: Rectangle, offset: Vector2) -> Rectangle {
    Rectangle::new(rect.x + offset.x, rect.y + offset.y, rect.width, rect.height)
}

/// Split `area` into `count` equal columns separated by `gap`.
fn row_of(count: usize, area: Rectangle, gap: f32) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    let width = (area.width - gap * (count - 1) as f32) / count as f32;
    (0..count)
        .map(|i| Rectangle::new(area.x + (width + gap) * i as f32, area.y, width, area.height))
        .collect()
}

/// Greedy word wrap. `measure` returns the pixel width of a string.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Place skill badges left to right inside `area`, wrapping to new rows.
/// Badges that do not fit vertically are dropped.
pub fn badge_rects(
    skills: &[String],
    area: Rectangle,
    badge_height: f32,
    measure: impl Fn(&str) -> i32,
) -> Vec<Rectangle> {
    const PADDING: f32 = 10.0;
    const GAP: f32 = 6.0;

    let mut rects = Vec::with_capacity(skills.len());
    let mut x = area.x;
    let mut y = area.y;
    for skill in skills {
        let w = (measure(skill) as f32 + 2.0 * PADDING).min(area.width);
        if x > area.x && x + w > area.x + area.width {
            x = area.x;
            y += badge_height + GAP;
        }
        if y + badge_height > area.y + area.height {
            break;
        }
        rects.push(Rectangle::new(x, y, w, badge_height));
        x += w + GAP;
    }
    rects
}
