//! The portfolio page: owns the carousel and theme, turns input into
//! actions and paints every section with raylib.

use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::animation::{self, Entrance, HoverState, Pose};
use crate::card::CardView;
use crate::carousel::{Carousel, CarouselInput, Navigation};
use crate::config::{Category, Config, ExternalLink, Showcase, SiteConfig};
use crate::error::Result;
use crate::layout::{self, HoverTarget, PageAction, PageLayout, shift};
use crate::project::ProjectLink;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::theme::{Palette, ThemeSettings};

const TITLE_SIZE: i32 = 44;
const HEADING_SIZE: i32 = 22;
const BODY_SIZE: i32 = 16;
const SMALL_SIZE: i32 = 14;

pub struct Portfolio {
    site: SiteConfig,
    categories: Vec<Category>,
    showcase: Option<Showcase>,
    contacts: Vec<ExternalLink>,
    carousel: Carousel,
    theme: ThemeSettings,
    layout: PageLayout,
    textures: Vec<Option<Texture2D>>,
    elapsed: f32,
    pointer: Vector2,
    hover: HoverState,
}

impl Portfolio {
    pub fn new(config: Config, theme: ThemeSettings) -> Result<Self> {
        config.validate()?;
        let settle_window = config.settle_window();
        let showcase_links = config.showcase.as_ref().map_or(0, |s| s.links.len());
        let layout = PageLayout::new(
            config.window.width,
            config.window.height,
            config.categories.len(),
            config.projects.len(),
            showcase_links,
            config.contacts.len(),
        );
        let carousel = Carousel::new(config.projects, settle_window)?;

        Ok(Self {
            site: config.site,
            categories: config.categories,
            showcase: config.showcase,
            contacts: config.contacts,
            carousel,
            theme,
            layout,
            textures: Vec::new(),
            elapsed: 0.0,
            pointer: Vector2::new(-1.0, -1.0),
            hover: HoverState::new(),
        })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn point_at(&mut self, point: Vector2) {
        self.pointer = point;
    }

    /// Where the card and its controls are drawn, relative to their resting place.
    pub fn card_offset(&self) -> Vector2 {
        let section = Entrance::fade_in_up().delayed(1.2).sample(self.elapsed);
        let slide = animation::card_slide_offset(
            self.carousel.direction(),
            self.carousel.settle_progress(),
        );
        Vector2::new(section.offset.x + slide, section.offset.y)
    }

    /// Act on a click at `point`, hit-testing against what is on screen.
    pub fn click(&mut self, point: Vector2) -> Option<String> {
        self.point_at(point);
        let navigable = self.carousel.active_project().link.is_navigable();
        let snapshot = self.carousel.snapshot();
        let action = self.layout.hit(point, &snapshot, navigable, self.card_offset())?;
        self.apply(action)
    }

    // Failures leave a placeholder tile.
    pub fn load_textures(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.textures = self
            .carousel
            .items()
            .iter()
            .map(|project| match load_texture_with_exif_rotation(rl, thread, &project.image) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!(project = %project.title, error = %e, "using placeholder image");
                    None
                }
            })
            .collect();
        let loaded = self.textures.iter().filter(|t| t.is_some()).count();
        info!(loaded, total = self.textures.len(), "project images loaded");
    }

    /// Apply one action. Returns the destination when a link was activated.
    pub fn apply(&mut self, action: PageAction) -> Option<String> {
        match action {
            PageAction::ToggleTheme => {
                let theme = self.theme.toggle();
                info!(theme = theme.as_str(), "theme switched");
                None
            }
            PageAction::Carousel(input) => {
                match self.carousel.handle(input) {
                    Ok(Navigation::Locked) => debug!(?input, "ignored while settling"),
                    Ok(_) => {}
                    Err(e) => warn!(?input, error = %e, "carousel input rejected"),
                }
                None
            }
            PageAction::OpenShowcase(i) => {
                let link = self.showcase.as_ref()?.links.get(i)?;
                Some(open_link(&link.label, &link.url))
            }
            PageAction::OpenContact(i) => {
                let link = self.contacts.get(i)?;
                Some(open_link(&link.label, &link.url))
            }
            PageAction::OpenProjectLink => {
                if !self.carousel.active_card().is_expanded() {
                    return None;
                }
                match &self.carousel.active_project().link {
                    ProjectLink::Url { label, url } => Some(open_link(label, url)),
                    ProjectLink::Label(_) => None,
                }
            }
        }
    }

    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        let mut actions = Vec::new();

        self.point_at(rl.get_mouse_position());
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.click(rl.get_mouse_position());
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            actions.push(PageAction::Carousel(CarouselInput::Previous));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            actions.push(PageAction::Carousel(CarouselInput::Next));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            actions.push(PageAction::Carousel(CarouselInput::ToggleCard));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            actions.push(PageAction::ToggleTheme);
        }

        for action in actions {
            self.apply(action);
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.carousel.tick(dt) {
            debug!(snapshot = %self.carousel.snapshot(), "carousel settled");
        }
        let hovered = self.layout.hover_target(self.pointer, self.card_offset());
        self.hover.update(hovered, dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let palette = self.theme.palette();
        d.clear_background(palette.background);

        self.draw_header(d, &palette);
        self.draw_title(d, &palette);
        self.draw_categories(d, &palette);
        self.draw_carousel(d, &palette);
        self.draw_showcase(d, &palette);
        self.draw_footer(d, &palette);
    }

    fn draw_header(&self, d: &mut RaylibDrawHandle, palette: &Palette) {
        let pose = Entrance::header_drop().sample(self.elapsed);
        let header = shift(self.layout.header, pose.offset);
        d.draw_rectangle_rec(header, fade(palette.surface, pose.opacity));
        d.draw_rectangle_rec(
            Rectangle::new(header.x, header.y + header.height - 1.0, header.width, 1.0),
            fade(palette.border, pose.opacity),
        );
        let logo = self.hover.pose(HoverTarget::Logo);
        let logo_size = (HEADING_SIZE as f32 * logo.scale) as i32;
        d.draw_text(
            &self.site.owner,
            40,
            (header.y + 24.0) as i32 - (logo_size - HEADING_SIZE) / 2,
            logo_size,
            fade(palette.text, pose.opacity),
        );

        // Checked (knob on the right) means the light theme.
        let switch = self.hover.pose(HoverTarget::ThemeSwitch);
        let track = scale_about_center(shift(self.layout.theme_switch, pose.offset), switch.scale);
        d.draw_rectangle_rounded(track, 1.0, 12, fade(palette.border, pose.opacity));
        let knob_x = if self.theme.is_dark() {
            track.x + track.height / 2.0
        } else {
            track.x + track.width - track.height / 2.0
        };
        d.draw_circle(
            knob_x as i32,
            (track.y + track.height / 2.0) as i32,
            track.height / 2.0 - 4.0,
            fade(palette.accent, pose.opacity),
        );
    }

    fn draw_title(&self, d: &mut RaylibDrawHandle, palette: &Palette) {
        let title = &self.site.title;
        let width = measure_text(title, TITLE_SIZE);
        let x0 = (self.layout.width as i32 - width) / 2;
        let y = self.layout.title_y as i32;

        for (byte_index, ch) in title.char_indices() {
            let opacity = animation::title_letter_opacity(
                title[..byte_index].chars().count(),
                self.elapsed,
                0.3,
            );
            if opacity <= 0.0 {
                continue;
            }
            let x = x0 + measure_text(&title[..byte_index], TITLE_SIZE);
            let glyph = ch.to_string();
            d.draw_text(&glyph, x, y, TITLE_SIZE, fade(palette.text, opacity));
        }

        if !self.site.tagline.is_empty() {
            let pose = Entrance::fade_in_up().delayed(0.6).sample(self.elapsed);
            let w = measure_text(&self.site.tagline, BODY_SIZE);
            d.draw_text(
                &self.site.tagline,
                (self.layout.width as i32 - w) / 2 + pose.offset.x as i32,
                y + 56 + (pose.offset.y * 0.3) as i32,
                BODY_SIZE,
                fade(palette.muted, pose.opacity),
            );
        }
    }

    fn draw_categories(&self, d: &mut RaylibDrawHandle, palette: &Palette) {
        for (i, (category, rect)) in self.categories.iter().zip(&self.layout.categories).enumerate() {
            let pose = Entrance::scale_in().delayed(0.8).staggered(i).sample(self.elapsed);
            let hover = self.hover.pose(HoverTarget::Category(i));
            let rect = shift(scale_about_center(*rect, pose.scale * hover.scale), hover.offset);
            d.draw_rectangle_rounded(rect, 0.12, 8, fade(palette.surface, pose.opacity));

            let text_color = fade(palette.text, pose.opacity);
            d.draw_text(
                &category.title,
                (rect.x + 16.0) as i32,
                (rect.y + 14.0) as i32,
                18,
                text_color,
            );
            let max_width = (rect.width - 32.0) as i32;
            let lines = layout::wrap_text(&category.description, max_width, |s| {
                measure_text(s, SMALL_SIZE)
            });
            for (row, line) in lines.iter().take(4).enumerate() {
                d.draw_text(
                    line,
                    (rect.x + 16.0) as i32,
                    (rect.y + 42.0) as i32 + row as i32 * 16,
                    SMALL_SIZE,
                    fade(palette.muted, pose.opacity),
                );
            }
        }
    }

    fn draw_carousel(&self, d: &mut RaylibDrawHandle, palette: &Palette) {
        let section = Entrance::fade_in_up().delayed(1.2).sample(self.elapsed);
        let settle = self.carousel.settle_progress();
        let card_opacity = section.opacity * (0.4 + 0.6 * settle);
        let offset = self.card_offset();

        let card = shift(self.layout.card, offset);
        let frame = scale_about_center(card, self.hover.pose(HoverTarget::Card).scale);
        d.draw_rectangle_rounded(
            grow(frame, 1.0),
            0.06,
            8,
            fade(palette.border, card_opacity),
        );
        d.draw_rectangle_rounded(frame, 0.06, 8, fade(palette.surface, card_opacity));

        let index = self.carousel.current_index();
        let texture = self.textures.get(index).and_then(Option::as_ref);
        let view = self.carousel.active_view();
        match &view {
            CardView::Collapsed { title, .. } => {
                let image = shift(self.layout.card_image, offset);
                draw_image(d, texture, image, title, palette, card_opacity);
                let title_y = image.y + image.height + 14.0;
                d.draw_text(title, (card.x + 20.0) as i32, title_y as i32, HEADING_SIZE, fade(palette.text, card_opacity));
                draw_divider(d, card, title_y + 32.0, palette, card_opacity);
            }
            CardView::Expanded {
                skills,
                title,
                description,
                link,
                ..
            } => {
                let thumb = shift(self.layout.card_thumbnail, offset);
                draw_image(d, texture, thumb, title, palette, card_opacity);

                let badge_area = Rectangle::new(
                    thumb.x + thumb.width + 16.0,
                    thumb.y,
                    card.x + card.width - 20.0 - (thumb.x + thumb.width + 16.0),
                    thumb.height,
                );
                let rects = layout::badge_rects(skills, badge_area, 22.0, |s| measure_text(s, SMALL_SIZE));
                for (skill, rect) in skills.iter().zip(&rects) {
                    d.draw_rectangle_rounded(*rect, 0.5, 6, fade(palette.badge, card_opacity));
                    d.draw_text(skill, (rect.x + 10.0) as i32, (rect.y + 4.0) as i32, SMALL_SIZE, fade(palette.accent, card_opacity));
                }

                let title_y = thumb.y + thumb.height + 10.0;
                d.draw_text(title, (card.x + 20.0) as i32, title_y as i32, HEADING_SIZE, fade(palette.text, card_opacity));
                draw_divider(d, card, title_y + 30.0, palette, card_opacity);

                let lines = layout::wrap_text(description, (card.width - 40.0) as i32, |s| {
                    measure_text(s, SMALL_SIZE)
                });
                let button_top = self.layout.card_toggle.y + offset.y;
                for (row, line) in lines.iter().enumerate() {
                    let y = title_y + 40.0 + row as f32 * 17.0;
                    if y + 17.0 > button_top {
                        break;
                    }
                    d.draw_text(line, (card.x + 20.0) as i32, y as i32, SMALL_SIZE, fade(palette.muted, card_opacity));
                }

                let link_rect = shift(self.layout.card_link, offset);
                let link_color = if link.is_navigable() { palette.accent } else { palette.muted };
                draw_button(d, link_rect, link.label(), link_color, palette, card_opacity, link.is_navigable());
            }
        }

        let toggle = shift(self.layout.card_toggle, offset);
        draw_button(d, toggle, view.toggle_label(), palette.accent, palette, card_opacity, true);

        self.draw_navigation(d, palette, section);
    }

    fn draw_navigation(&self, d: &mut RaylibDrawHandle, palette: &Palette, section: Pose) {
        let enabled = self.carousel.controls_enabled();
        let control_opacity = section.opacity * if enabled { 1.0 } else { 0.4 };

        for (rect, glyph) in [(self.layout.previous, "<"), (self.layout.next, ">")] {
            let rect = shift(rect, section.offset);
            d.draw_rectangle_rounded(rect, 1.0, 12, fade(palette.surface, control_opacity));
            let w = measure_text(glyph, HEADING_SIZE);
            d.draw_text(
                glyph,
                (rect.x + (rect.width - w as f32) / 2.0) as i32,
                (rect.y + 13.0) as i32,
                HEADING_SIZE,
                fade(palette.text, control_opacity),
            );
        }

        let current = self.carousel.current_index();
        for (i, rect) in self.layout.dots.iter().enumerate() {
            let rect = shift(*rect, section.offset);
            let (radius, color) = if i == current {
                (7.0, palette.accent)
            } else {
                (5.0, palette.border)
            };
            d.draw_circle(
                (rect.x + rect.width / 2.0) as i32,
                (rect.y + rect.height / 2.0) as i32,
                radius,
                fade(color, control_opacity),
            );
        }

        let (position, total) = self.carousel.position();
        let readout = format!("{position} / {total}");
        let w = measure_text(&readout, SMALL_SIZE);
        d.draw_text(
            &readout,
            (self.layout.width as i32 - w) / 2,
            (self.layout.position_y + section.offset.y) as i32,
            SMALL_SIZE,
            fade(palette.muted, section.opacity),
        );
    }

    fn draw_showcase(&self, d: &mut RaylibDrawHandle, palette: &Palette) {
        let Some(showcase) = &self.showcase else {
            return;
        };
        let pose = Entrance::fade_in_up().delayed(1.4).sample(self.elapsed);
        let rect = shift(self.layout.showcase, pose.offset);
        d.draw_rectangle_rounded(rect, 0.1, 8, fade(palette.surface, pose.opacity));
        d.draw_text(
            &showcase.heading,
            (rect.x + 24.0) as i32,
            (rect.y + 20.0) as i32,
            HEADING_SIZE,
            fade(palette.text, pose.opacity),
        );
        d.draw_text(
            &showcase.body,
            (rect.x + 24.0) as i32,
            (rect.y + 52.0) as i32,
            BODY_SIZE,
            fade(palette.muted, pose.opacity),
        );

        for (i, (link, button)) in showcase.links.iter().zip(&self.layout.showcase_links).enumerate() {
            let button_pose = Entrance::scale_in().delayed(1.6).staggered(i).sample(self.elapsed);
            let hover = self.hover.pose(HoverTarget::Showcase(i));
            let button = scale_about_center(
                shift(*button, Vector2::new(pose.offset.x, pose.offset.y + hover.offset.y)),
                button_pose.scale * hover.scale,
            );
            let amount = self.hover.amount(HoverTarget::Showcase(i));
            let color = if i == 0 {
                palette.accent
            } else {
                mix(palette.border, palette.accent, 0.35 * amount)
            };
            draw_button(d, button, &link.label, color, palette, button_pose.opacity, true);
        }
    }

    fn draw_footer(&self, d: &mut RaylibDrawHandle, palette: &Palette) {
        let pose = Entrance::fade_in(0.8).delayed(1.6).sample(self.elapsed);
        let footer = self.layout.footer;
        d.draw_rectangle_rec(footer, fade(palette.surface, pose.opacity));
        d.draw_text(
            &self.site.copyright,
            40,
            (footer.y + 20.0) as i32,
            SMALL_SIZE,
            fade(palette.muted, pose.opacity),
        );

        let links = Entrance::fade_in_left().delayed(1.8).sample(self.elapsed);
        for (i, (contact, rect)) in self.contacts.iter().zip(&self.layout.contacts).enumerate() {
            let target = HoverTarget::Contact(i);
            let size = (BODY_SIZE as f32 * self.hover.pose(target).scale) as i32;
            let color = mix(palette.muted, palette.accent, self.hover.amount(target));
            d.draw_text(
                &contact.label,
                (rect.x - links.offset.x) as i32,
                (rect.y + 4.0) as i32 - (size - BODY_SIZE) / 2,
                size,
                fade(color, links.opacity),
            );
        }
    }
}

fn open_link(label: &str, url: &str) -> String {
    info!(label, url, "link activated");
    url.to_string()
}

fn fade(color: Color, opacity: f32) -> Color {
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8;
    Color::new(color.r, color.g, color.b, alpha)
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
        channel(from.a, to.a),
    )
}

fn grow(rect: Rectangle, by: f32) -> Rectangle {
    Rectangle::new(rect.x - by, rect.y - by, rect.width + 2.0 * by, rect.height + 2.0 * by)
}

fn scale_about_center(rect: Rectangle, scale: f32) -> Rectangle {
    let width = rect.width * scale;
    let height = rect.height * scale;
    Rectangle::new(
        rect.x + (rect.width - width) / 2.0,
        rect.y + (rect.height - height) / 2.0,
        width,
        height,
    )
}

fn draw_divider(d: &mut RaylibDrawHandle, card: Rectangle, y: f32, palette: &Palette, opacity: f32) {
    d.draw_rectangle_rec(
        Rectangle::new(card.x + 20.0, y, card.width - 40.0, 1.0),
        fade(palette.border, opacity),
    );
}

fn draw_button(
    d: &mut RaylibDrawHandle,
    rect: Rectangle,
    label: &str,
    color: Color,
    palette: &Palette,
    opacity: f32,
    enabled: bool,
) {
    let opacity = if enabled { opacity } else { opacity * 0.6 };
    d.draw_rectangle_rounded(rect, 0.5, 8, fade(color, opacity));
    let w = measure_text(label, BODY_SIZE);
    d.draw_text(
        label,
        (rect.x + (rect.width - w as f32) / 2.0) as i32,
        (rect.y + (rect.height - BODY_SIZE as f32) / 2.0) as i32,
        BODY_SIZE,
        fade(palette.background, opacity),
    );
}

/// Fit the texture inside `area` keeping its aspect ratio, or a placeholder tile.
fn draw_image(
    d: &mut RaylibDrawHandle,
    texture: Option<&Texture2D>,
    area: Rectangle,
    title: &str,
    palette: &Palette,
    opacity: f32,
) {
    let Some(texture) = texture else {
        d.draw_rectangle_rounded(area, 0.08, 8, fade(palette.badge, opacity));
        let initial: String = title.chars().take(1).collect();
        let w = measure_text(&initial, TITLE_SIZE);
        d.draw_text(
            &initial,
            (area.x + (area.width - w as f32) / 2.0) as i32,
            (area.y + (area.height - TITLE_SIZE as f32) / 2.0) as i32,
            TITLE_SIZE,
            fade(palette.accent, opacity),
        );
        return;
    };

    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let scale = (area.width / tex_width).min(area.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(
            area.x + (area.width - width) / 2.0,
            area.y + (area.height - height) / 2.0,
            width,
            height,
        ),
        Vector2::new(0.0, 0.0),
        0.0,
        fade(Color::WHITE, opacity),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HOVER_DURATION;
    use crate::project::Project;
    use crate::theme::{MemoryStore, Theme};

    fn config() -> Config {
        toml::from_str(
            r#"
            [[contacts]]
            label = "Github"
            url = "https://github.com/example"

            [showcase]
            heading = "More"
            links = [{ label = "Portfolio", url = "https://example.com" }]

            [[projects]]
            image = "a.png"
            title = "Alpha"
            description = "First"
            link = { label = "Source", url = "https://example.com/alpha" }

            [[projects]]
            image = "b.png"
            title = "Beta"
            description = "Second"
            link = "Private"
            "#,
        )
        .unwrap()
    }

    fn page() -> Portfolio {
        let theme = ThemeSettings::load(Box::new(MemoryStore::new(Some("light"))));
        Portfolio::new(config(), theme).unwrap()
    }

    #[test]
    fn theme_action_flips_theme() {
        let mut page = page();
        assert_eq!(page.theme().theme(), Theme::Light);
        assert_eq!(page.apply(PageAction::ToggleTheme), None);
        assert_eq!(page.theme().theme(), Theme::Dark);
    }

    #[test]
    fn project_link_only_opens_when_expanded() {
        let mut page = page();
        assert_eq!(page.apply(PageAction::OpenProjectLink), None);

        page.apply(PageAction::Carousel(CarouselInput::ToggleCard));
        assert_eq!(
            page.apply(PageAction::OpenProjectLink).as_deref(),
            Some("https://example.com/alpha")
        );
    }

    #[test]
    fn label_only_links_do_not_open() {
        let mut page = page();
        page.apply(PageAction::Carousel(CarouselInput::Next));
        page.update(1.0);
        page.apply(PageAction::Carousel(CarouselInput::ToggleCard));
        assert_eq!(page.carousel().active_project().title, "Beta");
        assert_eq!(page.apply(PageAction::OpenProjectLink), None);
    }

    #[test]
    fn external_links_resolve_by_index() {
        let mut page = page();
        assert_eq!(
            page.apply(PageAction::OpenContact(0)).as_deref(),
            Some("https://github.com/example")
        );
        assert_eq!(
            page.apply(PageAction::OpenShowcase(0)).as_deref(),
            Some("https://example.com")
        );
        assert_eq!(page.apply(PageAction::OpenContact(5)), None);
    }

    #[test]
    fn rejected_dot_leaves_page_intact() {
        let mut page = page();
        page.apply(PageAction::Carousel(CarouselInput::Dot(9)));
        assert_eq!(page.carousel().current_index(), 0);
        assert!(!page.carousel().is_transitioning());
    }

    #[test]
    fn update_releases_navigation_lock() {
        let mut page = page();
        page.apply(PageAction::Carousel(CarouselInput::Dot(1)));
        assert!(!page.carousel().controls_enabled());
        page.update(0.31);
        assert!(page.carousel().controls_enabled());
    }

    #[test]
    fn click_follows_card_while_it_slides_in() {
        let mut page = page();
        page.update(5.0);
        page.apply(PageAction::Carousel(CarouselInput::Next));

        let offset = page.card_offset();
        assert!(offset.x > 0.0);

        // Past the resting button's right edge, inside the drawn one.
        let toggle = page.layout().card_toggle;
        let drawn = Vector2::new(
            toggle.x + toggle.width - 5.0 + offset.x,
            toggle.y + toggle.height / 2.0,
        );
        page.click(drawn);
        assert!(page.carousel().snapshot().expanded);
    }

    #[test]
    fn hovered_contact_eases_in_and_out() {
        let mut page = page();
        let contact = page.layout().contacts[0];
        page.point_at(Vector2::new(contact.x + 5.0, contact.y + 5.0));
        page.update(HOVER_DURATION);
        assert_eq!(page.hover().amount(HoverTarget::Contact(0)), 1.0);
        assert!(page.hover().pose(HoverTarget::Contact(0)).scale > 1.0);

        page.point_at(Vector2::new(-1.0, -1.0));
        page.update(HOVER_DURATION);
        assert_eq!(page.hover().amount(HoverTarget::Contact(0)), 0.0);
    }

    #[test]
    fn mix_blends_channels() {
        let from = Color::new(0, 100, 200, 255);
        let to = Color::new(100, 100, 0, 255);
        let halfway = mix(from, to, 0.5);
        assert_eq!((halfway.r, halfway.g, halfway.b, halfway.a), (50, 100, 100, 255));
        let end = mix(from, to, 3.0);
        assert_eq!((end.r, end.b), (100, 0));
    }

    #[test]
    fn layout_matches_config() {
        let page = page();
        assert_eq!(page.layout().dots.len(), 2);
        assert_eq!(page.layout().contacts.len(), 1);
        assert_eq!(page.layout().showcase_links.len(), 1);
        let _: &[Project] = page.carousel().items();
    }
}
