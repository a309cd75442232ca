use std::time::{Duration, Instant};

use eframe::egui;
use seva_kiosk_adapters::{ContentRequest, ImageUrlResolver};
use seva_kiosk_application::ApplicationError;
use seva_kiosk_domain::{CategoryFilter, GalleryImage};

use crate::textures::TextureStore;
use crate::views::{
    page_heading, ListPhase, BADGE_RED, BRAND_RED, CARD_BG, ERROR_BG, MUTED, PLACEHOLDER,
};

const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
const SLIDE_FADE: Duration = Duration::from_millis(500);
const SKELETON_CARDS: usize = 6;
const GRID_COLUMNS: usize = 3;
const LOAD_ERROR_TEXT: &str = "Failed to load images. Please try again later.";
const GALLERY_SUBTITLE: &str = "Take a look at the moments we've captured while serving our \
                                community through various healthcare initiatives.";

/// Cursor and timing for the featured-image slideshow.
///
/// The autoplay base only moves when a tick fires or a new featured
/// sequence is applied; manual navigation changes the cursor without
/// touching the phase, like the original interval-driven slideshow.
#[derive(Debug, Clone)]
pub struct CarouselState {
    current: usize,
    tick_base: Instant,
    changed_at: Instant,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::anchored(Instant::now())
    }

    pub fn anchored(now: Instant) -> Self {
        Self {
            current: 0,
            tick_base: now,
            changed_at: now,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Applies a replacement featured sequence: the timing base restarts
    /// and the cursor is kept unless it fell off the end.
    pub fn reset_for(&mut self, len: usize, now: Instant) {
        if self.current >= len {
            self.set(0, now);
        }
        self.tick_base = now;
    }

    /// Advances one slide per elapsed interval. No-op for empty or
    /// single-slide sequences.
    pub fn advance_if_due(&mut self, len: usize, now: Instant) -> bool {
        if len <= 1 {
            return false;
        }
        let mut advanced = false;
        while now.duration_since(self.tick_base) >= AUTOPLAY_INTERVAL {
            self.set((self.current + 1) % len, now);
            self.tick_base += AUTOPLAY_INTERVAL;
            advanced = true;
        }
        advanced
    }

    pub fn next(&mut self, len: usize, now: Instant) {
        if len > 0 {
            self.set((self.current + 1) % len, now);
        }
    }

    pub fn previous(&mut self, len: usize, now: Instant) {
        if len > 0 {
            self.set((self.current + len - 1) % len, now);
        }
    }

    pub fn go_to(&mut self, index: usize, len: usize, now: Instant) {
        if index < len {
            self.set(index, now);
        }
    }

    pub fn time_until_tick(&self, now: Instant) -> Duration {
        AUTOPLAY_INTERVAL.saturating_sub(now.duration_since(self.tick_base))
    }

    /// 0..1 fade-in progress of the slide shown since the last change.
    pub fn fade_alpha(&self, now: Instant) -> f32 {
        (now.duration_since(self.changed_at).as_secs_f32() / SLIDE_FADE.as_secs_f32())
            .clamp(0.0, 1.0)
    }

    fn set(&mut self, index: usize, now: Instant) {
        if index != self.current {
            self.current = index;
            self.changed_at = now;
        }
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

/// The gallery page: category-filtered grid, featured slideshow and
/// lightbox. All fetch triggers are returned as requests so the caller
/// owns the pipeline.
pub struct GalleryView {
    mounted: bool,
    filter: CategoryFilter,
    phase: ListPhase,
    images: Vec<GalleryImage>,
    featured: Vec<GalleryImage>,
    carousel: CarouselState,
    selected: Option<GalleryImage>,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self {
            mounted: false,
            filter: CategoryFilter::All,
            phase: ListPhase::Idle,
            images: Vec::new(),
            featured: Vec::new(),
            carousel: CarouselState::new(),
            selected: None,
        }
    }
}

impl GalleryView {
    pub fn mount(&mut self) -> Vec<ContentRequest> {
        *self = Self::default();
        self.mounted = true;
        self.phase = ListPhase::Loading;
        vec![
            ContentRequest::GalleryImages {
                filter: self.filter,
            },
            ContentRequest::FeaturedImages,
        ]
    }

    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    /// Always reloads, even when the same category is picked again, so
    /// two rapid clicks produce two overlapping requests.
    pub fn select_category(&mut self, filter: CategoryFilter) -> ContentRequest {
        self.filter = filter;
        self.phase = ListPhase::Loading;
        ContentRequest::GalleryImages { filter }
    }

    pub fn retry(&mut self) -> ContentRequest {
        self.phase = ListPhase::Loading;
        ContentRequest::GalleryImages {
            filter: self.filter,
        }
    }

    /// Applies a main-list response. Responses are not matched to the
    /// category that requested them: whichever arrives last is shown.
    pub fn apply_images(&mut self, result: Result<Vec<GalleryImage>, ApplicationError>) {
        if !self.mounted {
            return;
        }
        match result {
            Ok(images) => {
                self.images = images;
                self.phase = ListPhase::Ready;
                self.enforce_selection_membership();
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load gallery images");
                self.phase = ListPhase::Failed;
            }
        }
    }

    /// Applies a featured response. Failures degrade to no slideshow.
    pub fn apply_featured(&mut self, result: Result<Vec<GalleryImage>, ApplicationError>) {
        if !self.mounted {
            return;
        }
        match result {
            Ok(featured) => {
                self.featured = featured;
                self.carousel.reset_for(self.featured.len(), Instant::now());
                self.enforce_selection_membership();
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load featured images");
            }
        }
    }

    pub fn select_image(&mut self, image: GalleryImage) {
        self.selected = Some(image);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn featured(&self) -> &[GalleryImage] {
        &self.featured
    }

    pub fn selected(&self) -> Option<&GalleryImage> {
        self.selected.as_ref()
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn show_skeleton(&self) -> bool {
        self.phase == ListPhase::Loading && self.images.is_empty()
    }

    fn enforce_selection_membership(&mut self) {
        if let Some(selected) = &self.selected {
            let id = &selected.id;
            let still_present = self
                .images
                .iter()
                .chain(self.featured.iter())
                .any(|image| &image.id == id);
            if !still_present {
                self.selected = None;
            }
        }
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        textures: &mut TextureStore,
        resolver: &ImageUrlResolver,
        requests: &mut Vec<ContentRequest>,
    ) {
        let now = Instant::now();
        if self.carousel.advance_if_due(self.featured.len(), now) {
            ui.ctx().request_repaint();
        }
        if self.featured.len() > 1 {
            ui.ctx().request_repaint_after(self.carousel.time_until_tick(now));
        }

        if self.show_skeleton() {
            render_skeleton(ui);
            return;
        }
        if self.phase == ListPhase::Failed {
            if render_error_panel(ui) {
                requests.push(self.retry());
            }
            return;
        }

        page_heading(ui, "Our Gallery", GALLERY_SUBTITLE);

        if !self.featured.is_empty() {
            let action = render_carousel(
                ui,
                &self.featured,
                &self.carousel,
                now,
                textures,
                resolver,
                requests,
            );
            let len = self.featured.len();
            match action {
                Some(CarouselAction::Previous) => self.carousel.previous(len, now),
                Some(CarouselAction::Next) => self.carousel.next(len, now),
                Some(CarouselAction::GoTo(index)) => self.carousel.go_to(index, len, now),
                Some(CarouselAction::Open(image)) => self.select_image(image),
                None => {}
            }
        }

        if let Some(choice) = render_category_chips(ui, self.filter) {
            requests.push(self.select_category(choice));
        }

        ui.add_space(16.0);
        if let Some(clicked) = render_grid(ui, &self.images, textures, resolver, requests) {
            self.select_image(clicked);
        }

        let mut close = false;
        if let Some(selected) = &self.selected {
            close = render_lightbox(ui, selected, textures, resolver, requests);
        }
        if close {
            self.clear_selection();
        }
    }
}

enum CarouselAction {
    Previous,
    Next,
    GoTo(usize),
    Open(GalleryImage),
}

pub(crate) fn card_url(resolver: &ImageUrlResolver, image: &GalleryImage) -> String {
    resolver.cropped(&image.image, 600, 400)
}

pub(crate) fn slide_url(resolver: &ImageUrlResolver, image: &GalleryImage) -> String {
    resolver.cropped(&image.image, 1200, 600)
}

pub(crate) fn lightbox_url(resolver: &ImageUrlResolver, image: &GalleryImage) -> String {
    resolver.scaled_width(&image.image, 1200)
}

fn render_skeleton(ui: &mut egui::Ui) {
    let time = ui.input(|input| input.time);
    let pulse = 0.6 + 0.4 * ((time * 2.0).sin() as f32 * 0.5 + 0.5);
    let fill = PLACEHOLDER.gamma_multiply(pulse);
    ui.add_space(32.0);
    for _ in 0..SKELETON_CARDS / GRID_COLUMNS {
        ui.columns(GRID_COLUMNS, |columns| {
            for column in columns.iter_mut() {
                let width = column.available_width();
                let (rect, _) = column.allocate_exact_size(
                    egui::vec2(width, width * 9.0 / 16.0),
                    egui::Sense::hover(),
                );
                column
                    .painter()
                    .rect_filled(rect, egui::CornerRadius::same(8), fill);
            }
        });
        ui.add_space(16.0);
    }
    ui.ctx().request_repaint();
}

fn render_error_panel(ui: &mut egui::Ui) -> bool {
    let mut retry = false;
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        egui::Frame::default()
            .fill(ERROR_BG)
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(20))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(LOAD_ERROR_TEXT).color(BRAND_RED));
                ui.add_space(12.0);
                let button =
                    egui::Button::new(egui::RichText::new("Try Again").color(egui::Color32::WHITE))
                        .fill(BRAND_RED)
                        .corner_radius(egui::CornerRadius::same(8));
                if ui.add(button).clicked() {
                    retry = true;
                }
            });
    });
    retry
}

fn render_category_chips(ui: &mut egui::Ui, active: CategoryFilter) -> Option<CategoryFilter> {
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for choice in CategoryFilter::CHOICES {
            let selected = choice == active;
            let text = egui::RichText::new(choice.label()).color(if selected {
                egui::Color32::WHITE
            } else {
                MUTED
            });
            let chip = egui::Button::new(text)
                .fill(if selected { BRAND_RED } else { CARD_BG })
                .corner_radius(egui::CornerRadius::same(16));
            if ui.add(chip).clicked() {
                picked = Some(choice);
            }
        }
    });
    picked
}

fn render_carousel(
    ui: &mut egui::Ui,
    featured: &[GalleryImage],
    carousel: &CarouselState,
    now: Instant,
    textures: &mut TextureStore,
    resolver: &ImageUrlResolver,
    requests: &mut Vec<ContentRequest>,
) -> Option<CarouselAction> {
    let mut action = None;
    ui.heading(egui::RichText::new("Featured Moments").size(24.0).strong());
    ui.add_space(12.0);

    let width = ui.available_width();
    let height = width * 9.0 / 21.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

    let active = &featured[carousel.current()];
    let url = slide_url(resolver, active);
    let alpha = carousel.fade_alpha(now);
    match textures.get_or_request(&url, requests) {
        Some(texture) => {
            egui::Image::new(texture)
                .tint(egui::Color32::WHITE.gamma_multiply(alpha))
                .corner_radius(egui::CornerRadius::same(12))
                .paint_at(ui, rect);
        }
        None => {
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(12), PLACEHOLDER);
        }
    }
    if alpha < 1.0 {
        ui.ctx().request_repaint();
    }

    let overlay_top = rect.bottom() - 96.0;
    ui.painter().rect_filled(
        egui::Rect::from_min_max(egui::pos2(rect.left(), overlay_top), rect.max),
        egui::CornerRadius::same(12),
        egui::Color32::from_black_alpha(140),
    );
    let badge_rect = egui::Rect::from_min_size(
        egui::pos2(rect.left() + 16.0, overlay_top + 10.0),
        egui::vec2(76.0, 22.0),
    );
    ui.painter()
        .rect_filled(badge_rect, egui::CornerRadius::same(11), BADGE_RED);
    ui.painter().text(
        badge_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Featured",
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
    ui.painter().text(
        egui::pos2(rect.left() + 16.0, overlay_top + 50.0),
        egui::Align2::LEFT_CENTER,
        active.title.as_deref().unwrap_or("Featured Image"),
        egui::FontId::proportional(20.0),
        egui::Color32::WHITE,
    );
    if let Some(description) = &active.description {
        ui.painter().text(
            egui::pos2(rect.left() + 16.0, overlay_top + 76.0),
            egui::Align2::LEFT_CENTER,
            description,
            egui::FontId::proportional(14.0),
            PLACEHOLDER,
        );
    }

    if response.clicked() {
        action = Some(CarouselAction::Open(active.clone()));
    }

    if featured.len() > 1 {
        let arrow = egui::vec2(40.0, 40.0);
        let left = egui::Rect::from_center_size(
            egui::pos2(rect.left() + 32.0, rect.center().y),
            arrow,
        );
        let right = egui::Rect::from_center_size(
            egui::pos2(rect.right() - 32.0, rect.center().y),
            arrow,
        );
        let arrow_button = |label: &str| {
            egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
                .fill(egui::Color32::from_black_alpha(120))
                .corner_radius(egui::CornerRadius::same(20))
        };
        if ui.put(left, arrow_button("◀")).clicked() {
            action = Some(CarouselAction::Previous);
        }
        if ui.put(right, arrow_button("▶")).clicked() {
            action = Some(CarouselAction::Next);
        }

        ui.add_space(8.0);
        let dots_width = featured.len() as f32 * 18.0;
        ui.horizontal(|ui| {
            ui.add_space((width - dots_width).max(0.0) / 2.0);
            for index in 0..featured.len() {
                let color = if index == carousel.current() {
                    BADGE_RED
                } else {
                    PLACEHOLDER
                };
                let dot = egui::Button::new(egui::RichText::new("•").size(18.0).color(color))
                    .frame(false);
                if ui.add(dot).clicked() {
                    action = Some(CarouselAction::GoTo(index));
                }
            }
        });
    }
    ui.add_space(24.0);
    action
}

fn render_grid(
    ui: &mut egui::Ui,
    images: &[GalleryImage],
    textures: &mut TextureStore,
    resolver: &ImageUrlResolver,
    requests: &mut Vec<ContentRequest>,
) -> Option<GalleryImage> {
    let mut clicked = None;
    for row in images.chunks(GRID_COLUMNS) {
        ui.columns(GRID_COLUMNS, |columns| {
            for (column, image) in columns.iter_mut().zip(row) {
                if render_card(column, image, textures, resolver, requests) {
                    clicked = Some(image.clone());
                }
            }
        });
        ui.add_space(16.0);
    }
    clicked
}

fn render_card(
    ui: &mut egui::Ui,
    image: &GalleryImage,
    textures: &mut TextureStore,
    resolver: &ImageUrlResolver,
    requests: &mut Vec<ContentRequest>,
) -> bool {
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), egui::Sense::click());
    let url = card_url(resolver, image);
    match textures.get_or_request(&url, requests) {
        Some(texture) => {
            egui::Image::new(texture)
                .corner_radius(egui::CornerRadius::same(8))
                .paint_at(ui, rect);
        }
        None => {
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(8), PLACEHOLDER);
        }
    }
    if response.hovered() {
        let overlay =
            egui::Rect::from_min_max(egui::pos2(rect.left(), rect.bottom() - 56.0), rect.max);
        ui.painter().rect_filled(
            overlay,
            egui::CornerRadius::same(8),
            egui::Color32::from_black_alpha(150),
        );
        ui.painter().text(
            egui::pos2(rect.left() + 12.0, rect.bottom() - 38.0),
            egui::Align2::LEFT_CENTER,
            image.title.as_deref().unwrap_or("Gallery Image"),
            egui::FontId::proportional(16.0),
            egui::Color32::WHITE,
        );
        if let Some(description) = &image.description {
            ui.painter().text(
                egui::pos2(rect.left() + 12.0, rect.bottom() - 18.0),
                egui::Align2::LEFT_CENTER,
                description,
                egui::FontId::proportional(12.0),
                PLACEHOLDER,
            );
        }
    }
    response.clicked()
}

fn render_lightbox(
    ui: &mut egui::Ui,
    image: &GalleryImage,
    textures: &mut TextureStore,
    resolver: &ImageUrlResolver,
    requests: &mut Vec<ContentRequest>,
) -> bool {
    let mut close = false;
    let ctx = ui.ctx().clone();
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("gallery_lightbox"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(&ctx, |ui| {
            // The backdrop swallows clicks so the page behind stays inert.
            let _backdrop = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter().rect_filled(
                screen,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(235),
            );

            let url = lightbox_url(resolver, image);
            if let Some(texture) = textures.get_or_request(&url, requests) {
                let max = screen.size() * 0.9;
                let frame = egui::Rect::from_center_size(screen.center(), max);
                ui.put(frame, egui::Image::new(texture).max_size(max));
            } else {
                ui.painter().text(
                    screen.center(),
                    egui::Align2::CENTER_CENTER,
                    "Loading…",
                    egui::FontId::proportional(16.0),
                    egui::Color32::WHITE,
                );
            }

            ui.painter().text(
                egui::pos2(screen.center().x, screen.bottom() - 64.0),
                egui::Align2::CENTER_CENTER,
                image.title.as_deref().unwrap_or("Gallery Image"),
                egui::FontId::proportional(20.0),
                egui::Color32::WHITE,
            );
            if let Some(description) = &image.description {
                ui.painter().text(
                    egui::pos2(screen.center().x, screen.bottom() - 36.0),
                    egui::Align2::CENTER_CENTER,
                    description,
                    egui::FontId::proportional(14.0),
                    PLACEHOLDER,
                );
            }

            let close_rect = egui::Rect::from_center_size(
                egui::pos2(screen.right() - 36.0, screen.top() + 36.0),
                egui::vec2(40.0, 40.0),
            );
            let close_button =
                egui::Button::new(egui::RichText::new("✖").size(20.0).color(egui::Color32::WHITE))
                    .frame(false);
            if ui.put(close_rect, close_button).clicked() {
                close = true;
            }
        });
    close
}
