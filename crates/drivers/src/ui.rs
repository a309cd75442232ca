use std::sync::Arc;

use eframe::egui;
use seva_kiosk_adapters::{
    ContentPipeline, ContentRequest, ContentUpdate, ImageUrlResolver, MediaLoader,
    SanityContentClient,
};
use seva_kiosk_application::ContentService;

use crate::config::AppConfig;
use crate::routes::{Route, NAV_ITEMS};
use crate::textures::TextureStore;
use crate::views::camps::CampsView;
use crate::views::contact::ContactView;
use crate::views::donations::DonationsView;
use crate::views::gallery::GalleryView;
use crate::views::home::{HeroAction, HeroState};
use crate::views::social::SocialView;
use crate::views::{statics, BRAND_RED, MUTED};

const WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
const NARROW_BREAKPOINT: f32 = 768.0;
const SCROLL_GLIDE_SECS: f32 = 0.6;

fn is_narrow(width: f32) -> bool {
    width < NARROW_BREAKPOINT
}

fn scroll_glide_id() -> egui::Id {
    egui::Id::new("page_scroll")
}

/// Mobile-menu flag for the navigation bar.
///
/// The flag only matters in the narrow layout; activating any item closes
/// the menu so the page underneath becomes visible again.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavState {
    menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn activate(&mut self) {
        self.menu_open = false;
    }
}

#[derive(Debug, Clone, Copy)]
enum ScrollCommand {
    Jump(f32),
    Glide(f32),
}

pub struct KioskApp {
    pipeline: ContentPipeline,
    textures: TextureStore,
    resolver: ImageUrlResolver,
    route: Route,
    nav: NavState,
    scroll: Option<ScrollCommand>,
    hero: HeroState,
    gallery: GalleryView,
    camps: CampsView,
    donations: DonationsView,
    contact: ContactView,
    social: SocialView,
    event_page_size: u32,
}

impl KioskApp {
    pub fn new(
        pipeline: ContentPipeline,
        resolver: ImageUrlResolver,
        event_page_size: u32,
    ) -> Self {
        let mut app = Self {
            pipeline,
            textures: TextureStore::default(),
            resolver,
            route: Route::Home,
            nav: NavState::default(),
            scroll: None,
            hero: HeroState::new(),
            gallery: GalleryView::default(),
            camps: CampsView::default(),
            donations: DonationsView::default(),
            contact: ContactView::default(),
            social: SocialView::default(),
            event_page_size,
        };
        let requests = app.mount_route(Route::Home);
        app.submit_all(requests);
        app
    }

    fn navigate(&mut self, route: Route) {
        self.unmount_route(self.route);
        self.route = route;
        self.nav.activate();
        self.scroll = Some(ScrollCommand::Jump(0.0));
        let requests = self.mount_route(route);
        self.submit_all(requests);
    }

    fn mount_route(&mut self, route: Route) -> Vec<ContentRequest> {
        match route {
            Route::Home => {
                self.hero.mount();
                Vec::new()
            }
            Route::Gallery => self.gallery.mount(),
            Route::Camps => self.camps.mount(self.event_page_size),
            Route::Donations => vec![self.donations.mount()],
            Route::Contact => vec![self.contact.mount()],
            Route::Social => vec![self.social.mount()],
            Route::Services | Route::Impact => Vec::new(),
        }
    }

    fn unmount_route(&mut self, route: Route) {
        match route {
            Route::Gallery => self.gallery.unmount(),
            Route::Camps => self.camps.unmount(),
            Route::Donations => self.donations.unmount(),
            Route::Contact => self.contact.unmount(),
            Route::Social => self.social.unmount(),
            Route::Home | Route::Services | Route::Impact => {}
        }
    }

    fn submit_all(&self, requests: Vec<ContentRequest>) {
        for request in requests {
            if let Err(error) = self.pipeline.submit(request) {
                tracing::warn!(%error, "failed to submit content request");
            }
        }
    }

    fn drain_updates(&mut self, ctx: &egui::Context) {
        let updates = match self.pipeline.poll() {
            Ok(updates) => updates,
            Err(error) => {
                tracing::warn!(%error, "failed to poll content updates");
                return;
            }
        };
        for update in updates {
            match update {
                ContentUpdate::GalleryImages { result, .. } => self.gallery.apply_images(result),
                ContentUpdate::FeaturedImages(result) => self.gallery.apply_featured(result),
                ContentUpdate::UpcomingEvents(result) => self.camps.apply_upcoming(result),
                ContentUpdate::PastEvents(result) => self.camps.apply_past(result),
                ContentUpdate::DonationSettings(result) => self.donations.apply(result),
                ContentUpdate::ContactSettings(result) => self.contact.apply(result),
                ContentUpdate::SocialMediaSettings(result) => self.social.apply(result),
                ContentUpdate::Media { url, result } => self.textures.apply(ctx, url, result),
            }
        }
    }

    fn navbar_ui(&mut self, ui: &mut egui::Ui, narrow: bool) -> Option<Route> {
        let mut target = None;
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let brand = ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Rudhirsetu")
                        .size(22.0)
                        .strong()
                        .color(BRAND_RED),
                );
                ui.label(egui::RichText::new("Seva Sanstha").size(11.0).color(MUTED));
            });
            if brand.response.interact(egui::Sense::click()).clicked() {
                target = Some(Route::Home);
            }

            if narrow {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.nav.menu_open() { "Close" } else { "Menu" };
                    if ui.button(label).clicked() {
                        self.nav.toggle_menu();
                    }
                });
            } else {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if cta_button(ui).clicked() {
                        target = Some(Route::Contact);
                    }
                    for route in NAV_ITEMS.iter().rev() {
                        if nav_button(ui, route.title(), *route == self.route).clicked() {
                            target = Some(*route);
                        }
                    }
                });
            }
        });

        if narrow && self.nav.menu_open() {
            ui.separator();
            for route in NAV_ITEMS {
                if nav_button(ui, route.title(), route == self.route).clicked() {
                    target = Some(route);
                }
            }
            if cta_button(ui).clicked() {
                target = Some(Route::Contact);
            }
        }
        ui.add_space(8.0);
        target
    }
}

fn nav_button(ui: &mut egui::Ui, label: &str, active: bool) -> egui::Response {
    let text = egui::RichText::new(label).size(14.0).color(if active {
        egui::Color32::WHITE
    } else {
        MUTED
    });
    let fill = if active {
        BRAND_RED
    } else {
        egui::Color32::TRANSPARENT
    };
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(8)),
    )
}

fn cta_button(ui: &mut egui::Ui) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new("Get Involved")
                .size(14.0)
                .color(egui::Color32::WHITE),
        )
        .fill(BRAND_RED)
        .corner_radius(egui::CornerRadius::same(8)),
    )
}

impl eframe::App for KioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_updates(ctx);
        let narrow = is_narrow(ctx.screen_rect().width());

        let mut target = None;
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            if let Some(route) = self.navbar_ui(ui, narrow) {
                target = Some(route);
            }
        });

        let mut requests = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll_area = egui::ScrollArea::vertical();
            match self.scroll {
                Some(ScrollCommand::Jump(offset)) => {
                    ctx.animate_value_with_time(scroll_glide_id(), offset, 0.0);
                    scroll_area = scroll_area.vertical_scroll_offset(offset);
                    self.scroll = None;
                }
                Some(ScrollCommand::Glide(final_offset)) => {
                    let eased = ctx.animate_value_with_time(
                        scroll_glide_id(),
                        final_offset,
                        SCROLL_GLIDE_SECS,
                    );
                    scroll_area = scroll_area.vertical_scroll_offset(eased);
                    if (eased - final_offset).abs() < 0.5 {
                        self.scroll = None;
                    }
                    ctx.request_repaint();
                }
                None => {}
            }

            let output = scroll_area.show(ui, |ui| match self.route {
                Route::Home => {
                    if let Some(action) = self.hero.render(ui, narrow) {
                        match action {
                            HeroAction::Navigate(route) => target = Some(route),
                            HeroAction::ScrollTo(offset) => {
                                self.scroll = Some(ScrollCommand::Glide(offset));
                            }
                        }
                    }
                }
                Route::Gallery => {
                    self.gallery
                        .render(ui, &mut self.textures, &self.resolver, &mut requests)
                }
                Route::Camps => {
                    self.camps
                        .render(ui, &mut self.textures, &self.resolver, &mut requests)
                }
                Route::Donations => {
                    self.donations
                        .render(ui, &mut self.textures, &self.resolver, &mut requests)
                }
                Route::Contact => self.contact.render(ui),
                Route::Social => self.social.render(ui),
                Route::Services => statics::services_page(ui),
                Route::Impact => statics::impact_page(ui),
            });

            let offset = output.state.offset.y;
            // Keep the animation anchored at the live position while no
            // glide is running, so the next one starts from here.
            if self.scroll.is_none() {
                ctx.animate_value_with_time(scroll_glide_id(), offset, 0.0);
            }
            if self.route == Route::Home {
                self.hero.note_scroll_offset(offset);
            }
        });

        self.submit_all(requests);
        if let Some(route) = target {
            self.navigate(route);
        }
    }
}

pub fn launch_window(config: &AppConfig) -> Result<(), String> {
    let client = SanityContentClient::new(&config.sanity())
        .map_err(|error| format!("failed to build content client: {error}"))?;
    let service = ContentService::new(Arc::new(client));
    let media = MediaLoader::new(&config.cache_dir)
        .map_err(|error| format!("failed to prepare media cache: {error}"))?;
    let pipeline = ContentPipeline::new(service, media)
        .map_err(|error| format!("failed to start content pipeline: {error}"))?;
    let resolver = ImageUrlResolver::new(&config.project_id, &config.dataset);
    let page_size = config.event_page_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Rudhirsetu Seva Sanstha",
        options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            pipeline.set_notifier(move || repaint_ctx.request_repaint())?;
            Ok(Box::new(KioskApp::new(pipeline, resolver, page_size)))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_activation_closes_it() {
        let mut nav = NavState::default();
        assert!(!nav.menu_open());

        nav.toggle_menu();
        assert!(nav.menu_open());

        nav.activate();
        assert!(!nav.menu_open());

        nav.activate();
        assert!(!nav.menu_open());
    }

    #[test]
    fn the_breakpoint_splits_narrow_from_wide() {
        assert!(is_narrow(767.0));
        assert!(!is_narrow(768.0));
        assert!(!is_narrow(1280.0));
    }
}
