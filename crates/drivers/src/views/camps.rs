use eframe::egui;
use seva_kiosk_adapters::{ContentRequest, ImageUrlResolver};
use seva_kiosk_application::{ApplicationError, DEFAULT_EVENT_PAGE_SIZE};
use seva_kiosk_domain::{Event, EventPage, Pagination};

use crate::textures::TextureStore;
use crate::views::{card_frame, page_heading, ListPhase, BRAND_RED, ERROR_BG, MUTED, PLACEHOLDER};

const CAMPS_SUBTITLE: &str = "See our blood donation drives, healthcare camps, and community \
                              initiatives across India.";
const CAMPS_ERROR_TEXT: &str = "Failed to load camps. Please try again later.";
const NO_UPCOMING_TEXT: &str = "No upcoming camps right now. Check back soon!";
const NO_PAST_TEXT: &str = "No past camps to show yet.";
const SKELETON_ROWS: usize = 3;

/// One page-windowed event listing (the upcoming or the past camps).
#[derive(Debug, Clone, Default)]
pub struct EventWindow {
    phase: ListPhase,
    events: Vec<Event>,
    pagination: Option<Pagination>,
    page: u32,
}

impl EventWindow {
    fn begin_load(&mut self, page: u32) {
        self.phase = ListPhase::Loading;
        self.page = page;
    }

    fn apply(&mut self, result: Result<EventPage, ApplicationError>, label: &str) {
        match result {
            Ok(page) => {
                self.events = page.events;
                self.pagination = Some(page.pagination);
                self.phase = ListPhase::Ready;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load {label} camps");
                self.phase = ListPhase::Failed;
            }
        }
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    fn show_skeleton(&self) -> bool {
        self.phase == ListPhase::Loading && self.events.is_empty()
    }
}

/// The camps page: two independently paged windows over the events
/// collection.
#[derive(Debug, Clone)]
pub struct CampsView {
    mounted: bool,
    page_size: u32,
    upcoming: EventWindow,
    past: EventWindow,
}

impl Default for CampsView {
    fn default() -> Self {
        Self {
            mounted: false,
            page_size: DEFAULT_EVENT_PAGE_SIZE,
            upcoming: EventWindow::default(),
            past: EventWindow::default(),
        }
    }
}

impl CampsView {
    /// Resets the view and issues page 1 of both windows.
    pub fn mount(&mut self, page_size: u32) -> Vec<ContentRequest> {
        *self = Self::default();
        self.mounted = true;
        self.page_size = page_size;
        vec![self.reload_upcoming(1), self.reload_past(1)]
    }

    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    pub fn reload_upcoming(&mut self, page: u32) -> ContentRequest {
        self.upcoming.begin_load(page);
        ContentRequest::UpcomingEvents {
            page,
            page_size: self.page_size,
        }
    }

    pub fn reload_past(&mut self, page: u32) -> ContentRequest {
        self.past.begin_load(page);
        ContentRequest::PastEvents {
            page,
            page_size: self.page_size,
        }
    }

    pub fn apply_upcoming(&mut self, result: Result<EventPage, ApplicationError>) {
        if self.mounted {
            self.upcoming.apply(result, "upcoming");
        }
    }

    pub fn apply_past(&mut self, result: Result<EventPage, ApplicationError>) {
        if self.mounted {
            self.past.apply(result, "past");
        }
    }

    pub fn upcoming(&self) -> &EventWindow {
        &self.upcoming
    }

    pub fn past(&self) -> &EventWindow {
        &self.past
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        textures: &mut TextureStore,
        resolver: &ImageUrlResolver,
        requests: &mut Vec<ContentRequest>,
    ) {
        page_heading(ui, "Our Camps", CAMPS_SUBTITLE);
        ui.add_space(16.0);

        let mut turns = Vec::new();
        ui.label(egui::RichText::new("Upcoming Camps").size(22.0).strong());
        ui.add_space(8.0);
        render_window(
            ui,
            NO_UPCOMING_TEXT,
            &self.upcoming,
            textures,
            resolver,
            requests,
            |page| turns.push(WindowTurn::Upcoming(page)),
        );
        ui.add_space(32.0);
        ui.label(egui::RichText::new("Past Camps").size(22.0).strong());
        ui.add_space(8.0);
        render_window(
            ui,
            NO_PAST_TEXT,
            &self.past,
            textures,
            resolver,
            requests,
            |page| turns.push(WindowTurn::Past(page)),
        );

        for turn in turns {
            match turn {
                WindowTurn::Upcoming(page) => requests.push(self.reload_upcoming(page)),
                WindowTurn::Past(page) => requests.push(self.reload_past(page)),
            }
        }
    }
}

enum WindowTurn {
    Upcoming(u32),
    Past(u32),
}

/// "2026-09-14T09:00:00Z" keeps only the calendar date for display.
fn display_date(date: &str) -> &str {
    date.split_once('T').map_or(date, |(day, _)| day)
}

fn render_window(
    ui: &mut egui::Ui,
    empty_text: &str,
    window: &EventWindow,
    textures: &mut TextureStore,
    resolver: &ImageUrlResolver,
    requests: &mut Vec<ContentRequest>,
    mut turn: impl FnMut(u32),
) {
    if window.show_skeleton() {
        render_window_skeleton(ui);
        return;
    }

    if window.phase() == ListPhase::Failed {
        if render_window_error(ui) {
            turn(window.page().max(1));
        }
        return;
    }

    if window.events().is_empty() {
        ui.label(egui::RichText::new(empty_text).color(MUTED));
        return;
    }

    for event in window.events() {
        render_event_card(ui, event, textures, resolver, requests);
        ui.add_space(10.0);
    }

    if let Some(pagination) = window.pagination() {
        if pagination.page_count > 1 {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let previous = egui::Button::new("◀ Previous");
                if ui
                    .add_enabled(pagination.has_previous(), previous)
                    .clicked()
                {
                    turn(pagination.page - 1);
                }
                ui.label(
                    egui::RichText::new(format!(
                        "Page {} of {}",
                        pagination.page, pagination.page_count
                    ))
                    .color(MUTED),
                );
                let next = egui::Button::new("Next ▶");
                if ui.add_enabled(pagination.has_next(), next).clicked() {
                    turn(pagination.page + 1);
                }
            });
        }
    }
}

fn render_window_skeleton(ui: &mut egui::Ui) {
    let time = ui.input(|input| input.time);
    let pulse = 0.6 + 0.4 * ((time * 2.0).sin() as f32 * 0.5 + 0.5);
    for _ in 0..SKELETON_ROWS {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 96.0),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(
            rect,
            egui::CornerRadius::same(12),
            PLACEHOLDER.gamma_multiply(pulse),
        );
        ui.add_space(10.0);
    }
    ui.ctx().request_repaint();
}

fn render_window_error(ui: &mut egui::Ui) -> bool {
    let mut retry = false;
    egui::Frame::default()
        .fill(ERROR_BG)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(CAMPS_ERROR_TEXT).color(BRAND_RED));
            ui.add_space(12.0);
            let button =
                egui::Button::new(egui::RichText::new("Try Again").color(egui::Color32::WHITE))
                    .fill(BRAND_RED)
                    .corner_radius(egui::CornerRadius::same(8));
            if ui.add(button).clicked() {
                retry = true;
            }
        });
    retry
}

fn render_event_card(
    ui: &mut egui::Ui,
    event: &Event,
    textures: &mut TextureStore,
    resolver: &ImageUrlResolver,
    requests: &mut Vec<ContentRequest>,
) {
    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            if let Some(reference) = &event.image {
                let url = resolver.cropped(reference, 600, 400);
                let size = egui::vec2(160.0, 107.0);
                match textures.get_or_request(&url, requests) {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(texture)
                                .max_size(size)
                                .corner_radius(egui::CornerRadius::same(8)),
                        );
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                        ui.painter()
                            .rect_filled(rect, egui::CornerRadius::same(8), PLACEHOLDER);
                    }
                }
                ui.add_space(12.0);
            }
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&event.title).size(18.0).strong());
                ui.label(
                    egui::RichText::new(format!(
                        "{} • {}",
                        display_date(&event.date),
                        event.location
                    ))
                    .size(13.0)
                    .color(MUTED),
                );
                if let Some(description) = &event.description {
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(description).size(14.0));
                }
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use seva_kiosk_domain::DocumentId;

    use super::*;

    fn camp(id: &str) -> Event {
        Event {
            id: DocumentId::new(id).expect("id should be valid"),
            title: format!("camp {id}"),
            date: "2026-09-14T09:00:00Z".to_string(),
            location: "Nagpur".to_string(),
            description: None,
            image: None,
        }
    }

    fn page_of(ids: &[&str], page: u32, total: u64) -> EventPage {
        EventPage {
            events: ids.iter().map(|id| camp(id)).collect(),
            pagination: Pagination::new(page, 6, total).expect("pagination should build"),
        }
    }

    fn mounted_view() -> CampsView {
        let mut view = CampsView::default();
        view.mount(6);
        view
    }

    #[test]
    fn mount_requests_page_one_of_both_windows() {
        let mut view = CampsView::default();
        let requests = view.mount(6);
        assert_eq!(
            requests,
            vec![
                ContentRequest::UpcomingEvents {
                    page: 1,
                    page_size: 6
                },
                ContentRequest::PastEvents {
                    page: 1,
                    page_size: 6
                },
            ]
        );
        assert_eq!(view.upcoming().phase(), ListPhase::Loading);
        assert_eq!(view.past().phase(), ListPhase::Loading);
    }

    #[test]
    fn page_turns_reissue_the_windowed_query() {
        let mut view = mounted_view();
        view.apply_upcoming(Ok(page_of(&["a"], 1, 13)));

        let request = view.reload_upcoming(2);
        assert_eq!(
            request,
            ContentRequest::UpcomingEvents {
                page: 2,
                page_size: 6
            }
        );
        assert_eq!(view.upcoming().phase(), ListPhase::Loading);
        assert_eq!(view.upcoming().page(), 2);
    }

    #[test]
    fn failures_mark_only_their_own_window() {
        let mut view = mounted_view();
        view.apply_upcoming(Err(ApplicationError::Backend("boom".to_string())));
        view.apply_past(Ok(page_of(&["old"], 1, 1)));

        assert_eq!(view.upcoming().phase(), ListPhase::Failed);
        assert_eq!(view.past().phase(), ListPhase::Ready);
        assert_eq!(view.past().events().len(), 1);
    }

    #[test]
    fn an_empty_page_is_ready_not_failed() {
        let mut view = mounted_view();
        view.apply_upcoming(Ok(page_of(&[], 1, 0)));

        assert_eq!(view.upcoming().phase(), ListPhase::Ready);
        assert!(view.upcoming().events().is_empty());
    }

    #[test]
    fn a_successful_reload_clears_the_error() {
        let mut view = mounted_view();
        view.apply_past(Err(ApplicationError::Backend("boom".to_string())));
        assert_eq!(view.past().phase(), ListPhase::Failed);

        view.reload_past(1);
        assert_eq!(view.past().phase(), ListPhase::Loading);

        view.apply_past(Ok(page_of(&["old"], 1, 1)));
        assert_eq!(view.past().phase(), ListPhase::Ready);
    }

    #[test]
    fn updates_after_unmount_are_dropped() {
        let mut view = mounted_view();
        view.unmount();
        view.apply_upcoming(Ok(page_of(&["late"], 1, 1)));

        assert_eq!(view.upcoming().phase(), ListPhase::Idle);
        assert!(view.upcoming().events().is_empty());
    }

    #[test]
    fn display_date_keeps_only_the_day() {
        assert_eq!(display_date("2026-09-14T09:00:00Z"), "2026-09-14");
        assert_eq!(display_date("2026-09-14"), "2026-09-14");
    }

    #[test]
    fn skeleton_shows_only_while_loading_an_empty_window() {
        let mut view = mounted_view();
        assert!(view.upcoming().show_skeleton());

        view.apply_upcoming(Ok(page_of(&["a"], 1, 13)));
        view.reload_upcoming(2);
        // A page turn keeps the previous rows on screen while loading.
        assert!(!view.upcoming().show_skeleton());
    }
}
