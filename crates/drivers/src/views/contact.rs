use eframe::egui;
use seva_kiosk_adapters::ContentRequest;
use seva_kiosk_application::ApplicationError;
use seva_kiosk_domain::ContactSettings;

use crate::views::{card_frame, page_heading, RemoteDoc, MUTED, PLACEHOLDER};

const CONTACT_SUBTITLE: &str = "Get in touch with Rudhirsetu Seva Sanstha. Contact us for \
                                partnerships, volunteering, or support inquiries.";
const CONTACT_FALLBACK: &str = "Contact details are currently unavailable.";

#[derive(Debug, Clone, Default)]
pub struct ContactView {
    mounted: bool,
    settings: RemoteDoc<ContactSettings>,
}

impl ContactView {
    pub fn mount(&mut self) -> ContentRequest {
        *self = Self::default();
        self.mounted = true;
        ContentRequest::ContactSettings
    }

    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, result: Result<Option<ContactSettings>, ApplicationError>) {
        if self.mounted {
            self.settings.apply(result);
        }
    }

    pub fn settings(&self) -> &RemoteDoc<ContactSettings> {
        &self.settings
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Contact Us", CONTACT_SUBTITLE);

        if self.settings.is_loading() {
            let time = ui.input(|input| input.time);
            let pulse = 0.6 + 0.4 * ((time * 2.0).sin() as f32 * 0.5 + 0.5);
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 160.0),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(
                rect,
                egui::CornerRadius::same(12),
                PLACEHOLDER.gamma_multiply(pulse),
            );
            ui.ctx().request_repaint();
            return;
        }

        let Some(settings) = self.settings.ready() else {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(CONTACT_FALLBACK).color(MUTED));
            });
            return;
        };

        card_frame().show(ui, |ui| {
            egui::Grid::new("contact_details")
                .num_columns(2)
                .spacing(egui::vec2(24.0, 10.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Address").size(13.0).color(MUTED));
                    ui.label(egui::RichText::new(&settings.address).size(15.0).strong());
                    ui.end_row();
                    ui.label(egui::RichText::new("Phone").size(13.0).color(MUTED));
                    ui.label(egui::RichText::new(&settings.phone).size(15.0).strong());
                    ui.end_row();
                    ui.label(egui::RichText::new("Email").size(13.0).color(MUTED));
                    ui.label(egui::RichText::new(&settings.email).size(15.0).strong());
                    ui.end_row();
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ContactSettings {
        ContactSettings {
            address: "Nagpur, Maharashtra".to_string(),
            phone: "+91 90000 00000".to_string(),
            email: "info@rudhirsetu.org".to_string(),
        }
    }

    #[test]
    fn mount_issues_the_settings_query() {
        let mut view = ContactView::default();
        assert_eq!(view.mount(), ContentRequest::ContactSettings);
        assert!(view.settings().is_loading());
    }

    #[test]
    fn a_missing_document_is_not_an_error() {
        let mut view = ContactView::default();
        view.mount();
        view.apply(Ok(None));
        assert_eq!(*view.settings(), RemoteDoc::Missing);
    }

    #[test]
    fn updates_after_unmount_are_dropped() {
        let mut view = ContactView::default();
        view.mount();
        view.unmount();
        view.apply(Ok(Some(settings())));
        assert!(view.settings().ready().is_none());
    }
}
