use eframe::egui;
use seva_kiosk_adapters::{ContentRequest, ImageUrlResolver};
use seva_kiosk_application::ApplicationError;
use seva_kiosk_domain::DonationSettings;

use crate::textures::TextureStore;
use crate::views::{card_frame, page_heading, RemoteDoc, MUTED, PLACEHOLDER};

const DONATIONS_SUBTITLE: &str = "Support our blood donation drives, healthcare programs, and \
                                  social initiatives. Make a difference in communities across \
                                  India.";
const DONATIONS_FALLBACK: &str = "Donation details are currently unavailable. Please contact us \
                                  directly to contribute.";
const QR_WIDTH: u32 = 400;

#[derive(Debug, Clone, Default)]
pub struct DonationsView {
    mounted: bool,
    settings: RemoteDoc<DonationSettings>,
}

impl DonationsView {
    pub fn mount(&mut self) -> ContentRequest {
        *self = Self::default();
        self.mounted = true;
        ContentRequest::DonationSettings
    }

    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, result: Result<Option<DonationSettings>, ApplicationError>) {
        if self.mounted {
            self.settings.apply(result);
        }
    }

    pub fn settings(&self) -> &RemoteDoc<DonationSettings> {
        &self.settings
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        textures: &mut TextureStore,
        resolver: &ImageUrlResolver,
        requests: &mut Vec<ContentRequest>,
    ) {
        page_heading(ui, "Donate", DONATIONS_SUBTITLE);

        if self.settings.is_loading() {
            render_settings_skeleton(ui);
            return;
        }

        let Some(settings) = self.settings.ready() else {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(DONATIONS_FALLBACK).color(MUTED));
            });
            return;
        };

        card_frame().show(ui, |ui| {
            ui.horizontal_top(|ui| {
                egui::Grid::new("donation_details")
                    .num_columns(2)
                    .spacing(egui::vec2(24.0, 10.0))
                    .show(ui, |ui| {
                        detail_row(ui, "Account Name", &settings.account_name);
                        detail_row(ui, "Account Number", &settings.account_number);
                        detail_row(ui, "IFSC Code", &settings.ifsc_code);
                        detail_row(ui, "Bank & Branch", &settings.bank_and_branch);
                        detail_row(ui, "UPI ID", &settings.upi_id);
                    });

                if let Some(url) = qr_url(resolver, settings) {
                    ui.add_space(24.0);
                    let size = egui::vec2(220.0, 220.0);
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
                            ui.painter().rect_filled(
                                rect,
                                egui::CornerRadius::same(8),
                                PLACEHOLDER,
                            );
                        }
                    }
                }
            });
        });
    }
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(egui::RichText::new(label).size(13.0).color(MUTED));
    ui.label(egui::RichText::new(value).size(15.0).strong());
    ui.end_row();
}

fn qr_url(resolver: &ImageUrlResolver, settings: &DonationSettings) -> Option<String> {
    settings
        .qr_code_image
        .as_ref()
        .map(|reference| resolver.scaled_width(reference, QR_WIDTH))
}

fn render_settings_skeleton(ui: &mut egui::Ui) {
    let time = ui.input(|input| input.time);
    let pulse = 0.6 + 0.4 * ((time * 2.0).sin() as f32 * 0.5 + 0.5);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 220.0),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(
        rect,
        egui::CornerRadius::same(12),
        PLACEHOLDER.gamma_multiply(pulse),
    );
    ui.ctx().request_repaint();
}
