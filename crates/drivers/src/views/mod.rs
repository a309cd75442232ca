pub mod camps;
pub mod contact;
pub mod donations;
pub mod gallery;
pub mod home;
pub mod social;
pub mod statics;

use eframe::egui;
use seva_kiosk_application::ApplicationError;

// The site palette (red-700 primary on gray neutrals).
pub const BRAND_RED: egui::Color32 = egui::Color32::from_rgb(185, 28, 28);
pub const BADGE_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const ERROR_BG: egui::Color32 = egui::Color32::from_rgb(254, 242, 242);
pub const CARD_BG: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const PLACEHOLDER: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);

/// Lifecycle of a fetched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Lifecycle of a single optional document, e.g. a settings singleton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RemoteDoc<T> {
    #[default]
    Loading,
    Ready(T),
    Missing,
    Failed,
}

impl<T> RemoteDoc<T> {
    pub fn apply(&mut self, result: Result<Option<T>, ApplicationError>) {
        *self = match result {
            Ok(Some(document)) => RemoteDoc::Ready(document),
            Ok(None) => RemoteDoc::Missing,
            Err(error) => {
                tracing::warn!(%error, "failed to load settings document");
                RemoteDoc::Failed
            }
        };
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteDoc::Ready(document) => Some(document),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteDoc::Loading)
    }
}

pub fn page_heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(egui::RichText::new(title).size(32.0).strong());
        ui.add_space(8.0);
        ui.label(egui::RichText::new(subtitle).size(16.0).color(MUTED));
        ui.add_space(24.0);
    });
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(CARD_BG)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
}
