use eframe::egui;
use seva_kiosk_adapters::ContentRequest;
use seva_kiosk_application::ApplicationError;
use seva_kiosk_domain::SocialMediaSettings;

use crate::views::{card_frame, page_heading, RemoteDoc, MUTED, PLACEHOLDER};

const SOCIAL_SUBTITLE: &str = "Connect with Rudhirsetu on social media. Follow our latest \
                               updates, events, and community initiatives.";
const SOCIAL_FALLBACK: &str = "Social media links are currently unavailable.";

#[derive(Debug, Clone, Default)]
pub struct SocialView {
    mounted: bool,
    settings: RemoteDoc<SocialMediaSettings>,
}

impl SocialView {
    pub fn mount(&mut self) -> ContentRequest {
        *self = Self::default();
        self.mounted = true;
        ContentRequest::SocialMediaSettings
    }

    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, result: Result<Option<SocialMediaSettings>, ApplicationError>) {
        if self.mounted {
            self.settings.apply(result);
        }
    }

    pub fn settings(&self) -> &RemoteDoc<SocialMediaSettings> {
        &self.settings
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Social Media", SOCIAL_SUBTITLE);

        if self.settings.is_loading() {
            let time = ui.input(|input| input.time);
            let pulse = 0.6 + 0.4 * ((time * 2.0).sin() as f32 * 0.5 + 0.5);
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 120.0),
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

        let profiles = self
            .settings
            .ready()
            .map(linked_profiles)
            .unwrap_or_default();
        if profiles.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(SOCIAL_FALLBACK).color(MUTED));
            });
            return;
        }

        card_frame().show(ui, |ui| {
            for (name, url) in profiles {
                ui.hyperlink_to(egui::RichText::new(name).size(16.0), url);
                ui.add_space(6.0);
            }
        });
    }
}

/// Profiles with an empty URL are left out entirely.
fn linked_profiles(settings: &SocialMediaSettings) -> Vec<(&'static str, &str)> {
    [
        ("Facebook", settings.facebook_url.as_str()),
        ("Instagram", settings.instagram_url.as_str()),
        ("Twitter", settings.twitter_url.as_str()),
        ("YouTube", settings.youtube_url.as_str()),
    ]
    .into_iter()
    .filter(|(_, url)| !url.is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(twitter: &str) -> SocialMediaSettings {
        SocialMediaSettings {
            facebook_url: "https://facebook.com/rudhirsetu".to_string(),
            instagram_url: "https://instagram.com/rudhirsetu".to_string(),
            twitter_url: twitter.to_string(),
            youtube_url: "https://youtube.com/@rudhirsetu".to_string(),
        }
    }

    #[test]
    fn mount_issues_the_settings_query() {
        let mut view = SocialView::default();
        assert_eq!(view.mount(), ContentRequest::SocialMediaSettings);
        assert!(view.settings().is_loading());
    }

    #[test]
    fn empty_urls_are_skipped_in_order() {
        let all = settings("https://twitter.com/rudhirsetu");
        let names: Vec<&str> = linked_profiles(&all).iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Facebook", "Instagram", "Twitter", "YouTube"]);

        let partial = settings("");
        let names: Vec<&str> = linked_profiles(&partial)
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names, vec!["Facebook", "Instagram", "YouTube"]);
    }

    #[test]
    fn updates_after_unmount_are_dropped() {
        let mut view = SocialView::default();
        view.mount();
        view.unmount();
        view.apply(Ok(Some(settings(""))));
        assert!(view.settings().ready().is_none());
    }
}
