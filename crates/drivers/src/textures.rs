use std::collections::{HashMap, HashSet};

use eframe::egui;
use seva_kiosk_adapters::{ContentRequest, DecodedMedia};
use seva_kiosk_application::ApplicationError;

/// UI-side cache of media already uploaded as textures.
///
/// URLs that failed to load are remembered so a broken rendition is
/// requested once, not on every frame.
#[derive(Default)]
pub struct TextureStore {
    textures: HashMap<String, egui::TextureHandle>,
    failed: HashSet<String>,
}

impl TextureStore {
    /// Returns the texture when ready, queueing a fetch otherwise.
    pub fn get_or_request(
        &mut self,
        url: &str,
        requests: &mut Vec<ContentRequest>,
    ) -> Option<&egui::TextureHandle> {
        if self.textures.contains_key(url) {
            return self.textures.get(url);
        }
        if !self.failed.contains(url) {
            requests.push(ContentRequest::Media {
                url: url.to_string(),
            });
        }
        None
    }

    pub fn apply(
        &mut self,
        ctx: &egui::Context,
        url: String,
        result: Result<DecodedMedia, ApplicationError>,
    ) {
        match result {
            Ok(media) => {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [media.width as usize, media.height as usize],
                    &media.rgba,
                );
                let handle = ctx.load_texture(&url, image, egui::TextureOptions::LINEAR);
                self.failed.remove(&url);
                self.textures.insert(url, handle);
            }
            Err(error) => {
                tracing::warn!(%url, %error, "failed to load media");
                self.failed.insert(url);
            }
        }
    }

    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_media() -> DecodedMedia {
        DecodedMedia {
            width: 2,
            height: 2,
            rgba: vec![255; 16],
        }
    }

    #[test]
    fn missing_media_queues_a_fetch_request() {
        let mut store = TextureStore::default();
        let mut requests = Vec::new();

        let texture = store.get_or_request("http://cdn/a.jpg", &mut requests);

        assert!(texture.is_none());
        assert_eq!(
            requests,
            vec![ContentRequest::Media {
                url: "http://cdn/a.jpg".to_string()
            }]
        );
    }

    #[test]
    fn applied_media_is_served_without_new_requests() {
        let ctx = egui::Context::default();
        let mut store = TextureStore::default();
        store.apply(&ctx, "http://cdn/a.jpg".to_string(), Ok(sample_media()));

        let mut requests = Vec::new();
        let texture = store.get_or_request("http://cdn/a.jpg", &mut requests);

        assert!(texture.is_some());
        assert!(requests.is_empty());
    }

    #[test]
    fn failed_media_is_not_requested_again() {
        let ctx = egui::Context::default();
        let mut store = TextureStore::default();
        store.apply(
            &ctx,
            "http://cdn/a.jpg".to_string(),
            Err(ApplicationError::Backend("status 500".to_string())),
        );

        let mut requests = Vec::new();
        let texture = store.get_or_request("http://cdn/a.jpg", &mut requests);

        assert!(texture.is_none());
        assert!(requests.is_empty());
        assert!(store.is_failed("http://cdn/a.jpg"));
    }
}
