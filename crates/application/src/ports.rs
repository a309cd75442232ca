use async_trait::async_trait;
use seva_kiosk_domain::{
    Category, ContactSettings, DonationSettings, Event, GalleryImage, SocialMediaSettings,
};

use crate::ApplicationError;

/// Read-only access to the published content documents, one method per
/// backend query.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn gallery_images(&self) -> Result<Vec<GalleryImage>, ApplicationError>;

    async fn gallery_images_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<GalleryImage>, ApplicationError>;

    async fn featured_images(&self) -> Result<Vec<GalleryImage>, ApplicationError>;

    async fn upcoming_events(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Event>, ApplicationError>;

    async fn upcoming_events_count(&self) -> Result<u64, ApplicationError>;

    async fn past_events(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Event>, ApplicationError>;

    async fn past_events_count(&self) -> Result<u64, ApplicationError>;

    async fn donation_settings(&self) -> Result<Option<DonationSettings>, ApplicationError>;

    async fn contact_settings(&self) -> Result<Option<ContactSettings>, ApplicationError>;

    async fn social_media_settings(
        &self,
    ) -> Result<Option<SocialMediaSettings>, ApplicationError>;
}
