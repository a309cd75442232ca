use seva_kiosk_domain::CategoryFilter;

pub const DEFAULT_EVENT_PAGE_SIZE: u32 = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryImagesQuery {
    pub filter: CategoryFilter,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturedImagesQuery;

#[derive(Debug, Clone, Copy)]
pub struct EventWindowQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for EventWindowQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_EVENT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DonationSettingsQuery;

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSettingsQuery;

#[derive(Debug, Clone, Copy, Default)]
pub struct SocialMediaSettingsQuery;
