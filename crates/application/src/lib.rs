mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::ContentStore;
pub use service::ContentService;
pub use use_cases::{
    ContactSettingsQuery, DonationSettingsQuery, EventWindowQuery, FeaturedImagesQuery,
    GalleryImagesQuery, SocialMediaSettingsQuery, DEFAULT_EVENT_PAGE_SIZE,
};
