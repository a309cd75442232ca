mod error;
mod event;
mod image;
mod settings;

pub use error::DomainError;
pub use event::{Event, EventPage, Pagination};
pub use image::{Category, CategoryFilter, DocumentId, GalleryImage, ImageRef};
pub use settings::{ContactSettings, DonationSettings, SocialMediaSettings};
