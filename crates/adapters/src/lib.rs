pub mod media;
pub mod pipeline;
pub mod presenters;
pub mod sanity;
pub mod urls;

pub use media::{DecodedMedia, MediaLoader};
pub use pipeline::{ContentPipeline, ContentRequest, ContentUpdate};
pub use presenters::{
    present_contact_settings, present_donation_settings, present_event_row, present_gallery_row,
    present_pagination, present_social_settings,
};
pub use sanity::{SanityConfig, SanityContentClient};
pub use urls::ImageUrlResolver;
