//! GROQ query strings shipped to the content backend. The projections
//! flatten asset references and coalesce optional strings so the documents
//! decode directly into the domain types.

pub const GALLERY_IMAGES: &str = r#"*[_type == "galleryImage"] | order(_createdAt desc) { "id": _id, title, description, "category": coalesce(category, "other"), "image": image.asset._ref, "featured": coalesce(featured, false) }"#;

pub const GALLERY_IMAGES_BY_CATEGORY: &str = r#"*[_type == "galleryImage" && category == $category] | order(_createdAt desc) { "id": _id, title, description, "category": coalesce(category, "other"), "image": image.asset._ref, "featured": coalesce(featured, false) }"#;

pub const FEATURED_IMAGES: &str = r#"*[_type == "galleryImage" && featured == true] | order(_createdAt desc) { "id": _id, title, description, "category": coalesce(category, "other"), "image": image.asset._ref, "featured": true }"#;

pub const UPCOMING_EVENTS: &str = r#"*[_type == "event" && date >= now()] | order(date asc) [$offset...$end] { "id": _id, "title": coalesce(title, ""), "date": coalesce(date, ""), "location": coalesce(location, ""), description, "image": image.asset._ref }"#;

pub const UPCOMING_EVENTS_COUNT: &str = r#"count(*[_type == "event" && date >= now()])"#;

pub const PAST_EVENTS: &str = r#"*[_type == "event" && date < now()] | order(date desc) [$offset...$end] { "id": _id, "title": coalesce(title, ""), "date": coalesce(date, ""), "location": coalesce(location, ""), description, "image": image.asset._ref }"#;

pub const PAST_EVENTS_COUNT: &str = r#"count(*[_type == "event" && date < now()])"#;

pub const DONATION_SETTINGS: &str = r#"*[_type == "donationSettings"][0] { "upiId": coalesce(upiId, ""), "accountName": coalesce(accountName, ""), "accountNumber": coalesce(accountNumber, ""), "ifscCode": coalesce(ifscCode, ""), "bankAndBranch": coalesce(bankAndBranch, ""), "qrCodeImage": qrCodeImage.asset._ref }"#;

pub const CONTACT_SETTINGS: &str = r#"*[_type == "contactSettings"][0] { "address": coalesce(address, ""), "phone": coalesce(phone, ""), "email": coalesce(email, "") }"#;

pub const SOCIAL_MEDIA_SETTINGS: &str = r#"*[_type == "socialMediaSettings"][0] { "facebookUrl": coalesce(facebookUrl, ""), "instagramUrl": coalesce(instagramUrl, ""), "twitterUrl": coalesce(twitterUrl, ""), "youtubeUrl": coalesce(youtubeUrl, "") }"#;

/// Half-open slice window for a 1-based page, as `[$offset...$end]` expects.
pub fn page_window(page: u32, page_size: u32) -> (u64, u64) {
    let offset = u64::from(page.max(1) - 1) * u64::from(page_size);
    (offset, offset + u64::from(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_is_half_open_and_one_based() {
        assert_eq!(page_window(1, 6), (0, 6));
        assert_eq!(page_window(2, 6), (6, 12));
        assert_eq!(page_window(3, 10), (20, 30));
    }

    #[test]
    fn page_window_clamps_zero_page_to_first() {
        assert_eq!(page_window(0, 6), (0, 6));
    }
}
