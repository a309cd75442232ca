use seva_kiosk_domain::{
    ContactSettings, DonationSettings, Event, GalleryImage, Pagination, SocialMediaSettings,
};

pub fn present_gallery_row(image: &GalleryImage) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        image.id.as_str(),
        image.category.wire_id(),
        if image.featured { "featured" } else { "-" },
        image.title.as_deref().unwrap_or("untitled")
    )
}

pub fn present_event_row(event: &Event) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        event.id.as_str(),
        event.date,
        event.title,
        event.location
    )
}

pub fn present_pagination(pagination: &Pagination) -> String {
    format!(
        "page {} of {} ({} total)",
        pagination.page, pagination.page_count, pagination.total
    )
}

pub fn present_donation_settings(settings: &DonationSettings) -> String {
    let qr = settings
        .qr_code_image
        .as_ref()
        .map(|image| image.reference())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "upi id\t{}\naccount name\t{}\naccount number\t{}\nifsc\t{}\nbank and branch\t{}\nqr image\t{}",
        settings.upi_id,
        settings.account_name,
        settings.account_number,
        settings.ifsc_code,
        settings.bank_and_branch,
        qr
    )
}

pub fn present_contact_settings(settings: &ContactSettings) -> String {
    format!(
        "address\t{}\nphone\t{}\nemail\t{}",
        settings.address, settings.phone, settings.email
    )
}

pub fn present_social_settings(settings: &SocialMediaSettings) -> String {
    format!(
        "facebook\t{}\ninstagram\t{}\ntwitter\t{}\nyoutube\t{}",
        or_dash(&settings.facebook_url),
        or_dash(&settings.instagram_url),
        or_dash(&settings.twitter_url),
        or_dash(&settings.youtube_url)
    )
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use seva_kiosk_domain::{Category, DocumentId, ImageRef};

    use super::*;

    #[test]
    fn gallery_rows_are_tab_separated() {
        let image = GalleryImage {
            id: DocumentId::new("g1").expect("id should be valid"),
            image: ImageRef::parse("image-abc123-1200x800-jpg").expect("reference should parse"),
            title: Some("Blood camp".to_string()),
            description: None,
            category: Category::BloodDonation,
            featured: true,
        };
        assert_eq!(
            present_gallery_row(&image),
            "g1\tblood-donation\tfeatured\tBlood camp"
        );
    }

    #[test]
    fn event_rows_include_schedule_fields() {
        let event = Event {
            id: DocumentId::new("e1").expect("id should be valid"),
            title: "Mega camp".to_string(),
            date: "2025-03-01T09:00:00Z".to_string(),
            location: "Nagpur".to_string(),
            description: None,
            image: None,
        };
        assert_eq!(
            present_event_row(&event),
            "e1\t2025-03-01T09:00:00Z\tMega camp\tNagpur"
        );
    }

    #[test]
    fn pagination_line_reports_totals() {
        let pagination = Pagination::new(2, 6, 13).expect("pagination should build");
        assert_eq!(present_pagination(&pagination), "page 2 of 3 (13 total)");
    }

    #[test]
    fn missing_qr_image_shows_a_dash() {
        let settings = DonationSettings {
            upi_id: "rudhirsetu@upi".to_string(),
            account_name: "Rudhirsetu Seva Sanstha".to_string(),
            account_number: "12345678".to_string(),
            ifsc_code: "SBIN0000123".to_string(),
            bank_and_branch: "SBI, Nagpur".to_string(),
            qr_code_image: None,
        };
        assert!(present_donation_settings(&settings).ends_with("qr image\t-"));
    }

    #[test]
    fn empty_social_links_show_dashes() {
        let settings = SocialMediaSettings {
            facebook_url: "https://facebook.com/rudhirsetu".to_string(),
            instagram_url: String::new(),
            twitter_url: String::new(),
            youtube_url: String::new(),
        };
        let text = present_social_settings(&settings);
        assert!(text.contains("facebook\thttps://facebook.com/rudhirsetu"));
        assert!(text.contains("instagram\t-"));
    }
}
