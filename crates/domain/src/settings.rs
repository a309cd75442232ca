use serde::{Deserialize, Serialize};

use crate::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationSettings {
    pub upi_id: String,
    pub account_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub bank_and_branch: String,
    #[serde(default)]
    pub qr_code_image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSettings {
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaSettings {
    pub facebook_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub youtube_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donation_settings_decode_from_camel_case_wire_fields() {
        let document = serde_json::json!({
            "upiId": "rudhirsetu@upi",
            "accountName": "Rudhirsetu Seva Sanstha",
            "accountNumber": "1234567890",
            "ifscCode": "SBIN0000001",
            "bankAndBranch": "State Bank of India, Nagpur",
            "qrCodeImage": "image-qr9-600x600-png"
        });
        let settings: DonationSettings =
            serde_json::from_value(document).expect("settings should decode");
        assert_eq!(settings.upi_id, "rudhirsetu@upi");
        assert_eq!(settings.ifsc_code, "SBIN0000001");
        let qr = settings.qr_code_image.expect("qr reference should be present");
        assert_eq!(qr.asset_id(), "qr9");
    }

    #[test]
    fn social_settings_decode_from_camel_case_wire_fields() {
        let document = serde_json::json!({
            "facebookUrl": "https://facebook.com/rudhirsetu",
            "instagramUrl": "https://instagram.com/rudhirsetu",
            "twitterUrl": "",
            "youtubeUrl": "https://youtube.com/@rudhirsetu"
        });
        let settings: SocialMediaSettings =
            serde_json::from_value(document).expect("settings should decode");
        assert_eq!(settings.facebook_url, "https://facebook.com/rudhirsetu");
        assert!(settings.twitter_url.is_empty());
    }
}
