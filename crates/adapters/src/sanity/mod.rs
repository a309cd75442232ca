mod queries;

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use seva_kiosk_application::{ApplicationError, ContentStore};
use seva_kiosk_domain::{
    Category, ContactSettings, DonationSettings, Event, GalleryImage, SocialMediaSettings,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Overrides the `https://{project}.api.sanity.io` host, used by tests.
    pub base_url: Option<String>,
}

impl SanityConfig {
    pub fn query_endpoint(&self) -> String {
        let host = match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        };
        format!("{host}/v{}/data/query/{}", self.api_version, self.dataset)
    }
}

/// Every query response arrives wrapped in `{"result": ...}`.
#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    result: Option<T>,
}

#[derive(Debug, Clone)]
pub struct SanityContentClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SanityContentClient {
    pub fn new(config: &SanityConfig) -> Result<Self, ApplicationError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| ApplicationError::Transport(error.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.query_endpoint(),
        })
    }

    async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, serde_json::Value)],
    ) -> Result<Option<T>, ApplicationError> {
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            pairs.push((format!("${name}"), value.to_string()));
        }

        let response = self
            .http
            .get(&self.endpoint)
            .query(&pairs)
            .send()
            .await
            .map_err(|error| ApplicationError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::Backend(format!(
                "content query returned status {status}"
            )));
        }

        let envelope: QueryEnvelope<T> = response
            .json()
            .await
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        Ok(envelope.result)
    }

    async fn query_list<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, serde_json::Value)],
    ) -> Result<Vec<T>, ApplicationError> {
        Ok(self.query::<Vec<T>>(groq, params).await?.unwrap_or_default())
    }

    async fn query_count(&self, groq: &str) -> Result<u64, ApplicationError> {
        Ok(self.query::<u64>(groq, &[]).await?.unwrap_or(0))
    }
}

#[async_trait]
impl ContentStore for SanityContentClient {
    async fn gallery_images(&self) -> Result<Vec<GalleryImage>, ApplicationError> {
        self.query_list(queries::GALLERY_IMAGES, &[]).await
    }

    async fn gallery_images_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<GalleryImage>, ApplicationError> {
        self.query_list(
            queries::GALLERY_IMAGES_BY_CATEGORY,
            &[("category", serde_json::Value::from(category.wire_id()))],
        )
        .await
    }

    async fn featured_images(&self) -> Result<Vec<GalleryImage>, ApplicationError> {
        self.query_list(queries::FEATURED_IMAGES, &[]).await
    }

    async fn upcoming_events(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Event>, ApplicationError> {
        let (offset, end) = queries::page_window(page, page_size);
        self.query_list(
            queries::UPCOMING_EVENTS,
            &[
                ("offset", serde_json::Value::from(offset)),
                ("end", serde_json::Value::from(end)),
            ],
        )
        .await
    }

    async fn upcoming_events_count(&self) -> Result<u64, ApplicationError> {
        self.query_count(queries::UPCOMING_EVENTS_COUNT).await
    }

    async fn past_events(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Event>, ApplicationError> {
        let (offset, end) = queries::page_window(page, page_size);
        self.query_list(
            queries::PAST_EVENTS,
            &[
                ("offset", serde_json::Value::from(offset)),
                ("end", serde_json::Value::from(end)),
            ],
        )
        .await
    }

    async fn past_events_count(&self) -> Result<u64, ApplicationError> {
        self.query_count(queries::PAST_EVENTS_COUNT).await
    }

    async fn donation_settings(&self) -> Result<Option<DonationSettings>, ApplicationError> {
        self.query(queries::DONATION_SETTINGS, &[]).await
    }

    async fn contact_settings(&self) -> Result<Option<ContactSettings>, ApplicationError> {
        self.query(queries::CONTACT_SETTINGS, &[]).await
    }

    async fn social_media_settings(
        &self,
    ) -> Result<Option<SocialMediaSettings>, ApplicationError> {
        self.query(queries::SOCIAL_MEDIA_SETTINGS, &[]).await
    }
}
