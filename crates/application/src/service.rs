use std::sync::Arc;

use seva_kiosk_domain::{
    CategoryFilter, ContactSettings, DonationSettings, EventPage, GalleryImage, Pagination,
    SocialMediaSettings,
};

use crate::{
    ApplicationError, ContactSettingsQuery, ContentStore, DonationSettingsQuery,
    EventWindowQuery, FeaturedImagesQuery, GalleryImagesQuery, SocialMediaSettingsQuery,
};

pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn gallery_images(
        &self,
        query: GalleryImagesQuery,
    ) -> Result<Vec<GalleryImage>, ApplicationError> {
        match query.filter {
            CategoryFilter::All => self.store.gallery_images().await,
            CategoryFilter::Only(category) => {
                self.store.gallery_images_by_category(category).await
            }
        }
    }

    pub async fn featured_images(
        &self,
        _query: FeaturedImagesQuery,
    ) -> Result<Vec<GalleryImage>, ApplicationError> {
        self.store.featured_images().await
    }

    pub async fn upcoming_events(
        &self,
        query: EventWindowQuery,
    ) -> Result<EventPage, ApplicationError> {
        validate_window(&query)?;
        let (events, total) = tokio::try_join!(
            self.store.upcoming_events(query.page, query.page_size),
            self.store.upcoming_events_count()
        )?;
        Ok(EventPage {
            pagination: Pagination::new(query.page, query.page_size, total)?,
            events,
        })
    }

    pub async fn past_events(
        &self,
        query: EventWindowQuery,
    ) -> Result<EventPage, ApplicationError> {
        validate_window(&query)?;
        let (events, total) = tokio::try_join!(
            self.store.past_events(query.page, query.page_size),
            self.store.past_events_count()
        )?;
        Ok(EventPage {
            pagination: Pagination::new(query.page, query.page_size, total)?,
            events,
        })
    }

    pub async fn donation_settings(
        &self,
        _query: DonationSettingsQuery,
    ) -> Result<Option<DonationSettings>, ApplicationError> {
        self.store.donation_settings().await
    }

    pub async fn contact_settings(
        &self,
        _query: ContactSettingsQuery,
    ) -> Result<Option<ContactSettings>, ApplicationError> {
        self.store.contact_settings().await
    }

    pub async fn social_media_settings(
        &self,
        _query: SocialMediaSettingsQuery,
    ) -> Result<Option<SocialMediaSettings>, ApplicationError> {
        self.store.social_media_settings().await
    }
}

fn validate_window(query: &EventWindowQuery) -> Result<(), ApplicationError> {
    if query.page == 0 {
        return Err(ApplicationError::InvalidInput(
            "page numbers start at 1".to_string(),
        ));
    }
    if query.page_size == 0 {
        return Err(ApplicationError::InvalidInput(
            "page size must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use seva_kiosk_domain::{Category, DocumentId, Event, ImageRef};

    use super::*;

    fn sample_image(id: &str, category: Category, featured: bool) -> GalleryImage {
        GalleryImage {
            id: DocumentId::new(id).expect("id should be valid"),
            image: ImageRef::parse("image-abc123-1200x800-jpg").expect("reference should parse"),
            title: Some(format!("photo {id}")),
            description: None,
            category,
            featured,
        }
    }

    fn sample_event(id: &str, title: &str) -> Event {
        Event {
            id: DocumentId::new(id).expect("id should be valid"),
            title: title.to_string(),
            date: "2026-09-14T09:00:00Z".to_string(),
            location: "Nagpur".to_string(),
            description: None,
            image: None,
        }
    }

    #[derive(Default)]
    struct FakeContentStore {
        calls: Mutex<Vec<String>>,
        images: Vec<GalleryImage>,
        events: Vec<Event>,
        event_total: u64,
        fail_lists: bool,
    }

    impl FakeContentStore {
        fn record(&self, call: impl Into<String>) {
            self.calls
                .lock()
                .expect("call log should lock")
                .push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("call log should lock").clone()
        }
    }

    #[async_trait]
    impl ContentStore for FakeContentStore {
        async fn gallery_images(&self) -> Result<Vec<GalleryImage>, ApplicationError> {
            self.record("galleryImages");
            if self.fail_lists {
                return Err(ApplicationError::Backend("boom".to_string()));
            }
            Ok(self.images.clone())
        }

        async fn gallery_images_by_category(
            &self,
            category: Category,
        ) -> Result<Vec<GalleryImage>, ApplicationError> {
            self.record(format!("galleryImagesByCategory:{}", category.wire_id()));
            if self.fail_lists {
                return Err(ApplicationError::Backend("boom".to_string()));
            }
            Ok(self
                .images
                .iter()
                .filter(|image| image.category == category)
                .cloned()
                .collect())
        }

        async fn featured_images(&self) -> Result<Vec<GalleryImage>, ApplicationError> {
            self.record("featuredImages");
            Ok(self
                .images
                .iter()
                .filter(|image| image.featured)
                .cloned()
                .collect())
        }

        async fn upcoming_events(
            &self,
            page: u32,
            page_size: u32,
        ) -> Result<Vec<Event>, ApplicationError> {
            self.record(format!("upcomingEvents:{page}:{page_size}"));
            Ok(self.events.clone())
        }

        async fn upcoming_events_count(&self) -> Result<u64, ApplicationError> {
            self.record("upcomingEventsCount");
            Ok(self.event_total)
        }

        async fn past_events(
            &self,
            page: u32,
            page_size: u32,
        ) -> Result<Vec<Event>, ApplicationError> {
            self.record(format!("pastEvents:{page}:{page_size}"));
            Ok(self.events.clone())
        }

        async fn past_events_count(&self) -> Result<u64, ApplicationError> {
            self.record("pastEventsCount");
            Ok(self.event_total)
        }

        async fn donation_settings(
            &self,
        ) -> Result<Option<DonationSettings>, ApplicationError> {
            self.record("donationSettings");
            Ok(None)
        }

        async fn contact_settings(&self) -> Result<Option<ContactSettings>, ApplicationError> {
            self.record("contactSettings");
            Ok(Some(ContactSettings {
                address: "Nagpur".to_string(),
                phone: "+91 00000 00000".to_string(),
                email: "info@rudhirsetu.org".to_string(),
            }))
        }

        async fn social_media_settings(
            &self,
        ) -> Result<Option<SocialMediaSettings>, ApplicationError> {
            self.record("socialMediaSettings");
            Ok(None)
        }
    }

    fn service_with(store: FakeContentStore) -> (ContentService, Arc<FakeContentStore>) {
        let store = Arc::new(store);
        (ContentService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn unscoped_filter_queries_the_full_gallery() {
        let (service, store) = service_with(FakeContentStore {
            images: vec![
                sample_image("a", Category::BloodDonation, false),
                sample_image("b", Category::EyeCare, false),
            ],
            ..FakeContentStore::default()
        });

        let images = service
            .gallery_images(GalleryImagesQuery::default())
            .await
            .expect("query should work");

        assert_eq!(images.len(), 2);
        assert_eq!(store.calls(), vec!["galleryImages"]);
    }

    #[tokio::test]
    async fn category_filter_queries_only_that_category() {
        let (service, store) = service_with(FakeContentStore {
            images: vec![
                sample_image("a", Category::BloodDonation, false),
                sample_image("b", Category::EyeCare, false),
                sample_image("c", Category::EyeCare, true),
            ],
            ..FakeContentStore::default()
        });

        let images = service
            .gallery_images(GalleryImagesQuery {
                filter: CategoryFilter::Only(Category::EyeCare),
            })
            .await
            .expect("query should work");

        assert_eq!(images.len(), 2);
        assert!(images.iter().all(|image| image.category == Category::EyeCare));
        assert_eq!(store.calls(), vec!["galleryImagesByCategory:eye-care"]);
    }

    #[tokio::test]
    async fn featured_query_returns_only_featured_images() {
        let (service, _) = service_with(FakeContentStore {
            images: vec![
                sample_image("a", Category::BloodDonation, true),
                sample_image("b", Category::EyeCare, false),
            ],
            ..FakeContentStore::default()
        });

        let featured = service
            .featured_images(FeaturedImagesQuery)
            .await
            .expect("query should work");

        assert_eq!(featured.len(), 1);
        assert!(featured[0].featured);
    }

    #[tokio::test]
    async fn event_window_combines_list_and_count() {
        let (service, store) = service_with(FakeContentStore {
            events: vec![sample_event("e1", "Camp"), sample_event("e2", "Checkup")],
            event_total: 13,
            ..FakeContentStore::default()
        });

        let page = service
            .upcoming_events(EventWindowQuery { page: 2, page_size: 6 })
            .await
            .expect("query should work");

        assert_eq!(page.events.len(), 2);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.page_count, 3);
        assert_eq!(page.pagination.total, 13);
        let calls = store.calls();
        assert!(calls.contains(&"upcomingEvents:2:6".to_string()));
        assert!(calls.contains(&"upcomingEventsCount".to_string()));
    }

    #[tokio::test]
    async fn past_window_uses_the_past_queries() {
        let (service, store) = service_with(FakeContentStore {
            events: vec![sample_event("e1", "Old Camp")],
            event_total: 1,
            ..FakeContentStore::default()
        });

        let page = service
            .past_events(EventWindowQuery::default())
            .await
            .expect("query should work");

        assert_eq!(page.pagination.page_count, 1);
        let calls = store.calls();
        assert!(calls.contains(&"pastEvents:1:6".to_string()));
        assert!(calls.contains(&"pastEventsCount".to_string()));
    }

    #[tokio::test]
    async fn zero_page_is_rejected_before_any_fetch() {
        let (service, store) = service_with(FakeContentStore::default());

        let result = service
            .upcoming_events(EventWindowQuery { page: 0, page_size: 6 })
            .await;

        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn store_failures_propagate_to_the_caller() {
        let (service, _) = service_with(FakeContentStore {
            fail_lists: true,
            ..FakeContentStore::default()
        });

        let result = service.gallery_images(GalleryImagesQuery::default()).await;

        assert!(matches!(result, Err(ApplicationError::Backend(_))));
    }

    #[tokio::test]
    async fn missing_settings_document_is_not_an_error() {
        let (service, _) = service_with(FakeContentStore::default());

        let donation = service
            .donation_settings(DonationSettingsQuery)
            .await
            .expect("query should work");
        assert!(donation.is_none());

        let contact = service
            .contact_settings(ContactSettingsQuery)
            .await
            .expect("query should work");
        assert!(contact.is_some());
    }
}
