use std::collections::HashSet;
use std::sync::{mpsc, Arc, Mutex};

use seva_kiosk_application::{
    ApplicationError, ContactSettingsQuery, ContentService, DonationSettingsQuery,
    EventWindowQuery, FeaturedImagesQuery, GalleryImagesQuery, SocialMediaSettingsQuery,
};
use seva_kiosk_domain::{
    CategoryFilter, ContactSettings, DonationSettings, EventPage, GalleryImage,
    SocialMediaSettings,
};

use crate::media::{DecodedMedia, MediaLoader};

/// A unit of backend work the UI thread hands off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRequest {
    GalleryImages { filter: CategoryFilter },
    FeaturedImages,
    UpcomingEvents { page: u32, page_size: u32 },
    PastEvents { page: u32, page_size: u32 },
    DonationSettings,
    ContactSettings,
    SocialMediaSettings,
    Media { url: String },
}

/// The outcome of one request, delivered in completion order.
#[derive(Debug)]
pub enum ContentUpdate {
    GalleryImages {
        filter: CategoryFilter,
        result: Result<Vec<GalleryImage>, ApplicationError>,
    },
    FeaturedImages(Result<Vec<GalleryImage>, ApplicationError>),
    UpcomingEvents(Result<EventPage, ApplicationError>),
    PastEvents(Result<EventPage, ApplicationError>),
    DonationSettings(Result<Option<DonationSettings>, ApplicationError>),
    ContactSettings(Result<Option<ContactSettings>, ApplicationError>),
    SocialMediaSettings(Result<Option<SocialMediaSettings>, ApplicationError>),
    Media {
        url: String,
        result: Result<DecodedMedia, ApplicationError>,
    },
}

/// Runs content queries and media fetches off the UI thread.
///
/// Requests are independent tasks, so two in-flight requests for the
/// same data resolve in completion order, not submission order. Media
/// requests are deduplicated by URL while one is in flight.
pub struct ContentPipeline {
    runtime: tokio::runtime::Runtime,
    service: Arc<ContentService>,
    media: Arc<MediaLoader>,
    update_tx: mpsc::Sender<ContentUpdate>,
    update_rx: Mutex<mpsc::Receiver<ContentUpdate>>,
    media_in_flight: Arc<Mutex<HashSet<String>>>,
    notifier: Arc<Mutex<Option<Box<dyn Fn() + Send + Sync>>>>,
}

impl ContentPipeline {
    pub fn new(service: ContentService, media: MediaLoader) -> Result<Self, ApplicationError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|error| {
                ApplicationError::Io(format!("failed to start content runtime: {error}"))
            })?;
        let (update_tx, update_rx) = mpsc::channel::<ContentUpdate>();
        Ok(Self {
            runtime,
            service: Arc::new(service),
            media: Arc::new(media),
            update_tx,
            update_rx: Mutex::new(update_rx),
            media_in_flight: Arc::new(Mutex::new(HashSet::new())),
            notifier: Arc::new(Mutex::new(None)),
        })
    }

    /// Called once an update is queued, typically to request a repaint.
    pub fn set_notifier(
        &self,
        notify: impl Fn() + Send + Sync + 'static,
    ) -> Result<(), ApplicationError> {
        let mut notifier = self
            .notifier
            .lock()
            .map_err(|_| ApplicationError::Io("content notifier lock poisoned".to_string()))?;
        *notifier = Some(Box::new(notify));
        Ok(())
    }

    pub fn submit(&self, request: ContentRequest) -> Result<(), ApplicationError> {
        if let ContentRequest::Media { url } = &request {
            let mut in_flight = self
                .media_in_flight
                .lock()
                .map_err(|_| ApplicationError::Io("media tracker lock poisoned".to_string()))?;
            if !in_flight.insert(url.clone()) {
                return Ok(());
            }
        }

        let service = Arc::clone(&self.service);
        let media = Arc::clone(&self.media);
        let media_in_flight = Arc::clone(&self.media_in_flight);
        let notifier = Arc::clone(&self.notifier);
        let update_tx = self.update_tx.clone();
        self.runtime.spawn(async move {
            let update = run_request(service, media, request).await;
            if let ContentUpdate::Media { url, .. } = &update {
                if let Ok(mut in_flight) = media_in_flight.lock() {
                    in_flight.remove(url);
                }
            }
            if update_tx.send(update).is_err() {
                return;
            }
            if let Ok(notifier) = notifier.lock() {
                if let Some(notify) = notifier.as_ref() {
                    notify();
                }
            }
        });
        Ok(())
    }

    /// Drains every update queued since the last call.
    pub fn poll(&self) -> Result<Vec<ContentUpdate>, ApplicationError> {
        let receiver = self
            .update_rx
            .lock()
            .map_err(|_| ApplicationError::Io("content update lock poisoned".to_string()))?;

        let mut updates = Vec::new();
        loop {
            match receiver.try_recv() {
                Ok(update) => updates.push(update),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    return Err(ApplicationError::Io(
                        "content update channel disconnected".to_string(),
                    ))
                }
            }
        }
        Ok(updates)
    }
}

async fn run_request(
    service: Arc<ContentService>,
    media: Arc<MediaLoader>,
    request: ContentRequest,
) -> ContentUpdate {
    match request {
        ContentRequest::GalleryImages { filter } => ContentUpdate::GalleryImages {
            filter,
            result: service.gallery_images(GalleryImagesQuery { filter }).await,
        },
        ContentRequest::FeaturedImages => {
            ContentUpdate::FeaturedImages(service.featured_images(FeaturedImagesQuery).await)
        }
        ContentRequest::UpcomingEvents { page, page_size } => ContentUpdate::UpcomingEvents(
            service
                .upcoming_events(EventWindowQuery { page, page_size })
                .await,
        ),
        ContentRequest::PastEvents { page, page_size } => ContentUpdate::PastEvents(
            service
                .past_events(EventWindowQuery { page, page_size })
                .await,
        ),
        ContentRequest::DonationSettings => {
            ContentUpdate::DonationSettings(service.donation_settings(DonationSettingsQuery).await)
        }
        ContentRequest::ContactSettings => {
            ContentUpdate::ContactSettings(service.contact_settings(ContactSettingsQuery).await)
        }
        ContentRequest::SocialMediaSettings => ContentUpdate::SocialMediaSettings(
            service
                .social_media_settings(SocialMediaSettingsQuery)
                .await,
        ),
        ContentRequest::Media { url } => {
            let result = media.load(&url).await;
            ContentUpdate::Media { url, result }
        }
    }
}
