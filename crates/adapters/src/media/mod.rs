use std::path::PathBuf;
use std::time::Duration;

use seva_kiosk_application::ApplicationError;
use sha2::{Digest, Sha256};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A downloaded image decoded to straight RGBA bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMedia {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Fetches rendition URLs and keeps the raw bytes on disk keyed by URL.
#[derive(Debug, Clone)]
pub struct MediaLoader {
    http: reqwest::Client,
    cache_dir: PathBuf,
}

impl MediaLoader {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Result<Self, ApplicationError> {
        let cache_dir = cache_dir.into().join("media");
        std::fs::create_dir_all(&cache_dir)
            .map_err(|error| ApplicationError::Io(error.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|error| ApplicationError::Transport(error.to_string()))?;
        Ok(Self { http, cache_dir })
    }

    pub async fn load(&self, url: &str) -> Result<DecodedMedia, ApplicationError> {
        let bytes = self.fetch_or_cached(url).await?;
        decode_rgba(&bytes)
    }

    async fn fetch_or_cached(&self, url: &str) -> Result<Vec<u8>, ApplicationError> {
        let path = self.cache_dir.join(format!("{}.img", cache_key(url)));
        if let Ok(bytes) = tokio::fs::read(&path).await {
            return Ok(bytes);
        }

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|error| ApplicationError::Transport(error.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::Backend(format!(
                "media fetch returned status {status}"
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|error| ApplicationError::Transport(error.to_string()))?
            .to_vec();

        // Cache writes are best-effort.
        let _ = tokio::fs::write(&path, &bytes).await;
        Ok(bytes)
    }
}

fn cache_key(url: &str) -> String {
    Sha256::digest(url.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

fn decode_rgba(bytes: &[u8]) -> Result<DecodedMedia, ApplicationError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|error| ApplicationError::Decode(error.to_string()))?
        .to_rgba8();
    Ok(DecodedMedia {
        width: decoded.width(),
        height: decoded.height(),
        rgba: decoded.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::routing::get;
    use axum::Router;

    use super::*;

    fn sample_jpeg() -> Vec<u8> {
        let pixels = image::RgbImage::from_pixel(4, 3, image::Rgb([200, 40, 40]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(pixels)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
            .expect("jpeg should encode");
        bytes
    }

    async fn spawn_media_server(body: Vec<u8>) -> (String, Arc<Mutex<u32>>) {
        let hits = Arc::new(Mutex::new(0u32));
        let hits_handler = Arc::clone(&hits);
        let app = Router::new().route(
            "/photo.jpg",
            get(move || {
                let hits = Arc::clone(&hits_handler);
                let body = body.clone();
                async move {
                    *hits.lock().expect("hit counter should lock") += 1;
                    body
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind should work");
        let addr = listener.local_addr().expect("local addr should resolve");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        (format!("http://{addr}/photo.jpg"), hits)
    }

    #[tokio::test]
    async fn load_decodes_fetched_media_to_rgba() {
        let (url, _) = spawn_media_server(sample_jpeg()).await;
        let cache = tempfile::tempdir().expect("temp dir should create");
        let loader = MediaLoader::new(cache.path()).expect("loader should build");

        let media = loader.load(&url).await.expect("load should work");

        assert_eq!(media.width, 4);
        assert_eq!(media.height, 3);
        assert_eq!(media.rgba.len(), 4 * 3 * 4);
    }

    #[tokio::test]
    async fn second_load_is_served_from_the_cache() {
        let (url, hits) = spawn_media_server(sample_jpeg()).await;
        let cache = tempfile::tempdir().expect("temp dir should create");
        let loader = MediaLoader::new(cache.path()).expect("loader should build");

        loader.load(&url).await.expect("first load should work");
        loader.load(&url).await.expect("second load should work");

        assert_eq!(*hits.lock().expect("hit counter should lock"), 1);
    }

    #[tokio::test]
    async fn undecodable_bytes_surface_as_decode_errors() {
        let (url, _) = spawn_media_server(b"not an image at all".to_vec()).await;
        let cache = tempfile::tempdir().expect("temp dir should create");
        let loader = MediaLoader::new(cache.path()).expect("loader should build");

        let result = loader.load(&url).await;

        assert!(matches!(result, Err(ApplicationError::Decode(_))));
    }

    #[tokio::test]
    async fn missing_media_surfaces_as_a_backend_error() {
        let app = Router::new();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind should work");
        let addr = listener.local_addr().expect("local addr should resolve");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        let cache = tempfile::tempdir().expect("temp dir should create");
        let loader = MediaLoader::new(cache.path()).expect("loader should build");

        let result = loader.load(&format!("http://{addr}/gone.jpg")).await;

        assert!(matches!(result, Err(ApplicationError::Backend(_))));
    }
}
