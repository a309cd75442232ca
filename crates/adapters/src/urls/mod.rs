use seva_kiosk_domain::ImageRef;

/// Builds image CDN URLs from asset references.
///
/// The CDN derives every rendition from the original upload, so the
/// resolver only has to pick the target size and crop mode.
#[derive(Debug, Clone)]
pub struct ImageUrlResolver {
    base: String,
}

impl ImageUrlResolver {
    pub fn new(project_id: &str, dataset: &str) -> Self {
        Self {
            base: format!("https://cdn.sanity.io/images/{project_id}/{dataset}"),
        }
    }

    /// A rendition cropped to exactly `width`x`height`.
    pub fn cropped(&self, image: &ImageRef, width: u32, height: u32) -> String {
        format!(
            "{}/{}?w={width}&h={height}&fit=crop",
            self.base,
            image.file_name()
        )
    }

    /// A rendition scaled down to at most `width` wide, keeping aspect.
    pub fn scaled_width(&self, image: &ImageRef, width: u32) -> String {
        format!("{}/{}?w={width}&fit=max", self.base, image.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ref() -> ImageRef {
        "image-abc123-1200x800-jpg"
            .parse()
            .expect("reference should parse")
    }

    #[test]
    fn cropped_renditions_pin_both_dimensions() {
        let resolver = ImageUrlResolver::new("rudhirsetu", "production");
        assert_eq!(
            resolver.cropped(&sample_ref(), 600, 400),
            "https://cdn.sanity.io/images/rudhirsetu/production/abc123-1200x800.jpg?w=600&h=400&fit=crop"
        );
    }

    #[test]
    fn scaled_renditions_only_cap_the_width() {
        let resolver = ImageUrlResolver::new("rudhirsetu", "production");
        assert_eq!(
            resolver.scaled_width(&sample_ref(), 1200),
            "https://cdn.sanity.io/images/rudhirsetu/production/abc123-1200x800.jpg?w=1200&fit=max"
        );
    }
}
