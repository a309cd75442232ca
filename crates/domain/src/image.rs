use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidDocumentId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque CMS asset reference of the form `image-{asset}-{width}x{height}-{format}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef {
    asset_id: String,
    width: u32,
    height: u32,
    format: String,
}

impl ImageRef {
    pub fn parse(reference: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedImageRef(reference.to_string());
        let rest = reference.strip_prefix("image-").ok_or_else(malformed)?;
        let mut parts = rest.rsplitn(3, '-');
        let format = parts.next().ok_or_else(malformed)?;
        let dimensions = parts.next().ok_or_else(malformed)?;
        let asset_id = parts.next().ok_or_else(malformed)?;
        if asset_id.is_empty() || format.is_empty() {
            return Err(malformed());
        }
        let (width, height) = dimensions.split_once('x').ok_or_else(malformed)?;
        let width = width.parse::<u32>().map_err(|_| malformed())?;
        let height = height.parse::<u32>().map_err(|_| malformed())?;
        Ok(Self {
            asset_id: asset_id.to_string(),
            width,
            height,
            format: format.to_string(),
        })
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn reference(&self) -> String {
        format!(
            "image-{}-{}x{}-{}",
            self.asset_id, self.width, self.height, self.format
        )
    }

    /// File name on the image CDN: `{asset}-{width}x{height}.{format}`.
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}x{}.{}",
            self.asset_id, self.width, self.height, self.format
        )
    }
}

impl TryFrom<String> for ImageRef {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.reference()
    }
}

impl FromStr for ImageRef {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reference())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BloodDonation,
    EyeCare,
    CancerAwareness,
    ThalassemiaSupport,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::BloodDonation,
        Category::EyeCare,
        Category::CancerAwareness,
        Category::ThalassemiaSupport,
        Category::Other,
    ];

    pub fn wire_id(self) -> &'static str {
        match self {
            Self::BloodDonation => "blood-donation",
            Self::EyeCare => "eye-care",
            Self::CancerAwareness => "cancer-awareness",
            Self::ThalassemiaSupport => "thalassemia-support",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BloodDonation => "Blood Donation",
            Self::EyeCare => "Eye Care",
            Self::CancerAwareness => "Cancer Awareness",
            Self::ThalassemiaSupport => "Thalassemia Support",
            Self::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.wire_id() == value)
            .ok_or_else(|| DomainError::UnknownCategory(value.to_string()))
    }
}

// Unrecognized category tags coming from the CMS fold into Other instead of
// failing the whole document list.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(value.parse().unwrap_or(Category::Other))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const CHOICES: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::BloodDonation),
        CategoryFilter::Only(Category::EyeCare),
        CategoryFilter::Only(Category::CancerAwareness),
        CategoryFilter::Only(Category::ThalassemiaSupport),
        CategoryFilter::Only(Category::Other),
    ];

    pub fn wire_id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.wire_id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Photos",
            Self::Only(category) => category.label(),
        }
    }

    pub fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category),
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::All
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }
        Ok(Self::Only(value.parse()?))
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: DocumentId,
    pub image: ImageRef,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
}
