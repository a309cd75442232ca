use serde::{Deserialize, Serialize};

use crate::{DocumentId, DomainError, ImageRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: DocumentId,
    pub title: String,
    /// ISO-8601 timestamp as published by the CMS.
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total: u64) -> Result<Self, DomainError> {
        if page == 0 || page_size == 0 {
            return Err(DomainError::InvalidPageBounds { page, page_size });
        }
        Ok(Self {
            page,
            page_size,
            page_count: total.div_ceil(u64::from(page_size)),
            total,
        })
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.page_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub pagination: Pagination,
}
