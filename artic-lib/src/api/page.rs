//! Page type for paginated collection results.

use serde::Deserialize;

use crate::model::Artwork;

/// Pagination block returned alongside every collection response.
///
/// Only `total` is relied upon; the remaining fields are informational and
/// parsed when the server sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Total number of records in the collection.
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub next_url: Option<String>,
}

impl Pagination {
    /// Creates a pagination block with only the total set.
    pub fn with_total(total: u64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }
}

/// One page of artworks together with the collection's pagination info.
///
/// # Example
///
/// ```ignore
/// let page = client.fetch_artworks(1, 12).await?;
///
/// for artwork in page.records() {
///     println!("{} {}", artwork.id, artwork.title());
/// }
/// println!("{} records in total", page.total());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    records: Vec<Artwork>,
    pagination: Pagination,
}

impl Page {
    /// Creates a page from its records and pagination block.
    pub fn new(records: Vec<Artwork>, pagination: Pagination) -> Self {
        Self {
            records,
            pagination,
        }
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Artwork> {
        self.records
    }

    /// Splits the page into its records and pagination block.
    pub fn into_parts(self) -> (Vec<Artwork>, Pagination) {
        (self.records, self.pagination)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the server-reported total record count.
    pub fn total(&self) -> u64 {
        self.pagination.total
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Wire shape of `GET /artworks`.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtworksResponse {
    pub(crate) data: Vec<Artwork>,
    pub(crate) pagination: Pagination,
}

impl From<ArtworksResponse> for Page {
    fn from(response: ArtworksResponse) -> Self {
        Page::new(response.data, response.pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection_response() {
        let json = r#"{
            "pagination": {
                "total": 129451,
                "limit": 2,
                "offset": 2,
                "total_pages": 64726,
                "current_page": 2,
                "prev_url": "https://api.artic.edu/api/v1/artworks?page=1&limit=2",
                "next_url": "https://api.artic.edu/api/v1/artworks?page=3&limit=2"
            },
            "data": [
                {"id": 1, "title": "One"},
                {"id": 2, "title": "Two"}
            ],
            "info": {"version": "1.13"}
        }"#;
        let response: ArtworksResponse = serde_json::from_str(json).unwrap();
        let page = Page::from(response);

        assert_eq!(page.len(), 2);
        assert_eq!(page.total(), 129451);
        assert_eq!(page.pagination().current_page, Some(2));
        assert_eq!(page.pagination().total_pages, Some(64726));
        assert_eq!(page.records()[1].title(), "Two");
    }

    #[test]
    fn test_parse_minimal_pagination() {
        let json = r#"{"pagination": {"total": 0}, "data": []}"#;
        let response: ArtworksResponse = serde_json::from_str(json).unwrap();
        let page = Page::from(response);

        assert!(page.is_empty());
        assert_eq!(page.pagination(), &Pagination::with_total(0));
    }

    #[test]
    fn test_missing_pagination_is_an_error() {
        let json = r#"{"data": []}"#;
        assert!(serde_json::from_str::<ArtworksResponse>(json).is_err());
    }
}
