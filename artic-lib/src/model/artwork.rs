//! Artwork record as returned by the collection API.

use serde::Deserialize;
use serde::Serialize;

/// Stable identity of an artwork.
///
/// Selection is keyed on this value, never on a row position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl ArtworkId {
    /// Returns the raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ArtworkId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One artwork entry.
///
/// Records are immutable once fetched. The API sends `null` for a fair number
/// of descriptive fields, so everything except `id` is optional and an absent
/// value renders as an empty cell.
///
/// # Example
///
/// ```
/// use artic_lib::model::Artwork;
///
/// let json = r#"{"id": 27992, "title": "A Sunday on La Grande Jatte", "date_start": 1884}"#;
/// let artwork: Artwork = serde_json::from_str(json).unwrap();
///
/// assert_eq!(artwork.id.get(), 27992);
/// assert_eq!(artwork.title(), "A Sunday on La Grande Jatte");
/// assert_eq!(artwork.place_of_origin(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Creates an artwork with only its id set.
    pub fn new(id: impl Into<ArtworkId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            place_of_origin: None,
            artist_display: None,
            date_start: None,
            date_end: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_place_of_origin(mut self, place: impl Into<String>) -> Self {
        self.place_of_origin = Some(place.into());
        self
    }

    pub fn with_artist_display(mut self, artist: impl Into<String>) -> Self {
        self.artist_display = Some(artist.into());
        self
    }

    /// Sets the `date_start`/`date_end` span.
    pub fn with_dates(mut self, start: i64, end: i64) -> Self {
        self.date_start = Some(start);
        self.date_end = Some(end);
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn place_of_origin(&self) -> &str {
        self.place_of_origin.as_deref().unwrap_or_default()
    }

    pub fn artist_display(&self) -> &str {
        self.artist_display.as_deref().unwrap_or_default()
    }
}
