//! Album Domain Model
//!
//! Represents a music album in the catalog.

use rand::Rng;

/// Prefix shared by every generated album identifier
pub const ALBUM_ID_PREFIX: &str = "album-";

/// Number of random bytes behind an identifier (16 hex characters)
const ALBUM_ID_RANDOM_BYTES: usize = 8;

/// Newtype wrapper for Album ID providing type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId(String);

impl AlbumId {
    /// Draw a fresh random candidate id (`album-` followed by 16 lowercase hex characters)
    ///
    /// Uniqueness is not checked here; see `AlbumIdGenerator`.
    #[must_use]
    pub fn random() -> Self {
        let bytes: [u8; ALBUM_ID_RANDOM_BYTES] = rand::thread_rng().gen();
        Self(format!("{}{}", ALBUM_ID_PREFIX, hex::encode(bytes)))
    }

    /// Get the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Path ids are looked up as-is; an id that was never generated simply isn't found.
impl From<String> for AlbumId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AlbumId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Client-supplied album fields, used for both creation and full updates
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumData {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Album domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    id: AlbumId,
    title: String,
    artist: String,
    price: f64,
}

impl Album {
    /// Build an Album from an id and its fields (new or read back from storage)
    #[must_use]
    pub fn new(id: AlbumId, data: AlbumData) -> Self {
        Self {
            id,
            title: data.title,
            artist: data.artist,
            price: data.price,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &AlbumId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }
}
