//! Media records supplied by the metadata source.
//!
//! Records are immutable inputs to the recipes. Field names follow the JSON
//! produced by the catalog API, so records deserialize directly from it.
//! Accessors that a recipe cannot do without return [`Error::InvalidRecord`]
//! when the data is missing or malformed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An actor or director.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// First and last whitespace-separated tokens of the name.
    ///
    /// Names with fewer than two tokens cannot be rendered as a monogram.
    pub fn monogram(&self) -> Result<(&str, &str)> {
        let mut parts = self.name.split_whitespace();
        let first = parts.next();
        let last = parts.last();
        match (first, last) {
            (Some(first), Some(last)) => Ok((first, last)),
            _ => Err(Error::invalid_record(format!(
                "person name {:?} needs a first and last name",
                self.name
            ))),
        }
    }
}

/// A downloadable copy of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Torrent {
    /// Info hash used to build the magnet locator.
    pub hash: String,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Torrent {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            quality: None,
            url: None,
        }
    }
}

/// Aggregated critic verdict shown as a badge next to the critic score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CriticRating {
    /// No verdict; the badge is not shown at all.
    None,
    /// Negative verdict, displayed with the `splat` badge.
    Rotten,
    /// Any other verdict (`fresh`, `certified`, ...), already lowercased.
    Other(String),
}

impl CriticRating {
    /// Classify a critic rating string, ignoring case.
    ///
    /// Only an exact `none` or `rotten` is special; surrounding whitespace is kept.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        match lowered.as_str() {
            "none" => Self::None,
            "rotten" => Self::Rotten,
            _ => Self::Other(lowered),
        }
    }

    /// Token used in the badge resource name, or `None` when no badge is shown.
    pub fn badge_token(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Rotten => Some("splat"),
            Self::Other(token) => Some(token),
        }
    }
}

impl fmt::Display for CriticRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Rotten => write!(f, "rotten"),
            Self::Other(token) => write!(f, "{token}"),
        }
    }
}

/// A movie as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub year: u32,
    /// Running time in minutes.
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub actors: Vec<Person>,
    #[serde(default)]
    pub directors: Vec<Person>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description_full: String,
    #[serde(default)]
    pub large_cover_image: String,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub parallax_poster: String,
    #[serde(default)]
    pub mpa_rating: String,
    #[serde(default)]
    pub youtube_trailer_url: String,
    #[serde(default = "default_critics_rating")]
    pub tomatoes_critics_rating: String,
    #[serde(default)]
    pub tomatoes_critics_score: u32,
    #[serde(default)]
    pub torrents: Vec<Torrent>,
}

fn default_critics_rating() -> String {
    "none".to_string()
}

impl Movie {
    /// Create a movie with only an id and title set.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: 0,
            runtime: 0,
            genres: Vec::new(),
            actors: Vec::new(),
            directors: Vec::new(),
            summary: String::new(),
            description_full: String::new(),
            large_cover_image: String::new(),
            background_image: String::new(),
            parallax_poster: String::new(),
            mpa_rating: String::new(),
            youtube_trailer_url: String::new(),
            tomatoes_critics_rating: default_critics_rating(),
            tomatoes_critics_score: 0,
            torrents: Vec::new(),
        }
    }

    pub fn critic_rating(&self) -> CriticRating {
        CriticRating::parse(&self.tomatoes_critics_rating)
    }

    /// Hash of the first torrent, the movie's primary content locator.
    pub fn primary_hash(&self) -> Result<&str> {
        self.torrents
            .first()
            .map(|t| t.hash.as_str())
            .ok_or_else(|| Error::missing_field("movie", "torrents"))
    }
}

/// A TV show as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: String,
    #[serde(default)]
    pub tvdb_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub fanart_image: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Show {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tvdb_id: None,
            title: title.into(),
            fanart_image: None,
            year: None,
            genres: Vec::new(),
        }
    }

    pub fn tvdb_id(&self) -> Result<&str> {
        non_empty(self.tvdb_id.as_deref()).ok_or_else(|| Error::missing_field("show", "tvdb id"))
    }

    pub fn fanart_image(&self) -> Result<&str> {
        non_empty(self.fanart_image.as_deref())
            .ok_or_else(|| Error::missing_field("show", "fanart image"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
