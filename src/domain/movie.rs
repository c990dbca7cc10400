//! Catalog entities: result items, detail records and search filters.
//!
//! The catalog marks absent values with the literal string `"N/A"`. Every
//! optional text field is decoded through [`sentinel`] so the rest of the
//! crate only ever sees `None` for such values and never prints the marker.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The catalog's "field intentionally absent" marker.
pub const SENTINEL: &str = "N/A";

/// Returns `true` when a raw catalog value should be treated as missing.
///
/// ```
/// use reelsearch::domain::movie::is_absent;
///
/// assert!(is_absent("N/A"));
/// assert!(is_absent("   "));
/// assert!(!is_absent("Drama"));
/// ```
#[must_use]
pub fn is_absent(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == SENTINEL
}

/// Serde helpers for sentinel-aware decoding.
pub mod sentinel {
    use super::{is_absent, Deserialize, Deserializer};

    /// Decodes an optional string, mapping `"N/A"` and blanks to `None`.
    pub fn option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|value| !is_absent(value)))
    }

    /// Decodes a comma-joined list (`"Crime, Drama"`) into trimmed tags.
    pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .filter(|value| !is_absent(value))
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Kind of catalog entry.
///
/// Only `movie` and `series` are filterable; anything else the catalog
/// reports (episodes, games) decodes to [`MediaType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
    #[serde(other)]
    Other,
}

impl MediaType {
    /// Value sent in the `type` request parameter.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Movie => Some("movie"),
            Self::Series => Some("series"),
            Self::Other => None,
        }
    }

    /// Human-facing label used on cards, chips and the detail header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "TV Series",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search facets applied on top of the free-text query.
///
/// `year` is free text passed through to the catalog untouched; no numeric
/// coercion happens on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub media_type: Option<MediaType>,
    pub year: String,
}

impl Filters {
    /// Returns `true` when either facet narrows the search.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.media_type.is_some() || !self.year.is_empty()
    }

    /// Year value to send, or `None` when blank.
    #[must_use]
    pub fn year_param(&self) -> Option<&str> {
        let year = self.year.trim();
        (!year.is_empty()).then_some(year)
    }

    /// Advances the type facet: all types → movie → series → all types.
    #[must_use]
    pub fn with_next_media_type(&self) -> Self {
        let media_type = match self.media_type {
            None => Some(MediaType::Movie),
            Some(MediaType::Movie) => Some(MediaType::Series),
            Some(MediaType::Series | MediaType::Other) => None,
        };
        Self {
            media_type,
            year: self.year.clone(),
        }
    }

    /// Returns a copy with the year facet replaced.
    #[must_use]
    pub fn with_year(&self, year: impl Into<String>) -> Self {
        Self {
            media_type: self.media_type,
            year: year.into(),
        }
    }
}

/// One row of a paginated search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default, deserialize_with = "sentinel::option")]
    pub year: Option<String>,
    #[serde(rename = "Type")]
    pub media_type: MediaType,
    /// Poster URL; `None` is the "no image" marker.
    #[serde(rename = "Poster", default, deserialize_with = "sentinel::option")]
    pub poster: Option<String>,
}

/// A `{source, value}` rating pair from the detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Full metadata document for one catalog identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default, deserialize_with = "sentinel::option")]
    pub year: Option<String>,
    #[serde(rename = "Type")]
    pub media_type: MediaType,
    #[serde(rename = "Poster", default, deserialize_with = "sentinel::option")]
    pub poster: Option<String>,
    #[serde(rename = "Rated", default, deserialize_with = "sentinel::option")]
    pub rated: Option<String>,
    #[serde(rename = "Released", default, deserialize_with = "sentinel::option")]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default, deserialize_with = "sentinel::option")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default, deserialize_with = "sentinel::list")]
    pub genres: Vec<String>,
    #[serde(rename = "Director", default, deserialize_with = "sentinel::option")]
    pub director: Option<String>,
    #[serde(rename = "Writer", default, deserialize_with = "sentinel::option")]
    pub writer: Option<String>,
    #[serde(rename = "Actors", default, deserialize_with = "sentinel::option")]
    pub actors: Option<String>,
    #[serde(rename = "Plot", default, deserialize_with = "sentinel::option")]
    pub plot: Option<String>,
    #[serde(rename = "Language", default, deserialize_with = "sentinel::option")]
    pub language: Option<String>,
    #[serde(rename = "Country", default, deserialize_with = "sentinel::option")]
    pub country: Option<String>,
    #[serde(rename = "Awards", default, deserialize_with = "sentinel::option")]
    pub awards: Option<String>,
    #[serde(rename = "imdbRating", default, deserialize_with = "sentinel::option")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", default, deserialize_with = "sentinel::option")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "totalSeasons", default, deserialize_with = "sentinel::option")]
    pub total_seasons: Option<String>,
    #[serde(rename = "BoxOffice", default, deserialize_with = "sentinel::option")]
    pub box_office: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
}

impl DetailRecord {
    /// Rating pairs whose value is present.
    pub fn visible_ratings(&self) -> impl Iterator<Item = &Rating> {
        self.ratings.iter().filter(|r| !is_absent(&r.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_facet_cycles_through_all_states() {
        let all = Filters::default().with_year("1999");
        let movie = all.with_next_media_type();
        let series = movie.with_next_media_type();

        assert_eq!(movie.media_type, Some(MediaType::Movie));
        assert_eq!(series.media_type, Some(MediaType::Series));
        assert_eq!(series.with_next_media_type(), all);
        assert_eq!(series.year, "1999");
    }

    #[test]
    fn year_is_passed_through_untouched() {
        let filters = Filters::default().with_year("199x");
        assert!(filters.is_active());
        assert_eq!(filters.year_param(), Some("199x"));
        assert_eq!(Filters::default().year_param(), None);
    }

    #[test]
    fn genre_list_splits_and_drops_sentinel() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "sentinel::list")]
            genre: Vec<String>,
        }

        let probe: Probe = serde_json::from_str(r#"{"genre":"Crime, Drama ,"}"#).unwrap();
        assert_eq!(probe.genre, vec!["Crime", "Drama"]);
        let probe: Probe = serde_json::from_str(r#"{"genre":"N/A"}"#).unwrap();
        assert!(probe.genre.is_empty());
    }
}
