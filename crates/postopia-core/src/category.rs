//! Search categories — the fixed vocabulary of things a search can target.
//!
//! [`SearchCategory::from_string`] is the one lookup every caller goes through:
//! the `FromStr` impl, serde deserialization, and the config layer all
//! delegate to it. Matching is ASCII case-insensitive and does not trim.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Kind of object a search runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchCategory {
    #[default]
    Post,
    Space,
    User,
    Comment,
}

/// Lower-case label → category. Inputs are lower-cased before lookup.
static LABELS: phf::Map<&'static str, SearchCategory> = phf::phf_map! {
    "post" => SearchCategory::Post,
    "space" => SearchCategory::Space,
    "user" => SearchCategory::User,
    "comment" => SearchCategory::Comment,
};

/// Longest label ("comment"); anything longer cannot match.
const MAX_LABEL_LEN: usize = 7;

impl SearchCategory {
    /// Every category, in declaration order.
    pub const ALL: [SearchCategory; 4] = [
        SearchCategory::Post,
        SearchCategory::Space,
        SearchCategory::User,
        SearchCategory::Comment,
    ];

    /// Categories in the order the search screen lays out its tabs.
    pub const TAB_ORDER: [SearchCategory; 4] = [
        SearchCategory::Post,
        SearchCategory::Comment,
        SearchCategory::Space,
        SearchCategory::User,
    ];

    /// Look up a category by label, ignoring ASCII case.
    ///
    /// Returns [`Error::InvalidCategory`] for anything that is not exactly one
    /// of `post`, `space`, `user`, `comment` in some casing; surrounding
    /// whitespace and plurals are rejected.
    pub fn from_string(text: &str) -> Result<Self> {
        if text.len() > MAX_LABEL_LEN {
            tracing::debug!(len = text.len(), "search category label too long");
            return Err(Error::invalid_category(Some(text)));
        }

        let key = text.to_ascii_lowercase();
        match LABELS.get(key.as_str()) {
            Some(category) => Ok(*category),
            None => {
                tracing::debug!(input = text, "unknown search category label");
                Err(Error::invalid_category(Some(text)))
            }
        }
    }

    /// Same as [`from_string`](Self::from_string), treating absent input as invalid.
    pub fn from_optional(text: Option<&str>) -> Result<Self> {
        match text {
            Some(text) => Self::from_string(text),
            None => Err(Error::invalid_category(None)),
        }
    }

    /// Canonical upper-case name, e.g. `"POST"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SearchCategory::Post => "POST",
            SearchCategory::Space => "SPACE",
            SearchCategory::User => "USER",
            SearchCategory::Comment => "COMMENT",
        }
    }

    /// Lower-case label, as used in endpoint paths and config files.
    pub const fn label(&self) -> &'static str {
        match self {
            SearchCategory::Post => "post",
            SearchCategory::Space => "space",
            SearchCategory::User => "user",
            SearchCategory::Comment => "comment",
        }
    }

    /// Remote search path for this category.
    pub const fn endpoint(&self) -> &'static str {
        match self {
            SearchCategory::Post => "/search/post",
            SearchCategory::Space => "/search/space",
            SearchCategory::User => "/search/user",
            SearchCategory::Comment => "/search/comment",
        }
    }

    /// Position of this category's tab on the search screen.
    pub const fn tab_index(&self) -> usize {
        match self {
            SearchCategory::Post => 0,
            SearchCategory::Comment => 1,
            SearchCategory::Space => 2,
            SearchCategory::User => 3,
        }
    }

    /// Category for a tab position. Positions past the last tab select `User`.
    pub const fn from_tab(index: usize) -> Self {
        match index {
            0 => SearchCategory::Post,
            1 => SearchCategory::Comment,
            2 => SearchCategory::Space,
            _ => SearchCategory::User,
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl serde::Serialize for SearchCategory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for SearchCategory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_string(&value).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
