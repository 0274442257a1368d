//! Static label tables used across harnesses.

use postopia_core::SearchCategory;

/// Every accepted spelling the harnesses check, with the category it names.
pub const VALID_LABELS: &[(&str, SearchCategory)] = &[
    ("post", SearchCategory::Post),
    ("POST", SearchCategory::Post),
    ("Post", SearchCategory::Post),
    ("pOsT", SearchCategory::Post),
    ("space", SearchCategory::Space),
    ("SPACE", SearchCategory::Space),
    ("Space", SearchCategory::Space),
    ("user", SearchCategory::User),
    ("USER", SearchCategory::User),
    ("uSeR", SearchCategory::User),
    ("comment", SearchCategory::Comment),
    ("COMMENT", SearchCategory::Comment),
    ("Comment", SearchCategory::Comment),
];

/// Inputs that must be rejected: empty, plurals, padding, prefixes, other
/// vocabulary from the client, and non-ASCII lookalikes.
pub const INVALID_LABELS: &[&str] = &[
    "",
    " ",
    "unknown",
    "posts",
    "spaces",
    "users",
    "comments",
    " post",
    "post ",
    "\tuser",
    "pos",
    "co",
    "message",
    "vote",
    "opinion",
    "p0st",
    "poſt",
    "ᴘost",
    "ｐｏｓｔ",
    "post\0",
];
