//! Domain-specific assertion macros for postopia-search harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! input that broke the lookup.

/// Assert that a lookup result is `Ok(expected)`.
///
/// ```rust
/// assert_category!(SearchCategory::from_string("Post"), SearchCategory::Post);
/// ```
#[macro_export]
macro_rules! assert_category {
    ($result:expr, $expected:expr) => {{
        let result: postopia_core::Result<postopia_core::SearchCategory> = $result;
        let expected: postopia_core::SearchCategory = $expected;
        match result {
            Ok(actual) => pretty_assertions::assert_eq!(actual, expected),
            Err(err) => panic!(
                "assert_category! failed: expected {:?}, got error: {}",
                expected, err
            ),
        }
    }};
}

/// Assert that a lookup result is `Err(InvalidCategory)` carrying `input`.
///
/// ```rust
/// assert_invalid_category!(SearchCategory::from_string("posts"), Some("posts"));
/// ```
#[macro_export]
macro_rules! assert_invalid_category {
    ($result:expr, $input:expr) => {{
        let result: postopia_core::Result<postopia_core::SearchCategory> = $result;
        let input: Option<&str> = $input;
        match result {
            Err(postopia_core::Error::InvalidCategory { input: got }) => {
                pretty_assertions::assert_eq!(got.as_deref(), input)
            }
            Err(other) => panic!(
                "assert_invalid_category! failed: wrong error kind for {:?}: {:?}",
                input, other
            ),
            Ok(category) => panic!(
                "assert_invalid_category! failed: {:?} parsed as {:?}",
                input, category
            ),
        }
    }};
}
