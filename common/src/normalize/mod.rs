//! Pure text cleanup applied to everything read off a page.

mod date;
mod name;
mod number;
mod title;

pub use date::{normalize_date, parse_date};
pub use name::{split_localized_name, split_unlinked_track};
pub use number::{parse_abbreviated, Abbreviated};
pub use title::split_title;

use itertools::Itertools;

/// Lowercased, trimmed, empty entries dropped, first occurrence wins.
pub fn tag_set<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .unique()
        .collect()
}
