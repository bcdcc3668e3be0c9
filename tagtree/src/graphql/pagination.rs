// SPDX-License-Identifier: AGPL-3.0-or-later

//! Cursor-based slicing of ordered collections.
use async_graphql::{InputObject, SimpleObject};

use crate::errors::SliceQueryError;

/// Items which can be addressed by an opaque cursor within an ordered collection.
pub trait Cursor {
    /// Returns the cursor pointing at this item.
    fn cursor(&self) -> String;
}

impl Cursor for String {
    fn cursor(&self) -> String {
        self.clone()
    }
}

/// SliceInfo objects are generated by the server. Can be used in consecutive queries.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct SliceInfo {
    pub first_cursor: String,
    pub last_cursor: String,
}

/// SliceQuery object is for selecting specific 'slice' of an object to return. Affects returned
/// SliceInfo.
#[derive(InputObject, Clone, Debug, Default, PartialEq, Eq)]
pub struct SliceQuery {
    /// Either this field or 'after' is required. An empty string means slice from the beginning.
    pub before: Option<String>,

    /// Either this field or 'before' is required. An empty string means slice to the end.
    pub after: Option<String>,

    /// Set the amount of returned items.
    pub limit: i32,
}

/// Direction and starting point of a validated slice query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SliceDirection {
    /// Items preceding the cursor, `None` starts at the end of the collection.
    Before(Option<String>),

    /// Items following the cursor, `None` starts at the beginning of the collection.
    After(Option<String>),
}

impl SliceQuery {
    pub fn before(cursor: &str, limit: i32) -> Self {
        Self {
            before: Some(cursor.to_owned()),
            after: None,
            limit,
        }
    }

    pub fn after(cursor: &str, limit: i32) -> Self {
        Self {
            before: None,
            after: Some(cursor.to_owned()),
            limit,
        }
    }

    /// Checks the query for contradicting or missing values.
    pub fn validate(&self) -> Result<SliceDirection, SliceQueryError> {
        if self.limit <= 0 {
            return Err(SliceQueryError::InvalidLimit(self.limit));
        }

        let non_empty = |cursor: &String| {
            if cursor.is_empty() {
                None
            } else {
                Some(cursor.clone())
            }
        };

        match (&self.before, &self.after) {
            (Some(before), None) => Ok(SliceDirection::Before(non_empty(before))),
            (None, Some(after)) => Ok(SliceDirection::After(non_empty(after))),
            (Some(_), Some(_)) => Err(SliceQueryError::AmbiguousBoundary),
            (None, None) => Err(SliceQueryError::MissingBoundary),
        }
    }
}

/// Bounded sub-range of an ordered collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slice<T> {
    /// Items in collection order.
    pub items: Vec<T>,

    /// Boundary cursors, `None` when the slice is empty.
    pub info: Option<SliceInfo>,
}

/// Selects the slice of `items` described by `query`.
pub fn paginate<T>(items: &[T], query: &SliceQuery) -> Result<Slice<T>, SliceQueryError>
where
    T: Cursor + Clone,
{
    let direction = query.validate()?;
    let limit = query.limit as usize;

    let position = |cursor: &str| {
        items
            .iter()
            .position(|item| item.cursor() == cursor)
            .ok_or_else(|| SliceQueryError::UnknownCursor(cursor.to_owned()))
    };

    let range = match direction {
        SliceDirection::After(None) => 0..limit.min(items.len()),
        SliceDirection::After(Some(cursor)) => {
            let start = position(&cursor)? + 1;
            start..(start + limit).min(items.len())
        }
        SliceDirection::Before(None) => items.len().saturating_sub(limit)..items.len(),
        SliceDirection::Before(Some(cursor)) => {
            let end = position(&cursor)?;
            end.saturating_sub(limit)..end
        }
    };

    let items = items[range].to_vec();

    let info = match (items.first(), items.last()) {
        (Some(first), Some(last)) => Some(SliceInfo {
            first_cursor: first.cursor(),
            last_cursor: last.cursor(),
        }),
        _ => None,
    };

    Ok(Slice { items, info })
}
