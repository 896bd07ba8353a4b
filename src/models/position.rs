use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::models::book::{BookEntry, BOOKS};

/// Where the reader stands in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingPosition {
    /// `chapter` is 1-based and never exceeds the book's chapter count.
    InProgress { book_index: usize, chapter: u32 },
    Complete,
}

impl ReadingPosition {
    /// First chapter of the first book.
    pub fn start() -> Self {
        ReadingPosition::InProgress {
            book_index: 0,
            chapter: 1,
        }
    }

    pub fn book(&self) -> Option<&'static BookEntry> {
        match self {
            ReadingPosition::InProgress { book_index, .. } => BOOKS.get(*book_index),
            ReadingPosition::Complete => None,
        }
    }

    pub fn chapter(&self) -> Option<u32> {
        match self {
            ReadingPosition::InProgress { chapter, .. } => Some(*chapter),
            ReadingPosition::Complete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ReadingPosition::Complete)
    }
}

impl std::fmt::Display for ReadingPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.book(), self.chapter()) {
            (Some(book), Some(chapter)) => write!(f, "{} {}", book.name, chapter),
            _ => write!(f, "complete"),
        }
    }
}

impl Serialize for ReadingPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.book(), self.chapter()) {
            (Some(book), Some(chapter)) => {
                let mut state = serializer.serialize_struct("ReadingPosition", 3)?;
                state.serialize_field("status", "in_progress")?;
                state.serialize_field("book", book.name)?;
                state.serialize_field("chapter", &chapter)?;
                state.end()
            }
            _ => {
                let mut state = serializer.serialize_struct("ReadingPosition", 1)?;
                state.serialize_field("status", "complete")?;
                state.end()
            }
        }
    }
}

/// One chapter of a day's assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Reading {
    pub book: &'static str,
    pub chapter: u32,
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}
