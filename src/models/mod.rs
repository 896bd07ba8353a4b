pub mod book;
pub mod position;

pub use book::{BOOKS, CANON_CHAPTERS, TOTAL_CHAPTERS};
pub use position::{Reading, ReadingPosition};
