use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

/// One book of the canon and how many chapters it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    pub name: &'static str,
    pub chapters: u32,
}

const fn book(name: &'static str, chapters: u32) -> BookEntry {
    BookEntry { name, chapters }
}

/// The canonical book order. Iteration order is the reading order.
pub const BOOKS: &[BookEntry] = &[
    // Old Testament
    book("Genesis", 50),
    book("Exodus", 40),
    book("Leviticus", 27),
    book("Numbers", 36),
    book("Deuteronomy", 34),
    book("Joshua", 24),
    book("Judges", 21),
    book("Ruth", 4),
    book("1 Samuel", 31),
    book("2 Samuel", 24),
    book("1 Kings", 22),
    book("2 Kings", 25),
    book("1 Chronicles", 29),
    book("2 Chronicles", 36),
    book("Ezra", 10),
    book("Nehemiah", 13),
    book("Esther", 10),
    book("Job", 42),
    book("Psalms", 150),
    book("Proverbs", 31),
    book("Ecclesiastes", 12),
    book("Song of Songs", 8),
    book("Isaiah", 66),
    book("Jeremiah", 52),
    book("Lamentations", 5),
    book("Ezekiel", 48),
    book("Daniel", 12),
    book("Hosea", 14),
    book("Joel", 3),
    book("Amos", 9),
    book("Obadiah", 1),
    book("Jonah", 4),
    book("Micah", 7),
    book("Nahum", 3),
    book("Habakkuk", 3),
    book("Zephaniah", 3),
    book("Haggai", 2),
    book("Zechariah", 14),
    book("Malachi", 4),
    // New Testament
    book("Matthew", 28),
    book("Mark", 16),
    book("Luke", 24),
    book("John", 21),
    book("Acts", 28),
    book("Romans", 16),
    book("1 Corinthians", 16),
    book("2 Corinthians", 13),
    book("Galatians", 6),
    book("Ephesians", 6),
    book("Philippians", 4),
    book("Colossians", 4),
    book("1 Thessalonians", 5),
    book("2 Thessalonians", 3),
    book("1 Timothy", 6),
    book("2 Timothy", 4),
    book("Titus", 3),
    book("Philemon", 1),
    book("Hebrews", 13),
    book("James", 5),
    book("1 Peter", 5),
    book("2 Peter", 3),
    book("1 John", 5),
    book("2 John", 1),
    book("3 John", 1),
    book("Jude", 1),
    book("Revelation", 22),
];

/// Sum of every chapter count in [`BOOKS`]. Reaching it means the plan is done.
pub const TOTAL_CHAPTERS: u32 = sum_chapters(BOOKS);

/// Chapter count of the standard 66-book canon.
pub const CANON_CHAPTERS: u32 = 1189;

const fn sum_chapters(books: &[BookEntry]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < books.len() {
        total += books[i].chapters;
        i += 1;
    }
    total
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookTableError {
    #[error("book table is empty")]
    Empty,
    #[error("book '{name}' has no chapters")]
    NoChapters { name: &'static str },
    #[error("book '{name}' appears more than once")]
    Duplicate { name: &'static str },
    #[error("book table holds {actual} chapters, expected {expected}")]
    TotalMismatch { expected: u32, actual: u32 },
}

/// Check a book table once before anything reads from it.
/// Returns the table's chapter total on success.
pub fn validate_table(books: &[BookEntry], expected_total: u32) -> Result<u32, BookTableError> {
    if books.is_empty() {
        return Err(BookTableError::Empty);
    }

    let mut seen = HashSet::with_capacity(books.len());
    for entry in books {
        if entry.chapters == 0 {
            return Err(BookTableError::NoChapters { name: entry.name });
        }
        if !seen.insert(entry.name) {
            return Err(BookTableError::Duplicate { name: entry.name });
        }
    }

    let actual = sum_chapters(books);
    if actual != expected_total {
        return Err(BookTableError::TotalMismatch {
            expected: expected_total,
            actual,
        });
    }
    Ok(actual)
}

/// Position of a book in the canon, matched case-insensitively.
pub fn book_index(name: &str) -> Option<usize> {
    BOOKS
        .iter()
        .position(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canon_has_66_books_and_1189_chapters() {
        assert_eq!(BOOKS.len(), 66);
        assert_eq!(TOTAL_CHAPTERS, CANON_CHAPTERS);
        assert_eq!(BOOKS.iter().map(|b| b.chapters).sum::<u32>(), TOTAL_CHAPTERS);
    }

    #[test]
    fn canon_passes_validation() {
        assert_eq!(validate_table(BOOKS, CANON_CHAPTERS), Ok(1189));
    }

    #[test]
    fn order_starts_with_genesis_and_ends_with_revelation() {
        assert_eq!(BOOKS[0].name, "Genesis");
        assert_eq!(BOOKS[38].name, "Malachi");
        assert_eq!(BOOKS[39].name, "Matthew");
        assert_eq!(BOOKS[65].name, "Revelation");
    }

    #[test]
    fn validation_rejects_broken_tables() {
        assert_eq!(validate_table(&[], 0), Err(BookTableError::Empty));

        let zero = [book("Genesis", 50), book("Exodus", 0)];
        assert_eq!(
            validate_table(&zero, 50),
            Err(BookTableError::NoChapters { name: "Exodus" })
        );

        let dup = [book("Ruth", 4), book("Ruth", 4)];
        assert_eq!(
            validate_table(&dup, 8),
            Err(BookTableError::Duplicate { name: "Ruth" })
        );

        let short = [book("Jude", 1)];
        assert_eq!(
            validate_table(&short, 2),
            Err(BookTableError::TotalMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn book_index_ignores_case_and_whitespace() {
        assert_eq!(book_index("genesis"), Some(0));
        assert_eq!(book_index(" 2 John "), Some(62));
        assert_eq!(book_index("Maccabees"), None);
    }
}
