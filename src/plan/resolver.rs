use crate::models::{Reading, ReadingPosition, BOOKS};
use crate::plan::calculator::{SUNDAY_RATE, WEEKDAY_RATE};

/// Map a count of finished chapters onto the next chapter to read.
pub fn resolve_position(chapters_read: i64) -> ReadingPosition {
    if chapters_read <= 0 {
        return ReadingPosition::start();
    }

    let mut before: i64 = 0;
    for (book_index, book) in BOOKS.iter().enumerate() {
        let chapters = i64::from(book.chapters);
        if before + chapters > chapters_read {
            // 0 <= chapters_read - before < chapters, so this fits in the book
            let chapter = (chapters_read - before + 1) as u32;
            return ReadingPosition::InProgress { book_index, chapter };
        }
        before += chapters;
    }

    ReadingPosition::Complete
}

/// The chapters to read on a day, starting at `position`.
///
/// Rolls over into the next book when one runs out, and returns a short
/// list if the last book ends before the day's quota is met.
pub fn todays_reading(position: ReadingPosition, is_sunday: bool) -> Vec<Reading> {
    let ReadingPosition::InProgress {
        mut book_index,
        mut chapter,
    } = position
    else {
        return Vec::new();
    };

    let mut remaining = if is_sunday { SUNDAY_RATE } else { WEEKDAY_RATE };
    let mut readings = Vec::with_capacity(remaining as usize);

    while remaining > 0 {
        let Some(book) = BOOKS.get(book_index) else {
            break;
        };
        if chapter > book.chapters {
            book_index += 1;
            chapter = 1;
            continue;
        }
        readings.push(Reading {
            book: book.name,
            chapter,
        });
        chapter += 1;
        remaining -= 1;
    }

    readings
}
