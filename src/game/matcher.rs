use crate::models::{Difficulty, Scripture};

/// A reference pulled out of free-form user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGuess {
    pub book: String,
    pub chapter: Option<u32>,
    pub verse: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    /// Book matched but the chapter/verse the difficulty demands did not.
    RightBook,
    Wrong,
    /// Input did not look like any known reference.
    Unrecognized,
}

/// Canonical book names for the seeded corpus.
const BOOKS: &[(&str, &[&str])] = &[
    ("1 Nephi", &["1nephi", "1ne", "1nep", "firstnephi"]),
    ("2 Nephi", &["2nephi", "2ne", "2nep", "secondnephi"]),
    ("Jacob", &["jacob", "jac"]),
    ("Mosiah", &["mosiah", "mos"]),
    ("Alma", &["alma"]),
    ("Helaman", &["helaman", "hel"]),
    ("3 Nephi", &["3nephi", "3ne", "3nep", "thirdnephi"]),
    ("Ether", &["ether", "eth"]),
    ("Moroni", &["moroni", "moro", "mni"]),
];

/// Resolve a book name or common abbreviation to its canonical form.
pub fn normalize_book(input: &str) -> Option<&'static str> {
    let compact: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if compact.is_empty() {
        return None;
    }
    BOOKS
        .iter()
        .find(|(_, aliases)| aliases.contains(&compact.as_str()))
        .map(|(canonical, _)| *canonical)
}

/// Parse "1 Nephi 3:7", "1 ne 3:7", "alma 32", "helaman" and the like.
/// Chapter and verse are optional; punctuation and case are ignored.
pub fn parse_reference(input: &str) -> Option<ParsedGuess> {
    let cleaned = input.replace(['.', ','], " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    // A trailing "3:7" or "3" is the chapter/verse; everything before it
    // (which may itself start with a digit, as in "1 nephi") is the book.
    let (book_tokens, chapter, verse) = match tokens.last().unwrap() {
        last if last.contains(':') => {
            let mut parts = last.splitn(2, ':');
            let chapter: u32 = parts.next()?.parse().ok()?;
            let verse: u32 = parts.next()?.parse().ok()?;
            (&tokens[..tokens.len() - 1], Some(chapter), Some(verse))
        }
        last => match last.parse::<u32>() {
            Ok(chapter) if tokens.len() > 1 => (&tokens[..tokens.len() - 1], Some(chapter), None),
            _ => (&tokens[..], None, None),
        },
    };

    let book = normalize_book(&book_tokens.join(" "))?;
    Some(ParsedGuess {
        book: book.to_string(),
        chapter,
        verse,
    })
}

/// Judge a guess against the passage at the given difficulty.
/// Easy asks for the book, medium adds the chapter, hard adds a verse
/// inside the passage's range.
pub fn check_guess(scripture: &Scripture, input: &str, difficulty: Difficulty) -> GuessOutcome {
    let Some(guess) = parse_reference(input) else {
        return GuessOutcome::Unrecognized;
    };

    if !guess.book.eq_ignore_ascii_case(&scripture.book) {
        return GuessOutcome::Wrong;
    }

    match difficulty {
        Difficulty::Easy => GuessOutcome::Correct,
        Difficulty::Medium => match guess.chapter {
            Some(c) if c == scripture.chapter => GuessOutcome::Correct,
            _ => GuessOutcome::RightBook,
        },
        Difficulty::Hard => match (guess.chapter, guess.verse) {
            (Some(c), Some(v)) if c == scripture.chapter && scripture.contains_verse(v) => {
                GuessOutcome::Correct
            }
            _ => GuessOutcome::RightBook,
        },
    }
}
