use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A scripture-mastery passage: reference plus a short text excerpt shown
/// as the quiz prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scripture {
    pub id: i64,
    pub book: String,
    pub chapter: u32,
    pub verse_start: u32,
    /// Set only for multi-verse passages ("2 Nephi 9:28-29").
    pub verse_end: Option<u32>,
    pub text: String,
}

impl Scripture {
    /// Canonical reference string, e.g. "Alma 34:32-34".
    pub fn reference(&self) -> String {
        match self.verse_end {
            Some(end) => format!("{} {}:{}-{}", self.book, self.chapter, self.verse_start, end),
            None => format!("{} {}:{}", self.book, self.chapter, self.verse_start),
        }
    }

    pub fn contains_verse(&self, verse: u32) -> bool {
        let end = self.verse_end.unwrap_or(self.verse_start);
        verse >= self.verse_start && verse <= end
    }
}

impl std::fmt::Display for Scripture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reference())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// What a guess must pin down at this level.
    pub fn requirement(&self) -> &'static str {
        match self {
            Difficulty::Easy => "book",
            Difficulty::Medium => "book and chapter",
            Difficulty::Hard => "book, chapter and verse",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(anyhow::anyhow!("Unknown difficulty: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_formats_single_and_range() {
        let single = Scripture {
            id: 1,
            book: "1 Nephi".into(),
            chapter: 3,
            verse_start: 7,
            verse_end: None,
            text: String::new(),
        };
        assert_eq!(single.reference(), "1 Nephi 3:7");

        let range = Scripture {
            id: 2,
            book: "Alma".into(),
            chapter: 34,
            verse_start: 32,
            verse_end: Some(34),
            text: String::new(),
        };
        assert_eq!(range.reference(), "Alma 34:32-34");
        assert!(range.contains_verse(33));
        assert!(!range.contains_verse(35));
    }

    #[test]
    fn difficulty_parses_names_and_shorthands() {
        assert_eq!(Difficulty::from_str("Hard").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::from_str("m").unwrap(), Difficulty::Medium);
        assert!(Difficulty::from_str("brutal").is_err());
    }
}
