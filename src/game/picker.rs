use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;

use crate::models::Scripture;

/// The passage everyone sees on `date`. Derived from the day number so
/// every device agrees without any server involved.
pub fn daily_passage(corpus: &[Scripture], date: NaiveDate) -> Option<&Scripture> {
    if corpus.is_empty() {
        return None;
    }
    let day = date.num_days_from_ce() as i64;
    let idx = day.rem_euclid(corpus.len() as i64) as usize;
    Some(&corpus[idx])
}

/// Random practice pick that never repeats the passage just shown.
pub fn next_random<'a>(corpus: &'a [Scripture], last_id: Option<i64>) -> Option<&'a Scripture> {
    if corpus.is_empty() {
        return None;
    }
    if corpus.len() == 1 {
        return corpus.first();
    }
    let candidates: Vec<&Scripture> = corpus
        .iter()
        .filter(|s| Some(s.id) != last_id)
        .collect();
    candidates.choose(&mut rand::thread_rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: i64) -> Vec<Scripture> {
        (1..=n)
            .map(|id| Scripture {
                id,
                book: "Alma".into(),
                chapter: id as u32,
                verse_start: 1,
                verse_end: None,
                text: String::new(),
            })
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_pick_is_stable_for_a_date() {
        let corpus = corpus(25);
        let a = daily_passage(&corpus, date(2025, 6, 1)).unwrap().id;
        let b = daily_passage(&corpus, date(2025, 6, 1)).unwrap().id;
        assert_eq!(a, b);
    }

    #[test]
    fn daily_pick_advances_with_the_date() {
        let corpus = corpus(25);
        let a = daily_passage(&corpus, date(2025, 6, 1)).unwrap().id;
        let b = daily_passage(&corpus, date(2025, 6, 2)).unwrap().id;
        assert_ne!(a, b);
    }

    #[test]
    fn empty_corpus_yields_nothing() {
        assert!(daily_passage(&[], date(2025, 6, 1)).is_none());
        assert!(next_random(&[], None).is_none());
    }

    #[test]
    fn random_pick_never_repeats_the_last_passage() {
        let corpus = corpus(3);
        for _ in 0..50 {
            let picked = next_random(&corpus, Some(2)).unwrap();
            assert_ne!(picked.id, 2);
        }
    }

    #[test]
    fn single_passage_corpus_must_repeat() {
        let corpus = corpus(1);
        assert_eq!(next_random(&corpus, Some(1)).unwrap().id, 1);
    }
}
