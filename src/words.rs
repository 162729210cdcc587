//! Word supply shared between the async fetch and the spawner.
//!
//! The pool is an `Rc<RefCell<..>>` handle: the fetch task keeps a clone and
//! writes into it whenever it resolves, so a restarted game sees a late result.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Debug, Default)]
pub struct WordPool {
    words: Rc<RefCell<Vec<String>>>,
}

impl WordPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool pre-filled with `words`, filtered by `max_len`.
    pub fn with_words<I, S>(words: I, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool = Self::new();
        pool.replace(words, max_len);
        pool
    }

    /// Swap in a fresh word list. Returns how many words were kept.
    pub fn replace<I, S>(&self, words: I, max_len: usize) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kept: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| accepts(w, max_len))
            .collect();
        let n = kept.len();
        *self.words.borrow_mut() = kept;
        n
    }

    pub fn len(&self) -> usize {
        self.words.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.borrow().is_empty()
    }

    /// Uniform pick; `None` while the pool is empty.
    pub fn choose(&self, rng: &mut impl Rng) -> Option<String> {
        let words = self.words.borrow();
        if words.is_empty() {
            return None;
        }
        Some(words[rng.gen_range(0..words.len())].clone())
    }
}

/// Filter policy: non-empty, at most `max_len` characters.
pub fn accepts(word: &str, max_len: usize) -> bool {
    let n = word.chars().count();
    n > 0 && n <= max_len
}

#[derive(Deserialize)]
struct DatamuseEntry {
    word: String,
}

/// Parse a Datamuse `/words` response (`[{"word": "...", "score": ..}, ..]`).
/// Extra fields are ignored; filtering happens in `WordPool::replace`.
pub fn parse_datamuse(body: &str) -> Result<Vec<String>, serde_json::Error> {
    let entries: Vec<DatamuseEntry> = serde_json::from_str(body)?;
    Ok(entries.into_iter().map(|e| e.word).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn replace_drops_long_and_empty_words() {
        let pool = WordPool::new();
        let kept = pool.replace(["tank", "", "counteroffensive", "twelve-chars"], 12);
        assert_eq!(kept, 2);
        assert_eq!(pool.len(), 2);
        pool.replace(["", "counteroffensive"], 12);
        assert!(pool.is_empty());
    }

    #[test]
    fn choose_on_empty_pool_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(WordPool::new().choose(&mut rng).is_none());
    }

    #[test]
    fn clones_share_storage() {
        let pool = WordPool::new();
        let handle = pool.clone();
        handle.replace(["siege"], 12);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.choose(&mut rng).as_deref(), Some("siege"));
    }

    #[test]
    fn parses_datamuse_payload() {
        let body = r#"[{"word":"battle","score":1201},{"word":"peace","score":900}]"#;
        assert_eq!(parse_datamuse(body).unwrap(), vec!["battle", "peace"]);
        assert!(parse_datamuse("<html>rate limited</html>").is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(accepts("épée", 4));
        assert!(!accepts("épées", 4));
    }
}
