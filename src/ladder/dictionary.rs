use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use log::debug;
use rand::Rng;

use crate::ladder::adjacency::fold;
use crate::Result;

/// A set of case-folded words, bucketed by character count.
///
/// Built once and then only read. Iteration order is by length, then
/// lexicographic, so searches over it are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// char count -> words of that length
    buckets: BTreeMap<usize, BTreeSet<String>>,
    /// Every character that appears in some word
    alphabet: BTreeSet<char>,
    len: usize,
}

impl Dictionary {
    /// Creates an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from words, folding case and collapsing duplicates
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Builds a dictionary from whitespace-delimited text
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Reads a whitespace-delimited word list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = Self::parse(&fs::read_to_string(path)?);
        debug!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    fn insert(&mut self, word: &str) {
        let word = fold(word);
        let length = word.chars().count();
        self.alphabet.extend(word.chars());
        if self.buckets.entry(length).or_default().insert(word) {
            self.len += 1;
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the dictionary holds no words
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.get(&fold(word)).is_some()
    }

    /// Looks up an already-folded word and returns the stored copy
    pub fn get(&self, folded: &str) -> Option<&str> {
        self.buckets
            .get(&folded.chars().count())
            .and_then(|bucket| bucket.get(folded))
            .map(String::as_str)
    }

    /// All words, shortest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().flatten().map(String::as_str)
    }

    /// Words with exactly `length` characters
    pub fn words_with_len(&self, length: usize) -> impl Iterator<Item = &str> {
        self.buckets.get(&length).into_iter().flatten().map(String::as_str)
    }

    /// Words whose length is within one of `length`; the only ones that can be adjacent to a word of that length
    pub fn candidates_near(&self, length: usize) -> impl Iterator<Item = &str> {
        self.buckets
            .range(length.saturating_sub(1)..=length + 1)
            .flat_map(|(_, bucket)| bucket.iter().map(String::as_str))
    }

    /// Every character used by some word, in order
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Generates a dictionary of `count` random words (duplicates collapse, so it
/// may hold fewer) with lengths in `min_len..=max_len` over `alphabet`.
pub fn generate_random<R: Rng>(
    count: usize,
    min_len: usize,
    max_len: usize,
    alphabet: &[char],
    rng: &mut R,
) -> Dictionary {
    if alphabet.is_empty() || min_len > max_len {
        return Dictionary::new();
    }

    (0..count)
        .map(|_| {
            let length = rng.gen_range(min_len..=max_len);
            (0..length)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect::<String>()
        })
        .collect()
}
