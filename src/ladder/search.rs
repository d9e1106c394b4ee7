use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, warn};
use serde::Serialize;

use crate::ladder::adjacency::{fold, one_edit_apart};
use crate::ladder::Dictionary;
use crate::{Error, Result, SearchBound};

/// How the search enumerates the neighbors of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborStrategy {
    /// Test every dictionary word within one character of the current length
    #[default]
    DictionaryScan,
    /// Generate every single-edit variant over the dictionary's alphabet and keep those in the dictionary
    AlphabetMutation,
}

/// Bounds and strategy for a ladder search
#[derive(Debug, Clone, Copy)]
pub struct LadderConfig {
    /// Longest ladder, in words, the search may return (`None` = unbounded)
    pub max_ladder_len: Option<usize>,
    /// Wall-clock budget for one search (`None` = unbounded)
    pub time_limit: Option<Duration>,
    /// Neighbor enumeration strategy
    pub strategy: NeighborStrategy,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_ladder_len: Some(64),
            time_limit: Some(Duration::from_secs(10)),
            strategy: NeighborStrategy::DictionaryScan,
        }
    }
}

/// A ladder of words from start to goal, each one edit from the previous
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderPath {
    words: Vec<String>,
}

impl LadderPath {
    /// The words in order, start first
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words, start and goal included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a ladder returned by a search
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of single-edit steps
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl fmt::Display for LadderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

/// Breadth-first word ladder search
#[derive(Debug, Default, Clone)]
pub struct WordLadder {
    config: LadderConfig,
}

impl WordLadder {
    /// Create a new search with default bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search from an explicit configuration
    pub fn with_config(config: LadderConfig) -> Self {
        WordLadder { config }
    }

    /// Set the longest ladder (in words) the search may return
    pub fn with_max_ladder_len(mut self, max_ladder_len: Option<usize>) -> Self {
        self.config.max_ladder_len = max_ladder_len;
        self
    }

    /// Set the wall-clock budget for one search
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.config.time_limit = time_limit;
        self
    }

    /// Set how neighbors are enumerated
    pub fn with_strategy(mut self, strategy: NeighborStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// Finds a shortest ladder from `start` to `goal`.
    ///
    /// Both words are case-folded. A start equal to the goal yields the
    /// single-word ladder. The goal must be in `dictionary`; the start need
    /// not be. Words are marked visited when enqueued, so each is reached
    /// once, at its minimum depth.
    pub fn generate_ladder(&self, start: &str, goal: &str, dictionary: &Dictionary) -> Result<LadderPath> {
        let start = fold(start);
        let goal = fold(goal);

        if start == goal {
            return Ok(LadderPath { words: vec![start] });
        }
        if dictionary.get(&goal).is_none() {
            return Err(Error::GoalNotInDictionary(goal));
        }

        let started_at = Instant::now();

        // Arena of (word, parent index); the queue holds (arena index, ladder length)
        let mut nodes: Vec<(&str, Option<usize>)> = vec![(start.as_str(), None)];
        let mut visited: HashSet<&str> = HashSet::from([start.as_str()]);
        let mut queue: VecDeque<(usize, usize)> = VecDeque::from([(0, 1)]);

        while let Some((index, length)) = queue.pop_front() {
            if let Some(limit) = self.config.time_limit {
                if started_at.elapsed() >= limit {
                    return Err(self.exhausted(SearchBound::Time(limit), visited.len()));
                }
            }
            if let Some(max) = self.config.max_ladder_len {
                if length >= max {
                    return Err(self.exhausted(SearchBound::LadderLength(max), visited.len()));
                }
            }

            let word = nodes[index].0;
            for neighbor in self.neighbors(word, dictionary) {
                if !visited.insert(neighbor) {
                    continue;
                }
                nodes.push((neighbor, Some(index)));

                if neighbor == goal {
                    let ladder = Self::reconstruct(&nodes, nodes.len() - 1);
                    debug!(
                        "Ladder {} -> {}: {} words, {} visited in {:?}",
                        start,
                        goal,
                        ladder.len(),
                        visited.len(),
                        started_at.elapsed()
                    );
                    return Ok(ladder);
                }
                queue.push_back((nodes.len() - 1, length + 1));
            }
        }

        debug!("No ladder {} -> {} after visiting {} words", start, goal, visited.len());
        Err(Error::NoLadderExists {
            start: start.clone(),
            goal,
        })
    }

    fn exhausted(&self, bound: SearchBound, visited: usize) -> Error {
        warn!("Word ladder search stopped by {} after {} words", bound, visited);
        Error::SearchExhausted { bound, visited }
    }

    fn reconstruct(nodes: &[(&str, Option<usize>)], last: usize) -> LadderPath {
        let mut words = Vec::new();
        let mut current = Some(last);
        while let Some(index) = current {
            words.push(nodes[index].0.to_string());
            current = nodes[index].1;
        }
        words.reverse();
        LadderPath { words }
    }

    /// Dictionary words one edit away from `word`, in a deterministic order
    fn neighbors<'d>(&self, word: &str, dictionary: &'d Dictionary) -> Vec<&'d str> {
        let chars: Vec<char> = word.chars().collect();
        match self.config.strategy {
            NeighborStrategy::DictionaryScan => dictionary
                .candidates_near(chars.len())
                .filter(|candidate| {
                    let candidate: Vec<char> = candidate.chars().collect();
                    one_edit_apart(&chars, &candidate)
                })
                .collect(),
            NeighborStrategy::AlphabetMutation => single_edit_variants(&chars, dictionary.alphabet())
                .iter()
                .filter_map(|variant| dictionary.get(variant))
                .collect(),
        }
    }
}

/// Every string reachable from `chars` by one deletion, substitution or
/// insertion using letters from `alphabet`
fn single_edit_variants(chars: &[char], alphabet: &BTreeSet<char>) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();

    for i in 0..chars.len() {
        let mut deleted = chars.to_vec();
        deleted.remove(i);
        variants.insert(deleted.into_iter().collect());

        for &letter in alphabet {
            if letter != chars[i] {
                let mut substituted = chars.to_vec();
                substituted[i] = letter;
                variants.insert(substituted.into_iter().collect());
            }
        }
    }

    for i in 0..=chars.len() {
        for &letter in alphabet {
            let mut inserted = chars.to_vec();
            inserted.insert(i, letter);
            variants.insert(inserted.into_iter().collect());
        }
    }

    variants
}

/// Finds a shortest ladder with the default search bounds
pub fn generate_ladder(start: &str, goal: &str, dictionary: &Dictionary) -> Result<LadderPath> {
    WordLadder::new().generate_ladder(start, goal, dictionary)
}
