/// Case-folds a word the same way the dictionary does on insert
pub fn fold(word: &str) -> String {
    word.to_lowercase()
}

/// Levenshtein distance with unit costs for insertion, deletion and substitution.
///
/// Compares `char`s, not bytes. Case-sensitive; fold first if needed.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=b.len() {
            let substitution = prev[j - 1] + usize::from(a[i - 1] != b[j - 1]);
            cur[j] = substitution.min(prev[j] + 1).min(cur[j - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}

/// Returns true if `a` and `b` are at most `d` edits apart.
///
/// Runs the Levenshtein recurrence restricted to the diagonal band
/// `|i - j| <= d`, with every cell capped at `d + 1`. Cells outside the band
/// can never be `<= d`, so capping them leaves every in-band value `<= d`
/// exact. Stops as soon as a whole row exceeds `d`.
pub fn edit_distance_within(a: &str, b: &str, d: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    within_chars(&a, &b, d)
}

/// Two words are adjacent iff their case-folded edit distance is exactly one
pub fn is_adjacent(word1: &str, word2: &str) -> bool {
    let a: Vec<char> = fold(word1).chars().collect();
    let b: Vec<char> = fold(word2).chars().collect();
    one_edit_apart(&a, &b)
}

/// Adjacency test on already-folded character slices
pub(crate) fn one_edit_apart(a: &[char], b: &[char]) -> bool {
    a != b && within_chars(a, b, 1)
}

fn within_chars(a: &[char], b: &[char], d: usize) -> bool {
    let (m, n) = (a.len(), b.len());
    if m.abs_diff(n) > d {
        return false;
    }

    let cap = d + 1;
    let mut prev: Vec<usize> = (0..=n).map(|j| j.min(cap)).collect();
    let mut cur = vec![cap; n + 1];

    for i in 1..=m {
        cur.fill(cap);
        cur[0] = i.min(cap);
        let lo = i.saturating_sub(d).max(1);
        let hi = (i + d).min(n);

        let mut row_min = cur[0];
        for j in lo..=hi {
            let substitution = prev[j - 1] + usize::from(a[i - 1] != b[j - 1]);
            let best = substitution.min(prev[j] + 1).min(cur[j - 1] + 1);
            cur[j] = best.min(cap);
            row_min = row_min.min(cur[j]);
        }

        if row_min > d {
            return false;
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[n] <= d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance_matches_known_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn within_handles_band_edges() {
        assert!(edit_distance_within("kitten", "sitting", 3));
        assert!(!edit_distance_within("kitten", "sitting", 2));
        assert!(edit_distance_within("", "a", 1));
        assert!(!edit_distance_within("", "ab", 1));
        assert!(edit_distance_within("abc", "abc", 0));
    }

    #[test]
    fn insertion_resolved_on_either_side() {
        // A greedy scan that always advances the longer word misjudges these
        assert!(is_adjacent("abcd", "abxcd"));
        assert!(is_adjacent("ab", "aab"));
        assert!(is_adjacent("ab", "abb"));
        assert!(!is_adjacent("ab", "ba"));
        assert!(!is_adjacent("abc", "xbcy"));
    }

    #[test]
    fn identical_words_are_not_adjacent() {
        assert!(!is_adjacent("cat", "cat"));
        assert!(!is_adjacent("Cat", "cAT"));
    }
}
