//! GitHub-style slug generation.
//!
//! Produces the same tokens as `github-slugger`: lowercase, punctuation
//! removed, spaces turned into dashes, and a `-N` suffix for every repeat
//! seen since the last [`Slugger::reset`].

use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct Slugger {
    /// Slug -> how many times its base form has been repeated.
    occurrences: FxHashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a slug for `value`, unique among the slugs generated so far.
    pub fn slug(&mut self, value: &str) -> String {
        let original = slugify(value);
        let mut result = original.clone();

        while self.occurrences.contains_key(&result) {
            let count = self.occurrences.entry(original.clone()).or_default();
            *count += 1;
            result = format!("{original}-{count}");
        }

        self.occurrences.insert(result.clone(), 0);
        result
    }

    /// Forget every slug generated so far.
    pub fn reset(&mut self) {
        self.occurrences.clear();
    }
}

/// Slugify without tracking repeats.
pub fn slugify(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ' '))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
