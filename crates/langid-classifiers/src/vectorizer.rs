//! Character n-gram feature extraction

use crate::artifact::{AnalyzerSpec, NormSpec, VectorizerSpec};
use langid_core::{Error, Result};
use regex::Regex;
use std::collections::HashMap;

/// Sparse feature row: `(column, weight)` pairs sorted by column
pub type SparseVector = Vec<(usize, f64)>;

/// Turns text into weighted character n-gram counts over a fixed vocabulary
pub struct CharNgramVectorizer {
    analyzer: AnalyzerSpec,
    min_n: usize,
    max_n: usize,
    lowercase: bool,
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    sublinear_tf: bool,
    norm: NormSpec,
    whitespace: Regex,
}

impl CharNgramVectorizer {
    /// Build a vectorizer from its serialized parameters
    pub fn new(spec: VectorizerSpec) -> Result<Self> {
        let (min_n, max_n) = spec.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::model(format!(
                "invalid ngram_range [{min_n}, {max_n}]"
            )));
        }

        let n_features = spec.vocabulary.len();
        if n_features == 0 {
            return Err(Error::model("vectorizer vocabulary is empty"));
        }
        if let Some((ngram, column)) = spec.vocabulary.iter().find(|(_, &c)| c >= n_features) {
            return Err(Error::model(format!(
                "vocabulary entry {ngram:?} maps to column {column}, outside 0..{n_features}"
            )));
        }
        if let Some(idf) = &spec.idf {
            if idf.len() != n_features {
                return Err(Error::model(format!(
                    "idf has {} entries, vocabulary has {n_features}",
                    idf.len()
                )));
            }
        }

        let whitespace = Regex::new(r"\s\s+")
            .map_err(|e| Error::model(format!("Failed to compile whitespace regex: {}", e)))?;

        Ok(Self {
            analyzer: spec.analyzer,
            min_n,
            max_n,
            lowercase: spec.lowercase,
            vocabulary: spec.vocabulary,
            idf: spec.idf,
            sublinear_tf: spec.sublinear_tf,
            norm: spec.norm,
            whitespace,
        })
    }

    /// Number of feature columns
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Extract the n-grams of `text`, in order, duplicates included
    pub fn ngrams(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let text = self.whitespace.replace_all(&text, " ");

        match self.analyzer {
            AnalyzerSpec::Char => self.char_ngrams(&text),
            AnalyzerSpec::CharWb => self.char_wb_ngrams(&text),
        }
    }

    fn char_ngrams(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut ngrams = Vec::new();

        for n in self.min_n..=self.max_n.min(chars.len()) {
            for window in chars.windows(n) {
                ngrams.push(window.iter().collect());
            }
        }
        ngrams
    }

    fn char_wb_ngrams(&self, text: &str) -> Vec<String> {
        let mut ngrams = Vec::new();

        for word in text.split_whitespace() {
            let padded: Vec<char> = std::iter::once(' ')
                .chain(word.chars())
                .chain(std::iter::once(' '))
                .collect();
            let len = padded.len();

            for n in self.min_n..=self.max_n {
                // A word no longer than n yields itself once, for the smallest n only
                if len <= n {
                    ngrams.push(padded.iter().collect());
                    break;
                }
                for window in padded.windows(n) {
                    ngrams.push(window.iter().collect());
                }
            }
        }
        ngrams
    }

    /// Vectorize `text` into a normalized sparse row
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for ngram in self.ngrams(text) {
            if let Some(&column) = self.vocabulary.get(&ngram) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseVector = counts
            .into_iter()
            .map(|(column, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                let weight = match &self.idf {
                    Some(idf) => tf * idf[column],
                    None => tf,
                };
                (column, weight)
            })
            .collect();
        row.sort_unstable_by_key(|&(column, _)| column);

        let magnitude = match self.norm {
            NormSpec::L2 => row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            NormSpec::L1 => row.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            NormSpec::None => 1.0,
        };
        if magnitude > 0.0 {
            for (_, weight) in row.iter_mut() {
                *weight /= magnitude;
            }
        }

        row
    }
}

impl std::fmt::Debug for CharNgramVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharNgramVectorizer")
            .field("analyzer", &self.analyzer)
            .field("ngram_range", &(self.min_n, self.max_n))
            .field("n_features", &self.n_features())
            .field("norm", &self.norm)
            .finish()
    }
}
