use std::collections::{BTreeMap, BTreeSet};

use docdrift_core::types::Signature;

/// Scores how likely two signatures name the same item, in `[0, 1]`.
///
/// Implementations must be deterministic for identical inputs.
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &Signature, b: &Signature) -> f64;
}

/// Default strategy: never similar, so fuzzy matching never pairs anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSimilarity;

impl Similarity for NoSimilarity {
    fn similarity(&self, _a: &Signature, _b: &Signature) -> f64 {
        0.0
    }
}

/// Cosine similarity over identifier tokens, blended with parameter overlap.
#[derive(Debug, Clone, Copy)]
pub struct TokenSimilarity {
    name_weight: f64,
}

impl Default for TokenSimilarity {
    fn default() -> Self {
        Self { name_weight: 0.8 }
    }
}

impl TokenSimilarity {
    pub fn with_name_weight(name_weight: f64) -> Self {
        Self {
            name_weight: name_weight.clamp(0.0, 1.0),
        }
    }
}

impl Similarity for TokenSimilarity {
    fn similarity(&self, a: &Signature, b: &Signature) -> f64 {
        let name_score = cosine(&token_bag(&a.qualified_name()), &token_bag(&b.qualified_name()));

        let pa: BTreeSet<&str> = a.parameter_names().filter(|n| !is_receiver(n)).collect();
        let pb: BTreeSet<&str> = b.parameter_names().filter(|n| !is_receiver(n)).collect();
        if pa.is_empty() && pb.is_empty() {
            return name_score;
        }
        let union = pa.union(&pb).count() as f64;
        let shared = pa.intersection(&pb).count() as f64;
        let param_score = shared / union;

        (self.name_weight * name_score + (1.0 - self.name_weight) * param_score).clamp(0.0, 1.0)
    }
}

/// `self` and `cls` are receivers, not documented parameters.
pub fn is_receiver(name: &str) -> bool {
    name == "self" || name == "cls"
}

/// Split an identifier into lowercase words on `.`, `_`, `-` and camelCase
/// boundaries.
pub fn tokenize(ident: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in ident.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn token_bag(ident: &str) -> BTreeMap<String, f64> {
    let mut bag = BTreeMap::new();
    for token in tokenize(ident) {
        *bag.entry(token).or_insert(0.0) += 1.0;
    }
    bag
}

fn cosine(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(k, va)| b.get(k).map(|vb| va * vb))
        .sum();
    let norm_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.values().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
