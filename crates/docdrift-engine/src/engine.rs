use docdrift_core::config::MatchConfig;
use docdrift_core::error::DriftError;
use docdrift_core::issues::{IssueSet, MatchStats};
use docdrift_core::types::{CodeSignature, DocSignature};

use crate::classifier::Classifier;
use crate::differ::{diff, diff_duplicate};
use crate::matcher::match_signatures;
use crate::resolver::NameResolver;
use crate::similarity::{NoSimilarity, Similarity};
use crate::types::{MatchKind, MatchOutcome, MatchedPair, RawDiscrepancy};

/// Runs resolve, match, diff and classify for one pair of signature sets.
///
/// Holds no state between runs beyond the compiled patterns and the
/// similarity strategy.
pub struct DriftEngine {
    config: MatchConfig,
    resolver: NameResolver,
    classifier: Classifier,
    similarity: Box<dyn Similarity>,
}

impl DriftEngine {
    pub fn new(config: MatchConfig) -> Result<Self, DriftError> {
        let resolver = NameResolver::new(&config)?;
        let classifier = Classifier::new(&config);
        Ok(Self {
            config,
            resolver,
            classifier,
            similarity: Box::new(NoSimilarity),
        })
    }

    /// Replace the fuzzy matching strategy. Only consulted when
    /// `enable_fuzzy_matching` is set.
    pub fn with_similarity(mut self, similarity: Box<dyn Similarity>) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn run(
        &self,
        code: Vec<CodeSignature>,
        doc: Vec<DocSignature>,
    ) -> Result<IssueSet, DriftError> {
        for c in &code {
            c.signature.validate()?;
        }
        for d in &doc {
            d.signature.validate()?;
        }

        let code = self.resolver.resolve(code);
        let doc = self.resolver.resolve(doc);
        tracing::debug!(code = code.len(), doc = doc.len(), "resolved signatures");

        let stats_base = (code.len() as u32, doc.len() as u32);
        let outcome = match_signatures(code, doc, &self.config, self.similarity.as_ref());
        let stats = match_stats(stats_base, &outcome);
        tracing::debug!(
            matched = stats.matched,
            code_only = stats.code_only,
            doc_only = stats.doc_only,
            duplicates = stats.duplicates,
            "matched signatures"
        );

        let discrepancies = self.discrepancies(&outcome);
        let set = self.classifier.classify(&discrepancies).with_stats(stats);
        tracing::debug!(
            total = set.summary.total,
            critical = set.summary.critical,
            "classified issues"
        );
        Ok(set)
    }

    /// Diff every pair and duplicate, ordered by anchor location.
    pub fn discrepancies(&self, outcome: &MatchOutcome) -> Vec<RawDiscrepancy> {
        let mut out: Vec<RawDiscrepancy> = outcome
            .pairs
            .iter()
            .flat_map(|pair| diff(pair, &self.config))
            .collect();
        out.extend(outcome.duplicates.iter().map(diff_duplicate));
        out.sort_by(|a, b| a.anchor().cmp(&b.anchor()));
        out
    }
}

fn match_stats((code_signatures, doc_signatures): (u32, u32), outcome: &MatchOutcome) -> MatchStats {
    let mut stats = MatchStats {
        code_signatures,
        doc_signatures,
        duplicates: outcome.duplicates.len() as u32,
        ..MatchStats::default()
    };
    for pair in &outcome.pairs {
        match pair {
            MatchedPair::Both { how, .. } => {
                stats.matched += 1;
                if matches!(how, MatchKind::Fuzzy { .. }) {
                    stats.fuzzy_matched += 1;
                }
            }
            MatchedPair::CodeOnly { .. } => stats.code_only += 1,
            MatchedPair::DocOnly { .. } => stats.doc_only += 1,
        }
    }
    stats
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
