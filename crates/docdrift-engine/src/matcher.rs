use std::collections::{BTreeMap, HashMap};

use docdrift_core::config::MatchConfig;
use docdrift_core::types::{CodeSignature, DocSignature, HasSignature, Side};

use crate::similarity::Similarity;
use crate::types::{Duplicate, Keyed, MatchKind, MatchOutcome, MatchedPair};

/// Pair code signatures with doc signatures.
///
/// Exact pass on comparison keys first; when `config.enable_fuzzy_matching` is
/// set, leftover signatures are offered to `similarity`. Pairs come back
/// ordered by file path, then line, then key.
pub fn match_signatures(
    code: Vec<Keyed<CodeSignature>>,
    doc: Vec<Keyed<DocSignature>>,
    config: &MatchConfig,
    similarity: &dyn Similarity,
) -> MatchOutcome {
    let mut duplicates = Vec::new();
    let code = first_per_key(code, Side::Code, &mut duplicates);
    let doc = first_per_key(doc, Side::Doc, &mut duplicates);

    let mut docs_by_key: BTreeMap<String, DocSignature> =
        doc.into_iter().map(|k| (k.key, k.item)).collect();

    let mut pairs = Vec::new();
    let mut code_only: Vec<Keyed<CodeSignature>> = Vec::new();

    for Keyed { key, item } in code {
        match docs_by_key.remove(&key) {
            Some(doc) => pairs.push(MatchedPair::Both {
                key,
                code: item,
                doc,
                how: MatchKind::Exact,
            }),
            None => code_only.push(Keyed { key, item }),
        }
    }

    let mut doc_only: Vec<Keyed<DocSignature>> = docs_by_key
        .into_iter()
        .map(|(key, item)| Keyed { key, item })
        .collect();

    if config.enable_fuzzy_matching {
        let fuzzy = fuzzy_pass(
            &mut code_only,
            &mut doc_only,
            config.fuzzy_match_threshold,
            similarity,
        );
        tracing::debug!(pairs = fuzzy.len(), "fuzzy pass");
        pairs.extend(fuzzy);
    }

    pairs.extend(
        code_only
            .into_iter()
            .map(|k| MatchedPair::CodeOnly { key: k.key, code: k.item }),
    );
    pairs.extend(
        doc_only
            .into_iter()
            .map(|k| MatchedPair::DocOnly { key: k.key, doc: k.item }),
    );

    pairs.sort_by(|a, b| {
        a.anchor()
            .cmp(b.anchor())
            .then_with(|| a.key().cmp(b.key()))
    });
    duplicates.sort_by(|a, b| a.duplicate.location.cmp(&b.duplicate.location));

    MatchOutcome { pairs, duplicates }
}

/// Keep the first signature per key; later ones are recorded as duplicates.
fn first_per_key<T: HasSignature>(
    items: Vec<Keyed<T>>,
    side: Side,
    duplicates: &mut Vec<Duplicate>,
) -> Vec<Keyed<T>> {
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<Keyed<T>> = Vec::with_capacity(items.len());

    for keyed in items {
        if let Some(&idx) = first_seen.get(&keyed.key) {
            duplicates.push(Duplicate {
                key: keyed.key.clone(),
                side,
                first: kept[idx].item.signature().location.clone(),
                duplicate: keyed.item.signature().clone(),
            });
            continue;
        }
        first_seen.insert(keyed.key.clone(), kept.len());
        kept.push(keyed);
    }
    kept
}

/// Greedy best-match pairing of leftovers. Code candidates are visited in key
/// order; each doc candidate is taken at most once; score ties go to the
/// alphabetically first doc name.
fn fuzzy_pass(
    code_only: &mut Vec<Keyed<CodeSignature>>,
    doc_only: &mut Vec<Keyed<DocSignature>>,
    threshold: f64,
    similarity: &dyn Similarity,
) -> Vec<MatchedPair> {
    code_only.sort_by(|a, b| a.key.cmp(&b.key));

    let mut doc_taken = vec![false; doc_only.len()];
    let mut assignments: Vec<(usize, usize, f64)> = Vec::new();

    for (ci, code) in code_only.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for (di, doc) in doc_only.iter().enumerate() {
            if doc_taken[di] {
                continue;
            }
            let score = similarity.similarity(code.item.signature(), doc.item.signature());
            if score.is_nan() || score < threshold {
                continue;
            }
            let better = match best {
                None => true,
                Some((bi, bs)) => {
                    score > bs
                        || (score == bs
                            && doc.item.signature.qualified_name()
                                < doc_only[bi].item.signature.qualified_name())
                }
            };
            if better {
                best = Some((di, score));
            }
        }
        if let Some((di, score)) = best {
            doc_taken[di] = true;
            assignments.push((ci, di, score.clamp(0.0, 1.0)));
        }
    }

    let mut code_slots: Vec<Option<Keyed<CodeSignature>>> =
        std::mem::take(code_only).into_iter().map(Some).collect();
    let mut doc_slots: Vec<Option<Keyed<DocSignature>>> =
        std::mem::take(doc_only).into_iter().map(Some).collect();

    let mut pairs = Vec::with_capacity(assignments.len());
    for (ci, di, score) in assignments {
        if let (Some(code), Some(doc)) = (code_slots[ci].take(), doc_slots[di].take()) {
            tracing::debug!(code = %code.key, doc = %doc.key, score, "fuzzy match");
            pairs.push(MatchedPair::Both {
                key: code.key,
                code: code.item,
                doc: doc.item,
                how: MatchKind::Fuzzy { score },
            });
        }
    }

    *code_only = code_slots.into_iter().flatten().collect();
    *doc_only = doc_slots.into_iter().flatten().collect();
    pairs
}
