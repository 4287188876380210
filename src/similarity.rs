
// imports
use crate::descriptors::{Descriptor, SemanticDescriptors};

/// Outcome of a similarity computation. Valid cosine scores sit in [0, 1];
/// `Undefined` marks a computation that could not produce one and is not a
/// similarity value itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Score {
    Valid(f64),
    Undefined,
}

impl Score {

    /// Numeric value used for ranking. `Undefined` maps to -1.0, below every
    /// valid score, so it can never displace a real similarity.
    pub fn to_sentinel(&self) -> f64 {
        match self {
            Score::Valid(similarity) => *similarity,
            Score::Undefined => -1.0,
        }
    }
}

/// Magnitude of a sparse count vector: sqrt of the sum of squares over all
/// of its values, not only keys shared with some other vector.
pub fn norm(vec: &Descriptor) -> f64 {
    let sum_of_squares: f64 = vec.values().map(|v| (*v as f64) * (*v as f64)).sum();
    sum_of_squares.sqrt()
}

pub fn cosine_similarity(a: &Descriptor, b: &Descriptor) -> f64 {

    // dot product over the key intersection. Iterate the smaller vector,
    // keys missing on the other side contribute nothing.
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut dot_product = 0.0;
    for (key, smaller_val) in smaller {
        if let Some(larger_val) = larger.get(key) {
            dot_product += (*smaller_val as f64) * (*larger_val as f64);
        }
    }

    // cosine similarity, without division by zero
    let denominator = norm(a) * norm(b);
    if denominator != 0.0 { dot_product / denominator } else { 0.0 }
}

/// Fault-contained similarity: any computation that fails to produce a finite
/// number becomes `Score::Undefined` instead of escaping to the caller.
pub fn guarded_similarity(a: &Descriptor, b: &Descriptor) -> Score {
    let similarity = cosine_similarity(a, b);
    if similarity.is_finite() {
        Score::Valid(similarity)
    } else {
        Score::Undefined
    }
}

/// Choice whose descriptor scores highest against `word`'s descriptor, or
/// `None` when there are no choices. Ties keep the earliest choice. The first
/// choice always seeds the running best, whatever it scored - kept from the
/// original "or no best yet" rule, so an `Undefined` first choice can still
/// win when nothing scores strictly greater.
pub fn most_similar<'a, F>(
    word: &str,
    choices: &'a [String],
    descriptors: &SemanticDescriptors,
    score_fn: F,
) -> Option<&'a str>
where
    F: Fn(&Descriptor, &Descriptor) -> Score,
{
    let word_descriptor = descriptors.descriptor(word);

    let mut best: Option<(&str, f64)> = None;
    for choice in choices {

        let choice_descriptor = descriptors.descriptor(choice);
        let similarity = score_fn(word_descriptor, choice_descriptor).to_sentinel();

        match best {
            Some((_, best_similarity)) if similarity <= best_similarity => {}
            _ => best = Some((choice.as_str(), similarity)),
        }
    }

    best.map(|(choice, _)| choice)
}
