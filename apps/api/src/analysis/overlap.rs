//! Overlap Scorer: how much of a reference skill list a candidate list covers.

/// Score returned when the reference list is empty: no stated requirements
/// means a moderate fit is assumed.
pub const DEFAULT_FIT: u32 = 70;

/// One dimension's 0-100 score and the counts it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitScore {
    pub score: u32,
    /// Candidate items that matched something in the reference list.
    pub present: usize,
    /// Size of the reference list.
    pub required: usize,
}

/// Computes the fit of `candidate` against `reference`.
///
/// A candidate item counts when it and any reference item contain one another,
/// ignoring case ("react" and "react.js" match both ways). The ratio is taken
/// over the reference length, rounded, and capped at 100.
pub fn overlap_score<A, B>(candidate: &[A], reference: &[B]) -> FitScore
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if reference.is_empty() {
        return FitScore {
            score: DEFAULT_FIT,
            present: 0,
            required: 0,
        };
    }

    let reference_lower: Vec<String> = reference
        .iter()
        .map(|r| r.as_ref().to_lowercase())
        .collect();

    let present = candidate
        .iter()
        .filter(|item| {
            let item = item.as_ref().to_lowercase();
            reference_lower
                .iter()
                .any(|r| r.contains(&item) || item.contains(r.as_str()))
        })
        .count();

    let ratio = present as f64 / reference.len() as f64;
    let score = ((ratio * 100.0).round() as u32).min(100);

    FitScore {
        score,
        present,
        required: reference.len(),
    }
}
