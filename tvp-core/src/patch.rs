// tvp-core/src/patch.rs
//! Literal substring patching.
//!
//! A run is two steps. [`classify`] inspects the untouched contents and labels
//! every [`PatchSpec`]; [`apply`] then walks the specs in declaration order and
//! rewrites the first occurrence of each applicable search literal, carrying
//! the rewritten buffer forward so later specs see earlier edits.

use tracing::{debug, warn};
use tvp_common::model::{PatchOutcome, PatchSpec};

/// Classifies each spec against `contents`, in declaration order.
///
/// The search literal takes precedence: a spec whose search and replacement
/// are both present is still applicable.
pub fn classify(contents: &str, specs: &[PatchSpec]) -> Vec<PatchOutcome> {
    specs
        .iter()
        .map(|spec| {
            let outcome = if contents.contains(&spec.search) {
                PatchOutcome::Applicable
            } else if contents.contains(&spec.replacement) {
                PatchOutcome::AlreadyApplied
            } else {
                PatchOutcome::NotFound
            };
            debug!("Patch '{}' classified as {}", spec.label, outcome);
            outcome
        })
        .collect()
}

/// Result of [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub contents: String,
    /// Per spec, in declaration order: whether a substitution was made.
    pub applied: Vec<bool>,
}

/// Substitutes every applicable spec once and records which ones took effect.
///
/// `outcomes` must come from [`classify`] over the same `specs`. Specs that
/// are not applicable are skipped without error.
pub fn apply(contents: &str, specs: &[PatchSpec], outcomes: &[PatchOutcome]) -> Patched {
    debug_assert_eq!(specs.len(), outcomes.len());
    let mut buffer = contents.to_owned();
    let mut applied = vec![false; specs.len()];
    for (index, (spec, outcome)) in specs.iter().zip(outcomes).enumerate() {
        if !outcome.is_applicable() {
            continue;
        }
        // An earlier substitution may have consumed this literal.
        if !buffer.contains(&spec.search) {
            warn!(
                "Patch '{}' no longer matches after earlier patches; skipping",
                spec.label
            );
            continue;
        }
        buffer = buffer.replacen(&spec.search, &spec.replacement, 1);
        applied[index] = true;
        debug!("Applied patch '{}'", spec.label);
    }
    Patched {
        contents: buffer,
        applied,
    }
}

/// Number of specs that [`apply`] would act on.
pub fn applicable_count(outcomes: &[PatchOutcome]) -> usize {
    outcomes.iter().filter(|o| o.is_applicable()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(label: &str, search: &str, replacement: &str) -> PatchSpec {
        PatchSpec::new(label, label, search, replacement)
    }

    #[test]
    fn classification_follows_search_then_replacement() {
        let specs = vec![
            spec("a", "case X: return A", "case X: return B"),
            spec("b", "let y = 1", "let y = 2"),
            spec("c", "missing", "also missing"),
        ];
        let contents = "switch(k){case X: return A} let y = 2;";

        assert_eq!(
            classify(contents, &specs),
            [
                PatchOutcome::Applicable,
                PatchOutcome::AlreadyApplied,
                PatchOutcome::NotFound
            ]
        );
    }

    #[test]
    fn search_literal_wins_when_both_literals_present() {
        let specs = vec![spec("a", "case X: return A", "case X: return B")];
        let contents = "case X: return B;case X: return A;";

        assert_eq!(classify(contents, &specs), [PatchOutcome::Applicable]);
    }

    #[test]
    fn matching_is_case_and_whitespace_sensitive() {
        let specs = vec![spec("a", "case X: return A", "case X: return B")];

        assert_eq!(classify("case x: return A", &specs), [PatchOutcome::NotFound]);
        assert_eq!(classify("case X:  return A", &specs), [PatchOutcome::NotFound]);
    }

    #[test]
    fn replaces_only_the_first_occurrence() {
        let specs = vec![spec("a", "case X: return A", "case X: return B")];
        let contents = "case X: return A;case X: return A;";
        let outcomes = classify(contents, &specs);

        assert_eq!(
            apply(contents, &specs, &outcomes).contents,
            "case X: return B;case X: return A;"
        );
    }

    #[test]
    fn substitutions_compose_over_one_buffer() {
        // After the first edit, the second spec's first match is the text it produced.
        let specs = vec![spec("first", "alpha", "beta"), spec("second", "beta!", "gamma!")];
        let contents = "alpha! beta!";
        let outcomes = classify(contents, &specs);
        assert_eq!(applicable_count(&outcomes), 2);

        let patched = apply(contents, &specs, &outcomes);
        assert_eq!(patched.contents, "gamma! beta!");
        assert_eq!(patched.applied, [true, true]);
    }

    #[test]
    fn skips_spec_consumed_by_earlier_substitution() {
        let specs = vec![spec("wide", "abc", "xyz"), spec("narrow", "bc", "BC")];
        let contents = "abc";
        let outcomes = classify(contents, &specs);
        assert_eq!(applicable_count(&outcomes), 2);

        let patched = apply(contents, &specs, &outcomes);
        assert_eq!(patched.contents, "xyz");
        // Only the first spec made a substitution.
        assert_eq!(patched.applied, [true, false]);
    }

    #[test]
    fn leaves_non_applicable_specs_untouched() {
        let specs = vec![
            spec("done", "old", "new"),
            spec("gone", "absent", "nowhere"),
        ];
        let contents = "keep new text";
        let outcomes = classify(contents, &specs);

        assert_eq!(applicable_count(&outcomes), 0);
        let patched = apply(contents, &specs, &outcomes);
        assert_eq!(patched.contents, contents);
        assert_eq!(patched.applied, [false, false]);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let specs = vec![
            spec("a", "case X: return A", "case X: return B"),
            spec("b", "if(!D)return null;", ""),
        ];
        let original = "case X: return A;if(!D)return null;tail";
        let once = apply(original, &specs, &classify(original, &specs)).contents;
        let outcomes = classify(&once, &specs);

        assert_eq!(outcomes[0], PatchOutcome::AlreadyApplied);
        assert_eq!(applicable_count(&outcomes), 0);
        assert_eq!(apply(&once, &specs, &outcomes).contents, once);
    }
}
