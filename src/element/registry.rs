//! Process-wide registry of static element descriptors: find-by-name, find a
//! default linear space for a grade, and (via [`super::FeSpace::lower`]) walk
//! down to companion spaces on lower grades.

use super::{FeSpace, ALL_SPACES};
use crate::error::FeSpaceError;
use once_cell::sync::Lazy;

static REGISTRY: Lazy<Vec<&'static FeSpace>> = Lazy::new(|| ALL_SPACES.to_vec());

/// Force construction of the static registry. Idempotent: safe to call any
/// number of times, from any number of threads, including never (the
/// registry builds lazily on first use regardless). Exposed so a host can
/// choose a deterministic point to fail fast on a malformed static table.
pub fn initialize() {
    Lazy::force(&REGISTRY);
    debug_assert!(
        REGISTRY.iter().all(|s| s.grade >= 1),
        "a static FeSpace table has grade 0"
    );
}

/// Find the unique descriptor whose `name` and `grade` both match.
pub fn find(name: &str, grade: usize) -> Result<&'static FeSpace, FeSpaceError> {
    REGISTRY
        .iter()
        .copied()
        .find(|s| s.name == name && s.grade == grade)
        .ok_or_else(|| FeSpaceError::LookupFailure {
            name: name.to_string(),
            grade,
        })
}

/// Find the first linear (`degree == 1`) space defined on exactly `grade`.
///
/// The original implementation's predicate ignored its `grade` argument
/// entirely, always returning the first `degree == 1` space in the table
/// regardless of which grade was requested. That is treated as an
/// acknowledged bug rather than reproduced: this implementation actually
/// filters by `grade`.
pub fn find_linear(grade: usize) -> Result<&'static FeSpace, FeSpaceError> {
    REGISTRY
        .iter()
        .copied()
        .find(|s| s.grade == grade && s.degree == 1)
        .ok_or(FeSpaceError::LookupFailure {
            name: "<linear>".to_string(),
            grade,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cg2_on_grade_2() {
        let space = find("CG2", 2).unwrap();
        assert_eq!(space.name, "CG2");
        assert_eq!(space.grade, 2);
    }

    #[test]
    fn missing_space_is_a_lookup_failure() {
        let err = find("CG4", 2).unwrap_err();
        assert_eq!(
            err,
            FeSpaceError::LookupFailure {
                name: "CG4".to_string(),
                grade: 2
            }
        );
    }

    #[test]
    fn find_linear_respects_requested_grade() {
        let space = find_linear(3).unwrap();
        assert_eq!(space.name, "CG1");
        assert_eq!(space.grade, 3);
        assert_eq!(space.degree, 1);
    }

    #[test]
    fn find_linear_on_grade_with_no_linear_space_fails() {
        assert!(find_linear(0).is_err());
    }
}
