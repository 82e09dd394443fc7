//! External swap advisor.
//!
//! Team-swap resolution sometimes has several eligible replacement teams.
//! An advisor, when configured, is consulted to pick among them; it is
//! strictly advisory — any failure (timeout, transport, malformed answer)
//! falls back to a deterministic local choice and never fails the
//! resolution itself.

use std::fmt::Debug;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Advisor failure modes. All of them are recoverable by the caller.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The advisor did not answer within the allotted time.
    #[error("advisor timed out after {0:?}")]
    Timeout(Duration),
    /// The advisor could not be reached or refused the query.
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    /// The advisor answered with something unusable.
    #[error("malformed advisor response: {0}")]
    Malformed(String),
}

/// A request to pick a replacement team for a swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapQuery {
    /// Conflict being resolved.
    pub conflict_id: String,
    /// Team being swapped out.
    pub team_to_replace: String,
    /// The opposing team in the game (ineligible as a replacement).
    pub opponent: String,
    /// Eligible replacement teams, in deterministic order.
    pub candidates: Vec<String>,
    /// How long the caller is willing to wait for an answer.
    pub timeout: Duration,
}

/// Picks a replacement team from a candidate pool.
///
/// Implementations should answer within `query.timeout` and return one of
/// `query.candidates`; anything else is treated as a failed consultation
/// and the caller falls back to the first candidate.
pub trait SwapAdvisor: Send + Sync + Debug {
    /// Advisor name, for logs.
    fn name(&self) -> &str;

    /// Proposes a replacement team.
    fn propose(&self, query: &SwapQuery) -> Result<String, AdvisorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FirstCandidate;

    impl SwapAdvisor for FirstCandidate {
        fn name(&self) -> &str {
            "first-candidate"
        }

        fn propose(&self, query: &SwapQuery) -> Result<String, AdvisorError> {
            query
                .candidates
                .first()
                .cloned()
                .ok_or_else(|| AdvisorError::Malformed("empty candidate pool".into()))
        }
    }

    #[test]
    fn test_advisor_answers_from_pool() {
        let query = SwapQuery {
            conflict_id: "team-1".into(),
            team_to_replace: "UT".into(),
            opponent: "OU".into(),
            candidates: vec!["Baylor".into(), "TCU".into()],
            timeout: Duration::from_secs(5),
        };
        assert_eq!(FirstCandidate.propose(&query).unwrap(), "Baylor");
    }

    #[test]
    fn test_empty_pool_is_malformed() {
        let query = SwapQuery {
            conflict_id: "team-1".into(),
            team_to_replace: "UT".into(),
            opponent: "OU".into(),
            candidates: vec![],
            timeout: Duration::from_secs(5),
        };
        assert!(matches!(
            FirstCandidate.propose(&query),
            Err(AdvisorError::Malformed(_))
        ));
    }
}
