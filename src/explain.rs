//! Conflict explanations.
//!
//! Turns a conflict into a human-readable account of what went wrong and
//! which repairs are worth trying, mirroring the resolver's chain order
//! so the first recommendation is the first strategy that will run.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::{Conflict, ConflictSubtype, ConflictType};

/// A human-readable account of one conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// The explained conflict.
    pub conflict_id: String,
    /// What went wrong, in plain language.
    pub explanation: String,
    /// Repairs worth trying, in the order the resolver would try them.
    pub recommended_actions: Vec<String>,
}

/// Produces explanations for conflicts.
pub trait Explainer: Send + Sync + Debug {
    fn explain(&self, conflict: &Conflict) -> Explanation;
}

/// Template-based explainer covering every conflict type.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedExplainer;

impl RuleBasedExplainer {
    pub fn new() -> Self {
        Self
    }
}

impl Explainer for RuleBasedExplainer {
    fn explain(&self, conflict: &Conflict) -> Explanation {
        let (explanation, recommended_actions) = match conflict.conflict_type {
            ConflictType::Venue => (
                format!(
                    "Two games are booked into venue '{}' at overlapping times. \
                     One of them has to move in space or time.",
                    conflict.venue.as_deref().unwrap_or("unknown")
                ),
                vec![
                    "Move one game to a free alternate venue".to_string(),
                    "Shift one game's start time later the same day".to_string(),
                    "Move one game to the following day".to_string(),
                ],
            ),
            ConflictType::Team => {
                let team = conflict.team.as_deref().unwrap_or("unknown");
                let explanation = if conflict.subtype == Some(ConflictSubtype::Rest) {
                    format!(
                        "Team '{team}' has {:.1}h between game starts, below the \
                         {:.0}h minimum.",
                        conflict.hours_between.unwrap_or(0.0),
                        conflict.required_rest.unwrap_or(0.0)
                    )
                } else {
                    format!("Team '{team}' is scheduled for two games on the same day.")
                };
                let mut actions = vec!["Move the later game to the following day".to_string()];
                if conflict.subtype != Some(ConflictSubtype::Rest) {
                    actions.push("Shift the later game's start time".to_string());
                }
                actions.push("Swap in an eligible replacement team".to_string());
                (explanation, actions)
            }
            ConflictType::Travel => (
                format!(
                    "Team '{}' has {:.1}h to reach the next venue but needs {:.1}h \
                     including travel, settling, and buffer time.",
                    conflict.team.as_deref().unwrap_or("unknown"),
                    conflict.hours_available.unwrap_or(0.0),
                    conflict.hours_required.unwrap_or(0.0)
                ),
                vec![
                    "Push the later game forward by the hour deficit".to_string(),
                    "Move the later game to a venue closer to the previous one".to_string(),
                ],
            ),
            ConflictType::Resource => {
                let resource = conflict.resource.as_deref().unwrap_or("unknown");
                let explanation = if conflict.subtype == Some(ConflictSubtype::MissingResource) {
                    format!("Required resource '{resource}' is not in the resource registry.")
                } else {
                    format!(
                        "Resource '{resource}' is booked by more concurrent games \
                         than units exist."
                    )
                };
                (
                    explanation,
                    vec![
                        format!("Register or procure more units of '{resource}'"),
                        "Reschedule one of the competing games manually".to_string(),
                    ],
                )
            }
            ConflictType::Rest => (
                format!(
                    "Team '{}' gets {:.1}h of rest before its next game but needs \
                     {:.0}h{}.",
                    conflict.team.as_deref().unwrap_or("unknown"),
                    conflict.hours_between.unwrap_or(0.0),
                    conflict.required_rest.unwrap_or(0.0),
                    if conflict.subtype == Some(ConflictSubtype::LongTravel) {
                        " after a long trip"
                    } else {
                        ""
                    }
                ),
                vec![
                    "Push the later game forward by the rest deficit".to_string(),
                    "Swap in an eligible replacement team".to_string(),
                ],
            ),
        };

        Explanation {
            conflict_id: conflict.id.clone(),
            explanation,
            recommended_actions,
        }
    }
}
