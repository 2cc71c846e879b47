//! Match confidence classification.

use serde::{Deserialize, Serialize};

use crate::matching::matcher::{find_matches, ClientMatch};

/// How certain the matcher is about an event's client attribution.
///
/// Only a single whole-name hit counts as confident. A lone hit from one
/// of the fragment rules still goes to a human: those rules exist to
/// propose candidates, not to bill on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum MatchConfidence {
    /// Exactly one whole-name match. Safe to bill without confirmation.
    Confident {
        /// The matched client name or keyword.
        name: String,
    },
    /// One or more matches needing a human decision.
    Ambiguous {
        /// Candidate names, in roster order.
        names: Vec<String>,
    },
    /// No rule matched any client.
    Unmatched,
}

impl MatchConfidence {
    /// Classifies a set of raw matches into a confidence tier.
    ///
    /// # Arguments
    ///
    /// * `matches` - The matches produced for one event title
    pub fn classify(matches: &[ClientMatch]) -> Self {
        match matches {
            [] => MatchConfidence::Unmatched,
            [only] if only.strategy.is_whole_name() => MatchConfidence::Confident {
                name: only.name.clone(),
            },
            _ => MatchConfidence::Ambiguous {
                names: matches.iter().map(|m| m.name.clone()).collect(),
            },
        }
    }

    /// Returns true if the attribution needs no human confirmation.
    pub fn is_confident(&self) -> bool {
        matches!(self, MatchConfidence::Confident { .. })
    }
}

/// The full matching outcome for one event title: the raw matches plus
/// their confidence classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Every match the rule cascade produced.
    pub matches: Vec<ClientMatch>,

    /// Confidence tier derived from the matches.
    pub confidence: MatchConfidence,
}

impl MatchCandidate {
    /// Matches a title against the roster and classifies the result.
    ///
    /// # Arguments
    ///
    /// * `title` - The raw event title
    /// * `client_names` - Roster client names, in display order
    /// * `special_keywords` - Keywords that pre-empt client matching
    ///
    /// # Examples
    ///
    /// ```
    /// use practice_engine::matching::MatchCandidate;
    ///
    /// let clients = vec!["Μαρία Παπαδάκη".to_string()];
    /// let candidate = MatchCandidate::evaluate("Μαρία Παπαδάκη 10:00", &clients, &[]);
    ///
    /// assert!(candidate.confidence.is_confident());
    /// ```
    pub fn evaluate(title: &str, client_names: &[String], special_keywords: &[String]) -> Self {
        let matches = find_matches(title, client_names, special_keywords);
        let confidence = MatchConfidence::classify(&matches);
        Self { matches, confidence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::matcher::MatchStrategy;

    fn client_match(name: &str, strategy: MatchStrategy) -> ClientMatch {
        ClientMatch {
            name: name.to_string(),
            strategy,
        }
    }

    /// MC-001: No matches classifies as unmatched
    #[test]
    fn test_no_matches_is_unmatched() {
        assert_eq!(MatchConfidence::classify(&[]), MatchConfidence::Unmatched);
    }

    /// MC-002: A single full-name hit is confident
    #[test]
    fn test_single_full_name_is_confident() {
        let matches = [client_match("Ζωή Κουσουλού", MatchStrategy::FullName)];

        let confidence = MatchConfidence::classify(&matches);

        assert_eq!(
            confidence,
            MatchConfidence::Confident {
                name: "Ζωή Κουσουλού".to_string()
            }
        );
        assert!(confidence.is_confident());
    }

    /// MC-003: A single keyword or single-token hit is confident
    #[test]
    fn test_other_whole_name_strategies_are_confident() {
        for strategy in [MatchStrategy::SpecialKeyword, MatchStrategy::SingleToken] {
            let matches = [client_match("εποπτεία", strategy)];
            assert!(MatchConfidence::classify(&matches).is_confident());
        }
    }

    /// MC-004: A lone fragment-rule hit stays ambiguous
    #[test]
    fn test_single_fragment_hit_is_ambiguous() {
        for strategy in [
            MatchStrategy::ReversedName,
            MatchStrategy::SurnameWord,
            MatchStrategy::FirstNameWord,
            MatchStrategy::DashSegment,
        ] {
            let matches = [client_match("Μαρία Παπαδάκη", strategy)];

            let confidence = MatchConfidence::classify(&matches);

            assert_eq!(
                confidence,
                MatchConfidence::Ambiguous {
                    names: vec!["Μαρία Παπαδάκη".to_string()]
                }
            );
        }
    }

    /// MC-005: Competing whole-name hits are ambiguous
    #[test]
    fn test_competing_matches_are_ambiguous() {
        let matches = [
            client_match("Μαρία Παπαδάκη", MatchStrategy::FullName),
            client_match("Μαρία Ιωάννου", MatchStrategy::FirstNameWord),
        ];

        let confidence = MatchConfidence::classify(&matches);

        assert_eq!(
            confidence,
            MatchConfidence::Ambiguous {
                names: vec!["Μαρία Παπαδάκη".to_string(), "Μαρία Ιωάννου".to_string()]
            }
        );
    }

    /// MC-006: Evaluate wires matching and classification together
    #[test]
    fn test_evaluate_end_to_end() {
        let clients = vec!["Ζωή Κουσουλού".to_string()];

        let confident = MatchCandidate::evaluate("Ζωή Κουσουλού 10:00", &clients, &[]);
        assert!(confident.confidence.is_confident());

        let uncertain = MatchCandidate::evaluate("Κουσουλού Ζωή Ραντεβού", &clients, &[]);
        assert!(!uncertain.confidence.is_confident());
        assert_eq!(uncertain.matches.len(), 1);

        let unmatched = MatchCandidate::evaluate("άγνωστος τίτλος", &clients, &[]);
        assert_eq!(unmatched.confidence, MatchConfidence::Unmatched);
    }
}
