//! Consistency Module Tests
//!
//! Validates the read-reconciliation logic in isolation from node I/O.
//!
//! ## Test Scopes
//! - **Strong**: Agreement, divergence detection, and the first-holder pick.
//! - **Eventual**: First-present-wins ordering across holders.
//! - **Weak**: Only the first holder's answer counts.

#[cfg(test)]
mod tests {
    use crate::consistency::resolver::{resolve, ReadStrategy};
    use crate::node::store::NodeId;
    use std::str::FromStr;

    fn holder(name: &str, value: Option<&str>) -> (NodeId, Option<String>) {
        (NodeId(name.to_string()), value.map(|v| v.to_string()))
    }

    // ============================================================
    // STRATEGY PARSING
    // ============================================================

    #[test]
    fn test_strategy_round_trips_through_str() {
        for strategy in [
            ReadStrategy::Strong,
            ReadStrategy::Eventual,
            ReadStrategy::Weak,
        ] {
            let parsed = ReadStrategy::from_str(&strategy.to_string()).unwrap();
            assert_eq!(parsed, strategy);
        }

        assert!(ReadStrategy::from_str("quorum").is_err());
    }

    // ============================================================
    // EMPTY HOLDER SET
    // ============================================================

    #[test]
    fn test_no_active_holders_is_absent_under_every_strategy() {
        let holders: Vec<(NodeId, Option<String>)> = vec![];

        for strategy in [
            ReadStrategy::Strong,
            ReadStrategy::Eventual,
            ReadStrategy::Weak,
        ] {
            assert_eq!(resolve(strategy, "k", &holders), None);
        }
    }

    // ============================================================
    // STRONG
    // ============================================================

    #[test]
    fn test_strong_returns_value_when_all_holders_agree() {
        let holders = vec![holder("a", Some("v1")), holder("b", Some("v1"))];

        assert_eq!(
            resolve(ReadStrategy::Strong, "k", &holders),
            Some("v1".to_string())
        );
    }

    #[test]
    fn test_strong_returns_first_holder_value_on_divergence() {
        let holders = vec![holder("a", Some("old")), holder("b", Some("new"))];

        // Divergence is logged, not surfaced: the first holder wins.
        assert_eq!(
            resolve(ReadStrategy::Strong, "k", &holders),
            Some("old".to_string())
        );
    }

    #[test]
    fn test_strong_skips_absent_holder() {
        let holders = vec![holder("a", None), holder("b", Some("v"))];

        assert_eq!(
            resolve(ReadStrategy::Strong, "k", &holders),
            Some("v".to_string())
        );
    }

    #[test]
    fn test_strong_all_absent_is_absent() {
        let holders = vec![holder("a", None), holder("b", None)];

        assert_eq!(resolve(ReadStrategy::Strong, "k", &holders), None);
    }

    // ============================================================
    // EVENTUAL
    // ============================================================

    #[test]
    fn test_eventual_returns_first_present_value() {
        let holders = vec![
            holder("a", None),
            holder("b", Some("found")),
            holder("c", Some("later")),
        ];

        assert_eq!(
            resolve(ReadStrategy::Eventual, "k", &holders),
            Some("found".to_string())
        );
    }

    #[test]
    fn test_eventual_all_absent_is_absent() {
        let holders = vec![holder("a", None), holder("b", None)];

        assert_eq!(resolve(ReadStrategy::Eventual, "k", &holders), None);
    }

    // ============================================================
    // WEAK
    // ============================================================

    #[test]
    fn test_weak_returns_first_holder_value() {
        let holders = vec![holder("a", Some("mine")), holder("b", Some("other"))];

        assert_eq!(
            resolve(ReadStrategy::Weak, "k", &holders),
            Some("mine".to_string())
        );
    }

    #[test]
    fn test_weak_misses_when_first_holder_lost_the_key() {
        // The second holder has the value, but weak never asks it.
        let holders = vec![holder("a", None), holder("b", Some("v"))];

        assert_eq!(resolve(ReadStrategy::Weak, "k", &holders), None);
    }
}
