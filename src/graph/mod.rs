//! Knowledge base module: the symptom-to-cause graph and its file loaders.
//!
//! A knowledge base maps each node label to its ordered list of successors.
//! Nodes that only ever appear as successors are leaves; looking them up
//! yields an empty edge list, exactly as if they were keys mapped to `[]`.

pub mod loader;

pub use loader::{load_knowledge_base, FormatRegistry, KnowledgeBaseFormat};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Goal node of the built-in anemia knowledge base.
pub const ANEMIA: &str = "Anemia";

/// Immutable directed graph of symptoms, contributing factors and diagnoses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    edges: HashMap<String, Vec<String>>,
}

impl KnowledgeBase {
    /// Empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a knowledge base from `(node, successors)` pairs.
    /// A node listed twice keeps both successor lists, in order.
    pub fn from_edges<I, K, V, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (node, successors) in edges {
            map.entry(node.into())
                .or_default()
                .extend(successors.into_iter().map(Into::into));
        }
        Self { edges: map }
    }

    /// The built-in anemia knowledge base.
    ///
    /// `Sangrado nasal` leads to `posible anemia`, a dead end distinct from
    /// the `Anemia` goal; it is kept as-is.
    pub fn anemia() -> Self {
        Self::from_edges([
            ("Fatiga", vec!["Caida de cabello", "Alto consumo (cafe/te)"]),
            ("Palidez", vec!["Labios palidos", "Unas quebradizas"]),
            ("Caida de cabello", vec!["Bajo consumo (carne/pescado)"]),
            ("Unas quebradizas", vec!["Bajo consumo (carne/pescado)"]),
            ("Labios palidos", vec![ANEMIA]),
            ("Alto consumo (cafe/te)", vec![ANEMIA]),
            ("Bajo consumo (carne/pescado)", vec![ANEMIA]),
            (ANEMIA, vec![]),
            ("Dolor de cabeza", vec!["Estres"]),
            ("Sangrado nasal", vec!["posible anemia"]),
        ])
    }

    /// Outgoing edges of `node`, in order. Absent nodes have none.
    pub fn successors(&self, node: &str) -> &[String] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` is a key of the knowledge base.
    pub fn contains(&self, node: &str) -> bool {
        self.edges.contains_key(node)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.successors(from).iter().any(|s| s == to)
    }

    /// Every node label, keys and successor-only leaves alike, sorted.
    pub fn nodes(&self) -> Vec<&str> {
        let mut all: BTreeSet<&str> = BTreeSet::new();
        for (node, successors) in &self.edges {
            all.insert(node.as_str());
            all.extend(successors.iter().map(String::as_str));
        }
        all.into_iter().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Number of keys (nodes with an explicit edge list).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Keys with their edge lists, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        let mut entries: Vec<(&str, &[String])> = self
            .edges
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_node_has_no_successors() {
        let kb = KnowledgeBase::anemia();
        assert!(kb.successors("posible anemia").is_empty());
        assert!(kb.successors(ANEMIA).is_empty());
        assert!(!kb.contains("posible anemia"));
        assert!(kb.contains(ANEMIA));
    }

    #[test]
    fn test_successor_order_preserved() {
        let kb = KnowledgeBase::anemia();
        assert_eq!(
            kb.successors("Palidez"),
            ["Labios palidos".to_string(), "Unas quebradizas".to_string()]
        );
    }

    #[test]
    fn test_anemia_counts() {
        let kb = KnowledgeBase::anemia();
        assert_eq!(kb.len(), 10);
        // Estres and posible anemia only appear as successors
        assert_eq!(kb.node_count(), 12);
        assert!(kb.nodes().contains(&"Estres"));
    }

    #[test]
    fn test_from_edges_merges_duplicate_keys() {
        let kb = KnowledgeBase::from_edges([("a", vec!["b"]), ("a", vec!["c"])]);
        assert_eq!(kb.successors("a"), ["b".to_string(), "c".to_string()]);
        assert!(kb.has_edge("a", "c"));
        assert!(!kb.has_edge("c", "a"));
    }

    #[test]
    fn test_iter_sorted_by_key() {
        let kb = KnowledgeBase::from_edges([("z", vec!["a"]), ("b", vec![]), ("m", vec!["z"])]);
        let keys: Vec<&str> = kb.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "m", "z"]);
    }

    #[test]
    fn test_empty() {
        let kb = KnowledgeBase::new();
        assert!(kb.is_empty());
        assert_eq!(kb.node_count(), 0);
    }
}
