//! Uninformed graph search over a knowledge base: breadth-first and depth-first.
//!
//! Both strategies record the order in which nodes are expanded and, when the
//! goal is reached, the path back to the start through parent pointers. All
//! search state lives inside a single call.

pub mod bfs;
pub mod dfs;

pub use bfs::search_bfs;
pub use dfs::search_dfs;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::KbdiagError;
use crate::graph::KnowledgeBase;

/// Result of one search: whether the goal was reached, the expansion order,
/// and the start-to-goal path (empty when not found).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub found: bool,
    pub order: Vec<String>,
    pub path: Vec<String>,
}

impl SearchOutcome {
    pub(crate) fn found(order: Vec<String>, path: Vec<String>) -> Self {
        Self {
            found: true,
            order,
            path,
        }
    }

    pub(crate) fn not_found(order: Vec<String>) -> Self {
        Self {
            found: false,
            order,
            path: Vec::new(),
        }
    }
}

/// Signature shared by `search_bfs` and `search_dfs`.
pub type SearchFn = fn(&KnowledgeBase, &str, &str) -> SearchOutcome;

/// Search strategy selectable from config and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Bfs,
    Dfs,
}

impl Strategy {
    pub fn search_fn(self) -> SearchFn {
        match self {
            Strategy::Bfs => search_bfs,
            Strategy::Dfs => search_dfs,
        }
    }

    pub fn search(self, graph: &KnowledgeBase, start: &str, goal: &str) -> SearchOutcome {
        (self.search_fn())(graph, start, goal)
    }

    /// Short label used in reports ("BFS" / "DFS").
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = KbdiagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            other => Err(KbdiagError::InvalidInput(format!(
                "Unknown search strategy '{}' (expected bfs or dfs)",
                other
            ))),
        }
    }
}

/// Walk parent links back from `goal` and return the path start..=goal.
/// The start node has no parent entry, which ends the walk.
pub(crate) fn reconstruct_path(parents: &HashMap<&str, &str>, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while let Some(&parent) = parents.get(current) {
        path.push(parent.to_string());
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_path() {
        let mut parents = HashMap::new();
        parents.insert("c", "b");
        parents.insert("b", "a");
        assert_eq!(reconstruct_path(&parents, "c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reconstruct_path_start_is_goal() {
        let parents = HashMap::new();
        assert_eq!(reconstruct_path(&parents, "a"), vec!["a"]);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!(" DFS ".parse::<Strategy>().unwrap(), Strategy::Dfs);
        assert!("astar".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_dispatch() {
        let kb = KnowledgeBase::anemia();
        assert_eq!(
            Strategy::Bfs.search(&kb, "Palidez", "Anemia"),
            search_bfs(&kb, "Palidez", "Anemia")
        );
        assert_eq!(
            Strategy::Dfs.search(&kb, "Palidez", "Anemia"),
            search_dfs(&kb, "Palidez", "Anemia")
        );
    }

    #[test]
    fn test_strategy_serde_lowercase() {
        let json = serde_json::to_string(&Strategy::Dfs).unwrap();
        assert_eq!(json, "\"dfs\"");
        assert_eq!(Strategy::Bfs.to_string(), "BFS");
    }
}
