//! Depth-first search.

use std::collections::{HashMap, HashSet};

use super::{reconstruct_path, SearchOutcome};
use crate::graph::KnowledgeBase;

/// Depth-first search from `start` toward `goal` using an explicit stack.
///
/// Nodes are marked visited when popped, so a node may sit on the stack more
/// than once; stale copies are discarded. Successors are pushed in reverse so
/// they are explored left to right. A node's parent is the first node that
/// pushed it and is never overwritten by a later push. The path found is not
/// necessarily the shortest.
pub fn search_dfs(graph: &KnowledgeBase, start: &str, goal: &str) -> SearchOutcome {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![start];
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if visited.contains(current) {
            continue;
        }
        visited.insert(current);
        log::trace!("DFS expand: {}", current);
        order.push(current.to_string());

        if current == goal {
            let path = reconstruct_path(&parents, current);
            log::debug!("DFS reached '{}' after {} expansions", goal, order.len());
            return SearchOutcome::found(order, path);
        }

        for next in graph.successors(current).iter().rev() {
            let next = next.as_str();
            if visited.contains(next) {
                continue;
            }
            if !parents.contains_key(next) {
                parents.insert(next, current);
            }
            stack.push(next);
        }
    }

    log::debug!("DFS exhausted {} nodes without reaching '{}'", order.len(), goal);
    SearchOutcome::not_found(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfs_unas_quebradizas_reaches_anemia() {
        let kb = KnowledgeBase::anemia();
        let outcome = search_dfs(&kb, "Unas quebradizas", "Anemia");
        assert!(outcome.found);
        assert_eq!(
            outcome.path,
            vec!["Unas quebradizas", "Bajo consumo (carne/pescado)", "Anemia"]
        );
        assert_eq!(outcome.order, outcome.path);
    }

    #[test]
    fn test_dfs_palidez_explores_left_first() {
        let kb = KnowledgeBase::anemia();
        let outcome = search_dfs(&kb, "Palidez", "Anemia");
        assert!(outcome.found);
        assert_eq!(outcome.order, vec!["Palidez", "Labios palidos", "Anemia"]);
        assert_eq!(outcome.path, vec!["Palidez", "Labios palidos", "Anemia"]);
    }

    #[test]
    fn test_dfs_goes_deep_before_wide() {
        let kb = KnowledgeBase::from_edges([
            ("a", vec!["b", "c"]),
            ("b", vec!["d"]),
            ("c", vec!["goal"]),
            ("d", vec![]),
        ]);
        let outcome = search_dfs(&kb, "a", "goal");
        assert_eq!(outcome.order, vec!["a", "b", "d", "c", "goal"]);
        assert_eq!(outcome.path, vec!["a", "c", "goal"]);
    }

    #[test]
    fn test_dfs_first_parent_wins() {
        // a pushes c (parent a) and b; b later pushes c again before c is popped.
        // c keeps its first parent, so the path skips b.
        let kb = KnowledgeBase::from_edges([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec!["goal"]),
        ]);
        let outcome = search_dfs(&kb, "a", "goal");
        assert!(outcome.found);
        assert_eq!(outcome.order, vec!["a", "b", "c", "goal"]);
        assert_eq!(outcome.path, vec!["a", "c", "goal"]);
    }

    #[test]
    fn test_dfs_duplicate_push_expanded_once() {
        let kb = KnowledgeBase::from_edges([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec![]),
        ]);
        let outcome = search_dfs(&kb, "a", "z");
        assert!(!outcome.found);
        assert_eq!(outcome.order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dfs_start_is_goal() {
        let kb = KnowledgeBase::anemia();
        let outcome = search_dfs(&kb, "Anemia", "Anemia");
        assert!(outcome.found);
        assert_eq!(outcome.order, vec!["Anemia"]);
        assert_eq!(outcome.path, vec!["Anemia"]);
    }

    #[test]
    fn test_dfs_absent_start() {
        let kb = KnowledgeBase::anemia();
        let outcome = search_dfs(&kb, "Fiebre", "Anemia");
        assert!(!outcome.found);
        assert_eq!(outcome.order, vec!["Fiebre"]);
        assert!(outcome.path.is_empty());
    }

    #[test]
    fn test_dfs_cycle_back_to_start() {
        let kb = KnowledgeBase::from_edges([("a", vec!["b"]), ("b", vec!["a", "goal"])]);
        let outcome = search_dfs(&kb, "a", "goal");
        assert_eq!(outcome.path, vec!["a", "b", "goal"]);
    }
}
