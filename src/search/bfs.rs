//! Breadth-first search.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{reconstruct_path, SearchOutcome};
use crate::graph::KnowledgeBase;

/// Breadth-first search from `start` toward `goal`.
///
/// Nodes are marked visited when enqueued, so each is expanded at most once
/// and the returned path is a shortest one by edge count. The search stops as
/// soon as the goal is dequeued.
pub fn search_bfs(graph: &KnowledgeBase, start: &str, goal: &str) -> SearchOutcome {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        log::trace!("BFS expand: {}", current);
        order.push(current.to_string());

        if current == goal {
            let path = reconstruct_path(&parents, current);
            log::debug!("BFS reached '{}' after {} expansions", goal, order.len());
            return SearchOutcome::found(order, path);
        }

        for next in graph.successors(current) {
            let next = next.as_str();
            if !visited.contains(next) {
                visited.insert(next);
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    log::debug!("BFS exhausted {} nodes without reaching '{}'", order.len(), goal);
    SearchOutcome::not_found(order)
}
