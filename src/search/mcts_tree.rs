//! MCTS tree structure with arena allocation.
//!
//! Nodes live in a contiguous Vec and reference each other by `NodeId`. The
//! whole arena is dropped when the search that built it returns.

use std::fmt::Write as _;

use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::Move;
use crate::search::mcts_node::{MctsNode, NodeId};

#[derive(Debug)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
    root: NodeId,
}

/// Summary statistics of a finished tree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}

impl MctsTree {
    /// Create a tree whose root owns a copy of `root_state`.
    pub fn new(root_state: &GameState) -> Self {
        let mut state = root_state.clone();
        state.move_history.clear();
        state.castle_rights_history.clear();
        state.castle_rights_history.push(state.castle_rights);
        Self {
            nodes: vec![MctsNode::new(state, NodeId::NONE, None)],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode {
        &mut self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Push `node` as a new child of `parent_id`.
    pub fn add_child(&mut self, parent_id: NodeId, node: MctsNode) -> NodeId {
        let child_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Child with the highest UCB1 score; the first one wins ties.
    pub fn select_child(&self, node_id: NodeId, exploration_constant: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let score = self
                .get(child_id)
                .ucb1(node.visit_count, exploration_constant);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Add one visit and `value` to the leaf, then walk to the root negating
    /// the value at each level.
    pub fn backpropagate(&mut self, leaf_id: NodeId, value: f64) {
        let mut current_id = leaf_id;
        let mut current_value = value;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visit_count += 1;
            node.value_sum += current_value;

            current_value = -current_value;
            current_id = node.parent;
        }
    }

    /// Visit share of every root child, in expansion order.
    pub fn root_policy(&self) -> Vec<(Move, f64)> {
        let root = self.get(self.root);
        let total: u64 = root
            .children
            .iter()
            .map(|&id| u64::from(self.get(id).visit_count))
            .sum();
        if total == 0 {
            return Vec::new();
        }

        root.children
            .iter()
            .filter_map(|&id| {
                let child = self.get(id);
                child
                    .mv
                    .map(|mv| (mv, f64::from(child.visit_count) / total as f64))
            })
            .collect()
    }

    /// Most visited root child; the first one wins ties.
    pub fn best_move(&self) -> Option<Move> {
        let root = self.get(self.root);
        let mut best: Option<(Move, u32)> = None;
        for &id in &root.children {
            let child = self.get(id);
            let Some(mv) = child.mv else {
                continue;
            };
            match best {
                Some((_, visits)) if child.visit_count <= visits => {}
                _ => best = Some((mv, child.visit_count)),
            }
        }
        best.map(|(mv, _)| mv)
    }

    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_value: root.mean_value(),
            max_depth: self.compute_max_depth(),
        }
    }

    fn compute_max_depth(&self) -> u32 {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0u32)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for &child in &self.get(id).children {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    /// Indented dump of the tree down to `max_depth`, one node per line.
    pub fn describe(&self, max_depth: u32) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root, 0u32)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.get(id);
            let label = node
                .mv
                .map(|mv| mv.chess_notation())
                .unwrap_or_else(|| "root".to_owned());
            let _ = writeln!(
                out,
                "{}{} visits={} value={:.3}",
                "  ".repeat(depth as usize),
                label,
                node.visit_count,
                node.value_sum
            );
            if depth < max_depth {
                for &child in node.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
        out
    }
}
