//! MCTS search driver.
//!
//! Each iteration:
//! 1. Selection: descend through fully expanded nodes by UCB1
//! 2. Expansion: turn one random untried move into a child snapshot
//! 3. Rollout: play uniformly random legal moves to a terminal position
//! 4. Backpropagation: add the result up to the root, flipping sign per level
//!
//! Every node owns its own cloned `GameState`; the caller's state is never
//! mutated.

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;
use crate::search::mcts_config::MctsConfig;
use crate::search::mcts_node::{MctsNode, NodeId};
use crate::search::mcts_tree::{MctsTree, TreeStats};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search config: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Visit share per root child, in expansion order. Empty for a terminal root.
    pub policy: Vec<(Move, f64)>,

    /// Most visited root move.
    pub best_move: Option<Move>,

    /// Mean root value from the root mover's perspective.
    pub root_value: f64,

    pub iterations: u32,

    /// Status of the root position.
    pub status: GameStatus,

    pub stats: TreeStats,
}

pub struct MctsSearch {
    tree: MctsTree,
    config: MctsConfig,
}

impl MctsSearch {
    /// Build a search rooted at a copy of `game_state`.
    pub fn new(game_state: &GameState, config: MctsConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            tree: MctsTree::new(game_state),
            config,
        })
    }

    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }

    /// Run the configured number of iterations.
    ///
    /// A terminal root returns immediately with an empty policy and zero
    /// iterations.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SearchResult {
        let root_id = self.tree.root();
        let root_status = self.tree.get(root_id).terminal;

        if root_status.is_terminal() {
            debug!(status = ?root_status, "MCTS root is terminal, skipping search");
            return SearchResult {
                policy: Vec::new(),
                best_move: None,
                root_value: root_status.terminal_value(),
                iterations: 0,
                status: root_status,
                stats: self.tree.stats(),
            };
        }

        for iteration in 0..self.config.num_simulations {
            self.iterate(iteration, rng);
        }

        let stats = self.tree.stats();
        let best_move = self.tree.best_move();
        debug!(
            simulations = self.config.num_simulations,
            nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            root_value = stats.root_value,
            best = ?best_move.map(|mv| mv.chess_notation()),
            "MCTS search complete"
        );
        trace!("MCTS tree:\n{}", self.tree.describe(1));

        SearchResult {
            policy: self.tree.root_policy(),
            best_move,
            root_value: stats.root_value,
            iterations: self.config.num_simulations,
            status: root_status,
            stats,
        }
    }

    fn iterate<R: Rng + ?Sized>(&mut self, iteration: u32, rng: &mut R) {
        let leaf_id = self.select();
        let leaf = self.tree.get(leaf_id);

        let (node_id, value) = if leaf.is_terminal() {
            (leaf_id, leaf.terminal.terminal_value())
        } else {
            let child_id = self.expand(leaf_id, rng);
            let value = simulate(&self.tree.get(child_id).state, rng);
            (child_id, value)
        };

        self.tree.backpropagate(node_id, value);

        trace!(
            iteration,
            leaf = node_id.0,
            value,
            "MCTS iteration complete"
        );
    }

    /// Descend from the root while the current node is fully expanded.
    fn select(&self) -> NodeId {
        let mut current = self.tree.root();
        while self.tree.get(current).is_fully_expanded() {
            match self
                .tree
                .select_child(current, self.config.exploration_constant)
            {
                Some(child_id) => current = child_id,
                None => break,
            }
        }
        current
    }

    /// Remove a uniformly random untried move and add its child snapshot.
    fn expand<R: Rng + ?Sized>(&mut self, node_id: NodeId, rng: &mut R) -> NodeId {
        let node = self.tree.get_mut(node_id);
        let index = rng.random_range(0..node.untried_moves.len());
        let mv = node.untried_moves.remove(index);

        let mut state = node.state.clone();
        apply_move(&mut state, &mv);
        self.tree
            .add_child(node_id, MctsNode::new(state, node_id, Some(mv)))
    }
}

/// Play random legal moves from a copy of `start` until the game ends.
///
/// Returns the result from the perspective of the side to move at `start`.
pub fn simulate<R: Rng + ?Sized>(start: &GameState, rng: &mut R) -> f64 {
    let mut rollout = start.clone();
    let start_mover = rollout.side_to_move;

    loop {
        let moves = generate_legal_moves(&mut rollout);
        let status = rollout.status();
        if status.is_terminal() {
            let value = status.terminal_value();
            return if rollout.side_to_move == start_mover {
                value
            } else {
                -value
            };
        }

        let Some(mv) = moves.choose(rng) else {
            return 0.0;
        };
        apply_move(&mut rollout, mv);
    }
}

/// Run one search from `game_state` and return the root statistics.
pub fn run_mcts<R: Rng + ?Sized>(
    game_state: &GameState,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<SearchResult, SearchError> {
    let mut search = MctsSearch::new(game_state, config.clone())?;
    Ok(search.run(rng))
}
