//! MCTS tree node representation.
//!
//! Each node owns a snapshot of the position reached by playing `mv` from its
//! parent. Values are stored from the perspective of the side to move at the
//! node itself.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Expansion state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Unexpanded,
    PartiallyExpanded,
    FullyExpanded,
}

#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Move that led here from the parent (None for root)
    pub mv: Option<Move>,

    pub state: GameState,

    pub children: Vec<NodeId>,

    /// Legal moves not yet turned into children.
    pub untried_moves: Vec<Move>,

    /// Status of `state` at creation time.
    pub terminal: GameStatus,

    pub visit_count: u32,
    pub value_sum: f64,
}

impl MctsNode {
    /// Build a node around `state`, running one legal-move query to seed the
    /// untried set and terminal status.
    pub fn new(mut state: GameState, parent: NodeId, mv: Option<Move>) -> Self {
        let untried_moves = generate_legal_moves(&mut state);
        let terminal = state.status();
        Self {
            parent,
            mv,
            state,
            children: Vec::new(),
            untried_moves,
            terminal,
            visit_count: 0,
            value_sum: 0.0,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_terminal()
    }

    /// True once every legal move has a child. A node with no legal moves is
    /// never fully expanded.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty() && !self.children.is_empty()
    }

    pub fn expansion(&self) -> Expansion {
        if self.children.is_empty() {
            Expansion::Unexpanded
        } else if self.untried_moves.is_empty() {
            Expansion::FullyExpanded
        } else {
            Expansion::PartiallyExpanded
        }
    }

    /// Mean value from this node's perspective; 0.0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.value_sum / self.visit_count as f64
        }
    }

    /// UCB1 score of this node as seen from its parent.
    ///
    /// The stored mean is from this node's mover, so it is mapped from
    /// [-1, 1] to [0, 1] and flipped for the parent.
    ///
    /// # Panics
    /// If this node has never been visited. Selection only runs on fully
    /// expanded nodes, whose children have all been backpropagated at least
    /// once.
    #[inline]
    pub fn ucb1(&self, parent_visits: u32, exploration_constant: f64) -> f64 {
        assert!(
            self.visit_count > 0,
            "UCB1 requested for a child with zero visits"
        );
        let visits = self.visit_count as f64;
        let q = 1.0 - ((self.value_sum / visits) + 1.0) / 2.0;
        q + exploration_constant * ((parent_visits as f64).ln() / visits).sqrt()
    }
}
