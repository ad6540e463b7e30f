//! Minimax search with alpha-beta pruning.
//!
//! Every candidate is played on its own clone of the parent board, so
//! sibling branches never observe each other. Moves are tried in the order
//! `Board::legal_moves` yields them and a later move only replaces the best
//! one when it scores strictly better, which keeps results reproducible.

mod eval;
mod pst;

use log::{debug, trace};

pub use eval::{evaluate, MOBILITY_WEIGHT};

use super::{Board, Color, Move};

const INFINITY: i32 = i32::MAX;

/// Bounds for `find_best_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies to search below the root.
    pub depth: u32,
}

impl SearchLimits {
    #[must_use]
    pub const fn depth(depth: u32) -> Self {
        SearchLimits { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits { depth: 3 }
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Times a branch was abandoned because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Outcome of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value from White's point of view.
    pub score: i32,
    /// Best move at the root; `None` at depth 0 or when the side to move
    /// has no legal move.
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

/// Search `depth` plies below `board`.
///
/// With `maximizing_for_white` set, White is to move at the root and picks
/// the highest score; otherwise Black picks the lowest. If the flag names
/// the side not on move, the turn is handed over before searching.
#[must_use]
pub fn search(board: &Board, depth: u32, maximizing_for_white: bool) -> SearchResult {
    let mover = if maximizing_for_white {
        Color::White
    } else {
        Color::Black
    };
    let root = board.with_side_to_move(mover);

    let mut stats = SearchStats::default();
    let (score, best_move) = minimax(&root, depth, 0, -INFINITY, INFINITY, &mut stats);

    debug!(
        "search depth {depth} for {mover}: score {score}, best {}, {} nodes, {} cutoffs",
        best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
        stats.nodes,
        stats.cutoffs
    );
    SearchResult {
        score,
        best_move,
        stats,
    }
}

/// Search for the side to move in `board`.
///
/// # Example
/// ```
/// use chess_rules::board::{find_best_move, Board, SearchLimits};
///
/// let board = Board::new();
/// let result = find_best_move(&board, SearchLimits::depth(1));
/// assert!(result.best_move.is_some());
/// ```
#[must_use]
pub fn find_best_move(board: &Board, limits: SearchLimits) -> SearchResult {
    search(board, limits.depth, board.white_to_move())
}

fn minimax(
    board: &Board,
    depth: u32,
    ply: u32,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> (i32, Option<Move>) {
    stats.nodes += 1;
    let mover = board.side_to_move();

    if depth == 0 {
        return (evaluate(board), None);
    }
    // Checkmate and stalemate end the line like the horizon does
    let moves = board.legal_moves();
    if moves.is_empty() {
        return (evaluate(board), None);
    }

    let maximizing = mover == Color::White;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = None;

    for mv in moves {
        let mut child = board.clone();
        child.play_unchecked(mv);
        let (score, _) = minimax(&child, depth - 1, ply + 1, alpha, beta, stats);
        if ply == 0 {
            trace!("root move {mv} scored {score}");
        }

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    (best_score, best_move)
}
