use std::io::{self, Write};
use std::time::Duration;

use crate::board::{Move, SearchResult};
use crate::config::EngineConfig;

pub fn write_id<W: Write>(out: &mut W, config: &EngineConfig) -> io::Result<()> {
    writeln!(out, "id name {}", config.engine_name)?;
    writeln!(out, "id author {}", config.author)?;
    writeln!(
        out,
        "option name Depth type spin default {} min 1 max {}",
        config.default_depth,
        crate::config::MAX_DEPTH
    )?;
    writeln!(out, "uciok")
}

pub fn write_ready<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "readyok")
}

/// `score` is White-relative; UCI wants it from the mover's side.
pub fn write_search_info<W: Write>(
    out: &mut W,
    depth: u32,
    result: &SearchResult,
    white_to_move: bool,
) -> io::Result<()> {
    let score = if white_to_move {
        result.score
    } else {
        -result.score
    };
    writeln!(
        out,
        "info depth {} score cp {} nodes {}",
        depth, score, result.stats.nodes
    )
}

pub fn write_bestmove<W: Write>(out: &mut W, best_move: Option<Move>) -> io::Result<()> {
    match best_move {
        Some(mv) => writeln!(out, "bestmove {mv}"),
        None => writeln!(out, "bestmove 0000"),
    }
}

pub fn write_perft_info<W: Write>(
    out: &mut W,
    depth: usize,
    nodes: u64,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(
        out,
        "info string perft depth {} nodes {} time_ms {}",
        depth,
        nodes,
        elapsed.as_millis()
    )
}
