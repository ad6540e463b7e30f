//! Universal Chess Interface (UCI) protocol front end.
//!
//! A line-oriented loop over stdin/stdout that lets a GUI or another engine
//! drive the rules engine. Diagnostics go through `log`, never stdout.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{info, warn};

use crate::board::{find_best_move, Board, FenError, MoveParseError, SearchLimits};
use crate::config::EngineConfig;

pub mod command;
pub mod options;
pub mod report;

use command::{go_depth, parse_uci_command, UciCommand};

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid position string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a UCI position command into the position it describes.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". The position string
/// may omit its two clock fields.
pub fn try_parse_position_command(parts: &[&str]) -> Result<Board, UciError> {
    let moves_at = parts
        .iter()
        .position(|p| *p == "moves")
        .unwrap_or(parts.len());

    let mut board = match parts.get(1).copied() {
        Some("startpos") => Board::new(),
        Some("fen") => {
            let fields = parts.get(2..moves_at).ok_or(UciError::MissingParts)?;
            if fields.len() < 4 {
                return Err(UciError::MissingParts);
            }
            Board::from_position_string(&fields.join(" "))?
        }
        _ => return Err(UciError::MissingParts),
    };

    for move_str in parts.iter().skip(moves_at + 1) {
        board
            .make_move_uci(move_str)
            .map_err(|error| UciError::InvalidMove {
                move_str: (*move_str).to_string(),
                error,
            })?;
    }

    Ok(board)
}

/// Engine state driven by UCI commands.
pub struct UciEngine {
    board: Board,
    config: EngineConfig,
}

impl UciEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        UciEngine {
            board: Board::new(),
            config,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle one input line. Returns `Ok(false)` once the engine should quit.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        match parse_uci_command(line) {
            Some(cmd) => self.handle_command(cmd, out),
            None => Ok(true),
        }
    }

    pub fn handle_command<W: Write>(&mut self, cmd: UciCommand, out: &mut W) -> io::Result<bool> {
        match cmd {
            UciCommand::Uci => report::write_id(out, &self.config)?,
            UciCommand::IsReady => report::write_ready(out)?,
            UciCommand::UciNewGame => self.board = Board::new(),
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match try_parse_position_command(&parts) {
                    Ok(board) => self.board = board,
                    Err(e) => warn!("{e}; keeping previous position"),
                }
            }
            UciCommand::Go(parts) => {
                let depth = go_depth(&parts).unwrap_or(self.config.default_depth);
                let result = find_best_move(&self.board, SearchLimits::depth(depth));
                report::write_search_info(out, depth, &result, self.board.white_to_move())?;
                report::write_bestmove(out, result.best_move)?;
            }
            UciCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = self.board.perft(depth);
                report::write_perft_info(out, depth, nodes, start.elapsed())?;
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                if let Some((name, value)) = options::parse_setoption(&parts) {
                    options::apply_setoption(&mut self.config, &name, value.as_deref());
                }
            }
            UciCommand::Display => writeln!(out, "{}", self.board.to_position_string())?,
            UciCommand::Quit => return Ok(false),
            UciCommand::Unknown(line) => warn!("unknown command '{line}'"),
        }
        out.flush()?;
        Ok(true)
    }
}

/// Run the UCI loop on stdin/stdout until `quit` or end of input.
pub fn run_uci_loop(config: EngineConfig) -> io::Result<()> {
    info!("{} ready", config.engine_name);
    let mut engine = UciEngine::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        if !engine.handle_line(&line?, &mut stdout)? {
            break;
        }
    }
    Ok(())
}
