//! Line-oriented console front-end and command loop.
//!
//! Keeps the current game with its undo/redo history and move log, routes
//! `go` and `hint` requests to worker threads running a fork of the engine,
//! and uses a worker's answer only if the position has not changed since the
//! request was issued.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Sender};
use std::thread;

use tracing::{debug, info, warn};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_config::{EngineConfig, MAX_DEPTH};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::game_state::{game_status, GameState, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_for_square};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::piece_value;
use crate::utils::algebraic::algebraic_to_position;
use crate::utils::long_algebraic::{
    captured_piece, describe_move, parse_coordinate_move, to_coordinate_notation,
};
use crate::utils::render_game_state::{piece_to_unicode, render_game_state};

const HELP_TEXT: &str = "commands: new | fen <FEN> | show | status | moves [square] | \
play <move> | go [depth] | hint [depth] | undo | redo | log | auto <on|off> | depth <n> | \
difficulty <calm|sharp|savage|brutal> | help | quit";

/// Everything the command loop reacts to, from stdin or from search workers.
#[derive(Debug)]
pub enum HostEvent {
    Input(String),
    InputClosed,
    SearchDone {
        token: u64,
        result: Result<EngineOutput, ChessErrors>,
    },
}

pub fn run_stdio_loop() -> io::Result<()> {
    let (events_tx, events_rx) = mpsc::channel();
    spawn_stdin_reader(events_tx.clone());

    let engine = MinimaxEngine::new(EngineConfig::from_env());
    let mut host = ConsoleHost::new(engine, events_tx);
    let mut stdout = io::stdout();
    writeln!(stdout, "{} ready. {HELP_TEXT}", host.engine.name())?;
    stdout.flush()?;

    let mut input_closed = false;
    for event in events_rx.iter() {
        let should_quit = match event {
            HostEvent::Input(line) => host.handle_command(&line, &mut stdout)?,
            HostEvent::InputClosed => {
                input_closed = true;
                !host.is_searching()
            }
            HostEvent::SearchDone { token, result } => {
                host.handle_search_done(token, result, &mut stdout)?;
                input_closed && !host.is_searching()
            }
        };
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

fn spawn_stdin_reader(events: Sender<HostEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if events.send(HostEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    warn!(%err, "stdin read failed");
                    break;
                }
            }
        }
        let _ = events.send(HostEvent::InputClosed);
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchPurpose {
    /// Play the result for the side to move.
    Reply,
    /// Only show the result.
    Hint,
}

#[derive(Debug, Clone, Copy)]
struct PendingSearch {
    token: u64,
    purpose: SearchPurpose,
}

#[derive(Debug, Clone)]
struct LoggedMove {
    notation: String,
    captured: Option<Piece>,
}

/// Everything undo and redo restore.
#[derive(Debug, Clone)]
struct Snapshot {
    game_state: GameState,
    log: Vec<LoggedMove>,
}

pub struct ConsoleHost {
    game_state: GameState,
    log: Vec<LoggedMove>,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    engine: MinimaxEngine,
    /// Start an engine reply after every accepted `play`.
    auto_reply: bool,
    events: Sender<HostEvent>,
    /// Bumped on every position change and every search request.
    search_token: u64,
    pending_search: Option<PendingSearch>,
}

impl ConsoleHost {
    pub fn new(engine: MinimaxEngine, events: Sender<HostEvent>) -> Self {
        Self {
            game_state: GameState::new_game(),
            log: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            engine,
            auto_reply: false,
            events,
            search_token: 0,
            pending_search: None,
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.pending_search.is_some()
    }

    /// Handle one input line. Returns `true` when the host should exit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match cmd {
            "new" => {
                self.reset_game(GameState::new_game());
                self.engine.new_game();
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "fen" => match GameState::from_fen(rest) {
                Ok(state) => {
                    self.reset_game(state);
                    writeln!(out, "{}", render_game_state(&self.game_state))?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "show" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                writeln!(out, "fen {}", self.game_state.to_fen())?;
                writeln!(out, "{} to move", color_name(self.game_state.side_to_move))?;
            }
            "status" => {
                writeln!(out, "{}", status_line(game_status(&self.game_state)))?;
            }
            "moves" => self.handle_moves(rest, out)?,
            "play" => self.handle_play(rest, out)?,
            "go" => self.handle_search_request(rest, SearchPurpose::Reply, out)?,
            "hint" => self.handle_search_request(rest, SearchPurpose::Hint, out)?,
            "undo" => self.handle_undo(out)?,
            "redo" => self.handle_redo(out)?,
            "log" => self.write_log(out)?,
            "auto" => match rest {
                "on" => {
                    self.auto_reply = true;
                    writeln!(out, "auto reply on")?;
                }
                "off" => {
                    self.auto_reply = false;
                    writeln!(out, "auto reply off")?;
                }
                _ => writeln!(out, "error: expected 'auto on' or 'auto off'")?,
            },
            "depth" => self.handle_option("Depth", rest, out)?,
            "difficulty" => self.handle_option("Difficulty", rest, out)?,
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => return Ok(true),
            _ => writeln!(out, "unknown command '{cmd}'. {HELP_TEXT}")?,
        }

        Ok(false)
    }

    /// Use a finished search if it still belongs to the current position.
    pub fn handle_search_done(
        &mut self,
        token: u64,
        result: Result<EngineOutput, ChessErrors>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let Some(pending) = self.pending_search.filter(|pending| pending.token == token) else {
            debug!(token, current = self.search_token, "discarding stale search result");
            return Ok(());
        };
        self.pending_search = None;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                writeln!(out, "engine error: {err}")?;
                return Ok(());
            }
        };
        for line in &output.info_lines {
            writeln!(out, "{line}")?;
        }

        let Some(mv) = output.best_move else {
            writeln!(out, "engine has no move")?;
            return Ok(());
        };
        if !legal_moves(&self.game_state, self.game_state.side_to_move).contains(&mv) {
            warn!(%mv, "engine returned a move that is not legal here");
            return Ok(());
        }

        match pending.purpose {
            SearchPurpose::Hint => {
                let text = describe_move(&self.game_state, &mv).unwrap_or_else(|_| mv.to_string());
                writeln!(out, "hint: {text}")
            }
            SearchPurpose::Reply => {
                let text = self.commit_move(&mv);
                writeln!(out, "engine plays {text}")?;
                self.report_if_over(out)
            }
        }
    }

    fn handle_moves(&self, rest: &str, out: &mut impl Write) -> io::Result<()> {
        let moves = if rest.is_empty() {
            legal_moves(&self.game_state, self.game_state.side_to_move)
        } else {
            match algebraic_to_position(rest) {
                Ok(square) => legal_moves_for_square(&self.game_state, square),
                Err(err) => return writeln!(out, "error: {err}"),
            }
        };

        let listed = moves
            .iter()
            .filter_map(|mv| to_coordinate_notation(mv).ok())
            .collect::<Vec<_>>();
        writeln!(out, "{} moves: {}", listed.len(), listed.join(" "))
    }

    fn handle_play(&mut self, rest: &str, out: &mut impl Write) -> io::Result<()> {
        let mv = match parse_coordinate_move(&self.game_state, rest) {
            Ok(mv) => mv,
            Err(err) => return writeln!(out, "error: {err}"),
        };

        let text = self.commit_move(&mv);
        writeln!(out, "played {text}")?;
        self.report_if_over(out)?;

        if self.auto_reply && !game_status(&self.game_state).is_game_over() {
            self.start_search(None, SearchPurpose::Reply, out)?;
        }
        Ok(())
    }

    fn handle_search_request(
        &mut self,
        rest: &str,
        purpose: SearchPurpose,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let status = game_status(&self.game_state);
        if status.is_game_over() {
            return writeln!(out, "{}", status_line(status));
        }

        let depth = if rest.is_empty() {
            None
        } else {
            match rest.parse::<u8>() {
                Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => Some(depth),
                _ => return writeln!(out, "error: depth must be 1..={MAX_DEPTH}, got '{rest}'"),
            }
        };

        self.start_search(depth, purpose, out)
    }

    /// Hand a fork of the engine to a worker thread. The host keeps its own
    /// engine, so commands stay responsive while the worker searches.
    fn start_search(
        &mut self,
        depth: Option<u8>,
        purpose: SearchPurpose,
        out: &mut impl Write,
    ) -> io::Result<()> {
        self.search_token += 1;
        let token = self.search_token;
        self.pending_search = Some(PendingSearch { token, purpose });

        let mut worker = self.engine.fork();
        let events = self.events.clone();
        let game_state = self.game_state.clone();
        let params = GoParams { depth };
        thread::spawn(move || {
            let result = worker.choose_move(&game_state, &params);
            let _ = events.send(HostEvent::SearchDone { token, result });
        });

        info!(token, ?depth, ?purpose, "search started");
        writeln!(out, "thinking...")
    }

    fn handle_undo(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(previous) = self.undo_stack.pop() else {
            return writeln!(out, "nothing to undo");
        };
        let taken_back = self.log.last().map(|entry| entry.notation.clone());
        let current = self.snapshot();
        self.redo_stack.push(current);
        self.restore(previous);

        match taken_back {
            Some(notation) => writeln!(out, "took back {notation}"),
            None => writeln!(out, "took back"),
        }
    }

    fn handle_redo(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(next) = self.redo_stack.pop() else {
            return writeln!(out, "nothing to redo");
        };
        let current = self.snapshot();
        self.undo_stack.push(current);
        self.restore(next);

        match self.log.last() {
            Some(entry) => writeln!(out, "replayed {}", entry.notation),
            None => writeln!(out, "replayed"),
        }
    }

    fn write_log(&self, out: &mut impl Write) -> io::Result<()> {
        for (number, pair) in self.log.chunks(2).enumerate() {
            let notations = pair
                .iter()
                .map(|entry| entry.notation.as_str())
                .collect::<Vec<_>>();
            writeln!(out, "{}. {}", number + 1, notations.join(" "))?;
        }

        for color in [Color::White, Color::Black] {
            let mut pieces = self
                .log
                .iter()
                .filter_map(|entry| entry.captured)
                .filter(|piece| piece.color == color)
                .collect::<Vec<_>>();
            pieces.sort_by_key(|piece| std::cmp::Reverse(piece_value(piece.kind)));
            let glyphs = pieces
                .iter()
                .map(|piece| piece_to_unicode(piece.color, piece.kind).to_string())
                .collect::<Vec<_>>();
            writeln!(out, "captured {} pieces: {}", color_name(color), glyphs.join(" "))?;
        }
        Ok(())
    }

    fn handle_option(&mut self, name: &str, value: &str, out: &mut impl Write) -> io::Result<()> {
        match self.engine.set_option(name, value) {
            Ok(()) => writeln!(out, "{name} set to {value}"),
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    /// Record `mv` in the history and move log, then play it. Returns its
    /// move-log notation.
    fn commit_move(&mut self, mv: &Move) -> String {
        let notation = describe_move(&self.game_state, mv).unwrap_or_else(|_| mv.to_string());
        let captured = captured_piece(&self.game_state, mv);

        let before = self.snapshot();
        self.undo_stack.push(before);
        self.redo_stack.clear();
        self.log.push(LoggedMove {
            notation: notation.clone(),
            captured,
        });
        self.replace_position(apply_move(&self.game_state, mv));
        notation
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            game_state: self.game_state.clone(),
            log: self.log.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.log = snapshot.log;
        self.replace_position(snapshot.game_state);
    }

    /// Start over from `game_state` with an empty history.
    fn reset_game(&mut self, game_state: GameState) {
        self.log.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.replace_position(game_state);
    }

    /// Swap in a new position and invalidate any search still running.
    fn replace_position(&mut self, game_state: GameState) {
        self.game_state = game_state;
        self.search_token += 1;
        self.pending_search = None;
    }

    fn report_if_over(&self, out: &mut impl Write) -> io::Result<()> {
        let status = game_status(&self.game_state);
        if status != GameStatus::Ongoing {
            writeln!(out, "{}", status_line(status))?;
        }
        Ok(())
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn status_line(status: GameStatus) -> String {
    match status {
        GameStatus::Ongoing => "ongoing".to_owned(),
        GameStatus::Check => "check".to_owned(),
        GameStatus::Checkmate { winner } => format!("checkmate, {} wins", color_name(winner)),
        GameStatus::Stalemate => "stalemate".to_owned(),
    }
}
