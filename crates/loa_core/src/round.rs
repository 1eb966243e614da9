//! One game from initial placement to a connectivity win.
//!
//! A round alternates strictly between its two players. Human moves come in
//! through [`Round::submit_move`]; automated players reply synchronously
//! before control returns to the caller.

use std::fmt;

use tracing::{debug, error, info, warn};

use crate::{
    board::{Board, BoardObserver, ObserverId, Preset},
    connectivity::{self, WinCheck},
    error::{MoveError, RoundError},
    movegen,
    player::{Player, PlayerId},
    rules,
    types::*,
};

/// Where the round's board comes from.
#[derive(Debug, Clone, Default)]
pub enum BoardSetup {
    #[default]
    Standard,
    Preset(Preset),
    Restored(Board),
}

/// How the first mover is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingSide {
    Player(PlayerId),
    /// Player 1 calls the toss; a correct call means player 1 starts.
    CoinToss { call_heads: bool, landed_heads: bool },
    /// Like `CoinToss`, with the coin flipped here.
    RandomToss { call_heads: bool },
}

impl Default for StartingSide {
    fn default() -> Self {
        StartingSide::RandomToss { call_heads: true }
    }
}

impl StartingSide {
    fn resolve(self) -> PlayerId {
        let (call, landed) = match self {
            StartingSide::Player(id) => return id,
            StartingSide::CoinToss {
                call_heads,
                landed_heads,
            } => (call_heads, landed_heads),
            StartingSide::RandomToss { call_heads } => (call_heads, rand::random::<bool>()),
        };
        debug!(call_heads = call, landed_heads = landed, "coin toss");
        if call == landed {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        }
    }
}

/// How piece colors are handed out at round start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorAssignment {
    /// The starting player takes Black.
    #[default]
    StarterTakesBlack,
    /// Continue a match: both players keep the colors they already hold.
    KeepPrevious,
    /// Player 1 takes the given color.
    Player1(Color),
}

#[derive(Debug, Clone, Default)]
pub struct RoundSetup {
    pub board: BoardSetup,
    pub start: StartingSide,
    pub colors: ColorAssignment,
    /// End the round as a draw after this many plies.
    pub max_plies: Option<u32>,
}

impl RoundSetup {
    /// Scenario setup: preset board, colors and first mover as the preset defines.
    pub fn preset(preset: Preset) -> Self {
        let starter = if preset.player1_starts() {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        };
        RoundSetup {
            board: BoardSetup::Preset(preset),
            start: StartingSide::Player(starter),
            colors: ColorAssignment::Player1(preset.player1_color()),
            max_plies: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    MoveLimit,
    NoLegalMoves,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    Win {
        winner: PlayerId,
        color: Color,
        /// Winner's remaining pieces minus the loser's.
        margin: i32,
    },
    /// Both colors connected after the same move.
    BothConnected,
    Draw(DrawReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    AwaitingMove(Color),
    Over(RoundResult),
}

/// One entry of the move log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub ply: u32,
    pub player: PlayerId,
    pub color: Color,
    pub mv: Move,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.ply, self.color.symbol(), self.mv)
    }
}

/// What happened during one call to [`Round::submit_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The submitted move followed by any automated replies.
    pub moves: Vec<MoveRecord>,
    pub state: RoundState,
}

impl TurnReport {
    pub fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Over(_))
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            RoundState::Over(RoundResult::Win { winner, .. }) => Some(winner),
            _ => None,
        }
    }
}

/// Names identify players in saved games, so they must be distinct and
/// survive a write and read back unchanged.
pub fn check_player_names(players: &[Player; 2]) -> Result<(), RoundError> {
    for p in players {
        let name = &p.name;
        if name.is_empty() || name.trim() != name || name.chars().any(char::is_control) {
            return Err(RoundError::InvalidPlayerName(name.clone()));
        }
    }
    if players[0].name == players[1].name {
        return Err(RoundError::DuplicatePlayerName(players[0].name.clone()));
    }
    Ok(())
}

/// Every way [`Round::new`] can refuse these players and setup, checked
/// without consuming them.
pub fn check_setup(players: &[Player; 2], setup: &RoundSetup) -> Result<(), RoundError> {
    check_player_names(players)?;
    if setup.colors == ColorAssignment::KeepPrevious {
        kept_colors(players)?;
    }
    Ok(())
}

fn kept_colors(players: &[Player; 2]) -> Result<[Color; 2], RoundError> {
    let mut c = [Color::Black; 2];
    for (slot, p) in c.iter_mut().zip(players.iter()) {
        *slot = p.color.ok_or_else(|| RoundError::MissingColor(p.name.clone()))?;
    }
    if c[0] == c[1] {
        return Err(RoundError::DuplicateColor(c[0]));
    }
    Ok(c)
}

pub struct Round {
    board: Board,
    players: [Player; 2],
    colors: [Color; 2],
    current: PlayerId,
    state: RoundState,
    log: Vec<MoveRecord>,
    plies: u32,
    max_plies: Option<u32>,
    idle_turns: u8,
}

impl Round {
    pub fn new(mut players: [Player; 2], setup: RoundSetup) -> Result<Round, RoundError> {
        check_setup(&players, &setup)?;

        let starter = setup.start.resolve();
        let colors = match setup.colors {
            ColorAssignment::StarterTakesBlack => {
                let mut c = [Color::White; 2];
                c[starter.0] = Color::Black;
                c
            }
            ColorAssignment::Player1(color) => [color, color.other()],
            ColorAssignment::KeepPrevious => kept_colors(&players)?,
        };
        for (p, c) in players.iter_mut().zip(colors) {
            p.color = Some(c);
            p.new_game();
        }

        let board = match setup.board {
            BoardSetup::Standard => Board::startpos(),
            BoardSetup::Preset(preset) => Board::from_preset(preset),
            BoardSetup::Restored(board) => board,
        };

        info!(
            starter = %players[starter.0].name,
            player1 = %players[0].name,
            player1_color = %colors[0],
            player2 = %players[1].name,
            player2_color = %colors[1],
            "round started"
        );

        Ok(Round {
            board,
            players,
            colors,
            current: starter,
            state: RoundState::AwaitingMove(colors[starter.0]),
            log: Vec::new(),
            plies: 0,
            max_plies: setup.max_plies,
            idle_turns: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn add_board_observer(&mut self, observer: Box<dyn BoardObserver>) -> ObserverId {
        self.board.add_observer(observer)
    }

    pub fn remove_board_observer(&mut self, id: ObserverId) -> bool {
        self.board.remove_observer(id)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn result(&self) -> Option<RoundResult> {
        match self.state {
            RoundState::Over(r) => Some(r),
            RoundState::AwaitingMove(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            RoundState::Over(RoundResult::Win { winner, .. }) => Some(&self.players[winner.0]),
            _ => None,
        }
    }

    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current.0]
    }

    pub fn current_color(&self) -> Color {
        self.colors[self.current.0]
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn color_of(&self, id: PlayerId) -> Color {
        self.colors[id.0]
    }

    pub fn log(&self) -> &[MoveRecord] {
        &self.log
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn into_players(self) -> [Player; 2] {
        self.players
    }

    /// Legal moves for the side to move (empty once the round is over).
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.state {
            RoundState::AwaitingMove(color) => movegen::legal_moves(&self.board, color),
            RoundState::Over(_) => Vec::new(),
        }
    }

    /// Plays a move for the side to move, then lets automated players reply
    /// until a human must move or the round ends. The board is untouched when
    /// the move is refused.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<TurnReport, MoveError> {
        let color = match self.state {
            RoundState::Over(_) => return Err(MoveError::RoundOver),
            RoundState::AwaitingMove(c) => c,
        };
        let mv = rules::validate_move(&self.board, color, from, to)?;

        let mut moves = vec![self.apply(mv)];
        moves.extend(self.run_automated());
        Ok(TurnReport {
            moves,
            state: self.state,
        })
    }

    /// Plays automated turns until a human is to move or the round ends.
    pub fn run_automated(&mut self) -> Vec<MoveRecord> {
        let mut played = Vec::new();
        while !self.is_over() && self.current_player().is_automated() {
            if let Some(record) = self.play_automated_turn() {
                played.push(record);
            }
        }
        played
    }

    /// Plays a single automated ply. Returns `None` when the side to move is
    /// human, the round is over, or the engine produced no usable move.
    pub fn play_automated_turn(&mut self) -> Option<MoveRecord> {
        let RoundState::AwaitingMove(color) = self.state else {
            return None;
        };
        let player = &mut self.players[self.current.0];
        if !player.is_automated() {
            return None;
        }
        let proposal = player.propose_move(&self.board, color);

        let checked = match proposal {
            Some(mv) => rules::validate_move(&self.board, color, mv.from, mv.to),
            None => {
                self.forfeit_turn("engine returned no move");
                return None;
            }
        };
        match checked {
            Ok(mv) => Some(self.apply(mv)),
            Err(err) => {
                warn!(%err, "engine proposed an illegal move");
                self.forfeit_turn("engine proposed an illegal move");
                None
            }
        }
    }

    fn apply(&mut self, mv: Move) -> MoveRecord {
        let color = self.current_color();
        self.board.move_piece(mv.from, mv.to);
        self.plies += 1;
        self.idle_turns = 0;

        let record = MoveRecord {
            ply: self.plies,
            player: self.current,
            color,
            mv,
        };
        debug!(player = %self.current_player().name, %record, "move applied");
        self.log.push(record.clone());
        self.resolve_after_move();
        record
    }

    fn resolve_after_move(&mut self) {
        match connectivity::evaluate(&self.board) {
            WinCheck::Connected(color) => self.finish_with_winner(color),
            WinCheck::BothConnected => {
                error!(
                    ply = self.plies,
                    "both colors are connected after the same move; no winner recorded"
                );
                self.state = RoundState::Over(RoundResult::BothConnected);
            }
            WinCheck::Undecided => {
                if self.max_plies.is_some_and(|max| self.plies >= max) {
                    info!(plies = self.plies, "move limit reached, round drawn");
                    self.state = RoundState::Over(RoundResult::Draw(DrawReason::MoveLimit));
                } else {
                    self.advance_turn();
                }
            }
        }
    }

    fn finish_with_winner(&mut self, color: Color) {
        let winner = if self.colors[0] == color {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        };
        let counts = self.board.count_pieces();
        let margin = counts.of(color) as i32 - counts.of(color.other()) as i32;

        let p = &mut self.players[winner.0];
        p.rounds_won += 1;
        p.score += margin;
        info!(winner = %p.name, %color, margin, plies = self.plies, "round over");

        self.state = RoundState::Over(RoundResult::Win {
            winner,
            color,
            margin,
        });
    }

    /// Hands the turn to the other side. A side without a legal move passes;
    /// when neither side can move the round is drawn.
    fn advance_turn(&mut self) {
        let next = self.current.other();
        if movegen::has_legal_move(&self.board, self.colors[next.0]) {
            self.current = next;
        } else if movegen::has_legal_move(&self.board, self.colors[self.current.0]) {
            warn!(player = %self.players[next.0].name, "no legal move, turn passes");
        } else {
            info!("neither side can move, round drawn");
            self.state = RoundState::Over(RoundResult::Draw(DrawReason::NoLegalMoves));
            return;
        }
        self.state = RoundState::AwaitingMove(self.colors[self.current.0]);
    }

    fn forfeit_turn(&mut self, why: &str) {
        warn!(player = %self.current_player().name, why, "turn forfeited");
        self.idle_turns += 1;
        if self.idle_turns >= 2 {
            self.state = RoundState::Over(RoundResult::Draw(DrawReason::NoLegalMoves));
            return;
        }
        self.current = self.current.other();
        self.state = RoundState::AwaitingMove(self.colors[self.current.0]);
    }
}

impl fmt::Debug for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Round")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("state", &self.state)
            .field("plies", &self.plies)
            .finish()
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod round_tests;
