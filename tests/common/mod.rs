//! Shared helpers for integration tests.

#![allow(dead_code)]

use rust_pairs::board::Board;
use rust_pairs::cards::{CardIndex, Symbol, DEFAULT_SYMBOLS};
use rust_pairs::core::HudSnapshot;
use rust_pairs::render::{RenderPort, WinSummary};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber. Honors `RUST_LOG`; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One call made on the render port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    Board(Board),
    Hud(HudSnapshot),
    Win(WinSummary),
    Lock,
    StartEnabled(bool),
}

/// Renderer that records every call.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self) -> Vec<WinSummary> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Win(summary) => Some(*summary),
                _ => None,
            })
            .collect()
    }

    pub fn lock_count(&self) -> usize {
        self.events.iter().filter(|e| **e == RenderEvent::Lock).count()
    }

    pub fn hud_updates(&self) -> Vec<HudSnapshot> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Hud(hud) => Some(*hud),
                _ => None,
            })
            .collect()
    }

    pub fn last_board(&self) -> Option<&Board> {
        self.events.iter().rev().find_map(|e| match e {
            RenderEvent::Board(board) => Some(board),
            _ => None,
        })
    }
}

impl RenderPort for RecordingRenderer {
    fn render_board(&mut self, board: &Board) {
        self.events.push(RenderEvent::Board(board.clone()));
    }

    fn update_hud(&mut self, hud: &HudSnapshot) {
        self.events.push(RenderEvent::Hud(*hud));
    }

    fn show_win_banner(&mut self, summary: &WinSummary) {
        self.events.push(RenderEvent::Win(*summary));
    }

    fn lock_board(&mut self) {
        self.events.push(RenderEvent::Lock);
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.events.push(RenderEvent::StartEnabled(enabled));
    }
}

/// A 4x4 board with pairs at `(i, i + 8)` for `i` in `0..8`.
///
/// ```text
/// 🥔 🍒 🥑 🌽
/// 🥕 🍇 🍉 🍌
/// 🥔 🍒 🥑 🌽
/// 🥕 🍇 🍉 🍌
/// ```
pub fn board_4x4() -> Board {
    let half = &DEFAULT_SYMBOLS[..8];
    let symbols: Vec<Symbol> = half.iter().chain(half.iter()).copied().collect();
    Board::from_symbols(4, symbols).unwrap()
}

/// Positions of every pair on a board, ordered by first position.
pub fn pair_positions(board: &Board) -> Vec<(CardIndex, CardIndex)> {
    let mut pairs = Vec::new();
    for card in board.cards() {
        if let Some(other) = board
            .cards()
            .find(|c| c.index > card.index && c.symbol == card.symbol)
        {
            pairs.push((card.index, other.index));
        }
    }
    pairs
}
