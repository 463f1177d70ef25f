//! Headless replay: `tui-2048 replay --seed N --moves LRUD...`.
//!
//! Plays a move string against a seeded session and writes one JSON object
//! per line: the opening board, then one frame per move. Replay stops at the
//! first move after which the game is lost.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, Session};
use crate::types::{Direction, GRID_SIZE};

/// Arguments of the `replay` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ReplayArgs {
    /// Seed for the session RNG
    #[arg(long, value_name = "N")]
    pub seed: u32,

    /// Moves to play, e.g. `LLUR` (case-insensitive; spaces and commas ignored)
    #[arg(long, value_name = "MOVES", value_parser = parse_moves, default_value = "")]
    pub moves: ::std::vec::Vec<Direction>,
}

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayFrame {
    /// 0 for the opening board, then the 1-based move number.
    pub index: u32,
    /// `L`, `R`, `U` or `D`; absent on the opening frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<char>,
    pub changed: bool,
    pub score_delta: u32,
    pub score: u32,
    pub status: String,
    pub max_tile: u32,
    /// `[row, col]` of the tile spawned by this move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawned: Option<[u8; 2]>,
    pub board: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl ReplayFrame {
    fn from_snapshot(index: u32, snap: &GameSnapshot) -> Self {
        Self {
            index,
            direction: None,
            changed: false,
            score_delta: 0,
            score: snap.score,
            status: snap.status().as_str().to_string(),
            max_tile: snap.max_tile,
            spawned: None,
            board: snap.board,
        }
    }
}

/// `L`/`R`/`U`/`D` in either case; whitespace and commas are ignored.
pub fn parse_moves(raw: &str) -> Result<Vec<Direction>, String> {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .enumerate()
        .map(|(i, c)| {
            Direction::from_char(c).ok_or_else(|| format!("unknown move {c:?} at position {}", i + 1))
        })
        .collect()
}

/// Play `args` and write JSON lines to `out`. Returns the final snapshot.
pub fn run_replay<W: Write>(args: &ReplayArgs, out: &mut W) -> Result<GameSnapshot> {
    let mut session = Session::new(args.seed);
    write_frame(out, &ReplayFrame::from_snapshot(0, &session.snapshot()))?;

    for (i, &direction) in args.moves.iter().enumerate() {
        let turn = session.step(direction);
        let snap = session.snapshot();

        let frame = ReplayFrame {
            direction: Some(direction.as_char()),
            changed: turn.result.changed,
            score_delta: turn.result.score_delta,
            spawned: turn.spawned.map(|p| [p.row, p.col]),
            ..ReplayFrame::from_snapshot(i as u32 + 1, &snap)
        };
        write_frame(out, &frame)?;

        if snap.lost {
            let left = args.moves.len() - i - 1;
            if left > 0 {
                log::info!("replay: game lost after move {}, {} moves ignored", i + 1, left);
            }
            break;
        }
    }

    out.flush()?;
    Ok(session.snapshot())
}

fn write_frame<W: Write>(out: &mut W, frame: &ReplayFrame) -> Result<()> {
    serde_json::to_writer(&mut *out, frame).context("encode replay frame")?;
    out.write_all(b"\n")?;
    Ok(())
}
