//! Headless commands: scripted play and instruction-stream rendering.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{GameSession, RenderInstruction, decode, dispatch};
use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::tui::BoardView;

fn write_lines(out: &mut impl Write, instructions: &[RenderInstruction]) -> Result<()> {
    for instruction in instructions {
        writeln!(out, "{}", serde_json::to_string(instruction)?)?;
    }
    Ok(())
}

/// Plays `moves` on a fresh session, writing each emitted instruction as
/// one JSON line.
#[instrument(skip(out))]
pub fn run_script(moves: &[usize], reset: bool, out: &mut impl Write) -> Result<()> {
    let mut session = GameSession::new();

    for &index in moves {
        let instructions = session.apply_move(index)?;
        debug!(index, count = instructions.len(), "Move applied");
        write_lines(out, &instructions)?;
    }

    if reset {
        write_lines(out, &session.reset())?;
    }

    info!(status = %session.status(), "Script finished");
    Ok(())
}

/// Decodes instruction lines, drives a [`BoardView`] with them and writes
/// the resulting board as text.
#[instrument(skip_all)]
pub fn run_show(input: impl BufRead, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let mut view = BoardView::new();

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let instruction = decode(&line).with_context(|| format!("line {}", number + 1))?;
        dispatch(&mut view, &[instruction])?;
    }

    write!(out, "{}", view.to_text(settings))?;
    Ok(())
}
