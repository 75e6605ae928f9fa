//! Render instructions and the view-collaborator seam.
//!
//! The session never touches a presentation layer. Each operation returns a
//! list of [`RenderInstruction`]s, and [`dispatch`] forwards them to a
//! [`View`] after checking their contracts.
//!
//! Instructions also have a JSON wire form, one object per instruction:
//!
//! ```text
//! {"op":"mark_cell","index":4,"mark":"cross"}
//! {"op":"set_turn","mark":"circle"}
//! {"op":"set_status","status":"PLAYING"}
//! {"op":"highlight_cells","indices":[0,1,2]}
//! {"op":"show_replay"}
//! ```

use crate::{GameError, GameErrorKind, GameStatus, Mark, Position, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace, warn};

/// An instruction for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "WireInstruction")]
pub enum RenderInstruction {
    /// Set the status display text.
    SetStatus(GameStatus),
    /// Move the current-turn marker.
    SetTurn(Mark),
    /// Show a mark in a cell.
    MarkCell {
        /// Cell to mark.
        position: Position,
        /// Mark to show.
        mark: Mark,
    },
    /// Add the winning visual to these cells. Must be one winning line.
    HighlightCells(Vec<Position>),
    /// Show the replay control.
    ShowReplay,
    /// Hide the replay control.
    HideReplay,
    /// Remove marks and highlights from every cell.
    ClearCells,
}

impl RenderInstruction {
    /// Builds the highlight instruction for a winning line.
    pub fn highlight(line: WinLine) -> Self {
        RenderInstruction::HighlightCells(line.positions().to_vec())
    }

    /// Checks the instruction's contract without forwarding it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWinPositions` for a highlight that is not a
    /// canonical three-cell line.
    pub fn validate(&self) -> Result<(), GameError> {
        if let RenderInstruction::HighlightCells(positions) = self {
            highlight_line(positions)?;
        }
        Ok(())
    }
}

/// Presentation collaborator driven by render instructions.
pub trait View {
    /// Sets the status display.
    fn set_status(&mut self, status: GameStatus);

    /// Sets the current-turn marker.
    fn set_turn(&mut self, mark: Mark);

    /// Shows a mark in a cell.
    fn mark_cell(&mut self, position: Position, mark: Mark);

    /// Adds the winning visual to the cells of a line.
    fn highlight(&mut self, line: WinLine);

    /// Shows or hides the replay control.
    fn set_replay_visible(&mut self, visible: bool);

    /// Clears every per-cell visual.
    fn clear_cells(&mut self);
}

fn highlight_line(positions: &[Position]) -> Result<WinLine, GameError> {
    let indices: Vec<usize> = positions.iter().map(|p| p.to_index()).collect();
    WinLine::from_indices(&indices).ok_or_else(|| {
        warn!(?indices, "Rejected highlight request");
        GameError::new(GameErrorKind::InvalidWinPositions {
            count: positions.len(),
        })
    })
}

/// Forwards one instruction to a view.
///
/// # Errors
///
/// Returns `InvalidWinPositions` if a highlight request is malformed. The
/// view is not touched in that case.
pub fn apply<V: View + ?Sized>(view: &mut V, instruction: &RenderInstruction) -> Result<(), GameError> {
    trace!(?instruction, "Forwarding instruction");
    match instruction {
        RenderInstruction::SetStatus(status) => view.set_status(*status),
        RenderInstruction::SetTurn(mark) => view.set_turn(*mark),
        RenderInstruction::MarkCell { position, mark } => view.mark_cell(*position, *mark),
        RenderInstruction::HighlightCells(positions) => view.highlight(highlight_line(positions)?),
        RenderInstruction::ShowReplay => view.set_replay_visible(true),
        RenderInstruction::HideReplay => view.set_replay_visible(false),
        RenderInstruction::ClearCells => view.clear_cells(),
    }
    Ok(())
}

/// Forwards instructions to a view in order, stopping at the first
/// contract violation.
#[instrument(level = "debug", skip_all, fields(count = instructions.len()))]
pub fn dispatch<V: View + ?Sized>(
    view: &mut V,
    instructions: &[RenderInstruction],
) -> Result<(), GameError> {
    for instruction in instructions {
        apply(view, instruction)?;
    }
    Ok(())
}

/// Parses one wire-form instruction and checks its contract.
///
/// # Errors
///
/// - `Decode` for malformed JSON or an unknown `op`
/// - `MissingStatus` for a `set_status` without a status
/// - `GameState` for a cell index outside 0-8
/// - `InvalidWinPositions` for a highlight that is not a winning line
#[instrument(level = "debug")]
pub fn decode(line: &str) -> Result<RenderInstruction, GameError> {
    let wire: WireInstruction = serde_json::from_str(line)?;
    let instruction = RenderInstruction::from_wire(wire)?;
    instruction.validate()?;
    Ok(instruction)
}

/// A view that records every forwarded call as an instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
    /// Calls received, in order.
    pub calls: Vec<RenderInstruction>,
}

impl RecordingView {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for RecordingView {
    fn set_status(&mut self, status: GameStatus) {
        self.calls.push(RenderInstruction::SetStatus(status));
    }

    fn set_turn(&mut self, mark: Mark) {
        self.calls.push(RenderInstruction::SetTurn(mark));
    }

    fn mark_cell(&mut self, position: Position, mark: Mark) {
        self.calls.push(RenderInstruction::MarkCell { position, mark });
    }

    fn highlight(&mut self, line: WinLine) {
        self.calls.push(RenderInstruction::highlight(line));
    }

    fn set_replay_visible(&mut self, visible: bool) {
        self.calls.push(if visible {
            RenderInstruction::ShowReplay
        } else {
            RenderInstruction::HideReplay
        });
    }

    fn clear_cells(&mut self) {
        self.calls.push(RenderInstruction::ClearCells);
    }
}

// ─────────────────────────────────────────────────────────────
//  Wire form
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum WireInstruction {
    SetStatus {
        #[serde(default)]
        status: Option<GameStatus>,
    },
    SetTurn { mark: Mark },
    MarkCell { index: usize, mark: Mark },
    HighlightCells { indices: Vec<usize> },
    ShowReplay,
    HideReplay,
    ClearCells,
}

impl From<RenderInstruction> for WireInstruction {
    fn from(instruction: RenderInstruction) -> Self {
        match instruction {
            RenderInstruction::SetStatus(status) => WireInstruction::SetStatus {
                status: Some(status),
            },
            RenderInstruction::SetTurn(mark) => WireInstruction::SetTurn { mark },
            RenderInstruction::MarkCell { position, mark } => WireInstruction::MarkCell {
                index: position.to_index(),
                mark,
            },
            RenderInstruction::HighlightCells(positions) => WireInstruction::HighlightCells {
                indices: positions.iter().map(|p| p.to_index()).collect(),
            },
            RenderInstruction::ShowReplay => WireInstruction::ShowReplay,
            RenderInstruction::HideReplay => WireInstruction::HideReplay,
            RenderInstruction::ClearCells => WireInstruction::ClearCells,
        }
    }
}

#[track_caller]
fn position_at(index: usize) -> Result<Position, GameError> {
    Position::from_index(index).ok_or_else(|| GameError::new(GameErrorKind::GameState { index }))
}

impl RenderInstruction {
    fn from_wire(wire: WireInstruction) -> Result<Self, GameError> {
        Ok(match wire {
            WireInstruction::SetStatus { status } => RenderInstruction::SetStatus(
                status.ok_or_else(|| GameError::new(GameErrorKind::MissingStatus))?,
            ),
            WireInstruction::SetTurn { mark } => RenderInstruction::SetTurn(mark),
            WireInstruction::MarkCell { index, mark } => RenderInstruction::MarkCell {
                position: position_at(index)?,
                mark,
            },
            WireInstruction::HighlightCells { indices } => RenderInstruction::HighlightCells(
                indices
                    .into_iter()
                    .map(position_at)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            WireInstruction::ShowReplay => RenderInstruction::ShowReplay,
            WireInstruction::HideReplay => RenderInstruction::HideReplay,
            WireInstruction::ClearCells => RenderInstruction::ClearCells,
        })
    }
}
