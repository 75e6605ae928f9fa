//! Strictly Tic-Tac-Toe - pure game logic for a two-player 3x3 game.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] turns a [`Board`] into a [`GameStatus`] and,
//!   for a win, the completed [`WinLine`]
//! - **Session**: [`GameSession`] owns turn, status and board, applies
//!   moves and resets
//! - **Render**: operations return [`RenderInstruction`]s; [`dispatch`]
//!   forwards them to any [`View`]
//!
//! Nothing here depends on a presentation layer.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameSession, GameStatus, RecordingView, dispatch};
//!
//! let mut session = GameSession::new();
//! let mut view = RecordingView::new();
//!
//! for index in [0, 3, 1, 4, 2] {
//!     let instructions = session.apply_move(index)?;
//!     dispatch(&mut view, &instructions)?;
//! }
//!
//! assert_eq!(session.status(), GameStatus::XWin);
//! assert_eq!(session.win_line().map(|l| l.indices()), Some([0, 1, 2]));
//! # Ok::<(), strictly_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod position;
pub mod render;
pub mod rules;
mod session;
mod types;

pub use error::{GameError, GameErrorKind};
pub use position::Position;
pub use render::{RecordingView, RenderInstruction, View, decode, dispatch};
pub use rules::{Evaluation, WinLine, evaluate};
pub use session::GameSession;
pub use types::{Board, Cell, GameStatus, Mark, Move};
