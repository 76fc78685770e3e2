//! Game progression across plies and across games
//!
//! - [`history`]: board snapshots of the current game with a scrub pointer
//! - [`session`]: results and win totals of every game played this session

pub mod history;
pub mod session;

pub use history::{History, PlayError};
pub use session::{GameRecord, Session, WinCount};
