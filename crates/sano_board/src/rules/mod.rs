//! Game rules.
//!
//! Pure functions evaluating a [`Grid`](crate::Grid). Rules are kept
//! apart from board storage so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, line_owner, winning_line};
