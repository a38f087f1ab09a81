//! Kani arbitrary implementations for board types.

#[cfg(kani)]
use super::GamePiece;

#[cfg(kani)]
impl kani::Arbitrary for GamePiece {
    fn any() -> Self {
        if kani::any() {
            GamePiece::Solid
        } else {
            GamePiece::Donut
        }
    }
}
