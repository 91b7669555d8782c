//! Canonical rule constants and starting layouts.
//!
//! Layouts use the notation parsed by `utils::layout_parser`: one token per
//! piece, `<letter><file><rank>`, upper case for White and lower case for Black.

/// Standard board height.
pub const STANDARD_ROWS: usize = 8;
/// Standard board width.
pub const STANDARD_COLUMNS: usize = 8;

/// Two rooks and a king for White, a rook and a king for Black.
pub const DEFAULT_LAYOUT: &str = "Rc1 Kd1 Rh7 ka8 rb8";

/// Two rooks and a king per side on an otherwise empty board.
pub const TWO_ROOKS_LAYOUT: &str = "Rc1 Rc2 Kd1 rc7 rc8 kd8";

/// Full 32-piece starting array.
pub const STANDARD_LAYOUT: &str = "Ra1 Nb1 Bc1 Qd1 Ke1 Bf1 Ng1 Rh1 \
Pa2 Pb2 Pc2 Pd2 Pe2 Pf2 Pg2 Ph2 \
pa7 pb7 pc7 pd7 pe7 pf7 pg7 ph7 \
ra8 nb8 bc8 qd8 ke8 bf8 ng8 rh8";
