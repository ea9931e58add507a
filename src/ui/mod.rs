//! Terminal styling.
//!
//! Color is advisory: [`HasTheme::detect`] falls back to a plain theme when
//! stdout is not a terminal or `NO_COLOR` is set, and the glyphs from
//! [`StatusKind`] are printed either way.

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::{should_use_colors, HasTheme};
