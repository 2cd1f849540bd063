//! Inline SVG markers for eyeballing sequences of discrete values in a
//! notebook.
//!
//! A [`Shapifier`] gives every distinct value it sees a colored, animated
//! outline shape drawn from a shuffled pool, and remembers the choice so the
//! same value always looks the same. [`BitMatrix`] draws an integer as a grid
//! of filled cells instead.
//!
//! ```
//! use shapyter::{Render, Shapifier};
//!
//! let mut shapes: Shapifier<String> = Shapifier::new(Some(42));
//! let list = shapes.apply(["the", "cat", "the"]).unwrap();
//! assert_eq!(list.len(), 3);
//! assert_eq!(list[0].render(), list[2].render());
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod glyph;
pub mod io_utils;
pub mod list;
pub mod matrix;
pub mod shapifier;

pub use config::{Palette, DEFAULT_COLORS, DEFAULT_DURATIONS};
pub use display::{html_page, Render};
pub use error::ShapyterError;
pub use glyph::{Form, Glyph, Outline, DEFAULT_DURATION, GLYPH_SIZE, LINE_WIDTH, STROKE};
pub use list::GlyphList;
pub use matrix::{BitMatrix, CELL_MARGIN, CELL_SIZE};
pub use shapifier::Shapifier;
