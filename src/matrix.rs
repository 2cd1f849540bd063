//! Bit-matrix glyphs: an integer drawn as a square grid of cells.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::display::Render;
use crate::error::ShapyterError;
use crate::glyph::{LINE_WIDTH, STROKE};

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE: u32 = 16;
/// Inset of each cell inside its grid slot.
pub const CELL_MARGIN: f64 = 1.5;

const WORD_BITS: u32 = u64::BITS;

/// A fixed-width bitset rendered as a grid, cell `i = x + y * side` filled
/// when bit `i` is set.
///
/// The value is kept as little-endian `u64` words with no trailing zero
/// words, so any width works. Identity is the value alone: two matrices
/// holding the same value compare equal whatever their width.
#[derive(Debug, Clone)]
pub struct BitMatrix {
    words: Vec<u64>,
    bits: u32,
    side: u32,
}

impl BitMatrix {
    /// Build a matrix for `value`, which must lie in `[0, 2^bits)`.
    pub fn new(value: i128, bits: u32) -> Result<Self, ShapyterError> {
        if value < 0 {
            return Err(ShapyterError::Range {
                value: value.to_string(),
                bits,
            });
        }
        let v = value as u128;
        Self::from_words(vec![v as u64, (v >> WORD_BITS) as u64], bits)
    }

    /// Build a matrix from little-endian 64-bit words.
    pub fn from_words(mut words: Vec<u64>, bits: u32) -> Result<Self, ShapyterError> {
        while words.last() == Some(&0) {
            words.pop();
        }
        let m = Self {
            words,
            bits,
            side: ceil_sqrt(bits),
        };
        if m.bit_len() > bits as u64 {
            return Err(ShapyterError::Range {
                value: m.value_string(),
                bits,
            });
        }
        Ok(m)
    }

    /// Parse a decimal or `0x`-prefixed hexadecimal value.
    pub fn parse(text: &str, bits: u32) -> Result<Self, ShapyterError> {
        let text = text.trim();
        let invalid = || ShapyterError::InvalidValue(text.to_string());
        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let digits = hex.as_bytes();
            let mut words = Vec::with_capacity(digits.len() / 16 + 1);
            for chunk in digits.rchunks(16) {
                let chunk = std::str::from_utf8(chunk).map_err(|_| invalid())?;
                words.push(u64::from_str_radix(chunk, 16).map_err(|_| invalid())?);
            }
            return Self::from_words(words, bits);
        }
        let value: i128 = text.parse().map_err(|_| invalid())?;
        Self::new(value, bits)
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// The value, when it fits in 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        match self.words.as_slice() {
            [] => Some(0),
            [lo] => Some(*lo as u128),
            [lo, hi] => Some(*lo as u128 | (*hi as u128) << WORD_BITS),
            _ => None,
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of cells along each edge of the grid.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Canvas edge length in pixels.
    pub fn size(&self) -> u32 {
        self.side * CELL_SIZE
    }

    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    pub fn is_set(&self, i: u32) -> bool {
        if i >= self.bits {
            return false;
        }
        self.words
            .get((i / WORD_BITS) as usize)
            .is_some_and(|w| (w >> (i % WORD_BITS)) & 1 != 0)
    }

    /// Shared set bits over the bit width.
    ///
    /// This is `popcount(a & b) / bits`, which only equals the Jaccard index
    /// when both operands have the same popcount.
    pub fn similarity(&self, other: &BitMatrix) -> Result<f64, ShapyterError> {
        if self.bits != other.bits {
            return Err(ShapyterError::WidthMismatch {
                left: self.bits,
                right: other.bits,
            });
        }
        if self.bits == 0 {
            return Err(ShapyterError::EmptyWidth);
        }
        let shared: u64 = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones() as u64)
            .sum();
        Ok(shared as f64 / self.bits as f64)
    }

    fn bit_len(&self) -> u64 {
        match self.words.last() {
            Some(top) => {
                self.words.len() as u64 * WORD_BITS as u64 - top.leading_zeros() as u64
            }
            None => 0,
        }
    }

    fn value_string(&self) -> String {
        if let Some(v) = self.to_u128() {
            return v.to_string();
        }
        let mut out = String::from("0x");
        let mut rev = self.words.iter().rev();
        if let Some(top) = rev.next() {
            out.push_str(&format!("{top:x}"));
        }
        for w in rev {
            out.push_str(&format!("{w:016x}"));
        }
        out
    }
}

fn ceil_sqrt(n: u32) -> u32 {
    let n = n as u64;
    let mut side = (n as f64).sqrt() as u64;
    while side * side < n {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= n {
        side -= 1;
    }
    side as u32
}

impl PartialEq for BitMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for BitMatrix {}

impl Hash for BitMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words.hash(state);
    }
}

impl Render for BitMatrix {
    fn render(&self) -> String {
        let n = self.side;
        let cell = CELL_SIZE as f64;
        let mut rects = String::new();
        for x in 0..n {
            for y in 0..n {
                let i = x as u64 + y as u64 * n as u64;
                let set = i < self.bits as u64 && self.is_set(i as u32);
                let fill = if set { "black" } else { "white" };
                rects.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{w}" height="{w}" stroke="{STROKE}" stroke-width="{LINE_WIDTH}" fill="{fill}" />"#,
                    cell * x as f64 + CELL_MARGIN,
                    cell * y as f64 + CELL_MARGIN,
                    w = cell - 2.0 * CELL_MARGIN,
                ));
            }
        }
        format!(
            r#"<svg width="{size}" height="{size}">{rects}</svg>"#,
            size = self.size()
        )
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set({}, bits={})", self.value_string(), self.bits)
    }
}
