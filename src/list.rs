//! Ordered glyph sequences and their inline rendering.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::display::Render;
use crate::glyph::Glyph;

/// Ordered glyphs, one per input value, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct GlyphList {
    glyphs: Vec<Rc<Glyph>>,
}

impl GlyphList {
    pub fn new(glyphs: Vec<Rc<Glyph>>) -> Self {
        Self { glyphs }
    }

    pub fn into_inner(self) -> Vec<Rc<Glyph>> {
        self.glyphs
    }
}

impl Deref for GlyphList {
    type Target = [Rc<Glyph>];

    fn deref(&self) -> &Self::Target {
        &self.glyphs
    }
}

impl FromIterator<Rc<Glyph>> for GlyphList {
    fn from_iter<I: IntoIterator<Item = Rc<Glyph>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for GlyphList {
    type Item = Rc<Glyph>;
    type IntoIter = std::vec::IntoIter<Rc<Glyph>>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.into_iter()
    }
}

impl<'a> IntoIterator for &'a GlyphList {
    type Item = &'a Rc<Glyph>;
    type IntoIter = std::slice::Iter<'a, Rc<Glyph>>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

impl Render for GlyphList {
    fn render(&self) -> String {
        self.glyphs
            .iter()
            .map(|g| format!("<span>{}</span>", g.render()))
            .collect()
    }
}

impl fmt::Display for GlyphList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, g) in self.glyphs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g}")?;
        }
        write!(f, "]")
    }
}
