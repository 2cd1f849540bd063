//! Outline glyphs and the closed set of glyph variants.
//!
//! Equality and hashing only look at the identifying fields of a glyph:
//! the outline kind plus fill color, or the matrix value. Animation
//! duration and stroke are presentation only.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::display::Render;
use crate::matrix::BitMatrix;

/// Edge length of a glyph canvas in pixels.
pub const GLYPH_SIZE: u32 = 16;
/// Stroke width of outlines and matrix cells.
pub const LINE_WIDTH: f64 = 1.5;
/// Stroke color shared by every glyph.
pub const STROKE: &str = "black";
/// Animation period used when none is given.
pub const DEFAULT_DURATION: f64 = 1.0;

/// Outline shape of an animated glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Triangle,
    Square,
    Circle,
}

impl Form {
    pub const ALL: [Form; 3] = [Form::Triangle, Form::Square, Form::Circle];

    pub fn name(self) -> &'static str {
        match self {
            Form::Triangle => "Triangle",
            Form::Square => "Square",
            Form::Circle => "Circle",
        }
    }
}

/// A stroked shape whose outline pulses with a discrete animation.
#[derive(Debug, Clone)]
pub struct Outline {
    form: Form,
    fill: String,
    duration: f64,
}

impl Outline {
    pub fn new(form: Form, fill: impl Into<String>, duration: Option<f64>) -> Self {
        Self {
            form,
            fill: fill.into(),
            duration: duration.unwrap_or(DEFAULT_DURATION),
        }
    }

    pub fn triangle(fill: impl Into<String>) -> Self {
        Self::new(Form::Triangle, fill, None)
    }

    pub fn square(fill: impl Into<String>) -> Self {
        Self::new(Form::Square, fill, None)
    }

    pub fn circle(fill: impl Into<String>) -> Self {
        Self::new(Form::Circle, fill, None)
    }

    pub fn form(&self) -> Form {
        self.form
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Animation period in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn radius(&self) -> f64 {
        GLYPH_SIZE as f64 / 2.0 - LINE_WIDTH
    }

    /// Width and height of the inset square.
    pub fn inset(&self) -> f64 {
        GLYPH_SIZE as f64 - 2.0 * LINE_WIDTH
    }

    fn primitive(&self) -> (&'static str, String) {
        let size = GLYPH_SIZE as f64;
        let lw = LINE_WIDTH;
        match self.form {
            Form::Circle => (
                "circle",
                format!(
                    r#"cx="{c}" cy="{c}" r="{r}""#,
                    c = size / 2.0,
                    r = self.radius()
                ),
            ),
            Form::Square => (
                "rect",
                format!(
                    r#"x="{lw}" y="{lw}" width="{w}" height="{w}""#,
                    w = self.inset()
                ),
            ),
            Form::Triangle => (
                "polygon",
                format!(
                    r#"points="{lw},{far} {far},{far} {mid},{lw}""#,
                    far = size - lw,
                    mid = size / 2.0
                ),
            ),
        }
    }
}

impl PartialEq for Outline {
    fn eq(&self, other: &Self) -> bool {
        self.form == other.form && self.fill == other.fill
    }
}

impl Eq for Outline {}

impl Hash for Outline {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.form.hash(state);
        self.fill.hash(state);
    }
}

impl Render for Outline {
    fn render(&self) -> String {
        let (tag, geometry) = self.primitive();
        format!(
            concat!(
                r#"<svg width="{size}" height="{size}">"#,
                r#"<{tag} {geometry} stroke="{stroke}" stroke-width="{lw}" fill="{fill}">"#,
                r#"<animate attributeName="stroke-width" values="{pulse};0;{pulse}" "#,
                r#"dur="{dur}s" repeatCount="indefinite" calcMode="discrete" />"#,
                r#"</{tag}></svg>"#
            ),
            size = GLYPH_SIZE,
            tag = tag,
            geometry = geometry,
            stroke = STROKE,
            lw = LINE_WIDTH,
            fill = self.fill,
            pulse = LINE_WIDTH * 2.0,
            dur = self.duration,
        )
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", self.form.name(), self.fill)
    }
}

/// Any renderable glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Glyph {
    Outline(Outline),
    Matrix(BitMatrix),
}

impl Glyph {
    /// Outline form, or `None` for a bit matrix.
    pub fn form(&self) -> Option<Form> {
        match self {
            Glyph::Outline(o) => Some(o.form()),
            Glyph::Matrix(_) => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&BitMatrix> {
        match self {
            Glyph::Matrix(m) => Some(m),
            Glyph::Outline(_) => None,
        }
    }
}

impl From<Outline> for Glyph {
    fn from(o: Outline) -> Self {
        Glyph::Outline(o)
    }
}

impl From<BitMatrix> for Glyph {
    fn from(m: BitMatrix) -> Self {
        Glyph::Matrix(m)
    }
}

impl Render for Glyph {
    fn render(&self) -> String {
        match self {
            Glyph::Outline(o) => o.render(),
            Glyph::Matrix(m) => m.render(),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Outline(o) => o.fmt(f),
            Glyph::Matrix(m) => m.fmt(f),
        }
    }
}
