use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShapyterError;
use crate::glyph::Form;

/// Fill colors handed out by the default palette.
pub const DEFAULT_COLORS: [&str; 5] = ["#86AED1", "#F8C3B6", "#F8EBBF", "#AEBC6E", "#679A7D"];
/// Animation periods, in seconds, of the default palette.
pub const DEFAULT_DURATIONS: [f64; 3] = [1.25, 2.2, 2.8];

/// Set of outline forms, colors and durations a [`Shapifier`](crate::Shapifier)
/// combines into its pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub forms: Vec<Form>,
    pub colors: Vec<String>,
    pub durations: Vec<f64>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            forms: Form::ALL.to_vec(),
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            durations: DEFAULT_DURATIONS.to_vec(),
        }
    }
}

impl Palette {
    /// Number of distinct combinations, i.e. how many values can be shaped.
    pub fn capacity(&self) -> usize {
        self.forms.len() * self.colors.len() * self.durations.len()
    }

    pub fn validate(&self) -> Result<(), ShapyterError> {
        if self.forms.is_empty() {
            return Err(ShapyterError::Config("palette has no forms".into()));
        }
        if self.colors.is_empty() {
            return Err(ShapyterError::Config("palette has no colors".into()));
        }
        if self.durations.is_empty() {
            return Err(ShapyterError::Config("palette has no durations".into()));
        }
        if self.colors.iter().any(|c| c.trim().is_empty()) {
            return Err(ShapyterError::Config("empty color in palette".into()));
        }
        if let Some(d) = self
            .durations
            .iter()
            .find(|d| !d.is_finite() || **d <= 0.0)
        {
            return Err(ShapyterError::Config(format!("invalid duration {d}")));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self, ShapyterError> {
        let palette: Palette = serde_json::from_str(s)?;
        palette.validate()?;
        Ok(palette)
    }

    /// Load and validate a palette stored as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ShapyterError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}
