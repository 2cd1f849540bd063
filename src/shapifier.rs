//! Assignment of glyphs to values from a shuffled, finite pool.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::Palette;
use crate::error::ShapyterError;
use crate::glyph::{Form, Glyph, Outline};
use crate::list::GlyphList;

/// One unused (form, color, duration) triple.
#[derive(Debug, Clone, PartialEq)]
struct Combination {
    form: Form,
    color: String,
    duration: f64,
}

/// Hands out a distinct glyph to every distinct value it is given.
///
/// The pool is shuffled once at construction and consumed from the end.
/// A value seen before gets back the very same `Rc<Glyph>`.
#[derive(Debug)]
pub struct Shapifier<K> {
    memo: HashMap<K, Rc<Glyph>>,
    pool: Vec<Combination>,
    capacity: usize,
}

impl<K: Hash + Eq> Shapifier<K> {
    /// Default palette, shuffled with `seed` or with OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_palette_unchecked(Palette::default(), seed)
    }

    pub fn with_palette(palette: Palette, seed: Option<u64>) -> Result<Self, ShapyterError> {
        palette.validate()?;
        Ok(Self::with_palette_unchecked(palette, seed))
    }

    /// Shuffle the pool with a caller-provided random source.
    pub fn with_rng<R: Rng + ?Sized>(palette: Palette, rng: &mut R) -> Result<Self, ShapyterError> {
        palette.validate()?;
        Ok(Self::build(&palette, rng))
    }

    fn with_palette_unchecked(palette: Palette, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::build(&palette, &mut rng)
    }

    fn build<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> Self {
        let mut pool = Vec::with_capacity(palette.capacity());
        for &form in &palette.forms {
            for color in &palette.colors {
                for &duration in &palette.durations {
                    pool.push(Combination {
                        form,
                        color: color.clone(),
                        duration,
                    });
                }
            }
        }
        pool.shuffle(rng);
        Self {
            memo: HashMap::new(),
            capacity: pool.len(),
            pool,
        }
    }

    /// Glyph for `value`, assigning a fresh one on first sight.
    pub fn allocate_for<Q>(&mut self, value: &Q) -> Result<Rc<Glyph>, ShapyterError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(glyph) = self.memo.get(value) {
            return Ok(Rc::clone(glyph));
        }
        let Some(combo) = self.pool.pop() else {
            warn!(capacity = self.capacity, "shape pool exhausted");
            return Err(ShapyterError::Exhausted {
                capacity: self.capacity,
            });
        };
        let glyph = Rc::new(Glyph::from(Outline::new(
            combo.form,
            combo.color,
            Some(combo.duration),
        )));
        debug!(
            glyph = %glyph,
            assigned = self.memo.len() + 1,
            remaining = self.pool.len(),
            "assigned new shape"
        );
        self.memo.insert(value.to_owned(), Rc::clone(&glyph));
        Ok(glyph)
    }

    /// Glyphs for `values` in order.
    ///
    /// Fails without assigning anything if the values need more fresh
    /// shapes than the pool has left.
    pub fn apply<'a, Q, I>(&mut self, values: I) -> Result<GlyphList, ShapyterError>
    where
        I: IntoIterator<Item = &'a Q>,
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized + 'a,
    {
        let values: Vec<&Q> = values.into_iter().collect();
        let unseen: HashSet<&Q> = values
            .iter()
            .copied()
            .filter(|v| !self.memo.contains_key(*v))
            .collect();
        if unseen.len() > self.pool.len() {
            warn!(
                needed = unseen.len(),
                remaining = self.pool.len(),
                "not enough shapes for sequence"
            );
            return Err(ShapyterError::Exhausted {
                capacity: self.capacity,
            });
        }
        values.into_iter().map(|v| self.allocate_for(v)).collect()
    }

    /// Glyph already assigned to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&Rc<Glyph>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.memo.get(value)
    }

    /// Number of values with an assigned glyph.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Combinations still available.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn assignments(&self) -> impl Iterator<Item = (&K, &Rc<Glyph>)> {
        self.memo.iter()
    }
}

impl<K: Hash + Eq> Default for Shapifier<K> {
    fn default() -> Self {
        Self::new(None)
    }
}
