//! Mutable registry of user-plotted coordinates.
//!
//! Two parallel insertion-ordered sequences; the only mutable state in the
//! model. Removal matches by exact equality on both coordinates, resolves
//! duplicates to the lowest matching index, and deletes by index set against
//! the pre-scan state so batched removals stay deterministic.

use thiserror::Error;

/// Precondition violations of [`CoordinateRegistry::add`]. The call mutates
/// nothing when it fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("coordinate lists differ in length ({xs} x values vs {ys} y values)")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("coordinate lists are empty")]
    Empty,
}

#[derive(Clone, Debug, Default)]
pub struct CoordinateRegistry {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl CoordinateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Append coordinate pairs in order. Fails on mismatched or empty input.
    pub fn add(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), RegistryError> {
        if xs.len() != ys.len() {
            return Err(RegistryError::LengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        if xs.is_empty() {
            return Err(RegistryError::Empty);
        }
        self.xs.extend_from_slice(xs);
        self.ys.extend_from_slice(ys);
        Ok(())
    }

    /// Remove one stored pair per requested `(x, y)`.
    ///
    /// Never fails: an absent coordinate raises a notice and is skipped; a
    /// duplicate coordinate raises a notice and only the first stored
    /// occurrence (lowest index) is removed. All indices are resolved
    /// against the registry state before any deletion happens.
    pub fn remove(&mut self, xs: &[f64], ys: &[f64]) {
        if xs.len() != ys.len() {
            tracing::warn!(
                xs = xs.len(),
                ys = ys.len(),
                "removal lists differ in length; extra entries are ignored"
            );
        }
        let mut to_delete: Vec<usize> = Vec::new();
        for (&x, &y) in xs.iter().zip(ys) {
            let mut first = None;
            let mut matches = 0usize;
            for (i, (&sx, &sy)) in self.xs.iter().zip(&self.ys).enumerate() {
                if sx == x && sy == y {
                    matches += 1;
                    if first.is_none() {
                        first = Some(i);
                    }
                }
            }
            match first {
                None => {
                    tracing::warn!("nothing found for the coordinate ({x}, {y})");
                }
                Some(i) => {
                    if matches > 1 {
                        tracing::warn!(
                            "more than one element found for the coordinate ({x}, {y}); \
                             the first element found will be removed"
                        );
                    }
                    to_delete.push(i);
                }
            }
        }
        to_delete.sort_unstable();
        to_delete.dedup();
        let mut i = 0;
        self.xs.retain(|_| {
            let keep = to_delete.binary_search(&i).is_err();
            i += 1;
            keep
        });
        let mut i = 0;
        self.ys.retain(|_| {
            let keep = to_delete.binary_search(&i).is_err();
            i += 1;
            keep
        });
    }
}
