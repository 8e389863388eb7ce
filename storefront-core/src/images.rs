//! Image sequence resolution and gallery state
//!
//! Layered fallback: a resolved variant's dedicated images, else the
//! product's main images, else a single placeholder. The output is never
//! empty, so the gallery always has something to show.

use serde::{Deserialize, Serialize};
use shared::models::{ImageDirectories, Variant};

/// Shown when neither variant nor product images exist
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Resolve the active image sequence for the current variant
pub fn resolve_images(
    variant: Option<&Variant>,
    dirs: &ImageDirectories,
    placeholder: &str,
) -> Vec<String> {
    if let Some(variant) = variant
        && let Some(dedicated) = dirs.for_sku(&variant.sku)
    {
        return dedicated.to_vec();
    }
    if !dirs.main_images.is_empty() {
        return dirs.main_images.clone();
    }
    vec![placeholder.to_string()]
}

/// Active image sequence plus cursor
///
/// The index is clamped into range whenever the sequence changes, so a
/// variant switch never leaves a stale out-of-range cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    sequence: Vec<String>,
    active: usize,
}

impl Gallery {
    pub fn new(sequence: Vec<String>) -> Self {
        Self {
            sequence,
            active: 0,
        }
    }

    /// Swap in a new sequence, clamping the cursor into range
    pub fn replace(&mut self, sequence: Vec<String>) {
        self.sequence = sequence;
        self.active = self.active.min(self.sequence.len().saturating_sub(1));
    }

    /// Reset the cursor to the first image
    pub fn rewind(&mut self) {
        self.active = 0;
    }

    /// Advance circularly
    pub fn next(&mut self) {
        if !self.sequence.is_empty() {
            self.active = (self.active + 1) % self.sequence.len();
        }
    }

    /// Step back circularly
    pub fn prev(&mut self) {
        if !self.sequence.is_empty() {
            self.active = (self.active + self.sequence.len() - 1) % self.sequence.len();
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&str> {
        self.sequence.get(self.active).map(String::as_str)
    }

    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
