// src/render/layout.rs
//! Named layout algorithms and the node-position mapping they produce.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::graph::AbstractGraph;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Label to position, iterating in the order positions were inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    entries: Vec<(String, Point)>,
    index: HashMap<String, usize>,
}

impl Positions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the position of `label`.
    pub fn insert(&mut self, label: &str, point: Point) {
        if let Some(&i) = self.index.get(label) {
            self.entries[i].1 = point;
            return;
        }
        self.index.insert(label.to_string(), self.entries.len());
        self.entries.push((label.to_string(), point));
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<Point> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.entries.iter().map(|(l, p)| (l.as_str(), *p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shifts every point by the same amount.
    #[must_use]
    pub fn shifted(&self, dx: f64, dy: f64) -> Self {
        let mut out = Self::new();
        for (label, p) in self.iter() {
            out.insert(label, p.offset(dx, dy));
        }
        out
    }
}

/// Graph layout capability.
pub trait Layout {
    /// Places every node of `graph`.
    ///
    /// # Errors
    /// Returns error if the engine cannot run.
    fn positions(&self, graph: &AbstractGraph) -> Result<Positions>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Graphviz,
    Circular,
    Spectral,
    Spring,
    Shell,
}

/// Raised (not returned as an error) when a layout name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayoutWarning {
    pub requested: String,
}

impl fmt::Display for UnknownLayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout {} not found, defaulting to graphviz", self.requested)
    }
}

impl LayoutKind {
    pub const ALL: [Self; 5] = [
        Self::Graphviz,
        Self::Circular,
        Self::Spectral,
        Self::Spring,
        Self::Shell,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Graphviz => "graphviz",
            Self::Circular => "circular",
            Self::Spectral => "spectral",
            Self::Spring => "spring",
            Self::Shell => "shell",
        }
    }

    /// Maps a layout name to its kind. Unknown names fall back to
    /// `Graphviz` and come with a warning for the caller to report.
    #[must_use]
    pub fn resolve(name: &str) -> (Self, Option<UnknownLayoutWarning>) {
        let wanted = name.trim().to_ascii_lowercase();
        match Self::ALL.into_iter().find(|k| k.name() == wanted) {
            Some(kind) => (kind, None),
            None => (
                Self::Graphviz,
                Some(UnknownLayoutWarning {
                    requested: name.to_string(),
                }),
            ),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Centers points on the origin and scales the largest coordinate to 1.
pub(crate) fn rescale(points: &mut [Point]) {
    if points.is_empty() {
        return;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / n;

    let mut lim: f64 = 0.0;
    for p in points.iter_mut() {
        p.x -= cx;
        p.y -= cy;
        lim = lim.max(p.x.abs()).max(p.y.abs());
    }
    if lim > 0.0 {
        for p in points.iter_mut() {
            p.x /= lim;
            p.y /= lim;
        }
    }
}
