/// Represent a range from [start, end)
/// Inclusive start, exclusive of end
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Window {
    pub start: u64,
    pub end: u64,
}

impl Window {
    pub fn new(start: u64, end: u64) -> Self {
        Window { start, end }
    }

    pub fn width(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether a 1-based table position falls in this 0-based half-open window.
    ///
    /// Position `p` covers the base `[p - 1, p)`, so it is inside the window
    /// when `start < p <= end`.
    #[inline]
    pub fn contains_one_based(&self, position: u64) -> bool {
        self.start < position && position <= self.end
    }
}

///
/// The gene-proximal windows of a single tract. `left` sits next to the tract start,
/// `right` next to the tract end.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct WindowPair {
    pub left: Window,
    pub right: Window,
}

impl WindowPair {
    /// Total number of bases covered by both windows.
    pub fn covered(&self) -> u64 {
        self.left.width() + self.right.width()
    }
}
