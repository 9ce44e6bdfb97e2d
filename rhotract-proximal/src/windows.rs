use rhotract_core::models::{Split, Tract, Window, WindowPair};

use crate::consts::DEFAULT_SPLIT_SIZE;

///
/// Cuts the gene-proximal windows out of a tract.
///
/// With `w` the window size and `n` the tract size:
///
/// - `n > 2w`: a `w` sized window at each end, the middle is left out.
/// - `w < n <= 2w`: the tract is bisected, unless a split side is set. Then that side
///   gets a `split_size` window and the other side gets whatever remains.
/// - `n <= w`: the whole tract is gene-proximal and is bisected, whatever the split.
///
/// Bisection uses integer division, so on odd sized tracts the right window is one
/// base longer. A carve-out never reaches past the tract it is cut from.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSplitter {
    pub windowsize: u64,
    pub split: Split,
    pub split_size: u64,
}

impl WindowSplitter {
    pub fn new(windowsize: u64, split: Split) -> Self {
        WindowSplitter {
            windowsize,
            split,
            split_size: DEFAULT_SPLIT_SIZE,
        }
    }

    pub fn with_split_size(mut self, split_size: u64) -> Self {
        self.split_size = split_size;
        self
    }

    pub fn split(&self, tract: &Tract) -> WindowPair {
        let (start, end) = (tract.start, tract.end);
        let tract_size = tract.tract_size();
        let windowsize = self.windowsize;

        if tract_size > windowsize.saturating_mul(2) {
            WindowPair {
                left: Window::new(start, start + windowsize),
                right: Window::new(end - windowsize, end),
            }
        } else if tract_size > windowsize {
            match self.split {
                Split::None => bisect(tract),
                Split::Left => {
                    let left_end = start + self.split_size.min(tract_size);
                    WindowPair {
                        left: Window::new(start, left_end),
                        right: Window::new(left_end, end),
                    }
                }
                Split::Right => {
                    let right_start = end - self.split_size.min(tract_size);
                    WindowPair {
                        left: Window::new(start, right_start),
                        right: Window::new(right_start, end),
                    }
                }
            }
        } else {
            bisect(tract)
        }
    }
}

fn bisect(tract: &Tract) -> WindowPair {
    let mid = tract.mid_point();
    WindowPair {
        left: Window::new(tract.start, mid),
        right: Window::new(mid, tract.end),
    }
}
