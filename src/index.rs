// Index into the currently displayed (filtered) client list

use std::fmt;

/// 1-based position as typed by the user; always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(|zero_based| Index { zero_based })
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Index { zero_based }
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
