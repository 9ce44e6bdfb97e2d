use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

///
/// Which side of a mid-sized tract gets a fixed-size carve-out. `None` means
/// the tract is bisected instead.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    #[default]
    None,
    Left,
    Right,
}

impl FromStr for Split {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Split::Left),
            "right" => Ok(Split::Right),
            "none" | "" => Ok(Split::None),
            _ => Err(CoreError::InvalidSplit(s.to_string())),
        }
    }
}

impl Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Split::None => "none",
            Split::Left => "left",
            Split::Right => "right",
        };
        write!(f, "{}", s)
    }
}
