use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid parameters: {0}")]
    Config(String),
    #[error("No price on file for {name} {gsm}gsm")]
    UnknownPaper { name: String, gsm: u32 },
}

pub type Result<T> = std::result::Result<T, CostingError>;

/// Number of printed sides of the finished piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sides {
    /// Single-sided (simplex) printing
    #[default]
    Single,
    /// Double-sided (duplex) printing
    Double,
}

impl Sides {
    /// Number of sides as a multiplier for plates, impressions, and clicks
    pub fn count(self) -> u32 {
        match self {
            Sides::Single => 1,
            Sides::Double => 2,
        }
    }
}
