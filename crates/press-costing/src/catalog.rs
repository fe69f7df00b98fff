//! Paper and sheet catalogs
//!
//! Two lookup surfaces the surrounding application feeds the engine from:
//! a paper-stock price list keyed by name and grammage, and the fixed
//! catalog of standard press-sheet sizes that candidate layouts are
//! generated from.

use crate::job::LayoutCandidate;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One paper stock in the price list
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaperStock {
    /// Stock name, e.g. "couche" or "bristol"
    pub name: String,
    /// Grammage (g/m²)
    pub gsm: u32,
    /// Price of one parent sheet
    pub price_per_sheet: f64,
}

/// Price list mapping (name, gsm) to a per-sheet price
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaperCatalog {
    pub stocks: Vec<PaperStock>,
}

impl PaperCatalog {
    /// Price per sheet for a stock, or `None` when no price is on file.
    /// Name matching is case-insensitive.
    pub fn lookup(&self, name: &str, gsm: u32) -> Option<f64> {
        self.stocks
            .iter()
            .find(|stock| stock.gsm == gsm && stock.name.eq_ignore_ascii_case(name))
            .map(|stock| stock.price_per_sheet)
    }

    /// Price per sheet, erroring when no price is on file
    pub fn require(&self, name: &str, gsm: u32) -> Result<f64> {
        self.lookup(name, gsm).ok_or(CostingError::UnknownPaper {
            name: name.to_string(),
            gsm,
        })
    }

    /// Load a catalog from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let catalog = serde_json::from_slice(&bytes)
            .map_err(|e| CostingError::Config(format!("Failed to parse catalog: {}", e)))?;
        Ok(catalog)
    }
}

/// Standard press-sheet sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SheetSize {
    /// 65 × 90 cm
    Sheet65x90,
    /// 70 × 100 cm
    Sheet70x100,
    /// 50 × 70 cm
    Sheet50x70,
    /// 45 × 64 cm
    Sheet45x64,
    /// 35 × 50 cm
    Sheet35x50,
    Custom { width_cm: f64, height_cm: f64 },
}

impl SheetSize {
    /// Every named standard size, largest first
    pub const STANDARD: [SheetSize; 5] = [
        SheetSize::Sheet70x100,
        SheetSize::Sheet65x90,
        SheetSize::Sheet50x70,
        SheetSize::Sheet45x64,
        SheetSize::Sheet35x50,
    ];

    /// Dimensions as (width, height) in cm
    pub fn dimensions_cm(self) -> (f64, f64) {
        match self {
            SheetSize::Sheet65x90 => (65.0, 90.0),
            SheetSize::Sheet70x100 => (70.0, 100.0),
            SheetSize::Sheet50x70 => (50.0, 70.0),
            SheetSize::Sheet45x64 => (45.0, 64.0),
            SheetSize::Sheet35x50 => (35.0, 50.0),
            SheetSize::Custom {
                width_cm,
                height_cm,
            } => (width_cm, height_cm),
        }
    }

    /// Layout candidates for this sheet: the full sheet, then successive
    /// halvings of the longer dimension up to `max_cuts` cut sections.
    pub fn candidates(self, max_cuts: u32) -> Vec<LayoutCandidate> {
        let (mut width, mut height) = self.dimensions_cm();
        let mut cuts = 1;
        let mut out = Vec::new();

        while cuts <= max_cuts {
            out.push(LayoutCandidate {
                parent_width_cm: width,
                parent_height_cm: height,
                cut_pieces: cuts,
            });
            if width > height {
                width /= 2.0;
            } else {
                height /= 2.0;
            }
            cuts *= 2;
        }

        out
    }
}

/// Candidates across every standard sheet size, cut 1/2/4/8 ways
pub fn standard_candidates() -> Vec<LayoutCandidate> {
    SheetSize::STANDARD
        .iter()
        .flat_map(|size| size.candidates(8))
        .collect()
}
