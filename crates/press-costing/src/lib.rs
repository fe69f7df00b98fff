pub mod constants;

mod catalog;
mod digital;
mod evaluate;
mod job;
mod pricing;
mod select;
mod types;

pub use catalog::{PaperCatalog, PaperStock, SheetSize, standard_candidates};
pub use digital::{DigitalJob, DigitalQuote, digital_cost};
pub use evaluate::{EvaluatedRow, evaluate_candidate};
pub use job::{JobParameters, LayoutCandidate, QuoteRequest};
pub use pricing::{CostingConfig, PricingTable};
pub use select::{cheapest, rank_candidates};
pub use types::*;
