use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pquote", about = "Print-job costing CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cost an offset job: rank sheet layouts by total price
    Quote {
        /// Finished piece width in cm
        #[arg(long)]
        piece_width: f64,

        /// Finished piece height in cm
        #[arg(long)]
        piece_height: f64,

        /// Number of finished pieces
        #[arg(short, long)]
        quantity: u32,

        /// Printed sides
        #[arg(long, default_value = "single", value_enum)]
        sides: SidesArg,

        /// Ink colors per side
        #[arg(long, default_value = "4")]
        colors: u32,

        /// Paper cost per parent sheet (alternative to --paper/--gsm)
        #[arg(long, conflicts_with_all = ["paper", "gsm"])]
        paper_cost: Option<f64>,

        /// Paper stock name, looked up in the catalog
        #[arg(long, requires = "gsm")]
        paper: Option<String>,

        /// Paper grammage in g/m², looked up in the catalog
        #[arg(long, requires = "paper")]
        gsm: Option<u32>,

        /// Paper price catalog (JSON), required with --paper/--gsm
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Layout candidates as a JSON quote request file; defaults to the
        /// standard sheet catalog
        #[arg(long)]
        candidates: Option<PathBuf>,

        /// Show the full ranking instead of only the cheapest layout
        #[arg(long)]
        all: bool,
    },

    /// Cost a digital job with the per-click model
    Digital {
        /// Number of finished pieces
        #[arg(short, long)]
        quantity: u32,

        /// Printed sides
        #[arg(long, default_value = "single", value_enum)]
        sides: SidesArg,

        /// Finished pieces per output sheet
        #[arg(long)]
        pieces_per_sheet: u32,

        /// Price per click
        #[arg(long)]
        click_rate: f64,

        /// Paper cost per output sheet
        #[arg(long, default_value = "0.0")]
        paper_cost: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SidesArg {
    Single,
    Double,
}

impl From<SidesArg> for press_costing::Sides {
    fn from(arg: SidesArg) -> Self {
        match arg {
            SidesArg::Single => Self::Single,
            SidesArg::Double => Self::Double,
        }
    }
}

fn print_row(row: &press_costing::EvaluatedRow) {
    println!(
        "  {}x{} cm, {} cut(s): {} ups/section ({} per sheet), {} sheets, \
         paper {:.2}, run {:.2}, plates {:.2} → total {:.2}",
        row.parent_width_cm,
        row.parent_height_cm,
        row.cut_pieces,
        row.imposition_count,
        row.ups_per_sheet,
        row.sheets_required,
        row.paper_cost,
        row.unit_price,
        row.plate_total,
        row.total
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            piece_width,
            piece_height,
            quantity,
            sides,
            colors,
            paper_cost,
            paper,
            gsm,
            catalog,
            candidates,
            all,
        } => {
            let paper_cost_per_sheet = match (paper_cost, paper, gsm) {
                (Some(cost), _, _) => cost,
                (None, Some(name), Some(gsm)) => {
                    let Some(path) = catalog else {
                        bail!("--paper/--gsm needs a price catalog (--catalog)");
                    };
                    let catalog = press_costing::PaperCatalog::load(&path).await?;
                    catalog.require(&name, gsm)?
                }
                _ => bail!("Specify either --paper-cost or --paper with --gsm"),
            };

            let job = press_costing::JobParameters {
                piece_width_cm: piece_width,
                piece_height_cm: piece_height,
                quantity,
                sides: sides.into(),
                colors,
                paper_cost_per_sheet,
            };

            let candidates = match candidates {
                Some(path) => press_costing::QuoteRequest::load(&path).await?.candidates,
                None => press_costing::standard_candidates(),
            };

            let config = press_costing::CostingConfig::default();
            let rows = press_costing::rank_candidates(&job, &candidates, &config)?;

            if rows.is_empty() {
                println!("No feasible layout found for this piece size.");
                return Ok(());
            }

            if all {
                println!("Layouts, cheapest first:");
                for row in &rows {
                    print_row(row);
                }
            } else {
                println!("Cheapest layout:");
                print_row(&rows[0]);
            }
        }

        Commands::Digital {
            quantity,
            sides,
            pieces_per_sheet,
            click_rate,
            paper_cost,
        } => {
            let job = press_costing::DigitalJob {
                quantity,
                sides: sides.into(),
                pieces_per_sheet,
                click_rate,
                paper_cost_per_sheet: paper_cost,
            };
            let quote = press_costing::digital_cost(&job)?;

            println!("Digital quote:");
            println!("  Sheets: {}", quote.sheets_required);
            println!("  Clicks: {}", quote.clicks);
            println!("  Click cost: {:.2}", quote.click_cost);
            println!("  Paper cost: {:.2}", quote.paper_cost);
            println!("  Total: {:.2}", quote.total);
        }
    }

    Ok(())
}
