use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use agency_estimator::catalog::{Amount, Catalog, FormType};
use agency_estimator::config::load_or_default;
use agency_estimator::leads::{ContactDetails, HttpLeadSink, OutputAction};
use agency_estimator::observability::init_logging;
use agency_estimator::presentation::{Calculator, Phase, Projection};
use agency_estimator::selection::SelectionSnapshot;

#[derive(Parser)]
#[command(name = "estimator-cli")]
#[command(about = "Price agency projects and submit quotes as leads", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the priced options of a form
    Catalog { form: FormType },
    /// Compute a quote for a selection
    Quote {
        form: FormType,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Compute a quote and submit it as a lead
    Submit {
        form: FormType,
        #[command(flatten)]
        selection: SelectionArgs,
        /// download, email or discuss
        #[arg(long)]
        action: OutputAction,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        message: Option<String>,
        /// Overrides `submission.endpoint` from the config.
        #[arg(long)]
        endpoint: Option<String>,
        /// Attempts before giving up.
        #[arg(long, default_value_t = 1)]
        attempts: u32,
    },
}

#[derive(Args)]
struct SelectionArgs {
    /// Base option id.
    #[arg(long)]
    base: Option<String>,
    /// Timeline option id.
    #[arg(long)]
    timeline: Option<String>,
    /// Add-on or design service id (repeatable).
    #[arg(long = "addon")]
    addons: Vec<String>,
}

impl From<SelectionArgs> for SelectionSnapshot {
    fn from(args: SelectionArgs) -> Self {
        SelectionSnapshot {
            base: args.base,
            timeline: args.timeline,
            addons: args.addons,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_or_default(cli.config.as_deref())?;
    if cli.config.is_none() {
        config.observability.log_level = "warn".to_string();
    }
    init_logging(&config.observability);

    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Catalog { form } => {
            let groups = catalog.grouped(form);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for group in groups {
                    println!("{}", group.category);
                    for option in group.options {
                        let price = match option.amount {
                            Amount::Dollars(d) => format!("${d}"),
                            Amount::Multiplier(m) => m.to_string(),
                        };
                        println!("  {:<24} {:<30} {:>8}", option.id, option.label, price);
                    }
                }
            }
        }
        Commands::Quote { form, selection } => {
            let calculator = Calculator::from_snapshot(form, catalog, &selection.into())?;
            print_projection(calculator.projection(), cli.json)?;
        }
        Commands::Submit {
            form,
            selection,
            action,
            name,
            email,
            phone,
            company,
            message,
            endpoint,
            attempts,
        } => {
            let mut calculator = Calculator::from_snapshot(form, catalog, &selection.into())?;
            print_projection(calculator.projection(), cli.json)?;
            calculator.begin_submission(action)?;

            let mut submission = config.submission.clone();
            if let Some(endpoint) = endpoint {
                submission.endpoint = endpoint;
            }
            let sink = HttpLeadSink::from_config(&submission)?;
            let contact = ContactDetails {
                name,
                email,
                phone,
                company,
                message,
            };

            let attempts = attempts.max(1);
            for attempt in 1..=attempts {
                match calculator.submit(&sink, contact.clone()).await {
                    Ok(()) => break,
                    Err(e) if e.is_retryable() && attempt < attempts => {
                        eprintln!("Attempt {attempt}/{attempts} failed: {e}; retrying");
                    }
                    Err(e) => {
                        eprintln!("Error: {e}");
                        break;
                    }
                }
            }

            if calculator.phase() == Phase::Submitted {
                println!("Submitted {} request to {}", action, sink.endpoint());
            } else {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_projection(projection: &Projection, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(projection)?);
        return Ok(());
    }

    let quote = &projection.quote;
    println!("Form:       {}", projection.form);
    println!("Base:       ${}", quote.base_amount);
    println!("Timeline:   {}", quote.timeline_multiplier);
    println!("Add-ons:    ${}", quote.addon_total);
    println!("Total:      {}", projection.display_total);
    for block in &projection.breakdown {
        println!();
        println!("{}", block.title);
        for bullet in block.bullets {
            println!("  - {bullet}");
        }
    }
    Ok(())
}
