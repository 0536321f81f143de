use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use position_sizer::config::Config;
use position_sizer::models::{FormField, SizingStrategy};
use position_sizer::report::ResultCard;

/// Size a trade from capital, risk and entry/stop/target prices.
///
/// Numbers are taken as typed; anything that does not read as a number
/// counts as zero.
#[derive(Debug, Parser)]
#[command(name = "position-sizer", version)]
struct Args {
    /// Instrument symbol (shown upper-cased)
    #[arg(long, default_value = "")]
    symbol: String,

    /// Total capital; falls back to DEFAULT_CAPITAL
    #[arg(long)]
    capital: Option<String>,

    /// Amount you accept losing; falls back to DEFAULT_RISK
    #[arg(long)]
    risk: Option<String>,

    /// Entry price
    #[arg(long, allow_hyphen_values = true)]
    entry: String,

    /// Stop-loss price
    #[arg(long, allow_hyphen_values = true)]
    sl: String,

    /// Take-profit price
    #[arg(long, allow_hyphen_values = true)]
    tp: String,

    /// absolute | signed; falls back to SIZING_STRATEGY
    #[arg(long)]
    strategy: Option<String>,

    /// Print the card as JSON
    #[arg(long)]
    json: bool,

    /// Write the card to OUTPUT_DIR
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    let cfg = Config::from_env();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    if let Some(err) = &cfg.strategy_error {
        warn!("SIZING_STRATEGY: {}; falling back to {}", err, cfg.strategy);
    }

    let strategy = match &args.strategy {
        Some(s) => s.parse::<SizingStrategy>()?,
        None => cfg.strategy,
    };

    let mut form = cfg.initial_form();
    if let Some(capital) = &args.capital {
        form = form.with(FormField::Capital, capital);
    }
    if let Some(risk) = &args.risk {
        form = form.with(FormField::Risk, risk);
    }
    let form = form.apply([
        (FormField::Symbol, args.symbol.as_str()),
        (FormField::Entry, args.entry.as_str()),
        (FormField::Sl, args.sl.as_str()),
        (FormField::Tp, args.tp.as_str()),
    ]);
    debug!("Form: {:?}", form);

    let card = ResultCard::new(&form, strategy, &cfg.number_format);
    info!(
        "Sized {} ({}): volume {:.4}, R:R {:.2}",
        if card.symbol.is_empty() { "-" } else { card.symbol.as_str() },
        strategy,
        card.metrics.volume,
        card.metrics.risk_reward_ratio
    );

    if args.json {
        println!("{}", card.to_json()?);
    } else {
        card.print_summary();
    }

    if args.save {
        let path = card
            .save(&cfg.output_dir)
            .with_context(|| format!("saving card to {}", cfg.output_dir))?;
        println!("\nCard saved to: {}", path.display());
    }

    Ok(())
}
