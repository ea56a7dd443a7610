use anyhow::Context;
use blackjack::{Rule, Session, Table};
use blackjack_drivers::console;
use blackjack_drivers::{parse_config_from_file, Config};
use clap::Parser;

const DEFAULT_CONFIG_PATH: &str = "~/.blackjack.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,
}

/// Loads the config. The game must run out of the box, so a missing
/// file at the default path just means default table rules.
fn load_config(args: &CommandLineArgs) -> anyhow::Result<Config> {
    if args.config != DEFAULT_CONFIG_PATH {
        return parse_config_from_file(&args.config)
            .with_context(|| format!("cannot read config file {}", args.config));
    }

    let home_dir = home::home_dir().context("cannot find home directory")?;
    let config_file_path = home_dir.join(".blackjack.yml");
    if !config_file_path.exists() {
        return Ok(Config::default());
    }
    if config_file_path.is_dir() {
        anyhow::bail!("{} should be a file, not a directory", config_file_path.display());
    }
    parse_config_from_file(config_file_path.to_str().context("non-utf8 home path")?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CommandLineArgs::parse();
    let config = load_config(&args)?;
    let rule: Rule = config.table.try_into()?;
    let mut session = Session::new(config.session.starting_balance);
    tracing::info!(?rule, balance = session.balance(), "session starting");

    println!("🎲 Welcome to Blackjack 🎲");
    while !session.is_broke() {
        println!("\n💰 Current balance: ${}", session.balance());
        let Some(bet) = console::request_bet(&session) else {
            break;
        };

        let mut table = Table::new(&rule);
        let summary = table.play_round(
            bet,
            &mut console::ConsolePlayer,
            &mut console::ConsoleHandler,
        )?;
        session.apply(&summary);
        tracing::info!(
            outcome = ?summary.outcome,
            bet = summary.bet,
            delta = summary.delta,
            balance = session.balance(),
            "round settled"
        );

        if session.is_broke() {
            println!("💀 You're out of money!");
            break;
        }
        if !console::request_continue() {
            break;
        }
    }

    console::show_final_report(&session);
    Ok(())
}
