mod configure;
mod export;
mod theme;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use std::path::PathBuf;

use base::setting::{get_settings, load, print, SETTINGS};
use base::CLI_NAME;

#[derive(Parser)]
#[command(name = CLI_NAME, author, version, about, long_about = None)]
#[command(next_line_help = true)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a single release page and send it to the server
    Release(ExportOptions),
    /// Extract every Bandcamp release on a chart page and send them
    Chart(ExportOptions),
    /// Print the URL of a neighbouring chart week
    Week(WeekOptions),
    /// Print the current configuration in TOML
    Config,
    /// Set the server URL and token
    Configure(ConfigureOptions),
}

#[derive(Parser)]
pub struct ExportOptions {
    #[arg(name = "SOURCE", help = "Saved HTML file or page URL")]
    source: String,

    /// Catalog URL of the page, when the source does not tell
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Print the JSON payload instead of sending it
    #[arg(short, long)]
    dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Next,
    Prev,
}

#[derive(Parser)]
struct WeekOptions {
    #[arg(value_enum)]
    direction: Direction,

    #[arg(name = "URL", help = "Chart URL with a date range segment")]
    url: String,

    #[arg(short, long, default_value_t = 1)]
    weeks: u32,
}

#[derive(Parser)]
pub struct ConfigureOptions {
    #[arg(short, long, value_name = "URL")]
    server_url: Option<String>,

    #[arg(short, long, value_name = "TOKEN")]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    theme::init_logger();

    let cli = Cli::parse();
    match cli.command {
        Command::Configure(opts) => configure::configure(opts, cli.config),
        Command::Week(opts) => {
            let weeks = i64::from(opts.weeks);
            let weeks = match opts.direction {
                Direction::Next => weeks,
                Direction::Prev => -weeks,
            };
            println!("{}", common::range::week_url(opts.url.as_str(), weeks)?);
            Ok(())
        }
        command => {
            // settings
            SETTINGS.get_or_try_init(async { load(cli.config) }).await?;
            let settings = get_settings()?;

            match command {
                Command::Config => {
                    print!("{}", print(settings)?);
                    Ok(())
                }
                Command::Release(opts) => export::release(settings, opts).await,
                Command::Chart(opts) => export::chart(settings, opts).await,
                Command::Week(_) | Command::Configure(_) => unreachable!(),
            }
        }
    }
}
