mod play;
mod terminal;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use play::PlayArgs;
use sortvis_playback::Algorithm;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    /// Log more. Repeat for even more (-vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an array and watch an algorithm sort it
    Play(PlayArgs),

    /// List the algorithms that can be played
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.commands {
        Commands::Play(play_args) => play_args.run().await?,
        Commands::List => print_algorithms(),
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_algorithms() {
    for algorithm in Algorithm::ALL {
        let note = if algorithm.is_distribution() {
            " (non-negative input only)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<16} {}{}",
            algorithm.name().bold().green(),
            algorithm.complexity(),
            note
        );
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_play_arguments() {
    let cli = Cli::try_parse_from([
        "sortvis",
        "-vv",
        "play",
        "--algorithm",
        "cocktailShakerSort",
        "--condition",
        "reverse",
        "--size",
        "40",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    match cli.commands {
        Commands::Play(args) => {
            assert_eq!(args.algorithm, Algorithm::CocktailShaker);
            assert_eq!(args.size, 40);
        }
        Commands::List => panic!("expected the play command"),
    }
}

#[test]
fn rejects_unknown_algorithms() {
    assert!(Cli::try_parse_from(["sortvis", "play", "--algorithm", "bogo"]).is_err());
}
