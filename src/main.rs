use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use setlistify::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Spotify API
    Auth,

    /// Build a playlist from a concert setlist
    Playlist,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Playlist => cli::playlist().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
