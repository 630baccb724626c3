use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use browser_state::config::Config;
use browser_state::logging::init_tracing;
use browser_state::reducer::BrowserStateReducer;
use browser_state::script::ActionScript;
use browser_state::state::BrowserState;
use browser_state::store::Store;

#[derive(Debug, Parser)]
#[command(name = "browser-state", version, about = "Replay browser state actions")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a TOML action script and print the resulting state as JSON
    Replay {
        script: PathBuf,
        /// Print only this tab's translations state
        #[arg(long)]
        tab: Option<String>,
        /// Print only the selected tab's translations state
        #[arg(long, conflicts_with = "tab")]
        selected: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.logging);

    match cli.command {
        Command::Replay {
            script,
            tab,
            selected,
        } => {
            let target = match (tab, selected) {
                (Some(tab_id), _) => Target::Tab(tab_id),
                (None, true) => Target::Selected,
                (None, false) => Target::State,
            };
            replay(&config, &script, &target)
        }
        Command::Config => {
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            print!("{}", rendered);
            Ok(())
        }
    }
}

/// What `replay` prints once the script has run.
#[derive(Debug)]
enum Target {
    State,
    Selected,
    Tab(String),
}

fn replay(config: &Config, script_path: &Path, target: &Target) -> Result<()> {
    let script = ActionScript::load(script_path)?;
    let store: Store<BrowserStateReducer> = Store::new(BrowserState::default());
    script.replay(&store, config.recently_closed.max_saved_tabs);

    let state = store.state();
    let rendered = match target {
        Target::Tab(tab_id) => {
            let tab = state
                .find_tab_or_custom_tab(tab_id)
                .with_context(|| format!("No tab with id '{}' after replay", tab_id))?;
            serde_json::to_string_pretty(&tab.translations_state)?
        }
        Target::Selected => {
            let tab = state.selected_tab().context("No tab selected after replay")?;
            serde_json::to_string_pretty(&tab.translations_state)?
        }
        Target::State => serde_json::to_string_pretty(&state)?,
    };
    println!("{}", rendered);
    Ok(())
}
