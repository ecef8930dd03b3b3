//! Console presentation adapter.
//!
//! Each subcommand is one short session: the session gate is started from
//! the profile store, the command drives it, and the resulting screen state
//! is written as text. The binary delegates here so commands can be
//! exercised in tests without spawning a process.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{LogFormat, StorefrontSettings};
use crate::domain::ports::{MenuSource, ProfileStore};
use crate::domain::{CatalogFilter, Category, Destination, Feedback, SessionGate};
use crate::outbound::{FileProfileStore, JsonMenuSource};

mod error;
mod render;

pub use error::CliError;
pub use render::{
    EMPTY_MENU_MESSAGE, render_categories, render_failure, render_menu, render_profile,
};

/// Little Lemon storefront.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", version, about)]
pub struct Cli {
    /// Directory holding the stored profile.
    #[arg(long, global = true, value_name = "DIR")]
    pub profile_dir: Option<PathBuf>,
    /// Menu document to serve instead of the bundled menu.
    #[arg(long, global = true, value_name = "PATH")]
    pub menu_path: Option<PathBuf>,
    /// Log output format: text or json.
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Layer this invocation's flags over `settings`.
    pub fn apply_to(&self, settings: StorefrontSettings) -> StorefrontSettings {
        settings.with_overrides(
            self.profile_dir.clone(),
            self.menu_path.clone(),
            self.log_format,
        )
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the screen a new session opens on.
    Start,
    /// Show the menu, optionally filtered.
    Menu {
        /// Case-insensitive text matched against item titles.
        #[arg(long)]
        search: Option<String>,
        /// Category button to press; repeat to press several in order.
        #[arg(long = "toggle", value_name = "CATEGORY")]
        toggles: Vec<Category>,
    },
    /// Submit the onboarding form.
    Register {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Open the profile screen and show the stored details.
    Profile,
    /// Open the profile screen and log out.
    Logout,
}

/// Run `cli` against the file profile store and configured menu.
///
/// # Errors
/// Returns [`CliError`] when settings are invalid, a port fails, the session
/// gate rejects the request, or output cannot be written.
pub fn run(
    cli: &Cli,
    settings: &StorefrontSettings,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let store = FileProfileStore::open(settings.profile_dir()?)?;
    let menu = settings
        .menu_path()?
        .map_or_else(JsonMenuSource::bundled, JsonMenuSource::from_path);
    execute(&cli.command, store, &menu, out)
}

/// Run `command` against explicit ports.
pub fn execute<S, M>(
    command: &Command,
    store: S,
    menu: &M,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: ProfileStore,
    M: MenuSource + ?Sized,
{
    debug!(?command, "running command");
    match command {
        Command::Start => {
            let gate = SessionGate::start(store)?;
            writeln!(out, "Destination: {}", gate.current_destination())?;
        }
        Command::Menu { search, toggles } => {
            show_menu(menu, search.as_deref(), toggles, out)?;
        }
        Command::Register {
            first_name,
            last_name,
            email,
        } => {
            let mut gate = SessionGate::start(store)?;
            let destination = gate.register(first_name, last_name, email)?;
            writeln!(out, "{}", Feedback::registration_succeeded())?;
            writeln!(out, "Destination: {destination}")?;
        }
        Command::Profile => {
            let mut gate = SessionGate::start(store)?;
            gate.navigate(Destination::Profile)?;
            render_profile(out, gate.stored_profile()?.as_ref())?;
        }
        Command::Logout => {
            let mut gate = SessionGate::start(store)?;
            gate.navigate(Destination::Profile)?;
            let destination = gate.navigate(Destination::Onboarding)?;
            writeln!(out, "Destination: {destination}")?;
        }
    }
    Ok(())
}

fn show_menu<M>(
    menu: &M,
    search: Option<&str>,
    toggles: &[Category],
    out: &mut impl Write,
) -> Result<(), CliError>
where
    M: MenuSource + ?Sized,
{
    let records = menu.load_menu()?;
    let mut filter = CatalogFilter::new();
    if let Some(phrase) = search {
        filter.set_search_phrase(phrase);
    }
    for category in toggles {
        filter.toggle_category(*category);
    }

    render_categories(out, filter.query())?;
    render_menu(out, &filter.visible_items(&records))?;
    Ok(())
}
