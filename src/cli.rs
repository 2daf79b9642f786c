//! Command-line interface
//!
//! Subcommands for the onboarding flow on a terminal:
//! - Run the interactive wizard
//! - Show the dashboard or the current status
//! - Reset the stored profile
//! - Inspect and change theme preferences

use anyhow::bail;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{generate_default_config, Config, ConfigError};
use crate::dashboard::DashboardModel;
use crate::profile::Field;
use crate::store::FileStore;
use crate::terminal::{write_dashboard, write_theme, PromptOutcome, Prompter};
use crate::theme::{ThemePreference, ThemeStyle};
use crate::validation::validate;
use crate::wizard::{OnboardingWizard, Stage};

#[derive(Parser, Debug)]
#[command(name = "onboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Multi-step onboarding wizard with a profile dashboard")]
pub struct Cli {
    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: platform config dir, then ./onboard.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the store file
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the onboarding wizard, then show the dashboard
    Run,

    /// Show the dashboard for a completed profile
    Dashboard,

    /// Show onboarding progress and theme preference
    Status,

    /// Forget the stored profile and start over
    Reset,

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Check a single field value
    Validate {
        /// Field name (name, email, company, industry, size, theme, layout)
        field: String,
        /// Value to check
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print a default configuration file
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the preference and resolved tokens
    Show,
    /// Switch between light and dark mode
    Toggle,
    /// Set the style (modern, classic, minimal)
    Style { name: String },
}

impl Cli {
    /// Resolve the configuration this invocation should use
    ///
    /// An explicit `--config` must load. Default locations that fail to load
    /// are skipped and returned alongside the config so they can be logged
    /// once logging is up.
    pub fn load_config(&self) -> anyhow::Result<(Config, Vec<ConfigError>)> {
        let (mut config, skipped) = match &self.config {
            Some(path) => (Config::load_with_env(path)?, Vec::new()),
            None => Config::load_default(),
        };
        if let Some(data_dir) = &self.data_dir {
            config.store.data_dir = data_dir.clone();
        }
        Ok((config, skipped))
    }
}

/// Execute a parsed command against the configured store
pub fn execute(command: Commands, config: &Config) -> anyhow::Result<()> {
    let store = FileStore::open(config.store.path());
    tracing::debug!(path = ?store.path(), "Using store");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Run => {
            let mut wizard = OnboardingWizard::new(store);

            if wizard.is_completed() {
                writeln!(out, "Onboarding already completed (run `onboard reset` to start over).")?;
            } else {
                let stdin = io::stdin();
                let mut prompter = Prompter::new(stdin.lock(), &mut out);
                if prompter.run(&mut wizard)? == PromptOutcome::Aborted {
                    writeln!(out)?;
                    writeln!(out, "Onboarding not finished; nothing was saved.")?;
                    return Ok(());
                }
            }

            let preference = ThemePreference::load(wizard.store(), config.theme.preference());
            write_dashboard(&mut out, &DashboardModel::new(wizard.profile(), preference.dark_mode))?;
        }

        Commands::Dashboard => {
            let wizard = OnboardingWizard::new(store);
            if !wizard.is_completed() {
                writeln!(out, "No completed profile yet. Run `onboard run` first.")?;
                return Ok(());
            }

            let preference = ThemePreference::load(wizard.store(), config.theme.preference());
            write_dashboard(&mut out, &DashboardModel::new(wizard.profile(), preference.dark_mode))?;
        }

        Commands::Status => {
            let wizard = OnboardingWizard::new(store);
            match wizard.stage() {
                Stage::Completed => {
                    writeln!(out, "Onboarding: completed")?;
                    let profile = wizard.profile();
                    for field in Field::ALL {
                        writeln!(out, "  {:<14} {}", field.key(), profile.get(field))?;
                    }
                }
                Stage::Step(_) => writeln!(out, "Onboarding: not completed")?,
            }

            let preference = ThemePreference::load(wizard.store(), config.theme.preference());
            let mode = if preference.dark_mode { "dark" } else { "light" };
            writeln!(out, "Theme: {} ({})", preference.style, mode)?;
        }

        Commands::Reset => {
            let mut wizard = OnboardingWizard::new(store);
            wizard.reset();
            writeln!(out, "Profile cleared.")?;
        }

        Commands::Theme { action } => {
            let mut store = store;
            let mut preference = ThemePreference::load(&store, config.theme.preference());

            match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => {}
                ThemeAction::Toggle => {
                    preference.toggle_dark();
                    preference.save(&mut store)?;
                }
                ThemeAction::Style { name } => {
                    let normalized = name.trim().to_ascii_lowercase();
                    let style = ThemeStyle::from_name(&normalized);
                    if style.as_str() != normalized {
                        writeln!(out, "Unknown style {name:?}; using {style}.")?;
                    }
                    preference.set_style(style);
                    preference.save(&mut store)?;
                }
            }

            write_theme(&mut out, &preference)?;
        }

        Commands::Validate { field, value } => {
            let field: Field = field.trim().to_ascii_lowercase().parse()?;
            match validate(field, &value) {
                None => writeln!(out, "{field}: valid")?,
                Some(message) => bail!("{field}: {message}"),
            }
        }

        Commands::Config => {
            write!(out, "{}", generate_default_config())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_run() {
        let cli = Cli::parse_from(["onboard"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_theme_style() {
        let cli = Cli::parse_from(["onboard", "theme", "style", "classic", "--data-dir", "/tmp/x"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Theme { action: Some(ThemeAction::Style { ref name }) }) if name == "classic"
        ));
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/x"));
    }

    #[test]
    fn test_parse_validate_allows_empty_value() {
        let cli = Cli::parse_from(["onboard", "validate", "name", ""]);
        assert!(matches!(
            cli.command,
            Some(Commands::Validate { ref field, ref value }) if field == "name" && value.is_empty()
        ));
    }

    #[test]
    fn test_explicit_config_must_load() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[store\n").unwrap();

        let cli = Cli::parse_from(["onboard", "--config", bad.to_str().unwrap(), "status"]);
        let err = cli.load_config().unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Parse { .. })));

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[store]\ndata_dir = \"/tmp/onboard-a\"\n").unwrap();
        let cli = Cli::parse_from([
            "onboard",
            "--config",
            good.to_str().unwrap(),
            "--data-dir",
            "/tmp/onboard-b",
            "status",
        ]);
        let (config, skipped) = cli.load_config().unwrap();
        assert!(skipped.is_empty());
        assert_eq!(config.store.data_dir, "/tmp/onboard-b");
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
