//! promptcraft: preview, normalize and theme shell prompt configurations.
//!
//! ```text
//! promptcraft preview starship.toml --theme "Tokyo Night"
//! promptcraft preview starship.toml --set 'git_branch.$branch=feature/x'
//! promptcraft normalize starship.toml > starship.normalized.toml
//! promptcraft palette gruvbox-dark-hard.yaml >> starship.toml
//! ```

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use promptcraft_render::ansi::ColorChoice;

/// Shell prompt configuration toolkit
#[derive(Parser, Debug)]
#[command(name = "promptcraft")]
#[command(version)]
#[command(about = "Preview, normalize and theme shell prompt configurations")]
struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// When to emit terminal colors
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, global = true)]
    color: ColorArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a configuration with sample data
    Preview {
        /// Configuration file to render
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Built-in theme name (case-insensitive)
        #[arg(long, value_name = "NAME", conflicts_with = "theme_file")]
        theme: Option<String>,

        /// Base16/Base24 YAML theme to render with
        #[arg(long, value_name = "FILE")]
        theme_file: Option<PathBuf>,

        /// Override a sample variable, e.g. 'directory.$path=~/src'
        #[arg(long = "set", value_name = "MODULE.$VAR=VALUE")]
        set: Vec<String>,
    },

    /// Parse a configuration and print it back in canonical form
    Normalize {
        /// Configuration file to normalize
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },

    /// Print a configuration fragment embedding a theme as a palette
    Palette {
        /// Base16/Base24 YAML theme
        #[arg(value_name = "THEME")]
        theme: PathBuf,
    },

    /// List built-in themes and modules
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);
    tracing::debug!(command = ?cli.command, "starting");

    let output = match cli.command {
        Command::Preview {
            config,
            theme,
            theme_file,
            set,
        } => {
            let theme = commands::ThemeSource::from_args(theme, theme_file);
            commands::preview(&config, &theme, &set, cli.color.into())?
        }
        Command::Normalize { config } => commands::normalize(&config)?,
        Command::Palette { theme } => commands::palette(&theme)?,
        Command::List => commands::list(),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
