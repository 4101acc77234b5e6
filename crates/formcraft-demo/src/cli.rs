#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `FORMCRAFT_DEMO_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;

use formcraft::ThemePreset;

use crate::sample::SampleForm;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
formcraft demo: render a sample form to HTML

USAGE:
    formcraft-demo [OPTIONS]

OPTIONS:
    --form=NAME          Sample form: 'signup' (default), 'contact', or 'kitchen-sink'
    --theme=NAME         Force a theme preset: 'bootstrap5' or 'tailwind'
    --value=NAME=VALUE   Submitted value; repeat for several fields
    --validate           Validate even when no values are given
    --sequential-ids     Use id_1, id_2, ... instead of random IDs
    --output=PATH        Write HTML to PATH instead of stdout
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    FORMCRAFT_DEMO_FORM            Override --form
    FORMCRAFT_DEMO_THEME           Override --theme
    FORMCRAFT_DEMO_SEQUENTIAL_IDS  Set to 1 for --sequential-ids
    FORMCRAFT_THEME                Default theme preset when --theme is absent
    FORMCRAFT_THEME_FILE           JSON theme file used as the default theme
    FORMCRAFT_REQUIRED_MARKER      Replace the required-field marker
    FORMCRAFT_ERROR_CLASSES        Set to 0 to render errors unstyled
    RUST_LOG                       Log filter (logs go to stderr)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub form: SampleForm,
    /// Forced preset; `None` uses the configured default theme.
    pub theme: Option<ThemePreset>,
    /// Submitted `(name, value)` pairs in argument order.
    pub values: Vec<(String, String)>,
    pub validate: bool,
    pub sequential_ids: bool,
    pub output: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            form: SampleForm::Signup,
            theme: None,
            values: Vec::new(),
            validate: false,
            sequential_ids: false,
            output: None,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse process arguments and environment, exiting on `--help`,
    /// `--version`, or invalid input.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("formcraft-demo {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with environment lookups through `get`.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse_from<I, F>(args: I, mut get: F) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
        F: FnMut(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get("FORMCRAFT_DEMO_FORM")
            && let Some(form) = SampleForm::parse(&val)
        {
            opts.form = form;
        }
        if let Some(val) = get("FORMCRAFT_DEMO_THEME")
            && let Some(preset) = ThemePreset::parse(&val)
        {
            opts.theme = Some(preset);
        }
        if let Some(val) = get("FORMCRAFT_DEMO_SEQUENTIAL_IDS") {
            opts.sequential_ids = matches!(val.trim(), "1" | "true" | "yes" | "on");
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--validate" => opts.validate = true,
                "--sequential-ids" => opts.sequential_ids = true,
                other => {
                    if let Some(val) = other.strip_prefix("--form=") {
                        opts.form = SampleForm::parse(val)
                            .ok_or_else(|| format!("Invalid --form value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--theme=") {
                        opts.theme = Some(
                            ThemePreset::parse(val)
                                .ok_or_else(|| format!("Invalid --theme value: {val}"))?,
                        );
                    } else if let Some(val) = other.strip_prefix("--value=") {
                        let (name, value) = val
                            .split_once('=')
                            .ok_or_else(|| format!("Invalid --value (expected NAME=VALUE): {val}"))?;
                        opts.values.push((name.to_owned(), value.to_owned()));
                    } else if let Some(val) = other.strip_prefix("--output=") {
                        opts.output = Some(PathBuf::from(val));
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}
