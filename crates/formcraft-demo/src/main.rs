#![forbid(unsafe_code)]

//! formcraft demo binary.
//!
//! Builds one of the sample forms, optionally validates submitted values so
//! inline errors show, and writes the HTML to stdout or a file.

mod cli;
mod sample;

use std::collections::HashMap;
use std::io::Write;
use std::process::ExitCode;

use formcraft::{SequentialIds, StyleConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = cli::Opts::parse();
    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &cli::Opts) -> formcraft::Result<()> {
    let default = StyleConfig::from_env().apply()?;
    tracing::debug!(form = opts.form.name(), group = %default.form_group_class, "rendering sample");

    let mut form = opts.form.build();
    if let Some(preset) = opts.theme {
        form = form.with_theme(preset.theme());
    }
    if opts.sequential_ids {
        form = form.with_id_generator(SequentialIds::default());
    }

    if opts.validate || !opts.values.is_empty() {
        let values: HashMap<String, String> = opts.values.iter().cloned().collect();
        let errors = form.validate(&values);
        for error in &errors {
            tracing::info!(field = %error.field, code = error.code, "{}", error.message);
        }
        eprintln!("{} validation error(s)", errors.len());
    }

    let html = form.to_html();
    match &opts.output {
        Some(path) => std::fs::write(path, html.as_bytes())?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
