mod active_check;
mod args;
mod common;
mod graphing;
mod invocation;
mod params;
mod rule_spec;

use crate::active_check::FTP_BENCHMARK;
use crate::common::secret::PasswordStore;
use anyhow::{Context, Result, bail};
use args::{Args, BuildArgs, Command, FormArgs, OutputFormat};
use clap::Parser;
use log::{info, warn};
use serde_json::Value;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const PASSWORD_STORE_ENV: &str = "FTPBENCH_PASSWORD_STORE";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let mut out = std::io::stdout().lock();

    match args.command.unwrap_or(Command::Build(BuildArgs::default())) {
        Command::Build(build_args) => {
            let env_store = std::env::var(PASSWORD_STORE_ENV).ok().map(PathBuf::from);
            run_build(
                &build_args,
                env_store,
                &mut std::io::stdin().lock(),
                &mut out,
            )
        }
        Command::Form(form_args) => run_form(&form_args, &mut out),
        Command::Metrics => {
            let catalog = graphing::ftp_benchmark();
            for (graph, line) in catalog.undeclared_lines() {
                warn!("graph {} plots undeclared metric {}", graph, line);
            }
            write_json(&mut out, &catalog)
        }
    }
}

/// Build the invocation from the parameter document and write it to `out`.
///
/// `env_store` is the password store path from the environment, used when
/// `--password-store` is not given.
fn run_build(
    args: &BuildArgs,
    env_store: Option<PathBuf>,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let raw = read_params(args.params.as_deref(), stdin)?;
    let store = match args.password_store.clone().or(env_store) {
        Some(path) => PasswordStore::from_file(&path)
            .with_context(|| format!("loading password store {}", path.display()))?,
        None => PasswordStore::default(),
    };

    for command in FTP_BENCHMARK.commands(&raw, &store)? {
        info!(
            "{}: {} arguments for '{}'",
            FTP_BENCHMARK.name,
            command.command_arguments.len(),
            command.service_description
        );
        let command = if args.redact {
            command.redacted()
        } else {
            command
        };
        match args.format {
            OutputFormat::Json => write_json(out, &command)?,
            OutputFormat::Lines => {
                if command.command_arguments.iter().any(|arg| arg.contains('\n')) {
                    bail!("an argument contains a line break, use --format json");
                }
                for arg in &command.command_arguments {
                    writeln!(out, "{arg}")?;
                }
            }
        }
    }
    Ok(())
}

fn run_form(args: &FormArgs, out: &mut impl Write) -> Result<()> {
    let spec = rule_spec::ftp_benchmark();
    if args.prefill {
        write_json(out, &spec.prefilled_params())
    } else {
        write_json(out, &spec)
    }
}

fn read_params(path: Option<&Path>, stdin: &mut impl Read) -> Result<Value> {
    let content = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading parameters {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .context("reading parameters from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&content).context("parameters are not valid JSON")
}

fn write_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
