use std::{env, path::Path};

use anyhow::{Context, Result};

use super::super::{args::ExtractCommand, exit_status::ExitStatus, report};
use crate::config::{Config, load_config};
use crate::core::{
    Lexer, extract_files,
    file_scanner::{ScanFilter, scan_files, scan_paths},
};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let cwd = env::current_dir().context("Failed to resolve current directory.")?;
    let config = resolve_config(&cwd, &cmd)?;

    let filter = ScanFilter {
        includes: &config.includes,
        ignores: &config.ignores,
        extensions: &config.extensions,
    };
    let scan = if cmd.paths.is_empty() {
        scan_files(Path::new(&config.source_root), filter, verbose)
    } else {
        scan_paths(&cmd.paths, filter, verbose)
    };

    let lexer = Lexer::new(config.lexer.clone());
    let summary = extract_files(&lexer, &scan.files);
    report::print(&summary, cmd.format, verbose)?;

    if summary.read_errors.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}

/// Load the config file (or defaults) and apply command-line overrides.
fn resolve_config(start_dir: &Path, cmd: &ExtractCommand) -> Result<Config> {
    let mut config = load_config(start_dir)?.config;

    if let Some(attr) = &cmd.attr {
        config.lexer.attr = attr.clone();
    }
    if let Some(option_attr) = &cmd.option_attr {
        config.lexer.option_attr = option_attr.clone();
    }
    if let Some(source_root) = &cmd.common.source_root {
        config.source_root = source_root.to_string_lossy().into_owned();
    }

    config.validate()?;
    Ok(config)
}
