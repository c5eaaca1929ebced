// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Configs | query commands
//! ```
//!
//! Exit status: 0 success or yes, 1 no, 2 error.

use std::process::ExitCode;

use repoq::cli::global::GlobalOptions;
use repoq::cli::{self, Command};
use repoq::cmd::config::{run_configs_command, run_options_command};
use repoq::cmd::query::{build_shell, run_query_command};
use repoq::config::loader::ConfigLoader;
use repoq::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use repoq::git::Git;
use repoq::logging::init_logging;
use repoq::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::from(EXIT_ERROR);
    };

    if matches!(command, Command::Version) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if matches!(command, Command::Configs) {
        run_configs_command(&loader.format_loaded_files());
        return ExitCode::SUCCESS;
    }

    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    dispatch_command(command, &config, cli.global.json)
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    // -l already landed in config.global through the override layer
    let console_level = LogLevel::from_verbosity(config.global.log_level, global.verbose);
    let file_level = config.global.file_log_level.unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(command: &Command, config: &Config, json: bool) -> ExitCode {
    if matches!(command, Command::Options) {
        run_options_command(config);
        return ExitCode::SUCCESS;
    }

    let shell = build_shell(config);
    let git = Git::new(&shell).with_program(config.git.program.clone());

    match run_query_command(command, &git) {
        Ok(answer) => {
            println!("{}", answer.render(json));
            ExitCode::from(answer.exit_status())
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> repoq::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    global.apply_overrides(loader.with_env_prefix(ENV_PREFIX))
}
