mod cli;

use std::process::ExitCode;

use evenpane_config::{EvenpaneConfig, DEFAULT_LOG_LEVEL};
use evenpane_layout::{execute, RebalanceOutcome, RecordingGateway, TmuxGateway};
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `RUST_LOG` plus `directive`.
///
/// Returns the directive's parse error, if any, so it can be logged once
/// the subscriber exists.
fn init_logging(directive: &str) -> Option<String> {
    let mut filter = EnvFilter::from_default_env();
    let mut invalid = None;
    match directive.parse() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => {
            invalid = Some(format!("invalid log directive '{directive}': {e}"));
            if let Ok(d) = DEFAULT_LOG_LEVEL.parse() {
                filter = filter.add_directive(d);
            }
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    invalid
}

fn build_gateway(config: &EvenpaneConfig) -> TmuxGateway {
    let mut tmux = TmuxGateway::new(config.tmux.binary.clone());
    if let Some(name) = config.tmux.socket_name() {
        tmux = tmux.with_socket_name(name);
    }
    match std::env::current_dir() {
        Ok(dir) => tmux = tmux.with_start_directory(dir),
        Err(e) => tracing::warn!("Failed to read working directory, tmux picks one: {e}"),
    }
    tmux
}

fn run(args: &cli::Args, config: &EvenpaneConfig) -> evenpane_common::Result<RebalanceOutcome> {
    let tmux = build_gateway(config);

    if !args.dry_run {
        let mut gateway = tmux;
        return execute(args.operation, &mut gateway);
    }

    let mut gateway = RecordingGateway::over(Box::new(tmux));
    let outcome = execute(args.operation, &mut gateway)?;
    for instruction in gateway.instructions() {
        let line = serde_json::to_string(instruction).map_err(std::io::Error::from)?;
        println!("{line}");
    }
    Ok(outcome)
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so it can choose the log filter; its errors are
    // reported once logging is up.
    let (config, config_error) = match evenpane_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (EvenpaneConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    if let Some(msg) = init_logging(directive) {
        tracing::warn!("{msg}");
    }

    if let Some(e) = config_error {
        if args.config.is_some() {
            tracing::error!("Config load failed: {e}");
            eprintln!("evenpane: {e}");
            return ExitCode::FAILURE;
        }
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    tracing::debug!(
        "evenpane v{} running '{}'{}",
        env!("CARGO_PKG_VERSION"),
        args.operation,
        if args.dry_run { " (dry run)" } else { "" }
    );

    match run(&args, &config) {
        Ok(RebalanceOutcome::Rebalanced { resized }) => {
            tracing::info!("Rebalanced {resized} pane(s)");
            ExitCode::SUCCESS
        }
        Ok(RebalanceOutcome::Unchanged) => {
            tracing::info!("Nothing to rebalance");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("evenpane: {e}");
            ExitCode::FAILURE
        }
    }
}
