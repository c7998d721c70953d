use std::path::PathBuf;

use clap::Parser;
use evenpane_layout::Operation;

/// Split or close a tmux pane and even out its siblings.
#[derive(Parser, Debug)]
#[command(name = "evenpane", version, about)]
pub struct Args {
    /// Operation: `x` closes the active pane, `v` splits side by side,
    /// `s` splits stacked.
    #[arg(value_parser = parse_operation)]
    pub operation: Operation,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override, as a tracing filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Query tmux and print the planned instructions without applying them.
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_operation(s: &str) -> Result<Operation, String> {
    s.parse()
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use evenpane_common::Orientation;

    #[test]
    fn positional_operation() {
        let args = Args::try_parse_from(["evenpane", "v"]).unwrap();
        assert_eq!(args.operation, Operation::Split(Orientation::Row));
        assert!(!args.dry_run);
        assert!(args.config.is_none());
    }

    #[test]
    fn flags_are_optional_extras() {
        let args = Args::try_parse_from([
            "evenpane",
            "--dry-run",
            "--log-level",
            "evenpane=debug",
            "--config",
            "/tmp/e.toml",
            "x",
        ])
        .unwrap();
        assert_eq!(args.operation, Operation::Close);
        assert!(args.dry_run);
        assert_eq!(args.log_level.as_deref(), Some("evenpane=debug"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/e.toml")));
    }

    #[test]
    fn unknown_operation_rejected() {
        assert!(Args::try_parse_from(["evenpane", "q"]).is_err());
        assert!(Args::try_parse_from(["evenpane"]).is_err());
    }
}
