use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("descriptor parse error at byte {position}: {message}")]
    DescriptorParse { position: usize, message: String },

    #[error("unmatched '{opener}' at byte {position}")]
    UnmatchedBracket { position: usize, opener: char },

    #[error("descriptor contains no layout node")]
    EmptyDescriptor,

    #[error("cannot distribute size among {count} children")]
    ImbalancedResize { count: usize },

    #[error("pane {pane} is not a direct child of the container")]
    PaneNotInContainer { pane: u32 },
}

impl LayoutError {
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        LayoutError::DescriptorParse {
            position,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {code:?}: {stderr}")]
    Status {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("unexpected output from `{command}`: {output:?}")]
    UnexpectedOutput { command: String, output: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("could not determine config directory")]
    NoConfigDir,
}

#[derive(Debug, thiserror::Error)]
pub enum EvenpaneError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
