use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an AST dump.
#[derive(Debug, Error)]
pub enum AstError {
    #[error("failed to read AST dump '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse AST dump '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
