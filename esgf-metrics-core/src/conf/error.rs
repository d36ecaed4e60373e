use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Pipeline settings
    //-------------------------------------------------------------------------
    #[error("invalid dedup window '{value}'")]
    InvalidDuration { value: String },

    #[error("invalid reference offset '{value}'")]
    InvalidOffset { value: String },

    #[error("invalid serving root '{root}': must start and end with '/'")]
    InvalidServingRoot { root: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Operator-facing advice for fixing the error, if there is any to give.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::ReadFile { .. } => Some(
                "Pass the config file explicitly with --config, or create\n\
                 config/esgf-metrics.hcl in the working directory.",
            ),

            ConfigError::Parse { .. } => Some(
                "The config file must be HCL with optional `logs` and `pipeline` blocks.\n\
                 \n\
                 Example:\n\
                 \n\
                 logs {\n  \
                   root    = \"access_logs\"\n  \
                   pattern = \"*/access_log*\"\n\
                 }",
            ),

            ConfigError::InvalidDuration { .. } => Some(
                "Durations are a whole number followed by a unit: s, m, h or d.\n\
                 \n\
                 Example:\n\
                 \n\
                 dedup_window = \"1d\"",
            ),

            ConfigError::InvalidOffset { .. } => Some(
                "Reference offsets are written as +HH:MM or -HH:MM, or \"UTC\".\n\
                 \n\
                 Example:\n\
                 \n\
                 reference_offset = \"-07:00\"",
            ),

            ConfigError::InvalidServingRoot { .. } => Some(
                "The serving root is the URL prefix under which files are served.\n\
                 \n\
                 Example:\n\
                 \n\
                 serving_root = \"/thredds/fileServer/user_pub_work/\"",
            ),
        }
    }
}
