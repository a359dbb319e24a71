use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The name `{}` already exists", .0)]
    DuplicateName(String),

    #[error("No shortcut named `{}`, type jr --help for help", .0)]
    NotFound(String),

    #[error("Cannot infer an interpreter for `{}`: unrecognized file extension", .file)]
    UnresolvableInterpreter { file: String },

    #[error("Working directory `{}` does not exist", .path.display())]
    WorkdirMissing { path: PathBuf },

    #[error("Could not open shortcut database at `{}`: {}", .path.display(), .reason)]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("Database error: {}", .0)]
    Database(#[from] rusqlite::Error),

    #[error("Invalid name: name may not be empty")]
    EmptyName,

    #[error("Invalid name `{}`: name may not contain whitespace", .0)]
    NameWithWhitespace(String),

    #[error("Invalid name `{}`: reserved by the jr command line", .0)]
    ReservedName(String),

    #[error("Command may not be empty")]
    EmptyCommand,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error with sub process: {}", .0)]
    SubProcess(#[from] std::io::Error),
}

impl Error {
    pub fn unresolvable_interpreter(file: impl Into<String>) -> Self {
        Self::UnresolvableInterpreter { file: file.into() }
    }

    pub fn workdir_missing(path: impl Into<PathBuf>) -> Self {
        Self::WorkdirMissing { path: path.into() }
    }

    pub fn storage_unavailable(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether this error aborts the invocation before any action could run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}
