use crate::shortcut::Target;

/// A fully parsed request, produced once by the command-line layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        name: String,
        command: String,
        dir: Option<String>,
    },
    Remove {
        target: Target,
    },
    Show {
        target: Target,
    },
    Rename {
        old: String,
        new: String,
    },
    Run {
        name: String,
    },
}
