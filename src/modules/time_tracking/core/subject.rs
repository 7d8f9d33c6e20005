use crate::modules::access_control::core::scope::Module;
use serde::{Deserialize, Serialize};

/// What a control record tracks time for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Case,
    Todo,
}

impl SubjectKind {
    /// Permission module guarding records of this kind.
    pub fn module(self) -> Module {
        match self {
            SubjectKind::Case => Module::Cases,
            SubjectKind::Todo => Module::Todos,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubjectKind::Case => "case",
            SubjectKind::Todo => "todo",
        }
    }
}
