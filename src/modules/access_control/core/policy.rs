// Declarative access policy: which roles hold which grants, which users hold
// which roles, and which users belong to which teams.

use crate::modules::access_control::core::scope::{Action, Grant, Module, Scope};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessPolicy {
    pub roles: HashMap<String, Vec<Grant>>,
    pub users: HashMap<String, Vec<String>>,
    pub teams: HashMap<String, Vec<String>>,
    /// Role applied to users absent from `users`.
    pub default_role: Option<String>,
}

impl AccessPolicy {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let policy: AccessPolicy = serde_json::from_str(raw)?;
        if let Some(role) = &policy.default_role {
            anyhow::ensure!(
                policy.roles.contains_key(role),
                "default role `{role}` is not defined"
            );
        }
        for (user, roles) in &policy.users {
            for role in roles {
                anyhow::ensure!(
                    policy.roles.contains_key(role),
                    "user `{user}` references undefined role `{role}`"
                );
            }
        }
        Ok(policy)
    }

    /// Every user may act on their own records, nothing more.
    pub fn own_records_only() -> Self {
        let grants = [Module::Cases, Module::Todos]
            .into_iter()
            .flat_map(|module| {
                [Action::Read, Action::Create, Action::Update, Action::Delete]
                    .into_iter()
                    .map(move |action| Grant {
                        module,
                        action,
                        scope: Scope::Own,
                    })
            })
            .collect();
        Self {
            roles: HashMap::from([("member".to_string(), grants)]),
            users: HashMap::new(),
            teams: HashMap::new(),
            default_role: Some("member".to_string()),
        }
    }
}
