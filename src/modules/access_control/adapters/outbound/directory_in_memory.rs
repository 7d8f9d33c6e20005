use crate::modules::access_control::adapters::outbound::directory::AccessDirectory;
use crate::modules::access_control::core::policy::AccessPolicy;
use crate::modules::access_control::core::scope::Grant;
use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAccessDirectory {
    policy: RwLock<AccessPolicy>,
    is_offline: bool,
}

impl InMemoryAccessDirectory {
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            policy: RwLock::new(policy),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn replace_policy(&self, policy: AccessPolicy) {
        *self.policy.write().await = policy;
    }
}

#[async_trait::async_trait]
impl AccessDirectory for InMemoryAccessDirectory {
    async fn grants_for(&self, user_id: &str) -> anyhow::Result<Vec<Grant>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Access directory offline"));
        }
        let policy = self.policy.read().await;
        let roles: Vec<&String> = match policy.users.get(user_id) {
            Some(roles) => roles.iter().collect(),
            None => policy.default_role.iter().collect(),
        };
        Ok(roles
            .into_iter()
            .filter_map(|role| policy.roles.get(role))
            .flatten()
            .cloned()
            .collect())
    }

    async fn teammates_of(&self, user_id: &str) -> anyhow::Result<HashSet<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Access directory offline"));
        }
        let policy = self.policy.read().await;
        let mut teammates: HashSet<String> = policy
            .teams
            .values()
            .filter(|members| members.iter().any(|member| member == user_id))
            .flatten()
            .cloned()
            .collect();
        teammates.insert(user_id.to_string());
        Ok(teammates)
    }
}
