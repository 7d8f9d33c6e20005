use crate::modules::access_control::core::scope::Grant;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait AccessDirectory: Send + Sync {
    /// Grants of every role held by the user.
    async fn grants_for(&self, user_id: &str) -> anyhow::Result<Vec<Grant>>;

    /// Users sharing at least one team with the user, the user included.
    async fn teammates_of(&self, user_id: &str) -> anyhow::Result<HashSet<String>>;
}
