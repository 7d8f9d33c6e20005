use crate::modules::access_control::adapters::outbound::directory::AccessDirectory;
use crate::modules::access_control::core::scope::{
    Action, Actor, Module, Permission, Scope, resolve_scope,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("no {action} permission on {module}")]
    NoGrant { module: Module, action: Action },

    #[error("{scope} scope does not cover records owned by {owner_id}")]
    OutOfScope { scope: Scope, owner_id: String },

    #[error("access directory unavailable: {0}")]
    Directory(String),
}

/// Capability check run at the top of every time-tracking operation.
pub struct Authorizer {
    directory: Arc<dyn AccessDirectory>,
}

impl Authorizer {
    pub fn new(directory: Arc<dyn AccessDirectory>) -> Self {
        Self { directory }
    }

    /// Succeeds with the scope that let `actor` act on a record owned by `owner_id`.
    pub async fn authorize(
        &self,
        actor: &Actor,
        permission: Permission,
        owner_id: &str,
    ) -> Result<Scope, AccessError> {
        let grants = self
            .directory
            .grants_for(&actor.user_id)
            .await
            .map_err(|e| AccessError::Directory(e.to_string()))?;
        let scope = resolve_scope(&grants, permission).ok_or(AccessError::NoGrant {
            module: permission.module,
            action: permission.action,
        })?;

        let allowed = match scope {
            Scope::All => true,
            Scope::Own => actor.user_id == owner_id,
            Scope::Team => {
                actor.user_id == owner_id
                    || self
                        .directory
                        .teammates_of(&actor.user_id)
                        .await
                        .map_err(|e| AccessError::Directory(e.to_string()))?
                        .contains(owner_id)
            }
        };
        debug!(
            user_id = %actor.user_id,
            module = %permission.module,
            action = %permission.action,
            %scope,
            owner_id,
            allowed,
            "authorization evaluated"
        );

        if allowed {
            Ok(scope)
        } else {
            Err(AccessError::OutOfScope {
                scope,
                owner_id: owner_id.to_string(),
            })
        }
    }
}
