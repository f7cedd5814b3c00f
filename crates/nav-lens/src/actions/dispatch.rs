use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use super::{ActionDescriptor, DocumentHandle, JumpArgs, JumpArgsError, NavigationHost};
use crate::error::DispatchError;

/// What happened to a navigation request that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The cursor was moved and the host action ran; carries the target.
    Completed(DocumentHandle),
    /// The payload was malformed and nothing was done.
    Abandoned(JumpArgsError),
}

/// Validates navigation payloads and drives the host through a jump.
#[derive(Clone)]
pub struct ActionDispatcher {
    host: Arc<dyn NavigationHost>,
}

impl ActionDispatcher {
    pub fn new(host: Arc<dyn NavigationHost>) -> Self {
        Self { host }
    }

    /// Open `location`, put the cursor at `row:col`, then run the action's
    /// host command.
    ///
    /// A malformed payload is logged and abandoned. Host failures are logged
    /// and returned.
    pub async fn dispatch(
        &self,
        raw_args: &Value,
        action: &ActionDescriptor,
    ) -> Result<DispatchOutcome, DispatchError> {
        let args = match JumpArgs::validate(raw_args) {
            Ok(args) => args,
            Err(reason) => {
                warn!(
                    "Invalid navigation args for {} ({}): {reason}; payload: {raw_args}",
                    action.action_id, action.host_action_id,
                );
                return Ok(DispatchOutcome::Abandoned(reason));
            },
        };

        info!("Executing {} at {}:{}:{}", action.host_action_id, args.location, args.row, args.col);
        match self.jump(&args, action).await {
            Ok(document) => {
                info!("Navigation command {} executed", action.host_action_id);
                Ok(DispatchOutcome::Completed(document))
            },
            Err(err) => {
                error!("Navigation command {} failed: {err}; payload: {raw_args}", action.action_id);
                Err(err)
            },
        }
    }

    async fn jump(
        &self,
        args: &JumpArgs,
        action: &ActionDescriptor,
    ) -> Result<DocumentHandle, DispatchError> {
        let document = self.host.open_document(&args.location).await.map_err(|source| DispatchError::Open {
            location: args.location.clone(),
            source,
        })?;

        self.host.show_at(&document, args.position()).await.map_err(|source| DispatchError::Show {
            location: args.location.clone(),
            source,
        })?;

        self.host.invoke_host_action(action.host_action_id).await.map_err(|source| DispatchError::Invoke {
            host_action: action.host_action_id.to_string(),
            source,
        })?;

        Ok(document)
    }
}

#[cfg(test)]
#[path = "../../tests/src/actions/dispatch_tests.rs"]
mod tests;
