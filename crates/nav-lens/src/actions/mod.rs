mod descriptor;
mod dispatch;
mod host;
mod jump_args;

pub use descriptor::{ActionDescriptor, NAVIGATION_ACTIONS, action_ids, find_action};
pub use dispatch::{ActionDispatcher, DispatchOutcome};
pub use host::{DocumentHandle, NavigationHost};
pub use jump_args::{JumpArgs, JumpArgsError};
