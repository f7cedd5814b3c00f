mod coordinator;
mod trigger;

pub use coordinator::{RefreshCoordinator, RefreshListener, SubscriptionId};
pub use trigger::{EditEvent, is_qualifying_edit};
