pub mod actions;
pub mod document;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod refresh;
pub mod server;
pub mod symbols;

pub use actions::{ActionDescriptor, ActionDispatcher, DispatchOutcome, JumpArgs, NAVIGATION_ACTIONS, NavigationHost};
pub use error::{DispatchError, HostError, ResolveError};
pub use overlay::{AnchoredAction, HoverOverlay};
pub use refresh::RefreshCoordinator;
pub use server::{NavLensServer, ServerSettings};
pub use symbols::{FlatSymbol, SymbolIndex, SymbolResolver};
