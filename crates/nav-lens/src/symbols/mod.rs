mod flatten;
mod index;
mod resolver;

pub use flatten::{FlatSymbol, flatten_symbols};
pub use index::SymbolIndex;
pub use resolver::SymbolResolver;
