mod fallback_resolver;

pub use fallback_resolver::{LookupError, NameserverFallbackResolver, Resolution};
