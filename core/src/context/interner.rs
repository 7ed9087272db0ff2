use lasso::{Spur, ThreadedRodeo};
use std::sync::OnceLock;

/// Interned player name - 4 bytes and `Copy`, used as the map key for opponents.
pub type IStr = Spur;

/// Global name interner.
static INTERNER: OnceLock<ThreadedRodeo> = OnceLock::new();

/// Get the global interner (initializes on first call).
pub fn interner() -> &'static ThreadedRodeo {
    INTERNER.get_or_init(ThreadedRodeo::default)
}

/// Intern a name, returning a key.
pub fn intern(s: &str) -> IStr {
    interner().get_or_intern(s)
}

/// Resolve an interned key back to the name.
pub fn resolve(key: IStr) -> &'static str {
    interner().resolve(&key)
}
