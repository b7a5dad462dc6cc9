//! Domain models with validation at construction
//!
//! Request arguments are parsed into these types before any storage call.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod id;
pub mod lookup;

pub use validation::ValidationError;
pub use id::RecordId;
pub use lookup::MenuItemLookup;
