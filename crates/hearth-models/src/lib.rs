//! Domain model types for hearth.
//!
//! Every model carries the [`BaseModel`] audit core (id plus creation/update
//! timestamps) and implements the [`hearth_types::Model`] contract, so the
//! storage engine can hold any of them behind the same type-erased view.
//!
//! [`known_types`] builds the table the engine needs to reconstruct records
//! on load. The application entry point builds it once and hands it to the
//! store it constructs:
//!
//! ```
//! use hearth_models::known_types;
//!
//! let types = known_types();
//! assert!(types.contains("Place"));
//! ```

pub mod amenity;
pub mod base;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use amenity::Amenity;
pub use base::BaseModel;
pub use city::City;
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;

use hearth_types::TypeRegistry;

/// The known-type table covering every model type that can appear in a
/// persisted document.
pub fn known_types() -> TypeRegistry {
    let mut types = TypeRegistry::new();
    types.register::<BaseModel>();
    types.register::<User>();
    types.register::<State>();
    types.register::<City>();
    types.register::<Amenity>();
    types.register::<Place>();
    types.register::<Review>();
    types
}
