//! Domain types and models

pub mod device;
pub mod location;
pub mod point;
pub mod request;
pub mod token;

pub use device::Device;
pub use location::Location;
pub use point::{Point, PointHistory};
pub use request::{ApiRequest, EntityKind, Verb};
pub use token::AccessToken;
