//! Planet-position provider abstraction (§4.6, C6): a uniform capability
//! returning barycentric ICRF position (meters) for a named body at a JD,
//! with three implementations of differing fidelity and cost.

pub mod container;
pub mod error;
pub mod keplerian;
pub mod null;
pub mod provider;

pub use container::{ContainerProvider, METERS_PER_AU};
pub use error::ProviderError;
pub use keplerian::KeplerianProvider;
pub use null::NullProvider;
pub use provider::PositionProvider;
