//! Repository Layer
//!
//! Data access abstraction and the in-memory implementation.

mod traits;
mod static_repo;

#[cfg(test)]
mod tests;

pub use traits::ResourceRepository;
pub use static_repo::StaticRepository;
