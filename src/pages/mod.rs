//! Screens
//!
//! One component per route.

mod home;
mod locker;
mod map;

pub use home::HomePage;
pub use locker::LockerPage;
pub use map::MapPage;
