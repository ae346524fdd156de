mod body;
pub use body::*;
mod bounds;
pub use bounds::*;
mod collision;
pub use collision::*;
mod config;
pub use config::*;
mod physics_utils;
pub use physics_utils::*;
mod shape;
pub use shape::*;
mod spawn;
pub use spawn::*;
mod world_state;
pub use world_state::*;

pub(crate) fn default<T: Default>() -> T {
    T::default()
}
