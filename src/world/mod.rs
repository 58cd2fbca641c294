pub mod scene;

pub use scene::{Contact, HitTarget, Scene};
