pub mod ball;

pub use ball::Ball;
