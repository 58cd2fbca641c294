pub mod intersection;
pub mod response;
pub mod sat;

pub use intersection::IntersectionData;
pub use response::resolve;
pub use sat::CollisionTester;
