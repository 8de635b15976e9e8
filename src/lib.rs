pub mod matrix;
pub mod uniform;
pub mod vector;

pub use matrix::Matrix;
pub use vector::{Vec3f, Vec4f};
