pub mod burst;
pub mod falling;
