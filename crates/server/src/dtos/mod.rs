pub mod course;
pub mod enrollment;
pub mod period;
pub mod quiz;
pub mod recommendation;
pub mod resource;
pub mod semester;
pub mod student;
