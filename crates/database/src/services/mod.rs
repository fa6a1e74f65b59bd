pub mod course;
pub mod enrollment;
pub mod learning_resource;
pub mod period;
pub mod quiz;
pub mod quiz_attempt;
pub mod recommendation;
pub mod semester;
pub mod student_profile;
