pub mod academic_record;
pub mod course;
pub mod course_enrollment;
pub mod learning_recommendation;
pub mod learning_resource;
pub mod period;
pub mod quiz;
pub mod quiz_attempt;
pub mod resource_interaction;
pub mod semester;
pub mod student_profile;
