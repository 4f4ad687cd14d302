pub mod use_student_profile;

pub use use_student_profile::use_student_profile;
