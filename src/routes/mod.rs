use dioxus::prelude::*;

pub mod student_profile;

use student_profile::StudentProfileView;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/student-profile/:id")]
    StudentProfileView { id: String },
}
