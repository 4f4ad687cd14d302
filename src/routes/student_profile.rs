use dioxus::prelude::*;

use crate::components::icons::{BriefcaseIcon, GraduationCapIcon, UserIcon};
use crate::components::SiteFooter;
use crate::context::page_context::{NavigationLink, PageContext};
use crate::hooks::use_student_profile;
use crate::services::student_profile::ProfileRecord;
use crate::utils::ViewState;

/// Route entry point: `/student-profile/:id`
#[component]
pub fn StudentProfileView(id: String) -> Element {
    rsx! {
        ProfileView { context: PageContext::new(id) }
    }
}

/// Loads the profile named by the context and renders whichever state it is in
#[component]
pub fn ProfileView(context: PageContext) -> Element {
    let profile = use_student_profile(context.identifier.clone());

    rsx! {
        ProfileStateView {
            state: profile(),
            links: context.navigation_links.clone(),
        }
    }
}

/// Render a profile state; nothing here touches the network
#[component]
pub fn ProfileStateView(state: ViewState<ProfileRecord>, links: Vec<NavigationLink>) -> Element {
    match state {
        ViewState::Loading => rsx! { ProfileLoading {} },
        ViewState::NotFound => rsx! { ProfileNotFound {} },
        ViewState::Loaded(profile) => rsx! { ProfileDetails { profile, links } },
    }
}

#[component]
fn ProfileLoading() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center",
            role: "status",
            aria_busy: "true",
            div { class: "animate-spin rounded-full h-32 w-32 border-b-2 border-blue-600" }
            span { class: "sr-only", "Loading..." }
        }
    }
}

#[component]
fn ProfileNotFound() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center",
            div {
                class: "text-center",
                h2 {
                    class: "text-2xl font-bold text-gray-900 mb-2",
                    "Profile not found"
                }
                p {
                    class: "text-gray-600",
                    "There was an error loading this profile."
                }
            }
        }
    }
}

#[component]
fn ProfileDetails(profile: ProfileRecord, links: Vec<NavigationLink>) -> Element {
    let full_name = profile.full_name();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 py-8",
            div {
                class: "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",

                    // Header
                    div {
                        class: "bg-gradient-to-r from-blue-600 to-purple-600 px-6 py-8",
                        div {
                            class: "flex items-center space-x-4",
                            div {
                                class: "bg-white rounded-full p-3",
                                UserIcon { class: "h-8 w-8 text-blue-600" }
                            }
                            div {
                                class: "text-white",
                                h1 { class: "text-2xl font-bold", "{full_name}" }
                                p { class: "text-blue-100", "{profile.university}" }
                            }
                        }
                    }

                    div {
                        class: "p-6",
                        ProfileSection {
                            title: "Qualifications",
                            text: profile.qualifications_text().to_string(),
                            icon: rsx! { GraduationCapIcon { class: "h-5 w-5 mr-2 text-blue-600" } },
                        }
                        ProfileSection {
                            title: "Experience",
                            text: profile.experience_text().to_string(),
                            icon: rsx! { BriefcaseIcon { class: "h-5 w-5 mr-2 text-blue-600" } },
                        }
                    }
                }
            }

            SiteFooter { links }
        }
    }
}

#[component]
fn ProfileSection(title: String, text: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "mb-8 last:mb-0",
            h2 {
                class: "text-xl font-semibold text-gray-900 mb-4 flex items-center",
                {icon}
                "{title}"
            }
            div {
                class: "bg-gray-50 rounded-lg p-4",
                p { class: "text-gray-700", "{text}" }
            }
        }
    }
}
