use chrono::Datelike;
use dioxus::prelude::*;

use crate::context::page_context::NavigationLink;

pub const BRAND_NAME: &str = "JobPortal";
pub const SUPPORT_EMAIL: &str = "support@jobportal.com";
pub const SUPPORT_PHONE: &str = "+1 (123) 456-7890";

/// Resource pages that do not exist yet, rendered as inert links
const RESOURCE_LINKS: [&str; 3] = ["Help Center", "Privacy Policy", "Terms of Service"];

/// Copyright notice for the given year
pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND_NAME)
}

/// Static footer shown under a loaded profile
#[component]
pub fn SiteFooter(links: Vec<NavigationLink>) -> Element {
    let copyright = copyright_line(chrono::Local::now().year());

    rsx! {
        footer {
            class: "bg-white border-t border-gray-200 mt-12",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",
                div {
                    class: "grid grid-cols-1 md:grid-cols-4 gap-8",

                    // Brand
                    div {
                        h3 {
                            class: "text-lg font-semibold text-gray-900 mb-3",
                            "{BRAND_NAME}"
                        }
                        p {
                            class: "text-gray-600 text-sm",
                            "Empowering students and employers to connect and grow together."
                        }
                    }

                    div {
                        h4 {
                            class: "text-md font-semibold text-gray-900 mb-2",
                            "Quick Links"
                        }
                        ul {
                            class: "text-gray-600 text-sm space-y-1",
                            for link in links.iter() {
                                li {
                                    key: "{link.href}",
                                    a {
                                        href: "{link.href}",
                                        class: "hover:text-blue-600",
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 {
                            class: "text-md font-semibold text-gray-900 mb-2",
                            "Resources"
                        }
                        ul {
                            class: "text-gray-600 text-sm space-y-1",
                            for label in RESOURCE_LINKS {
                                li {
                                    key: "{label}",
                                    a {
                                        href: "#",
                                        class: "hover:text-blue-600",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 {
                            class: "text-md font-semibold text-gray-900 mb-2",
                            "Contact"
                        }
                        p {
                            class: "text-gray-600 text-sm",
                            "Email: {SUPPORT_EMAIL}"
                            br {}
                            "Phone: {SUPPORT_PHONE}"
                        }
                    }
                }

                div {
                    class: "mt-10 border-t border-gray-100 pt-6 text-center text-gray-500 text-sm",
                    "{copyright}"
                }
            }
        }
    }
}
