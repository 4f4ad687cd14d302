//! Page Context
//!
//! Read-only inputs for a profile page: the identifier taken from the route
//! and the navigation links rendered in the footer. Passed in as props
//! instead of being looked up from the router inside the page.

/// A link shown in the footer's quick links
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationLink {
    pub label: String,
    pub href: String,
}

impl NavigationLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Quick links of the job portal
pub fn default_navigation_links() -> Vec<NavigationLink> {
    vec![
        NavigationLink::new("Jobs", "/jobs"),
        NavigationLink::new("Register", "/register"),
        NavigationLink::new("Login", "/login"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    /// Which profile to load; forwarded to the service as-is
    pub identifier: String,
    pub navigation_links: Vec<NavigationLink>,
}

impl PageContext {
    /// Context for `identifier` with the portal's default links
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            navigation_links: default_navigation_links(),
        }
    }
}
