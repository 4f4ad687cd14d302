// UI Components
// Reusable pieces shared by the pages

pub mod icons;
pub mod site_footer;

pub use site_footer::SiteFooter;
