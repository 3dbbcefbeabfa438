pub mod site_footer;
pub mod site_header;

pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
