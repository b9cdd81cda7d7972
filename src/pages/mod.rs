pub mod home;
pub mod layout;

pub use layout::SiteMetadata;
