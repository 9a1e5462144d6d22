pub mod blog_post;
pub mod cookie_consent;
pub mod lead;
pub mod site_setting;

pub use blog_post::BlogPostRepository;
pub use cookie_consent::CookieConsentRepository;
pub use lead::LeadRepository;
pub use site_setting::SiteSettingRepository;
