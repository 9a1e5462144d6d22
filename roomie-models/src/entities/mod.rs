pub mod author;
pub mod blog_post;
pub mod cookie_consent;
pub mod lead_submission;
pub mod site_setting;

pub mod prelude {
    pub use super::author::{
        ActiveModel as AuthorActiveModel, Column as AuthorColumn, Entity as Author,
        Model as AuthorModel,
    };
    pub use super::blog_post::{
        ActiveModel as BlogPostActiveModel, Column as BlogPostColumn, Entity as BlogPost,
        Model as BlogPostModel,
    };
    pub use super::cookie_consent::{
        ActiveModel as CookieConsentActiveModel, Column as CookieConsentColumn,
        Entity as CookieConsent, Model as CookieConsentModel,
    };
    pub use super::lead_submission::{
        ActiveModel as LeadSubmissionActiveModel, Column as LeadSubmissionColumn,
        Entity as LeadSubmission, Model as LeadSubmissionModel,
    };
    pub use super::site_setting::{
        ActiveModel as SiteSettingActiveModel, Column as SiteSettingColumn,
        Entity as SiteSetting, Model as SiteSettingModel,
    };
}
