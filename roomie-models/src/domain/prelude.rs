pub use crate::domain::{
    blog::{AuthorInfo, BlogPostDetail, BlogPostSummary, BlogQuery},
    consent::{NewCookieConsent, NewCookieConsentRecord},
    lead::{
        LeadExtras, LeadForm, NewConsultationLead, NewContactLead, NewDemoLead,
        NewIntegrationLead, NewLead, NewRoiLead,
    },
    llm::{ChatMessage, ChatRequest, ChatRole, PromptRequest, PromptResponse},
    setting::{NewSiteSetting, SettingInfo},
};
