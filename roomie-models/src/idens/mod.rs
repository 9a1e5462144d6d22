pub mod author;
pub mod blog_post;
pub mod cookie_consent;
pub mod lead_submission;
pub mod site_setting;

const INIT_SYSTEM_ORDER: i32 = 0;

const INIT_CONTENT_ORDER: i32 = 10;
const INIT_AUTHOR_ORDER: i32 = INIT_CONTENT_ORDER + 1;
const INIT_BLOG_POST_ORDER: i32 = INIT_AUTHOR_ORDER + 1;

const INIT_INTAKE_ORDER: i32 = 100;
const INIT_LEAD_ORDER: i32 = INIT_INTAKE_ORDER + 1;
const INIT_CONSENT_ORDER: i32 = INIT_LEAD_ORDER + 1;
