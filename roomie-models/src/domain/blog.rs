use crate::{
    entities::{author::Model as AuthorModel, blog_post::Model as BlogPostModel},
    enums::common::Language,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `?lang=` on the blog endpoints; unknown or missing tags mean English.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogQuery {
    pub lang: Option<String>,
}

impl BlogQuery {
    #[inline]
    pub fn language(&self) -> Language {
        self.lang
            .as_deref()
            .map(Language::from_tag)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorInfo {
    pub name: String,
}

impl From<AuthorModel> for AuthorInfo {
    fn from(author: AuthorModel) -> Self {
        Self { name: author.name }
    }
}

/// List entry, localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostSummary {
    pub slug: String,
    pub title: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<AuthorInfo>,
}

impl BlogPostSummary {
    pub fn localize(post: &BlogPostModel, author: Option<AuthorModel>, lang: Language) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title(lang).to_string(),
            seo_title: post.seo_title(lang).map(str::to_string),
            seo_description: post.seo_description(lang).map(str::to_string),
            published_at: post.published_at,
            author: author.map(AuthorInfo::from),
        }
    }
}

/// Single post, localized, with its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub summary: BlogPostSummary,
    pub content: String,
}

impl BlogPostDetail {
    pub fn localize(post: &BlogPostModel, author: Option<AuthorModel>, lang: Language) -> Self {
        Self {
            summary: BlogPostSummary::localize(post, author, lang),
            content: post.content(lang).to_string(),
        }
    }
}
