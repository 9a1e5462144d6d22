//! `SeaORM` Entity for multilingual blog posts.
//!
//! Posts are written by editorial tooling; the site only reads published rows.

use crate::enums::common::{Language, PostStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_post")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title_en: String,
    pub title_uk: Option<String>,
    pub title_ru: Option<String>,
    pub title_pl: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content_en: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_uk: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_ru: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_pl: Option<String>,
    pub seo_title_en: Option<String>,
    pub seo_title_uk: Option<String>,
    pub seo_title_ru: Option<String>,
    pub seo_title_pl: Option<String>,
    pub seo_description_en: Option<String>,
    pub seo_description_uk: Option<String>,
    pub seo_description_ru: Option<String>,
    pub seo_description_pl: Option<String>,
    pub status: PostStatus,
    pub author_id: i32,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

impl Model {
    /// Title in `lang`, falling back to English when that translation is missing.
    pub fn title(&self, lang: Language) -> &str {
        pick(lang, &self.title_uk, &self.title_ru, &self.title_pl)
            .unwrap_or(self.title_en.as_str())
    }

    pub fn content(&self, lang: Language) -> &str {
        pick(lang, &self.content_uk, &self.content_ru, &self.content_pl)
            .unwrap_or(self.content_en.as_str())
    }

    pub fn seo_title(&self, lang: Language) -> Option<&str> {
        pick(lang, &self.seo_title_uk, &self.seo_title_ru, &self.seo_title_pl)
            .or(self.seo_title_en.as_deref())
    }

    pub fn seo_description(&self, lang: Language) -> Option<&str> {
        pick(
            lang,
            &self.seo_description_uk,
            &self.seo_description_ru,
            &self.seo_description_pl,
        )
        .or(self.seo_description_en.as_deref())
    }
}

fn pick<'a>(
    lang: Language,
    uk: &'a Option<String>,
    ru: &'a Option<String>,
    pl: &'a Option<String>,
) -> Option<&'a str> {
    let value = match lang {
        Language::En => return None,
        Language::Uk => uk,
        Language::Ru => ru,
        Language::Pl => pl,
    };
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Model {
        Model {
            id: 1,
            slug: "ai-concierge".into(),
            title_en: "AI concierge".into(),
            title_uk: Some("ШІ-консьєрж".into()),
            title_ru: None,
            title_pl: Some("  ".into()),
            content_en: "Body".into(),
            content_uk: None,
            content_ru: None,
            content_pl: None,
            seo_title_en: Some("SEO".into()),
            seo_title_uk: None,
            seo_title_ru: None,
            seo_title_pl: None,
            seo_description_en: None,
            seo_description_uk: None,
            seo_description_ru: None,
            seo_description_pl: None,
            status: PostStatus::Published,
            author_id: 1,
            published_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn localized_fields_fall_back_to_english() {
        let post = post();
        assert_eq!(post.title(Language::Uk), "ШІ-консьєрж");
        assert_eq!(post.title(Language::Ru), "AI concierge");
        // blank translations count as missing
        assert_eq!(post.title(Language::Pl), "AI concierge");
        assert_eq!(post.content(Language::Uk), "Body");
        assert_eq!(post.seo_title(Language::Uk), Some("SEO"));
        assert_eq!(post.seo_description(Language::En), None);
    }
}
