use chrono::{Duration, Utc};
use roomie_models::{
    domain::prelude::{NewCookieConsent, NewLead},
    entities::prelude::{AuthorActiveModel, AuthorModel, BlogPostActiveModel, SiteSettingActiveModel},
    enums::common::{LeadType, PostStatus},
    settings::{Db, Inner, Settings},
    DbManager,
};
use roomie_repository::{
    BlogPostRepository, CookieConsentRepository, LeadRepository, SiteSettingRepository,
};
use roomie_storage::SiteDbManager;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::json;

async fn memory_db() -> DatabaseConnection {
    let settings = Settings::from_inner(Inner {
        db: Db {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            ..Default::default()
        },
        ..Default::default()
    });
    SiteDbManager::init(&settings)
        .await
        .unwrap()
        .get_connection()
        .unwrap()
}

fn lead(lead_type: LeadType) -> NewLead {
    NewLead {
        lead_type,
        name: "Olena".into(),
        email: Some("olena@hotel.ua".into()),
        phone: None,
        role: None,
        property: None,
        property_size: None,
        comment: None,
        data_processing: true,
        marketing: false,
        language: "uk".into(),
        utm_source: None,
        utm_medium: None,
        utm_campaign: None,
        utm_term: None,
        utm_content: None,
        referrer: None,
        mailchimp_status: "pending".into(),
        created_at: Utc::now(),
    }
}

async fn author(db: &DatabaseConnection) -> AuthorModel {
    AuthorActiveModel {
        name: Set("Editor".into()),
        email: Set("editor@hotelmol.com".into()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn insert_post(
    db: &DatabaseConnection,
    slug: &str,
    status: PostStatus,
    published_days_ago: i64,
    author_id: i32,
) {
    BlogPostActiveModel {
        slug: Set(slug.into()),
        title_en: Set(format!("Post {slug}")),
        content_en: Set("Body".into()),
        status: Set(status),
        author_id: Set(author_id),
        published_at: Set(Some(Utc::now() - Duration::days(published_days_ago))),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

#[tokio::test]
async fn identical_leads_are_stored_twice() {
    let db = memory_db().await;
    let first = LeadRepository::create(lead(LeadType::Contact), &db).await.unwrap();
    let second = LeadRepository::create(lead(LeadType::Contact), &db).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(LeadRepository::count(&db).await.unwrap(), 2);

    let stored = LeadRepository::find_by_id(first.id, &db).await.unwrap().unwrap();
    assert_eq!(stored.lead_type, LeadType::Contact);
    assert_eq!(stored.language, "uk");
    assert_eq!(stored.mailchimp_status, "pending");
}

#[tokio::test]
async fn leads_filter_by_type() {
    let db = memory_db().await;
    LeadRepository::create(lead(LeadType::Roi), &db).await.unwrap();
    LeadRepository::create(lead(LeadType::Demo), &db).await.unwrap();

    let roi = LeadRepository::find_by_type(LeadType::Roi, &db).await.unwrap();
    assert_eq!(roi.len(), 1);
    assert_eq!(roi[0].lead_type, LeadType::Roi);
}

#[tokio::test]
async fn consent_categories_round_trip() {
    let db = memory_db().await;
    let categories = json!({ "necessary": true, "analytics": false, "marketing": true });
    let consent = NewCookieConsent {
        language: Some("pl".into()),
        categories: categories.clone(),
    }
    .into_record(Some("f".repeat(64)), Some("Mozilla/5.0".into()));

    let saved = CookieConsentRepository::create(consent, &db).await.unwrap();
    let loaded = CookieConsentRepository::find_by_id(saved.id, &db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.categories, categories);
    assert_eq!(loaded.language, "pl");
    assert_eq!(loaded.user_agent.as_deref(), Some("Mozilla/5.0"));
}

#[tokio::test]
async fn blog_flag_reads_seeded_value() {
    let db = memory_db().await;
    assert!(!SiteSettingRepository::is_enabled("blogEnabled", &db).await.unwrap());
    assert!(!SiteSettingRepository::is_enabled("missing", &db).await.unwrap());

    SiteSettingActiveModel {
        key: Set("blogEnabled".into()),
        value: Set("true".into()),
        updated_at: Set(Some(Utc::now())),
    }
    .update(&db)
    .await
    .unwrap();
    assert!(SiteSettingRepository::is_enabled("blogEnabled", &db).await.unwrap());
}

#[tokio::test]
async fn only_published_posts_are_listed_newest_first() {
    let db = memory_db().await;
    let author = author(&db).await;
    insert_post(&db, "older", PostStatus::Published, 5, author.id).await;
    insert_post(&db, "newer", PostStatus::Published, 1, author.id).await;
    insert_post(&db, "draft", PostStatus::Draft, 0, author.id).await;

    let posts = BlogPostRepository::find_published(&db).await.unwrap();
    let slugs: Vec<&str> = posts.iter().map(|(p, _)| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newer", "older"]);
    assert_eq!(posts[0].1.as_ref().map(|a| a.name.as_str()), Some("Editor"));

    assert!(BlogPostRepository::find_published_by_slug("draft", &db)
        .await
        .unwrap()
        .is_none());
    assert!(BlogPostRepository::find_published_by_slug("newer", &db)
        .await
        .unwrap()
        .is_some());
}
