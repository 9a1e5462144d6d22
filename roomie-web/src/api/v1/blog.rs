//! Public blog endpoints, gated by the `blogEnabled` site setting.

use actix_web::web;
use roomie_common::AppContext;
use roomie_error::{web::WebError, WebResult};
use roomie_models::{
    constants::BLOG_ENABLED_SETTING,
    domain::prelude::{BlogPostDetail, BlogPostSummary, BlogQuery},
};
use roomie_repository::{BlogPostRepository, SiteSettingRepository};
use sea_orm::DatabaseConnection;
use tracing::error;

pub(super) const ROUTER_PREFIX: &str = "/blog";

/// Configure blog routes
///
/// # Routes
/// - GET `/posts`: Published posts, newest first
/// - GET `/posts/{slug}`: One published post with content
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts", web::get().to(list_posts))
        .route("/posts/{slug}", web::get().to(get_post));
}

async fn ensure_enabled(db: &DatabaseConnection) -> WebResult<()> {
    let enabled = SiteSettingRepository::is_enabled(BLOG_ENABLED_SETTING, db)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to read blog flag"))?;
    if enabled {
        Ok(())
    } else {
        Err(WebError::NotFound("blog".into()))
    }
}

async fn list_posts(
    ctx: web::Data<AppContext>,
    query: web::Query<BlogQuery>,
) -> WebResult<web::Json<Vec<BlogPostSummary>>> {
    let db = ctx.db()?;
    ensure_enabled(&db).await?;

    let lang = query.language();
    let posts = BlogPostRepository::find_published(&db)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to list blog posts"))?;
    Ok(web::Json(
        posts
            .into_iter()
            .map(|(post, author)| BlogPostSummary::localize(&post, author, lang))
            .collect(),
    ))
}

async fn get_post(
    ctx: web::Data<AppContext>,
    slug: web::Path<String>,
    query: web::Query<BlogQuery>,
) -> WebResult<web::Json<BlogPostDetail>> {
    let db = ctx.db()?;
    ensure_enabled(&db).await?;

    let (post, author) = BlogPostRepository::find_published_by_slug(&slug, &db)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to load blog post"))?
        .ok_or_else(|| WebError::NotFound(format!("blog post {slug}")))?;
    Ok(web::Json(BlogPostDetail::localize(
        &post,
        author,
        query.language(),
    )))
}
