use crate::domain::site::{site_config, SiteConfig};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/site",
    responses(
        (status = 200, description = "Static site metadata", body = SiteConfig)
    )
)]
pub async fn site_handler() -> Json<&'static SiteConfig> {
    Json(site_config())
}
