//! Display-level branding data, fixed for the lifetime of the process.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct SiteLinks {
    #[schema(value_type = String)]
    pub twitter: &'static str,
    #[schema(value_type = String)]
    pub github: &'static str,
    #[schema(value_type = String)]
    pub discord: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct SiteConfig {
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
    #[schema(value_type = String)]
    pub url: &'static str,
    pub links: SiteLinks,
}

pub static SITE_CONFIG: SiteConfig = SiteConfig {
    name: "SBT Mint",
    description: "Mint soul-bound tokens for platform-managed smart accounts.",
    url: "https://sbtmint.app",
    links: SiteLinks {
        twitter: "https://twitter.com/sbtmint",
        github: "https://github.com/sbtmint",
        discord: "https://discord.gg/sbtmint",
    },
};

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}
