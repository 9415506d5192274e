//! Shared chrome for every public render: navigation, client logos and the
//! flattened settings map.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::application::repos::{ClientLogoRepo, NavLinkRepo};
use crate::application::settings_cache::{SettingsCache, SettingsMap};
use crate::domain::entities::ClientLogoRecord;
use crate::domain::navigation::{build_nav_tree, NavNode};

#[derive(Debug, Clone)]
pub struct SiteChrome {
    pub nav: Vec<NavNode>,
    pub footer_logos: Vec<ClientLogoRecord>,
    pub settings: SettingsMap,
}

pub struct ChromeService {
    nav_links: Arc<dyn NavLinkRepo>,
    logos: Arc<dyn ClientLogoRepo>,
    settings: Arc<SettingsCache>,
}

impl ChromeService {
    pub fn new(
        nav_links: Arc<dyn NavLinkRepo>,
        logos: Arc<dyn ClientLogoRepo>,
        settings: Arc<SettingsCache>,
    ) -> Self {
        Self {
            nav_links,
            logos,
            settings,
        }
    }

    pub async fn load(&self) -> Result<SiteChrome, AppError> {
        let links = self.nav_links.list().await?;
        let nav = build_nav_tree(links);
        let footer_logos = self.logos.list_active().await?;
        let settings = self.settings.get().await?;
        Ok(SiteChrome {
            nav,
            footer_logos,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::FakeStore;
    use crate::application::repos::NavLinkUpsertParams;

    #[tokio::test]
    async fn load_builds_tree_and_settings_snapshot() {
        let store = FakeStore::seeded();
        let nav_links = store.nav_links();
        let parent = nav_links
            .create(NavLinkUpsertParams {
                label: "Services".to_string(),
                url: "/services".to_string(),
                parent_id: None,
                sort_order: 1,
                is_visible: true,
                open_new_tab: false,
            })
            .await
            .unwrap();
        nav_links
            .create(NavLinkUpsertParams {
                label: "Web".to_string(),
                url: "/services#web".to_string(),
                parent_id: Some(parent.id),
                sort_order: 2,
                is_visible: true,
                open_new_tab: false,
            })
            .await
            .unwrap();

        let settings = Arc::new(SettingsCache::new(store.settings()));
        settings
            .save(&[("site_name".to_string(), "Vetrina".to_string())])
            .await
            .unwrap();

        let service = ChromeService::new(store.nav_links(), store.logos(), settings);
        let chrome = service.load().await.unwrap();
        assert_eq!(chrome.nav.len(), 1);
        assert_eq!(chrome.nav[0].children.len(), 1);
        assert_eq!(
            chrome.settings.get("site_name").map(String::as_str),
            Some("Vetrina")
        );
    }
}
