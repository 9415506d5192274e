//! Dashboard counters shown on the admin landing page.

use std::sync::Arc;

use serde::Serialize;

use crate::application::error::AppError;
use crate::application::repos::{BlogPostRepo, ContactRepo, MediaRepo, PageRepo};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardCounts {
    pub pages: i64,
    pub posts: i64,
    pub published_posts: i64,
    pub media_items: i64,
    pub new_contacts: i64,
}

pub struct DashboardService {
    pages: Arc<dyn PageRepo>,
    posts: Arc<dyn BlogPostRepo>,
    media: Arc<dyn MediaRepo>,
    contacts: Arc<dyn ContactRepo>,
}

impl DashboardService {
    pub fn new(
        pages: Arc<dyn PageRepo>,
        posts: Arc<dyn BlogPostRepo>,
        media: Arc<dyn MediaRepo>,
        contacts: Arc<dyn ContactRepo>,
    ) -> Self {
        Self {
            pages,
            posts,
            media,
            contacts,
        }
    }

    pub async fn counts(&self) -> Result<DashboardCounts, AppError> {
        let (pages, posts, published_posts, media_items, new_contacts) = tokio::try_join!(
            self.pages.count(),
            self.posts.count(),
            self.posts.count_published(None),
            self.media.count(),
            self.contacts.count_with_status("new"),
        )?;
        Ok(DashboardCounts {
            pages,
            posts,
            published_posts,
            media_items,
            new_contacts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::FakeStore;

    #[tokio::test]
    async fn counts_reflect_the_seeded_store() {
        let store = FakeStore::seeded();
        let service = DashboardService::new(
            store.pages(),
            store.posts(),
            store.media(),
            store.contacts(),
        );
        let counts = service.counts().await.unwrap();
        assert_eq!(counts.pages, 2);
        assert_eq!(counts.posts, 6);
        assert_eq!(counts.published_posts, 5);
        assert_eq!(counts.media_items, 0);
        assert_eq!(counts.new_contacts, 0);
    }
}
