//! Askama view models and render helpers.

use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::application::blog::{BlogDetail, BlogIndex};
use crate::application::chrome::SiteChrome;
use crate::application::error::{ErrorReport, HttpError};
use crate::application::home::HomeContext;
use crate::application::resolver::PageContext;
use crate::domain::entities::{
    BlogPostRecord, CategoryRecord, ClientLogoRecord, ContactSubmissionRecord, HeroBannerRecord,
    MediaRecord, NavLinkRecord, PageRecord,
};
use crate::domain::home::HomeSectionView;
use crate::domain::navigation::NavNode;
use crate::domain::video::OgVideo;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    source_tag: &'static str,
    public_message: &'static str,
    #[source]
    error: AskamaError,
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        HttpError::from_error(
            err.source_tag,
            StatusCode::INTERNAL_SERVER_ERROR,
            err.public_message,
            &err.error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError {
            source_tag: "presentation::views::render_template",
            public_message: "Template rendering failed",
            error: err,
        }
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn render_not_found_response(chrome: LayoutChrome) -> Response {
    let mut response =
        render_template_response(NotFoundTemplate { chrome }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}

#[derive(Clone)]
pub struct SiteView {
    pub name: String,
    pub tagline: String,
    pub footer_text: String,
    pub logo_url: String,
    pub base_url: String,
}

#[derive(Clone)]
pub struct NavChildView {
    pub label: String,
    pub href: String,
    pub new_tab: bool,
}

#[derive(Clone)]
pub struct NavItemView {
    pub label: String,
    pub href: String,
    pub new_tab: bool,
    pub children: Vec<NavChildView>,
}

impl From<NavNode> for NavItemView {
    fn from(node: NavNode) -> Self {
        let children = node
            .children
            .into_iter()
            .map(|child| NavChildView {
                label: child.label,
                href: child.url,
                new_tab: child.open_new_tab,
            })
            .collect();
        Self {
            label: node.link.label,
            href: node.link.url,
            new_tab: node.link.open_new_tab,
            children,
        }
    }
}

#[derive(Clone)]
pub struct MetaView {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og_image: String,
    pub og_video: Option<OgVideo>,
}

/// Everything the base layout needs, shared by all public templates.
#[derive(Clone)]
pub struct LayoutChrome {
    pub site: SiteView,
    pub navigation: Vec<NavItemView>,
    pub logos: Vec<ClientLogoRecord>,
    pub meta: MetaView,
}

impl LayoutChrome {
    pub fn from_chrome(chrome: SiteChrome, base_url: &str) -> Self {
        let get = |key: &str| chrome.settings.get(key).cloned().unwrap_or_default();
        let site = SiteView {
            name: chrome
                .settings
                .get("site_name")
                .cloned()
                .unwrap_or_else(|| "Vetrina".to_string()),
            tagline: get("tagline"),
            footer_text: get("footer_text"),
            logo_url: get("logo_url"),
            base_url: base_url.trim_end_matches('/').to_string(),
        };
        let navigation = chrome.nav.into_iter().map(NavItemView::from).collect();
        let meta = MetaView {
            title: site.name.clone(),
            description: site.tagline.clone(),
            canonical: format!("{}/", site.base_url),
            og_image: String::new(),
            og_video: None,
        };
        Self {
            site,
            navigation,
            logos: chrome.footer_logos,
            meta,
        }
    }

    pub fn with_meta(
        mut self,
        title: &str,
        description: &str,
        path: &str,
        og_video: Option<OgVideo>,
    ) -> Self {
        self.meta = MetaView {
            title: if title.is_empty() {
                self.site.name.clone()
            } else {
                format!("{} | {}", title, self.site.name)
            },
            description: description.to_string(),
            canonical: format!("{}{}", self.site.base_url, path),
            og_image: self.meta.og_image,
            og_video,
        };
        self
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: LayoutChrome,
    pub home: HomeContext,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub chrome: LayoutChrome,
    pub context: PageContext,
}

#[derive(Template)]
#[template(path = "blog_index.html")]
pub struct BlogIndexTemplate {
    pub chrome: LayoutChrome,
    pub index: BlogIndex,
}

#[derive(Template)]
#[template(path = "blog_post.html")]
pub struct BlogPostTemplate {
    pub chrome: LayoutChrome,
    pub detail: BlogDetail,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub chrome: LayoutChrome,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: bool,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub counts: crate::application::admin::dashboard::DashboardCounts,
}

#[derive(Template)]
#[template(path = "admin/pages.html")]
pub struct AdminPagesTemplate {
    pub pages: Vec<PageRecord>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/page_form.html")]
pub struct AdminPageFormTemplate {
    pub page: Option<PageRecord>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/builder.html")]
pub struct AdminBuilderTemplate {
    pub page: PageRecord,
}

#[derive(Template)]
#[template(path = "admin/home_sections.html")]
pub struct AdminHomeSectionsTemplate {
    pub sections: Vec<HomeSectionView>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/posts.html")]
pub struct AdminPostsTemplate {
    pub posts: Vec<BlogPostRecord>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/post_form.html")]
pub struct AdminPostFormTemplate {
    pub post: Option<BlogPostRecord>,
    pub categories: Vec<CategoryRecord>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/categories.html")]
pub struct AdminCategoriesTemplate {
    pub portfolio: Vec<CategoryRecord>,
    pub blog: Vec<CategoryRecord>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/navigation.html")]
pub struct AdminNavigationTemplate {
    pub links: Vec<NavLinkRecord>,
    pub logos: Vec<ClientLogoRecord>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/media.html")]
pub struct AdminMediaTemplate {
    pub items: Vec<MediaRecord>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/banners.html")]
pub struct AdminBannersTemplate {
    pub page: PageRecord,
    pub banners: Vec<HeroBannerRecord>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/settings.html")]
pub struct AdminSettingsTemplate {
    pub entries: Vec<(String, String)>,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "admin/contacts.html")]
pub struct AdminContactsTemplate {
    pub submissions: Vec<ContactSubmissionRecord>,
}
