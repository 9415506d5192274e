use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;

use time::macros::datetime;
use uuid::Uuid;
use vetrina::application::blog::{BlogDetail, BlogIndex};
use vetrina::application::chrome::SiteChrome;
use vetrina::application::home::HomeContext;
use vetrina::application::resolver::PageContext;
use vetrina::domain::entities::{
    BlogPostRecord, CategoryRecord, ClientLogoRecord, HeroBannerRecord, HomeSectionRecord,
    NavLinkRecord, PageRecord, SectionRecord,
};
use vetrina::domain::home::HomeSectionView;
use vetrina::domain::navigation::NavNode;
use vetrina::domain::types::{CategoryKind, PageTemplate, PostStatus};
use vetrina::presentation::views::{
    BlogIndexTemplate, BlogPostTemplate, HomeTemplate, LayoutChrome, NotFoundTemplate,
    PageTemplate as PageTemplateView, render_template,
};

fn sample_chrome() -> LayoutChrome {
    let mut settings = HashMap::new();
    settings.insert("site_name".to_string(), "Studio Nord".to_string());
    settings.insert("tagline".to_string(), "Design that ships".to_string());
    settings.insert("footer_text".to_string(), "All rights reserved".to_string());

    let chrome = SiteChrome {
        nav: vec![NavNode {
            link: NavLinkRecord {
                id: Uuid::new_v4(),
                label: "Work".to_string(),
                url: "/work".to_string(),
                parent_id: None,
                sort_order: 1,
                is_visible: true,
                open_new_tab: false,
            },
            children: vec![],
        }],
        footer_logos: vec![ClientLogoRecord {
            id: Uuid::new_v4(),
            name: "Acme".to_string(),
            image_url: "/uploads/acme.svg".to_string(),
            website_url: String::new(),
            sort_order: 1,
            is_active: true,
        }],
        settings: Arc::new(settings),
    };
    LayoutChrome::from_chrome(chrome, "https://studionord.example")
}

fn sample_page(slug: &str) -> PageRecord {
    PageRecord {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: "About us".to_string(),
        meta_description: "Who we are".to_string(),
        hero_title: "We build brands".to_string(),
        hero_subtitle: "From strategy to launch".to_string(),
        hero_label: "Agency".to_string(),
        nav_order: 1,
        is_visible: true,
        template: PageTemplate::Default,
        schema_type: String::new(),
        schema_json: String::new(),
        faq_json: String::new(),
        page_blocks: "[]".to_string(),
        updated_at: datetime!(2026-01-10 12:00 UTC),
    }
}

fn sample_post(slug: &str, title: &str) -> BlogPostRecord {
    BlogPostRecord {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: "A short excerpt".to_string(),
        content_html: "<p>Body copy</p>".to_string(),
        featured_image: String::new(),
        featured_image_alt: String::new(),
        category: "Design".to_string(),
        tags: String::new(),
        meta_title: String::new(),
        meta_description: String::new(),
        og_image: String::new(),
        reading_time: 3,
        status: PostStatus::Published,
        is_featured: false,
        author: "Mara".to_string(),
        published_at: Some(datetime!(2026-02-01 09:00 UTC)),
        faq_json: String::new(),
        created_at: datetime!(2026-01-30 09:00 UTC),
        updated_at: datetime!(2026-01-30 09:00 UTC),
    }
}

#[test]
fn home_template_renders_sections_and_chrome() {
    let chrome = sample_chrome().with_meta("", "Who we are", "/", None);
    let home = HomeContext {
        page: sample_page("home"),
        home_sections: vec![
            HomeSectionView::from(HomeSectionRecord {
                id: Uuid::new_v4(),
                section_key: "hero".to_string(),
                label: "Hero".to_string(),
                heading: "Welcome".to_string(),
                subtitle: String::new(),
                sort_order: 1,
                is_visible: true,
                config_json: "{}".to_string(),
            }),
            HomeSectionView::from(HomeSectionRecord {
                id: Uuid::new_v4(),
                section_key: "blog".to_string(),
                label: "Blog".to_string(),
                heading: "Latest thinking".to_string(),
                subtitle: String::new(),
                sort_order: 2,
                is_visible: true,
                config_json: "{}".to_string(),
            }),
        ],
        sections_by_type: BTreeMap::new(),
        featured_portfolio: vec![],
        featured_posts: vec![sample_post("launch", "The launch")],
        logos: vec![],
    };

    let html = render_template(HomeTemplate { chrome, home })
        .expect("home template renders")
        .0;
    assert!(html.contains("Studio Nord"));
    assert!(html.contains("We build brands"));
    assert!(html.contains("/blogs/launch"));
    assert!(html.contains("3 min read"));
}

#[test]
fn page_template_prefers_banners_over_hero_copy() {
    let page = sample_page("about");
    let chrome = sample_chrome().with_meta(&page.title, &page.meta_description, "/about", None);
    let banner = HeroBannerRecord {
        id: Uuid::new_v4(),
        page_id: page.id,
        image_url: "/uploads/banner.jpg".to_string(),
        overlay_title: "Banner headline".to_string(),
        overlay_subtitle: String::new(),
        overlay_position: "left".to_string(),
        sort_order: 1,
        is_active: true,
        alt_text: "Banner".to_string(),
        seo_title: String::new(),
    };
    let context = PageContext {
        page,
        sections: vec![],
        sections_by_type: BTreeMap::new(),
        blocks: vec![],
        recent_posts: vec![],
        banners: vec![banner],
        og_video: None,
    };

    let html = render_template(PageTemplateView { chrome, context })
        .expect("page template renders")
        .0;
    assert!(html.contains("Banner headline"));
    assert!(!html.contains("class=\"page-hero\""));
    assert!(html.contains("About us | Studio Nord"));
}

#[test]
fn page_template_groups_sections_by_kind() {
    let page = sample_page("services");
    let chrome = sample_chrome();
    let section = SectionRecord {
        id: Uuid::new_v4(),
        page_id: page.id,
        kind: "service".to_string(),
        title: "Branding".to_string(),
        description: "Identity systems".to_string(),
        content_html: "<p>Rich body</p>".to_string(),
        image_url: String::new(),
        video_url: String::new(),
        icon: String::new(),
        icon_type: String::new(),
        icon_image_url: String::new(),
        tag: "Popular".to_string(),
        sort_order: 1,
        extra_json: "{}".to_string(),
    };
    let mut by_type = BTreeMap::new();
    by_type.insert("service".to_string(), vec![section.clone()]);
    let context = PageContext {
        page,
        sections: vec![section],
        sections_by_type: by_type,
        blocks: vec![],
        recent_posts: vec![],
        banners: vec![],
        og_video: None,
    };

    let html = render_template(PageTemplateView { chrome, context })
        .expect("page template renders")
        .0;
    assert!(html.contains("sections-service"));
    assert!(html.contains("Branding"));
    assert!(html.contains("<p>Rich body</p>"));
}

#[test]
fn blog_index_shows_pagination_only_past_one_page() {
    let chrome = sample_chrome();
    let single = BlogIndex {
        posts: vec![sample_post("one", "One")],
        categories: vec![],
        category: None,
        page: 1,
        total_pages: 1,
        total_posts: 1,
    };
    let html = render_template(BlogIndexTemplate {
        chrome: chrome.clone(),
        index: single,
    })
    .expect("blog index renders")
    .0;
    assert!(!html.contains("class=\"pagination\""));

    let paged = BlogIndex {
        posts: vec![sample_post("one", "One")],
        categories: vec![],
        category: None,
        page: 2,
        total_pages: 3,
        total_posts: 19,
    };
    let html = render_template(BlogIndexTemplate {
        chrome,
        index: paged,
    })
    .expect("blog index renders")
    .0;
    assert!(html.contains("class=\"pagination\""));
    assert!(html.contains("/blogs?page=3"));
    assert!(html.contains("<span class=\"current\">2</span>"));
}

fn sample_category(name: &str, slug: &str, sort_order: i32) -> CategoryRecord {
    CategoryRecord {
        id: Uuid::new_v4(),
        kind: CategoryKind::Blog,
        name: name.to_string(),
        slug: slug.to_string(),
        description: String::new(),
        sort_order,
    }
}

#[test]
fn blog_index_highlights_the_active_category() {
    let chrome = sample_chrome();
    let index = BlogIndex {
        posts: vec![sample_post("one", "One")],
        categories: vec![
            sample_category("Design", "design", 1),
            sample_category("Strategy", "strategy", 2),
        ],
        category: Some("Design".to_string()),
        page: 1,
        total_pages: 1,
        total_posts: 1,
    };
    let html = render_template(BlogIndexTemplate { chrome, index })
        .expect("blog index renders")
        .0;
    assert!(html.contains(r#"<a href="/blogs?category=Design" class="active">Design</a>"#));
    assert!(html.contains(r#"<a href="/blogs?category=Strategy">Strategy</a>"#));
    assert!(!html.contains(r#"<a href="/blogs" class="active">All</a>"#));
}

#[test]
fn blog_post_renders_related_posts() {
    let chrome = sample_chrome();
    let detail = BlogDetail {
        post: sample_post("main", "Main story"),
        related: vec![sample_post("other", "Other story")],
    };
    let html = render_template(BlogPostTemplate { chrome, detail })
        .expect("blog post renders")
        .0;
    assert!(html.contains("Main story"));
    assert!(html.contains("Related posts"));
    assert!(html.contains("/blogs/other"));
}

#[test]
fn not_found_template_keeps_site_chrome() {
    let chrome = sample_chrome();
    let html = render_template(NotFoundTemplate { chrome })
        .expect("not found renders")
        .0;
    assert!(html.contains("Page not found"));
    assert!(html.contains("Studio Nord"));
}
