use time::macros::datetime;
use uuid::Uuid;
use vetrina::application::admin::dashboard::DashboardCounts;
use vetrina::domain::entities::{
    BlogPostRecord, CategoryRecord, ContactSubmissionRecord, MediaRecord, PageRecord,
};
use vetrina::domain::types::{CategoryKind, PageTemplate, PostStatus};
use vetrina::presentation::views::{
    AdminCategoriesTemplate, AdminContactsTemplate, AdminDashboardTemplate, AdminLoginTemplate,
    AdminMediaTemplate, AdminPageFormTemplate, AdminPagesTemplate, AdminPostsTemplate,
    AdminSettingsTemplate, render_template,
};

fn sample_page() -> PageRecord {
    PageRecord {
        id: Uuid::new_v4(),
        slug: "about".to_string(),
        title: "About".to_string(),
        meta_description: String::new(),
        hero_title: String::new(),
        hero_subtitle: String::new(),
        hero_label: String::new(),
        nav_order: 2,
        is_visible: true,
        template: PageTemplate::Default,
        schema_type: String::new(),
        schema_json: String::new(),
        faq_json: String::new(),
        page_blocks: "[]".to_string(),
        updated_at: datetime!(2026-01-10 12:00 UTC),
    }
}

#[test]
fn login_template_shows_error_banner_only_on_failure() {
    let clean = render_template(AdminLoginTemplate { error: false })
        .expect("login renders")
        .0;
    assert!(!clean.contains("Invalid username or password"));

    let failed = render_template(AdminLoginTemplate { error: true })
        .expect("login renders")
        .0;
    assert!(failed.contains("Invalid username or password"));
}

#[test]
fn dashboard_template_lists_all_counters() {
    let html = render_template(AdminDashboardTemplate {
        counts: DashboardCounts {
            pages: 4,
            posts: 12,
            published_posts: 9,
            media_items: 31,
            new_contacts: 2,
        },
    })
    .expect("dashboard renders")
    .0;
    for value in ["4", "12", "9", "31", "2"] {
        assert!(html.contains(value));
    }
    assert!(html.contains("New enquiries"));
}

#[test]
fn pages_template_links_builder_and_banners() {
    let page = sample_page();
    let id = page.id;
    let html = render_template(AdminPagesTemplate {
        pages: vec![page],
        saved: true,
    })
    .expect("pages renders")
    .0;
    assert!(html.contains("Saved."));
    assert!(html.contains(&format!("/pages/{id}/builder")));
    assert!(html.contains(&format!("/pages/{id}/banners")));
    assert!(html.contains(&format!("/pages/{id}/duplicate")));
}

#[test]
fn page_form_switches_between_create_and_edit() {
    let create = render_template(AdminPageFormTemplate {
        page: None,
        saved: false,
    })
    .expect("page form renders")
    .0;
    assert!(create.contains("action=\"/pages/create\""));

    let page = sample_page();
    let id = page.id;
    let edit = render_template(AdminPageFormTemplate {
        page: Some(page),
        saved: false,
    })
    .expect("page form renders")
    .0;
    assert!(edit.contains(&format!("action=\"/pages/{id}/edit\"")));
    assert!(edit.contains("value=\"About\""));
}

#[test]
fn posts_template_shows_status_and_publish_date() {
    let html = render_template(AdminPostsTemplate {
        posts: vec![BlogPostRecord {
            id: Uuid::new_v4(),
            slug: "launch".to_string(),
            title: "The launch".to_string(),
            excerpt: String::new(),
            content_html: String::new(),
            featured_image: String::new(),
            featured_image_alt: String::new(),
            category: "Design".to_string(),
            tags: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            og_image: String::new(),
            reading_time: 2,
            status: PostStatus::Published,
            is_featured: true,
            author: String::new(),
            published_at: Some(datetime!(2026-02-01 09:00 UTC)),
            faq_json: String::new(),
            created_at: datetime!(2026-01-30 09:00 UTC),
            updated_at: datetime!(2026-01-30 09:00 UTC),
        }],
        saved: false,
    })
    .expect("posts renders")
    .0;
    assert!(html.contains("published"));
    assert!(html.contains("2026-02-01"));
}

#[test]
fn categories_template_renders_both_vocabularies() {
    let cat = |kind, name: &str| CategoryRecord {
        id: Uuid::new_v4(),
        kind,
        name: name.to_string(),
        slug: name.to_lowercase(),
        description: String::new(),
        sort_order: 1,
    };
    let html = render_template(AdminCategoriesTemplate {
        portfolio: vec![cat(CategoryKind::Portfolio, "Web")],
        blog: vec![cat(CategoryKind::Blog, "Insights")],
        saved: false,
    })
    .expect("categories renders")
    .0;
    assert!(html.contains("Web"));
    assert!(html.contains("Insights"));
    assert!(html.contains("Blog categories"));
    assert!(html.contains("Portfolio categories"));
}

#[test]
fn media_template_uses_public_urls() {
    let html = render_template(AdminMediaTemplate {
        items: vec![MediaRecord {
            id: Uuid::new_v4(),
            filename: "a1b2c3.png".to_string(),
            original_name: "team.png".to_string(),
            mime_type: "image/png".to_string(),
            size_bytes: 2048,
            alt_text: "Team photo".to_string(),
            seo_title: String::new(),
            seo_caption: String::new(),
            uploaded_at: datetime!(2026-01-05 08:00 UTC),
        }],
        saved: false,
    })
    .expect("media renders")
    .0;
    assert!(html.contains("/uploads/a1b2c3.png"));
    assert!(html.contains("team.png"));
    assert!(html.contains("2048 bytes"));
}

#[test]
fn settings_template_renders_every_entry() {
    let html = render_template(AdminSettingsTemplate {
        entries: vec![
            ("site_name".to_string(), "Studio Nord".to_string()),
            ("tagline".to_string(), "Design that ships".to_string()),
        ],
        saved: true,
    })
    .expect("settings renders")
    .0;
    assert!(html.contains("site_name"));
    assert!(html.contains("Design that ships"));
    assert!(html.contains("/settings/branding"));
    assert!(html.contains("/password"));
}

#[test]
fn contacts_template_marks_current_status_selected() {
    let html = render_template(AdminContactsTemplate {
        submissions: vec![ContactSubmissionRecord {
            id: Uuid::new_v4(),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            company: "Acme".to_string(),
            message: "We need a site".to_string(),
            status: "read".to_string(),
            created_at: datetime!(2026-02-10 10:30 UTC),
        }],
    })
    .expect("contacts renders")
    .0;
    assert!(html.contains("mailto:dana@example.com"));
    assert!(html.contains("value=\"read\" selected"));
}
