//! Seed records for the admin screens.

use site_core::admin::{AccountStatus, AdminAccount, Page, PageStatus, Sermon};
use site_core::media::{MediaFile, MediaKind};
use site_core::session::Role;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sermons() -> Vec<Sermon> {
    vec![
        Sermon {
            id: "1".into(),
            title: "The Power of Faith".into(),
            description: "An inspiring message about the power of faith in our daily lives.".into(),
            preacher: "Pastor Evelyn Joshua".into(),
            date: "2024-01-15".into(),
            duration: "45:30".into(),
            video_url: "/sermons/faith-sermon.mp4".into(),
            thumbnail: "/sermon.jpeg".into(),
            tags: strings(&["faith", "inspiration", "daily-life"]),
            category: "Sunday Service".into(),
            views: 1250,
        },
        Sermon {
            id: "2".into(),
            title: "Divine Healing".into(),
            description: "Understanding God's healing power in our lives.".into(),
            preacher: "Guest Speaker".into(),
            date: "2024-01-08".into(),
            duration: "38:15".into(),
            video_url: "/sermons/healing-sermon.mp4".into(),
            thumbnail: "/divinehealing.jpeg".into(),
            tags: strings(&["healing", "miracles", "faith"]),
            category: "Special Service".into(),
            views: 890,
        },
    ]
}

pub fn media_files() -> Vec<MediaFile> {
    let file = |id: &str, name: &str, kind, size: &str, date: &str, url: &str, thumb: Option<&str>| MediaFile {
        id: id.into(),
        name: name.into(),
        kind,
        size: size.into(),
        upload_date: date.into(),
        url: url.into(),
        thumbnail: thumb.map(str::to_string),
    };
    vec![
        file("1", "church-building.jpg", MediaKind::Image, "2.5 MB", "2024-01-15", "/Church1.jpg", Some("/Church1.jpg")),
        file("2", "sermon-video.mp4", MediaKind::Video, "45.2 MB", "2024-01-14", "/sermon-video.mp4", Some("/sermon.jpeg")),
        file("3", "testimony-audio.mp3", MediaKind::Audio, "8.7 MB", "2024-01-13", "/testimony-audio.mp3", None),
        file("4", "event-document.pdf", MediaKind::Document, "1.2 MB", "2024-01-12", "/event-document.pdf", None),
    ]
}

pub fn accounts() -> Vec<AdminAccount> {
    vec![
        AdminAccount {
            id: "1".into(),
            name: "Stonesy".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            status: AccountStatus::Active,
            last_login: "2024-01-15 10:30".into(),
            created_at: "2024-01-01".into(),
            permissions: strings(&["all"]),
        },
        AdminAccount {
            id: "2".into(),
            name: "Hannah".into(),
            email: "editor@example.com".into(),
            role: Role::Editor,
            status: AccountStatus::Active,
            last_login: "2024-01-14 15:45".into(),
            created_at: "2024-01-05".into(),
            permissions: strings(&["pages", "media", "sermons"]),
        },
        AdminAccount {
            id: "3".into(),
            name: "Contributor User".into(),
            email: "contributor@example.com".into(),
            role: Role::Contributor,
            status: AccountStatus::Inactive,
            last_login: "2024-01-10 09:15".into(),
            created_at: "2024-01-10".into(),
            permissions: strings(&["pages", "media"]),
        },
    ]
}

pub fn pages() -> Vec<Page> {
    let page = |id: &str, title: &str, slug: &str, modified: &str, author: &str| Page {
        id: id.into(),
        title: title.into(),
        slug: slug.into(),
        status: PageStatus::Published,
        last_modified: modified.into(),
        author: author.into(),
    };
    vec![
        page("1", "Home", "/", "2024-01-15", "Admin User"),
        page("2", "About TB Joshua", "/about/tb-joshua", "2024-01-14", "Editor User"),
        page("3", "About SCOAN", "/about/scoan", "2024-01-13", "Admin User"),
        page("4", "About Emmanuel TV", "/about/emmanuel-tv", "2024-01-12", "Editor User"),
        page("5", "Sermons", "/sermon", "2024-01-11", "Admin User"),
        page("6", "Crusade/Outreach", "/crusade-outreach", "2024-01-10", "Editor User"),
        page("7", "Visit Us", "/visit-us", "2024-01-10", "Editor User"),
    ]
}
