//! Record types and list operations behind the mock admin screens.
//!
//! Lists live in component state for the session only; nothing here is
//! persisted.

use crate::session::Role;

#[derive(Clone, Debug, PartialEq)]
pub struct Sermon {
    pub id: String,
    pub title: String,
    pub description: String,
    pub preacher: String,
    pub date: String,
    pub duration: String,
    pub video_url: String,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub category: String,
    pub views: u32,
}

pub const SERMON_CATEGORIES: [&str; 5] = ["all", "Sunday Service", "Special Service", "Bible Study", "Youth Service"];

/// Search matches title, preacher or any tag; `category` "all" matches everything.
pub fn filter_sermons<'a>(sermons: &'a [Sermon], search: &str, category: &str) -> Vec<&'a Sermon> {
    let needle = search.to_lowercase();
    sermons
        .iter()
        .filter(|s| {
            s.title.to_lowercase().contains(&needle)
                || s.preacher.to_lowercase().contains(&needle)
                || s.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .filter(|s| category == "all" || s.category == category)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub last_login: String,
    pub created_at: String,
    pub permissions: Vec<String>,
}

/// `role` / `status` filters take a slug or "all".
pub fn filter_accounts<'a>(
    accounts: &'a [AdminAccount],
    search: &str,
    role: &str,
    status: &str,
) -> Vec<&'a AdminAccount> {
    let needle = search.to_lowercase();
    accounts
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&needle) || a.email.to_lowercase().contains(&needle))
        .filter(|a| role == "all" || a.role.slug() == role)
        .filter(|a| status == "all" || a.status.slug() == status)
        .collect()
}

/// Flip one account between active and inactive. Returns whether it was found.
pub fn toggle_status(accounts: &mut [AdminAccount], id: &str) -> bool {
    match accounts.iter_mut().find(|a| a.id == id) {
        Some(account) => {
            account.status = account.status.toggled();
            true
        }
        None => false,
    }
}

/// Anything with a string id that the admin lists can delete.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Sermon {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for AdminAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Page {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for crate::media::MediaFile {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Drop the record with `id`. Returns whether anything was removed.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStatus {
    Published,
    Draft,
}

impl PageStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub status: PageStatus,
    pub last_modified: String,
    pub author: String,
}

pub fn filter_pages<'a>(pages: &'a [Page], search: &str) -> Vec<&'a Page> {
    let needle = search.to_lowercase();
    pages
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle) || p.slug.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageField {
    Title,
    Slug,
    Content,
    Excerpt,
    FeaturedImage,
    MetaTitle,
    MetaDescription,
}

/// Editable copy of a page with change tracking for the editor screen.
#[derive(Clone, Debug, PartialEq)]
pub struct PageDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub status: PageStatus,
    pub meta_title: String,
    pub meta_description: String,
    has_changes: bool,
    /// Bumped on every edit so a pending autosave can tell it is stale.
    revision: u64,
}

impl Default for PageDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            content: String::new(),
            excerpt: String::new(),
            featured_image: String::new(),
            status: PageStatus::Draft,
            meta_title: String::new(),
            meta_description: String::new(),
            has_changes: false,
            revision: 0,
        }
    }
}

impl PageDraft {
    pub fn from_page(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            slug: page.slug.clone(),
            status: page.status,
            ..Self::default()
        }
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn field(&self, field: PageField) -> &str {
        match field {
            PageField::Title => &self.title,
            PageField::Slug => &self.slug,
            PageField::Content => &self.content,
            PageField::Excerpt => &self.excerpt,
            PageField::FeaturedImage => &self.featured_image,
            PageField::MetaTitle => &self.meta_title,
            PageField::MetaDescription => &self.meta_description,
        }
    }

    pub fn set(&mut self, field: PageField, value: String) {
        let slot = match field {
            PageField::Title => &mut self.title,
            PageField::Slug => &mut self.slug,
            PageField::Content => &mut self.content,
            PageField::Excerpt => &mut self.excerpt,
            PageField::FeaturedImage => &mut self.featured_image,
            PageField::MetaTitle => &mut self.meta_title,
            PageField::MetaDescription => &mut self.meta_description,
        };
        *slot = value;
        self.has_changes = true;
        self.revision += 1;
    }

    pub fn set_status(&mut self, status: PageStatus) {
        self.status = status;
        self.has_changes = true;
        self.revision += 1;
    }

    /// Record a completed save of `revision`. Edits made while the save was
    /// in flight keep the draft dirty.
    pub fn mark_saved(&mut self, revision: u64) {
        if revision == self.revision {
            self.has_changes = false;
        }
    }
}

/// Lower-case, dash-separated slug derived from a title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            dash = false;
        } else if !dash && !slug.is_empty() {
            slug.push('-');
            dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sermon(id: &str, title: &str, preacher: &str, tags: &[&str], category: &str) -> Sermon {
        Sermon {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            preacher: preacher.into(),
            date: "2024-01-15".into(),
            duration: "45:30".into(),
            video_url: String::new(),
            thumbnail: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: category.into(),
            views: 0,
        }
    }

    fn account(id: &str, name: &str, role: Role, status: AccountStatus) -> AdminAccount {
        AdminAccount {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            role,
            status,
            last_login: String::new(),
            created_at: String::new(),
            permissions: Vec::new(),
        }
    }

    #[test]
    fn test_sermon_search_covers_tags_and_category() {
        let sermons = vec![
            sermon("1", "The Power of Faith", "Pastor Evelyn Joshua", &["faith"], "Sunday Service"),
            sermon("2", "Divine Healing", "Guest Speaker", &["miracles"], "Special Service"),
        ];
        assert_eq!(filter_sermons(&sermons, "MIRACLE", "all").len(), 1);
        assert_eq!(filter_sermons(&sermons, "evelyn", "all")[0].id, "1");
        assert!(filter_sermons(&sermons, "faith", "Special Service").is_empty());
        assert_eq!(filter_sermons(&sermons, "", "all").len(), 2);
    }

    #[test]
    fn test_account_filters_and_toggle() {
        let mut accounts = vec![
            account("1", "Ada", Role::Admin, AccountStatus::Active),
            account("2", "Ben", Role::Editor, AccountStatus::Inactive),
        ];
        assert_eq!(filter_accounts(&accounts, "", "editor", "all").len(), 1);
        assert_eq!(filter_accounts(&accounts, "ada@", "all", "active").len(), 1);
        assert!(toggle_status(&mut accounts, "2"));
        assert_eq!(accounts[1].status, AccountStatus::Active);
        assert!(!toggle_status(&mut accounts, "9"));
    }

    #[test]
    fn test_remove_by_id() {
        let mut accounts = vec![
            account("1", "Ada", Role::Admin, AccountStatus::Active),
            account("2", "Ben", Role::Editor, AccountStatus::Active),
        ];
        assert!(remove_by_id(&mut accounts, "1"));
        assert!(!remove_by_id(&mut accounts, "1"));
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn test_draft_change_tracking() {
        let mut draft = PageDraft::default();
        assert!(!draft.has_changes());
        draft.set(PageField::Title, "About Us".into());
        assert!(draft.has_changes());
        assert_eq!(draft.field(PageField::Title), "About Us");

        let saving = draft.revision();
        draft.set(PageField::Content, "more".into());
        draft.mark_saved(saving);
        assert!(draft.has_changes(), "edit during save keeps draft dirty");

        draft.mark_saved(draft.revision());
        assert!(!draft.has_changes());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("About Us"), "about-us");
        assert_eq!(slugify("  Visit / Directions! "), "visit-directions");
        assert_eq!(slugify(""), "");
    }
}
