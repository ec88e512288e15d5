/// Biography pages under `/about`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AboutPage {
    TbJoshua,
    EvelynJoshua,
    Scoan,
    EmmanuelTv,
}

impl AboutPage {
    pub const ALL: [AboutPage; 4] = [
        AboutPage::TbJoshua,
        AboutPage::EvelynJoshua,
        AboutPage::Scoan,
        AboutPage::EmmanuelTv,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::TbJoshua => "tb-joshua",
            Self::EvelynJoshua => "pst-evelyn-joshua",
            Self::Scoan => "scoan",
            Self::EmmanuelTv => "emmanuel-tv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TbJoshua => "Prophet T.B. Joshua",
            Self::EvelynJoshua => "Pastor Evelyn Joshua",
            Self::Scoan => "The SCOAN",
            Self::EmmanuelTv => "Emmanuel TV",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard,
    Sermons,
    Media,
    Users,
    Pages,
    EditPage,
}

impl AdminPage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Sermons => "Sermons",
            Self::Media => "Media Library",
            Self::Users => "Users",
            Self::Pages | Self::EditPage => "Pages",
        }
    }
}

/// Every screen the single-page app can show, addressed by URL hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    About(Option<AboutPage>),
    Sermons,
    Gallery,
    Visit,
    Contact,
    Admin(AdminPage, Option<String>),
    NotFound(String),
}

impl Route {
    /// Parse `location.hash` (`#/about/scoan`, `/gallery`, empty for home).
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About(None),
            ["about", slug] => match AboutPage::from_slug(slug) {
                Some(page) => Self::About(Some(page)),
                None => Self::NotFound(path.to_string()),
            },
            [s] if s.eq_ignore_ascii_case("sermon") || *s == "sermons" => Self::Sermons,
            ["gallery"] => Self::Gallery,
            ["visit"] => Self::Visit,
            ["contact"] => Self::Contact,
            ["admin"] => Self::Admin(AdminPage::Dashboard, None),
            ["admin", "sermons"] => Self::Admin(AdminPage::Sermons, None),
            ["admin", "media"] => Self::Admin(AdminPage::Media, None),
            ["admin", "users"] => Self::Admin(AdminPage::Users, None),
            ["admin", "pages"] => Self::Admin(AdminPage::Pages, None),
            ["admin", "pages", id] => Self::Admin(AdminPage::EditPage, Some(id.to_string())),
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical hash for links, e.g. `#/about/scoan`.
    pub fn href(&self) -> String {
        let path = match self {
            Self::Home => String::new(),
            Self::About(None) => "about".into(),
            Self::About(Some(page)) => format!("about/{}", page.slug()),
            Self::Sermons => "sermons".into(),
            Self::Gallery => "gallery".into(),
            Self::Visit => "visit".into(),
            Self::Contact => "contact".into(),
            Self::Admin(AdminPage::Dashboard, _) => "admin".into(),
            Self::Admin(AdminPage::Sermons, _) => "admin/sermons".into(),
            Self::Admin(AdminPage::Media, _) => "admin/media".into(),
            Self::Admin(AdminPage::Users, _) => "admin/users".into(),
            Self::Admin(AdminPage::Pages, _) => "admin/pages".into(),
            Self::Admin(AdminPage::EditPage, id) => {
                format!("admin/pages/{}", id.as_deref().unwrap_or("new"))
            }
            Self::NotFound(path) => path.clone(),
        };
        format!("#/{path}")
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(..))
    }

    /// Document title for the route.
    pub fn title(&self) -> String {
        let section = match self {
            Self::Home => return "SCOAN | The Synagogue, Church Of All Nations".to_string(),
            Self::About(None) => "About",
            Self::About(Some(page)) => page.label(),
            Self::Sermons => "Sermons",
            Self::Gallery => "Gallery",
            Self::Visit => "Visit",
            Self::Contact => "Contact",
            Self::Admin(page, _) => page.label(),
            Self::NotFound(_) => "Page not found",
        };
        format!("{section} | SCOAN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_public_routes() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/gallery"), Route::Gallery);
        assert_eq!(Route::parse("#/Sermon"), Route::Sermons);
        assert_eq!(Route::parse("#/about/scoan"), Route::About(Some(AboutPage::Scoan)));
        assert_eq!(Route::parse("#/visit?x=1"), Route::Visit);
    }

    #[test]
    fn test_parse_admin_routes() {
        assert_eq!(Route::parse("#/admin"), Route::Admin(AdminPage::Dashboard, None));
        assert_eq!(
            Route::parse("#/admin/pages/3"),
            Route::Admin(AdminPage::EditPage, Some("3".into()))
        );
        assert!(Route::parse("#/admin/media").is_admin());
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("#/about/nobody"), Route::NotFound("about/nobody".into()));
        assert_eq!(Route::parse("#/nope"), Route::NotFound("nope".into()));
    }

    #[test]
    fn test_href_round_trips() {
        for route in [
            Route::Home,
            Route::About(Some(AboutPage::EmmanuelTv)),
            Route::Gallery,
            Route::Admin(AdminPage::Users, None),
            Route::Admin(AdminPage::EditPage, Some("2".into())),
        ] {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }
}
