use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Resolves a request path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path
            .strip_suffix('/')
            .filter(|path| !path.is_empty())
            .unwrap_or(path);
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/about/"), Some(Page::About));
        assert_eq!(Page::from_path("/contact/"), Some(Page::Contact));
        assert_eq!(Page::from_path("/blog"), None);
        assert_eq!(Page::from_path("about"), None);
        assert_eq!(Page::from_path("/about//"), None);
        assert_eq!(Page::from_path(""), None);
    }
}
