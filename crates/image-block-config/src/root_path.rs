use url::Url;

/// Default public base address of the hosting application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPath {
    public_url: String,
}

impl Default for RootPath {
    fn default() -> Self {
        Self::new("/")
    }
}

impl RootPath {
    pub fn new(public_url: impl Into<String>) -> Self {
        let mut public_url = public_url.into();
        if !public_url.ends_with('/') {
            public_url.push('/');
        }
        Self { public_url }
    }

    /// Root of an application served under an `admin` path segment.
    ///
    /// Keeps every path segment before the first `admin`, or the whole path
    /// when there is none. Query and fragment are dropped.
    pub fn from_admin_url(href: &str) -> Result<Self, url::ParseError> {
        let mut url = Url::parse(href)?;

        let root: Vec<String> = url
            .path_segments()
            .map(|segments| {
                segments
                    .take_while(|segment| *segment != "admin")
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let path = if root.is_empty() {
            "/".to_owned()
        } else {
            format!("/{}/", root.join("/"))
        };
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self::new(url.as_str()))
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    pub fn assets_url(&self) -> String {
        format!("{}assets/", self.public_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com/admin/content/articles", "https://example.com/")]
    #[case("https://example.com/cms/admin/files?x=1#top", "https://example.com/cms/")]
    #[case("https://example.com/", "https://example.com/")]
    #[case("https://example.com/sub/site", "https://example.com/sub/site/")]
    fn extracts_root_before_admin(#[case] href: &str, #[case] expected: &str) {
        assert_eq!(RootPath::from_admin_url(href).unwrap().public_url(), expected);
    }

    #[test]
    fn relative_url_is_rejected() {
        assert!(RootPath::from_admin_url("/admin/content").is_err());
    }

    #[test]
    fn new_adds_trailing_slash() {
        assert_eq!(RootPath::new("https://example.com").public_url(), "https://example.com/");
    }

    #[test]
    fn assets_url_appends_segment() {
        assert_eq!(RootPath::default().assets_url(), "/assets/");
    }
}
