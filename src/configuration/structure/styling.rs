use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};


/// One stylesheet URL, local or remote.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Stylesheet(String);

impl Stylesheet {
    pub(super) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn url(&self) -> &str {
        &self.0
    }

    /// `http://`, `https://` and protocol-relative `//` URLs are remote,
    /// everything else is a path local to the generated site.
    pub fn is_remote(&self) -> bool {
        let lowercase_url = self.0.to_ascii_lowercase();

        lowercase_url.starts_with("http://")
            || lowercase_url.starts_with("https://")
            || lowercase_url.starts_with("//")
    }
}

impl Display for Stylesheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Stylesheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}


/// Stylesheets in the exact order they were authored in.
///
/// CSS precedence depends on load order, so entries are never sorted or deduplicated.
pub(super) fn resolve_stylesheets(urls: Vec<String>) -> Vec<Stylesheet> {
    urls.into_iter().map(Stylesheet::new).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_remote_stylesheets() {
        assert!(Stylesheet::new("https://fonts.googleapis.com/css".to_string()).is_remote());
        assert!(Stylesheet::new("HTTP://example.com/a.css".to_string()).is_remote());
        assert!(Stylesheet::new("//cdn.example.com/a.css".to_string()).is_remote());
        assert!(!Stylesheet::new("../css/m-dark.css".to_string()).is_remote());
    }

    #[test]
    fn keeps_authored_order_and_duplicates() {
        let stylesheets = resolve_stylesheets(vec![
            "b.css".to_string(),
            "a.css".to_string(),
            "b.css".to_string(),
        ]);

        let urls = stylesheets.iter().map(Stylesheet::url).collect::<Vec<_>>();
        assert_eq!(urls, vec!["b.css", "a.css", "b.css"]);
    }
}
