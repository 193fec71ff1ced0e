use std::path::PathBuf;

use serde::Deserialize;

/// One entry of the project carousel, read from the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub image: PathBuf,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub link: ProjectLink,
}

/// Either a bare label (nothing to open) or a label pointing at a URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProjectLink {
    Label(String),
    Url { label: String, url: String },
}

impl ProjectLink {
    pub fn label(&self) -> &str {
        match self {
            ProjectLink::Label(label) => label,
            ProjectLink::Url { label, .. } => label,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ProjectLink::Label(_) => None,
            ProjectLink::Url { url, .. } => Some(url),
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.url().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        projects: Vec<Project>,
    }

    #[test]
    fn link_accepts_label_or_table() {
        let parsed: Wrapper = toml::from_str(
            r#"
            [[projects]]
            image = "a.png"
            title = "A"
            description = "first"
            skills = ["Rust", "Rust"]
            link = "Internal tool"

            [[projects]]
            image = "b.png"
            title = "B"
            description = "second"
            link = { label = "Source", url = "https://example.com/b" }
            "#,
        )
        .unwrap();

        let a = &parsed.projects[0];
        assert_eq!(a.skills, vec!["Rust", "Rust"]);
        assert_eq!(a.link.label(), "Internal tool");
        assert!(!a.link.is_navigable());

        let b = &parsed.projects[1];
        assert!(b.skills.is_empty());
        assert_eq!(b.link.label(), "Source");
        assert_eq!(b.link.url(), Some("https://example.com/b"));
    }
}
