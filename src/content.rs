//! Static page content: focus areas, how-it-works steps and social links.
//!
//! The tables live in `content/site.json`, are embedded at compile time and
//! parsed once in `main`. Focus-area titles double as the join form's tag
//! labels, so they have to be unique.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate focus area key `{0}`")]
    DuplicateFocusKey(String),
    #[error("duplicate focus area title `{0}`")]
    DuplicateFocusTitle(String),
    #[error("no {0} configured")]
    Empty(&'static str),
    #[error("social link `{key}` must use https, got `{href}`")]
    InsecureSocialLink { key: String, href: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FocusArea {
    pub key: String,
    pub title: String,
    pub icon: String,
    pub blurb: String,
    /// Card border gradient, `[from, to]`.
    pub gradient: [String; 2],
    /// Title badge gradient, `[from, to]`.
    pub accent: [String; 2],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HowStep {
    pub icon: String,
    pub title: String,
    pub desc: String,
    pub badge_from: String,
    pub badge_to: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub key: String,
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub focus_areas: Vec<FocusArea>,
    pub steps: Vec<HowStep>,
    pub social_links: Vec<SocialLink>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.focus_areas.is_empty() {
            return Err(ContentError::Empty("focus areas"));
        }
        if self.steps.is_empty() {
            return Err(ContentError::Empty("how-it-works steps"));
        }

        let mut keys = HashSet::new();
        let mut titles = HashSet::new();
        for area in &self.focus_areas {
            if !keys.insert(area.key.as_str()) {
                return Err(ContentError::DuplicateFocusKey(area.key.clone()));
            }
            if !titles.insert(area.title.as_str()) {
                return Err(ContentError::DuplicateFocusTitle(area.title.clone()));
            }
        }

        if let Some(link) = self.social_links.iter().find(|l| !l.href.starts_with("https://")) {
            return Err(ContentError::InsecureSocialLink {
                key: link.key.clone(),
                href: link.href.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(key: &str, title: &str) -> FocusArea {
        FocusArea {
            key: key.to_string(),
            title: title.to_string(),
            icon: "*".to_string(),
            blurb: String::new(),
            gradient: ["#000".to_string(), "#fff".to_string()],
            accent: ["#000".to_string(), "#fff".to_string()],
        }
    }

    fn step() -> HowStep {
        HowStep {
            icon: "*".to_string(),
            title: "Show up".to_string(),
            desc: String::new(),
            badge_from: "#000".to_string(),
            badge_to: "#fff".to_string(),
        }
    }

    fn content(focus_areas: Vec<FocusArea>) -> SiteContent {
        SiteContent {
            focus_areas,
            steps: vec![step()],
            social_links: vec![SocialLink {
                key: "instagram".to_string(),
                label: "Instagram".to_string(),
                href: "https://instagram.com/impacttribe".to_string(),
                icon: "*".to_string(),
            }],
        }
    }

    #[test]
    fn embedded_content_loads() {
        let site = SiteContent::load().expect("embedded content should be valid");
        assert_eq!(site.focus_areas.len(), 4);
        assert_eq!(site.steps.len(), 3);
        assert_eq!(site.social_links.len(), 4);
    }

    #[test]
    fn focus_areas_include_sanitation_not_menstrual_hygiene() {
        let site = SiteContent::load().unwrap();
        let titles: Vec<&str> = site.focus_areas.iter().map(|f| f.title.as_str()).collect();
        assert!(titles.contains(&"Sanitation drives"));
        assert!(!titles.contains(&"Menstrual hygiene"));
    }

    #[test]
    fn social_links_cover_all_networks() {
        let site = SiteContent::load().unwrap();
        let keys: Vec<&str> = site.social_links.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["instagram", "twitter", "youtube", "linkedin"]);
    }

    #[test]
    fn duplicate_titles_are_rejected() {
        let site = content(vec![area("a", "Education"), area("b", "Education")]);
        assert!(matches!(
            site.validate(),
            Err(ContentError::DuplicateFocusTitle(t)) if t == "Education"
        ));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let site = content(vec![area("a", "One"), area("a", "Two")]);
        assert!(matches!(site.validate(), Err(ContentError::DuplicateFocusKey(k)) if k == "a"));
    }

    #[test]
    fn empty_tables_are_rejected() {
        assert!(matches!(content(vec![]).validate(), Err(ContentError::Empty(_))));

        let mut site = content(vec![area("a", "One")]);
        site.steps.clear();
        assert!(matches!(site.validate(), Err(ContentError::Empty(_))));
    }

    #[test]
    fn plain_http_social_link_is_rejected() {
        let mut site = content(vec![area("a", "One")]);
        site.social_links[0].href = "http://instagram.com/impacttribe".to_string();
        assert!(matches!(
            site.validate(),
            Err(ContentError::InsecureSocialLink { key, .. }) if key == "instagram"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{\"focus_areas\": 3}"),
            Err(ContentError::Parse(_))
        ));
    }
}
