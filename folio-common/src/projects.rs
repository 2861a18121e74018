use serde::{Deserialize, Serialize};

use crate::category::Categorized;

/// A featured project card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
}

/// Technologies split into the ones shown on a card and the overflow count
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl Project {
    pub fn tech_preview(&self, max: usize) -> TechPreview<'_> {
        let shown = &self.technologies[..self.technologies.len().min(max)];
        TechPreview {
            shown,
            hidden: self.technologies.len() - shown.len(),
        }
    }
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

pub fn find_project(projects: &[Project], id: u32) -> Option<&Project> {
    projects.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::filter_by_category;

    fn project(id: u32, category: &str, technologies: &[&str]) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            category: category.to_string(),
            description: String::new(),
            image: "/cover.svg".to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            live_url: "#".to_string(),
            github_url: "#".to_string(),
            featured: false,
        }
    }

    #[test]
    fn test_tech_preview_overflow() {
        let p = project(1, "Web Design", &["React", "Node.js", "MongoDB", "Stripe"]);
        let preview = p.tech_preview(3);
        assert_eq!(preview.shown, &p.technologies[..3]);
        assert_eq!(preview.hidden, 1);
    }

    #[test]
    fn test_tech_preview_short_list() {
        let p = project(1, "Branding", &["Figma"]);
        let preview = p.tech_preview(3);
        assert_eq!(preview.shown.len(), 1);
        assert_eq!(preview.hidden, 0);
    }

    #[test]
    fn test_projects_share_category_filter() {
        let projects = vec![
            project(1, "Web Design", &[]),
            project(2, "Mobile App", &[]),
            project(3, "Web Design", &[]),
        ];
        let ids: Vec<u32> = filter_by_category(&projects, "Web Design")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_find_project() {
        let projects = vec![project(4, "Development", &[]), project(6, "Mobile App", &[])];
        assert_eq!(find_project(&projects, 6).map(|p| p.id), Some(6));
        assert!(find_project(&projects, 5).is_none());
    }
}
