pub mod site_data;

use dioxus::prelude::*;
use folio_common::{Catalog, SiteConfig};
use folio_ui::{
    AboutSectionView, ContactSectionView, Footer, HeaderNav, HeroSectionView,
    ProjectsSectionView, ServicesSectionView, WorkSection,
};
use tracing::{error, info, warn};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

const SITE_YAML: &str = include_str!("../site.yaml");

/// Site settings from the bundled `site.yaml`, or defaults if it is invalid
pub fn load_config() -> SiteConfig {
    match SiteConfig::from_yaml(SITE_YAML) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid site.yaml, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

/// The work catalog, or None when the bundled data is inconsistent
pub fn load_catalog() -> Option<Catalog> {
    match site_data::work_catalog() {
        Ok(catalog) => {
            for warning in catalog.warnings() {
                warn!("{}", warning);
            }
            info!(
                "Loaded {} work items in {} categories",
                catalog.len(),
                catalog.categories().len()
            );
            Some(catalog)
        }
        Err(e) => {
            error!("Work catalog rejected, hiding the gallery: {}", e);
            None
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let catalog = use_hook(load_catalog);
    let initial_project_category = config.initial_project_category.clone();
    let mut project_category = use_signal(move || initial_project_category);
    let mut open_project = use_signal(|| None::<u32>);
    let hero = site_data::hero();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-dark-900 text-white",
            HeaderNav { monogram: hero.monogram.clone(), links: site_data::nav_links() }
            main {
                HeroSectionView { content: hero, social_links: site_data::social_links() }
                AboutSectionView {
                    paragraphs: site_data::about_paragraphs(),
                    skills: site_data::skills(),
                    stats: site_data::stats(),
                }
                ServicesSectionView {
                    services: site_data::services(),
                    steps: site_data::process_steps(),
                }
                ProjectsSectionView {
                    projects: site_data::projects(),
                    category_options: site_data::project_category_options(),
                    selected_category: project_category(),
                    on_select_category: move |label: String| project_category.set(label),
                    open_project: open_project(),
                    on_open_project: move |id: u32| open_project.set(Some(id)),
                    on_close_project: move |_| open_project.set(None),
                }
                if let Some(catalog) = catalog {
                    WorkSection {
                        catalog,
                        initial_category: config.initial_category.clone(),
                        slide_interval_ms: config.slide_interval_ms,
                    }
                }
                ContactSectionView {
                    entries: site_data::contact_info(),
                    social_links: site_data::social_links(),
                }
            }
            Footer {
                owner: site_data::OWNER.to_string(),
                year: site_data::COPYRIGHT_YEAR,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = SiteConfig::from_yaml(SITE_YAML).unwrap();
        assert_eq!(config.slide_interval_ms, 2000);
        assert_eq!(config.initial_category, "All");
    }

    #[test]
    fn test_bundled_catalog_loads() {
        assert!(load_catalog().is_some());
    }
}
