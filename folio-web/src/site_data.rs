//! Site content
//!
//! Everything the page shows lives here as plain data. Contact details are
//! placeholders.

use folio_common::{Catalog, CatalogError, Project, WorkItem, ALL_CATEGORIES};
use folio_ui::{
    ContactInfo, HeroContent, IconKind, NavLink, ProcessStep, Service, Skill, SocialLink, Stat,
};

pub const OWNER: &str = "Sam Perera";
pub const COPYRIGHT_YEAR: u16 = 2025;

const WORK_CATEGORIES: [&str; 4] = ["3D Art", "Digital Paintings", "Line Art", "Traditional Art"];
const PROJECT_CATEGORIES: [&str; 4] = ["Web Design", "Mobile App", "Branding", "Development"];

pub fn nav_links() -> Vec<NavLink> {
    [
        ("Home", "home"),
        ("About", "about"),
        ("Services", "services"),
        ("Projects", "portfolio"),
        ("Work", "work"),
        ("Contact", "contact"),
    ]
    .into_iter()
    .map(|(label, anchor)| NavLink {
        label: label.to_string(),
        anchor: anchor.to_string(),
    })
    .collect()
}

pub fn hero() -> HeroContent {
    HeroContent {
        name: OWNER.to_string(),
        monogram: "SP".to_string(),
        tagline: "I design and build digital experiences, and paint, sketch and render in between."
            .to_string(),
        roles: vec![
            "UI/UX Designer".to_string(),
            "Frontend Developer".to_string(),
            "Digital Artist".to_string(),
        ],
        resume_href: Some("/resume.pdf".to_string()),
    }
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            icon: IconKind::Github,
            label: "GitHub".to_string(),
            href: "https://github.com/example".to_string(),
        },
        SocialLink {
            icon: IconKind::Linkedin,
            label: "LinkedIn".to_string(),
            href: "https://www.linkedin.com/in/example".to_string(),
        },
        SocialLink {
            icon: IconKind::Facebook,
            label: "Facebook".to_string(),
            href: "https://www.facebook.com/example".to_string(),
        },
    ]
}

pub fn about_paragraphs() -> Vec<String> {
    vec![
        "I'm a designer and developer who cares about the small details that make an interface feel right.".to_string(),
        "Outside client work I paint, draw with pencil and ink, and spend too many evenings in Blender.".to_string(),
    ]
}

pub fn skills() -> Vec<Skill> {
    [
        (IconKind::Code, "Development", 95),
        (IconKind::Palette, "Design", 90),
        (IconKind::Lightbulb, "Innovation", 88),
        (IconKind::Target, "Strategy", 92),
    ]
    .into_iter()
    .map(|(icon, name, level)| Skill {
        icon,
        name: name.to_string(),
        level,
    })
    .collect()
}

pub fn stats() -> Vec<Stat> {
    [
        (IconKind::Award, "50+", "Projects Completed"),
        (IconKind::Users, "30+", "Happy Clients"),
        (IconKind::Coffee, "1000+", "Cups of Coffee"),
    ]
    .into_iter()
    .map(|(icon, value, label)| Stat {
        icon,
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            icon: IconKind::Palette,
            title: "UI/UX Design".to_string(),
            description: "Creating intuitive and beautiful user interfaces that enhance user experience and drive engagement.".to_string(),
        },
        Service {
            icon: IconKind::Code,
            title: "Frontend Development".to_string(),
            description: "Building responsive and performant web applications on modern tooling.".to_string(),
        },
        Service {
            icon: IconKind::Smartphone,
            title: "Mobile Design".to_string(),
            description: "Designing mobile-first experiences that work across devices and screen sizes.".to_string(),
        },
        Service {
            icon: IconKind::Globe,
            title: "Web Development".to_string(),
            description: "Full-stack web development from concept to deployment.".to_string(),
        },
    ]
}

pub fn process_steps() -> Vec<ProcessStep> {
    [
        (IconKind::Users, "Discover", "Understanding your needs and goals"),
        (IconKind::Palette, "Design", "Creating beautiful and functional designs"),
        (IconKind::Code, "Develop", "Building with modern technologies"),
        (IconKind::Zap, "Deploy", "Launching and optimizing your project"),
    ]
    .into_iter()
    .map(|(icon, title, description)| ProcessStep {
        icon,
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn contact_info() -> Vec<ContactInfo> {
    vec![
        ContactInfo {
            icon: IconKind::Mail,
            label: "Email".to_string(),
            value: "hello@example.com".to_string(),
            href: Some("mailto:hello@example.com".to_string()),
        },
        ContactInfo {
            icon: IconKind::Phone,
            label: "Phone".to_string(),
            value: "+1 555 0100".to_string(),
            href: Some("tel:+15550100".to_string()),
        },
        ContactInfo {
            icon: IconKind::MapPin,
            label: "Location".to_string(),
            value: "Remote".to_string(),
            href: None,
        },
        ContactInfo {
            icon: IconKind::Clock,
            label: "Response Time".to_string(),
            value: "Within 24 hours".to_string(),
            href: None,
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "E-Commerce Platform",
            "Web Design",
            "A modern e-commerce platform with a smooth checkout and advanced catalog features.",
            "/rectangle-81.svg",
            &["React", "Node.js", "MongoDB", "Stripe"],
            true,
        ),
        project(
            2,
            "Music Streaming App",
            "Mobile App",
            "A music streaming application with an intuitive layout and smooth animations.",
            "/rectangle-81-3.svg",
            &["React Native", "Firebase", "Redux", "Spotify API"],
            true,
        ),
        project(
            3,
            "Creative Portfolio",
            "Web Design",
            "A portfolio website showcasing creative work with modern animations.",
            "/rectangle-81-2.svg",
            &["Next.js", "Framer Motion", "Tailwind CSS", "Vercel"],
            false,
        ),
        project(
            4,
            "Task Management Tool",
            "Development",
            "A task management application with team collaboration features.",
            "/rectangle-81-1.svg",
            &["Vue.js", "Express.js", "PostgreSQL", "Socket.io"],
            false,
        ),
        project(
            5,
            "Brand Identity System",
            "Branding",
            "Complete brand identity design including logo, colors and guidelines.",
            "/rectangle-81.svg",
            &["Adobe Creative Suite", "Figma", "Brand Strategy"],
            false,
        ),
        project(
            6,
            "Restaurant App",
            "Mobile App",
            "A food delivery app with real-time tracking and quick ordering.",
            "/rectangle-81-3.svg",
            &["Flutter", "Firebase", "Google Maps API", "Payment Gateway"],
            true,
        ),
    ]
}

pub fn project_category_options() -> Vec<String> {
    std::iter::once(ALL_CATEGORIES)
        .chain(PROJECT_CATEGORIES)
        .map(str::to_string)
        .collect()
}

fn project(
    id: u32,
    title: &str,
    category: &str,
    description: &str,
    image: &str,
    technologies: &[&str],
    featured: bool,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        live_url: "#".to_string(),
        github_url: "#".to_string(),
        featured,
    }
}

/// `/work/<dir>/<stem> 1.jpg` through `<stem> <count>.jpg`
fn numbered_slides(dir: &str, stem: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("/work/{}/{} {}.jpg", dir, stem, n))
        .collect()
}

fn variant_image(id: &str, title: &str, category: &str, primary: &str, hover: &str) -> WorkItem {
    WorkItem::image(
        id,
        title,
        category,
        format!("/work/{}", primary),
        Some(&format!("/work/{}", hover)),
    )
}

pub fn work_catalog() -> Result<Catalog, CatalogError> {
    let items = vec![
        variant_image(
            "3d-1",
            "3D Anvil practice",
            "3D Art",
            "3D Render 1 varient 1.jpg",
            "3D Render 1 varient 2.jpg",
        ),
        variant_image(
            "3d-2",
            "3D Donut practice",
            "3D Art",
            "3D Render 2 varient 1.jpg",
            "3D Render 2 varient 2.jpg",
        ),
        WorkItem::video(
            "3d-animation",
            "3D Donut Animation",
            "3D Art",
            "/work/3D Animation.mp4",
        ),
        variant_image(
            "digital-dark-1",
            "Dark Digital Art",
            "Digital Paintings",
            "Dark digital painting 1 varient 1 Transparent.png",
            "Dark digital painting 1 varient 2.jpg",
        ),
        variant_image(
            "digital-dragon-1",
            "Dragon Concept Art",
            "Digital Paintings",
            "Dark digital painting Dragon 1 varient 1.jpg",
            "Dark digital painting Dragon 1 varient 2.jpg",
        ),
        WorkItem::slideshow(
            "digital-dragon-slides",
            "Dragon Series",
            "Digital Paintings",
            vec![
                "/work/dark digital slide/Dark digital painting Dragon 2.jpg".to_string(),
                "/work/dark digital slide/Dark digital painting Dragon 3.jpg".to_string(),
            ],
        ),
        variant_image(
            "digital-monster",
            "Monster Concept",
            "Digital Paintings",
            "Dark digital painting Monster varient 1.jpg",
            "Dark digital painting Monster varient 2.jpg",
        ),
        variant_image(
            "digital-portrait-1",
            "Digital Portrait",
            "Digital Paintings",
            "Digital painting portrait 1 varient 1 Transparent.png",
            "Digital painting portrait 1 varient 2.jpg",
        ),
        variant_image(
            "digital-portrait-2",
            "Digital Portrait 2",
            "Digital Paintings",
            "Digital painting portrait 2 varient 1.png",
            "Digital painting portrait 2 varient 2.jpg",
        ),
        variant_image(
            "digital-portrait-3",
            "Digital Portrait 3",
            "Digital Paintings",
            "Digital painting portrait 3 varient 1.jpg",
            "Digital painting portrait 3 varient 2.jpg",
        ),
        variant_image(
            "illustrator-cat",
            "Cat Illustration",
            "Digital Paintings",
            "Ilustrator cat varient 1.jpg",
            "Ilustrator cat varient 2.jpg",
        ),
        WorkItem::slideshow(
            "line-art",
            "Line Art Collection",
            "Line Art",
            numbered_slides("line art slide", "Line art", 5),
        ),
        WorkItem::slideshow(
            "pencil-animals",
            "Animal Studies",
            "Traditional Art",
            numbered_slides("pencil animal slide", "Pencil Animals", 4),
        ),
        WorkItem::slideshow(
            "pencil-dark",
            "Dark Series",
            "Traditional Art",
            numbered_slides("pencil dark slide", "Pencil art dark", 3),
        ),
        WorkItem::slideshow(
            "pencil-portraits",
            "Portrait Studies",
            "Traditional Art",
            numbered_slides("pencil portrait slide", "Pencil Portrait", 3),
        ),
    ];

    Catalog::new(
        WORK_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        items,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::{filter_by_category, MediaKind};

    #[test]
    fn test_work_catalog_is_valid() {
        let catalog = work_catalog().unwrap();
        assert_eq!(catalog.len(), 15);
        assert!(catalog.warnings().is_empty());
        assert_eq!(
            catalog.category_options(),
            vec!["All", "3D Art", "Digital Paintings", "Line Art", "Traditional Art"]
        );
    }

    #[test]
    fn test_line_art_slides() {
        let catalog = work_catalog().unwrap();
        let line_art = catalog.get("line-art").unwrap();
        assert_eq!(line_art.kind(), MediaKind::Slideshow);
        let slides = line_art.slides().unwrap();
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[2], "/work/line art slide/Line art 3.jpg");
        assert_eq!(line_art.primary_source, slides[0]);
    }

    #[test]
    fn test_every_project_category_is_offered() {
        let options = project_category_options();
        for project in projects() {
            assert!(options.contains(&project.category), "{}", project.category);
        }
        assert_eq!(filter_by_category(&projects(), "Mobile App").len(), 2);
    }
}
