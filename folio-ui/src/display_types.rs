//! Display types for static site content
//!
//! Plain records the section views render. The web app owns the actual
//! content; these types only carry what a view needs to paint.

/// Icons available to content records
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Code,
    Palette,
    Lightbulb,
    Target,
    Award,
    Users,
    Coffee,
    Smartphone,
    Globe,
    Zap,
    Mail,
    Phone,
    MapPin,
    Clock,
    Github,
    Linkedin,
    Facebook,
}

/// In-page navigation target
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    /// Fragment id of the target section, without the leading `#`
    pub anchor: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: String,
    pub href: String,
}

/// Hero copy
#[derive(Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub name: String,
    pub monogram: String,
    pub tagline: String,
    pub roles: Vec<String>,
    pub resume_href: Option<String>,
}

/// Skill with a proficiency level in percent
#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub icon: IconKind,
    pub name: String,
    pub level: u8,
}

impl Skill {
    /// Level clamped to 0..=100 for the bar width
    pub fn bar_percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub icon: IconKind,
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactInfo {
    pub icon: IconKind,
    pub label: String,
    pub value: String,
    /// None when the entry is informational only
    pub href: Option<String>,
}
