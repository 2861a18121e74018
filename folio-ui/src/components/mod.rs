//! Shared UI components

pub mod about;
pub mod button;
pub mod category_filter;
pub mod contact;
pub mod footer;
pub mod header_nav;
pub mod hero;
pub mod icons;
pub mod projects;
pub mod section_header;
pub mod services;
pub mod work_gallery;

pub use about::AboutSectionView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use category_filter::CategoryFilter;
pub use contact::{ContactForm, ContactSectionView};
pub use footer::Footer;
pub use header_nav::HeaderNav;
pub use hero::HeroSectionView;
pub use icons::{
    ArrowRightIcon, ChevronDownIcon, ContentIcon, DownloadIcon, ExternalLinkIcon, FilterIcon,
    ImageIcon, MenuIcon, SendIcon, XIcon,
};
pub use projects::ProjectsSectionView;
pub use section_header::SectionHeader;
pub use services::ServicesSectionView;
pub use work_gallery::{WorkSection, WorkSectionView};
