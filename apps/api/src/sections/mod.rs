// Section items: typed shapes and the classifier that resolves untyped JSON into them.

pub mod classify;
pub mod items;

pub use classify::classify_item;
pub use items::{
    CertificationItem, CustomSectionItem, EducationItem, ExperienceItem, ProjectItem, SectionItem,
    SkillsItem,
};
