use std::slice::Iter;

use serde::Serialize;

/// One displayable portfolio item.
///
/// Optional fields are omitted from the serialized record rather than written
/// as `null` or an empty string, so a renderer never sees a fabricated link or
/// image path.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_src: Option<&'static str>,
}

impl Project {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Project {
            title,
            description,
            href: None,
            img_src: None,
        }
    }

    pub const fn with_href(mut self, href: &'static str) -> Self {
        self.href = Some(href);
        self
    }

    pub const fn with_img_src(mut self, img_src: &'static str) -> Self {
        self.img_src = Some(img_src);
        self
    }

    pub const fn has_link(&self) -> bool {
        self.href.is_some()
    }

    pub const fn has_image(&self) -> bool {
        self.img_src.is_some()
    }

    /// Title and description must both carry text.
    pub const fn is_well_formed(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }
}

/// Ordered, read-only view over authored projects. Slice order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCatalog<'a> {
    projects: &'a [Project],
}

impl<'a> ProjectCatalog<'a> {
    pub const fn new(projects: &'a [Project]) -> Self {
        ProjectCatalog { projects }
    }

    /// Every project, in display order. Never fails; an empty slice is valid.
    pub const fn all(&self) -> &'a [Project] {
        self.projects
    }

    pub const fn len(&self) -> usize {
        self.projects.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Project> {
        self.projects.get(index)
    }

    pub fn iter(&self) -> Iter<'a, Project> {
        self.projects.iter()
    }

    pub const fn is_well_formed(&self) -> bool {
        let mut i = 0;
        while i < self.projects.len() {
            if !self.projects[i].is_well_formed() {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl<'a> IntoIterator for &ProjectCatalog<'a> {
    type Item = &'a Project;
    type IntoIter = Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

impl Serialize for ProjectCatalog<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.projects)
    }
}

const AUTHORED: &[Project] = &[Project::new(
    "An Introduction to Machine Learning with Python",
    "The basics of using the machine learning packages SKLearn and PyTorch.",
)
.with_img_src("/static/images/time-machine.jpg")
.with_href("/blog/ML-Tutorial")];

const _: () = assert!(
    ProjectCatalog::new(AUTHORED).is_well_formed(),
    "every project needs a title and a description"
);

pub static PROJECTS: ProjectCatalog<'static> = ProjectCatalog::new(AUTHORED);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const TUTORIAL: &str = "An Introduction to Machine Learning with Python";

    #[test]
    fn authored_catalog_has_the_tutorial_entry() {
        assert_eq!(PROJECTS.len(), 1);
        let project = PROJECTS.all()[0];
        assert_eq!(project.title, TUTORIAL);
        assert_eq!(project.href, Some("/blog/ML-Tutorial"));
        assert_eq!(project.img_src, Some("/static/images/time-machine.jpg"));
    }

    #[test]
    fn every_project_has_title_and_description() {
        for project in &PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
        }
        assert!(PROJECTS.is_well_formed());
    }

    #[test]
    fn repeated_reads_are_identical() {
        let first = PROJECTS.all();
        let second = PROJECTS.all();
        assert_eq!(first, second);
        assert_eq!(first.as_ptr(), second.as_ptr());
    }

    #[test]
    fn appended_entry_lands_last() {
        let extra = Project::new("Rust Notes", "Short write-ups on ownership.");
        let mut authored = PROJECTS.all().to_vec();
        authored.push(extra);
        let extended = ProjectCatalog::new(&authored);

        assert_eq!(extended.len(), PROJECTS.len() + 1);
        assert_eq!(extended.get(extended.len() - 1), Some(&extra));
        assert_eq!(&extended.all()[..PROJECTS.len()], PROJECTS.all());
    }

    #[test]
    fn missing_link_and_image_are_omitted() {
        let bare = Project::new("Plain", "No link, no picture.");
        assert!(!bare.has_link());
        assert!(!bare.has_image());

        let value = serde_json::to_value(bare).unwrap();
        assert_eq!(
            value,
            json!({ "title": "Plain", "description": "No link, no picture." })
        );
    }

    #[test]
    fn image_source_uses_camel_case_key() {
        let value = serde_json::to_value(PROJECTS).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["imgSrc"], "/static/images/time-machine.jpg");
        assert_eq!(entries[0]["href"], "/blog/ML-Tutorial");
        assert!(entries[0].get("img_src").is_none());
    }

    #[test]
    fn blank_fields_are_not_well_formed() {
        assert!(!Project::new("", "described").is_well_formed());
        assert!(!Project::new("titled", "").is_well_formed());

        let entries = [Project::new("ok", "fine"), Project::new("", "untitled")];
        assert!(!ProjectCatalog::new(&entries).is_well_formed());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let empty = ProjectCatalog::new(&[]);
        assert!(empty.is_empty());
        assert!(empty.is_well_formed());
        assert_eq!(serde_json::to_value(empty).unwrap(), Value::Array(vec![]));
    }
}
