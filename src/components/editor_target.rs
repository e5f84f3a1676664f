//! Edit Target Type
//!
//! The dashboard row currently open for inline editing. Only one row across
//! all panels is edited at a time.

/// Edit target type - a post or a project, by document id
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Blog(String),
    Project(String),
}

impl EditTarget {
    pub fn is_blog(target: &Option<EditTarget>, id: &str) -> bool {
        matches!(target, Some(EditTarget::Blog(current)) if current == id)
    }

    pub fn is_project(target: &Option<EditTarget>, id: &str) -> bool {
        matches!(target, Some(EditTarget::Project(current)) if current == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_do_not_cross_panels() {
        let target = Some(EditTarget::Blog("x".into()));
        assert!(EditTarget::is_blog(&target, "x"));
        assert!(!EditTarget::is_project(&target, "x"));
        assert!(!EditTarget::is_blog(&None, "x"));
    }
}
