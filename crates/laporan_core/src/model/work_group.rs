//! Work group domain model.
//!
//! # Responsibility
//! - Carry one crew/category with its ordered task descriptions.
//! - Hold image documentation attached after parsing.
//!
//! # Invariants
//! - `tasks` keeps source appearance order; nothing here reorders it.
//! - `documentation` is empty until the binder attaches images.

use crate::model::documentation::ImageRef;
use serde::{Deserialize, Serialize};

/// One named crew/category and the tasks reported for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkGroup {
    /// Title-cased group name, derived from the text before the first `=`.
    pub name: String,
    /// Normalized task descriptions in source order.
    pub tasks: Vec<String>,
    /// Display-ready images attached by the documentation binder.
    #[serde(default)]
    pub documentation: Vec<ImageRef>,
}

impl WorkGroup {
    /// Creates a group with no documentation attached yet.
    pub fn new(name: impl Into<String>, tasks: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tasks,
            documentation: Vec::new(),
        }
    }

    /// Appends bound images to this group.
    ///
    /// The group takes ownership of the references; the binder keeps no
    /// handle on them.
    pub fn attach_documentation(&mut self, images: Vec<ImageRef>) {
        self.documentation.extend(images);
    }
}

#[cfg(test)]
mod tests {
    use super::WorkGroup;
    use crate::model::documentation::{DisplaySize, ImageRef};
    use std::path::PathBuf;

    #[test]
    fn new_group_starts_without_documentation() {
        let group = WorkGroup::new("Sipil Jalan", vec!["Pengecoran jalan.".to_string()]);
        assert!(group.documentation.is_empty());
        assert_eq!(group.tasks.len(), 1);
    }

    #[test]
    fn attach_documentation_keeps_task_order() {
        let mut group = WorkGroup::new(
            "Alat Berat",
            vec!["(Excavator): Gali".to_string(), "(Dozer): Ratakan".to_string()],
        );
        group.attach_documentation(vec![ImageRef {
            path: PathBuf::from("a.png"),
            width: 4,
            height: 2,
            display: DisplaySize::Landscape,
        }]);

        assert_eq!(group.documentation.len(), 1);
        assert_eq!(group.tasks[0], "(Excavator): Gali");
        assert_eq!(group.tasks[1], "(Dozer): Ratakan");
    }
}
