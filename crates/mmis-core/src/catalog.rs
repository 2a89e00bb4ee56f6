//! Catalog
//!
//! Fixed option lists (projects, test areas, item types) and the rules for
//! the locally cached custom project list.

use std::collections::BTreeSet;

use crate::validation::ValidationError;

/// Projects that always exist and cannot be deleted
pub const DEFAULT_PROJECTS: &[&str] = &[
    "Astoria",
    "Athena",
    "Turin",
    "Bondi Beach",
    "Zebra Beach",
    "Mandolin Beach",
    "Gulp",
    "Xena",
    "Agora",
    "Humu Beach",
    "Hi-Lo",
    "Flying Probe",
];

/// Shared stock not tied to a product line
pub const COMMON_PROJECT: &str = "Common";

pub const REGULAR_TEST_AREAS: &[&str] = &[
    "ICT_Mobo",
    "BSI_Mobo",
    "FBT_Mobo",
    "ICT_Agora",
    "FBT_Agora",
    "TOOLS",
];

pub const COMMON_TEST_AREAS: &[&str] = &["Hi-Lo", "Flying Probe", "Development"];

pub const ITEM_TYPES: &[&str] = &["part", "tool"];

pub const TRANSACTION_TYPES: &[&str] = &["request", "return", "restock", "transfer"];

/// Test areas offered for a project
pub fn test_areas_for(project: &str) -> &'static [&'static str] {
    if project == COMMON_PROJECT {
        COMMON_TEST_AREAS
    } else {
        REGULAR_TEST_AREAS
    }
}

/// Every test area known to the catalog, regular ones first
pub fn all_test_areas() -> Vec<String> {
    REGULAR_TEST_AREAS
        .iter()
        .chain(COMMON_TEST_AREAS)
        .map(|area| area.to_string())
        .collect()
}

/// Defaults plus custom projects, deduplicated and sorted
pub fn merge_projects<S: AsRef<str>>(custom: &[S]) -> Vec<String> {
    DEFAULT_PROJECTS
        .iter()
        .map(|p| p.to_string())
        .chain(custom.iter().map(|p| p.as_ref().trim().to_string()))
        .filter(|p| !p.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Projects selectable where stock may live in the common pool
pub fn projects_with_common(projects: &[String]) -> Vec<String> {
    let mut all = vec![COMMON_PROJECT.to_string()];
    all.extend(projects.iter().filter(|p| *p != COMMON_PROJECT).cloned());
    all
}

pub fn is_custom_project(name: &str) -> bool {
    name != COMMON_PROJECT && !DEFAULT_PROJECTS.contains(&name)
}

/// The part of the list that needs persisting
pub fn custom_only(projects: &[String]) -> Vec<String> {
    projects
        .iter()
        .filter(|p| is_custom_project(p))
        .cloned()
        .collect()
}

pub fn add_project(projects: &[String], name: &str) -> Result<Vec<String>, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyProjectName);
    }
    if projects.iter().any(|p| p.eq_ignore_ascii_case(name)) {
        return Err(ValidationError::DuplicateProject);
    }
    let mut updated = projects.to_vec();
    updated.push(name.to_string());
    updated.sort();
    Ok(updated)
}

pub fn remove_project(projects: &[String], name: &str) -> Result<Vec<String>, ValidationError> {
    if !is_custom_project(name) {
        return Err(ValidationError::DefaultProject);
    }
    if !projects.iter().any(|p| p == name) {
        return Err(ValidationError::UnknownProject);
    }
    Ok(projects.iter().filter(|p| *p != name).cloned().collect())
}

/// Case-insensitive substring filter used by every searchable dropdown
pub fn filter_options<S: AsRef<str>>(options: &[S], query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .map(|o| o.as_ref())
        .filter(|o| o.to_lowercase().contains(&query))
        .map(str::to_string)
        .collect()
}

/// True when the typed text is not an existing project (offer "Add as new")
pub fn is_new_project_name(projects: &[String], typed: &str) -> bool {
    let typed = typed.trim();
    !typed.is_empty() && !projects.iter().any(|p| p.eq_ignore_ascii_case(typed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_projects_dedups_and_sorts() {
        let merged = merge_projects(&["Zeta", "Astoria", "  ", "Alpha"]);
        assert_eq!(merged.len(), DEFAULT_PROJECTS.len() + 2);
        assert_eq!(merged[0], "Agora");
        assert_eq!(merged[1], "Alpha");
        assert!(merged.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_test_areas_for_common() {
        assert_eq!(test_areas_for("Common"), COMMON_TEST_AREAS);
        assert_eq!(test_areas_for("Astoria"), REGULAR_TEST_AREAS);
    }

    #[test]
    fn test_add_project_rules() {
        let projects = merge_projects::<&str>(&[]);
        assert_eq!(add_project(&projects, "  "), Err(ValidationError::EmptyProjectName));
        assert_eq!(add_project(&projects, "astoria"), Err(ValidationError::DuplicateProject));

        let updated = add_project(&projects, " Nova ").unwrap();
        assert!(updated.contains(&"Nova".to_string()));
        assert_eq!(custom_only(&updated), vec!["Nova".to_string()]);
    }

    #[test]
    fn test_remove_project_rules() {
        let projects = merge_projects(&["Nova"]);
        assert_eq!(remove_project(&projects, "Athena"), Err(ValidationError::DefaultProject));
        assert_eq!(remove_project(&projects, "Ghost"), Err(ValidationError::UnknownProject));
        let updated = remove_project(&projects, "Nova").unwrap();
        assert_eq!(updated, merge_projects::<&str>(&[]));
    }

    #[test]
    fn test_filter_options() {
        let hits = filter_options(REGULAR_TEST_AREAS, " mobo");
        assert_eq!(hits, vec!["ICT_Mobo", "BSI_Mobo", "FBT_Mobo"]);
        assert_eq!(filter_options(REGULAR_TEST_AREAS, "").len(), REGULAR_TEST_AREAS.len());
    }

    #[test]
    fn test_is_new_project_name() {
        let projects = merge_projects::<&str>(&[]);
        assert!(!is_new_project_name(&projects, "GULP"));
        assert!(!is_new_project_name(&projects, " "));
        assert!(is_new_project_name(&projects, "Nova"));
    }

    #[test]
    fn test_common_project_is_not_custom() {
        assert!(!is_custom_project(COMMON_PROJECT));
        let projects = projects_with_common(&merge_projects::<&str>(&[]));
        assert_eq!(remove_project(&projects, COMMON_PROJECT), Err(ValidationError::DefaultProject));
        assert!(custom_only(&projects).is_empty());
    }

    #[test]
    fn test_projects_with_common() {
        let projects = vec!["Astoria".to_string(), "Common".to_string()];
        assert_eq!(projects_with_common(&projects), vec!["Common", "Astoria"]);
    }
}
