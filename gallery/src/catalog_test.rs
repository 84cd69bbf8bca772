use super::*;

fn sample() -> Catalog {
    Catalog::new().with_project(
        "a",
        Project::new("Project A")
            .with_subcategory(ALL_SUBCATEGORY, ["x1", "x2", "x3"])
            .with_subcategory("Foo", ["x2"]),
    )
}

// =============================================================
// Builtin document
// =============================================================

#[test]
fn builtin_catalog_parses() {
    let catalog = Catalog::builtin().expect("builtin catalog should parse");
    assert_eq!(catalog.len(), 3);
    let ids = catalog.project_ids().collect::<Vec<_>>();
    assert_eq!(ids, vec!["cotton:on", "flyingtiger", "designs"]);
}

#[test]
fn builtin_catalog_keeps_subcategory_order() {
    let catalog = Catalog::builtin().expect("builtin catalog should parse");
    let project = catalog.project("cotton:on").expect("cotton:on exists");
    assert_eq!(project.title, "Cotton:On");
    let names = project.subcategory_names().collect::<Vec<_>>();
    assert_eq!(names, vec!["All", "Window", "Sale", "Ladies", "Mens", "Rubi"]);
}

#[test]
fn builtin_catalog_passes_audit() {
    let catalog = Catalog::builtin().expect("builtin catalog should parse");
    assert_eq!(catalog.audit(), Vec::new());
}

#[test]
fn builtin_all_is_union_of_other_subcategories_in_order() {
    let catalog = Catalog::builtin().expect("builtin catalog should parse");
    for (id, project) in catalog.projects() {
        let all = project.subcategory(ALL_SUBCATEGORY).expect("All exists");
        let union = project
            .subcategories
            .iter()
            .filter(|(name, _)| name.as_str() != ALL_SUBCATEGORY)
            .flat_map(|(_, images)| images.iter().cloned())
            .collect::<Vec<_>>();
        assert_eq!(all, union.as_slice(), "project {id}");
    }
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn from_json_reads_description_when_present() {
    let raw = r#"{ "p": { "title": "P", "description": "Window work", "subcategories": { "All": ["i"] } } }"#;
    let catalog = Catalog::from_json(raw).expect("valid document");
    let project = catalog.project("p").expect("p exists");
    assert_eq!(project.description.as_deref(), Some("Window work"));
}

#[test]
fn from_json_defaults_missing_subcategories_to_empty() {
    let raw = r#"{ "p": { "title": "P" } }"#;
    let catalog = Catalog::from_json(raw).expect("valid document");
    let project = catalog.project("p").expect("p exists");
    assert!(project.subcategories.is_empty());
    assert_eq!(project.description, None);
}

#[test]
fn from_json_rejects_malformed_document() {
    let err = Catalog::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.to_string().starts_with("catalog is not valid JSON"));
}

#[test]
fn from_json_rejects_wrong_shape() {
    assert!(Catalog::from_json(r#"["a", "b"]"#).is_err());
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn subcategory_lookup_returns_images_in_order() {
    let catalog = sample();
    let project = catalog.project("a").expect("a exists");
    assert_eq!(project.subcategory("All"), Some(["x1".to_owned(), "x2".to_owned(), "x3".to_owned()].as_slice()));
    assert_eq!(project.subcategory("Foo"), Some(["x2".to_owned()].as_slice()));
    assert_eq!(project.subcategory("Missing"), None);
}

#[test]
fn unknown_project_is_absent() {
    let catalog = sample();
    assert!(catalog.project("nonexistent").is_none());
    assert!(catalog.project("a").is_some());
}

// =============================================================
// Audit
// =============================================================

#[test]
fn audit_reports_missing_all() {
    let catalog = Catalog::new().with_project("b", Project::new("B").with_subcategory("Foo", ["x"]));
    assert_eq!(catalog.audit(), vec![CatalogFinding::MissingAll { project: "b".to_owned() }]);
}

#[test]
fn audit_reports_empty_subcategory_and_stray_image() {
    let catalog = Catalog::new().with_project(
        "c",
        Project::new("C")
            .with_subcategory(ALL_SUBCATEGORY, ["x1"])
            .with_subcategory("Empty", Vec::<String>::new())
            .with_subcategory("Stray", ["x9"]),
    );
    let findings = catalog.audit();
    assert_eq!(findings.len(), 2);
    assert!(findings.contains(&CatalogFinding::EmptySubcategory {
        project: "c".to_owned(),
        subcategory: "Empty".to_owned(),
    }));
    assert!(findings.contains(&CatalogFinding::NotInAll {
        project: "c".to_owned(),
        subcategory: "Stray".to_owned(),
        image: "x9".to_owned(),
    }));
}

#[test]
fn finding_display_names_project() {
    let finding = CatalogFinding::MissingAll { project: "b".to_owned() };
    assert_eq!(finding.to_string(), "project 'b' has no 'All' sub-category");
}
