use super::*;

fn minimal_json(project_extra: &str) -> String {
    format!(
        r#"{{
            "categories": [{{ "id": "java", "label": "Java" }}, {{ "id": "web", "label": "Web" }}],
            "projects": [{{
                "id": "atm",
                "title": "ATM Interface",
                "description": "Simulated ATM.",
                "features": ["PIN", "Balance"],
                "tech_stack": ["Java"],
                "challenges": "c",
                "solution": "s",
                "image": "/assets/images/atm.jpg",
                "link": "https://github.com/example/atm",
                "categories": ["java"]
                {project_extra}
            }}]
        }}"#
    )
}

// =============================================================
// Embedded data file
// =============================================================

#[test]
fn embedded_catalog_is_valid() {
    let catalog = Catalog::embedded().expect("embedded catalog should validate");
    assert!(!catalog.projects().is_empty());
    assert!(catalog.get("sms").is_some());
}

#[test]
fn embedded_catalog_keeps_feature_order() {
    let catalog = Catalog::embedded().unwrap();
    let sms = catalog.get("sms").unwrap();
    assert_eq!(sms.features.first().map(String::as_str), Some("Student registration and profile management"));
    assert_eq!(
        sms.features.last().map(String::as_str),
        Some("User authentication and role-based access control")
    );
}

#[test]
fn embedded_images_are_remote_or_under_assets() {
    let catalog = Catalog::embedded().unwrap();
    assert!(catalog.get("sms").unwrap().image.starts_with("https://images.unsplash.com/"));
    for project in catalog.projects() {
        assert!(
            project.image.starts_with("https://") || project.image.starts_with("/assets/images/"),
            "{} has image {}",
            project.id,
            project.image
        );
    }
}

// =============================================================
// Parsing + validation
// =============================================================

#[test]
fn from_json_parses_minimal_catalog() {
    let catalog = Catalog::from_json(&minimal_json("")).unwrap();
    assert_eq!(catalog.projects().len(), 1);
    assert_eq!(catalog.categories().len(), 2);
    let atm = catalog.get("atm").unwrap();
    assert_eq!(atm.features, vec!["PIN".to_owned(), "Balance".to_owned()]);
    assert!(atm.summary.is_empty());
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = Catalog::from_json(&minimal_json(r#", "stars": 5"#)).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
}

#[test]
fn from_json_rejects_empty_project_list() {
    let err = Catalog::from_json(r#"{ "categories": [], "projects": [] }"#).unwrap_err();
    assert!(matches!(err, CatalogError::Empty));
}

#[test]
fn from_json_rejects_duplicate_project_ids() {
    let mut value: serde_json::Value = serde_json::from_str(&minimal_json("")).unwrap();
    let first = value["projects"][0].clone();
    value["projects"].as_array_mut().unwrap().push(first);
    let err = Catalog::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateProject(id) if id == "atm"));
}

#[test]
fn from_json_rejects_uppercase_ids() {
    let raw = minimal_json("").replace(r#""id": "atm""#, r#""id": "ATM""#);
    let err = Catalog::from_json(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidId(id) if id == "ATM"));
}

#[test]
fn from_json_rejects_blank_title() {
    let raw = minimal_json("").replace(r#""title": "ATM Interface""#, r#""title": "  ""#);
    let err = Catalog::from_json(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::MissingField { field: "title", .. }));
}

#[test]
fn from_json_rejects_non_http_link() {
    let raw = minimal_json("").replace("https://github.com/example/atm", "ftp://example/atm");
    let err = Catalog::from_json(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidLink { .. }));
}

#[test]
fn from_json_rejects_undeclared_category() {
    let raw = minimal_json("").replace(r#""categories": ["java"]"#, r#""categories": ["rust"]"#);
    let err = Catalog::from_json(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCategory { category, .. } if category == "rust"));
}

#[test]
fn from_json_rejects_reserved_category() {
    let raw = minimal_json("").replace(r#""id": "web""#, r#""id": "all""#);
    let err = Catalog::from_json(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::ReservedCategory));
}

#[test]
fn from_json_rejects_duplicate_category() {
    let raw = minimal_json("").replace(r#""id": "web""#, r#""id": "java""#);
    let err = Catalog::from_json(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCategory(id) if id == "java"));
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn get_returns_none_for_unknown_id() {
    let catalog = Catalog::embedded().unwrap();
    assert!(catalog.get("does-not-exist").is_none());
}

#[test]
fn category_attr_is_space_delimited() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog.get("sms").unwrap().category_attr(), "java database");
}

// =============================================================
// Filter
// =============================================================

#[test]
fn filter_parse_recognizes_sentinel() {
    assert_eq!(Filter::parse("all"), Filter::All);
    assert_eq!(Filter::parse(" web "), Filter::Category("web".to_owned()));
    assert_eq!(Filter::All.as_str(), "all");
    assert_eq!(Filter::Category("web".to_owned()).as_str(), "web");
}

#[test]
fn filter_all_matches_every_card() {
    let catalog = Catalog::embedded().unwrap();
    let ids = catalog.matching_ids(&Filter::All);
    assert_eq!(ids.len(), catalog.projects().len());
}

#[test]
fn filter_category_matches_exactly_members() {
    let catalog = Catalog::embedded().unwrap();
    for category in catalog.categories() {
        let filter = Filter::Category(category.id.clone());
        let ids = catalog.matching_ids(&filter);
        for project in catalog.projects() {
            let member = project.categories.contains(&category.id);
            assert_eq!(ids.contains(&project.id.as_str()), member, "{} / {}", project.id, category.id);
        }
    }
}

#[test]
fn filter_matches_attr_splits_on_whitespace() {
    let filter = Filter::Category("web".to_owned());
    assert!(filter.matches_attr("java web"));
    assert!(!filter.matches_attr("webapp java"));
    assert!(Filter::All.matches_attr(""));
}

#[test]
fn filter_unknown_category_matches_nothing() {
    let catalog = Catalog::embedded().unwrap();
    assert!(catalog.matching_ids(&Filter::parse("cobol")).is_empty());
}
