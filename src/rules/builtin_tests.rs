use crate::document::Document;

use super::*;

const CONFORMING_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>Lesson</title></head>
<body>
<div class="navbar"><a href="/">Home</a></div>
<h1>Lesson</h1>
<blockquote class="prereq"><p>Some prior knowledge.</p></blockquote>
<blockquote class="objectives"><p>Learn things.</p></blockquote>
<div class="syllabus">
<h2>Syllabus</h2>
<table><tr><td>Topic</td></tr></table>
</div>
<footer>Copyright</footer>
</body>
</html>
"#;

#[test]
fn builtin_registers_all_rules() {
    let registry = RuleRegistry::builtin().unwrap();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(
        names,
        vec![
            "has_footer",
            "has_navbar",
            "has_title_in_head",
            "has_title_in_body",
            "has_prereq",
            "has_syllabus",
            "has_objectives"
        ]
    );
}

#[test]
fn conforming_page_passes_every_builtin_rule() {
    let registry = RuleRegistry::builtin().unwrap();
    let document = Document::parse("index.html", CONFORMING_INDEX);

    for name in [
        "has_footer",
        "has_navbar",
        "has_title_in_head",
        "has_title_in_body",
        "has_prereq",
        "has_syllabus",
        "has_objectives",
    ] {
        let violations = registry.lookup(name).unwrap().apply(&document);
        assert!(violations.is_empty(), "{name} reported {violations:?}");
    }
}

#[test]
fn missing_footer_and_navbar_are_reported() {
    let registry = RuleRegistry::builtin().unwrap();
    let document = Document::parse(
        "page.html",
        "<html><head><title>T</title></head><body><h1>T</h1></body></html>",
    );

    let footer = registry.lookup("has_footer").unwrap().apply(&document);
    assert_eq!(footer.len(), 1);
    assert_eq!(footer[0].description, "footer");

    let navbar = registry.lookup("has_navbar").unwrap().apply(&document);
    assert_eq!(navbar.len(), 1);
    assert_eq!(navbar[0].description, "navbar");
}

#[test]
fn syllabus_rule_can_emit_three_diagnostics() {
    let registry = RuleRegistry::builtin().unwrap();
    let document = Document::parse("index.html", "<html><body></body></html>");

    let violations = registry.lookup("has_syllabus").unwrap().apply(&document);
    let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
    assert_eq!(descriptions, vec!["syllabus", "syllabus heading", "syllabus table"]);
}

#[test]
fn title_in_head_ignores_body_headings() {
    let registry = RuleRegistry::builtin().unwrap();
    let document = Document::parse(
        "page.html",
        "<html><head></head><body><h1>Body only</h1></body></html>",
    );

    let violations = registry
        .lookup("has_title_in_head")
        .unwrap()
        .apply(&document);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].actual, 0);
}
