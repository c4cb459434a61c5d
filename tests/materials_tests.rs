// File: tests/materials_tests.rs
use coursedeck::materials::{self, Lesson, Page, lesson_info, resolve};

#[test]
fn test_routes_roundtrip() {
    for page in Page::navigable() {
        assert_eq!(Page::from_route(page.route()), page);
    }
    assert_eq!(Page::from_route("/calendar/"), Page::Calendar);
    assert_eq!(Page::from_route(""), Page::Home);
}

#[test]
fn test_unknown_route_is_404() {
    assert_eq!(Page::from_route("/does-not-exist"), Page::NotFound);
    assert!(!Page::navigable().contains(&Page::NotFound));
    assert_eq!(materials::NOT_FOUND_TITLE, "404 site not found");
}

#[test]
fn test_nus2_page() {
    let info = lesson_info(Lesson::Nus2Fs25);
    assert_eq!(info.location.as_deref(), Some("Ort: HG D5.1"));
    assert_eq!(info.time.as_deref(), Some("Zeit: Freitag 10:15-12:00"));
    assert_eq!(info.weeks.len(), 2);

    let extra = info.weeks[1].extra.as_ref().unwrap();
    assert_eq!(extra.0, "Zeigersimulation");
    assert_eq!(extra.1, Page::Phasors);
}

#[test]
fn test_nus1_has_no_materials_yet() {
    assert!(lesson_info(Lesson::Nus1Hs24).weeks.is_empty());
}

#[test]
fn test_resolve() {
    assert_eq!(resolve("/~obaumgartner/", "/a.pdf"), "/~obaumgartner/a.pdf");
    assert_eq!(resolve("", "a.pdf"), "/a.pdf");
    assert_eq!(
        resolve("/x", "https://polybox.ethz.ch/s"),
        "https://polybox.ethz.ch/s"
    );
}
