use course_catalog::db::{fetch_slot, open_database, open_in_memory};
use course_catalog::render::{FileLine, ALL_YEARS_LABEL};
use course_catalog::store::DEFAULT_SLOT;
use course_catalog::view::YearFilter;
use course_catalog::{Catalog, CourseDraft, CourseStore, Interaction};
use tempfile::TempDir;

fn seeded_catalog() -> Catalog {
    let conn = open_in_memory().expect("in-memory database");
    Catalog::new(CourseStore::load(conn, DEFAULT_SLOT).expect("seeded store"))
}

fn draft(name: &str, year: &str) -> CourseDraft {
    CourseDraft {
        name: name.to_string(),
        subject: "biology".to_string(),
        year: year.to_string(),
        ..CourseDraft::default()
    }
}

#[test]
fn first_run_shows_newest_year() {
    let catalog = seeded_catalog();
    assert_eq!(catalog.store().len(), 3);
    assert_eq!(catalog.store().list_years(), ["2024-2025", "2023-2024"]);

    let labels: Vec<String> = catalog.year_tabs().into_iter().map(|tab| tab.label).collect();
    assert_eq!(labels, ["2024-2025", "2023-2024", ALL_YEARS_LABEL]);

    let listing = catalog.listing();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.cards()[0].name, "Object-Oriented Programming");
    assert_eq!(listing.cards()[0].subject, "Computer Science");
}

#[test]
fn newer_year_sorts_first_but_selection_stays() {
    let mut catalog = seeded_catalog();
    catalog.open_add();
    catalog
        .submit(draft("Genetics", "2025-2026"))
        .unwrap()
        .expect("new id");

    assert_eq!(
        catalog.store().list_years(),
        ["2025-2026", "2024-2025", "2023-2024"]
    );
    assert_eq!(
        catalog.view_state().selected_year().year(),
        Some("2024-2025")
    );
    assert_eq!(catalog.interaction(), Interaction::Idle);
}

#[test]
fn search_across_all_years() {
    let mut catalog = seeded_catalog();
    catalog.select_year(YearFilter::All);
    catalog.set_search("quant");

    let listing = catalog.listing();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing.cards()[0].name, "Quantum Mechanics");

    catalog.set_search("JAVA");
    assert_eq!(listing_names(&catalog), ["Object-Oriented Programming"]);

    catalog.clear_search();
    assert_eq!(catalog.listing().len(), 3);
}

#[test]
fn detail_splits_links_from_plain_lines() {
    let mut catalog = seeded_catalog();
    catalog.open_add();
    let id = catalog
        .submit(CourseDraft {
            files: "https://a.com/x.pdf\n\n  local-notes.txt  \n".to_string(),
            ..draft("Ecology", "2024-2025")
        })
        .unwrap()
        .expect("new id");

    assert!(catalog.view(id));
    let detail = catalog.detail().expect("viewing");
    assert_eq!(detail.description, "No description available.");
    assert_eq!(
        detail.files,
        [
            FileLine::Link("https://a.com/x.pdf".to_string()),
            FileLine::Text("local-notes.txt".to_string()),
        ]
    );
}

#[test]
fn deleting_last_course_of_year_falls_back() {
    let mut catalog = seeded_catalog();
    let id = catalog.listing().cards()[0].id;

    assert!(catalog.view(id));
    assert!(!catalog.delete(|_| false).unwrap());
    assert_eq!(catalog.store().len(), 3);

    assert!(catalog.delete(|_| true).unwrap());
    assert_eq!(catalog.store().len(), 2);
    assert_eq!(
        catalog.view_state().selected_year().year(),
        Some("2023-2024")
    );
    assert_eq!(catalog.listing().len(), 2);
}

#[test]
fn collection_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("catalog.sqlite");

    let edited_id = {
        let mut catalog =
            Catalog::new(CourseStore::load(open_database(&path).unwrap(), DEFAULT_SLOT).unwrap());
        let id = catalog.listing().cards()[0].id;
        catalog.open_edit(id).expect("course exists");
        catalog
            .submit(CourseDraft {
                description: "Rewritten.".to_string(),
                ..draft("Design Patterns", "2024-2025")
            })
            .unwrap();
        id
    };

    let conn = open_database(&path).unwrap();
    assert!(fetch_slot(&conn, DEFAULT_SLOT).unwrap().is_some());
    let store = CourseStore::load(conn, DEFAULT_SLOT).unwrap();
    assert_eq!(store.len(), 3);
    let course = store.get(edited_id).expect("edited course persisted");
    assert_eq!(course.name, "Design Patterns");
    assert_eq!(course.subject, "biology");
    assert_eq!(course.description, "Rewritten.");
}

#[test]
fn pending_year_prefills_new_course() {
    let mut catalog = seeded_catalog();
    assert!(catalog.add_year(" 2026-2027 "));
    assert!(catalog.listing().is_empty());

    let tabs = catalog.year_tabs();
    let active = tabs.iter().find(|tab| tab.active).expect("active tab");
    assert_eq!(active.label, "2026-2027");
    assert_eq!(tabs[0].label, "2026-2027");

    let draft = catalog.open_add();
    assert_eq!(draft.year, "2026-2027");
    assert_eq!(draft.subject, "mathematics");
    catalog.close();

    assert!(!catalog.add_year("   "));
}

fn listing_names(catalog: &Catalog) -> Vec<String> {
    catalog
        .listing()
        .cards()
        .iter()
        .map(|card| card.name.clone())
        .collect()
}
