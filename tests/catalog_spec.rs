use coursebook::catalog::{locate, Catalog, CatalogError};
use coursebook::models::*;
use speculate2::speculate;
use std::io::Write;

fn step(id: &str, title: &str) -> Step {
    Step {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
    }
}

fn task(id: &str, title: &str, steps: Vec<Step>) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        steps,
    }
}

fn lab(id: &str, title: &str, tasks: Vec<Task>) -> Lab {
    Lab {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        tasks,
    }
}

fn course(id: &str, title: &str, labs: Vec<Lab>) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        labs,
    }
}

fn fixture() -> Vec<Course> {
    vec![
        course(
            "c1",
            "Rust Fundamentals",
            vec![
                lab(
                    "l1",
                    "Ownership",
                    vec![
                        task("t1", "Move Semantics", vec![step("s1", "Read the example")]),
                        task("t2", "Borrow Checker", vec![step("s1", "Read the rules")]),
                    ],
                ),
                lab("l2", "Lifetimes", vec![]),
            ],
        ),
        course(
            "c2",
            "Web Services",
            vec![
                lab("dup", "Routing", vec![]),
                lab("mixed", "Middleware", vec![task("mixed", "Tracing middleware", vec![])]),
            ],
        ),
        course("c3", "CLI Tools", vec![lab("dup", "Packaging", vec![])]),
    ]
}

fn write_catalog_file(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&path).expect("Failed to create catalog file");
    file.write_all(body.as_bytes()).expect("Failed to write catalog file");
    path
}

speculate! {
    describe "locate_lookups" {
        before {
            let courses = fixture();
        }

        describe "find_course" {
            it "returns the course by id" {
                let found = locate::find_course(&courses, "c1").expect("Course should exist");
                assert_eq!(found.title, "Rust Fundamentals");
            }

            it "returns None for an unknown id" {
                assert!(locate::find_course(&courses, "cX").is_none());
            }

            it "compares ids exactly, without normalization" {
                assert!(locate::find_course(&courses, "C1").is_none());
                assert!(locate::find_course(&courses, " c1").is_none());
            }
        }

        describe "find_lab" {
            it "returns the lab under the given course" {
                let found = locate::find_lab(&courses, "c1", "l1").expect("Lab should exist");
                assert_eq!(found.title, "Ownership");
            }

            it "resolves the same lab id differently per course" {
                let routing = locate::find_lab(&courses, "c2", "dup").expect("Lab should exist");
                let packaging = locate::find_lab(&courses, "c3", "dup").expect("Lab should exist");
                assert_eq!(routing.title, "Routing");
                assert_eq!(packaging.title, "Packaging");
            }

            it "returns None when the course is missing" {
                assert!(locate::find_lab(&courses, "cX", "l1").is_none());
            }
        }

        describe "find_task" {
            it "returns the task under the given lab" {
                let found = locate::find_task(&courses, "c1", "l1", "t2").expect("Task should exist");
                assert_eq!(found.title, "Borrow Checker");
            }

            it "returns None when the lab does not contain the task" {
                assert!(locate::find_task(&courses, "c1", "l2", "t1").is_none());
            }
        }

        describe "find_step" {
            it "returns the step at the full path" {
                let found = locate::find_step(&courses, "c1", "l1", "t1", "s1")
                    .expect("Step should exist");
                assert_eq!(found.title, "Read the example");
            }

            it "disambiguates sibling-scoped step ids by path" {
                let under_t2 = locate::find_step(&courses, "c1", "l1", "t2", "s1")
                    .expect("Step should exist");
                assert_eq!(under_t2.title, "Read the rules");
            }

            it "returns None for an unknown step" {
                assert!(locate::find_step(&courses, "c1", "l1", "t1", "sX").is_none());
            }

            it "returns None when any ancestor is missing, even if deeper ids match" {
                assert!(locate::find_step(&courses, "c1", "lX", "t1", "s1").is_none());
                assert!(locate::find_step(&courses, "cX", "l1", "t1", "s1").is_none());
            }
        }

        describe "find_item" {
            it "wraps a matched task with its ancestor ids" {
                let found = locate::find_item(&courses, "t1", TraversalOrder::Pre)
                    .expect("Item should exist");
                assert_eq!(found.course_id.as_deref(), Some("c1"));
                assert_eq!(found.lab_id.as_deref(), Some("l1"));
                assert!(found.task_id.is_none());
                assert!(matches!(found.item, CatalogNode::Task(_)));
            }

            it "returns None when no node matches" {
                assert!(locate::find_item(&courses, "missing", TraversalOrder::Pre).is_none());
            }

            it "visits a node before its descendants under pre-order" {
                // Lab "mixed" and its own task share an id; pre-order picks the lab.
                let found = locate::find_item(&courses, "mixed", TraversalOrder::Pre)
                    .expect("Item should exist");
                assert!(matches!(found.item, CatalogNode::Lab(_)));
            }

            it "visits a node after its descendants under post-order" {
                let found = locate::find_item(&courses, "mixed", TraversalOrder::Post)
                    .expect("Item should exist");
                assert!(matches!(found.item, CatalogNode::Task(_)));
                assert_eq!(found.course_id.as_deref(), Some("c2"));
                assert_eq!(found.lab_id.as_deref(), Some("mixed"));
            }

            it "visits shallower levels first under level-order" {
                // "dup" names labs under both c2 and c3; level order takes
                // the first in course order.
                let found = locate::find_item(&courses, "dup", TraversalOrder::Level)
                    .expect("Item should exist");
                assert!(matches!(found.item, CatalogNode::Lab(_)));
                assert_eq!(found.course_id.as_deref(), Some("c2"));
            }

            it "takes the first sibling in stored order on ties" {
                // Both t1 and t2 contain a step "s1"; every order visits t1's first.
                for order in [TraversalOrder::Pre, TraversalOrder::Post, TraversalOrder::Level] {
                    let found = locate::find_item(&courses, "s1", order)
                        .expect("Item should exist");
                    assert_eq!(found.item.id(), "s1");
                    assert_eq!(found.task_id.as_deref(), Some("t1"));
                }
            }
        }
    }

    describe "catalog store" {
        describe "accessors" {
            it "clones matches out of the shared forest" {
                let catalog = Catalog::from_courses(fixture());
                let found = catalog.get_course("c1").expect("Course should exist");
                assert_eq!(found.id, "c1");
                assert!(catalog.get_course("cX").is_none());
            }

            it "resolves full paths down to steps" {
                let catalog = Catalog::from_courses(fixture());
                let found = catalog
                    .get_step("c1", "l1", "t2", "s1")
                    .expect("Step should exist");
                assert_eq!(found.title, "Read the rules");
            }

            it "counts nodes per level" {
                let catalog = Catalog::from_courses(fixture());
                let counts = catalog.counts();
                assert_eq!(counts.courses, 3);
                assert_eq!(counts.labs, 5);
                assert_eq!(counts.tasks, 3);
                assert_eq!(counts.steps, 2);
            }
        }

        describe "load" {
            it "loads a valid document" {
                let dir = tempfile::tempdir().expect("Failed to create temp dir");
                let path = write_catalog_file(&dir, r#"{
                    "courses": [
                        {"id": "c1", "title": "Rust Fundamentals", "description": null, "labs": [
                            {"id": "l1", "title": "Ownership", "description": "Moves and borrows"}
                        ]}
                    ]
                }"#);

                let catalog = Catalog::load(&path).expect("Catalog should load");
                assert_eq!(catalog.courses().len(), 1);
                let found = catalog.get_lab("c1", "l1").expect("Lab should exist");
                assert!(found.tasks.is_empty());
            }

            it "rejects duplicate ids within one sibling group" {
                let dir = tempfile::tempdir().expect("Failed to create temp dir");
                let path = write_catalog_file(&dir, r#"{
                    "courses": [
                        {"id": "c1", "title": "One", "description": null, "labs": [
                            {"id": "dup", "title": "First", "description": null},
                            {"id": "dup", "title": "Second", "description": null}
                        ]}
                    ]
                }"#);

                let err = Catalog::load(&path).expect_err("Load should fail");
                assert!(matches!(err, CatalogError::DuplicateId { .. }));
                assert!(err.to_string().contains("\"dup\""));
            }

            it "accepts the same id under different parents" {
                let dir = tempfile::tempdir().expect("Failed to create temp dir");
                let path = write_catalog_file(&dir, r#"{
                    "courses": [
                        {"id": "c1", "title": "One", "description": null, "labs": [
                            {"id": "dup", "title": "First", "description": null}
                        ]},
                        {"id": "c2", "title": "Two", "description": null, "labs": [
                            {"id": "dup", "title": "Second", "description": null}
                        ]}
                    ]
                }"#);

                let catalog = Catalog::load(&path).expect("Catalog should load");
                let first = catalog.get_lab("c1", "dup").expect("Lab should exist");
                let second = catalog.get_lab("c2", "dup").expect("Lab should exist");
                assert_eq!(first.title, "First");
                assert_eq!(second.title, "Second");
            }

            it "fails with a read error for a missing file" {
                let dir = tempfile::tempdir().expect("Failed to create temp dir");
                let err = Catalog::load(&dir.path().join("absent.json"))
                    .expect_err("Load should fail");
                assert!(matches!(err, CatalogError::Read { .. }));
            }

            it "fails with a parse error for malformed JSON" {
                let dir = tempfile::tempdir().expect("Failed to create temp dir");
                let path = write_catalog_file(&dir, "{\"courses\": [");
                let err = Catalog::load(&path).expect_err("Load should fail");
                assert!(matches!(err, CatalogError::Parse { .. }));
            }
        }
    }
}
