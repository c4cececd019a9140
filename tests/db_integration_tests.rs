//! Integration tests for the database layer.
//!
//! Each test gets its own database file in a temporary directory, since every
//! operation opens and closes its own connection.

use tasklist_web::db::Database;
use tempfile::TempDir;

/// Helper to create a fresh database for testing.
fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open(dir.path().join("tasks.db")).expect("Failed to open database");
    (dir, db)
}

mod create_tests {
    use super::*;

    #[test]
    fn create_task_adds_one_row_listed_first() {
        let (_dir, db) = setup_db();
        db.create_task("older", "").unwrap();
        let before = db.list_tasks().unwrap().len();

        let id = db.create_task("newer", "details").unwrap().unwrap();

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks.len(), before + 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "newer");
        assert_eq!(tasks[0].desc, "details");
    }

    #[test]
    fn create_task_with_blank_title_is_ignored() {
        let (_dir, db) = setup_db();

        assert_eq!(db.create_task("", "desc").unwrap(), None);
        assert_eq!(db.create_task("   \t\n", "desc").unwrap(), None);

        assert_eq!(db.count_tasks().unwrap(), 0);
    }

    #[test]
    fn create_task_accepts_empty_desc() {
        let (_dir, db) = setup_db();

        let id = db.create_task("no description", "").unwrap().unwrap();

        let task = db.get_task(id).unwrap().unwrap();
        assert_eq!(task.desc, "");
    }

    #[test]
    fn create_task_trims_fields() {
        let (_dir, db) = setup_db();

        let id = db.create_task("  padded  ", "  text \n").unwrap().unwrap();

        let task = db.get_task(id).unwrap().unwrap();
        assert_eq!(task.title, "padded");
        assert_eq!(task.desc, "text");
    }
}

mod read_tests {
    use super::*;

    #[test]
    fn list_tasks_is_newest_first() {
        let (_dir, db) = setup_db();
        let a = db.create_task("a", "").unwrap().unwrap();
        let b = db.create_task("b", "").unwrap().unwrap();
        let c = db.create_task("c", "").unwrap().unwrap();

        let ids: Vec<i64> = db.list_tasks().unwrap().iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![c, b, a]);
    }

    #[test]
    fn list_tasks_on_empty_store_is_empty() {
        let (_dir, db) = setup_db();
        assert!(db.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn get_task_returns_none_for_unknown_id() {
        let (_dir, db) = setup_db();
        db.create_task("exists", "").unwrap();

        assert!(db.get_task(9999).unwrap().is_none());
    }
}

mod update_tests {
    use super::*;

    #[test]
    fn update_task_replaces_title_and_desc() {
        let (_dir, db) = setup_db();
        let id = db.create_task("old title", "old desc").unwrap().unwrap();

        assert!(db.update_task(id, "new title", "new desc").unwrap());

        let task = db.get_task(id).unwrap().unwrap();
        assert_eq!(task.title, "new title");
        assert_eq!(task.desc, "new desc");
    }

    #[test]
    fn update_task_unknown_id_creates_nothing() {
        let (_dir, db) = setup_db();

        let changed = db.update_task(42, "ghost", "").unwrap();

        assert!(!changed);
        assert_eq!(db.count_tasks().unwrap(), 0);
        assert!(db.get_task(42).unwrap().is_none());
    }

    #[test]
    fn update_task_with_blank_title_keeps_old_values() {
        let (_dir, db) = setup_db();
        let id = db.create_task("keep me", "desc").unwrap().unwrap();

        assert!(!db.update_task(id, "  ", "changed").unwrap());

        let task = db.get_task(id).unwrap().unwrap();
        assert_eq!(task.title, "keep me");
        assert_eq!(task.desc, "desc");
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn delete_task_removes_row() {
        let (_dir, db) = setup_db();
        let id = db.create_task("doomed", "").unwrap().unwrap();

        assert!(db.delete_task(id).unwrap());

        assert!(db.get_task(id).unwrap().is_none());
    }

    #[test]
    fn delete_task_twice_is_a_no_op() {
        let (_dir, db) = setup_db();
        let id = db.create_task("doomed", "").unwrap().unwrap();

        assert!(db.delete_task(id).unwrap());
        assert!(!db.delete_task(id).unwrap());
    }

    #[test]
    fn delete_task_leaves_other_rows() {
        let (_dir, db) = setup_db();
        let keep = db.create_task("keep", "").unwrap().unwrap();
        let gone = db.create_task("gone", "").unwrap().unwrap();

        db.delete_task(gone).unwrap();

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, keep);
    }
}

#[test]
fn full_lifecycle() {
    let (_dir, db) = setup_db();

    db.create_task("Buy milk", "2%").unwrap();
    let tasks = db.list_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].desc, "2%");
    let id = tasks[0].id;

    db.update_task(id, "Buy oat milk", "").unwrap();
    let task = db.get_task(id).unwrap().unwrap();
    assert_eq!(task.title, "Buy oat milk");
    assert_eq!(task.desc, "");

    db.delete_task(id).unwrap();
    assert!(db.get_task(id).unwrap().is_none());
}

#[test]
fn data_survives_reopening() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.db");

    let id = Database::open(&path)
        .unwrap()
        .create_task("persisted", "")
        .unwrap()
        .unwrap();

    let reopened = Database::open(&path).unwrap();
    assert_eq!(reopened.get_task(id).unwrap().unwrap().title, "persisted");
}

#[test]
fn concurrent_writers_all_land() {
    let (_dir, db) = setup_db();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let db = db.clone();
            std::thread::spawn(move || {
                for j in 0..5 {
                    db.create_task(&format!("task {}-{}", i, j), "").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(db.count_tasks().unwrap(), 40);
}
