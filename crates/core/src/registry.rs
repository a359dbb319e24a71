//! SQLite-backed registry of shortcuts.
//!
//! The registry owns the `shortcuts` table. Names are unique; every failure is
//! returned as a typed [`Error`] for the caller to report.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use crate::error::{Error, Result};
use crate::shortcut::{Shortcut, Target};

pub struct Registry {
    conn: Connection,
}

impl Registry {
    /// Opens the registry at `db_path`.
    ///
    /// Creates the database and parent directories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] if the directory or database
    /// cannot be created or opened.
    pub fn open_at(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating database directory `{}`", parent.display());
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::storage_unavailable(db_path, e))?;
            }
        }

        let conn =
            Connection::open(db_path).map_err(|e| Error::storage_unavailable(db_path, e))?;
        Self::ensure_schema(&conn).map_err(|e| Error::storage_unavailable(db_path, e))?;

        debug!("Opened shortcut database at `{}`", db_path.display());
        Ok(Self { conn })
    }

    /// Opens a registry that lives only as long as the returned value.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::storage_unavailable(":memory:", e))?;
        Self::ensure_schema(&conn).map_err(|e| Error::storage_unavailable(":memory:", e))?;

        Ok(Self { conn })
    }

    fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS shortcuts (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                path TEXT NOT NULL,
                command TEXT NOT NULL
            );",
        )
    }

    fn shortcut_from_row(row: &Row<'_>) -> rusqlite::Result<Shortcut> {
        let path: String = row.get(2)?;
        Ok(Shortcut {
            id: row.get(0)?,
            name: row.get(1)?,
            workdir: PathBuf::from(path),
            command: row.get(3)?,
        })
    }

    /// Whether a shortcut called `name` exists. Storage errors count as absent.
    pub fn exists(&self, name: &str) -> bool {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM shortcuts WHERE name = ?1",
                params![name],
                |_| Ok(()),
            )
            .optional();

        match found {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!("Could not check whether `{}` exists: {}", name, e);
                false
            }
        }
    }

    /// Stores a new shortcut.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if `name` is taken, including when a
    /// concurrent writer wins the race and the UNIQUE constraint fires.
    pub fn create(&self, name: &str, workdir: &Path, command: &str) -> Result<()> {
        if command.trim().is_empty() {
            return Err(Error::EmptyCommand);
        }

        if self.exists(name) {
            return Err(Error::DuplicateName(name.to_string()));
        }

        self.conn
            .execute(
                "INSERT INTO shortcuts (name, path, command) VALUES (?1, ?2, ?3)",
                params![name, workdir.to_string_lossy(), command],
            )
            .map_err(|e| unique_violation_as_duplicate(e, name))?;

        info!(
            "Added shortcut `{}` -> `{}` in `{}`",
            name,
            command,
            workdir.display()
        );
        Ok(())
    }

    /// Looks up a shortcut by exact name.
    pub fn get(&self, name: &str) -> Result<Shortcut> {
        self.conn
            .query_row(
                "SELECT id, name, path, command FROM shortcuts WHERE name = ?1",
                params![name],
                Self::shortcut_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Lists shortcuts matching `filter`.
    ///
    /// `Target::All` is ordered by name. A name that matches nothing gives an
    /// empty list rather than an error.
    pub fn list(&self, filter: &Target) -> Result<Vec<Shortcut>> {
        match filter {
            Target::All => {
                let mut statement = self
                    .conn
                    .prepare("SELECT id, name, path, command FROM shortcuts ORDER BY name ASC")?;
                let shortcuts = statement
                    .query_map([], Self::shortcut_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(shortcuts)
            }
            Target::Name(name) => match self.get(name) {
                Ok(shortcut) => Ok(vec![shortcut]),
                Err(Error::NotFound(_)) => Ok(Vec::new()),
                Err(e) => Err(e),
            },
        }
    }

    /// Renames `old` to `new`, keeping its directory, command and identity.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `old` is missing, [`Error::DuplicateName`] if
    /// `new` is taken. Neither record changes in those cases.
    pub fn rename(&self, old: &str, new: &str) -> Result<()> {
        let shortcut = self.get(old)?;

        if self.exists(new) {
            return Err(Error::DuplicateName(new.to_string()));
        }

        let rows = self
            .conn
            .execute(
                "UPDATE shortcuts SET name = ?1 WHERE id = ?2",
                params![new, shortcut.id],
            )
            .map_err(|e| unique_violation_as_duplicate(e, new))?;

        if rows == 0 {
            // Removed by another process between the check and the update
            return Err(Error::NotFound(old.to_string()));
        }

        info!("Renamed shortcut `{}` to `{}`", old, new);
        Ok(())
    }

    /// Deletes the shortcut called `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM shortcuts WHERE name = ?1", params![name])?;

        if rows == 0 {
            return Err(Error::NotFound(name.to_string()));
        }

        info!("Deleted shortcut `{}`", name);
        Ok(())
    }

    /// Deletes every shortcut and returns how many were removed.
    pub fn delete_all(&self) -> Result<usize> {
        let rows = self.conn.execute("DELETE FROM shortcuts", [])?;
        info!("Deleted all {} shortcut(s)", rows);
        Ok(rows)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM shortcuts", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

fn unique_violation_as_duplicate(error: rusqlite::Error, name: &str) -> Error {
    match &error {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            Error::DuplicateName(name.to_string())
        }
        _ => Error::Database(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_registry() -> (Registry, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let registry = Registry::open_at(&temp_dir.path().join("shortcuts.db")).unwrap();
        (registry, temp_dir)
    }

    #[test]
    fn test_open_at_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/dir/shortcuts.db");

        let registry = Registry::open_at(&db_path).unwrap();

        assert!(db_path.exists());
        assert_eq!(registry.count().unwrap(), 0);
    }

    #[test]
    fn test_open_at_unusable_path_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let result = Registry::open_at(&blocker.join("shortcuts.db"));
        assert!(matches!(result, Err(Error::StorageUnavailable { .. })));
    }

    #[test]
    fn test_create_and_get() {
        let (registry, _dir) = create_test_registry();
        registry
            .create("serve", Path::new("/srv/site"), "python -m http.server")
            .unwrap();

        let shortcut = registry.get("serve").unwrap();
        assert_eq!(shortcut.name, "serve");
        assert_eq!(shortcut.workdir, PathBuf::from("/srv/site"));
        assert_eq!(shortcut.command, "python -m http.server");
    }

    #[test]
    fn test_create_duplicate_leaves_original() {
        let (registry, _dir) = create_test_registry();
        registry.create("build", Path::new("/a"), "make").unwrap();

        let result = registry.create("build", Path::new("/b"), "cargo build");
        assert!(matches!(result, Err(Error::DuplicateName(name)) if name == "build"));

        assert_eq!(registry.count().unwrap(), 1);
        assert_eq!(registry.get("build").unwrap().command, "make");
    }

    #[test]
    fn test_create_empty_command_rejected() {
        let (registry, _dir) = create_test_registry();
        let result = registry.create("blank", Path::new("/a"), "   ");
        assert!(matches!(result, Err(Error::EmptyCommand)));
        assert!(!registry.exists("blank"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let (registry, _dir) = create_test_registry();
        registry.create("Build", Path::new("/a"), "make").unwrap();
        registry.create("build", Path::new("/b"), "make").unwrap();

        assert_eq!(registry.count().unwrap(), 2);
    }

    #[test]
    fn test_get_not_found() {
        let (registry, _dir) = create_test_registry();
        assert!(matches!(registry.get("missing"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_list_all_sorted_by_name() {
        let (registry, _dir) = create_test_registry();
        registry.create("zeta", Path::new("/z"), "z").unwrap();
        registry.create("alpha", Path::new("/a"), "a").unwrap();
        registry.create("mid", Path::new("/m"), "m").unwrap();

        let names: Vec<String> = registry
            .list(&Target::All)
            .unwrap()
            .into_iter()
            .map(|shortcut| shortcut.name)
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_list_empty_registry() {
        let (registry, _dir) = create_test_registry();
        assert!(registry.list(&Target::All).unwrap().is_empty());
        assert!(registry
            .list(&Target::Name("missing".to_string()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_rename_preserves_identity() {
        let (registry, _dir) = create_test_registry();
        registry.create("old", Path::new("/work"), "make test").unwrap();
        let before = registry.get("old").unwrap();

        registry.rename("old", "new").unwrap();

        assert!(!registry.exists("old"));
        let after = registry.get("new").unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.workdir, before.workdir);
        assert_eq!(after.command, before.command);
    }

    #[test]
    fn test_rename_onto_existing_name_is_atomic() {
        let (registry, _dir) = create_test_registry();
        registry.create("first", Path::new("/1"), "one").unwrap();
        registry.create("second", Path::new("/2"), "two").unwrap();
        let first = registry.get("first").unwrap();
        let second = registry.get("second").unwrap();

        let result = registry.rename("first", "second");
        assert!(matches!(result, Err(Error::DuplicateName(name)) if name == "second"));

        assert_eq!(registry.get("first").unwrap(), first);
        assert_eq!(registry.get("second").unwrap(), second);
    }

    #[test]
    fn test_rename_missing() {
        let (registry, _dir) = create_test_registry();
        assert!(matches!(
            registry.rename("missing", "other"),
            Err(Error::NotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_delete() {
        let (registry, _dir) = create_test_registry();
        registry.create("gone", Path::new("/g"), "true").unwrap();
        registry.create("kept", Path::new("/k"), "true").unwrap();

        registry.delete("gone").unwrap();

        assert!(!registry.exists("gone"));
        assert!(registry.exists("kept"));
    }

    #[test]
    fn test_delete_missing_leaves_count() {
        let (registry, _dir) = create_test_registry();
        registry.create("kept", Path::new("/k"), "true").unwrap();

        assert!(matches!(registry.delete("missing"), Err(Error::NotFound(_))));
        assert_eq!(registry.count().unwrap(), 1);
    }

    #[test]
    fn test_delete_all() {
        let (registry, _dir) = create_test_registry();
        assert_eq!(registry.delete_all().unwrap(), 0);

        registry.create("a", Path::new("/a"), "true").unwrap();
        registry.create("b", Path::new("/b"), "true").unwrap();
        assert_eq!(registry.delete_all().unwrap(), 2);
        assert_eq!(registry.count().unwrap(), 0);
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("shortcuts.db");

        Registry::open_at(&db_path)
            .unwrap()
            .create("persist", Path::new("/p"), "ls")
            .unwrap();

        let reopened = Registry::open_at(&db_path).unwrap();
        assert_eq!(reopened.get("persist").unwrap().command, "ls");
    }

    #[test]
    fn test_unique_constraint_maps_to_duplicate() {
        let registry = Registry::open_in_memory().unwrap();
        registry.create("raced", Path::new("/r"), "true").unwrap();

        let error = registry
            .conn
            .execute(
                "INSERT INTO shortcuts (name, path, command) VALUES ('raced', '/x', 'x')",
                [],
            )
            .unwrap_err();
        assert!(matches!(
            unique_violation_as_duplicate(error, "raced"),
            Error::DuplicateName(_)
        ));
    }
}
