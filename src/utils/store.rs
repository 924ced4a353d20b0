//! Typed domain accessors over the cache and storage backend
//!
//! One `AppStore` is created in `main` and handed to the component tree
//! through Leptos context. Every setter writes through the backend first,
//! then refreshes the cache entry, so cached state never trails storage.

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Project, Theme, User};
use crate::utils::activity_log;
use crate::utils::cache::{Cache, CacheStats, Loaded};
use crate::utils::storage::StorageBackend;

// Persisted storage keys
const USER_STORAGE_KEY: &str = "app_user";
const PROJECTS_STORAGE_KEY: &str = "app_projects";
const THEME_STORAGE_KEY: &str = "app_theme";

// Logical cache keys
const USER_CACHE_KEY: &str = "user";
const PROJECTS_CACHE_KEY: &str = "projects";
const THEME_CACHE_KEY: &str = "theme";

#[derive(Clone)]
pub struct AppStore {
    storage: Rc<dyn StorageBackend>,
    cache: Rc<RefCell<Cache>>,
}

impl AppStore {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        AppStore {
            storage,
            cache: Rc::new(RefCell::new(Cache::new())),
        }
    }

    // ============================================
    // User
    // ============================================

    pub fn current_user(&self) -> Option<User> {
        let storage = Rc::clone(&self.storage);
        self.cache
            .borrow_mut()
            .get(USER_CACHE_KEY, move || load_json(&*storage, USER_STORAGE_KEY))
    }

    /// Replaces the stored user record wholesale.
    pub fn set_current_user(&self, user: &User) {
        let storage = Rc::clone(&self.storage);
        self.cache
            .borrow_mut()
            .set(USER_CACHE_KEY, user.clone(), |u| {
                persist_json(&*storage, USER_STORAGE_KEY, u);
            });
        activity_log::log_info("store", &format!("user {} saved", user.id));
    }

    pub fn invalidate_user_cache(&self) {
        self.cache.borrow_mut().invalidate(USER_CACHE_KEY);
    }

    // ============================================
    // Projects
    // ============================================

    /// Absent or unreadable stored list reads as empty.
    pub fn projects(&self) -> Vec<Project> {
        let storage = Rc::clone(&self.storage);
        self.cache
            .borrow_mut()
            .get(PROJECTS_CACHE_KEY, move || {
                load_json(&*storage, PROJECTS_STORAGE_KEY)
            })
            .unwrap_or_default()
    }

    /// Find-or-append by id: a matching id replaces the entry in place,
    /// otherwise the project is appended. Lists stay small (tens of
    /// entries), so the scan is linear.
    pub fn save_project(&self, project: Project) {
        let mut list = self.projects();
        match list.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => *slot = project.clone(),
            None => list.push(project.clone()),
        }
        let storage = Rc::clone(&self.storage);
        self.cache
            .borrow_mut()
            .set(PROJECTS_CACHE_KEY, list, |projects| {
                persist_json(&*storage, PROJECTS_STORAGE_KEY, projects);
            });
        activity_log::log_info("store", &format!("project {} saved", project.id));
    }

    pub fn invalidate_projects_cache(&self) {
        self.cache.borrow_mut().invalidate(PROJECTS_CACHE_KEY);
    }

    // ============================================
    // Theme
    // ============================================

    /// The standalone theme key, not `UserPreferences.theme`. The two are
    /// stored independently and never reconciled.
    pub fn theme(&self) -> Theme {
        let storage = Rc::clone(&self.storage);
        self.cache
            .borrow_mut()
            .get(THEME_CACHE_KEY, move || {
                match storage.read(THEME_STORAGE_KEY) {
                    Some(raw) => Loaded::Value(Theme::parse(&raw)),
                    None => Loaded::Missing,
                }
            })
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        let storage = Rc::clone(&self.storage);
        self.cache.borrow_mut().set(THEME_CACHE_KEY, theme, |t| {
            storage.write(THEME_STORAGE_KEY, t.as_str());
        });
        activity_log::log_info("store", &format!("theme set to {}", theme.as_str()));
    }

    // ============================================
    // Introspection
    // ============================================

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

/// Read + deserialize one JSON entity. Malformed stored bytes are reported
/// as `Corrupt`, which callers see as absence.
fn load_json<T: DeserializeOwned>(storage: &dyn StorageBackend, key: &str) -> Loaded<T> {
    match storage.read(key) {
        None => Loaded::Missing,
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Loaded::Value(value),
            Err(err) => {
                activity_log::log_warn("store", &format!("discarding corrupt `{key}`: {err}"));
                Loaded::Corrupt
            }
        },
    }
}

fn persist_json<T: Serialize>(storage: &dyn StorageBackend, key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        storage.write(key, &json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectStatus, UserRole};
    use crate::utils::storage::MemoryStorage;

    fn store() -> AppStore {
        AppStore::new(Rc::new(MemoryStorage::default()))
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            name: id.to_uppercase(),
            role: UserRole::Editor,
            avatar_url: None,
            preferences: Default::default(),
        }
    }

    fn project(id: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {id}"),
            description: None,
            status,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
            owner_id: "u1".to_string(),
        }
    }

    #[test]
    fn test_get_after_set_returns_new_value() {
        let store = store();
        store.set_current_user(&user("u1"));
        let mut updated = user("u1");
        updated.name = "Renamed".to_string();
        store.set_current_user(&updated);
        assert_eq!(store.current_user().unwrap().name, "Renamed");
    }

    #[test]
    fn test_second_user_read_is_a_hit() {
        let store = store();
        store.set_current_user(&user("u1"));
        store.current_user();
        store.current_user();
        assert!(store.cache_stats().hits >= 1);
    }

    #[test]
    fn test_user_survives_cache_invalidation_via_storage() {
        let store = store();
        store.set_current_user(&user("u1"));
        store.invalidate_user_cache();
        assert!(store.cache_stats().invalidations >= 1);
        let before = store.cache_stats().misses;
        let loaded = store.current_user().unwrap();
        assert_eq!(loaded.id, "u1");
        assert_eq!(store.cache_stats().misses, before + 1);
    }

    #[test]
    fn test_three_reads_after_invalidation_hit_rate() {
        let store = store();
        store.set_current_user(&user("u1"));
        store.invalidate_user_cache();
        store.current_user();
        store.current_user();
        store.current_user();
        let stats = store.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 2);
        assert!((stats.hit_rate - 66.666).abs() < 0.1);
    }

    #[test]
    fn test_save_project_appends_then_replaces() {
        let store = store();
        store.save_project(project("p1", ProjectStatus::Active));
        assert_eq!(store.projects().len(), 1);

        store.save_project(project("p1", ProjectStatus::Archived));
        let projects = store.projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].status, ProjectStatus::Archived);

        store.save_project(project("p2", ProjectStatus::Draft));
        assert_eq!(store.projects().len(), 2);
    }

    #[test]
    fn test_projects_default_to_empty() {
        let store = store();
        assert!(store.projects().is_empty());
    }

    #[test]
    fn test_corrupt_user_json_reads_as_absent() {
        let backend = Rc::new(MemoryStorage::default());
        backend.write("app_user", "{not json");
        let store = AppStore::new(backend);
        assert_eq!(store.current_user(), None);
        // fail-soft: a later write recovers the record
        store.set_current_user(&user("u2"));
        assert_eq!(store.current_user().unwrap().id, "u2");
    }

    #[test]
    fn test_corrupt_projects_json_reads_as_empty() {
        let backend = Rc::new(MemoryStorage::default());
        backend.write("app_projects", "[[[");
        let store = AppStore::new(backend);
        assert!(store.projects().is_empty());
    }

    #[test]
    fn test_theme_defaults_to_system() {
        let store = store();
        assert_eq!(store.theme(), Theme::System);
    }

    #[test]
    fn test_theme_is_stored_raw_not_json() {
        let backend = Rc::new(MemoryStorage::default());
        let store = AppStore::new(Rc::clone(&backend) as Rc<dyn StorageBackend>);
        store.set_theme(Theme::Dark);
        assert_eq!(backend.read("app_theme"), Some("dark".to_string()));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_setters_write_through_to_storage() {
        let backend = Rc::new(MemoryStorage::default());
        let store = AppStore::new(Rc::clone(&backend) as Rc<dyn StorageBackend>);
        store.save_project(project("p1", ProjectStatus::Active));
        let raw = backend.read("app_projects").unwrap();
        assert!(raw.contains(r#""id":"p1""#));
    }
}
