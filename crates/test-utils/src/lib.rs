//! UMS test utilities.
//!
//! Fixture builders that render catalog documents (JSON and TOML) the way a
//! site administrator would write them, plus assertion helpers.

use serde_json::{Value as JsonValue, json};

/// Create a test module with one allowed role.
pub fn test_module(id: &str, path: &str) -> TestModule {
    TestModule {
        id: id.to_string(),
        label: id.to_string(),
        path: path.to_string(),
        allowed_roles: vec!["admin".to_string()],
        sub_entries: vec![],
        badge: None,
    }
}

/// A module record builder.
#[derive(Debug, Clone)]
pub struct TestModule {
    pub id: String,
    pub label: String,
    pub path: String,
    pub allowed_roles: Vec<String>,
    pub sub_entries: Vec<TestSubEntry>,
    pub badge: Option<String>,
}

/// A sub-module record.
#[derive(Debug, Clone)]
pub struct TestSubEntry {
    pub id: String,
    pub label: String,
    pub path: String,
}

impl TestModule {
    /// Set the display label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Replace the allowed roles.
    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.allowed_roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Grant nobody access (an invalid record).
    pub fn without_roles(mut self) -> Self {
        self.allowed_roles.clear();
        self
    }

    /// Add a sub-module.
    pub fn with_sub(mut self, id: &str, label: &str, path: &str) -> Self {
        self.sub_entries.push(TestSubEntry {
            id: id.to_string(),
            label: label.to_string(),
            path: path.to_string(),
        });
        self
    }

    /// Set the badge.
    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    /// The record as it appears in a catalog document.
    pub fn to_json(&self) -> JsonValue {
        let subs: Vec<JsonValue> = self
            .sub_entries
            .iter()
            .map(|s| json!({ "id": s.id, "label": s.label, "path": s.path }))
            .collect();

        let mut record = json!({
            "id": self.id,
            "label": self.label,
            "path": self.path,
            "allowedRoles": self.allowed_roles,
            "subEntries": subs,
        });
        if let (Some(badge), Some(obj)) = (&self.badge, record.as_object_mut()) {
            obj.insert("badge".to_string(), json!(badge));
        }
        record
    }

    fn to_toml(&self) -> toml::Table {
        let mut table = toml::Table::new();
        table.insert("id".into(), self.id.clone().into());
        table.insert("label".into(), self.label.clone().into());
        table.insert("path".into(), self.path.clone().into());
        table.insert(
            "allowedRoles".into(),
            toml::Value::Array(self.allowed_roles.iter().map(|r| r.clone().into()).collect()),
        );
        if let Some(badge) = &self.badge {
            table.insert("badge".into(), badge.clone().into());
        }

        let subs = self
            .sub_entries
            .iter()
            .map(|s| {
                let mut sub = toml::Table::new();
                sub.insert("id".into(), s.id.clone().into());
                sub.insert("label".into(), s.label.clone().into());
                sub.insert("path".into(), s.path.clone().into());
                toml::Value::Table(sub)
            })
            .collect();
        table.insert("subEntries".into(), toml::Value::Array(subs));

        table
    }
}

/// Render modules as a JSON catalog document (a top-level array).
pub fn json_document(modules: &[TestModule]) -> String {
    JsonValue::Array(modules.iter().map(TestModule::to_json).collect()).to_string()
}

/// Render modules as a TOML catalog document (`[[modules]]`).
pub fn toml_document(modules: &[TestModule]) -> Result<String, toml::ser::Error> {
    let mut doc = toml::Table::new();
    doc.insert(
        "modules".into(),
        toml::Value::Array(
            modules
                .iter()
                .map(|m| toml::Value::Table(m.to_toml()))
                .collect(),
        ),
    );
    toml::to_string(&doc)
}

/// A small campus catalog: a shared dashboard, a library for students and
/// staff, and an admin-only finance module.
pub fn campus_modules() -> Vec<TestModule> {
    vec![
        test_module("home", "/dashboard")
            .with_label("Home")
            .with_roles(&["admin", "faculty", "staff", "student"]),
        test_module("library", "/library")
            .with_label("Library")
            .with_roles(&["staff", "student"])
            .with_sub("library-loans", "Loans", "/library/loans")
            .with_sub("library-catalog", "Catalog", "/library/catalog"),
        test_module("finance", "/finance")
            .with_label("Finance")
            .with_badge("Restricted")
            .with_sub("finance-ledger", "Ledger", "/finance/ledger"),
    ]
}

/// Assertion helpers for command output.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }
}
