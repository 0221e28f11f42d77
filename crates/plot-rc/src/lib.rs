// File: crates/plot-rc/src/lib.rs
// Summary: rc-params store: dotted-key settings with defaults, TOML files, and scoped overrides.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::Path;

use plot_core::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RcError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse rc file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize rc params: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Backend name used when none has been configured.
pub const DEFAULT_BACKEND: &str = "none";

fn builtin_defaults() -> BTreeMap<String, Value> {
    let mut map = BTreeMap::new();
    map.insert("backend".to_string(), Value::from(DEFAULT_BACKEND));
    map.insert("figure.figsize.width".to_string(), Value::from(8.0));
    map.insert("figure.figsize.height".to_string(), Value::from(6.0));
    map.insert("figure.dpi".to_string(), Value::from(100.0));
    map.insert("lines.linewidth".to_string(), Value::from(1.0));
    map.insert("lines.color".to_string(), Value::from("b"));
    map.insert("axes.grid".to_string(), Value::from(false));
    map
}

/// Settings store keyed by dotted `group.name` strings.
///
/// Three maps: the mutable current values, the built-in defaults, and a
/// read-only snapshot of the values present at construction.
#[derive(Clone, Debug)]
pub struct RcParams {
    current: BTreeMap<String, Value>,
    defaults: BTreeMap<String, Value>,
    original: BTreeMap<String, Value>,
}

impl RcParams {
    pub fn new() -> Self {
        let defaults = builtin_defaults();
        Self {
            current: defaults.clone(),
            original: defaults.clone(),
            defaults,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.current.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.current.insert(key.into(), value.into());
    }

    /// Batch-set keys within a group: `rc("lines", ...)` sets `lines.*`.
    pub fn rc(&mut self, group: &str, pairs: &[(&str, Value)]) {
        for (name, value) in pairs {
            self.current
                .insert(format!("{group}.{name}"), value.clone());
        }
    }

    /// Restore the built-in defaults, discarding every override.
    pub fn rc_defaults(&mut self) {
        self.current = self.defaults.clone();
        log::debug!("rc params restored to built-in defaults");
    }

    /// Default value for a key, independent of the current map.
    pub fn default_value(&self, key: &str) -> Option<&Value> {
        self.defaults.get(key)
    }

    /// Value the key held when this store was constructed.
    pub fn original(&self, key: &str) -> Option<&Value> {
        self.original.get(key)
    }

    pub fn use_backend(&mut self, name: &str) {
        log::debug!("switching backend to {name:?}");
        self.set("backend", name);
    }

    pub fn backend(&self) -> &str {
        self.get("backend")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_BACKEND)
    }

    /// Load a TOML file, flattening nested tables into dotted keys and
    /// merging them over the current values.
    pub fn rc_file(&mut self, path: impl AsRef<Path>) -> Result<(), RcError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let table: toml::Table = text.parse()?;
        let mut loaded = BTreeMap::new();
        flatten_table(&table, "", &mut loaded);
        log::debug!("loaded rc file {} ({} keys)", path.display(), loaded.len());
        self.current.extend(loaded);
        Ok(())
    }

    /// Persist the current map as nested TOML tables.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), RcError> {
        let mut root = toml::Table::new();
        for (key, value) in &self.current {
            insert_dotted(&mut root, key, to_toml(value));
        }
        let text = toml::to_string_pretty(&root)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Apply overrides for the lifetime of the returned guard; dropping it
    /// restores the exact prior state of each touched key.
    pub fn rc_context<I, K>(&mut self, overrides: I) -> RcContext<'_>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut saved = Vec::new();
        for (key, value) in overrides {
            let key = key.into();
            saved.push((key.clone(), self.current.get(&key).cloned()));
            self.current.insert(key, value);
        }
        RcContext { params: self, saved }
    }

    /// Number of keys currently set.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

impl Default for RcParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped override guard returned by [`RcParams::rc_context`].
pub struct RcContext<'a> {
    params: &'a mut RcParams,
    saved: Vec<(String, Option<Value>)>,
}

impl Deref for RcContext<'_> {
    type Target = RcParams;
    fn deref(&self) -> &RcParams {
        self.params
    }
}

impl DerefMut for RcContext<'_> {
    fn deref_mut(&mut self) -> &mut RcParams {
        self.params
    }
}

impl Drop for RcContext<'_> {
    fn drop(&mut self) {
        // Reverse order so overlapping overrides unwind correctly.
        for (key, old) in self.saved.drain(..).rev() {
            match old {
                Some(value) => self.params.current.insert(key, value),
                None => self.params.current.remove(&key),
            };
        }
    }
}

fn flatten_table(table: &toml::Table, prefix: &str, out: &mut BTreeMap<String, Value>) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::Table(inner) => flatten_table(inner, &key, out),
            toml::Value::Boolean(b) => {
                out.insert(key, Value::Bool(*b));
            }
            toml::Value::Integer(i) => {
                out.insert(key, Value::Int(*i));
            }
            toml::Value::Float(f) => {
                out.insert(key, Value::Float(*f));
            }
            toml::Value::String(s) => {
                out.insert(key, Value::Str(s.clone()));
            }
            other => {
                log::warn!("ignoring unsupported rc value for {key}: {other}");
            }
        }
    }
}

fn to_toml(value: &Value) -> toml::Value {
    match value {
        Value::Bool(b) => toml::Value::Boolean(*b),
        Value::Int(i) => toml::Value::Integer(*i),
        Value::Float(f) => toml::Value::Float(*f),
        Value::Str(s) => toml::Value::String(s.clone()),
    }
}

fn insert_dotted(root: &mut toml::Table, key: &str, value: toml::Value) {
    match key.split_once('.') {
        None => {
            root.insert(key.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = root
                .entry(head.to_string())
                .or_insert_with(|| toml::Value::Table(toml::Table::new()));
            // A scalar already sitting where a table is needed gets replaced.
            if !entry.is_table() {
                *entry = toml::Value::Table(toml::Table::new());
            }
            if let toml::Value::Table(inner) = entry {
                insert_dotted(inner, rest, value);
            }
        }
    }
}
