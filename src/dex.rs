use crate::config::ReloadPolicy;
use crate::error::DexResult;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A single lookup table row: `[id, type1, type2, ...]` on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DexEntry {
    pub id: String,
    pub type1: Option<String>,
    pub type2: Option<String>,
}

impl DexEntry {
    pub fn has_type(&self, label: &str) -> bool {
        self.type1.as_deref() == Some(label) || self.type2.as_deref() == Some(label)
    }
}

impl TryFrom<&Value> for DexEntry {
    type Error = String;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let fields = value
            .as_array()
            .ok_or_else(|| format!("expected an array, found {}", kind(value)))?;

        if fields.len() < 3 {
            return Err(format!("expected at least 3 fields, found {}", fields.len()));
        }

        let id = match &fields[0] {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => return Err(format!("id must be a string or number, found {}", kind(other))),
        };

        Ok(Self {
            id,
            type1: type_slot(&fields[1], 1)?,
            type2: type_slot(&fields[2], 2)?,
        })
    }
}

fn type_slot(value: &Value, index: usize) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(format!(
            "type slot {} must be a string or null, found {}",
            index,
            kind(other)
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub enum Lookup<'a> {
    Found(&'a DexEntry),
    Malformed(&'a str),
    Missing,
}

/// The parsed lookup table. Malformed rows are kept aside with a reason
/// so one bad row never takes the whole table down.
#[derive(Debug, Default)]
pub struct Dex {
    entries: HashMap<String, DexEntry>,
    defects: HashMap<String, String>,
}

impl Dex {
    pub fn from_json(content: &str) -> DexResult<Self> {
        let raw: HashMap<String, Value> = serde_json::from_str(content)?;

        let mut dex = Self::default();
        for (name, value) in raw {
            match DexEntry::try_from(&value) {
                Ok(entry) => {
                    dex.entries.insert(name, entry);
                }
                Err(reason) => {
                    warn!("Skipping malformed dex entry {:?}: {}", name, reason);
                    dex.defects.insert(name, reason);
                }
            }
        }

        debug!(
            entries = dex.entries.len(),
            defects = dex.defects.len(),
            "Parsed dex"
        );
        Ok(dex)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DexResult<Self> {
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    pub async fn load(path: &Path) -> DexResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        if let Some(entry) = self.entries.get(name) {
            Lookup::Found(entry)
        } else if let Some(reason) = self.defects.get(name) {
            Lookup::Malformed(reason)
        } else {
            Lookup::Missing
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn defect_count(&self) -> usize {
        self.defects.len()
    }
}

/// Where request handlers get the table from.
pub enum DexSource {
    PerRequest(PathBuf),
    Preloaded(Arc<Dex>),
}

impl DexSource {
    /// `Startup` reads the file here, so a bad table fails the boot instead
    /// of the first request.
    pub fn from_policy(policy: ReloadPolicy, path: PathBuf) -> DexResult<Self> {
        match policy {
            ReloadPolicy::PerRequest => {
                info!("📖 Dex will be read from {:?} on every request", path);
                Ok(Self::PerRequest(path))
            }
            ReloadPolicy::Startup => {
                let dex = Dex::load_from_file(&path)?;
                info!(
                    "📚 Loaded {} dex entries ({} malformed) from {:?}",
                    dex.len(),
                    dex.defect_count(),
                    path
                );
                Ok(Self::Preloaded(Arc::new(dex)))
            }
        }
    }

    pub async fn fetch(&self) -> DexResult<Arc<Dex>> {
        match self {
            Self::PerRequest(path) => Ok(Arc::new(Dex::load(path).await?)),
            Self::Preloaded(dex) => Ok(Arc::clone(dex)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_from_typical_row() {
        let entry = DexEntry::try_from(&json!(["25", "Electric", null])).unwrap();
        assert_eq!(entry.id, "25");
        assert_eq!(entry.type1.as_deref(), Some("Electric"));
        assert_eq!(entry.type2, None);
    }

    #[test]
    fn test_entry_numeric_id_and_extra_fields() {
        let entry = DexEntry::try_from(&json!([6, "Fire", "Flying", "extra", 3])).unwrap();
        assert_eq!(entry.id, "6");
        assert_eq!(entry.type2.as_deref(), Some("Flying"));
    }

    #[test]
    fn test_entry_rejects_short_rows() {
        let err = DexEntry::try_from(&json!(["1", "Grass"])).unwrap_err();
        assert!(err.contains("at least 3"));
    }

    #[test]
    fn test_entry_rejects_non_string_types() {
        assert!(DexEntry::try_from(&json!(["1", 7, "Poison"])).is_err());
        assert!(DexEntry::try_from(&json!(["1", "Grass", ["Poison"]])).is_err());
        assert!(DexEntry::try_from(&json!([true, "Grass", "Poison"])).is_err());
        assert!(DexEntry::try_from(&json!({"id": "1"})).is_err());
    }

    #[test]
    fn test_has_type_checks_both_slots() {
        let entry = DexEntry {
            id: "1".into(),
            type1: Some("Grass".into()),
            type2: Some("Poison".into()),
        };
        assert!(entry.has_type("Grass"));
        assert!(entry.has_type("Poison"));
        assert!(!entry.has_type("grass"));
    }

    #[test]
    fn test_lookup_variants() {
        let dex = Dex::from_json(r#"{"Pikachu": ["25", "Electric", "Electric"], "Ditto": ["132"]}"#)
            .unwrap();

        assert!(matches!(dex.lookup("Pikachu"), Lookup::Found(_)));
        assert!(matches!(dex.lookup("Ditto"), Lookup::Malformed(_)));
        assert!(matches!(dex.lookup("pikachu"), Lookup::Missing));
        assert_eq!(dex.len(), 1);
        assert_eq!(dex.defect_count(), 1);
    }

    #[test]
    fn test_non_object_document_is_an_error() {
        assert!(Dex::from_json("[1, 2, 3]").is_err());
        assert!(Dex::from_json("not json").is_err());
    }
}
