use crate::adapters::storage::EmbeddedStorage;
use crate::core::store::ContentStore;
use crate::domain::model::{ContentTables, Table};
use crate::domain::ports::Storage;
use crate::utils::error::{ContentError, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

fn parse_table<T: DeserializeOwned>(table: Table, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| ContentError::TableParseError {
        table: table.name().to_string(),
        source,
    })
}

fn document(documents: &BTreeMap<Table, Vec<u8>>, table: Table) -> Result<&[u8]> {
    documents
        .get(&table)
        .map(Vec::as_slice)
        .ok_or_else(|| ContentError::ConfigError {
            message: format!("no document supplied for table '{}'", table),
        })
}

/// Parses one JSON document per table into [`ContentTables`]. Does not validate.
pub fn assemble_tables(documents: &BTreeMap<Table, Vec<u8>>) -> Result<ContentTables> {
    Ok(ContentTables {
        countries: parse_table(Table::Countries, document(documents, Table::Countries)?)?,
        sectors: parse_table(Table::Sectors, document(documents, Table::Sectors)?)?,
        overrides: parse_table(Table::Overrides, document(documents, Table::Overrides)?)?,
        occupations: parse_table(Table::Occupations, document(documents, Table::Occupations)?)?,
        skills: parse_table(Table::Skills, document(documents, Table::Skills)?)?,
        ventures: parse_table(Table::Ventures, document(documents, Table::Ventures)?)?,
        pathways: parse_table(Table::Pathways, document(documents, Table::Pathways)?)?,
    })
}

/// The compiled-in tables, parsed but not validated.
pub fn builtin_tables() -> Result<ContentTables> {
    let documents = Table::ALL
        .iter()
        .map(|&table| (table, EmbeddedStorage::document(table).as_bytes().to_vec()))
        .collect();
    assemble_tables(&documents)
}

/// Reads every table through a [`Storage`] and builds a validated store.
pub struct ContentLoader<S: Storage> {
    storage: S,
    fallback_to_builtin: bool,
}

impl<S: Storage> ContentLoader<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            fallback_to_builtin: false,
        }
    }

    /// Serve tables the storage does not have from the compiled-in content.
    pub fn with_builtin_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_builtin = enabled;
        self
    }

    async fn read_table(&self, table: Table) -> Result<Vec<u8>> {
        let file_name = table.file_name();
        match self.storage.read_file(&file_name).await {
            Ok(bytes) => {
                tracing::debug!("Read {} ({} bytes)", file_name, bytes.len());
                Ok(bytes)
            }
            Err(ContentError::IoError(e))
                if self.fallback_to_builtin && e.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::warn!("{} not found, using built-in {} table", file_name, table);
                Ok(EmbeddedStorage::document(table).as_bytes().to_vec())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn load(&self) -> Result<ContentStore> {
        let mut documents = BTreeMap::new();
        for table in Table::ALL {
            documents.insert(table, self.read_table(table).await?);
        }

        let tables = assemble_tables(&documents)?;
        let store = ContentStore::new(tables)?;
        tracing::info!(
            "Loaded content: {} countries, {} occupations",
            store.tables().countries.len(),
            store.occupation_names().len()
        );
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ContentError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_builtin_tables_parse() {
        let tables = builtin_tables().unwrap();
        assert!(tables.countries.contains_key("all"));
        assert!(!tables.sectors.energy.occupations.is_empty());
    }

    #[tokio::test]
    async fn test_load_without_fallback_requires_every_table() {
        let storage = MockStorage::default();
        storage
            .put("countries.json", EmbeddedStorage::document(Table::Countries))
            .await;

        let err = ContentLoader::new(storage).load().await.unwrap_err();
        assert!(matches!(err, ContentError::IoError(_)));
    }

    #[tokio::test]
    async fn test_fallback_fills_missing_tables() {
        let storage = MockStorage::default();
        storage
            .put(
                "countries.json",
                r#"{"all": {"currency": "USD"}, "Kenya": {"currency": "KES"}, "Uganda": {"currency": "UGX"}, "Tanzania": {"currency": "TZS"}, "Rwanda": {"currency": "RWF"}, "Somalia": {"currency": "SOS"}}"#,
            )
            .await;

        let store = ContentLoader::new(storage)
            .with_builtin_fallback(true)
            .load()
            .await
            .unwrap();

        assert_eq!(store.tables().countries.len(), 6);
        assert!(store.country("Ethiopia").is_none());
        assert!(!store.sector(crate::domain::model::SectorTag::Digital).skills.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_table_names_the_table() {
        let storage = MockStorage::default();
        storage.put("ventures.json", "{ not json").await;

        let err = ContentLoader::new(storage)
            .with_builtin_fallback(true)
            .load()
            .await
            .unwrap_err();

        match err {
            ContentError::TableParseError { table, .. } => assert_eq!(table, "ventures"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
