use crate::core::store::ContentStore;
use crate::domain::model::{ContentTables, Table};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const ARCHIVE_NAME: &str = "careers_content.zip";
pub const OCCUPATIONS_CSV: &str = "occupations.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Zip,
    Csv,
}

impl ExportFormat {
    pub const NAMES: [&'static str; 3] = ["json", "zip", "csv"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(ExportFormat::Json),
            "zip" => Some(ExportFormat::Zip),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: DateTime<Utc>,
    crate_version: &'a str,
    tables: Vec<String>,
}

/// Pretty-printed JSON for one table, in the same shape the loader reads.
pub fn table_document(tables: &ContentTables, table: Table) -> Result<Vec<u8>> {
    let bytes = match table {
        Table::Countries => serde_json::to_vec_pretty(&tables.countries)?,
        Table::Sectors => serde_json::to_vec_pretty(&tables.sectors)?,
        Table::Overrides => serde_json::to_vec_pretty(&tables.overrides)?,
        Table::Occupations => serde_json::to_vec_pretty(&tables.occupations)?,
        Table::Skills => serde_json::to_vec_pretty(&tables.skills)?,
        Table::Ventures => serde_json::to_vec_pretty(&tables.ventures)?,
        Table::Pathways => serde_json::to_vec_pretty(&tables.pathways)?,
    };
    Ok(bytes)
}

#[derive(Debug, Serialize)]
struct OccupationRow<'a> {
    sector: &'a str,
    name: &'a str,
    hot_demand: bool,
    survey_title: &'a str,
    education: &'a str,
}

pub struct ContentExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> ContentExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes `<table>.json` for every table. Returns the written paths.
    pub async fn export_json(&self, store: &ContentStore) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for table in Table::ALL {
            let path = table.file_name();
            let data = table_document(store.tables(), table)?;
            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, &data).await?;
            written.push(path);
        }
        Ok(written)
    }

    /// Writes every table plus `manifest.json` into a single archive.
    pub async fn export_zip(&self, store: &ContentStore) -> Result<String> {
        let manifest = Manifest {
            generated_at: Utc::now(),
            crate_version: env!("CARGO_PKG_VERSION"),
            tables: Table::ALL.iter().map(Table::file_name).collect(),
        };

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            for table in Table::ALL {
                zip.start_file::<_, ()>(table.file_name(), FileOptions::default())?;
                zip.write_all(&table_document(store.tables(), table)?)?;
            }

            zip.start_file::<_, ()>("manifest.json", FileOptions::default())?;
            zip.write_all(&serde_json::to_vec_pretty(&manifest)?)?;

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing {} ({} bytes)", ARCHIVE_NAME, zip_data.len());
        self.storage.write_file(ARCHIVE_NAME, &zip_data).await?;
        Ok(ARCHIVE_NAME.to_string())
    }

    /// Flat listing of every occupation, one row per sector entry.
    pub async fn export_occupations_csv(&self, store: &ContentStore) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for (tag, sector) in store.tables().sectors.iter() {
            for occupation in &sector.occupations {
                let detail = store.occupation_detail(&occupation.name);
                writer.serialize(OccupationRow {
                    sector: tag.as_str(),
                    name: &occupation.name,
                    hot_demand: occupation.hot_demand,
                    survey_title: detail.survey_title.as_deref().unwrap_or(""),
                    education: &detail.qualification.education,
                })?;
            }
        }

        let data = writer
            .into_inner()
            .map_err(|e| crate::utils::error::ContentError::IoError(e.into_error()))?;
        self.storage.write_file(OCCUPATIONS_CSV, &data).await?;
        Ok(OCCUPATIONS_CSV.to_string())
    }

    pub async fn export(&self, store: &ContentStore, formats: &[ExportFormat]) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for format in formats {
            match format {
                ExportFormat::Json => written.extend(self.export_json(store).await?),
                ExportFormat::Zip => written.push(self.export_zip(store).await?),
                ExportFormat::Csv => written.push(self.export_occupations_csv(store).await?),
            }
        }
        tracing::info!("Exported {} files", written.len());
        Ok(written)
    }
}
