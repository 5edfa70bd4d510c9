//! CSV-directory-backed workspace.
//!
//! Local mode keeps one `<Table>.csv` per catalog table in a data
//! directory. On open, every present file is bulk-loaded into a fresh
//! in-memory store; after a successful mutation the affected table is
//! written back with the same export path users download through.

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use stocktake::{Catalog, Dashboard, MemoryStore, transfer};

pub struct Workspace {
    dir: PathBuf,
    store: Arc<MemoryStore>,
}

impl Workspace {
    /// Load the data directory into an in-memory store. Missing table
    /// files just mean empty tables.
    pub fn open(dir: &Path) -> Result<Self, Box<dyn Error>> {
        let store = MemoryStore::with_retail_schema();
        for table in Catalog::table_names() {
            let path = dir.join(format!("{table}.csv"));
            if path.exists() {
                let file = File::open(&path)?;
                transfer::import(&store, table, file)
                    .map_err(|e| format!("loading {}: {e}", path.display()))?;
            }
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            store: Arc::new(store),
        })
    }

    /// Facade over the loaded store.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.store.clone())
    }

    /// Write one table back to its file in the data directory.
    pub fn save_table(&self, table: &str) -> Result<(), Box<dyn Error>> {
        let export = transfer::export(self.store.as_ref(), table)?;
        let path = self.dir.join(format!("{table}.csv"));
        std::fs::write(&path, &export.bytes)
            .map_err(|e| format!("writing {}: {e}", path.display()))?;
        Ok(())
    }
}

/// Parse `--set col=value` pairs into a record, typing each value the
/// same way form input is typed.
pub fn parse_set_pairs(pairs: &[String]) -> Result<stocktake::Record, Box<dyn Error>> {
    let mut record = stocktake::Record::new();
    for pair in pairs {
        let (column, raw) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected COL=VALUE, got '{pair}'"))?;
        record.insert(column.trim().to_string(), stocktake::Value::parse(raw));
    }
    Ok(record)
}
