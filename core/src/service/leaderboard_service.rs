use std::collections::HashMap;
use std::io::Write;

use anyhow::{anyhow, Result};

use crate::model::catalog::ProductCatalog;
use crate::model::entry::LeaderboardEntry;
use crate::repository::traits::LeaderboardRepository;
use crate::service::calculator::calculate_totals;

pub struct LeaderboardService<R: LeaderboardRepository> {
    repo: R,
    catalog: ProductCatalog,
}

impl<R: LeaderboardRepository> LeaderboardService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            catalog: ProductCatalog::standard(),
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    // The empty-name check is the only validation the tracker does. Repeat
    // submissions under the same name are intentional appends, not upserts.
    pub fn submit(&self, name: &str, counts: &HashMap<String, u32>) -> Result<LeaderboardEntry> {
        if name.trim().is_empty() {
            return Err(anyhow!("Please enter a valid name."));
        }

        let totals = calculate_totals(&self.catalog, counts);
        self.repo.append(LeaderboardEntry::new(name, totals))
    }

    pub fn entries(&self) -> Result<Vec<LeaderboardEntry>> {
        self.repo.list()
    }

    pub fn ranked(&self) -> Result<Vec<LeaderboardEntry>> {
        let mut entries = self.repo.list()?;
        rank_entries(&mut entries);
        Ok(entries)
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.repo.delete(id)
    }

    pub fn clear(&self) -> Result<()> {
        self.repo.delete_all()
    }
}

// Standalone functions for pure logic

// The store returns rows in storage-native order; the board is ranked by
// yearly kilograms, heaviest first.
pub fn rank_entries(entries: &mut Vec<LeaderboardEntry>) {
    entries.sort_by(|a, b| {
        b.per_year_kg
            .partial_cmp(&a.per_year_kg)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

pub fn write_csv<W: Write>(entries: &[LeaderboardEntry], writer: &mut W) -> Result<()> {
    writeln!(writer, "id,username,name,per_day,per_year,per_year_kg")?;
    for entry in entries {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            entry.id,
            csv_field(&entry.username),
            csv_field(&entry.name),
            entry.per_day,
            entry.per_year,
            entry.per_year_kg
        )?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
