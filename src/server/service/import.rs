//! CSV import of retailers.
//!
//! The header row decides which column holds which field; `name`, `region`, `area` and
//! `distributor` are required. Rows that cannot be resolved against the taxonomy, carry an
//! invalid value or repeat a phone number are skipped and logged. The remaining rows are
//! inserted in one transaction.

use std::collections::HashSet;

use csv::{ReaderBuilder, StringRecord, Trim};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        retailer::RetailerRepository,
        taxonomy::{
            area::AreaRepository, distributor::DistributorRepository, region::RegionRepository,
            territory::TerritoryRepository,
        },
    },
    error::AppError,
    model::{
        import::{ImportRow, ImportSummary, SkipReason, TaxonomyLookup},
        retailer::{normalize_phone, RetailerParams},
    },
};

const REQUIRED_COLUMNS: [&str; 4] = ["name", "region", "area", "distributor"];

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports retailers from the bytes of a CSV file.
    ///
    /// # Arguments
    /// - `bytes` - Raw file content including the header row
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Imported and skipped row counts, summing to the data row count
    /// - `Err(AppError::BadRequest)` - Unreadable header, missing required columns or no rows
    /// - `Err(AppError::DbErr)` - Database error; no row was inserted
    pub async fn import_csv(&self, bytes: &[u8]) -> Result<ImportSummary, AppError> {
        let rows = parse_rows(bytes)?;
        let total = rows.len() as u64;

        let lookup = TaxonomyLookup::from_entities(
            RegionRepository::new(self.db).get_all().await?,
            AreaRepository::new(self.db).get_all().await?,
            TerritoryRepository::new(self.db).get_all().await?,
            DistributorRepository::new(self.db).get_all().await?,
        );

        let mut resolved: Vec<(u64, RetailerParams)> = Vec::new();
        for row in rows {
            match row {
                Ok(row) => {
                    let line = row.line;
                    match lookup.resolve(row) {
                        Ok(params) => resolved.push((line, params)),
                        Err(reason) => skip(line, &reason),
                    }
                }
                Err((line, reason)) => skip(line, &reason),
            }
        }

        let repo = RetailerRepository::new(self.db);
        let phones: Vec<String> = resolved
            .iter()
            .filter_map(|(_, params)| params.phone.clone())
            .collect();
        let existing = repo.existing_phones(&phones).await?;

        let mut seen = HashSet::new();
        let mut accepted = Vec::new();
        for (line, params) in resolved {
            if let Some(phone) = &params.phone {
                if existing.contains(phone) || !seen.insert(phone.clone()) {
                    skip(line, &SkipReason::DuplicatePhone(phone.clone()));
                    continue;
                }
            }
            accepted.push(params);
        }

        let imported = repo.create_many(accepted).await?;
        let summary = ImportSummary {
            imported,
            skipped: total - imported,
        };

        tracing::info!(
            "Imported {} retailer(s) from CSV, skipped {}",
            summary.imported,
            summary.skipped
        );

        Ok(summary)
    }
}

fn skip(line: u64, reason: &SkipReason) {
    tracing::warn!("Skipping CSV line {}: {}", line, reason);
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    name: usize,
    region: usize,
    area: usize,
    distributor: usize,
    phone: Option<usize>,
    territory: Option<usize>,
    points: Option<usize>,
    routes: Option<usize>,
    notes: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, AppError> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let position = |column: &str| names.iter().position(|name| name == column);

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| position(column).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "CSV is missing required column(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            name: position("name").unwrap_or_default(),
            region: position("region").unwrap_or_default(),
            area: position("area").unwrap_or_default(),
            distributor: position("distributor").unwrap_or_default(),
            phone: position("phone"),
            territory: position("territory"),
            points: position("points"),
            routes: position("routes"),
            notes: position("notes"),
        })
    }

    fn row(&self, line: u64, record: &StringRecord) -> ImportRow {
        let field = |index: usize| record.get(index).unwrap_or_default().trim().to_string();
        let optional = |index: Option<usize>| {
            index
                .map(field)
                .filter(|value| !value.is_empty())
        };

        ImportRow {
            line,
            name: field(self.name),
            phone: normalize_phone(optional(self.phone)),
            region: field(self.region),
            area: field(self.area),
            distributor: field(self.distributor),
            territory: optional(self.territory),
            points: optional(self.points),
            routes: optional(self.routes).unwrap_or_default(),
            notes: optional(self.notes).unwrap_or_default(),
        }
    }
}

/// Splits a CSV file into data rows.
///
/// Records that the CSV reader cannot decode are returned as `Err` with their line number so
/// they are counted as skipped rows.
///
/// # Returns
/// - `Ok(rows)` - At least one data row
/// - `Err(AppError::BadRequest)` - Unreadable header, missing required columns or no data rows
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<Result<ImportRow, (u64, SkipReason)>>, AppError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| AppError::BadRequest(format!("Invalid CSV header: {}", e)))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let rows: Vec<_> = reader
        .records()
        .enumerate()
        .map(|(index, record)| {
            let line = index as u64 + 2;
            match record {
                Ok(record) => Ok(columns.row(line, &record)),
                Err(e) => Err((line, SkipReason::Malformed(e.to_string()))),
            }
        })
        .collect();

    if rows.is_empty() {
        return Err(AppError::BadRequest("CSV file is empty".to_string()));
    }

    Ok(rows)
}
