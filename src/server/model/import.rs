//! CSV import rows, taxonomy lookup and outcome types.

use std::collections::HashMap;

use thiserror::Error;

use crate::{model::retailer::ImportResultDto, server::model::retailer::RetailerParams};

/// One data row of an import file, values trimmed, before taxonomy resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportRow {
    /// 1-based line number in the file, header included.
    pub line: u64,
    pub name: String,
    pub phone: Option<String>,
    pub region: String,
    pub area: String,
    pub distributor: String,
    pub territory: Option<String>,
    pub points: Option<String>,
    pub routes: String,
    pub notes: String,
}

/// Why a row was left out of the import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("name is empty")]
    EmptyName,
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
    #[error("unknown area '{0}' in region")]
    UnknownArea(String),
    #[error("unknown territory '{0}' in area")]
    UnknownTerritory(String),
    #[error("unknown distributor '{0}'")]
    UnknownDistributor(String),
    #[error("invalid points value '{0}'")]
    InvalidPoints(String),
    #[error("phone {0} already exists")]
    DuplicatePhone(String),
}

/// Case-insensitive name lookup over the taxonomy tables, loaded once per import.
///
/// Areas are keyed by `(name, region_id)` and territories by `(name, area_id)` because
/// their names are only unique within their parent.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyLookup {
    regions: HashMap<String, i32>,
    areas: HashMap<(String, i32), i32>,
    territories: HashMap<(String, i32), i32>,
    distributors: HashMap<String, i32>,
}

impl TaxonomyLookup {
    pub fn from_entities(
        regions: Vec<entity::region::Model>,
        areas: Vec<entity::area::Model>,
        territories: Vec<entity::territory::Model>,
        distributors: Vec<entity::distributor::Model>,
    ) -> Self {
        Self {
            regions: regions
                .into_iter()
                .map(|r| (r.name.to_lowercase(), r.id))
                .collect(),
            areas: areas
                .into_iter()
                .map(|a| ((a.name.to_lowercase(), a.region_id), a.id))
                .collect(),
            territories: territories
                .into_iter()
                .map(|t| ((t.name.to_lowercase(), t.area_id), t.id))
                .collect(),
            distributors: distributors
                .into_iter()
                .map(|d| (d.name.to_lowercase(), d.id))
                .collect(),
        }
    }

    /// Resolves a row's names to IDs and parses its numeric fields.
    ///
    /// # Returns
    /// - `Ok(RetailerParams)` - Row ready for insertion
    /// - `Err(SkipReason)` - First problem found with the row
    pub fn resolve(&self, row: ImportRow) -> Result<RetailerParams, SkipReason> {
        if row.name.is_empty() {
            return Err(SkipReason::EmptyName);
        }

        let region_id = *self
            .regions
            .get(&row.region.to_lowercase())
            .ok_or_else(|| SkipReason::UnknownRegion(row.region.clone()))?;
        let area_id = *self
            .areas
            .get(&(row.area.to_lowercase(), region_id))
            .ok_or_else(|| SkipReason::UnknownArea(row.area.clone()))?;
        let territory_id = match &row.territory {
            Some(territory) => Some(
                *self
                    .territories
                    .get(&(territory.to_lowercase(), area_id))
                    .ok_or_else(|| SkipReason::UnknownTerritory(territory.clone()))?,
            ),
            None => None,
        };
        let distributor_id = *self
            .distributors
            .get(&row.distributor.to_lowercase())
            .ok_or_else(|| SkipReason::UnknownDistributor(row.distributor.clone()))?;
        let points = match &row.points {
            Some(raw) => raw
                .parse::<i32>()
                .ok()
                .filter(|points| *points >= 0)
                .ok_or_else(|| SkipReason::InvalidPoints(raw.clone()))?,
            None => 0,
        };

        Ok(RetailerParams {
            name: row.name,
            phone: row.phone,
            region_id,
            area_id,
            distributor_id,
            territory_id,
            points,
            routes: row.routes,
            notes: row.notes,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: u64,
    pub skipped: u64,
}

impl ImportSummary {
    pub fn into_dto(self) -> ImportResultDto {
        ImportResultDto {
            imported: self.imported,
            skipped: self.skipped,
        }
    }
}
