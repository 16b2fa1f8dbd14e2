//! Taxonomy domain models and parameters.
//!
//! Regions contain areas, areas contain territories. Distributors stand on their own.
//! Areas and territories carry the name of their parent so list pages can render it without
//! a second lookup.

use crate::{
    model::taxonomy::{
        AreaDto, AreaPayloadDto, DistributorDto, DistributorPayloadDto, PaginatedAreasDto,
        PaginatedDistributorsDto, PaginatedRegionsDto, PaginatedTerritoriesDto, RegionDto,
        RegionPayloadDto, TaxonomyQueryDto, TerritoryDto, TerritoryPayloadDto,
    },
    server::{
        error::AppError,
        model::pagination::{normalize_search, Page, PageRequest},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: i32,
    pub name: String,
}

impl Region {
    pub fn from_entity(entity: entity::region::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> RegionDto {
        RegionDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub id: i32,
    pub name: String,
    pub region_id: i32,
    pub region_name: String,
}

impl Area {
    /// Converts an area entity and its region name to a domain model.
    ///
    /// # Arguments
    /// - `entity` - The area entity from the database
    /// - `region_name` - Name of the region the area belongs to
    pub fn from_entity(entity: entity::area::Model, region_name: String) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            region_id: entity.region_id,
            region_name,
        }
    }

    pub fn into_dto(self) -> AreaDto {
        AreaDto {
            id: self.id,
            name: self.name,
            region_id: self.region_id,
            region_name: self.region_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Territory {
    pub id: i32,
    pub name: String,
    pub area_id: i32,
    pub area_name: String,
}

impl Territory {
    pub fn from_entity(entity: entity::territory::Model, area_name: String) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            area_id: entity.area_id,
            area_name,
        }
    }

    pub fn into_dto(self) -> TerritoryDto {
        TerritoryDto {
            id: self.id,
            name: self.name,
            area_id: self.area_id,
            area_name: self.area_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Distributor {
    pub id: i32,
    pub name: String,
}

impl Distributor {
    pub fn from_entity(entity: entity::distributor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> DistributorDto {
        DistributorDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Validated filter for taxonomy list endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxonomyFilter {
    pub page: PageRequest,
    pub search: Option<String>,
    pub region_id: Option<i32>,
    pub area_id: Option<i32>,
}

impl TaxonomyFilter {
    pub fn from_dto(dto: TaxonomyQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageRequest::new(dto.page, dto.limit)?,
            search: normalize_search(dto.search),
            region_id: dto.region_id,
            area_id: dto.area_id,
        })
    }
}

/// Trims a taxonomy name and rejects blank values.
fn validated_name(name: String) -> Result<String, AppError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    Ok(name)
}

/// Parameters for creating or renaming a region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionParams {
    pub name: String,
}

impl RegionParams {
    pub fn from_dto(dto: RegionPayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validated_name(dto.name)?,
        })
    }
}

/// Parameters for creating or updating an area.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaParams {
    pub name: String,
    pub region_id: i32,
}

impl AreaParams {
    pub fn from_dto(dto: AreaPayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validated_name(dto.name)?,
            region_id: dto.region_id,
        })
    }
}

/// Parameters for creating or updating a territory.
#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryParams {
    pub name: String,
    pub area_id: i32,
}

impl TerritoryParams {
    pub fn from_dto(dto: TerritoryPayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validated_name(dto.name)?,
            area_id: dto.area_id,
        })
    }
}

/// Parameters for creating or renaming a distributor.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributorParams {
    pub name: String,
}

impl DistributorParams {
    pub fn from_dto(dto: DistributorPayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validated_name(dto.name)?,
        })
    }
}

impl Page<Region> {
    pub fn into_dto(self) -> PaginatedRegionsDto {
        let meta = self.meta_dto();
        PaginatedRegionsDto {
            data: self.items.into_iter().map(Region::into_dto).collect(),
            meta,
        }
    }
}

impl Page<Area> {
    pub fn into_dto(self) -> PaginatedAreasDto {
        let meta = self.meta_dto();
        PaginatedAreasDto {
            data: self.items.into_iter().map(Area::into_dto).collect(),
            meta,
        }
    }
}

impl Page<Territory> {
    pub fn into_dto(self) -> PaginatedTerritoriesDto {
        let meta = self.meta_dto();
        PaginatedTerritoriesDto {
            data: self.items.into_iter().map(Territory::into_dto).collect(),
            meta,
        }
    }
}

impl Page<Distributor> {
    pub fn into_dto(self) -> PaginatedDistributorsDto {
        let meta = self.meta_dto();
        PaginatedDistributorsDto {
            data: self.items.into_iter().map(Distributor::into_dto).collect(),
            meta,
        }
    }
}
