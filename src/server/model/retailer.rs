//! Retailer domain models and parameters.
//!
//! A `Retailer` is always returned together with the names of its region, area, distributor,
//! optional territory and the sales reps it is assigned to. Create and update parameters are
//! validated here; cross-table invariants (area inside region, territory inside area) are
//! checked by the service against the database.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    model::retailer::{
        CreateRetailerDto, NamedRefDto, PaginatedRetailersDto, RetailerDto, RetailerQueryDto,
        SalesRepUpdateRetailerDto, UpdateRetailerDto,
    },
    server::{
        error::AppError,
        model::pagination::{normalize_search, Page, PageRequest},
    },
};

/// `{ id, name }` of a related record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRef {
    pub id: i32,
    pub name: String,
}

impl NamedRef {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn into_dto(self) -> NamedRefDto {
        NamedRefDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Retailer {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub points: i32,
    pub routes: String,
    pub notes: String,
    pub region: NamedRef,
    pub area: NamedRef,
    pub distributor: NamedRef,
    pub territory: Option<NamedRef>,
    pub sales_reps: Vec<NamedRef>,
    pub updated_at: DateTime<Utc>,
}

impl Retailer {
    pub fn into_dto(self) -> RetailerDto {
        RetailerDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            points: self.points,
            routes: self.routes,
            notes: self.notes,
            region: self.region.into_dto(),
            area: self.area.into_dto(),
            distributor: self.distributor.into_dto(),
            territory: self.territory.map(NamedRef::into_dto),
            sales_reps: self.sales_reps.into_iter().map(NamedRef::into_dto).collect(),
            updated_at: self.updated_at,
        }
    }
}

impl Page<Retailer> {
    pub fn into_dto(self) -> PaginatedRetailersDto {
        let meta = self.meta_dto();
        PaginatedRetailersDto {
            data: self.items.into_iter().map(Retailer::into_dto).collect(),
            meta,
        }
    }
}

/// Normalized retailer list query.
///
/// Serializes deterministically, which makes it usable as the input of the listing cache key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RetailerQuery {
    pub page: PageRequest,
    pub search: Option<String>,
    pub region_id: Option<i32>,
    pub area_id: Option<i32>,
    pub distributor_id: Option<i32>,
    pub territory_id: Option<i32>,
}

impl RetailerQuery {
    pub fn from_dto(dto: RetailerQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageRequest::new(dto.page, dto.limit)?,
            search: normalize_search(dto.search),
            region_id: dto.region_id,
            area_id: dto.area_id,
            distributor_id: dto.distributor_id,
            territory_id: dto.territory_id,
        })
    }
}

/// Complete set of writable retailer columns, used for create and for merged updates.
#[derive(Debug, Clone, PartialEq)]
pub struct RetailerParams {
    pub name: String,
    pub phone: Option<String>,
    pub region_id: i32,
    pub area_id: i32,
    pub distributor_id: i32,
    pub territory_id: Option<i32>,
    pub points: i32,
    pub routes: String,
    pub notes: String,
}

impl RetailerParams {
    pub fn from_dto(dto: CreateRetailerDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validated_name(dto.name)?,
            phone: normalize_phone(dto.phone),
            region_id: dto.region_id,
            area_id: dto.area_id,
            distributor_id: dto.distributor_id,
            territory_id: dto.territory_id,
            points: validated_points(dto.points.unwrap_or(0))?,
            routes: dto.routes.unwrap_or_default(),
            notes: dto.notes.unwrap_or_default(),
        })
    }

    /// Current column values of a stored retailer.
    pub fn from_entity(entity: &entity::retailer::Model) -> Self {
        Self {
            name: entity.name.clone(),
            phone: entity.phone.clone(),
            region_id: entity.region_id,
            area_id: entity.area_id,
            distributor_id: entity.distributor_id,
            territory_id: entity.territory_id,
            points: entity.points,
            routes: entity.routes.clone(),
            notes: entity.notes.clone(),
        }
    }
}

/// Partial admin update. The outer `Option` of `phone`/`territory_id` means "field present".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRetailerParams {
    pub name: Option<String>,
    pub phone: Option<Option<String>>,
    pub region_id: Option<i32>,
    pub area_id: Option<i32>,
    pub distributor_id: Option<i32>,
    pub territory_id: Option<Option<i32>>,
    pub points: Option<i32>,
    pub routes: Option<String>,
    pub notes: Option<String>,
}

impl UpdateRetailerParams {
    pub fn from_dto(dto: UpdateRetailerDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(validated_name).transpose()?,
            phone: dto.phone.map(normalize_phone),
            region_id: dto.region_id,
            area_id: dto.area_id,
            distributor_id: dto.distributor_id,
            territory_id: dto.territory_id,
            points: dto.points.map(validated_points).transpose()?,
            routes: dto.routes,
            notes: dto.notes,
        })
    }

    /// Overlays the provided fields onto the current values.
    pub fn merge_into(self, current: RetailerParams) -> RetailerParams {
        RetailerParams {
            name: self.name.unwrap_or(current.name),
            phone: self.phone.unwrap_or(current.phone),
            region_id: self.region_id.unwrap_or(current.region_id),
            area_id: self.area_id.unwrap_or(current.area_id),
            distributor_id: self.distributor_id.unwrap_or(current.distributor_id),
            territory_id: self.territory_id.unwrap_or(current.territory_id),
            points: self.points.unwrap_or(current.points),
            routes: self.routes.unwrap_or(current.routes),
            notes: self.notes.unwrap_or(current.notes),
        }
    }
}

/// Fields a sales rep may change on an assigned retailer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesRepRetailerUpdate {
    pub points: Option<i32>,
    pub routes: Option<String>,
    pub notes: Option<String>,
}

impl SalesRepRetailerUpdate {
    pub fn from_dto(dto: SalesRepUpdateRetailerDto) -> Result<Self, AppError> {
        Ok(Self {
            points: dto.points.map(validated_points).transpose()?,
            routes: dto.routes,
            notes: dto.notes,
        })
    }
}

fn validated_name(name: String) -> Result<String, AppError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    Ok(name)
}

fn validated_points(points: i32) -> Result<i32, AppError> {
    if points < 0 {
        return Err(AppError::BadRequest(
            "points must not be negative".to_string(),
        ));
    }
    Ok(points)
}

/// Trims a phone number; blank numbers are stored as `NULL`.
pub fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}
