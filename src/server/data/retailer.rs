//! Retailer data repository.
//!
//! Retailer rows only hold foreign keys, so every read goes through `load_details`, which
//! batch-loads the region, area, distributor, territory and sales rep names for a whole page
//! in one query per table.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::{lower_like, MAX_BIND_PARAMS},
    model::{
        pagination::{like_pattern, Page},
        retailer::{NamedRef, Retailer, RetailerParams, RetailerQuery, SalesRepRetailerUpdate},
    },
};

/// Bound columns per inserted retailer row.
const RETAILER_INSERT_COLUMNS: usize = 10;

pub struct RetailerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RetailerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a filtered page of retailers ordered by name, then ID.
    ///
    /// When `sales_rep_id` is provided only retailers assigned to that sales rep are
    /// considered; the filters of `query` then narrow that set further.
    ///
    /// # Arguments
    /// - `query` - Page request, search term and exact-match taxonomy filters
    /// - `sales_rep_id` - Restrict results to this sales rep's assignments
    ///
    /// # Returns
    /// - `Ok(Page<Retailer>)` - Requested page with related names loaded
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        query: &RetailerQuery,
        sales_rep_id: Option<i32>,
    ) -> Result<Page<Retailer>, DbErr> {
        let mut select = entity::prelude::Retailer::find();

        if let Some(sales_rep_id) = sales_rep_id {
            let retailer_ids: Vec<i32> = entity::prelude::SalesRepRetailer::find()
                .filter(entity::sales_rep_retailer::Column::SalesRepId.eq(sales_rep_id))
                .select_only()
                .column(entity::sales_rep_retailer::Column::RetailerId)
                .into_tuple()
                .all(self.db)
                .await?;

            if retailer_ids.is_empty() {
                return Ok(Page::new(Vec::new(), 0, query.page));
            }
            select = select.filter(entity::retailer::Column::Id.is_in(retailer_ids));
        }

        if let Some(search) = &query.search {
            let pattern = like_pattern(search);
            select = select.filter(
                Condition::any()
                    .add(lower_like("retailers", "name", &pattern))
                    .add(lower_like("retailers", "phone", &pattern)),
            );
        }
        if let Some(region_id) = query.region_id {
            select = select.filter(entity::retailer::Column::RegionId.eq(region_id));
        }
        if let Some(area_id) = query.area_id {
            select = select.filter(entity::retailer::Column::AreaId.eq(area_id));
        }
        if let Some(distributor_id) = query.distributor_id {
            select = select.filter(entity::retailer::Column::DistributorId.eq(distributor_id));
        }
        if let Some(territory_id) = query.territory_id {
            select = select.filter(entity::retailer::Column::TerritoryId.eq(territory_id));
        }

        let paginator = select
            .order_by_asc(entity::retailer::Column::Name)
            .order_by_asc(entity::retailer::Column::Id)
            .paginate(self.db, query.page.limit);

        let total = paginator.num_items().await?;
        let retailers = paginator.fetch_page(query.page.index()).await?;
        let retailers = self.load_details(retailers).await?;

        Ok(Page::new(retailers, total, query.page))
    }

    /// Gets a retailer with all related names.
    ///
    /// # Returns
    /// - `Ok(Some(Retailer))` - Retailer found
    /// - `Ok(None)` - No retailer with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Retailer>, DbErr> {
        let Some(entity) = entity::prelude::Retailer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load_details(vec![entity]).await?.pop())
    }

    /// Gets the writable column values of a retailer, used as the base of a partial update.
    pub async fn find_params(&self, id: i32) -> Result<Option<RetailerParams>, DbErr> {
        let entity = entity::prelude::Retailer::find_by_id(id).one(self.db).await?;

        Ok(entity.as_ref().map(RetailerParams::from_entity))
    }

    /// Returns the IDs from `ids` that do not belong to any retailer, in input order.
    pub async fn find_missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut found = HashSet::new();
        for chunk in ids.chunks(MAX_BIND_PARAMS) {
            let rows: Vec<i32> = entity::prelude::Retailer::find()
                .filter(entity::retailer::Column::Id.is_in(chunk.to_vec()))
                .select_only()
                .column(entity::retailer::Column::Id)
                .into_tuple()
                .all(self.db)
                .await?;
            found.extend(rows);
        }

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }

    /// Checks whether a phone number is used by a retailer other than `exclude_id`.
    pub async fn phone_taken(&self, phone: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Retailer::find()
            .filter(entity::retailer::Column::Phone.eq(phone));
        if let Some(id) = exclude_id {
            query = query.filter(entity::retailer::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Returns which of the given phone numbers are already stored.
    pub async fn existing_phones(&self, phones: &[String]) -> Result<HashSet<String>, DbErr> {
        if phones.is_empty() {
            return Ok(HashSet::new());
        }

        let mut existing = HashSet::new();
        for chunk in phones.chunks(MAX_BIND_PARAMS) {
            let rows: Vec<Option<String>> = entity::prelude::Retailer::find()
                .filter(entity::retailer::Column::Phone.is_in(chunk.to_vec()))
                .select_only()
                .column(entity::retailer::Column::Phone)
                .into_tuple()
                .all(self.db)
                .await?;
            existing.extend(rows.into_iter().flatten());
        }

        Ok(existing)
    }

    /// Counts retailers whose `column` equals `id`.
    ///
    /// Used to check whether a region, area, territory or distributor is still referenced.
    pub async fn count_referencing(
        &self,
        column: entity::retailer::Column,
        id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::Retailer::find()
            .filter(column.eq(id))
            .count(self.db)
            .await
    }

    pub async fn create(&self, params: RetailerParams) -> Result<Retailer, DbErr> {
        let entity = into_active_model(params).insert(self.db).await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Retailer with id {} not found after creation",
                entity.id
            )))
    }

    /// Inserts many retailers in a single transaction.
    ///
    /// Rows are sent in batches that stay under `MAX_BIND_PARAMS` bound values each.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of inserted rows
    /// - `Err(DbErr)` - Database error; no row was inserted
    pub async fn create_many(&self, params: Vec<RetailerParams>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let count = params.len() as u64;
        let txn = self.db.begin().await?;

        let mut rows = params.into_iter().map(into_active_model).peekable();
        while rows.peek().is_some() {
            let batch: Vec<_> = rows
                .by_ref()
                .take(MAX_BIND_PARAMS / RETAILER_INSERT_COLUMNS)
                .collect();
            entity::prelude::Retailer::insert_many(batch)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(count)
    }

    /// Overwrites every writable column of a retailer and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Retailer))` - The updated retailer
    /// - `Ok(None)` - No retailer with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: RetailerParams) -> Result<Option<Retailer>, DbErr> {
        if entity::prelude::Retailer::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let mut active = into_active_model(params);
        active.id = ActiveValue::Unchanged(id);
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Applies a sales rep's changes to points, routes and notes.
    pub async fn update_by_sales_rep(
        &self,
        id: i32,
        changes: SalesRepRetailerUpdate,
    ) -> Result<Option<Retailer>, DbErr> {
        let Some(entity) = entity::prelude::Retailer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(points) = changes.points {
            active.points = ActiveValue::Set(points);
        }
        if let Some(routes) = changes.routes {
            active.routes = ActiveValue::Set(routes);
        }
        if let Some(notes) = changes.notes {
            active.notes = ActiveValue::Set(notes);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Deletes a retailer together with its assignments.
    ///
    /// # Returns
    /// - `Ok(true)` - Retailer deleted
    /// - `Ok(false)` - No retailer with that ID
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SalesRepRetailer::delete_many()
            .filter(entity::sales_rep_retailer::Column::RetailerId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Retailer::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn load_details(
        &self,
        retailers: Vec<entity::retailer::Model>,
    ) -> Result<Vec<Retailer>, DbErr> {
        if retailers.is_empty() {
            return Ok(Vec::new());
        }

        let retailer_ids: Vec<i32> = retailers.iter().map(|r| r.id).collect();
        let region_ids: BTreeSet<i32> = retailers.iter().map(|r| r.region_id).collect();
        let area_ids: BTreeSet<i32> = retailers.iter().map(|r| r.area_id).collect();
        let distributor_ids: BTreeSet<i32> = retailers.iter().map(|r| r.distributor_id).collect();
        let territory_ids: BTreeSet<i32> = retailers.iter().filter_map(|r| r.territory_id).collect();

        let regions: HashMap<i32, String> = entity::prelude::Region::find()
            .filter(entity::region::Column::Id.is_in(region_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();

        let areas: HashMap<i32, String> = entity::prelude::Area::find()
            .filter(entity::area::Column::Id.is_in(area_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a.name))
            .collect();

        let distributors: HashMap<i32, String> = entity::prelude::Distributor::find()
            .filter(entity::distributor::Column::Id.is_in(distributor_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        let territories: HashMap<i32, String> = if territory_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Territory::find()
                .filter(entity::territory::Column::Id.is_in(territory_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t.name))
                .collect()
        };

        let mut sales_reps: HashMap<i32, Vec<NamedRef>> = HashMap::new();
        let assignments = entity::prelude::SalesRepRetailer::find()
            .filter(entity::sales_rep_retailer::Column::RetailerId.is_in(retailer_ids))
            .find_also_related(entity::prelude::SalesRep)
            .order_by_asc(entity::sales_rep::Column::Name)
            .all(self.db)
            .await?;
        for (assignment, sales_rep) in assignments {
            if let Some(sales_rep) = sales_rep {
                sales_reps
                    .entry(assignment.retailer_id)
                    .or_default()
                    .push(NamedRef::new(sales_rep.id, sales_rep.name));
            }
        }

        Ok(retailers
            .into_iter()
            .map(|r| Retailer {
                region: named(&regions, r.region_id),
                area: named(&areas, r.area_id),
                distributor: named(&distributors, r.distributor_id),
                territory: r.territory_id.map(|id| named(&territories, id)),
                sales_reps: sales_reps.remove(&r.id).unwrap_or_default(),
                id: r.id,
                name: r.name,
                phone: r.phone,
                points: r.points,
                routes: r.routes,
                notes: r.notes,
                updated_at: r.updated_at,
            })
            .collect())
    }
}

fn named(names: &HashMap<i32, String>, id: i32) -> NamedRef {
    NamedRef::new(id, names.get(&id).cloned().unwrap_or_default())
}

fn into_active_model(params: RetailerParams) -> entity::retailer::ActiveModel {
    entity::retailer::ActiveModel {
        name: ActiveValue::Set(params.name),
        phone: ActiveValue::Set(params.phone),
        region_id: ActiveValue::Set(params.region_id),
        area_id: ActiveValue::Set(params.area_id),
        distributor_id: ActiveValue::Set(params.distributor_id),
        territory_id: ActiveValue::Set(params.territory_id),
        points: ActiveValue::Set(params.points),
        routes: ActiveValue::Set(params.routes),
        notes: ActiveValue::Set(params.notes),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
}
