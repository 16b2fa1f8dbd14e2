pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_region_table;
mod m20260105_000003_create_area_table;
mod m20260105_000004_create_territory_table;
mod m20260105_000005_create_distributor_table;
mod m20260105_000006_create_sales_rep_table;
mod m20260105_000007_create_retailer_table;
mod m20260105_000008_create_sales_rep_retailer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_region_table::Migration),
            Box::new(m20260105_000003_create_area_table::Migration),
            Box::new(m20260105_000004_create_territory_table::Migration),
            Box::new(m20260105_000005_create_distributor_table::Migration),
            Box::new(m20260105_000006_create_sales_rep_table::Migration),
            Box::new(m20260105_000007_create_retailer_table::Migration),
            Box::new(m20260105_000008_create_sales_rep_retailer_table::Migration),
        ]
    }
}
