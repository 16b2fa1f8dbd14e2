pub use super::area::Entity as Area;
pub use super::distributor::Entity as Distributor;
pub use super::region::Entity as Region;
pub use super::retailer::Entity as Retailer;
pub use super::sales_rep::Entity as SalesRep;
pub use super::sales_rep_retailer::Entity as SalesRepRetailer;
pub use super::territory::Entity as Territory;
pub use super::user::Entity as User;
