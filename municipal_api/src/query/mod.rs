mod common;
pub use self::common::Query;

mod municipality_data;
pub use self::municipality_data::MunicipalityDataQuery;

mod available_items;
pub use self::available_items::AvailableItemsQuery;
