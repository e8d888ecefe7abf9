mod envelope;
pub use self::envelope::{ErrorBody, NaturalLanguageRequest, NaturalLanguageResponse};

mod amount_type;
pub use self::amount_type::AmountType;

mod cell;
pub use self::cell::{Cell, ResultSet};

mod items;
pub use self::items::AvailableItems;

mod forecast;
pub use self::forecast::{ForecastEntry, ForecastRequest, ForecastResponse};
