mod common;
pub use self::common::Query;

mod area;
pub use self::area::{AreaQuery, AreaTest, AreasSearchQuery};

mod nearby;
pub use self::nearby::NearbyQuery;
