mod allowance;
pub use self::allowance::{Allowance, AllowanceResponse};

mod status;
pub use self::status::{NextStage, ProviderStatus, StatusResponse};

mod area;
pub use self::area::{
    AreaID, AreaInfo, AreaInformation, AreaSummary, AreasResponse, Event, Schedule, ScheduleDay,
};

mod topic;
pub use self::topic::{Topic, TopicsResponse};
