pub mod duration;
pub mod end_date;
pub mod evaluation_instant;
pub mod work_period;

pub use duration::DurationMonths;
pub use end_date::EndDate;
pub use evaluation_instant::EvaluationInstant;
pub use work_period::WorkPeriod;
