pub mod celebrations;
pub mod database;
pub mod directory;
pub mod metrics;

pub use celebrations::{collect_celebrations, CalendarDate, CelebrationQuery, Celebrations};
pub use database::MongoDb;
pub use directory::EmployeeDirectory;
pub use metrics::{get_metrics, init_metrics};
