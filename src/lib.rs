pub mod codec;
pub mod error;
pub mod models;
pub mod time;
pub mod transport;
pub mod validation;

pub use codec::{EncodeError, FormatError, decode, encode};
pub use error::ScheduleError;
pub use models::{Schedule, Week};
pub use time::TimeOfDay;
pub use transport::{TransportError, from_base64, to_base64};
pub use validation::{ValidationError, validate_schedule, validate_time, validate_week};
