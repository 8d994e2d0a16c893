pub mod record;

pub use record::{InspectionRecord, NewRecord, RawFields};
