pub mod geography;
pub mod occupation;
pub mod table;

pub use geography::CountyRecord;
pub use occupation::{Occupation, OccupationEntry};
pub use table::Table;
