pub mod wage_merger;

pub use wage_merger::WageMerger;
