//! Health snapshot: the single input record shared by both engines.

mod sex;
mod snapshot;

pub use sex::BiologicalSex;
pub use snapshot::HealthSnapshot;
