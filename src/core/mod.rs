pub mod roster;
pub mod seed;

pub use crate::domain::model::{Activity, ActivitySeed, RosterChange};
pub use crate::domain::ports::{ActivityRoster, ConfigProvider};
pub use crate::utils::error::Result;
