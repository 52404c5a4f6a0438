use crate::domain::model::{Activity, ActivitySeed, RosterChange};
use crate::utils::error::Result;
use async_trait::async_trait;
use indexmap::IndexMap;

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn static_dir(&self) -> &str;
    fn seed(&self) -> Vec<ActivitySeed>;
}

#[async_trait]
pub trait ActivityRoster: Send + Sync {
    async fn list_activities(&self) -> IndexMap<String, Activity>;
    async fn signup(&self, activity: &str, email: &str) -> Result<RosterChange>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<RosterChange>;
}
