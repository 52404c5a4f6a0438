use crate::core::Activity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `?email=` 查詢參數，缺少時交由 handler 回報 422
#[derive(Debug, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityResponse {
    fn from(value: Activity) -> Self {
        let Activity {
            description,
            schedule,
            max_participants,
            participants,
        } = value;
        Self {
            description,
            schedule,
            max_participants,
            participants,
        }
    }
}

pub type ActivitiesResponse = IndexMap<String, ActivityResponse>;
