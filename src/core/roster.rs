use crate::core::{Activity, ActivityRoster, ActivitySeed, RosterChange};
use crate::utils::error::{ActivityError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// In-memory roster. All writes run their membership check and mutation
/// under the same write guard.
#[derive(Debug)]
pub struct InMemoryRoster {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl InMemoryRoster {
    /// 從種子資料建立名單
    pub fn from_seed(seed: Vec<ActivitySeed>) -> Result<Self> {
        let mut activities = IndexMap::with_capacity(seed.len());

        for entry in seed {
            validate_seed_entry(&entry)?;
            if activities.contains_key(&entry.name) {
                return Err(ActivityError::ConfigValidationError {
                    field: "activities.name".to_string(),
                    message: format!("Duplicate activity '{}'", entry.name),
                });
            }
            if entry.participants.len() > entry.max_participants {
                tracing::warn!(
                    activity = %entry.name,
                    enrolled = entry.participants.len(),
                    max_participants = entry.max_participants,
                    "⚠️ Seeded roster is over capacity"
                );
            }
            let (name, activity) = entry.into_entry();
            activities.insert(name, activity);
        }

        tracing::debug!("Roster initialized with {} activities", activities.len());

        Ok(Self {
            activities: RwLock::new(activities),
        })
    }
}

fn validate_seed_entry(entry: &ActivitySeed) -> Result<()> {
    validate_non_empty_string("activities.name", &entry.name)?;
    validate_positive_number("activities.max_participants", entry.max_participants, 1)?;

    let mut seen = HashSet::with_capacity(entry.participants.len());
    for email in &entry.participants {
        validate_non_empty_string("activities.participants", email)?;
        if !seen.insert(email.as_str()) {
            return Err(ActivityError::ConfigValidationError {
                field: "activities.participants".to_string(),
                message: format!("'{}' is listed twice for '{}'", email, entry.name),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl ActivityRoster for InMemoryRoster {
    async fn list_activities(&self) -> IndexMap<String, Activity> {
        self.activities.read().await.clone()
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<RosterChange> {
        let mut activities = self.activities.write().await;

        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::ActivityNotFound {
                activity: activity.to_string(),
            })?;

        if entry.is_registered(email) {
            tracing::debug!(activity, email, "Duplicate signup rejected");
            return Err(ActivityError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        entry.participants.push(email.to_string());
        tracing::info!(
            activity,
            email,
            enrolled = entry.participants.len(),
            spots_left = entry.spots_left(),
            "✅ Student signed up"
        );

        Ok(RosterChange::SignedUp {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<RosterChange> {
        let mut activities = self.activities.write().await;

        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::ActivityNotFound {
                activity: activity.to_string(),
            })?;

        let Some(position) = entry.participants.iter().position(|p| p == email) else {
            tracing::debug!(activity, email, "Unregister rejected, student not enrolled");
            return Err(ActivityError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };

        // Vec::remove 保留其他成員的順序
        entry.participants.remove(position);
        tracing::info!(
            activity,
            email,
            enrolled = entry.participants.len(),
            "🗑️ Student unregistered"
        );

        Ok(RosterChange::Unregistered {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}
