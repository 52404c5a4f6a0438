use serde::{Deserialize, Serialize};

/// 課外活動及其報名名單
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// 剩餘名額，僅供顯示，不做限制
    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

/// 啟動時用來建立名單的種子資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivitySeed {
    pub fn into_entry(self) -> (String, Activity) {
        let ActivitySeed {
            name,
            description,
            schedule,
            max_participants,
            participants,
        } = self;
        (
            name,
            Activity {
                description,
                schedule,
                max_participants,
                participants,
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    SignedUp { activity: String, email: String },
    Unregistered { activity: String, email: String },
}

impl RosterChange {
    /// 回傳給客戶端的確認訊息
    pub fn message(&self) -> String {
        match self {
            Self::SignedUp { activity, email } => format!("Signed up {} for {}", email, activity),
            Self::Unregistered { activity, email } => {
                format!("Unregistered {} from {}", email, activity)
            }
        }
    }
}
