use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(code: String, target: String) -> Self {
        Self {
            code,
            target,
            created_at: Utc::now(),
        }
    }
}
