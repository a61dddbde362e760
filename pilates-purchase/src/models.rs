use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One confirmed purchase of a catalog plan.
///
/// Records are append-only and carry no identity beyond their position;
/// buying the same pack again legitimately creates a second record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub plan_id: String,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseRecord {
    /// A record for `plan_id` stamped with the current wall-clock time.
    pub fn now(plan_id: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            purchased_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_camel_case() {
        let record = PurchaseRecord::now("pack-10");
        let encoded = serde_json::to_string(&record).unwrap();
        assert!(encoded.contains("\"planId\":\"pack-10\""));
        assert!(encoded.contains("\"purchasedAt\":"));
    }
}
