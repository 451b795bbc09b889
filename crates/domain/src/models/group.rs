//! Group entity and request DTO.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A permission group. Permission strings are stored opaquely; nothing in
/// this backend interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub permissions: BTreeSet<String>,
    pub visible: bool,
    pub editable: bool,
    pub locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
    /// Epoch second of soft deletion; 0 means the row is live.
    pub deleted_at: i64,
}

impl Group {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at != 0
    }
}

/// Insert payload for a group; the id is storage-generated.
#[derive(Debug, Clone)]
pub struct NewGroup {
    pub name: String,
    pub permissions: BTreeSet<String>,
    pub visible: bool,
    pub editable: bool,
    pub locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Request payload for creating or updating a group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub permissions: BTreeSet<String>,
    #[serde(default)]
    pub locked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_serializes_timestamps_with_snake_case_names() {
        let group = Group {
            id: 1,
            name: "ops".into(),
            permissions: BTreeSet::from(["ops".to_string()]),
            visible: true,
            editable: true,
            locked: false,
            created_at: 100,
            updated_at: 100,
            deleted_at: 0,
        };
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["created_at"], 100);
        assert_eq!(json["deleted_at"], 0);
        assert_eq!(json["permissions"][0], "ops");
    }

    #[test]
    fn request_fields_default_when_omitted() {
        let req: GroupRequest = serde_json::from_str(r#"{"name":"ops"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("ops"));
        assert!(req.permissions.is_empty());
        assert!(!req.locked);
    }
}
