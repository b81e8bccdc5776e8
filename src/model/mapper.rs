//! Row to view-model mapping
//!
//! Every field is a direct rename. Nullable columns stay `None`; nothing is
//! defaulted to an empty string.

use super::{ProtocolRecord, ProtocolRow};

impl From<ProtocolRow> for ProtocolRecord {
    fn from(row: ProtocolRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            features: row.features,
            tags: row.tags,
            github_url: row.github_url,
            website_link: row.website_link,
            contact_email: row.contact_email,
            logo_url: row.logo_url,
            created_by: row.created_by,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Map a batch of rows, preserving order
#[must_use]
pub fn map_rows(rows: Vec<ProtocolRow>) -> Vec<ProtocolRecord> {
    rows.into_iter().map(ProtocolRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProtocolId, ProtocolStatus};
    use crate::testing::approved_row;

    #[test]
    fn test_row_fields_are_renamed() {
        let mut row = approved_row(7, "Agent Mesh", Some("api, chat"));
        row.github_url = Some("https://github.com/example/mesh".into());
        row.website_link = Some("https://mesh.example".into());
        row.logo_url = Some("https://mesh.example/logo.png".into());

        let record = ProtocolRecord::from(row.clone());

        assert_eq!(record.id, ProtocolId(7));
        assert_eq!(record.name, row.name);
        assert_eq!(record.github_url, row.github_url);
        assert_eq!(record.website_link, row.website_link);
        assert_eq!(record.logo_url, row.logo_url);
        assert_eq!(record.created_by, row.created_by);
        assert_eq!(record.contact_email, row.contact_email);
        assert_eq!(record.created_at, row.created_at);
        assert_eq!(record.status, ProtocolStatus::Approved);
    }

    #[test]
    fn test_null_columns_stay_absent() {
        let row = approved_row(1, "Bare", None);
        let record = ProtocolRecord::from(row);

        assert_eq!(record.tags, None);
        assert_eq!(record.github_url, None);
        assert_eq!(record.logo_url, None);
        assert_eq!(record.updated_at, None);
    }

    #[test]
    fn test_record_serializes_display_case() {
        let record = ProtocolRecord::from(approved_row(1, "Bare", None));
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("githubUrl").is_some());
        assert!(json.get("createdBy").is_some());
        assert!(json.get("github_url").is_none());
        assert_eq!(json["status"], "approved");
    }

    #[test]
    fn test_map_rows_keeps_order() {
        let rows = vec![
            approved_row(3, "C", None),
            approved_row(1, "A", None),
            approved_row(2, "B", None),
        ];
        let names: Vec<_> = map_rows(rows).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
