//! Store address model for architectural title sheets.

use serde::{Deserialize, Serialize};

/// Address fields pulled from an architectural title block.
///
/// Every field is optional: a pattern that fails to match leaves its field
/// `None`. Display sentinels are substituted at the formatting boundary,
/// never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteAddress {
    /// Store marker as printed, e.g. "STORE # 1234".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,

    /// Mall or center name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mall: Option<String>,

    /// Space or suite marker, e.g. "Space #120".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,

    /// Street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// City, state and ZIP line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_state_zip: Option<String>,
}

impl SiteAddress {
    /// Field names in display order.
    pub const FIELDS: [&'static str; 5] = ["store", "mall", "space", "street", "city_state_zip"];

    /// Whether every field was found.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields that were not found, in display order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let slots = [
            ("store", self.store.is_none()),
            ("mall", self.mall.is_none()),
            ("space", self.space.is_none()),
            ("street", self.street.is_none()),
            ("city_state_zip", self.city_state_zip.is_none()),
        ];

        slots
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let addr = SiteAddress {
            store: Some("STORE # 1234".to_string()),
            mall: None,
            space: Some("Suite #A12".to_string()),
            street: None,
            city_state_zip: None,
        };

        assert!(!addr.is_complete());
        assert_eq!(addr.missing_fields(), vec!["mall", "street", "city_state_zip"]);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let addr = SiteAddress {
            store: Some("STORE # 1234".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&addr).unwrap();
        assert!(json.contains("store"));
        assert!(!json.contains("mall"));
    }
}
