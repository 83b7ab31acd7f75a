use meridian_routing::types::EdgeWeight;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableResponse {
    /// One row per source, one column per target.
    pub distance_table: Vec<Vec<EdgeWeight>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_mapped_coordinates: Option<Vec<[f64; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_mapped_coordinates: Option<Vec<[f64; 2]>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_without_mapped_points() {
        let response = TableResponse {
            distance_table: vec![vec![0, 5], vec![5, 0]],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "distance_table": [[0, 5], [5, 0]] })
        );
    }

    #[test]
    fn test_serialize_with_mapped_points() {
        let response = TableResponse {
            distance_table: vec![vec![3, 4]],
            target_mapped_coordinates: Some(vec![[1.0, 1.5], [2.0, 2.5]]),
            source_mapped_coordinates: Some(vec![[3.0, 3.5]]),
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "distance_table": [[3, 4]],
                "target_mapped_coordinates": [[1.0, 1.5], [2.0, 2.5]],
                "source_mapped_coordinates": [[3.0, 3.5]],
            })
        );
    }
}
