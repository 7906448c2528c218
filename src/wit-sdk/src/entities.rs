use serde::{Deserialize, Serialize};

/// A named entity definition: a dictionary concept on the service that maps
/// canonical values to the expressions recognized for them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EntityDefinition {
    pub doc: String,
    pub id: String,
    pub values: Vec<EntityValue>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EntityValue {
    pub value: String,
    pub expressions: Vec<String>,
}

impl EntityValue {
    pub fn new(value: String, expressions: Vec<String>) -> Self {
        Self { value, expressions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_definition_serialization() {
        let entity = EntityDefinition {
            doc: "A city that I hate".to_string(),
            id: "favorite_city".to_string(),
            values: vec![EntityValue::new(
                "Paris".to_string(),
                vec![
                    "Paris".to_string(),
                    "City of Light".to_string(),
                    "Capital of France".to_string(),
                ],
            )],
        };

        let serialized = serde_json::to_value(&entity).unwrap();
        assert_eq!(
            serialized,
            json!({
                "doc": "A city that I hate",
                "id": "favorite_city",
                "values": [
                    {
                        "value": "Paris",
                        "expressions": ["Paris", "City of Light", "Capital of France"]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_entity_definition_from_json() {
        let json_text = r#"{
            "doc": "Sizes we can serve",
            "id": "drink_size",
            "values": [
                {"value": "large", "expressions": ["large", "venti", "big"]}
            ]
        }"#;

        let entity: EntityDefinition = serde_json::from_str(json_text).unwrap();
        assert_eq!(entity.id, "drink_size");
        assert_eq!(entity.values.len(), 1);
        assert_eq!(entity.values[0].expressions.len(), 3);
    }
}
