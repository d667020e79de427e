use serde_json::json;

use crate::domain::analysis::entities::{InsightKind, ProcessingLevel, Verdict};

pub const SYSTEM_INSTRUCTION: &str = "\
You are an AI-Native Consumer Health Co-Pilot.
Your goal is to interpret food ingredients and labels for a human at the moment of purchase.

DO NOT just list ingredients.
DO NOT be a database.

1. INFER INTENT: Look at the ingredients. Is this person likely trying to avoid sugar? Eat clean? Manage weight? Feed a child?
2. REASON: Analyze the synergy of ingredients.
3. TRADE-OFFS: Explicitly identify trade-offs (e.g., \"Organic, but extremely high in added sodium\").
4. UNCERTAINTY: If an ingredient is vague (e.g., \"Natural Flavors\"), explain why that's a blind spot.

Return the response in strict JSON format matching the provided schema.";

/// Appended after the user payload on every request.
pub const ANALYSIS_DIRECTIVE: &str =
    "Analyze these ingredients. act as a critical decision support tool.";

pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Returns the JSON schema for label analysis LLM responses
pub fn get_analysis_schema() -> serde_json::Value {
    let verdicts: Vec<&str> = Verdict::ALL.iter().map(Verdict::as_str).collect();
    let processing_levels: Vec<&str> = ProcessingLevel::ALL
        .iter()
        .map(ProcessingLevel::as_str)
        .collect();
    let insight_kinds: Vec<&str> = InsightKind::ALL.iter().map(InsightKind::as_str).collect();

    json!({
        "type": "object",
        "properties": {
            "intent": {
                "type": "string",
                "description": "Inferred user intent based on the ingredients (e.g., 'Weight Loss', 'Clean Label', 'Allergy Safety', 'General Health')."
            },
            "summary": {
                "type": "string",
                "description": "A one-sentence human-readable summary of the product's health impact."
            },
            "verdict": {
                "type": "string",
                "enum": verdicts,
                "description": "The overall verdict of the product."
            },
            "healthScore": {
                "type": "number",
                "description": "A score from 0 to 100 representing the healthiness of the product."
            },
            "processingLevel": {
                "type": "string",
                "enum": processing_levels,
                "description": "The level of processing of the food."
            },
            "keyInsights": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "enum": insight_kinds },
                        "text": { "type": "string" }
                    },
                    "required": ["type", "text"]
                },
                "description": "3-4 key bullet points explaining the analysis."
            },
            "tradeOffs": {
                "type": "string",
                "description": "An explanation of the trade-offs (e.g., 'Low sugar, but high in artificial sweeteners')."
            },
            "uncertainty": {
                "type": "string",
                "description": "What is unknown or ambiguous about the ingredients or label."
            }
        },
        "required": [
            "intent", "summary", "verdict", "healthScore",
            "processingLevel", "keyInsights", "tradeOffs", "uncertainty"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_every_field() {
        let schema = get_analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        for field in schema["properties"].as_object().unwrap().keys() {
            assert!(required.contains(&field.as_str()), "{field} not required");
        }
        assert_eq!(required.len(), 8);
    }

    #[test]
    fn test_schema_enums_match_domain_literals() {
        let schema = get_analysis_schema();
        assert_eq!(
            schema["properties"]["verdict"]["enum"],
            json!(["Excellent", "Good", "Fair", "Poor", "Avoid"])
        );
        assert_eq!(
            schema["properties"]["processingLevel"]["enum"],
            json!(["Unprocessed", "Minimally Processed", "Processed", "Ultra-Processed"])
        );
        assert_eq!(
            schema["properties"]["keyInsights"]["items"]["properties"]["type"]["enum"],
            json!(["positive", "negative", "neutral"])
        );
    }
}
