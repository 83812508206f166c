use serde::{Deserialize, Serialize};

/// One spend record plus the categorization the backend produced for it.
///
/// Items are immutable once placed in the result set; the only way the set
/// changes is a wholesale replacement by a new upload. `id` is assigned by
/// the backend (the spreadsheet row index) and keys the item's chat thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub id: u64,
    pub original: OriginalFields,
    pub analysis: AnalysisResult,
}

/// The raw spreadsheet columns for one line.
///
/// The backend forwards the row as-is, so every field tolerates being
/// absent or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OriginalFields {
    #[serde(rename = "Supplier", default)]
    pub supplier: String,
    #[serde(rename = "Material", default)]
    pub material: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Amount", default)]
    pub amount: f64,
}

/// Self-assessed certainty of the categorization backend.
///
/// Anything unrecognized degrades to `Unknown` rather than failing the
/// whole upload decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
            Confidence::Unknown => "?",
        }
    }
}

/// A four-level category path; level4 is optional in both schema versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub level1: String,
    pub level2: String,
    pub level3: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level4: Option<String>,
}

impl Category {
    /// "level3 / level4" leaf display, as the original table renders it.
    pub fn leaf(&self) -> String {
        match &self.level4 {
            Some(l4) if !l4.is_empty() => format!("{} / {}", self.level3, l4),
            _ => self.level3.clone(),
        }
    }
}

/// An alternative categorization with the backend's reason for offering it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub reason: String,
}

/// Categorization payload for one line item.
///
/// Two schema versions exist in the wild: the richer one with a primary and
/// optional alternative category, and the older flat one with the levels
/// inline. Both must decode; accessors below give callers one view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Structured {
        primary: Category,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alternative: Option<Alternative>,
        confidence: Confidence,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confidence_reason: Option<String>,
        #[serde(default)]
        reasoning: String,
    },
    Flat {
        level1: String,
        level2: String,
        level3: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level4: Option<String>,
        confidence: Confidence,
        #[serde(default)]
        reasoning: String,
    },
}

impl AnalysisResult {
    pub fn confidence(&self) -> Confidence {
        match self {
            AnalysisResult::Structured { confidence, .. } => *confidence,
            AnalysisResult::Flat { confidence, .. } => *confidence,
        }
    }

    pub fn reasoning(&self) -> &str {
        match self {
            AnalysisResult::Structured { reasoning, .. } => reasoning,
            AnalysisResult::Flat { reasoning, .. } => reasoning,
        }
    }

    /// The primary category path under either schema.
    pub fn primary(&self) -> Category {
        match self {
            AnalysisResult::Structured { primary, .. } => primary.clone(),
            AnalysisResult::Flat {
                level1,
                level2,
                level3,
                level4,
                ..
            } => Category {
                level1: level1.clone(),
                level2: level2.clone(),
                level3: level3.clone(),
                level4: level4.clone(),
            },
        }
    }

    /// Alternative categorization, present only in the structured schema.
    pub fn alternative(&self) -> Option<&Alternative> {
        match self {
            AnalysisResult::Structured { alternative, .. } => alternative.as_ref(),
            AnalysisResult::Flat { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_flat_schema_upload_row() {
        let json = r#"{
            "original": {"Supplier":"Acme","Material":"Bolt","Description":"M6 steel bolt","Amount":120},
            "analysis": {"level1":"MRO","level2":"Fasteners","level3":"Bolts","confidence":"High","reasoning":"Matches catalog code"}
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.original.supplier, "Acme");
        assert_eq!(item.original.material, "Bolt");
        assert_eq!(item.original.description, "M6 steel bolt");
        assert_eq!(item.original.amount, 120.0);
        assert_eq!(item.analysis.confidence(), Confidence::High);
        assert_eq!(item.analysis.reasoning(), "Matches catalog code");
        let primary = item.analysis.primary();
        assert_eq!(primary.level1, "MRO");
        assert_eq!(primary.level2, "Fasteners");
        assert_eq!(primary.level3, "Bolts");
        assert!(primary.level4.is_none());
        assert!(item.analysis.alternative().is_none());
    }

    #[test]
    fn decodes_structured_schema_with_alternative() {
        let json = r#"{
            "id": 3,
            "original": {"Supplier":"Acme","Material":"Bolt","Description":"M6 steel bolt","Amount":120.5},
            "analysis": {
                "primary": {"level1":"MRO","level2":"Fasteners","level3":"Bolts","level4":"Hex"},
                "alternative": {"level1":"MRO","level2":"Hardware","level3":"Fasteners","reason":"thread pitch"},
                "confidence": "Medium",
                "confidence_reason": "ambiguous description",
                "reasoning": "Catalog lookup"
            }
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.analysis.primary().leaf(), "Bolts / Hex");
        let alt = item.analysis.alternative().unwrap();
        assert_eq!(alt.category.level3, "Fasteners");
        assert_eq!(alt.reason, "thread pitch");
        assert_eq!(item.analysis.confidence(), Confidence::Medium);
    }

    #[test]
    fn unrecognized_confidence_degrades_to_unknown() {
        let json = r#"{"level1":"A","level2":"B","level3":"C","confidence":"Very High","reasoning":"r"}"#;
        let analysis: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.confidence(), Confidence::Unknown);
        assert_eq!(analysis.confidence().as_str(), "?");
    }

    #[test]
    fn missing_original_fields_default() {
        let json = r#"{
            "original": {"Supplier":"Acme"},
            "analysis": {"level1":"A","level2":"B","level3":"C","confidence":"Low","reasoning":""}
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.original.material, "");
        assert_eq!(item.original.amount, 0.0);
    }

    #[test]
    fn category_leaf_without_level4() {
        let cat = Category {
            level1: "MRO".into(),
            level2: "Fasteners".into(),
            level3: "Bolts".into(),
            level4: None,
        };
        assert_eq!(cat.leaf(), "Bolts");
    }
}
