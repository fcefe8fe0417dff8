//! Free-text JSON extraction from the generation response.
//!
//! The model is expected to wrap prose around a single JSON object; only
//! the substring from the first `{` to the last `}` is trusted. Extraction
//! is a dedicated stage with three named outcomes so the merge policy can
//! branch explicitly instead of catching errors.

use serde::Deserialize;

use crate::registry::Severity;

/// Outcome of attempting to pull a guidance object out of free text.
#[derive(Debug)]
pub enum JsonExtraction {
    /// A well-formed object with recognized field types.
    Object(ParsedEnhancement),
    /// Braces were found but the content is not a usable object.
    Malformed,
    /// No `{`/`}` pair exists in the text.
    Absent,
}

/// The guidance fields the model may supply. Every field is optional; the
/// merge policy decides the fallback for each one independently.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEnhancement {
    pub description: Option<String>,
    pub severity: Option<String>,
    pub precautions: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
    pub traditional_medicines: Option<Vec<String>>,
    pub home_remedies: Option<Vec<String>>,
    pub diet: Option<String>,
    pub workouts: Option<Vec<String>>,
    pub consultation_advice: Option<String>,
}

/// Locate and parse the embedded JSON object.
pub fn extract_enhancement(text: &str) -> JsonExtraction {
    let start = match text.find('{') {
        Some(i) => i,
        None => return JsonExtraction::Absent,
    };
    let end = match text.rfind('}') {
        Some(i) if i > start => i,
        _ => return JsonExtraction::Absent,
    };

    let candidate = &text[start..=end];
    let value: serde_json::Value = match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(_) => return JsonExtraction::Malformed,
    };
    if !value.is_object() {
        return JsonExtraction::Malformed;
    }

    match serde_json::from_value::<ParsedEnhancement>(value) {
        Ok(parsed) => JsonExtraction::Object(parsed),
        Err(_) => JsonExtraction::Malformed,
    }
}

/// Severity is trusted verbatim only when it names one of the three tiers.
/// Anything else is treated as absent.
pub fn parse_severity(raw: &str) -> Option<Severity> {
    match raw {
        "Mild" => Some(Severity::Mild),
        "Moderate" => Some(Severity::Moderate),
        "Severe" => Some(Severity::Severe),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_embedded_in_prose() {
        let text = r#"Here is my assessment. {"severity": "Severe", "diet": "light meals"} Hope this helps."#;
        match extract_enhancement(text) {
            JsonExtraction::Object(parsed) => {
                assert_eq!(parsed.severity.as_deref(), Some("Severe"));
                assert_eq!(parsed.diet.as_deref(), Some("light meals"));
                assert!(parsed.description.is_none());
            }
            other => panic!("expected Object, got {other:?}"),
        }
    }

    #[test]
    fn no_braces_is_absent() {
        assert!(matches!(
            extract_enhancement("no structured data here"),
            JsonExtraction::Absent
        ));
        assert!(matches!(extract_enhancement(""), JsonExtraction::Absent));
    }

    #[test]
    fn lone_or_reversed_braces_are_absent() {
        assert!(matches!(
            extract_enhancement("only an opening {"),
            JsonExtraction::Absent
        ));
        assert!(matches!(
            extract_enhancement("} closed before open {"),
            JsonExtraction::Absent
        ));
    }

    #[test]
    fn unparsable_content_is_malformed() {
        assert!(matches!(
            extract_enhancement("{not valid json}"),
            JsonExtraction::Malformed
        ));
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        // precautions must be an array of strings
        assert!(matches!(
            extract_enhancement(r#"{"precautions": "rest"}"#),
            JsonExtraction::Malformed
        ));
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let text = r#"{"severity": "Mild", "certainty": 0.9}"#;
        assert!(matches!(
            extract_enhancement(text),
            JsonExtraction::Object(_)
        ));
    }

    #[test]
    fn full_object_round_trips() {
        let text = r#"{
            "description": "desc",
            "severity": "Moderate",
            "precautions": ["a"],
            "medications": ["b"],
            "traditionalMedicines": ["c"],
            "homeRemedies": ["d"],
            "diet": "e",
            "workouts": ["f"],
            "consultationAdvice": "g"
        }"#;
        match extract_enhancement(text) {
            JsonExtraction::Object(parsed) => {
                assert_eq!(parsed.description.as_deref(), Some("desc"));
                assert_eq!(parsed.traditional_medicines.unwrap(), vec!["c"]);
                assert_eq!(parsed.home_remedies.unwrap(), vec!["d"]);
                assert_eq!(parsed.consultation_advice.as_deref(), Some("g"));
            }
            other => panic!("expected Object, got {other:?}"),
        }
    }

    #[test]
    fn severity_names_parse_exactly() {
        assert_eq!(parse_severity("Mild"), Some(Severity::Mild));
        assert_eq!(parse_severity("Moderate"), Some(Severity::Moderate));
        assert_eq!(parse_severity("Severe"), Some(Severity::Severe));
        assert_eq!(parse_severity("severe"), None);
        assert_eq!(parse_severity("Critical"), None);
    }
}
