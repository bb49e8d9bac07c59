//! Pulls the JSON object out of free-form model output.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ParseError;

/// Parse the span from the first `{` to the last `}` as JSON.
///
/// The span is not brace-balanced: prose containing several JSON-like
/// fragments yields one span covering all of them, which then fails to parse.
pub fn parse_json(text: &str) -> Result<Value, ParseError> {
    let span = json_span(text).ok_or(ParseError::NoJsonObject)?;
    serde_json::from_str(span).map_err(ParseError::Malformed)
}

/// [`parse_json`] followed by deserialization into `T`.
pub fn parse_as<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    let value = parse_json(text)?;
    serde_json::from_value(value).map_err(ParseError::Schema)
}

fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_object_surrounded_by_prose() {
        let text = "Sure! Here is the result:\n```json\n{\"title\": \"Hi\", \"keywords\": [\"a\"]}\n```\nEnjoy.";
        assert_eq!(parse_json(text).unwrap(), json!({"title": "Hi", "keywords": ["a"]}));
    }

    #[test]
    fn nested_objects_survive() {
        let text = r#"{"name":"Lamp","attributes":{"color":["red"]}}"#;
        assert_eq!(parse_json(text).unwrap()["attributes"]["color"][0], "red");
    }

    #[test]
    fn no_brace_is_no_json_object() {
        assert!(matches!(parse_json("I cannot help with that."), Err(ParseError::NoJsonObject)));
        assert!(matches!(parse_json(""), Err(ParseError::NoJsonObject)));
    }

    #[test]
    fn closing_brace_before_opening_is_no_json_object() {
        assert!(matches!(parse_json("} then {"), Err(ParseError::NoJsonObject)));
    }

    #[test]
    fn span_runs_to_last_brace() {
        // Two fragments become one invalid span; no retry on a narrower one.
        let text = r#"Example: {"a": 1} and the answer {"b": 2}"#;
        assert!(matches!(parse_json(text), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn malformed_content_is_rejected() {
        assert!(matches!(parse_json("{title: 'x'}"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn wrong_shape_is_schema_error() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Needs { title: String }
        assert!(matches!(parse_as::<Needs>(r#"{"other": 1}"#), Err(ParseError::Schema(_))));
    }
}
