//! Result schemas, one per guidance intent.
//!
//! Only declared top-level keys are checked. Nested structures such as
//! `career_options` entries pass through unvalidated.

use serde_json::Value;

use crate::interpret::InterpretError;

/// Top-level structural kind of a completion payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Object,
    /// Plain text; no JSON expected. The text travels in a
    /// `{"response": ...}` envelope once interpreted.
    Text,
}

impl Shape {
    /// Opening and closing bracket bytes, `None` for text.
    pub fn brackets(self) -> Option<(u8, u8)> {
        match self {
            Shape::Array => Some((b'[', b']')),
            Shape::Object => Some((b'{', b'}')),
            Shape::Text => None,
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Array => value.is_array(),
            Shape::Object | Shape::Text => value.is_object(),
        }
    }
}

/// The expected result of each guidance endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSchema {
    Roadmap,
    ChatAdvice,
    ResumeAnalysis,
    Progress,
    ResumeComparison,
}

impl ResultSchema {
    pub fn shape(self) -> Shape {
        match self {
            ResultSchema::Roadmap => Shape::Array,
            ResultSchema::ChatAdvice => Shape::Text,
            ResultSchema::ResumeAnalysis
            | ResultSchema::Progress
            | ResultSchema::ResumeComparison => Shape::Object,
        }
    }

    /// Keys every result must carry (every element, for arrays).
    pub fn required_keys(self) -> &'static [&'static str] {
        match self {
            ResultSchema::Roadmap => &[
                "milestone",
                "timeframe",
                "description",
                "skills",
                "resources",
            ],
            ResultSchema::ChatAdvice => &["response"],
            ResultSchema::ResumeAnalysis => &[
                "skills",
                "strengths",
                "weaknesses",
                "career_options",
                "improvements",
                "experience_level",
            ],
            ResultSchema::Progress => &["progress_score", "suggestions", "week"],
            ResultSchema::ResumeComparison => {
                &["skill_comparison", "experience_comparison", "insights"]
            }
        }
    }

    /// Required keys that are filled in downstream rather than rejected when absent.
    pub fn defaulted_keys(self) -> &'static [&'static str] {
        match self {
            ResultSchema::Progress => &["week"],
            _ => &[],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResultSchema::Roadmap => "roadmap",
            ResultSchema::ChatAdvice => "chat",
            ResultSchema::ResumeAnalysis => "resume-analysis",
            ResultSchema::Progress => "progress",
            ResultSchema::ResumeComparison => "resume-comparison",
        }
    }

    /// Checks `value` against the shape and key contract of this schema.
    pub fn validate(self, value: &Value) -> Result<(), InterpretError> {
        let shape = self.shape();
        if !shape.matches(value) {
            return Err(InterpretError::UnexpectedShape { expected: shape });
        }

        match value {
            Value::Array(items) => items.iter().try_for_each(|item| self.check_keys(item)),
            Value::Object(_) => {
                self.check_keys(value)?;
                self.check_field_types(value)
            }
            _ => Ok(()),
        }
    }

    fn check_keys(self, item: &Value) -> Result<(), InterpretError> {
        let defaulted = self.defaulted_keys();
        let missing = self
            .required_keys()
            .iter()
            .filter(|key| !defaulted.contains(*key))
            .find(|key| item.get(**key).is_none());

        match missing {
            Some(key) => Err(InterpretError::MissingField {
                field: (*key).to_string(),
            }),
            None => Ok(()),
        }
    }

    fn check_field_types(self, value: &Value) -> Result<(), InterpretError> {
        let (field, ok, expected) = match self {
            ResultSchema::Progress => (
                "progress_score",
                value["progress_score"].is_number(),
                "a number",
            ),
            ResultSchema::ChatAdvice => ("response", value["response"].is_string(), "a string"),
            _ => return Ok(()),
        };

        if ok {
            Ok(())
        } else {
            Err(InterpretError::InvalidField {
                field: field.to_string(),
                expected,
            })
        }
    }
}
