// Shared prompt constants and prompt-building utilities.
// Each intent's template lives in guidance/prompts.rs; this file holds the
// cross-cutting fragments and the template filler.

/// Closing instruction for every prompt that expects a JSON payload.
pub const STRICT_JSON_INSTRUCTION: &str =
    "Ensure the output is strictly valid JSON, with no extra text, markdown, \
    or comments outside the JSON structure.";

/// Closing instruction for prompts that expect bulleted plain text.
pub const PLAIN_BULLETS_INSTRUCTION: &str =
    "Return the response as plain text with bullet points (e.g., - Point 1\n- Point 2), \
    no JSON or extra formatting.";

/// Substituted for optional fields the caller left empty.
pub const NONE_LISTED: &str = "none listed";

/// Fills `{name}` placeholders in `template` in a single pass.
///
/// Substituted values are never rescanned, so user text containing braces or
/// placeholder names lands in the prompt verbatim. Unknown placeholders and
/// any other braces in the template are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let replacement = tail[1..].find('}').and_then(|close| {
            let name = &tail[1..1 + close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close + 2))
        });

        match replacement {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns `value`, or `default` when it is blank.
pub fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}
