use regex::Regex;

/// Remove a leading copy of a field's own label from its value.
///
/// Region selections often catch the printed label along with the value
/// (`"Invoice: 12345"` for a field named `Invoice`). A case-insensitive
/// prefix equal to `name` is removed together with any colons and
/// whitespace after it. Values that do not start with the label are only
/// trimmed.
pub fn strip_field_label(value: &str, name: &str) -> String {
    let value = value.trim();
    let name = name.trim();
    if name.is_empty() {
        return value.to_string();
    }

    let pattern = format!(r"(?i)^{}[:\s]*", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => re.replace(value, "").trim().to_string(),
        Err(_) => value.to_string(),
    }
}
