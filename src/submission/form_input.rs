//! Form Input
//!
//! Ordered name/value pairs captured from a form, mirroring `FormData`:
//! repeated names are kept, lookups return the first value.

use wasm_bindgen::JsCast;

use super::error::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    /// Selected file name (empty when no file chosen)
    File(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    entries: Vec<(String, FormValue)>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut input = Self::new();
        for (name, value) in pairs {
            input.push_text(name, value);
        }
        input
    }

    pub fn push_text(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), FormValue::Text(value.to_string())));
    }

    pub fn push_file(&mut self, name: &str, file_name: &str) {
        self.entries.push((name.to_string(), FormValue::File(file_name.to_string())));
    }

    /// First text value for `name`; None when the field is absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|(n, v)| match v {
            FormValue::Text(s) if n == name => Some(s.as_str()),
            _ => None,
        })
    }

    /// First value for `name` if non-empty
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|s| !s.is_empty())
    }

    /// Name of the chosen file, None when absent or nothing chosen
    pub fn file_name(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|(n, v)| match v {
            FormValue::File(f) if n == name && !f.is_empty() => Some(f.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot a live `<form>` element
    pub fn from_form(form: &web_sys::HtmlFormElement) -> StoreResult<Self> {
        let form_data = web_sys::FormData::new_with_form(form)
            .map_err(|e| StoreError::Unavailable(format!("FormData: {:?}", e)))?;
        let iter = js_sys::try_iter(&form_data)
            .map_err(|e| StoreError::Unavailable(format!("FormData entries: {:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("FormData is not iterable".to_string()))?;

        let mut input = Self::new();
        for entry in iter {
            let entry = entry.map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
            let pair: js_sys::Array = entry.unchecked_into();
            let Some(name) = pair.get(0).as_string() else { continue };
            let value = pair.get(1);
            if let Some(text) = value.as_string() {
                input.push_text(&name, &text);
            } else if let Some(file) = value.dyn_ref::<web_sys::File>() {
                input.push_file(&name, &file.name());
            }
        }
        Ok(input)
    }
}

/// JS `Number(s)`: blank is 0, anything non-numeric is None
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// JS `parseFloat(s)`: longest numeric prefix after leading whitespace
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start().as_bytes();
    let mut end = 0;

    if end < s.len() && (s[end] == b'+' || s[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < s.len() && s[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < s.len() && s[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < s.len() && (s[end] == b'e' || s[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < s.len() && (s[exp_end] == b'+' || s[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < s.len() && s[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    std::str::from_utf8(&s[..end])
        .ok()
        .and_then(|num| num.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Comma-separated list, trimmed, blanks dropped
pub fn parse_comma_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let input = FormInput::from_pairs([("a", "1"), ("a", "2"), ("b", "")]);
        assert_eq!(input.get("a"), Some("1"));
        assert_eq!(input.get("b"), Some(""));
        assert_eq!(input.get_non_empty("b"), None);
        assert_eq!(input.get("missing"), None);
    }

    #[test]
    fn test_file_names() {
        let mut input = FormInput::new();
        input.push_file("proposalFile", "plan.pdf");
        input.push_file("budgetFile", "");
        assert_eq!(input.file_name("proposalFile"), Some("plan.pdf"));
        assert_eq!(input.file_name("budgetFile"), None);
        assert_eq!(input.get("proposalFile"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("500"), Some(500.0));
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("   "), Some(0.0));
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("1500"), Some(1500.0));
        assert_eq!(parse_leading_float("  12abc"), Some(12.0));
        assert_eq!(parse_leading_float("-3.5e2x"), Some(-350.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("7."), Some(7.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("-"), None);
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(parse_comma_list(Some(" health, ,education ,")), ["health", "education"]);
        assert!(parse_comma_list(None).is_empty());
    }
}
