// X3dPrefs - core/form.rs
//
// Building blocks shared by the preference forms: combo selections,
// numeric text validation, and the partial-commit save report.
//
// Save policy for every form: each numeric field is validated on its own.
// Valid fields are committed even when others fail, invalid ones are
// skipped (their stored value is left untouched), and the labels of all
// skipped fields are reported in a single error dialog at the end.

use super::keys::PrefKey;
use super::registry::Preferences;
use crate::util::constants::NUMBER_FORMAT_ERROR_TITLE;
use crate::util::error::ValueError;

/// Whatever shows modal errors to the user.
///
/// The GUI implements this with a queued egui window; tests record calls.
pub trait DialogHost {
    fn show_error(&mut self, title: &str, message: &str);
}

// =============================================================================
// Combo selection
// =============================================================================

/// A non-editable drop-down over a fixed list of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboField {
    options: &'static [&'static str],
    selected: usize,
}

impl ComboField {
    pub fn new(options: &'static [&'static str]) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    /// Select `value`. Unknown values select the first choice.
    pub fn with_value(mut self, value: &str) -> Self {
        self.select_value(value);
        self
    }

    pub fn select_value(&mut self, value: &str) {
        self.selected = self.options.iter().position(|o| *o == value).unwrap_or(0);
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    pub fn value(&self) -> &'static str {
        self.options.get(self.selected).copied().unwrap_or("")
    }
}

// =============================================================================
// Numeric validation
// =============================================================================

/// What a numeric text field must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRule {
    /// A finite floating-point number.
    Float,
    /// A whole number, zero or greater.
    Count,
}

/// Validate `text` under `rule`, returning the trimmed text to store.
pub fn validate_number(label: &str, text: &str, rule: NumberRule) -> Result<String, ValueError> {
    let trimmed = text.trim();
    let ok = match rule {
        NumberRule::Float => trimmed.parse::<f32>().is_ok_and(f32::is_finite),
        NumberRule::Count => trimmed.parse::<u64>().is_ok(),
    };
    if ok {
        Ok(trimmed.to_string())
    } else {
        Err(ValueError::NotNumeric {
            label: label.to_string(),
            value: text.to_string(),
        })
    }
}

// =============================================================================
// Save report
// =============================================================================

/// Outcome of saving one form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SaveReport {
    rejected: Vec<ValueError>,
}

impl SaveReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and, if valid, store one numeric field.
    pub fn commit_number(
        &mut self,
        prefs: &mut Preferences,
        key: PrefKey,
        label: &str,
        text: &str,
        rule: NumberRule,
    ) {
        match validate_number(label, text, rule) {
            Ok(value) => prefs.set(key, value),
            Err(e) => {
                tracing::info!(key = key.key(), label, "Numeric field rejected, not saved");
                self.rejected.push(e);
            }
        }
    }

    /// Fold another form's outcome into this one.
    pub fn merge(&mut self, other: SaveReport) {
        self.rejected.extend(other.rejected);
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Labels of the fields that were not saved, in form order.
    pub fn rejected_labels(&self) -> Vec<&str> {
        self.rejected
            .iter()
            .map(|e| match e {
                ValueError::NotNumeric { label, .. } => label.as_str(),
                ValueError::NotInteger { key, .. } => key.as_str(),
            })
            .collect()
    }

    pub fn errors(&self) -> &[ValueError] {
        &self.rejected
    }

    /// Text of the aggregated error dialog, if anything was rejected.
    pub fn message(&self) -> Option<String> {
        if self.is_clean() {
            return None;
        }
        Some(format!(
            "These fields must contain valid numbers and were not saved: {}",
            self.rejected_labels().join(", ")
        ))
    }

    /// Show the aggregated error, once, if anything was rejected.
    pub fn notify(&self, host: &mut dyn DialogHost) {
        if let Some(message) = self.message() {
            host.show_error(NUMBER_FORMAT_ERROR_TITLE, &message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: &[&str] = &["ALL", "WARNINGS", "ERRORS"];

    #[test]
    fn test_combo_unknown_value_selects_first() {
        let combo = ComboField::new(LEVELS).with_value("VERBOSE");
        assert_eq!(combo.value(), "ALL");
        let combo = ComboField::new(LEVELS).with_value("ERRORS");
        assert_eq!(combo.selected_index(), 2);
    }

    #[test]
    fn test_combo_ignores_out_of_range_index() {
        let mut combo = ComboField::new(LEVELS).with_value("WARNINGS");
        combo.set_selected_index(9);
        assert_eq!(combo.value(), "WARNINGS");
    }

    #[test]
    fn test_float_rule_trims_and_rejects_garbage() {
        assert_eq!(validate_number("x", " 0.25 ", NumberRule::Float), Ok("0.25".into()));
        assert_eq!(validate_number("x", "1e-3", NumberRule::Float), Ok("1e-3".into()));
        assert!(validate_number("x", "abc", NumberRule::Float).is_err());
        assert!(validate_number("x", "", NumberRule::Float).is_err());
        assert!(validate_number("x", "NaN", NumberRule::Float).is_err());
    }

    #[test]
    fn test_count_rule_rejects_fractions_and_negatives() {
        assert_eq!(validate_number("x", "8", NumberRule::Count), Ok("8".into()));
        assert!(validate_number("x", "8.5", NumberRule::Count).is_err());
        assert!(validate_number("x", "-1", NumberRule::Count).is_err());
    }

    #[derive(Default)]
    struct Recorder(Vec<(String, String)>);

    impl DialogHost for Recorder {
        fn show_error(&mut self, title: &str, message: &str) {
            self.0.push((title.to_string(), message.to_string()));
        }
    }

    #[test]
    fn test_clean_report_shows_nothing() {
        let mut host = Recorder::default();
        SaveReport::new().notify(&mut host);
        assert!(host.0.is_empty());
    }

    #[test]
    fn test_report_lists_every_label_in_one_dialog() {
        let mut report = SaveReport::new();
        report.rejected.push(ValueError::NotNumeric {
            label: "Scale".into(),
            value: "a".into(),
        });
        report.rejected.push(ValueError::NotNumeric {
            label: "Quantization".into(),
            value: "b".into(),
        });

        let mut host = Recorder::default();
        report.notify(&mut host);

        assert_eq!(host.0.len(), 1);
        assert_eq!(host.0[0].0, NUMBER_FORMAT_ERROR_TITLE);
        assert!(host.0[0].1.ends_with("Scale, Quantization"), "{}", host.0[0].1);
    }
}
