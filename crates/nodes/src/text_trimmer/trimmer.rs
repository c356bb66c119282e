//! The runtime text trimmer.

use tracing::trace;

use super::{Config, TrimMode, INPUT_KEY, OUTPUT_KEY};
use crate::{InvokableNode, NodeError, Record, Value};

/// Built text trimmer. Holds only its resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTrimmer {
    mode: TrimMode,
    custom_chars: String,
}

impl TextTrimmer {
    pub fn new(mode: TrimMode, custom_chars: impl Into<String>) -> Self {
        Self {
            mode,
            custom_chars: custom_chars.into(),
        }
    }

    pub fn mode(&self) -> &TrimMode {
        &self.mode
    }

    pub fn custom_chars(&self) -> &str {
        &self.custom_chars
    }
}

impl From<Config> for TextTrimmer {
    fn from(config: Config) -> Self {
        Self::new(config.mode, config.custom_chars)
    }
}

impl InvokableNode for TextTrimmer {
    fn invoke(&self, input: &Record) -> Result<Record, NodeError> {
        let value = input
            .get(INPUT_KEY)
            .ok_or(NodeError::MissingInput { field: INPUT_KEY })?;

        let text = value.as_str().ok_or_else(|| NodeError::TypeMismatch {
            field: INPUT_KEY,
            expected: "string",
            actual: value.type_name(),
        })?;

        let trimmed = self.mode.apply(text, &self.custom_chars)?;
        trace!(mode = %self.mode, before = text.len(), after = trimmed.len(), "trimmed text");

        Ok(Record::from([(OUTPUT_KEY.to_owned(), Value::String(trimmed))]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: impl Into<Value>) -> Record {
        Record::from([(INPUT_KEY.to_owned(), text.into())])
    }

    fn run(trimmer: &TextTrimmer, text: &str) -> String {
        let out = trimmer.invoke(&record(text)).expect("invoke succeeds");
        assert_eq!(out.len(), 1);
        out[OUTPUT_KEY].as_str().expect("string output").to_owned()
    }

    #[test]
    fn trims_leading_trailing() {
        let trimmer = TextTrimmer::new(TrimMode::LeadingTrailing, "");
        assert_eq!(run(&trimmer, "  hello world  "), "hello world");
    }

    #[test]
    fn trims_all() {
        let trimmer = TextTrimmer::new(TrimMode::All, "");
        assert_eq!(run(&trimmer, "  hello\tworld\n  "), "helloworld");
    }

    #[test]
    fn trims_leading() {
        let trimmer = TextTrimmer::new(TrimMode::Leading, "");
        assert_eq!(run(&trimmer, "  hello world  "), "hello world  ");
    }

    #[test]
    fn trims_trailing() {
        let trimmer = TextTrimmer::new(TrimMode::Trailing, "");
        assert_eq!(run(&trimmer, "  hello world  "), "  hello world");
    }

    #[test]
    fn trims_custom() {
        let trimmer = TextTrimmer::new(TrimMode::Custom, ".,!");
        assert_eq!(run(&trimmer, "...hello world!!!"), "hello world");
    }

    #[test]
    fn built_from_config_keeps_settings() {
        let trimmer = TextTrimmer::from(Config::new(TrimMode::Custom, "#*"));
        assert_eq!(trimmer.mode(), &TrimMode::Custom);
        assert_eq!(trimmer.custom_chars(), "#*");
    }

    #[test]
    fn missing_input_fails() {
        let trimmer = TextTrimmer::new(TrimMode::All, "");
        let err = trimmer.invoke(&Record::new()).unwrap_err();
        assert!(matches!(err, NodeError::MissingInput { field: INPUT_KEY }));
    }

    #[test]
    fn non_string_input_reports_actual_type() {
        let trimmer = TextTrimmer::new(TrimMode::All, "");
        let err = trimmer.invoke(&record(42.0)).unwrap_err();
        assert!(matches!(err, NodeError::TypeMismatch { actual: "number", .. }));
        assert_eq!(err.to_string(), "input field 'text' must be string but got number");
    }

    #[test]
    fn unrecognized_mode_fails_at_invoke() {
        let trimmer = TextTrimmer::new(TrimMode::from("sideways"), "");
        let err = trimmer.invoke(&record("x")).unwrap_err();
        assert!(matches!(err, NodeError::UnsupportedMode(m) if m == "sideways"));
    }

    #[test]
    fn input_record_is_left_untouched() {
        let trimmer = TextTrimmer::new(TrimMode::LeadingTrailing, "");
        let mut input = record(" a ");
        input.insert("other".into(), Value::Bool(true));
        let before = input.clone();

        let out = trimmer.invoke(&input).unwrap();
        assert_eq!(input, before);
        assert!(!out.contains_key("other"));
    }
}
