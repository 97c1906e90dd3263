//! String repetition.

/// Repeats a fixed string a caller-chosen number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeater {
    text: String,
    separator: String,
}

impl Repeater {
    /// Create a repeater for `text`, joining copies with `separator`.
    pub fn new(text: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            separator: separator.into(),
        }
    }

    /// `times` copies of the text joined by the separator.
    ///
    /// Zero or a negative count gives an empty string.
    pub fn repeat(&self, times: i64) -> String {
        if times <= 0 {
            return String::new();
        }
        vec![self.text.as_str(); times as usize].join(&self.separator)
    }
}

/// Closure form of [`Repeater::repeat`].
pub fn repeater(text: impl Into<String>, separator: impl Into<String>) -> impl Fn(i64) -> String {
    let r = Repeater::new(text, separator);
    move |times| r.repeat(times)
}
