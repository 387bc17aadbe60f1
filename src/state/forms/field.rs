//! Form field value objects

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    /// Example text shown while the field is empty
    pub hint: &'static str,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(label: &'static str, hint: &'static str, is_multiline: bool) -> Self {
        Self {
            label,
            hint,
            value: String::new(),
            is_multiline,
        }
    }

    /// Whether the field holds only whitespace (or nothing)
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Append a newline (multiline fields only)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}
