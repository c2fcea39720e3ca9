//! The low-level parameterized SQL string representation.

use quill_schema::value::Value;

/// Accumulates SQL text with `?` placeholders and the bind values in
/// placeholder order. Placeholder positions are recorded as they are
/// appended, so a literal `?` in syntax text is never mistaken for one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sql {
    pub text: String,
    pub params: Vec<Value>,
    placeholders: Vec<usize>,
}

impl Sql {
    pub fn new() -> Sql {
        Sql::default()
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.text.push_str(sql);
    }

    pub fn append_identifier(&mut self, name: &str) {
        self.text.push_str(&quote(name));
    }

    pub fn append_param(&mut self, param: Value) {
        self.placeholders.push(self.text.len());
        self.text.push('?');
        self.params.push(param);
    }

    /// Render for display only: parameters are inlined as quoted literals
    /// at the recorded placeholder positions. Never feed this to an
    /// execution layer.
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut params = self.params.iter();
        let mut placeholders = self.placeholders.iter().peekable();
        for (index, c) in self.text.char_indices() {
            if placeholders.peek() == Some(&&index) {
                placeholders.next();
                if let Some(param) = params.next() {
                    out.push('\'');
                    out.push_str(&param.to_string().replace('\'', "''"));
                    out.push('\'');
                    continue;
                }
            }
            out.push(c);
        }
        out
    }
}

/// Quote an identifier unless every character is legal bare. The empty
/// string passes through untouched.
pub fn quote(name: &str) -> String {
    if name.is_empty() || name.chars().all(is_legal) {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

fn is_legal(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '*' | '#' | '.' | '@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_names_stay_bare() {
        assert_eq!(quote("abc"), "abc");
        assert_eq!(quote("a_b$1.c"), "a_b$1.c");
        assert_eq!(quote("*"), "*");
    }

    #[test]
    fn illegal_names_are_double_quoted() {
        assert_eq!(quote("some table"), "\"some table\"");
        assert_eq!(quote("my age"), "\"my age\"");
    }

    #[test]
    fn the_empty_name_passes_through() {
        assert_eq!(quote(""), "");
    }

    #[test]
    fn display_leaves_literal_question_marks_alone() {
        let mut sql = Sql::new();
        sql.append_syntax("note = 'why?' AND age = ");
        sql.append_param(Value::Integer(30));
        assert_eq!(sql.display(), "note = 'why?' AND age = '30'");
    }

    #[test]
    fn display_inlines_parameters_quoted() {
        let mut sql = Sql::new();
        sql.append_syntax("name = ");
        sql.append_param(Value::Text("o'brien".to_string()));
        assert_eq!(sql.display(), "name = 'o''brien'");
    }
}
