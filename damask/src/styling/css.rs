#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssRule {
    selector: String,
    declarations: Vec<(String, String)>,
    children: Vec<CssRule>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builds a class rule from an unescaped class name.
    pub fn for_class(class_name: &str) -> Self {
        Self::new(&format!(".{}", escape_class_fragment(class_name)))
    }

    pub fn declaration(mut self, name: &str, value: &str) -> Self {
        self.declarations.push((name.to_string(), value.to_string()));
        self
    }

    pub fn child(mut self, rule: CssRule) -> Self {
        self.children.push(rule);
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn declarations(&self) -> &[(String, String)] {
        &self.declarations
    }

    pub fn render(&self) -> String {
        self.render_internal(0)
    }

    fn render_internal(&self, indent: usize) -> String {
        let indent_str = "    ".repeat(indent);
        let inner_indent = "    ".repeat(indent + 1);

        let mut css = String::new();

        css.push_str(&format!("{}{} {{\n", indent_str, self.selector));

        for (name, value) in &self.declarations {
            css.push_str(&format!("{inner_indent}{name}: {value};\n"));
        }

        for child in &self.children {
            css.push_str(&child.render_internal(indent + 1));
        }

        css.push_str(&format!("{indent_str}}}\n"));
        css
    }
}

/// Escapes a class-name fragment for use in a selector. Characters outside
/// `[A-Za-z0-9_-]` get a backslash prefix so palette names such as
/// `blue.500` or `stripes/wide` stay valid.
pub fn escape_class_fragment(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            escaped.push(c);
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }
    escaped
}
