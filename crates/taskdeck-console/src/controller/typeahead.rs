/*
[INPUT]:  Typeahead widget bindings and remote suggestion batches
[OUTPUT]: Per-field suggestion state with stale-response discard
[POS]:    Controller layer - typeahead field resolver
[UPDATE]: When widget option formats change
*/

use taskdeck_adapter::{TypeaheadItem, TypeaheadOptions};

/// Parsed display template of the form `"{name} ({city})"`.
///
/// Bracketed tokens are substituted with the matching item key; everything
/// else is copied through. Tokens without a value render empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFormat {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token(String),
}

impl ItemFormat {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            let Some(end) = rest[start..].find('}') else {
                break;
            };
            literal.push_str(&rest[..start]);
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Token(rest[start + 1..start + end].to_string()));
            rest = &rest[start + end + 1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }

    pub fn format(&self, item: &TypeaheadItem) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(key) => match item.get(key) {
                    Some(serde_json::Value::String(text)) => out.push_str(text),
                    Some(serde_json::Value::Null) | None => {}
                    Some(other) => out.push_str(&other.to_string()),
                },
            }
        }
        out
    }
}

/// Live suggestion state of one typeahead-backed field.
///
/// Responses race freely; only the batch answering the latest recorded
/// query is ever installed.
#[derive(Debug)]
pub struct TypeaheadState {
    pub category: String,
    format: ItemFormat,
    latest_query: String,
    items: Vec<TypeaheadItem>,
    selected: Option<usize>,
}

impl TypeaheadState {
    pub fn new(options: &TypeaheadOptions) -> Self {
        Self {
            category: options.category.clone(),
            format: ItemFormat::parse(&options.item_format),
            latest_query: String::new(),
            items: Vec::new(),
            selected: None,
        }
    }

    /// Record a new search intent, dropping whatever was on display.
    /// Returns whether a request should actually be issued.
    pub fn begin_search(&mut self, text: &str) -> bool {
        self.latest_query = text.to_string();
        self.items.clear();
        self.selected = None;
        !text.is_empty()
    }

    /// Install a result batch only when it answers the latest intent.
    /// Returns whether the batch was installed.
    pub fn apply_results(&mut self, query: &str, items: Vec<TypeaheadItem>) -> bool {
        if query != self.latest_query {
            return false;
        }
        self.selected = if items.is_empty() { None } else { Some(0) };
        self.items = items;
        true
    }

    pub fn latest_query(&self) -> &str {
        &self.latest_query
    }

    pub fn has_suggestions(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn suggestion_labels(&self) -> Vec<String> {
        self.items.iter().map(|item| self.format.format(item)).collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Formatted value of the highlighted suggestion; this is what selection
    /// copies into the field.
    pub fn selected_label(&self) -> Option<String> {
        self.items
            .get(self.selected?)
            .map(|item| self.format.format(item))
    }

    pub fn move_selection(&mut self, delta: i64) {
        if self.items.is_empty() {
            return;
        }
        let current = self.selected.unwrap_or(0) as i64;
        let last = (self.items.len() - 1) as i64;
        self.selected = Some((current + delta).clamp(0, last) as usize);
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }
}
