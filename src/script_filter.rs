//! Script filter XML: the item list returned to the launcher.
//!
//! ```text
//! <items>
//!   <item uid="0" valid="no" autocomplete=""><title>Safari</title></item>
//!   <item uid="fx-uid" valid="yes" autocomplete="fx"><title>Firefox</title></item>
//! </items>
//! ```

use std::fmt;

use crate::error::ItemError;

/// A single entry of the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    uid: Option<String>,
    valid: bool,
    autocomplete: String,
}

impl Item {
    /// Create an item; the title must not be empty.
    pub fn new(title: impl Into<String>) -> Result<Self, ItemError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ItemError::InvalidTitle);
        }
        Ok(Item {
            title,
            uid: None,
            valid: false,
            autocomplete: String::new(),
        })
    }

    /// Explicit uid. An empty uid is treated as absent.
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        let uid = uid.into();
        self.uid = (!uid.is_empty()).then_some(uid);
        self
    }

    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = autocomplete.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Assigned uid; set once the item is pushed into a [`ScriptFilter`].
    pub fn uid_str(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn autocomplete_str(&self) -> &str {
        &self.autocomplete
    }
}

/// Ordered item list serialized as script filter XML.
#[derive(Debug, Clone, Default)]
pub struct ScriptFilter {
    items: Vec<Item>,
    /// Default uid for the next item; counts every append, explicit uid or not.
    next_uid: usize,
}

impl ScriptFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, assigning the positional uid when none was given.
    pub fn push(&mut self, mut item: Item) {
        if item.uid.is_none() {
            item.uid = Some(self.next_uid.to_string());
        }
        self.next_uid += 1;
        self.items.push(item);
    }

    /// Append an item from its parts.
    pub fn append_item(
        &mut self,
        title: &str,
        uid: Option<&str>,
        valid: bool,
        autocomplete: &str,
    ) -> Result<(), ItemError> {
        let mut item = Item::new(title)?.valid(valid).autocomplete(autocomplete);
        if let Some(uid) = uid {
            item = item.uid(uid);
        }
        self.push(item);
        Ok(())
    }

    /// Append an item with only a title.
    pub fn append_title(&mut self, title: &str) -> Result<(), ItemError> {
        self.append_item(title, None, false, "")
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the item list as XML. Has no side effects.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScriptFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<items>")?;
        for item in &self.items {
            write!(
                f,
                "<item uid=\"{}\" valid=\"{}\" autocomplete=\"{}\"><title>{}</title></item>",
                escape_attr(item.uid.as_deref().unwrap_or_default()),
                if item.valid { "yes" } else { "no" },
                escape_attr(&item.autocomplete),
                escape_text(&item.title),
            )?;
        }
        f.write_str("</items>")
    }
}

/// Escape character data (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
///
/// Whitespace control characters become character references so attribute
/// normalization does not fold them into spaces.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}
