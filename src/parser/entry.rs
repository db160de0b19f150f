use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub title: String,
    pub date: Option<String>,
    pub location: Option<String>,
    pub body: Vec<BodyItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BodyItem {
    Text(String),
    List(Vec<String>),
}

/// An entry under construction.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    entry: Entry,
    // The trailing List item still accepts bullets from the same source list.
    list_open: bool,
}

impl EntryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            entry: Entry {
                title: title.into(),
                date: None,
                location: None,
                body: Vec::new(),
            },
            list_open: false,
        }
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.entry.location = location;
        self
    }

    pub fn has_date(&self) -> bool {
        self.entry.date.is_some()
    }

    pub fn has_location(&self) -> bool {
        self.entry.location.is_some()
    }

    /// First date wins; later calls are ignored.
    pub fn set_date(&mut self, date: String) {
        self.entry.date.get_or_insert(date);
    }

    /// First location wins; later calls are ignored.
    pub fn set_location(&mut self, location: String) {
        self.entry.location.get_or_insert(location);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.list_open = false;
        if !text.is_empty() {
            self.entry.body.push(BodyItem::Text(text));
        }
    }

    /// Append a whole list group as one List item.
    pub fn push_list(&mut self, items: &[String]) {
        self.close_list();
        self.entry.body.push(BodyItem::List(items.to_vec()));
    }

    /// Append a bullet, merging into the trailing List while the source list is open.
    pub fn push_bullet(&mut self, item: impl Into<String>) {
        let item = item.into();
        if self.list_open {
            if let Some(BodyItem::List(items)) = self.entry.body.last_mut() {
                items.push(item);
                return;
            }
        }
        self.entry.body.push(BodyItem::List(vec![item]));
        self.list_open = true;
    }

    /// The current source list ended; the next bullet starts a new List item.
    pub fn close_list(&mut self) {
        self.list_open = false;
    }

    pub fn build(self) -> Entry {
        self.entry
    }
}

/// Segmenter state: either nothing is open or one entry is accumulating.
#[derive(Debug, Clone, Default)]
pub enum State {
    #[default]
    Idle,
    Open(EntryBuilder),
}

impl State {
    /// Close the open entry, if any, into `out`.
    pub fn flush(self, out: &mut Vec<Entry>) {
        if let State::Open(builder) = self {
            out.push(builder.build());
        }
    }
}
