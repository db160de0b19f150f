use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::parser::render::EntryTree;

static SECTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.resume-section").unwrap());
static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".resume-title").unwrap());
static DETAILS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".resume-details").unwrap());
static ITEM_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

/// One child of a details container, as it came in.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(String),
    List(Vec<String>),
    Other { tag: String, html: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Details {
    Raw(Vec<Node>),
    Entries(Vec<EntryTree>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    /// `None` when the section has no details container.
    pub details: Option<Details>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Section {
    pub fn new(title: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            title: title.into(),
            details: Some(Details::Raw(nodes)),
        }
    }

    pub fn name(&self) -> String {
        normalize_title(&self.title)
    }
}

impl Document {
    /// Read every `section.resume-section` out of an HTML fragment.
    pub fn parse(html: &str) -> Self {
        let fragment = Html::parse_fragment(html);
        let sections = fragment.select(&SECTION_SEL).map(parse_section).collect();
        Document { sections }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        let name = normalize_title(name);
        self.sections.iter().position(|s| s.name() == name)
    }
}

pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

fn parse_section(section: ElementRef) -> Section {
    let title = section
        .select(&TITLE_SEL)
        .next()
        .map(|t| element_text(&t))
        .unwrap_or_default();

    let details = section.select(&DETAILS_SEL).next().map(|d| {
        let nodes = d
            .children()
            .filter_map(ElementRef::wrap)
            .map(parse_node)
            .collect();
        Details::Raw(nodes)
    });

    Section { title, details }
}

fn parse_node(el: ElementRef) -> Node {
    match el.value().name() {
        "p" => Node::Paragraph(element_text(&el)),
        "ul" | "ol" => Node::List(el.select(&ITEM_SEL).map(|li| element_text(&li)).collect()),
        tag => Node::Other {
            tag: tag.to_string(),
            html: el.html(),
        },
    }
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
