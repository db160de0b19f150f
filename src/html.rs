use std::fmt::Write;

use html_escape::encode_text;

use crate::document::{Details, Document, Node};
use crate::parser::render::{BodyNode, EntryTree, Inline};

/// Serialize the page back into the `resume-section` markup the stylesheet expects.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<div id=\"generated-resume\">\n");
    for section in &doc.sections {
        out.push_str("  <section class=\"resume-section\">\n");
        let _ = writeln!(
            out,
            "    <h2 class=\"resume-title\" tabindex=\"0\">{}</h2>",
            encode_text(&section.title)
        );
        match &section.details {
            Some(Details::Raw(nodes)) => {
                out.push_str("    <div class=\"resume-details\">\n");
                for node in nodes {
                    write_node(&mut out, node);
                }
                out.push_str("    </div>\n");
            }
            Some(Details::Entries(entries)) => {
                out.push_str("    <div class=\"resume-details\">\n");
                for entry in entries {
                    write_entry(&mut out, entry);
                }
                out.push_str("    </div>\n");
            }
            None => {}
        }
        out.push_str("  </section>\n");
    }
    out.push_str("</div>\n");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Paragraph(text) => {
            let _ = writeln!(out, "      <p>{}</p>", encode_text(text));
        }
        Node::List(items) => {
            out.push_str("      <ul>\n");
            for item in items {
                let _ = writeln!(out, "        <li>{}</li>", encode_text(item));
            }
            out.push_str("      </ul>\n");
        }
        Node::Other { html, .. } => {
            let _ = writeln!(out, "      {}", html);
        }
    }
}

fn write_entry(out: &mut String, entry: &EntryTree) {
    out.push_str("      <article class=\"entry\">\n");
    out.push_str("        <div class=\"entry__header\">\n");
    let title = encode_text(&entry.title);
    if entry.emphasized {
        let _ = writeln!(
            out,
            "          <h3 class=\"entry__title\"><strong>{}</strong></h3>",
            title
        );
    } else {
        let _ = writeln!(out, "          <h3 class=\"entry__title\">{}</h3>", title);
    }
    if let Some(caption) = &entry.caption {
        let _ = writeln!(
            out,
            "          <span class=\"entry__meta\">{}</span>",
            encode_text(caption)
        );
    }
    out.push_str("        </div>\n");

    out.push_str("        <div class=\"entry__body\">\n");
    for node in &entry.body {
        match node {
            BodyNode::Paragraph(runs) => {
                let _ = writeln!(out, "          <p>{}</p>", inline_html(runs));
            }
            BodyNode::List(items) => {
                out.push_str("          <ul>\n");
                for runs in items {
                    let _ = writeln!(out, "            <li>{}</li>", inline_html(runs));
                }
                out.push_str("          </ul>\n");
            }
        }
    }
    out.push_str("        </div>\n");
    out.push_str("      </article>\n");
}

fn inline_html(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Plain(text) => encode_text(text).into_owned(),
            Inline::Strong(text) => format!("<strong>{}</strong>", encode_text(text)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Section;

    fn tree(emphasized: bool, caption: Option<&str>) -> EntryTree {
        EntryTree {
            title: "Tom & Jerry Co.".into(),
            emphasized,
            caption: caption.map(String::from),
            body: vec![
                BodyNode::Paragraph(vec![
                    Inline::Plain("Finished with ".into()),
                    Inline::Strong("GPA 3.9".into()),
                ]),
                BodyNode::List(vec![vec![Inline::Plain("a < b".into())]]),
            ],
        }
    }

    #[test]
    fn entry_markup() {
        let doc = Document {
            sections: vec![Section {
                title: "Education".into(),
                details: Some(Details::Entries(vec![tree(true, Some("Springfield — 2010"))])),
            }],
        };
        let html = render_document(&doc);
        assert!(html
            .contains("<h3 class=\"entry__title\"><strong>Tom &amp; Jerry Co.</strong></h3>"));
        assert!(html.contains("<span class=\"entry__meta\">Springfield — 2010</span>"));
        assert!(html.contains("<p>Finished with <strong>GPA 3.9</strong></p>"));
        assert!(html.contains("<li>a &lt; b</li>"));
    }

    #[test]
    fn no_caption_no_meta_span() {
        let doc = Document {
            sections: vec![Section {
                title: "Work".into(),
                details: Some(Details::Entries(vec![tree(false, None)])),
            }],
        };
        let html = render_document(&doc);
        assert!(html.contains("<h3 class=\"entry__title\">Tom &amp; Jerry Co.</h3>"));
        assert!(!html.contains("entry__meta"));
    }

    #[test]
    fn raw_sections_round_trip_their_children() {
        let doc = Document {
            sections: vec![Section::new(
                "Hobbies",
                vec![
                    Node::Paragraph("Chess".into()),
                    Node::List(vec!["Hiking".into()]),
                    Node::Other {
                        tag: "table".into(),
                        html: "<table><tbody><tr><td>x</td></tr></tbody></table>".into(),
                    },
                ],
            )],
        };
        let html = render_document(&doc);
        assert!(html.contains("<h2 class=\"resume-title\" tabindex=\"0\">Hobbies</h2>"));
        assert!(html.contains("<p>Chess</p>"));
        assert!(html.contains("<li>Hiking</li>"));
        assert!(html.contains("<td>x</td>"));

        let reparsed = Document::parse(&html);
        assert_eq!(reparsed, doc);
    }
}
