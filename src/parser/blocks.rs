use tracing::debug;

use crate::document::Node;

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { text: String },
    ListGroup { items: Vec<String> },
}

impl Block {
    pub fn paragraph(text: &str) -> Self {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    #[cfg(test)]
    pub fn list<S: AsRef<str>>(items: &[S]) -> Self {
        Block::ListGroup {
            items: items.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

/// Turn a details container's children into blocks.
///
/// Empty paragraphs and lists without a non-empty item are skipped. Any child
/// that is neither a paragraph nor a list means the container is not one we
/// understand, and the result is empty.
pub fn extract_blocks(nodes: &[Node]) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Paragraph(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    blocks.push(Block::paragraph(text));
                }
            }
            Node::List(items) => {
                let items: Vec<String> = items
                    .iter()
                    .map(|i| i.trim())
                    .filter(|i| !i.is_empty())
                    .map(str::to_string)
                    .collect();
                if !items.is_empty() {
                    blocks.push(Block::ListGroup { items });
                }
            }
            Node::Other { tag, .. } => {
                debug!("Unexpected <{}> in details container, skipping segmentation", tag);
                return Vec::new();
            }
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_and_lists_in_order() {
        let nodes = vec![
            Node::Paragraph("First".into()),
            Node::List(vec!["a".into(), "b".into()]),
            Node::Paragraph("Second".into()),
        ];
        let blocks = extract_blocks(&nodes);
        assert_eq!(
            blocks,
            vec![
                Block::paragraph("First"),
                Block::list(&["a", "b"]),
                Block::paragraph("Second"),
            ]
        );
    }

    #[test]
    fn empty_text_is_dropped() {
        let nodes = vec![
            Node::Paragraph("   ".into()),
            Node::List(vec!["".into(), "  ".into()]),
            Node::List(vec!["kept".into(), " ".into()]),
        ];
        let blocks = extract_blocks(&nodes);
        assert_eq!(blocks, vec![Block::list(&["kept"])]);
    }

    #[test]
    fn text_is_trimmed() {
        let blocks = extract_blocks(&[Node::Paragraph("  padded \n".into())]);
        assert!(matches!(&blocks[0], Block::Paragraph { text } if text == "padded"));
    }

    #[test]
    fn unexpected_child_yields_nothing() {
        let nodes = vec![
            Node::Paragraph("Example University".into()),
            Node::Other {
                tag: "table".into(),
                html: "<table></table>".into(),
            },
        ];
        assert!(extract_blocks(&nodes).is_empty());
    }

    #[test]
    fn empty_container() {
        assert!(extract_blocks(&[]).is_empty());
    }
}
