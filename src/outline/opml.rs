//! OPML loading
//!
//! Reads an outliner export:
//! ```text
//! <opml version="2.0">
//!   <head>...</head>
//!   <body>
//!     <outline text="July 2020">
//!       <outline text="1-Jul-2020">
//!         <outline text="Task one name (3)"/>
//! ```
//! and turns the `outline` elements under `<body>` into an [`OutlineNode`] forest.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::core::error::{ConvertError, Result};
use crate::core::model::OutlineNode;

const ROOT_TAG: &str = "opml";
const BODY_TAG: &str = "body";
const OUTLINE_TAG: &str = "outline";
const LABEL_ATTR: &str = "text";

/// Read and parse an OPML file into its top-level outlines
pub fn load_opml(path: &Path) -> Result<Vec<OutlineNode>> {
    let bytes = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConvertError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    parse_opml(&text, path)
}

/// Parse OPML text; `path` is only used for error messages
pub fn parse_opml(text: &str, path: &Path) -> Result<Vec<OutlineNode>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).map_err(|source| ConvertError::Xml {
        path: path.to_path_buf(),
        source,
    })?;

    let root = doc.root_element();
    if root.tag_name().name() != ROOT_TAG {
        return Err(ConvertError::MissingElement {
            path: path.to_path_buf(),
            element: ROOT_TAG,
        });
    }

    let body = root
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == BODY_TAG)
        .ok_or_else(|| ConvertError::MissingElement {
            path: path.to_path_buf(),
            element: BODY_TAG,
        })?;

    Ok(children_of(body))
}

fn children_of(node: Node) -> Vec<OutlineNode> {
    node.children()
        .filter(|n| n.is_element())
        .map(to_outline_node)
        .collect()
}

fn to_outline_node(node: Node) -> OutlineNode {
    let tag = node.tag_name().name();
    if tag != OUTLINE_TAG {
        return OutlineNode::Artifact(tag.to_string());
    }

    OutlineNode::Container {
        label: node.attribute(LABEL_ATTR).map(str::to_string),
        children: children_of(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("test.opml")
    }

    #[test]
    fn test_parse_dynalist_export() {
        let text = r#"<?xml version="1.0" encoding="utf-8"?>
<opml version="2.0">
  <head><title>Time</title></head>
  <body>
    <outline text="July 2020">
      <outline text="1-Jul-2020">
        <outline text="Task one name (3)" />
        <outline text="R&amp;D sync (1)" />
      </outline>
    </outline>
  </body>
</opml>"#;
        let forest = parse_opml(text, &path()).unwrap();
        assert_eq!(
            forest,
            vec![OutlineNode::container(
                "July 2020",
                vec![OutlineNode::container(
                    "1-Jul-2020",
                    vec![
                        OutlineNode::leaf("Task one name (3)"),
                        OutlineNode::leaf("R&D sync (1)"),
                    ]
                )]
            )]
        );
    }

    #[test]
    fn test_other_elements_become_artifacts() {
        let text = r#"<opml><body><outline text="m"><note/><outline/></outline></body></opml>"#;
        let forest = parse_opml(text, &path()).unwrap();
        assert_eq!(
            forest,
            vec![OutlineNode::container(
                "m",
                vec![
                    OutlineNode::Artifact("note".into()),
                    OutlineNode::Container {
                        label: None,
                        children: Vec::new()
                    },
                ]
            )]
        );
    }

    #[test]
    fn test_empty_body() {
        let forest = parse_opml("<opml><head/><body/></opml>", &path()).unwrap();
        assert!(forest.is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let forest = parse_opml("\u{feff}<opml><body/></opml>", &path()).unwrap();
        assert!(forest.is_empty());
    }

    #[test]
    fn test_missing_body() {
        let err = parse_opml("<opml><head/></opml>", &path()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingElement { element: "body", .. }
        ));
    }

    #[test]
    fn test_wrong_root() {
        let err = parse_opml("<html><body/></html>", &path()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingElement { element: "opml", .. }
        ));
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_opml("<opml><body>", &path()).unwrap_err();
        assert!(matches!(err, ConvertError::Xml { .. }));
        assert!(err.to_string().contains("test.opml"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let err = load_opml(&temp.path().join("nope.opml")).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("bad.opml");
        fs::write(&file, b"<opml><body><outline text=\"\xff\"/></body></opml>").unwrap();
        let err = load_opml(&file).unwrap_err();
        assert!(matches!(err, ConvertError::Encoding { .. }));
    }
}
