//! Owned XML tree for `content.xml`.
//!
//! The presentation is read once into an element tree. Every element is
//! classified into a [`Role`] while the tree is built, so the slide walker
//! dispatches on roles instead of element names.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Presentational role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Synthetic document root
    Document,
    /// `draw:page`
    Page,
    /// `style:style`
    StyleDefinition,
    /// Frame with `presentation:class="title"`
    Title,
    /// Frame with `presentation:class="outline"`
    Outline,
    /// `presentation:notes`
    Notes,
    /// `draw:frame`
    Frame,
    /// `draw:text-box`
    TextBox,
    /// `draw:custom-shape`
    CustomShape,
    /// `text:list`
    List,
    /// `text:list-item`
    ListItem,
    /// `text:list-header`
    ListHeader,
    /// `text:p` or `text:h`
    Paragraph,
    /// `text:span`
    Span,
    /// `draw:image` or `draw:plugin`
    Image,
    /// Anything else
    Other,
}

impl Role {
    /// Classifies an element from its qualified name and attributes.
    fn classify(name: &str, attributes: &[(String, String)]) -> Self {
        let class = attributes
            .iter()
            .find(|(key, _)| key == "presentation:class")
            .map(|(_, value)| value.as_str());

        match class {
            Some("title") => return Role::Title,
            Some("outline") => return Role::Outline,
            _ => {}
        }

        match name {
            "draw:page" => Role::Page,
            "style:style" => Role::StyleDefinition,
            "presentation:notes" => Role::Notes,
            "draw:frame" => Role::Frame,
            "draw:text-box" => Role::TextBox,
            "draw:custom-shape" => Role::CustomShape,
            "text:list" => Role::List,
            "text:list-item" => Role::ListItem,
            "text:list-header" => Role::ListHeader,
            "text:p" | "text:h" => Role::Paragraph,
            "text:span" => Role::Span,
            "draw:image" | "draw:plugin" => Role::Image,
            _ => Role::Other,
        }
    }

    /// Returns true if whitespace inside this element is significant.
    fn keeps_whitespace(self) -> bool {
        matches!(self, Role::Paragraph | Role::Span)
    }
}

/// A node of the tree: an element or a run of character data.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its qualified name, attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub role: Role,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn new(name: String, attributes: Vec<(String, String)>) -> Self {
        let role = Role::classify(&name, &attributes);
        Self {
            name,
            role,
            attributes,
            children: Vec::new(),
        }
    }

    fn document() -> Self {
        Self {
            name: "#document".to_string(),
            role: Role::Document,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Looks up an attribute by qualified name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Returns the first child element.
    pub fn first_element(&self) -> Option<&Element> {
        self.elements().next()
    }

    /// Returns all descendant elements with the given role, in document order.
    pub fn descendants_with_role(&self, role: Role) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_role(self, role, &mut found);
        found
    }

    /// Returns the first non-empty text node below this element (depth-first).
    pub fn first_text(&self) -> Option<&str> {
        for node in &self.children {
            match node {
                Node::Text(text) if !text.is_empty() => return Some(text),
                Node::Text(_) => {}
                Node::Element(e) => {
                    if let Some(text) = e.first_text() {
                        return Some(text);
                    }
                }
            }
        }
        None
    }
}

fn collect_role<'a>(element: &'a Element, role: Role, found: &mut Vec<&'a Element>) {
    for child in element.elements() {
        if child.role == role {
            found.push(child);
        }
        collect_role(child, role, found);
    }
}

/// Parses an XML document into a tree rooted at a synthetic document element.
pub fn parse_tree(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack = vec![Element::document()];

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                stack.push(start_element(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = start_element(&e)?;
                append(&mut stack, Node::Element(element))?;
            }
            Ok(Event::End(_)) => {
                if stack.len() < 2 {
                    return Err(Error::XmlParse("unbalanced end tag".into()));
                }
                if let Some(element) = stack.pop() {
                    append(&mut stack, Node::Element(element))?;
                }
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape()?;
                push_text(&mut stack, &text)?;
            }
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                push_text(&mut stack, &text)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(root), true) => Ok(root),
        _ => Err(Error::XmlParse("unexpected end of document".into())),
    }
}

fn start_element(e: &BytesStart) -> Result<Element> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(Element::new(name, attributes))
}

fn push_text(stack: &mut [Element], text: &str) -> Result<()> {
    let parent = stack
        .last_mut()
        .ok_or_else(|| Error::XmlParse("text outside document".into()))?;
    if text.trim().is_empty() && !parent.role.keeps_whitespace() {
        return Ok(());
    }
    // quick-xml may split one run around entity references.
    if let Some(Node::Text(previous)) = parent.children.last_mut() {
        previous.push_str(text);
    } else {
        parent.children.push(Node::Text(text.to_string()));
    }
    Ok(())
}

fn append(stack: &mut [Element], node: Node) -> Result<()> {
    stack
        .last_mut()
        .ok_or_else(|| Error::XmlParse("element outside document".into()))?
        .children
        .push(node);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let root = parse_tree(r#"<a><b x="1"/><c>hi</c></a>"#).unwrap();
        let a = root.first_element().unwrap();
        assert_eq!(a.name, "a");

        let children: Vec<_> = a.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(children, ["b", "c"]);
        assert_eq!(a.first_element().unwrap().attr("x"), Some("1"));
        assert_eq!(a.first_text(), Some("hi"));
    }

    #[test]
    fn test_roles_are_assigned() {
        let xml = r#"<draw:page><draw:frame presentation:class="title"/><draw:frame presentation:class="outline"/><draw:frame><draw:image xlink:href="a.png"/></draw:frame><draw:custom-shape/><text:h/></draw:page>"#;
        let root = parse_tree(xml).unwrap();
        let page = root.first_element().unwrap();
        assert_eq!(page.role, Role::Page);

        let roles: Vec<_> = page.elements().map(|e| e.role).collect();
        assert_eq!(
            roles,
            [
                Role::Title,
                Role::Outline,
                Role::Frame,
                Role::CustomShape,
                Role::Paragraph
            ]
        );
    }

    #[test]
    fn test_whitespace_only_text_dropped_outside_paragraphs() {
        let xml = "<draw:frame>\n  <draw:text-box>\n    <text:p>a<text:span> </text:span>b</text:p>\n  </draw:text-box>\n</draw:frame>";
        let root = parse_tree(xml).unwrap();
        let frame = root.first_element().unwrap();
        assert_eq!(frame.children.len(), 1);

        let paragraph = frame.first_element().unwrap().first_element().unwrap();
        assert_eq!(paragraph.children.len(), 3);
        let span = paragraph.first_element().unwrap();
        assert_eq!(span.children, vec![Node::Text(" ".to_string())]);
    }

    #[test]
    fn test_entities_are_unescaped() {
        let root = parse_tree(r#"<text:p a="x &amp; y">Q&amp;A &lt;3</text:p>"#).unwrap();
        let p = root.first_element().unwrap();
        assert_eq!(p.attr("a"), Some("x & y"));
        assert_eq!(p.children, vec![Node::Text("Q&A <3".to_string())]);
    }

    #[test]
    fn test_descendants_with_role_document_order() {
        let xml = r#"<office:body><draw:page draw:name="1"/><x><draw:page draw:name="2"/></x><draw:page draw:name="3"/></office:body>"#;
        let root = parse_tree(xml).unwrap();
        let names: Vec<_> = root
            .descendants_with_role(Role::Page)
            .iter()
            .filter_map(|p| p.attr("draw:name"))
            .collect();
        assert_eq!(names, ["1", "2", "3"]);
    }

    #[test]
    fn test_unbalanced_document_is_error() {
        assert!(parse_tree("<a><b></a>").is_err());
        assert!(parse_tree("<a>").is_err());
    }
}
