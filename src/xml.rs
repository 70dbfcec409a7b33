//! A minimal XML document tree with name and attribute lookups.
//!
//! The trace pipeline only needs to walk a finite document and look up
//! elements and attributes by name, so the whole file is parsed into a
//! lightweight [`Element`] tree up front. Element and attribute names are
//! stored as local names (namespace prefix stripped); trace exports carry
//! a single default namespace, so lookups by local name resolve exactly
//! the names that namespace binds.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// One element of the parsed document: its local name, attributes in
/// document order, direct children in document order, and accumulated
/// text content (text and CDATA nodes, edge whitespace trimmed).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Find the first direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Iterate the direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// The document could not be parsed.
#[derive(Debug)]
pub struct XmlError {
    message: String,
}

impl XmlError {
    fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for XmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for XmlError {}

/// Parse a complete XML document into its root [`Element`].
///
/// Any reader error (mismatched tags, bad attribute syntax, unknown
/// entities) is fatal; there is no partial result.
pub fn parse_document(source: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(XmlError::new)? {
            Event::Start(start) => {
                stack.push(open_element(&start)?);
            }
            Event::Empty(start) => {
                let element = open_element(&start)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| XmlError::new("closing tag without a matching open tag"))?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let value = text.unescape().map_err(XmlError::new)?;
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&value);
                }
            }
            Event::CData(cdata) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {} // declarations, comments, processing instructions
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(XmlError::new("document ends inside an open element"));
    }
    root.ok_or_else(|| XmlError::new("document has no root element"))
}

fn open_element(start: &BytesStart) -> Result<Element, XmlError> {
    let name = String::from_utf8_lossy(start.name().local_name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(XmlError::new)?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(XmlError::new)?.into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        ..Element::default()
    })
}

fn close_element(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(XmlError::new("document has more than one root element")),
    }
    Ok(())
}
