//! SML tree nodes.
//!
//! An SML document is a tree of [`Element`]s. Every element owns an ordered list of
//! [`Node`]s, each of which is either a nested element or an [`Attribute`].
//!
//! ## Core Types
//!
//! - [`Node`]: A closed enum over the two node kinds
//! - [`Element`]: A named container of child nodes
//! - [`Attribute`]: A named, non-empty list of optional string values
//! - [`IntoValue`]: Conversion of Rust values into attribute values
//!
//! ## Name Lookup
//!
//! All lookups by name are case-insensitive and return nodes in insertion order:
//!
//! ```rust
//! use sml::Element;
//!
//! let mut person = Element::new("Person");
//! person.add_string("Name", "John");
//! person.add_string("Age", 30);
//!
//! assert_eq!(person.string("name"), Some("John"));
//! assert_eq!(person.string("AGE"), Some("30"));
//! assert!(person.attribute("missing").is_none());
//! ```

use crate::wsv::LineLayout;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Compares two names the way SML lookups do: case-insensitive, accent-sensitive.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Layout retained for a node line by a preserving parse.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeLayout {
    /// Blank and comment-only lines directly above the node line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub empty_lines_before: Vec<LineLayout>,
    pub line: LineLayout,
}

/// A child of an [`Element`].
///
/// # Examples
///
/// ```rust
/// use sml::{Attribute, Element, Node};
///
/// let nodes = vec![
///     Node::from(Element::new("Person")),
///     Node::from(Attribute::with_value("Name", "John")),
/// ];
///
/// for node in &nodes {
///     match node {
///         Node::Element(element) => assert_eq!(element.name(), "Person"),
///         Node::Attribute(attribute) => assert_eq!(attribute.string(), Some("John")),
///     }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Attribute(Attribute),
}

impl Node {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Node::Element(element) => element.name(),
            Node::Attribute(attribute) => attribute.name(),
        }
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(self.name(), name)
    }

    #[inline]
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_attribute(&self) -> bool {
        matches!(self, Node::Attribute(_))
    }

    #[must_use]
    pub fn is_element_with_name(&self, name: &str) -> bool {
        self.is_element() && self.has_name(name)
    }

    #[must_use]
    pub fn is_attribute_with_name(&self, name: &str) -> bool {
        self.is_attribute() && self.has_name(name)
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Attribute(_) => None,
        }
    }

    #[must_use]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Attribute(_) => None,
        }
    }

    #[must_use]
    pub fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            Node::Attribute(attribute) => Some(attribute),
            Node::Element(_) => None,
        }
    }

    #[must_use]
    pub fn as_attribute_mut(&mut self) -> Option<&mut Attribute> {
        match self {
            Node::Attribute(attribute) => Some(attribute),
            Node::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Attribute> for Node {
    fn from(attribute: Attribute) -> Self {
        Node::Attribute(attribute)
    }
}

/// A named node owning an ordered list of child nodes.
///
/// # Examples
///
/// ```rust
/// use sml::Element;
///
/// let mut root = Element::new("Root");
/// let person = root.add_element("Person");
/// person.add_string("Name", "John");
///
/// assert!(root.has_element("person"));
/// assert_eq!(root.element("PERSON").and_then(|p| p.string("name")), Some("John"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    name: String,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_layout: Option<NodeLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_layout: Option<NodeLayout>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Child nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    /// Layout of the element's start line, if it was read by a preserving parse.
    #[must_use]
    pub fn start_layout(&self) -> Option<&NodeLayout> {
        self.start_layout.as_ref()
    }

    /// Layout of the element's end line, if it was read by a preserving parse.
    #[must_use]
    pub fn end_layout(&self) -> Option<&NodeLayout> {
        self.end_layout.as_ref()
    }

    pub fn set_start_layout(&mut self, layout: Option<NodeLayout>) {
        self.start_layout = layout;
    }

    pub fn set_end_layout(&mut self, layout: Option<NodeLayout>) {
        self.end_layout = layout;
    }

    /// Appends a child node.
    pub fn add(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Appends a new empty child element and returns it for further building.
    pub fn add_element(&mut self, name: impl Into<String>) -> &mut Element {
        self.nodes.push(Node::Element(Element::new(name)));
        match self.nodes.last_mut() {
            Some(Node::Element(element)) => element,
            _ => unreachable!("an element was just pushed"),
        }
    }

    /// Appends a new attribute with the given values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAttribute`] if `values` is empty.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Result<&mut Attribute> {
        let attribute = Attribute::new(name, values)?;
        Ok(self.push_attribute(attribute))
    }

    /// Appends a single-value attribute, converting `value` to its string form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sml::Element;
    ///
    /// let mut element = Element::new("Config");
    /// element.add_string("Port", 8080);
    /// element.add_string("Enabled", true);
    /// element.add_string("Proxy", None::<&str>);
    ///
    /// assert_eq!(element.string("port"), Some("8080"));
    /// assert_eq!(element.string("enabled"), Some("true"));
    /// assert_eq!(element.attribute("proxy").unwrap().values(), &[None::<String>]);
    /// ```
    pub fn add_string(&mut self, name: impl Into<String>, value: impl IntoValue) -> &mut Attribute {
        self.push_attribute(Attribute::with_value(name, value))
    }

    fn push_attribute(&mut self, attribute: Attribute) -> &mut Attribute {
        self.nodes.push(Node::Attribute(attribute));
        match self.nodes.last_mut() {
            Some(Node::Attribute(attribute)) => attribute,
            _ => unreachable!("an attribute was just pushed"),
        }
    }

    /// Child elements named `name`, in insertion order.
    pub fn elements<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.all_elements().filter(move |element| element.has_name(name))
    }

    /// All child elements, in insertion order.
    pub fn all_elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(Node::as_element)
    }

    /// The first child element named `name`.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.all_elements().find(|element| element.has_name(name))
    }

    pub fn element_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.nodes
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find(|element| element.has_name(name))
    }

    #[must_use]
    pub fn has_element(&self, name: &str) -> bool {
        self.element(name).is_some()
    }

    #[must_use]
    pub fn has_elements(&self) -> bool {
        self.nodes.iter().any(Node::is_element)
    }

    /// Child attributes named `name`, in insertion order.
    pub fn attributes<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Attribute> + 'a {
        self.all_attributes()
            .filter(move |attribute| attribute.has_name(name))
    }

    /// All child attributes, in insertion order.
    pub fn all_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.nodes.iter().filter_map(Node::as_attribute)
    }

    /// The first child attribute named `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.all_attributes()
            .find(|attribute| attribute.has_name(name))
    }

    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.nodes
            .iter_mut()
            .filter_map(Node::as_attribute_mut)
            .find(|attribute| attribute.has_name(name))
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    #[must_use]
    pub fn has_attributes(&self) -> bool {
        self.nodes.iter().any(Node::is_attribute)
    }

    /// First value of the first attribute named `name`.
    ///
    /// Returns `None` when there is no such attribute or its first value is null.
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Attribute::string)
    }
}

/// A named node holding one or more optional string values.
///
/// `None` values are nulls, written as `-`, and are distinct from empty strings.
/// An attribute always has at least one value.
///
/// # Examples
///
/// ```rust
/// use sml::{Attribute, Error};
///
/// let point = Attribute::new("Point", vec![Some("1".into()), Some("2".into()), None]).unwrap();
/// assert_eq!(point.values().len(), 3);
///
/// let err = Attribute::new("Empty", vec![]).unwrap_err();
/// assert!(matches!(err, Error::EmptyAttribute(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AttributeData")]
pub struct Attribute {
    name: String,
    values: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<NodeLayout>,
}

#[derive(Deserialize)]
struct AttributeData {
    name: String,
    values: Vec<Option<String>>,
    #[serde(default)]
    layout: Option<NodeLayout>,
}

impl TryFrom<AttributeData> for Attribute {
    type Error = Error;

    fn try_from(data: AttributeData) -> Result<Self> {
        let mut attribute = Attribute::new(data.name, data.values)?;
        attribute.layout = data.layout;
        Ok(attribute)
    }
}

impl Attribute {
    /// Creates an attribute from a list of values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAttribute`] if `values` is empty.
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Result<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(Error::empty_attribute(&name));
        }
        Ok(Attribute {
            name,
            values,
            layout: None,
        })
    }

    /// Creates a single-value attribute.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl IntoValue) -> Self {
        Attribute {
            name: name.into(),
            values: vec![value.into_value()],
            layout: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    #[must_use]
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Replaces all values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAttribute`] and leaves the attribute unchanged if
    /// `values` is empty.
    pub fn set_values(&mut self, values: Vec<Option<String>>) -> Result<()> {
        if values.is_empty() {
            return Err(Error::empty_attribute(&self.name));
        }
        self.values = values;
        Ok(())
    }

    pub fn push_value(&mut self, value: impl IntoValue) {
        self.values.push(value.into_value());
    }

    /// The first value, or `None` if it is null.
    #[must_use]
    pub fn string(&self) -> Option<&str> {
        self.values.first().and_then(Option::as_deref)
    }

    /// Layout of the attribute line, if it was read by a preserving parse.
    #[must_use]
    pub fn layout(&self) -> Option<&NodeLayout> {
        self.layout.as_ref()
    }

    pub fn set_layout(&mut self, layout: Option<NodeLayout>) {
        self.layout = layout;
    }
}

/// Conversion into an attribute value.
///
/// Strings are stored as-is, other values through their `Display` form and `None`
/// becomes the null value.
pub trait IntoValue {
    fn into_value(self) -> Option<String>;
}

impl IntoValue for String {
    fn into_value(self) -> Option<String> {
        Some(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Option<String> {
        self.and_then(IntoValue::into_value)
    }
}

macro_rules! impl_into_value_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_into_value_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        let mut root = Element::new("Root");
        root.add_string("Title", "first");
        let person = root.add_element("Person");
        person.add_string("Name", "John");
        root.add_string("title", "second");
        root.add_element("PERSON").add_string("Name", "Jane");
        root
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Person", "person"));
        assert!(eq_ignore_case("Person", "PERSON"));
        assert!(eq_ignore_case("ÄPFEL", "äpfel"));
        assert!(!eq_ignore_case("resume", "résumé"));
        assert!(!eq_ignore_case("Person", "Persons"));
    }

    #[test]
    fn test_first_match_lookups() {
        let root = sample();
        assert_eq!(root.string("TITLE"), Some("first"));
        assert_eq!(
            root.element("person").and_then(|p| p.string("name")),
            Some("John")
        );
        assert!(root.has_element("Person"));
        assert!(!root.has_element("Title"));
        assert!(root.has_attribute("Title"));
        assert!(!root.has_attribute("Person"));
    }

    #[test]
    fn test_all_matches_preserve_order() {
        let root = sample();
        let titles: Vec<_> = root.attributes("title").filter_map(Attribute::string).collect();
        assert_eq!(titles, vec!["first", "second"]);

        let names: Vec<_> = root
            .elements("person")
            .filter_map(|p| p.string("name"))
            .collect();
        assert_eq!(names, vec!["John", "Jane"]);

        assert_eq!(root.all_elements().count(), 2);
        assert_eq!(root.all_attributes().count(), 2);
        assert_eq!(root.nodes().len(), 4);
    }

    #[test]
    fn test_has_elements_and_attributes() {
        let mut element = Element::new("Empty");
        assert!(!element.has_elements());
        assert!(!element.has_attributes());

        element.add_string("A", 1);
        assert!(element.has_attributes());
        assert!(!element.has_elements());
    }

    #[test]
    fn test_mutable_lookups() {
        let mut root = sample();
        root.element_mut("person").unwrap().add_string("Age", 30);
        root.attribute_mut("title").unwrap().push_value("extra");

        assert_eq!(root.element("Person").unwrap().string("age"), Some("30"));
        assert_eq!(root.attribute("Title").unwrap().values().len(), 2);
    }

    #[test]
    fn test_attribute_requires_values() {
        assert_eq!(
            Attribute::new("Name", vec![]),
            Err(Error::EmptyAttribute("Name".to_string()))
        );

        let mut root = Element::new("Root");
        assert!(root.add_attribute("Name", vec![]).is_err());
        assert!(root.nodes().is_empty());

        let mut attribute = Attribute::with_value("Name", "John");
        assert!(attribute.set_values(vec![]).is_err());
        assert_eq!(attribute.string(), Some("John"));
    }

    #[test]
    fn test_null_and_empty_values() {
        let attribute = Attribute::new("A", vec![None, Some(String::new())]).unwrap();
        assert_eq!(attribute.string(), None);
        assert_eq!(attribute.values()[1].as_deref(), Some(""));
    }

    #[test]
    fn test_into_value_conversions() {
        assert_eq!(42u8.into_value(), Some("42".to_string()));
        assert_eq!((-7i64).into_value(), Some("-7".to_string()));
        assert_eq!(2.5f64.into_value(), Some("2.5".to_string()));
        assert_eq!(false.into_value(), Some("false".to_string()));
        assert_eq!('x'.into_value(), Some("x".to_string()));
        assert_eq!(Some(3).into_value(), Some("3".to_string()));
        assert_eq!(None::<String>.into_value(), None);
    }

    #[test]
    fn test_node_dispatch() {
        let element = Node::from(Element::new("Person"));
        let attribute = Node::from(Attribute::with_value("Name", "John"));

        assert!(element.is_element_with_name("person"));
        assert!(!element.is_attribute_with_name("person"));
        assert!(attribute.is_attribute_with_name("NAME"));
        assert_eq!(attribute.name(), "Name");
        assert!(element.as_attribute().is_none());
        assert_eq!(attribute.as_attribute().and_then(Attribute::string), Some("John"));
    }
}
