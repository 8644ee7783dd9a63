use derive_more::From;
use std::borrow::Cow;
use std::fmt::{self, Write};

pub use html_macro::html;

/// A tree of markup. Build one with the [`html!`] macro and render it with `Display` or [`Node::render_to_string`].
#[derive(Clone, Debug, From)]
pub enum Node {
	Raw(RawNode),
	Text(TextNode),
	Fragment(FragmentNode),
	Element(ElementNode),
	Option(Option<Box<Node>>),
	List(Vec<Node>),
}

/// Text written to the output without escaping.
#[derive(Clone, Debug)]
pub struct RawNode(pub Cow<'static, str>);

/// Text that is escaped when rendered.
#[derive(Clone, Debug)]
pub struct TextNode(pub Cow<'static, str>);

#[derive(Clone, Debug)]
pub struct FragmentNode {
	pub children: Vec<Node>,
}

#[derive(Clone, Debug)]
pub struct ElementNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeName, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeName = &'static str;

#[derive(Clone, Debug, From)]
pub enum AttributeValue {
	Flag(Option<bool>),
	Text(Option<Cow<'static, str>>),
}

impl Node {
	pub fn render_to_string(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Node::Raw(node) => write!(f, "{}", node),
			Node::Text(node) => write!(f, "{}", node),
			Node::Fragment(node) => write!(f, "{}", node),
			Node::Element(node) => write!(f, "{}", node),
			Node::Option(node) => match node {
				Some(node) => write!(f, "{}", node),
				None => Ok(()),
			},
			Node::List(nodes) => nodes.iter().try_for_each(|node| write!(f, "{}", node)),
		}
	}
}

impl fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.children
			.iter()
			.try_for_each(|child| write!(f, "{}", child))
	}
}

impl fmt::Display for ElementNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}", self.name)?;
		for (name, value) in self.attributes.iter() {
			match value {
				AttributeValue::Flag(Some(true)) => write!(f, " {}", name)?,
				AttributeValue::Text(Some(value)) => write!(f, r#" {}="{}""#, name, Escaped(value))?,
				_ => {}
			}
		}
		if self.self_closing {
			return write!(f, " />");
		}
		write!(f, ">")?;
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.name)
	}
}

impl fmt::Display for RawNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Display for TextNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", Escaped(&self.0))
	}
}

/// Writes its contents with the five HTML-significant characters replaced by entities.
pub struct Escaped<'a>(pub &'a str);

impl<'a> fmt::Display for Escaped<'a> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in self.0.chars() {
			match c {
				'&' => f.write_str("&amp;")?,
				'<' => f.write_str("&lt;")?,
				'>' => f.write_str("&gt;")?,
				'"' => f.write_str("&quot;")?,
				'\'' => f.write_str("&#39;")?,
				c => f.write_char(c)?,
			}
		}
		Ok(())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::Text(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::Text(Some(value.into()))
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::Text(value.map(Cow::Owned))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Flag(Some(value))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::Text(TextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::Text(TextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::Node::Raw(::html::RawNode($t.into()))
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		::html::Node::Text(::html::TextNode($t.into()))
	};
}

#[test]
fn test_escaped() {
	assert_eq!(
		Escaped(r#"<a href="x">Tom & Jerry's</a>"#).to_string(),
		"&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
	);
	assert_eq!(Escaped("plain").to_string(), "plain");
}
