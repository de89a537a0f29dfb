use thiserror::Error;

/// Attributes in insertion order.
pub type Attributes = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("All leaf nodes must have a value")]
    MissingLeafValue,
    #[error("All parent nodes must have a tag")]
    MissingParentTag,
    #[error("All parent nodes must have children")]
    MissingParentChildren,
}

/// A renderable HTML tree node.
///
/// Each `Parent` exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        /// Must be present at render time; `Some("")` is valid (images).
        value: Option<String>,
        attributes: Attributes,
    },
    Parent {
        tag: Option<String>,
        /// Must be present at render time; an empty vec is valid.
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// A leaf with an optional tag and a value.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    /// A tagless leaf, rendered as plain text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::leaf(None, value)
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute, keeping insertion order.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Leaf value, `None` for parents.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Parent children, `None` for leaves.
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Parent { children, .. } => children.as_deref(),
            HtmlNode::Leaf { .. } => None,
        }
    }

    /// Renders the node and all descendants.
    ///
    /// Fails on the first node whose required value, tag or children is
    /// absent; no partial output is returned.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or(RenderError::MissingLeafValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(out, tag, attributes);
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(RenderError::MissingParentTag)?;
                let children = children.as_ref().ok_or(RenderError::MissingParentChildren)?;
                open_tag(out, tag, attributes);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &[(String, String)]) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
