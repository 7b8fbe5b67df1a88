use core::fmt;

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use markup5ever_rcdom::{Handle, RcDom, SerializableHandle};

/// The result of [`parse`](crate::parse)
///
/// Inputs that look like full documents produce [`ParseOutput::Document`];
/// everything else parses as a fragment and produces
/// [`ParseOutput::Fragment`].
pub enum ParseOutput {
    /// A full document, doctype and skeleton included.
    Document(RcDom),
    /// The root nodes of a parsed fragment, in document order.
    Fragment(Vec<Handle>),
}

impl ParseOutput {
    /// Returns whether the input parsed as a full document.
    #[inline]
    pub fn is_document(&self) -> bool {
        matches!(self, ParseOutput::Document(_))
    }

    /// Returns whether the input parsed as a fragment.
    #[inline]
    pub fn is_fragment(&self) -> bool {
        matches!(self, ParseOutput::Fragment(_))
    }

    /// Returns the fragment nodes, or `None` for a document.
    pub fn nodes(&self) -> Option<&[Handle]> {
        match self {
            ParseOutput::Document(_) => None,
            ParseOutput::Fragment(nodes) => Some(nodes),
        }
    }

    /// Renders the output back to markup.
    ///
    /// A document serializes with its doctype and skeleton; a fragment
    /// serializes node by node, so plucked output reproduces the markup the
    /// caller supplied.
    pub fn to_html(&self) -> String {
        match self {
            ParseOutput::Document(dom) => {
                serialize_handle(&dom.document, TraversalScope::ChildrenOnly(None))
            }
            ParseOutput::Fragment(nodes) => nodes
                .iter()
                .map(|node| serialize_handle(node, TraversalScope::IncludeNode))
                .collect(),
        }
    }
}

impl fmt::Debug for ParseOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOutput::Document(_) => f.write_str("Document"),
            ParseOutput::Fragment(nodes) => write!(f, "Fragment({} nodes)", nodes.len()),
        }
    }
}

fn serialize_handle(handle: &Handle, traversal_scope: TraversalScope) -> String {
    let mut buf = Vec::new();
    let serializable: SerializableHandle = handle.clone().into();
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    // writing into a Vec cannot fail, and the serializer emits UTF-8
    serialize(&mut buf, &serializable, opts).unwrap();
    String::from_utf8(buf).unwrap()
}
