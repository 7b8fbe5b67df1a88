use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, parse_fragment, ParseOpts, QualName};
use markup5ever::{namespace_url, ns};
use markup5ever_rcdom::{Handle, RcDom};

use crate::context::{Classifier, Context};
use crate::options::ParseOptions;
use crate::output::ParseOutput;
use crate::pluck;

/// Routes an input to the right html5ever entry point and narrows the
/// fragment result per the options.
pub(crate) fn parse_with(input: &str, options: ParseOptions) -> ParseOutput {
    match Classifier::new(options.policy()).classify(input) {
        Context::Document => {
            let dom = parse_document(RcDom::default(), ParseOpts::default()).one(input);
            ParseOutput::Document(dom)
        }
        Context::Fragment(name) => {
            let context = QualName::new(None, ns!(html), name);
            let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
                .one(input);
            let forest = fragment_forest(&dom);
            let nodes = if options.is_plucking() {
                match pluck::resolve(input) {
                    Some(path) => path.apply(&forest),
                    None => forest,
                }
            } else {
                forest
            };
            ParseOutput::Fragment(nodes)
        }
    }
}

/// The fragment parser roots its output under a synthetic `html` element;
/// that element's children are the parsed forest.
fn fragment_forest(dom: &RcDom) -> Vec<Handle> {
    let children = dom.document.children.borrow();
    match children.first() {
        Some(root) => root.children.borrow().clone(),
        None => Vec::new(),
    }
}
