use crate::{classify, parse, pluck_path, Classifier, Context, ContextPolicy, ParseOptions};

fn roundtrip(input: &str) {
    let output = parse(input, ParseOptions::default());
    assert_eq!(output.to_html(), input, "given: {input:?}");
}

#[test]
fn classify_doctype_document() {
    assert_eq!(
        classify("<!doctype html><html><head></head><body></body></html>"),
        Context::Document
    );
    assert_eq!(
        classify(" <!doctype   html><html><head></head><body></body></html>"),
        Context::Document
    );
    assert_eq!(
        classify("<!DOCTYPE HTML><HTML><HEAD></HEAD><BODY></BODY></HTML>"),
        Context::Document
    );
}

#[test]
fn classify_bare_document() {
    assert_eq!(
        classify("<html><head></head><body></body></html>"),
        Context::Document
    );
    assert_eq!(
        classify(" <html lang='en'><head></head><body></body></html>"),
        Context::Document
    );
    assert_eq!(
        classify("<HTML><HEAD></HEAD><BODY></BODY></HTML>"),
        Context::Document
    );
}

#[test]
fn classify_table_context() {
    for input in [
        "<thead><tr><td>hello</td></tr></thead>",
        "<tbody><tr><td>hello</td></tr></tbody>",
        "<tfoot><tr><td>hello</td></tr></tfoot>",
        "<tr><th>hello</th></tr>",
        "<tr><td>hello</td></tr>",
        "<th>hello</th>",
        "<td>hello</td>",
        "<colgroup><col class=\"hello\"></colgroup>",
        "<col class=\"hello\">",
        "<caption>hello</caption>",
    ] {
        assert_eq!(classify(input).name(), Some("table"), "given: {input:?}");
    }
}

#[test]
fn classify_html_context() {
    assert_eq!(classify("<body><div>hello</div></body>").name(), Some("html"));
    assert_eq!(
        classify("<head><title>hello</title></head><body></body>").name(),
        Some("html")
    );
}

#[test]
fn classify_fallback() {
    for input in [
        "just some text",
        "<div>hello</div>",
        "<li>hello</li>",
        "",
        "   ",
        "<",
        "</div>",
        "<!-- a comment -->",
        "<table><tr><td>x</td></tr></table>",
    ] {
        assert_eq!(classify(input).name(), Some("template"), "given: {input:?}");
    }
}

#[test]
fn classify_body_fallback_policy() {
    let classifier = Classifier::new(ContextPolicy::Body);
    assert_eq!(classifier.classify("<div>hello</div>").name(), Some("body"));
    assert_eq!(classifier.classify("just some text").name(), Some("body"));
    // specific rules still outrank the fallback
    assert_eq!(classifier.classify("<td>hello</td>").name(), Some("table"));
    assert_eq!(
        classifier.classify("<html></html>"),
        Context::Document
    );
}

#[test]
fn classify_tag_name_boundaries() {
    // a tag name only counts up to a tokenizer delimiter
    assert_eq!(classify("<thead>x").name(), Some("table"));
    assert_eq!(classify("<theadx>").name(), Some("template"));
    assert_eq!(classify("<htmlx></htmlx>").name(), Some("template"));
    assert_eq!(classify("<header>x</header>").name(), Some("template"));
    // the doctype keyword and name must be separated by whitespace
    assert_eq!(classify("<!doctypehtml>").name(), Some("template"));
}

#[test]
fn classify_is_deterministic() {
    for input in ["", "x", "<td>", "<!doctype html>", "<\u{0}>", "\u{e9}t\u{e9}"] {
        assert_eq!(classify(input), classify(input));
    }
}

#[test]
fn pluck_path_table_cells() {
    assert_eq!(pluck_path("<td>hello</td>").unwrap().to_string(), "tbody/tr/*");
    assert_eq!(pluck_path("<th>hello</th>").unwrap().to_string(), "tbody/tr/*");
    assert_eq!(pluck_path("  <TD>hello</TD>").unwrap().to_string(), "tbody/tr/*");
}

#[test]
fn pluck_path_rows_and_columns() {
    assert_eq!(pluck_path("<tr><td>x</td></tr>").unwrap().to_string(), "tbody/*");
    assert_eq!(pluck_path("<col span=\"2\">").unwrap().to_string(), "colgroup/*");
}

#[test]
fn pluck_path_document_skeleton() {
    assert_eq!(pluck_path("<head><title>x</title></head>").unwrap().to_string(), "head");
    assert_eq!(pluck_path("<body><div>x</div></body>").unwrap().to_string(), "body");
}

#[test]
fn pluck_path_none_when_nothing_synthesized() {
    for input in [
        "<thead><tr></tr></thead>",
        "<tbody></tbody>",
        "<tfoot></tfoot>",
        "<colgroup><col></colgroup>",
        "<caption>x</caption>",
        "<div>hello</div>",
        "just some text",
        "",
        "<!doctype html><html></html>",
    ] {
        assert!(pluck_path(input).is_none(), "given: {input:?}");
    }
}

#[test]
fn pluck_path_tag_name_boundaries() {
    // "tr" must not match "track", nor "col" "colgroup", nor "head" "header"
    assert!(pluck_path("<track kind=\"captions\">").is_none());
    assert!(pluck_path("<colgroup span=\"2\"></colgroup>").is_none());
    assert!(pluck_path("<header>x</header>").is_none());
}

#[test]
fn roundtrip_generic_fragments() {
    for input in [
        "<div>hello</div>",
        "<div class=\"big\">hello</div>",
        "<li>hello</li>",
        "<dl><dd>hello</dd><dt>world</dt></dl>",
        "<dd>hello</dd><dt>world</dt>",
        "just some text",
    ] {
        roundtrip(input);
    }
}

#[test]
fn roundtrip_table_fragments() {
    for input in [
        "<thead><tr><td>hello</td></tr></thead>",
        "<tbody><tr><td>hello</td></tr></tbody>",
        "<tfoot><tr><td>hello</td></tr></tfoot>",
        "<tr><th>hello</th></tr>",
        "<tr><td>hello</td></tr>",
        "<th>hello</th>",
        "<td>hello</td>",
        "<colgroup><col class=\"hello\"></colgroup>",
        "<col class=\"hello\">",
        "<caption>hello</caption>",
    ] {
        roundtrip(input);
    }
}

#[test]
fn roundtrip_document_skeleton_fragments() {
    roundtrip("<body><div>hello</div></body>");
    roundtrip("<head><meta charset=\"UTF-8\"><title>hello</title></head>");
}

#[test]
fn documents_serialize_canonically() {
    let output = parse(
        "<!doctype html><html><head></head><body></body></html>",
        ParseOptions::default(),
    );
    assert!(output.is_document());
    assert_eq!(
        output.to_html(),
        "<!DOCTYPE html><html><head></head><body></body></html>"
    );

    // tag and doctype case folds to the canonical form
    let output = parse(
        "<!DOCTYPE HTML><HTML><HEAD></HEAD><BODY></BODY></HTML>",
        ParseOptions::default(),
    );
    assert_eq!(
        output.to_html(),
        "<!DOCTYPE html><html><head></head><body></body></html>"
    );

    let output = parse(
        "<html><head></head><body></body></html>",
        ParseOptions::default(),
    );
    assert!(output.is_document());
    assert_eq!(output.to_html(), "<html><head></head><body></body></html>");
}

#[test]
fn multiple_siblings_pluck_as_a_group() {
    let input = "<tr><td>hello</td></tr><tr><td>world</td></tr>";
    let output = parse(input, ParseOptions::default());
    assert_eq!(output.nodes().unwrap().len(), 2);
    assert_eq!(output.to_html(), input);
}

#[test]
fn keep_wrappers_exposes_synthesized_ancestors() {
    let output = parse("<td>hello</td>", ParseOptions::new().keep_wrappers());
    assert_eq!(output.to_html(), "<tbody><tr><td>hello</td></tr></tbody>");

    let output = parse(
        "<tr><td>hello</td></tr><tr><td>world</td></tr>",
        ParseOptions::new().keep_wrappers(),
    );
    assert_eq!(
        output.to_html(),
        "<tbody><tr><td>hello</td></tr><tr><td>world</td></tr></tbody>"
    );
}

#[test]
fn fragments_never_come_back_as_documents() {
    for input in ["<td>x</td>", "<div>x</div>", "just text", ""] {
        let output = parse(input, ParseOptions::default());
        assert!(output.is_fragment(), "given: {input:?}");
        assert!(output.nodes().is_some());
    }
    let output = parse("<!doctype html>", ParseOptions::default());
    assert!(output.is_document());
    assert!(output.nodes().is_none());
}

#[test]
fn empty_input_parses_to_empty_fragment() {
    let output = parse("", ParseOptions::default());
    assert!(output.is_fragment());
    assert_eq!(output.to_html(), "");
}

#[test]
fn apply_selects_across_all_roots() {
    let output = parse(
        "<tr><td>a</td></tr><tr><td>b</td></tr>",
        ParseOptions::new().keep_wrappers(),
    );
    let forest = output.nodes().unwrap();
    // the raw forest is the single synthesized tbody
    assert_eq!(forest.len(), 1);

    let rows = pluck_path("<tr>").unwrap().apply(forest);
    assert_eq!(rows.len(), 2);
}

#[test]
fn body_fallback_roundtrips() {
    let options = ParseOptions::new().set_policy(ContextPolicy::Body);
    for input in [
        "<div>hello</div>",
        "just some text",
        "<dd>hello</dd><dt>world</dt>",
    ] {
        assert_eq!(parse(input, options).to_html(), input, "given: {input:?}");
    }
}
