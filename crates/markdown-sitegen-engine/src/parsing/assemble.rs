use crate::html::HtmlNode;

use super::{
    ConvertError,
    blocks::{
        Block, BlockType,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
        parse_blocks,
    },
    inline::{SpanError, spans_to_html_leaves, text_to_inline_spans},
};

/// Builds the `div` tree for a whole document, one child per block.
pub fn markdown_to_html_tree(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let children = parse_blocks(markdown)
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Builds the HTML subtree for one classified block.
pub fn block_to_html_node(block: Block<'_>) -> Result<HtmlNode, SpanError> {
    let text = block.text;
    match block.block_type {
        BlockType::Paragraph => inline_parent("p", &text.replace('\n', " ")),
        BlockType::Heading(level) => {
            let content = text.trim_start_matches(Heading::MARKER).trim_start();
            inline_parent(&format!("h{level}"), content)
        }
        BlockType::Code => Ok(code_block(text)),
        BlockType::Quote => inline_parent("blockquote", &quote_text(text)),
        BlockType::UnorderedList => {
            let items = text
                .split('\n')
                .map(|line| {
                    let item = line.replacen(UnorderedList::MARKER, "", 1);
                    inline_parent("li", item.trim())
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(HtmlNode::parent("ul", items))
        }
        BlockType::OrderedList => {
            let items = text
                .split('\n')
                .map(|line| {
                    let item = OrderedList::item_regex().replace(line, "");
                    inline_parent("li", item.trim())
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(HtmlNode::parent("ol", items))
        }
    }
}

/// Tokenizes `text` and wraps the resulting leaves in a `tag` parent.
fn inline_parent(tag: &str, text: &str) -> Result<HtmlNode, SpanError> {
    let spans = text_to_inline_spans(text);
    Ok(HtmlNode::parent(tag, spans_to_html_leaves(&spans)?))
}

/// Code is never tokenized: fences are removed, leading whitespace is
/// dropped, and the rest (including the trailing newline) is kept verbatim.
fn code_block(text: &str) -> HtmlNode {
    let body = text.replace(CodeFence::FENCE, "");
    let code = HtmlNode::parent("code", vec![HtmlNode::text(body.trim_start())]);
    HtmlNode::parent("pre", vec![code])
}

/// Strips `"> "` from each line, joins with spaces, then strips `"> "`
/// again across the joined text. The second pass is what removes a bare
/// `>` line: it joins as `" > "` and collapses.
// FIXME: the second pass also eats a literal "> " inside quoted prose.
fn quote_text(text: &str) -> String {
    let joined = text
        .split('\n')
        .map(|line| line.strip_prefix(BlockQuote::STRIP).unwrap_or(line))
        .collect::<Vec<_>>()
        .join(" ");
    joined.trim_start().replace(BlockQuote::STRIP, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(md: &str) -> String {
        markdown_to_html_tree(md).unwrap().render().unwrap()
    }

    #[test]
    fn paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_eq!(
            render(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            render("# Title\n\nSome **bold** and _italic_ text"),
            "<div><h1>Title</h1><p>Some <b>bold</b> and <i>italic</i> text</p></div>"
        );
    }

    #[test]
    fn heading_level_three() {
        assert_eq!(
            render("### This is a heading with some **bold** text"),
            "<div><h3>This is a heading with some <b>bold</b> text</h3></div>"
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            render(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn single_line_code_block() {
        assert_eq!(
            render("```let x = 1;```"),
            "<div><pre><code>let x = 1;</code></pre></div>"
        );
    }

    #[test]
    fn quote() {
        let md = "> This is a\n> quote\n> with some **bold** text";
        assert_eq!(
            render(md),
            "<div><blockquote>This is a quote with some <b>bold</b> text</blockquote></div>"
        );
    }

    #[test]
    fn quote_empty_line_vanishes() {
        assert_eq!(
            render("> line one\n>\n> line two"),
            "<div><blockquote>line one line two</blockquote></div>"
        );
    }

    #[test]
    fn quote_with_attribution() {
        let md = "> \"I am in fact a Hobbit in all but size.\"\n>\n> -- J.R.R. Tolkien";
        assert_eq!(
            render(md),
            "<div><blockquote>\"I am in fact a Hobbit in all but size.\" -- J.R.R. Tolkien</blockquote></div>"
        );
    }

    #[test]
    fn quote_second_pass_strips_inner_marker() {
        assert_eq!(quote_text("> a > b"), "a b");
    }

    #[test]
    fn nested_quote_markers() {
        // Nested quotes are not supported; these pin the flattened text.
        assert_eq!(quote_text(">> a"), ">a");
        assert_eq!(quote_text("> > a"), "a");
        assert_eq!(quote_text(">>  a"), "> a");
    }

    #[test]
    fn unordered_list() {
        assert_eq!(render("- a\n- b"), "<div><ul><li>a</li><li>b</li></ul></div>");
        let md = "- This is an\n- unordered list\n- with some **bold** text";
        assert_eq!(
            render(md),
            "<div><ul><li>This is an</li><li>unordered list</li><li>with some <b>bold</b> text</li></ul></div>"
        );
    }

    #[test]
    fn unordered_marker_removed_once() {
        assert_eq!(
            render("- left - right"),
            "<div><ul><li>left - right</li></ul></div>"
        );
    }

    #[test]
    fn ordered_list() {
        let md = "1. This is an\n2. ordered list\n3. with some **bold** text";
        assert_eq!(
            render(md),
            "<div><ol><li>This is an</li><li>ordered list</li><li>with some <b>bold</b> text</li></ol></div>"
        );
    }

    #[test]
    fn ordered_list_only_strips_single_digit_markers() {
        let md = (1..=10)
            .map(|n| format!("{n}. x"))
            .collect::<Vec<_>>()
            .join("\n");
        let tree = markdown_to_html_tree(&md).unwrap();
        let html = tree.render().unwrap();
        assert!(html.ends_with("<li>x</li><li>10. x</li></ol></div>"));
    }

    #[test]
    fn links_and_images_in_paragraph() {
        assert_eq!(
            render("see [home](/index.html) and ![logo](/logo.png)"),
            "<div><p>see <a href=\"/index.html\">home</a> and <img src=\"/logo.png\" alt=\"logo\"></img></p></div>"
        );
    }

    #[test]
    fn empty_document_is_empty_div() {
        assert_eq!(render(""), "<div></div>");
        assert_eq!(render("\n\n\n"), "<div></div>");
    }

    #[test]
    fn every_block_produces_one_child() {
        let md = "# h\n\npara\n\n```c```\n\n> q\n\n- u\n\n1. o";
        let tree = markdown_to_html_tree(md).unwrap();
        let tags: Vec<_> = tree
            .children()
            .unwrap()
            .iter()
            .map(|c| c.tag().unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["h1", "p", "pre", "blockquote", "ul", "ol"]);
    }
}
