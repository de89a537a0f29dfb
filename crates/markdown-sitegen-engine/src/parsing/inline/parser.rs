use regex::Regex;

use super::{
    kinds::{Delimiter, LinkSyntax},
    types::{InlineSpan, SpanKind},
};

/// Splits raw inline text into a sequence of [`InlineSpan`]s.
///
/// # Pass Order
/// 1. Images (`![alt](url)`)
/// 2. Links (`[text](url)`)
/// 3. Delimiters `**`, `_`, `` ` `` in that order
///
/// Links and images are pulled out before delimiter splitting so that
/// `_` or `**` inside a URL is never treated as emphasis. Each pass only
/// touches `Plain` spans.
///
/// # Returns
/// Spans in source order. Empty input yields an empty vector; unbalanced
/// delimiters never fail.
pub fn text_to_inline_spans(text: &str) -> Vec<InlineSpan> {
    let mut spans = vec![InlineSpan::plain(text)];
    spans = split_images(spans);
    spans = split_links(spans);
    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter);
    }
    spans
}

/// Extracts `![alt](url)` occurrences from every plain span.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_pattern(spans, LinkSyntax::image_regex(), |alt, url| {
        InlineSpan::image(alt, url)
    })
}

/// Extracts `[text](url)` occurrences from every plain span.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_pattern(spans, LinkSyntax::link_regex(), |text, url| {
        InlineSpan::link(text, url)
    })
}

fn split_pattern(
    spans: Vec<InlineSpan>,
    pattern: &Regex,
    make: fn(&str, &str) -> InlineSpan,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut rest = 0;
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if whole.start() > rest {
                out.push(InlineSpan::plain(&text[rest..whole.start()]));
            }
            out.push(make(label.as_str(), url.as_str()));
            rest = whole.end();
        }

        if rest == 0 {
            // Nothing matched: keep the span as-is, including an empty one.
            out.push(span);
        } else if rest < text.len() {
            out.push(InlineSpan::plain(&text[rest..]));
        }
    }

    out
}

/// Splits every plain span on `delimiter.marker`, alternating between
/// `Plain` and `delimiter.kind` starting with `Plain`.
///
/// Empty pieces are dropped. An odd number of markers leaves the trailing
/// piece in whichever kind the alternation lands on.
pub fn split_delimiter(spans: Vec<InlineSpan>, delimiter: Delimiter) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        for (i, piece) in span.text.split(delimiter.marker).enumerate() {
            if piece.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                delimiter.kind
            };
            out.push(InlineSpan::new(piece, kind));
        }
    }

    out
}
