//! Markdown to HTML conversion for guide documents
//!
//! A line-oriented sequence of string replacements covering the subset the
//! hardcoded guides use: headings, lists, code fences, bold/italic/code
//! spans and links. Deliberately not a full parser.

/// Converts markdown source to an HTML fragment. Source text is
/// HTML-escaped before substitution.
pub fn markdown_to_html(source: &str) -> String {
    let mut html = String::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut in_list = false;
    let mut in_code = false;

    for line in source.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut in_list);
            if in_code {
                html.push_str("</code></pre>\n");
            } else {
                html.push_str("<pre><code>");
            }
            in_code = !in_code;
            continue;
        }

        if in_code {
            html.push_str(&escape_html(line));
            html.push('\n');
            continue;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut in_list);
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut in_list);
            html.push_str(&format!("<h3>{}</h3>\n", inline_spans(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut in_list);
            html.push_str(&format!("<h2>{}</h2>\n", inline_spans(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("# ") {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut in_list);
            html.push_str(&format!("<h1>{}</h1>\n", inline_spans(rest)));
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            flush_paragraph(&mut html, &mut paragraph);
            if !in_list {
                html.push_str("<ul>\n");
                in_list = true;
            }
            html.push_str(&format!("<li>{}</li>\n", inline_spans(rest)));
        } else {
            close_list(&mut html, &mut in_list);
            paragraph.push(inline_spans(trimmed));
        }
    }

    flush_paragraph(&mut html, &mut paragraph);
    close_list(&mut html, &mut in_list);
    if in_code {
        // unterminated fence
        html.push_str("</code></pre>\n");
    }
    html
}

fn flush_paragraph(html: &mut String, paragraph: &mut Vec<String>) {
    if !paragraph.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", paragraph.join(" ")));
        paragraph.clear();
    }
}

fn close_list(html: &mut String, in_list: &mut bool) {
    if *in_list {
        html.push_str("</ul>\n");
        *in_list = false;
    }
}

fn inline_spans(text: &str) -> String {
    let escaped = escape_html(text);
    let with_code = replace_pairs(&escaped, "`", "<code>", "</code>");
    let with_links = replace_links(&with_code);
    let with_bold = replace_pairs(&with_links, "**", "<strong>", "</strong>");
    replace_pairs(&with_bold, "*", "<em>", "</em>")
}

/// Replaces each closed `delim ... delim` pair with `open ... close`.
/// An unpaired delimiter is left alone.
fn replace_pairs(text: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        match after.find(delim) {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str(open);
                out.push_str(&after[..end]);
                out.push_str(close);
                rest = &after[end + delim.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// `[label](url)` to an anchor; malformed brackets pass through untouched.
fn replace_links(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find('[') {
        let link = rest[start..].find("](").and_then(|mid| {
            let mid = start + mid;
            rest[mid + 2..].find(')').map(|end| (mid, mid + 2 + end))
        });
        match link {
            Some((mid, end)) => {
                out.push_str(&rest[..start]);
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                    &rest[mid + 2..end],
                    &rest[start + 1..mid]
                ));
                rest = &rest[end + 1..];
            }
            None => {
                out.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(markdown_to_html("# Title"), "<h1>Title</h1>\n");
        assert_eq!(markdown_to_html("## Sub"), "<h2>Sub</h2>\n");
        assert_eq!(markdown_to_html("### Deep"), "<h3>Deep</h3>\n");
    }

    #[test]
    fn test_paragraph_joins_adjacent_lines() {
        let html = markdown_to_html("first line\nsecond line\n\nnew paragraph");
        assert_eq!(
            html,
            "<p>first line second line</p>\n<p>new paragraph</p>\n"
        );
    }

    #[test]
    fn test_list_grouping() {
        let html = markdown_to_html("- one\n- two\n\nafter");
        assert_eq!(
            html,
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>after</p>\n"
        );
    }

    #[test]
    fn test_star_bullets() {
        let html = markdown_to_html("* a\n* b");
        assert!(html.starts_with("<ul>\n<li>a</li>\n<li>b</li>\n</ul>"));
    }

    #[test]
    fn test_inline_spans() {
        assert_eq!(
            markdown_to_html("**bold** and *italic* and `code`"),
            "<p><strong>bold</strong> and <em>italic</em> and <code>code</code></p>\n"
        );
    }

    #[test]
    fn test_unpaired_delimiters_left_alone() {
        assert_eq!(markdown_to_html("a * b"), "<p>a * b</p>\n");
        assert_eq!(markdown_to_html("lone `tick"), "<p>lone `tick</p>\n");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            markdown_to_html("see [docs](https://example.com) now"),
            "<p>see <a href=\"https://example.com\" target=\"_blank\" rel=\"noopener\">docs</a> now</p>\n"
        );
    }

    #[test]
    fn test_malformed_link_passes_through() {
        assert_eq!(markdown_to_html("just [brackets]"), "<p>just [brackets]</p>\n");
    }

    #[test]
    fn test_source_is_escaped() {
        let html = markdown_to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_code_fence_preserves_lines() {
        let html = markdown_to_html("```\nlet x = 1;\nlet y = 2;\n```");
        assert_eq!(html, "<pre><code>let x = 1;\nlet y = 2;\n</code></pre>\n");
    }

    #[test]
    fn test_fence_content_is_not_formatted() {
        let html = markdown_to_html("```\n**not bold** <tag>\n```");
        assert!(html.contains("**not bold** &lt;tag&gt;"));
    }

    #[test]
    fn test_unterminated_fence_is_closed() {
        let html = markdown_to_html("```\ndangling");
        assert!(html.ends_with("</code></pre>\n"));
    }
}
