//! HTML page rendering
//!
//! There is one page: the submission form, optionally preceded by a flash
//! message and followed by an article result.

use crate::workflow::ArticleResult;
use chrono::{DateTime, Local};

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem;color:#222}\
form{display:flex;gap:.5rem}input[type=url]{flex:1;padding:.5rem}button{padding:.5rem 1rem}\
.flash{background:#fdecea;border:1px solid #f5c2c0;padding:.75rem;margin:1rem 0}\
.meta{color:#555}.keywords span{display:inline-block;background:#eef;margin:.1rem;padding:.1rem .4rem}\
img.top{max-width:100%}footer{margin-top:3rem;color:#888;font-size:.85rem}";

/// Escapes text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the page
///
/// # Arguments
///
/// * `flash` - Message from a failed submission, if any
/// * `result` - Article to display, if the submission succeeded
/// * `now` - Current server time shown in the footer
pub fn render_page(
    flash: Option<&str>,
    result: Option<&ArticleResult>,
    now: DateTime<Local>,
) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Newsbrief</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");

    html.push_str("<h1>Newsbrief</h1>\n");
    html.push_str("<p>Paste a news article link to get a short summary.</p>\n");

    if let Some(message) = flash {
        html.push_str(&format!(
            "<div class=\"flash\" role=\"alert\">{}</div>\n",
            escape_html(message)
        ));
    }

    html.push_str("<form method=\"post\" action=\"/\">\n");
    html.push_str(
        "<input type=\"url\" name=\"url\" placeholder=\"https://\" required aria-label=\"Article URL\">\n",
    );
    html.push_str("<button type=\"submit\">Summarize</button>\n");
    html.push_str("</form>\n");

    if let Some(result) = result {
        render_result(&mut html, result);
    }

    html.push_str(&format!(
        "<footer>Generated {}</footer>\n",
        now.format("%Y-%m-%d %H:%M:%S")
    ));
    html.push_str("</body>\n</html>\n");

    html
}

fn render_result(html: &mut String, result: &ArticleResult) {
    html.push_str("<article class=\"result\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&result.title)));

    html.push_str(&format!(
        "<p class=\"meta\"><strong>Authors:</strong> {}<br><strong>Published:</strong> {}</p>\n",
        escape_html(&result.authors),
        escape_html(&result.publish_date)
    ));

    if let Some(src) = &result.top_image {
        html.push_str(&format!(
            "<img class=\"top\" src=\"{}\" alt=\"\">\n",
            escape_html(src)
        ));
    }

    html.push_str("<h3>Summary</h3>\n");
    html.push_str(&format!("<p class=\"summary\">{}</p>\n", escape_html(&result.summary)));

    html.push_str(&format!(
        "<p class=\"sentiment\"><strong>Sentiment:</strong> {}</p>\n",
        escape_html(&result.sentiment.to_string())
    ));

    if !result.keywords.is_empty() {
        html.push_str("<p class=\"keywords\"><strong>Keywords:</strong> ");
        for keyword in &result.keywords {
            html.push_str(&format!("<span>{}</span>", escape_html(keyword)));
        }
        html.push_str("</p>\n");
    }

    html.push_str("</article>\n");
}
