//! Styled page handed to the PDF renderer
//!
//! The page is a single self-contained HTML document: print CSS from the
//! settings, a fixed stylesheet, a centered title, then one block per turn.
//! User blocks are right-aligned on a tinted background; everything else is
//! shown as an AI block. Turn bodies are the sanitized markup as extracted.

use super::PdfSettings;
use crate::extract::{Role, Transcript};

const BASE_CSS: &str = "\
body { font-family: 'Microsoft YaHei', sans-serif; color: #333; background: #fff; }
.transcript { max-width: 780px; margin: 0 auto; padding: 40px; box-sizing: border-box; }
.transcript-title { text-align: center; border-bottom: 1px solid #eee; padding-bottom: 15px; }
.turn { display: flex; flex-direction: column; margin-bottom: 20px; }
.turn-user { align-items: flex-end; }
.turn-model { align-items: flex-start; }
.turn-label { font-weight: bold; font-size: 12px; margin-bottom: 5px; }
.turn-user .turn-label { color: #0057ff; }
.turn-model .turn-label { color: #d93025; }
.turn-body { padding: 12px 16px; border-radius: 8px; max-width: 100%; line-height: 1.6; font-size: 14px; }
.turn-user .turn-body { background: #f0f7ff; border: 1px solid #cce5ff; }
.turn-model .turn-body { background: #fff; border: none; }
.turn-body pre { background: #f6f8fa; padding: 10px; border-radius: 5px; border: 1px solid #eee; }
";

/// Build the complete page for `transcript`
pub fn build_page(transcript: &Transcript, settings: &PdfSettings) -> String {
    let title = html_escape(&settings.title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(&settings.print_css());
    html.push_str(BASE_CSS);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"transcript\">\n");
    html.push_str(&format!("<h2 class=\"transcript-title\">{title}</h2>\n"));

    for turn in &transcript.turns {
        let (class, label) = match turn.role {
            Role::User => ("turn-user", "User"),
            Role::Model | Role::Unknown => ("turn-model", "AI"),
        };
        html.push_str(&format!(
            "<div class=\"turn {class}\">\n<div class=\"turn-label\">{label}</div>\n<div class=\"turn-body\">{}</div>\n</div>\n",
            turn.rendered_markup
        ));
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
