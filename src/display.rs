//! Rich display hooks for notebook front ends.
//!
//! The evcxr Jupyter kernel shows any value that has an `evcxr_display`
//! method by reading a tagged block of markup from stdout.

use std::io::{self, Write};

/// Something that can be turned into inline HTML/SVG markup.
pub trait Render {
    /// Markup for this value.
    fn render(&self) -> String;

    /// Write the evcxr content block for this value to `out`.
    fn write_display<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        Self: Sized,
    {
        writeln!(out, "EVCXR_BEGIN_CONTENT text/html")?;
        writeln!(out, "{}", self.render())?;
        writeln!(out, "EVCXR_END_CONTENT")
    }

    /// Called by the evcxr kernel to display the value inline.
    fn evcxr_display(&self)
    where
        Self: Sized,
    {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = self.write_display(&mut lock) {
            tracing::warn!("failed to write display block: {e}");
        }
    }
}

/// Wrap `body` in a standalone HTML document.
pub fn html_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape_text(title),
        body
    )
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
