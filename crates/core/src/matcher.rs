//! Offline symptom matcher.
//!
//! Maps free text to the catalog records whose keywords it mentions and renders a combined
//! advisory. The matcher is a pure function of its input and the static catalog: it holds no
//! state, performs no I/O and cannot fail.
//!
//! Matching is plain substring search on the lowercased input, so a keyword embedded in a
//! longer word still matches (e.g. "gas" inside "vegas").

use crate::conditions::{catalog, ConditionRecord};
use crate::constants::{ADVISORY_FOOTER, ADVISORY_HEADER};

/// Rendering surface for an advisory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Markup {
    /// `<br>` line breaks and `<b>` emphasis, for rich-text widgets and web pages.
    #[default]
    Html,
    /// Newlines and `**` emphasis.
    Markdown,
    /// Newlines only, without emphasis or icons. Suitable for speech.
    Plain,
}

impl Markup {
    fn line_break(self) -> &'static str {
        match self {
            Markup::Html => "<br>",
            Markup::Markdown | Markup::Plain => "\n",
        }
    }

    fn emphasise(self, text: &str) -> String {
        match self {
            Markup::Html => format!("<b>{text}</b>"),
            Markup::Markdown => format!("**{text}**"),
            Markup::Plain => text.to_string(),
        }
    }

    fn icon(self, icon: &'static str) -> &'static str {
        match self {
            Markup::Plain => "",
            Markup::Html | Markup::Markdown => icon,
        }
    }
}

impl std::str::FromStr for Markup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Markup::Html),
            "markdown" | "md" => Ok(Markup::Markdown),
            "plain" | "text" => Ok(Markup::Plain),
            other => Err(format!("unknown markup {other:?} (expected html, markdown or plain)")),
        }
    }
}

/// Records whose keywords occur in `text`, in catalog order.
///
/// Each record appears at most once no matter how many of its keywords match.
pub fn matching_conditions(text: &str) -> Vec<&'static ConditionRecord> {
    let normalised = text.to_lowercase();
    catalog()
        .iter()
        .filter(|record| record.matches(&normalised))
        .collect()
}

/// Offline advisory for `text` rendered as HTML, or an empty string when nothing matches.
pub fn analyze(text: &str) -> String {
    analyze_with(text, Markup::Html)
}

/// Offline advisory for `text` rendered for `markup`, or an empty string when nothing matches.
pub fn analyze_with(text: &str, markup: Markup) -> String {
    let matched = matching_conditions(text);
    if matched.is_empty() {
        return String::new();
    }
    tracing::debug!(matches = matched.len(), "offline symptom check matched");
    render(&matched, markup)
}

fn render(matched: &[&ConditionRecord], markup: Markup) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(2 + matched.len() * 8);
    lines.push(prefixed(markup.icon("🔎 "), &markup.emphasise(ADVISORY_HEADER)));

    for record in matched {
        lines.push(String::new());
        lines.push(format!(
            "{}Possible related condition: {}",
            markup.icon("📌 "),
            markup.emphasise(record.name)
        ));
        lines.push(format!("• Typical symptoms: {}", record.symptoms));
        lines.push(String::new());
        lines.push(format!("{}First-aid style guidance:", markup.icon("🩹 ")));
        lines.push(block(record.first_aid, markup));
        lines.push(String::new());
        lines.push(format!("{}When you should see a doctor:", markup.icon("⚠ ")));
        lines.push(block(record.see_doctor, markup));
    }

    lines.push(String::new());
    lines.push(prefixed(markup.icon("❗ "), ADVISORY_FOOTER));

    lines.join(markup.line_break())
}

fn prefixed(icon: &str, text: &str) -> String {
    format!("{icon}{text}")
}

// Multi-line catalog text uses '\n'; HTML needs explicit breaks for each line.
fn block(text: &str, markup: Markup) -> String {
    text.lines().collect::<Vec<_>>().join(markup.line_break())
}
