//! Markdown document assembly
//!
//! Joins extracted turns into one document. User turns are quoted line by
//! line under the user heading; every other turn is emitted verbatim under
//! the model heading and closed with a separator.

use crate::error::ExportError;
use crate::extract::{Role, Transcript};
use chrono::format::{Item, StrftimeItems};

const SEPARATOR: &str = "---";

/// Headings and labels used when assembling a transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerOptions {
    pub title: String,
    pub timestamp_label: String,
    /// `chrono` format string for the generation time
    pub timestamp_format: String,
    pub user_heading: String,
    pub model_heading: String,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            title: "AI Studio Export".to_string(),
            timestamp_label: "Exported".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            user_heading: "🙋‍♂️ **User**".to_string(),
            model_heading: "🤖 **AI Model**".to_string(),
        }
    }
}

impl AssemblerOptions {
    /// Reject a timestamp format chrono would fail to render
    pub fn validate(&self) -> Result<(), ExportError> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExportError::InvalidTimestampFormat(
                self.timestamp_format.clone(),
            ));
        }
        Ok(())
    }
}

/// Assemble a transcript into a Markdown document
pub fn assemble(transcript: &Transcript, options: &AssemblerOptions) -> Result<String, ExportError> {
    options.validate()?;
    let mut md = format!(
        "# {}\n> {}: {}\n\n{SEPARATOR}\n\n",
        options.title,
        options.timestamp_label,
        transcript.generated_at.format(&options.timestamp_format)
    );

    for turn in &transcript.turns {
        match turn.role {
            Role::User => {
                let quoted: Vec<String> = turn
                    .rendered_markdown
                    .split('\n')
                    .map(|line| format!("> {line}"))
                    .collect();
                md.push_str(&format!(
                    "### {}\n\n{}\n\n",
                    options.user_heading,
                    quoted.join("\n")
                ));
            }
            Role::Model | Role::Unknown => {
                md.push_str(&format!(
                    "### {}\n\n{}\n\n{SEPARATOR}\n\n",
                    options.model_heading, turn.rendered_markdown
                ));
            }
        }
    }

    Ok(md)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ConversationTurn;
    use chrono::{Local, TimeZone};

    fn turn(role: Role, markdown: &str) -> ConversationTurn {
        ConversationTurn {
            role,
            rendered_markup: String::new(),
            rendered_markdown: markdown.to_string(),
        }
    }

    fn transcript(turns: Vec<ConversationTurn>) -> Transcript {
        let at = Local.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        Transcript::new(turns, at)
    }

    #[test]
    fn header_has_title_timestamp_and_separator() {
        let md = assemble(&transcript(vec![]), &AssemblerOptions::default()).unwrap();
        assert_eq!(
            md,
            "# AI Studio Export\n> Exported: 2026-10-16 09:30:00\n\n---\n\n"
        );
    }

    #[test]
    fn user_lines_are_quoted_and_model_turns_closed() {
        let md = assemble(
            &transcript(vec![
                turn(Role::User, "Hello\n\nsecond line"),
                turn(Role::Model, "```python\nprint(1)\n```"),
                turn(Role::Unknown, "system note"),
            ]),
            &AssemblerOptions::default(),
        )
        .unwrap();

        let body = md.split_once("---\n\n").unwrap().1;
        assert_eq!(
            body,
            "### 🙋‍♂️ **User**\n\n> Hello\n> \n> second line\n\n\
             ### 🤖 **AI Model**\n\n```python\nprint(1)\n```\n\n---\n\n\
             ### 🤖 **AI Model**\n\nsystem note\n\n---\n\n"
        );
    }

    #[test]
    fn custom_headings() {
        let options = AssemblerOptions {
            title: "Chat".to_string(),
            user_heading: "Me".to_string(),
            ..AssemblerOptions::default()
        };
        let md = assemble(&transcript(vec![turn(Role::User, "hi")]), &options).unwrap();
        assert!(md.starts_with("# Chat\n"));
        assert!(md.contains("### Me\n\n> hi\n\n"));
    }

    #[test]
    fn invalid_timestamp_format_is_an_error() {
        let options = AssemblerOptions {
            timestamp_format: "%Y %Q".to_string(),
            ..AssemblerOptions::default()
        };
        assert!(matches!(
            assemble(&transcript(vec![]), &options),
            Err(ExportError::InvalidTimestampFormat(f)) if f == "%Y %Q"
        ));
        assert!(AssemblerOptions::default().validate().is_ok());
    }
}
