//! Export tests: actions, registry lookup and artifacts

use crate::common::{aistudio, exported_at};
use transcript_babel::formats::MarkdownFormat;
use transcript_babel::{
    dispatch, export, extract, Action, ExportError, FormatRegistry, HtmlSnapshot, MarkupProfile,
    SerializedDocument, Transcript,
};

#[test]
fn markdown_artifact_from_fixture() {
    let transcript = Transcript::new(
        extract(&aistudio(), &MarkupProfile::default()),
        exported_at(),
    );
    let artifact = export(&transcript, &MarkdownFormat::default()).unwrap();

    assert_eq!(
        artifact.file_name,
        format!("Chat_{}.md", exported_at().timestamp_millis())
    );
    let SerializedDocument::Text(md) = artifact.document else {
        panic!("markdown export should be text");
    };
    assert!(md.starts_with("# AI Studio Export\n> Exported: 2026-10-16 09:30:00\n"));
    assert_eq!(md.matches("### 🙋‍♂️ **User**").count(), 2);
    assert_eq!(md.matches("### 🤖 **AI Model**").count(), 1);
}

#[test]
fn message_drives_the_export() {
    let action = Action::parse_message(r#"{"action": "export_md"}"#).unwrap();
    let artifact = dispatch(
        action,
        &aistudio(),
        &MarkupProfile::default(),
        &FormatRegistry::default(),
    )
    .unwrap();

    assert_eq!(artifact.content_type, "text/markdown");
    assert!(artifact.file_name.starts_with("Chat_"));
}

#[test]
fn all_noise_page_reports_nothing_found() {
    let page = HtmlSnapshot::parse(
        r#"<ms-chat-turn><div class="chat-turn-container model"><div class="turn-content">
             <ms-thought-chunk>thinking</ms-thought-chunk>
           </div></div></ms-chat-turn>"#,
    );
    let err = dispatch(
        Action::ExportMarkdown,
        &page,
        &MarkupProfile::default(),
        &FormatRegistry::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ExportError::NothingFound));
    assert_eq!(
        err.to_string(),
        "No conversation content found; reload the page and try again"
    );
}
