use crate::common::{aistudio, exported_at};
use transcript_babel::{
    assemble, extract, AssemblerOptions, HtmlSnapshot, MarkupProfile, Role, Selector, Transcript,
};

fn roles(turns: &[transcript_babel::ConversationTurn]) -> Vec<Role> {
    turns.iter().map(|turn| turn.role).collect()
}

#[test]
fn fixture_turns_in_document_order() {
    let turns = extract(&aistudio(), &MarkupProfile::default());

    assert_eq!(roles(&turns), vec![Role::User, Role::Model, Role::User]);
    assert_eq!(turns[0].rendered_markdown, "Hello");
    assert_eq!(
        turns[1].rendered_markdown,
        "Here is **the** code:\n\n```python\nprint(1)\n```\n\n\
         See [the docs](https://aistudio.google.com/docs/python) and use `print`."
    );
    assert_eq!(turns[2].rendered_markdown, "- first **bold**\n- second");
}

#[test]
fn assembled_fixture_document() {
    let transcript = Transcript::new(
        extract(&aistudio(), &MarkupProfile::default()),
        exported_at(),
    );
    let md = assemble(&transcript, &AssemblerOptions::default()).unwrap();

    assert_eq!(
        md,
        "# AI Studio Export\n> Exported: 2026-10-16 09:30:00\n\n---\n\n\
         ### 🙋‍♂️ **User**\n\n> Hello\n\n\
         ### 🤖 **AI Model**\n\n\
         Here is **the** code:\n\n```python\nprint(1)\n```\n\n\
         See [the docs](https://aistudio.google.com/docs/python) and use `print`.\n\n---\n\n\
         ### 🙋‍♂️ **User**\n\n> - first **bold**\n> - second\n\n"
    );
}

#[test]
fn hello_and_python_block_under_their_headings() {
    let page = HtmlSnapshot::parse(
        r#"<ms-chat-turn><div class="chat-turn-container user"><div class="turn-content">Hello</div></div></ms-chat-turn>
           <ms-chat-turn><div class="chat-turn-container model"><div class="turn-content"><pre><code class="language-python">  print(1)</code></pre></div></div></ms-chat-turn>"#,
    );
    let transcript = Transcript::new(extract(&page, &MarkupProfile::default()), exported_at());
    let md = assemble(&transcript, &AssemblerOptions::default()).unwrap();

    let user = md.find("### 🙋‍♂️ **User**").unwrap();
    let hello = md.find("> Hello").unwrap();
    let model = md.find("### 🤖 **AI Model**").unwrap();
    let code = md.find("```python\nprint(1)\n```").unwrap();
    assert!(user < hello && hello < model && model < code);
}

#[test]
fn order_follows_containers_not_roles() {
    let page = HtmlSnapshot::parse(
        r#"<ms-chat-turn><div class="chat-turn-container model"><div class="turn-content">one</div></div></ms-chat-turn>
           <ms-chat-turn><div class="chat-turn-container model"><div class="turn-content">two</div></div></ms-chat-turn>
           <ms-chat-turn><div class="chat-turn-container user"><div class="turn-content">three</div></div></ms-chat-turn>
           <ms-chat-turn><div class="chat-turn-container"><div class="turn-content">four</div></div></ms-chat-turn>"#,
    );
    let turns = extract(&page, &MarkupProfile::default());

    let texts: Vec<&str> = turns.iter().map(|t| t.rendered_markdown.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three", "four"]);
    assert_eq!(
        roles(&turns),
        vec![Role::Model, Role::Model, Role::User, Role::Unknown]
    );
}

#[test]
fn turn_without_content_container_is_skipped() {
    let page = HtmlSnapshot::parse(
        r#"<ms-chat-turn><div class="chat-turn-container user"><p>loading</p></div></ms-chat-turn>
           <ms-chat-turn><div class="chat-turn-container model"><div class="turn-content">ok</div></div></ms-chat-turn>"#,
    );
    let turns = extract(&page, &MarkupProfile::default());
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].rendered_markdown, "ok");
}

#[test]
fn custom_profile_reads_other_markup() {
    let page = HtmlSnapshot::parse(
        r#"<article class="msg"><div class="author from-me"><section class="body">hi</section></div></article>
           <article class="msg"><div class="author from-bot"><section class="body">hello <em>there</em></section></div></article>"#,
    );
    let profile = MarkupProfile {
        turn: "article.msg".parse().unwrap(),
        classifier: Selector::class("author"),
        content: Selector::class("body"),
        roles: transcript_babel::RoleMarkers {
            user: "from-me".to_string(),
            model: "from-bot".to_string(),
        },
        ..MarkupProfile::default()
    };

    let turns = extract(&page, &profile);
    assert_eq!(roles(&turns), vec![Role::User, Role::Model]);
    assert_eq!(turns[1].rendered_markdown, "hello *there*");
}

#[test]
fn page_without_turns_extracts_nothing() {
    let page = HtmlSnapshot::parse("<html><body><p>Sign in</p></body></html>");
    assert!(extract(&page, &MarkupProfile::default()).is_empty());
}
