use crate::common::aistudio;
use transcript_babel::sanitize::DEFAULT_NOISE;
use transcript_babel::tree::dom;
use transcript_babel::{extract, HtmlSnapshot, MarkupProfile, Selector, TreeSource};

#[test]
fn noise_never_reaches_either_rendering() {
    let turns = extract(&aistudio(), &MarkupProfile::default());
    let model = &turns[1];

    for leaked in ["Thinking about", "ms-thought-chunk", "citations-container", "[1]", "example.com"] {
        assert!(
            !model.rendered_markdown.contains(leaked),
            "markdown leaked {leaked:?}: {}",
            model.rendered_markdown
        );
        assert!(
            !model.rendered_markup.contains(leaked),
            "markup leaked {leaked:?}: {}",
            model.rendered_markup
        );
    }
    assert!(model.rendered_markup.contains("<strong>the</strong>"));
}

#[test]
fn every_default_noise_kind_is_removed() {
    let page = HtmlSnapshot::parse(
        r#"<ms-chat-turn><div class="chat-turn-container model"><div class="turn-content">
             <ms-thought-chunk>thought</ms-thought-chunk>
             <div class="actions-container">actions</div>
             <div class="turn-footer">footer</div>
             <div class="turn-separator">separator</div>
             <span class="author-label">author</span>
             <ms-tooltip>tooltip</ms-tooltip>
             <svg><text>icon</text></svg>
             <div class="citations-container">citations</div>
             <p>kept</p>
           </div></div></ms-chat-turn>"#,
    );
    let turns = extract(&page, &MarkupProfile::default());

    assert_eq!(DEFAULT_NOISE.len(), 8);
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].rendered_markdown, "kept");
    for word in ["thought", "actions", "footer", "separator", "author", "tooltip", "icon", "citations"] {
        assert!(!turns[0].rendered_markup.contains(word), "markup kept {word}");
    }
}

#[test]
fn all_noise_turn_is_excluded() {
    let page = HtmlSnapshot::parse(
        r#"<ms-chat-turn><div class="chat-turn-container model"><div class="turn-content">
             <ms-thought-chunk><p>Reasoning only</p></ms-thought-chunk>
           </div></div></ms-chat-turn>"#,
    );
    assert!(extract(&page, &MarkupProfile::default()).is_empty());
}

#[test]
fn source_document_is_left_untouched() {
    let page = aistudio();
    let root = page.root();
    let before = dom::inner_html(&root);

    let turns = extract(&page, &MarkupProfile::default());
    assert_eq!(turns.len(), 3);

    assert_eq!(dom::inner_html(&root), before);
    assert_eq!(dom::select(&root, &Selector::tag("ms-thought-chunk")).len(), 2);
    assert!(dom::select(&root, &Selector::tag("pre"))
        .iter()
        .all(|pre| dom::attr(pre, "style").is_none()));
}

#[test]
fn code_blocks_in_markup_wrap_long_lines() {
    let turns = extract(&aistudio(), &MarkupProfile::default());
    assert!(turns[1]
        .rendered_markup
        .contains("<pre style=\"white-space: pre-wrap; word-wrap: break-word;"));
}
