// Unit tests for selector-chain resolution policy

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_first_match_prefers_earliest_candidate() {
    // Both candidates match: the first wins
    assert_eq!(first_match(&[1, 1]), Some(0));
    assert_eq!(first_match(&[3, 1]), Some(0));
}

#[test]
fn test_first_match_falls_through_to_later_candidate() {
    // Only the second candidate matches
    assert_eq!(first_match(&[0, 2]), Some(1));
    assert_eq!(first_match(&[0, 0, 1]), Some(2));
}

#[test]
fn test_first_match_none_when_nothing_matches() {
    assert_eq!(first_match(&[0, 0]), None);
    assert_eq!(first_match(&[]), None);
}

#[test]
fn test_chain_preserves_candidate_order() {
    let chain = SelectorChain::new("thing", &["#a", ".b", "div[title='c']"]);
    assert_eq!(chain.target(), "thing");
    assert_eq!(chain.candidates(), &["#a", ".b", "div[title='c']"]);
}

#[test]
fn test_anchor_chains_are_nonempty() {
    // Every logical UI target must have at least one candidate; an empty
    // chain could never bind and would fail every contact
    for chain in [
        anchors::logged_in(),
        anchors::chat_loaded(),
        anchors::composer(),
        anchors::attach_control(),
        anchors::media_input(),
        anchors::caption_field(),
        anchors::pending_send(),
        anchors::media_preview(),
    ] {
        assert!(
            !chain.candidates().is_empty(),
            "{} has no candidates",
            chain.target()
        );
    }
}

#[test]
fn test_attach_chain_tries_title_match_before_icon_match() {
    let chain = anchors::attach_control();
    assert!(chain.candidates()[0].contains("title="));
    assert!(chain.candidates()[1].contains("data-icon"));
}

#[test]
fn test_pending_send_chain_targets_transient_clock() {
    let chain = anchors::pending_send();
    assert!(chain.candidates()[0].contains("msg-time"));
}

#[test]
fn test_preview_chain_cannot_bind_the_bare_chat_composer() {
    // The preview chain doubles as the upload confirmation wait: if any of
    // its candidates matched the always-present composer, a failed file
    // injection would be confirmed as delivered
    let preview = anchors::media_preview();
    let composer = anchors::composer();
    let chat = anchors::chat_loaded();
    for candidate in preview.candidates() {
        assert!(
            !composer.candidates().contains(candidate),
            "{} also matches the bare composer",
            candidate
        );
        assert!(
            !chat.candidates().contains(candidate),
            "{} also matches the bare chat",
            candidate
        );
    }
}
