use std::time::{Duration, Instant};

use fantoccini::Locator;
use fantoccini::elements::Element;
use tracing::debug;

use crate::session::Session;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A logical UI target expressed as an ordered list of fallback selectors.
///
/// The page's markup is owned by a third party and changes without notice;
/// every DOM dependency goes through a chain so that hardening against a
/// markup change means appending a candidate here, never touching workflow
/// logic.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorChain {
    target: &'static str,
    candidates: Vec<String>,
}

impl SelectorChain {
    pub fn new(target: &'static str, candidates: &[&str]) -> Self {
        SelectorChain {
            target,
            candidates: candidates.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Human-readable name of the target, for logs and error messages.
    pub fn target(&self) -> &str {
        self.target
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

/// A successfully bound element, plus which candidate bound it.
pub struct ResolvedElement {
    pub element: Element,
    /// The selector that matched
    pub selector: String,
}

/// First-match policy over a snapshot of per-candidate hit counts: the
/// earliest candidate with at least one match wins, regardless of how many
/// elements later candidates matched.
pub(crate) fn first_match(hit_counts: &[usize]) -> Option<usize> {
    hit_counts.iter().position(|&count| count > 0)
}

/// Poll the page until one candidate of `chain` matches or `wait` expires.
///
/// Returns `None` on expiry; callers decide whether that is fatal to the
/// current contact. The wait fires at most once, there is no retry beyond it.
pub async fn resolve(
    session: &Session,
    chain: &SelectorChain,
    wait: Duration,
) -> Option<ResolvedElement> {
    debug!(
        "Resolving {} from {} candidate selector(s)",
        chain.target(),
        chain.candidates().len()
    );

    let deadline = Instant::now() + wait;
    loop {
        let mut hits: Vec<Vec<Element>> = Vec::with_capacity(chain.candidates().len());
        for selector in chain.candidates() {
            let found = session
                .client
                .find_all(Locator::Css(selector.as_str()))
                .await
                .unwrap_or_default();
            hits.push(found);
        }

        let counts: Vec<usize> = hits.iter().map(|h| h.len()).collect();
        if let Some(index) = first_match(&counts) {
            let selector = chain.candidates()[index].clone();
            let element = hits.swap_remove(index).into_iter().next();
            if let Some(element) = element {
                debug!(
                    "{} bound via candidate {} ({})",
                    chain.target(),
                    index,
                    selector
                );
                return Some(ResolvedElement { element, selector });
            }
        }

        if Instant::now() >= deadline {
            debug!("{} did not bind within {:?}", chain.target(), wait);
            return None;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Selector chains for the WhatsApp Web surfaces the workflow depends on.
pub mod anchors {
    use super::SelectorChain;

    /// Post-login anchor: only present once the conversation list rendered.
    pub fn logged_in() -> SelectorChain {
        SelectorChain::new(
            "conversation list",
            &["#pane-side", "div[aria-label='Chat list']"],
        )
    }

    /// Editable composer, or the fixed footer hosting it, in an open chat.
    pub fn chat_loaded() -> SelectorChain {
        SelectorChain::new(
            "chat composer",
            &[
                "footer div[contenteditable='true']",
                "div[contenteditable='true'][data-tab='10']",
                "#main footer",
            ],
        )
    }

    /// Composer to paste or type into.
    pub fn composer() -> SelectorChain {
        SelectorChain::new(
            "message composer",
            &[
                "footer div[contenteditable='true']",
                "div[contenteditable='true'][data-tab='10']",
            ],
        )
    }

    /// The attach/plus control that materializes the hidden file input.
    pub fn attach_control() -> SelectorChain {
        SelectorChain::new(
            "attach control",
            &[
                "div[title='Attach']",
                "span[data-icon='plus']",
                "span[data-icon='clip']",
                "button[aria-label='Attach']",
            ],
        )
    }

    /// Hidden file input behind the attach control.
    pub fn media_input() -> SelectorChain {
        SelectorChain::new(
            "media file input",
            &["input[type='file'][accept*='image']", "input[type='file']"],
        )
    }

    /// Caption field in the media preview dialog.
    pub fn caption_field() -> SelectorChain {
        SelectorChain::new(
            "caption field",
            &[
                "div[aria-label='Add a caption'][contenteditable='true']",
                "div[aria-placeholder='Add a caption']",
            ],
        )
    }

    /// Transient clock marker next to a message that has not reached the
    /// server yet; its absence is the send-acknowledged signal.
    pub fn pending_send() -> SelectorChain {
        SelectorChain::new(
            "pending-send marker",
            &["span[data-icon='msg-time']", "span[aria-label='Pending']"],
        )
    }

    /// Any recognizable part of the media preview dialog; used to confirm an
    /// attached or pasted image actually rendered.
    pub fn media_preview() -> SelectorChain {
        SelectorChain::new(
            "media preview",
            &[
                "div[aria-label='Add a caption'][contenteditable='true']",
                "span[data-icon='send']",
                "div[aria-label='Send']",
            ],
        )
    }
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;
