use log::error;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::config::RevealConfig;
use super::controller::RevealGroup;
use super::dom::{self, DomRevealHandle};

/// Reveals `targets` once per mount. The returned flag is `true` while the
/// group is settled, whichever way, and drops back when it is reversed.
#[hook]
pub fn use_reveal(targets: Vec<NodeRef>, section: Option<NodeRef>, config: RevealConfig) -> UseStateHandle<bool> {
    let settled = use_state(|| false);

    {
        let settled = settled.clone();
        use_effect_with_deps(
            move |_| {
                let elements: Vec<HtmlElement> =
                    targets.iter().filter_map(|node| node.cast::<HtmlElement>()).collect();
                let mut group = RevealGroup::new(elements);
                if let Some(section) = section.and_then(|node| node.cast::<HtmlElement>()) {
                    group = group.triggered_by(section);
                }

                let config = if dom::prefers_reduced_motion() {
                    RevealConfig {
                        start_delay_ms: 0,
                        stagger_ms: 0,
                        duration_ms: 0,
                        ..config
                    }
                } else {
                    config
                };

                let handle: Option<DomRevealHandle> = match dom::controller().arm(group, &config) {
                    Ok(handle) => {
                        let reversed = settled.clone();
                        handle.on_settled(move |_| settled.set(true));
                        handle.on_reversed(move || reversed.set(false));
                        Some(handle)
                    }
                    Err(err) => {
                        error!("Reveal not armed, content left visible: {}", err);
                        None
                    }
                };

                move || {
                    if let Some(handle) = handle {
                        handle.cancel();
                    }
                }
            },
            (),
        );
    }

    settled
}
