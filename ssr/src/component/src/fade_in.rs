use consts::REVEAL_THRESHOLD;
use leptos::{html::Div, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Fades its children in the first time they scroll into view.
#[component]
pub fn FadeIn(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_visible.set(true);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    view! {
        <div
            node_ref=target
            class=move || {
                if visible.get() {
                    format!("fade-in visible {class}")
                } else {
                    format!("fade-in {class}")
                }
            }
        >
            {children()}
        </div>
    }
}
