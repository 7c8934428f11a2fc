use leptos::prelude::*;

use super::SignalPort;
use crate::popup::Popup;

#[component]
pub fn ChallengePopup(port: SignalPort) -> impl IntoView {
    let show = Signal::derive(move || port.challenged.with(Option::is_some));
    let on_close = Callback::new(move |()| port.challenged.set(None));
    let challenged = move || port.challenged.get().unwrap_or_default();

    view! {
        <Popup show=show on_close=on_close>
            <div class="flex flex-col items-center gap-2 text-white text-center">
                <span class="text-xl font-bold">"Challenge sent"</span>
                <span class="text-neutral-300">"Challenging " {challenged} "!"</span>
            </div>
        </Popup>
    }
}
