use leptos::prelude::*;
use state::leaderboard::SummarySlot;

use super::SignalPort;

#[component]
fn PodiumSlot(
    slot: RwSignal<Option<SummarySlot>>,
    place: usize,
    /// Tailwind classes for the avatar ring
    ring_class: &'static str,
    /// Tailwind classes for the podium block
    base_class: &'static str,
) -> impl IntoView {
    let name = move || {
        slot.with(|s| s.as_ref().map(|s| s.player.clone()))
            .unwrap_or_else(|| "---".to_string())
    };
    let volume = move || {
        slot.with(|s| s.as_ref().map(|s| s.volume.clone()))
            .unwrap_or_else(|| "0.00".to_string())
    };
    let avatar = move || slot.with(|s| s.as_ref().map(|s| s.avatar_url.clone()));

    view! {
        <div id=format!("top-{place}") class="flex flex-col items-center podium-slot">
            <div class="relative mb-2">
                <Show
                    when=move || avatar().is_some()
                    fallback=move || view! { <div class=format!("avatar w-16 h-16 rounded-full bg-neutral-800 {ring_class}")></div> }
                >
                    <img
                        src=move || avatar().unwrap_or_default()
                        alt=move || format!("{}'s avatar", name())
                        class=format!("avatar w-16 h-16 rounded-full object-cover {ring_class}")
                    />
                </Show>
            </div>

            <div class=format!("rounded-t-lg px-4 py-3 min-w-[100px] {base_class}")>
                <div class="text-center">
                    <div class="text-3xl font-bold text-black mb-1">{place}</div>
                    <div class="username text-xs font-medium text-black truncate max-w-[100px]">
                        {name}
                    </div>
                    <div class="text-xs font-bold text-black mt-1">
                        <span class="metric-value">{volume}</span>
                        " "
                        <span class="coin-icon"></span>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Top three of the live leaderboard, second place left and third place right.
#[component]
pub fn Podium(port: SignalPort) -> impl IntoView {
    let [first, second, third] = port.slots;

    view! {
        <div class="relative w-full py-8 mb-8">
            <div class="relative flex items-end justify-center gap-4 px-4 max-w-md mx-auto">
                <PodiumSlot
                    slot=second
                    place=2
                    ring_class="border-4 border-[#DCDCDC]"
                    base_class="bg-gradient-to-b from-[#2F2F30] via-[#FFFFFF] to-[#4B4B4B]"
                />
                <div class="-mt-8">
                    <PodiumSlot
                        slot=first
                        place=1
                        ring_class="border-4 border-[#FDBF01] shadow-lg"
                        base_class="bg-gradient-to-b from-[#BF760B] via-[#FFE89F] to-[#C38F14] py-4"
                    />
                </div>
                <PodiumSlot
                    slot=third
                    place=3
                    ring_class="border-4 border-[#D99979]"
                    base_class="bg-gradient-to-b from-[#6D4C35] via-[#DBA374] to-[#9F7753]"
                />
            </div>
        </div>
    }
}
