use component::fade_in::FadeIn;
use component::leaderboard::LiveLeaderboard;
use consts::SITE_NAME;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Leaderboard() -> impl IntoView {
    view! {
        <Title text=format!("Leaderboard | {SITE_NAME}") />
        <div class="min-h-screen text-white px-4 pb-16">
            <FadeIn class="max-w-4xl mx-auto pt-8">
                <h1 class="text-3xl font-bold text-center mb-2">"Leaderboard"</h1>
                <p class="text-center text-neutral-400 mb-8">
                    "Top traders this season. Tap a row for details."
                </p>
            </FadeIn>
            <div class="max-w-4xl mx-auto">
                <LiveLeaderboard />
            </div>
        </div>
    }
}
