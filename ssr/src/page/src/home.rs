use component::fade_in::FadeIn;
use consts::SITE_NAME;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
fn Feature(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <FadeIn class="rounded-xl bg-neutral-900/70 p-6">
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-neutral-400">{body}</p>
        </FadeIn>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text=SITE_NAME />
        <div class="min-h-screen text-white">
            <FadeIn class="max-w-3xl mx-auto text-center pt-24 pb-16 px-4">
                <h1 class="text-5xl font-bold mb-4">{SITE_NAME}</h1>
                <p class="text-xl text-neutral-300 mb-8">
                    "Head-to-head trading battles. Climb the board, challenge the best."
                </p>
                <a href="/leaderboard" class="inline-block rounded-full bg-[#8c00ff] px-8 py-3 font-semibold">
                    "View leaderboard"
                </a>
            </FadeIn>

            <section id="features" class="max-w-5xl mx-auto grid gap-6 md:grid-cols-3 px-4 pb-16">
                <Feature
                    title="Live rankings"
                    body="Standings update as trades settle, with the latest movers highlighted."
                />
                <Feature
                    title="Challenges"
                    body="Pick any trader on the board and call them out for a one-on-one round."
                />
                <Feature
                    title="Transparent stats"
                    body="Winnings, trade count, win rate and volume for every player."
                />
            </section>

            <FadeIn class="max-w-3xl mx-auto text-center pb-24 px-4">
                <h2 id="community" class="text-3xl font-bold mb-4">"Join the arena"</h2>
                <p class="text-neutral-400">"Connect a wallet and take your first seat on the board."</p>
            </FadeIn>
        </div>
    }
}
