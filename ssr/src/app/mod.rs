use component::{nav_menu::NavMenu, particle_canvas::ParticleCanvas};
use consts::SITE_NAME;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use page::{home::Home, leaderboard::Leaderboard};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-white gap-4">
            <h1 class="text-3xl font-bold">"Page not found"</h1>
            <a href="/" class="underline text-neutral-300">"Back to the arena"</a>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/arena-web-leptos-ssr.css" />
        <Title text=SITE_NAME />
        <Router>
            <ParticleCanvas />
            <NavMenu />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=Home />
                    <Route path=StaticSegment("leaderboard") view=Leaderboard />
                </Routes>
            </main>
        </Router>
    }
}
