use consts::{nav::LINKS, SITE_NAME};
use leptos::prelude::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};
use state::menu::MenuToggle;

#[component]
pub fn NavMenu() -> impl IntoView {
    let menu = RwSignal::new(MenuToggle::default());
    let UseWindowSizeReturn { width, .. } = use_window_size();

    view! {
        <nav class="site-nav flex items-center justify-between px-6 py-4">
            <a href="/" class="logo text-xl font-bold">{SITE_NAME}</a>
            <button
                id="hamburger"
                class="hamburger md:hidden text-2xl"
                aria-label="Toggle navigation"
                on:click=move |_| menu.update(MenuToggle::toggle)
            >
                <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                </svg>
            </button>
            <ul
                id="nav-list"
                class=move || if menu.with(MenuToggle::is_open) { "nav-list active" } else { "nav-list" }
            >
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a
                                    href=*href
                                    on:click=move |_| {
                                        let viewport_width = width.get_untracked();
                                        menu.update(|m| m.link_clicked(viewport_width))
                                    }
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
