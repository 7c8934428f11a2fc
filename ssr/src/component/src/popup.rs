use leptos::portal::Portal;
use leptos::prelude::*;
use leptos_icons::*;

/// Modal shown while `show` is set. Clicking the backdrop or the cross closes it.
#[component]
pub fn Popup(#[prop(into)] show: Signal<bool>, on_close: Callback<()>, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <Show when=move || show.get()>
            <Portal>
                <div
                    on:click={
                        #[cfg(feature = "hydrate")]
                        {
                            move |ev| {
                                use web_sys::HtmlElement;
                                let target = event_target::<HtmlElement>(&ev);
                                if target.class_list().contains("modal-bg") {
                                    on_close.run(());
                                }
                            }
                        }
                        #[cfg(not(feature = "hydrate"))] { |_| () }
                    }
                    class="flex cursor-pointer modal-bg inset-0 fixed bg-black/60 z-[999] justify-center items-center backdrop-blur-sm"
                >
                    <div class="mx-4 py-4 px-[20px] max-w-full max-h-full items-center cursor-auto flex-col flex justify-around bg-neutral-900 rounded-md">
                        <div class="flex w-full justify-end items-center">
                            <button
                                on:click=move |_| on_close.run(())
                                class="text-white text-center p-1 text-lg md:text-xl bg-neutral-600 rounded-full"
                            >
                                <Icon icon=icondata::ChCross />
                            </button>
                        </div>
                        <div class="pb-4 w-full">{children.read_value()()}</div>
                    </div>
                </div>
            </Portal>
        </Show>
    }
}
