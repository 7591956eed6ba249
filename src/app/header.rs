use leptos::prelude::*;

use crate::content::PROFILE;
use crate::site::{nav_label, Theme, ACCENT, NAV_ITEMS};

const NAV_BUTTON: &str = "px-3 py-2 rounded-lg transition-all duration-200";

#[component]
pub fn Header(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] menu_open: Signal<bool>,
    #[prop(into)] active: Signal<Option<&'static str>>,
    on_toggle_theme: Callback<()>,
    on_toggle_menu: Callback<()>,
    on_navigate: Callback<&'static str>,
) -> impl IntoView {
    let theme_icon = move || if theme.get().is_dark() { "☀" } else { "☾" };

    view! {
        <header class="flex items-center justify-between py-4">
            <a
                href="#"
                class="font-bold text-xl bg-clip-text text-transparent"
                style:background-image=move || theme.get().accent_gradient()
            >
                {PROFILE.short_name()}
                <span class="ml-1 opacity-70">{format!("/ {}", PROFILE.nickname)}</span>
            </a>

            <nav class="hidden md:flex gap-8 items-center">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        let is_active = move || active.get() == Some(item);
                        view! {
                            <button
                                on:click=move |_| on_navigate.run(item)
                                class=move || {
                                    if is_active() {
                                        format!("{NAV_BUTTON} text-white font-semibold scale-110")
                                    } else {
                                        format!("{NAV_BUTTON} opacity-70 hover:opacity-100")
                                    }
                                }
                                style:background=move || {
                                    if is_active() { ACCENT } else { "transparent" }
                                }
                                style:transform=move || {
                                    if is_active() { "translateY(-2px)" } else { "none" }
                                }
                            >
                                {nav_label(item)}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    on:click=move |_| on_toggle_theme.run(())
                    class="p-2 rounded-lg border border-opacity-20 hover:border-opacity-40 transition-all duration-200 hover:scale-110"
                    aria-label="Toggle theme"
                >
                    {theme_icon}
                </button>
            </nav>

            <div class="md:hidden flex items-center gap-3">
                <button
                    on:click=move |_| on_toggle_theme.run(())
                    class="p-2 rounded-lg border border-opacity-20"
                    aria-label="Toggle theme"
                >
                    {theme_icon}
                </button>
                <button
                    on:click=move |_| on_toggle_menu.run(())
                    class="p-2 rounded-lg border border-opacity-20"
                    aria-label="Toggle menu"
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <div class="md:hidden mt-4 p-4 rounded-xl backdrop-blur-lg bg-white bg-opacity-10 border border-white border-opacity-20">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <button
                                on:click=move |_| on_navigate.run(item)
                                class="block w-full text-left py-3 px-4 rounded-lg hover:bg-white hover:bg-opacity-10 transition-colors"
                            >
                                {nav_label(item)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
