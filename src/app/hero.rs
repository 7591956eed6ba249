use leptos::prelude::*;

use crate::content::PROFILE;
use crate::site::{Theme, ACCENT};

const LINK_BUTTON: &str = "inline-flex items-center gap-3 px-6 py-3 rounded-xl border border-opacity-20 hover:border-opacity-40 transition-all duration-200 hover:scale-105 hover:shadow-lg";

#[component]
pub fn Hero(
    #[prop(into)] theme: Signal<Theme>,
    on_navigate: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center pt-16">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-6 order-2 lg:order-1 text-center lg:text-left">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-opacity-20 text-sm">
                        <span>"✨"</span>
                        <span>"Available for employment opportunities"</span>
                    </div>

                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight">
                        "Hi, I'm "
                        <span
                            class="bg-clip-text text-transparent"
                            style:background-image=move || theme.get().accent_gradient()
                        >
                            {PROFILE.short_name()}
                        </span>
                    </h1>

                    <p class="text-xl sm:text-2xl font-medium opacity-90" style:color=ACCENT>
                        {PROFILE.tagline}
                    </p>
                    <p class="text-lg opacity-80 leading-relaxed">{PROFILE.bio}</p>

                    <div class="flex flex-wrap gap-4 pt-4 justify-center lg:justify-start">
                        <a href=PROFILE.github target="_blank" rel="noreferrer" class=LINK_BUTTON>
                            <i class="devicon-github-plain" />
                            "GitHub"
                        </a>
                        <a href=PROFILE.linkedin target="_blank" rel="noreferrer" class=LINK_BUTTON>
                            <i class="devicon-linkedin-plain" />
                            "LinkedIn"
                        </a>
                        <a
                            href=format!("mailto:{}", PROFILE.email)
                            class="inline-flex items-center gap-3 px-6 py-3 rounded-xl text-white transition-all duration-200 hover:scale-105 hover:shadow-lg"
                            style:background=ACCENT
                        >
                            "✉ Get In Touch"
                        </a>
                    </div>
                </div>

                <div class="flex justify-center lg:justify-end order-1 lg:order-2">
                    <ProfileCard />
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <button
                    on:click=move |_| on_navigate.run("projects")
                    class="p-2 rounded-full border border-opacity-20 hover:border-opacity-40 transition-all"
                    aria-label="Scroll to projects"
                >
                    "⌄"
                </button>
            </div>
        </section>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    view! {
        <div
            class="relative w-72 h-auto py-10 sm:py-0 sm:w-80 sm:h-80 rounded-3xl border-4 border-opacity-20 flex items-center justify-center overflow-hidden group"
            style:border-color=ACCENT
        >
            <div
                class="absolute inset-0 opacity-10 group-hover:opacity-20 transition-opacity duration-300"
                style:background=ACCENT
            ></div>

            <div class="text-center relative z-10 p-6 sm:p-8">
                <div class="mb-4 relative w-32 h-32 mx-auto">
                    <img
                        src=PROFILE.photo
                        alt=PROFILE.name
                        class="w-full h-full object-cover rounded-full border-4 border-white border-opacity-20 shadow-lg"
                    />
                </div>
                <div class="font-semibold text-lg">{PROFILE.name}</div>
                <div class="mt-2 text-sm opacity-70">{PROFILE.focus}</div>
                <div class="mt-6 flex justify-center gap-2">
                    {PROFILE
                        .highlights
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded-full border border-opacity-20">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div
                class="absolute top-4 right-4 w-3 h-3 rounded-full animate-pulse"
                style:background=ACCENT
            ></div>
            <div
                class="absolute bottom-6 left-6 w-2 h-2 rounded-full animate-pulse delay-300"
                style:background=ACCENT
            ></div>
        </div>
    }
}
