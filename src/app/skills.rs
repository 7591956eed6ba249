use leptos::prelude::*;

use crate::content::SKILLS;
use crate::site::ACCENT;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20">
            <div class="text-center mb-12">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Skills & Technologies"</h2>
                <p class="text-lg opacity-70 max-w-2xl mx-auto">
                    "Here are the technologies and tools I work with to bring ideas to life"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, group)| {
                        view! {
                            <div
                                class="p-6 rounded-2xl backdrop-blur-lg bg-white bg-opacity-5 border border-opacity-10 hover:border-opacity-30 transition-all duration-300 hover:scale-105"
                                style:animation-delay=format!("{}ms", i * 100)
                            >
                                <h3 class="font-semibold text-lg mb-4" style:color=ACCENT>
                                    {group.name}
                                </h3>
                                <div class="space-y-2">
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <div class="flex items-center gap-2">
                                                    <div
                                                        class="w-2 h-2 rounded-full"
                                                        style:background=ACCENT
                                                    ></div>
                                                    <span>{*item}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
