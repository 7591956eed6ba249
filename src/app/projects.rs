use leptos::prelude::*;

use crate::carousel::{Carousel, CarouselDeck};
use crate::content::{Project, PROJECTS};
use crate::site::ACCENT;

const CARD_LINK: &str = "flex items-center gap-2 px-4 py-2 rounded-lg border border-opacity-20 hover:border-opacity-40 transition-all hover:scale-105";
const ARROW: &str = "absolute top-1/2 -translate-y-1/2 w-9 h-9 rounded-full bg-black/50 text-white text-xl opacity-0 group-hover:opacity-100 transition-opacity";

fn build_deck(projects: &[Project]) -> CarouselDeck {
    projects
        .iter()
        .filter_map(|p| match Carousel::new(p.images.iter().copied()) {
            Ok(c) => Some((p.id, c)),
            Err(e) => {
                log::warn!("project {} has no carousel: {e}", p.id);
                None
            }
        })
        .collect()
}

#[component]
pub fn Projects() -> impl IntoView {
    let deck = RwSignal::new(build_deck(&PROJECTS));

    view! {
        <section id="projects" class="py-20">
            <div class="text-center mb-12">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Featured Projects"</h2>
                <p class="text-lg opacity-70 max-w-2xl mx-auto">
                    "A collection of projects that showcase my skills and passion for development"
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project deck /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, deck: RwSignal<CarouselDeck>) -> impl IntoView {
    let id = project.id;
    // only this card's index, so siblings don't re-render
    let index = Memo::new(move |_| deck.with(|d| d.index(id).unwrap_or_default()));
    let images = deck
        .with_untracked(|d| d.get(id).map(|c| c.images().to_vec()))
        .unwrap_or_default();
    let count = images.len();

    let gallery = (count > 0).then(|| {
        let current = move || images.get(index.get()).cloned().unwrap_or_default();
        view! {
            <div class="relative aspect-video overflow-hidden bg-black/20">
                <img
                    src=current
                    alt=move || format!("{} screenshot {}", project.title, index.get() + 1)
                    class="w-full h-full object-cover transition-opacity duration-300"
                    loading="lazy"
                />
                {(count > 1).then(|| view! { <CarouselControls deck project count index /> })}
            </div>
        }
    });

    view! {
        <div class="group relative overflow-hidden rounded-2xl backdrop-blur-lg bg-white bg-opacity-5 border border-opacity-10 hover:border-opacity-30 transition-all duration-500 hover:scale-105">
            {project
                .featured
                .then(|| {
                    view! {
                        <div class="absolute top-4 right-4 z-10">
                            <span
                                class="px-3 py-1 rounded-full text-xs font-semibold text-white"
                                style:background=ACCENT
                            >
                                "Featured"
                            </span>
                        </div>
                    }
                })}
            {gallery}
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-3">{project.title}</h3>
                <p class="opacity-80 mb-4 leading-relaxed">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 rounded-full text-sm border border-opacity-20">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-4">
                    {Project::has_link(project.preview)
                        .then(|| {
                            view! {
                                <a href=project.preview target="_blank" rel="noreferrer" class=CARD_LINK>
                                    "↗ Preview"
                                </a>
                            }
                        })}
                    {Project::has_link(project.github)
                        .then(|| {
                            view! {
                                <a href=project.github target="_blank" rel="noreferrer" class=CARD_LINK>
                                    <i class="devicon-github-plain" />
                                    "GitHub"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn CarouselControls(
    deck: RwSignal<CarouselDeck>,
    project: &'static Project,
    count: usize,
    index: Memo<usize>,
) -> impl IntoView {
    let id = project.id;
    view! {
        <button
            class=format!("{ARROW} left-2")
            aria-label="Previous image"
            on:click=move |_| {
                deck.update(|d| {
                    d.retreat(id);
                })
            }
        >
            "‹"
        </button>
        <button
            class=format!("{ARROW} right-2")
            aria-label="Next image"
            on:click=move |_| {
                deck.update(|d| {
                    d.advance(id);
                })
            }
        >
            "›"
        </button>
        <div class="absolute bottom-3 left-1/2 -translate-x-1/2 flex gap-2">
            {(0..count)
                .map(|i| {
                    view! {
                        <button
                            aria-label=format!("Show image {} of {count}", i + 1)
                            class=move || {
                                if index.get() == i {
                                    "w-2.5 h-2.5 rounded-full"
                                } else {
                                    "w-2 h-2 rounded-full bg-white/50 hover:bg-white/80"
                                }
                            }
                            style:background=move || if index.get() == i { ACCENT } else { "" }
                            on:click=move |_| {
                                deck.update(|d| {
                                    d.go_to(id, i);
                                })
                            }
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}
