use leptos::prelude::*;

use crate::content::{Icon, Project, PROJECTS, PROJECTS_LIST};
use crate::motion::stagger_delay;

use super::{Glyph, SectionHeading};

/// Sparks shown over the image of the hovered card.
const HOVER_SPARKS: usize = 5;

#[component]
pub fn Projects() -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);

    view! {
        <section id=PROJECTS class="section-padding bg-dark-900/50 relative overflow-hidden">
            <div class="absolute inset-0 opacity-5">
                <div class="absolute top-1/3 right-1/4 w-64 h-64 border border-accent-500 rounded-full animate-spin-slow"></div>
                <div class="absolute bottom-1/3 left-1/4 w-32 h-32 border border-accent-400 rounded-full animate-spin-slow-reverse"></div>
            </div>
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeading
                    title="Projects &"
                    accent="Experience"
                    subtitle="A showcase of technical projects and professional experience in IT support and software development"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS_LIST
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index hovered /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    hovered: RwSignal<Option<usize>>,
) -> impl IntoView {
    let category = project.category;

    view! {
        <div
            class="group relative reveal"
            style:animation-delay=stagger_delay(index, 0.1)
            on:mouseenter=move |_| hovered.set(Some(index))
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="bg-dark-800/50 rounded-xl overflow-hidden border border-dark-700 hover:border-accent-500/50 hover:-translate-y-2 transition-all duration-500 relative">
                <div class=format!(
                    "absolute top-4 left-4 z-20 bg-gradient-to-r {} px-3 py-1 rounded-full",
                    category.color(),
                )>
                    <div class="flex items-center space-x-1">
                        <Glyph icon=category.icon() class="text-white text-xs" />
                        <span class="text-white text-xs font-medium">{category.label()}</span>
                    </div>
                </div>
                <div class="relative overflow-hidden h-48">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-dark-950/80 via-dark-950/40 to-transparent"></div>
                    <div class="absolute inset-0 flex items-center justify-center space-x-4 opacity-0 group-hover:opacity-100 transition-opacity">
                        <a
                            href=project.links.source
                            aria-label="Source code"
                            class="bg-accent-600 p-3 rounded-full text-dark-950 hover:bg-accent-500 transition-colors shadow-lg"
                        >
                            <Glyph icon=Icon::Github class="text-xl" />
                        </a>
                        <a
                            href=project.links.demo
                            aria-label="Live demo"
                            class="bg-accent-600 p-3 rounded-full text-dark-950 hover:bg-accent-500 transition-colors shadow-lg"
                        >
                            <Glyph icon=Icon::ExternalLink class="text-xl" />
                        </a>
                    </div>
                    <Show when=move || hovered.get() == Some(index)>
                        {(0..HOVER_SPARKS)
                            .map(|i| {
                                view! {
                                    <span
                                        class="absolute w-2 h-2 bg-accent-400 rounded-full animate-spark"
                                        style=format!(
                                            "left: {}%; top: {}%; animation-delay: {}",
                                            20 + i * 15,
                                            30 + i * 10,
                                            stagger_delay(i, 0.2),
                                        )
                                    ></span>
                                }
                            })
                            .collect_view()}
                    </Show>
                </div>
                <div class="p-6">
                    <h3 class="text-xl font-semibold text-dark-100 mb-3 group-hover:text-accent-400 transition-colors">
                        {project.title}
                    </h3>
                    <p class="text-dark-300 mb-4 text-sm leading-relaxed">{project.description}</p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="bg-dark-700 text-accent-400 px-3 py-1 rounded-full text-xs font-medium border border-dark-600 hover:bg-accent-500 hover:text-dark-950 hover:scale-110 transition-all">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
