use leptos::prelude::*;

use crate::content::{Certification, Icon, SkillCategory, CERTIFICATIONS, SKILLS, SKILL_CATEGORIES};
use crate::motion::stagger_delay;

use super::{Glyph, SectionHeading};

#[component]
pub fn Skills() -> impl IntoView {
    // only one skill is highlighted at a time, across all categories
    let hovered = RwSignal::new(None::<&'static str>);

    view! {
        <section id=SKILLS class="section-padding relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Skills &"
                    accent="Certifications"
                    subtitle="Technical expertise and professional certifications that drive my passion for technology"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| view! { <CategoryCard category index=i hovered /> })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <h3 class="text-2xl font-bold mb-8 text-accent-400">"Professional Certifications"</h3>
                    <div class="flex flex-wrap justify-center gap-8">
                        {CERTIFICATIONS.iter().map(|cert| view! { <CertCard cert /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(
    category: &'static SkillCategory,
    index: usize,
    hovered: RwSignal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div
            class="bg-dark-800/60 border border-dark-700 rounded-xl p-6 hover:border-accent-500/50 hover:-translate-y-1 transition-all reveal"
            style:animation-delay=stagger_delay(index, 0.1)
        >
            <div class="flex items-center gap-3 mb-6">
                <div class=format!(
                    "w-12 h-12 rounded-lg flex items-center justify-center bg-gradient-to-br {}",
                    category.color,
                )>
                    <Glyph icon=category.icon class="text-white text-xl" />
                </div>
                <h3 class="text-xl font-semibold text-white">{category.title}</h3>
            </div>
            <ul class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        let name = skill.name;
                        let is_hovered = move || hovered.get() == Some(name);
                        view! {
                            <li
                                on:mouseenter=move |_| hovered.set(Some(name))
                                on:mouseleave=move |_| hovered.set(None)
                            >
                                <div class="flex justify-between mb-1 text-sm">
                                    <span class="text-dark-200">{name}</span>
                                    <span class=move || {
                                        if is_hovered() {
                                            "text-accent-400 font-bold scale-110 transition-all"
                                        } else {
                                            "text-dark-400 transition-all"
                                        }
                                    }>{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="h-2 bg-dark-700 rounded-full overflow-hidden">
                                    <div
                                        class=format!(
                                            "h-full rounded-full bg-gradient-to-r {} grow-x",
                                            category.color,
                                        )
                                        style:width=format!("{}%", skill.level)
                                    ></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn CertCard(cert: &'static Certification) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-gradient-to-br {} p-1 rounded-xl relative overflow-hidden group hover:scale-105 transition-transform",
            cert.color,
        )>
            <div class="bg-dark-800 p-6 rounded-lg text-center min-w-[200px] relative z-10">
                <div class="w-16 h-16 mx-auto mb-4 rounded-full overflow-hidden">
                    <img src=cert.logo alt=cert.issuer class="w-full h-full object-cover" />
                </div>
                <h4 class="font-semibold text-dark-100 mb-2">{cert.name}</h4>
                <p class="text-dark-400 text-sm mb-2">{cert.issuer}</p>
                <div class="flex items-center justify-center space-x-1">
                    <Glyph icon=Icon::Star class="text-accent-400 text-sm" />
                    <span class="text-accent-400 text-xs font-medium">{cert.year}</span>
                </div>
            </div>
        </div>
    }
}
