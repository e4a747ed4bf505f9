use leptos::prelude::*;

use crate::profile::PROFILE;

use super::icons::SkillGlyph;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-gray-900 relative overflow-hidden">
            <div class="absolute inset-0 grid-background opacity-30" />
            <div class="container mx-auto px-4 relative">
                <h2 class="text-3xl font-bold mb-12 text-center">"Technical Expertise"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {PROFILE
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="p-6 bg-black/50 backdrop-blur-sm rounded-xl hover:bg-gray-800 transition-all duration-300 hover:scale-105 hover-glow">
                                    <div class="text-purple-400 mb-4">
                                        <SkillGlyph icon=skill.icon />
                                    </div>
                                    <h3 class="text-xl font-semibold mb-2">{skill.title.clone()}</h3>
                                    <p class="text-gray-400">{skill.description.clone()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
