use leptos::prelude::*;

use crate::profile::PROFILE;
use crate::visual::PointerOffset;

/// Landing banner. The blurred shapes drift with the pointer, the purple one against it.
#[component]
pub fn Hero(pointer: ReadSignal<PointerOffset>) -> impl IntoView {
    view! {
        <header class="min-h-screen flex items-center justify-center relative overflow-hidden grid-background">
            <div
                class="absolute inset-0 bg-gradient-to-br from-gray-900 to-black opacity-90"
                style:transform=move || pointer.get().translate()
                style:transition="transform 0.2s ease-out"
            />
            <div class="absolute inset-0 grid-background animate-pulse" />
            <div
                class="absolute w-96 h-96 bg-purple-600/30 rounded-full filter blur-[100px] animate-pulse"
                style:left="20%"
                style:top="20%"
                style:transform=move || pointer.get().inverted().translate()
            />
            <div
                class="absolute w-96 h-96 bg-pink-600/20 rounded-full filter blur-[100px] animate-pulse"
                style:right="20%"
                style:bottom="20%"
                style:transform=move || pointer.get().translate()
            />
            <div class="container mx-auto px-4 z-10">
                <div class="max-w-3xl animate-float">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-purple-400 to-pink-600 text-transparent bg-clip-text">
                        {PROFILE.name.clone()}
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-400 mb-8">{PROFILE.tagline.clone()}</p>
                    <div class="flex gap-4">
                        <a
                            href="#contact"
                            class="bg-purple-600 hover:bg-purple-700 text-white px-6 py-3 rounded-lg transition-all hover:scale-110 hover:shadow-lg hover:shadow-purple-500/20"
                        >
                            "Contact Me"
                        </a>
                        <a
                            href="#projects"
                            class="border border-purple-600 text-purple-400 hover:bg-purple-600/10 px-6 py-3 rounded-lg transition-all hover:scale-110 hover:shadow-lg hover:shadow-purple-500/20"
                        >
                            "View Projects"
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
