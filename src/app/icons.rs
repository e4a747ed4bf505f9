use leptos::prelude::*;

use crate::profile::SkillIcon;

const SVG_CLASS: &str = "fill-none stroke-current";

#[component]
pub fn SkillGlyph(icon: SkillIcon) -> impl IntoView {
    let glyph = match icon {
        SkillIcon::Code => view! {
            <path d="m18 16 4-4-4-4" />
            <path d="m6 8-4 4 4 4" />
            <path d="m14.5 4-5 16" />
        }
        .into_any(),
        SkillIcon::Terminal => view! {
            <polyline points="4 17 10 11 4 5" />
            <line x1="12" x2="20" y1="19" y2="19" />
        }
        .into_any(),
        SkillIcon::Database => view! {
            <ellipse cx="12" cy="5" rx="9" ry="3" />
            <path d="M3 5V19A9 3 0 0 0 21 19V5" />
            <path d="M3 12A9 3 0 0 0 21 12" />
        }
        .into_any(),
        SkillIcon::Cpu => view! {
            <rect width="16" height="16" x="4" y="4" rx="2" />
            <rect width="6" height="6" x="9" y="9" rx="1" />
            <path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" />
        }
        .into_any(),
    };
    view! {
        <svg
            class=format!("w-8 h-8 {SVG_CLASS}")
            viewBox="0 0 24 24"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph}
        </svg>
    }
}

/// Hamburger when closed, a cross when open.
#[component]
pub fn MenuGlyph(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            class=format!("w-6 h-6 {SVG_CLASS}")
            viewBox="0 0 24 24"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {move || {
                if open.get() {
                    view! {
                        <path d="M18 6 6 18" />
                        <path d="m6 6 12 12" />
                    }
                        .into_any()
                } else {
                    view! {
                        <line x1="4" x2="20" y1="12" y2="12" />
                        <line x1="4" x2="20" y1="6" y2="6" />
                        <line x1="4" x2="20" y1="18" y2="18" />
                    }
                        .into_any()
                }
            }}
        </svg>
    }
}
