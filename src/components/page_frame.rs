use dioxus::prelude::*;

/// Heading block shared by the routed pages
#[component]
pub fn PageFrame(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "max-w-4xl mx-auto px-6 py-12",
            div {
                class: "glass-morphism rounded-3xl p-8 mb-8",
                h1 {
                    class: "text-3xl font-bold text-amber-dark mb-2",
                    "{title}"
                }
                p {
                    class: "text-amber-light",
                    "{subtitle}"
                }
            }
            {children}
        }
    }
}
