use dioxus::prelude::*;

use crate::components::PageFrame;
use crate::routes::Route;

struct Realm {
    name: &'static str,
    description: &'static str,
}

static REALMS: [Realm; 4] = [
    Realm {
        name: "Calm Mind",
        description: "Share stories about managing daily anxiety and finding peace",
    },
    Realm {
        name: "Restful Nights",
        description: "Connect over sleep struggles and discover what helps you rest",
    },
    Realm {
        name: "Work Balance",
        description: "Discuss work pressures and share healthy coping strategies",
    },
    Realm {
        name: "Daily Wins",
        description: "Celebrate small victories and build positive momentum",
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        PageFrame {
            title: "Explore Realms",
            subtitle: "Pick a realm and begin a short reflective storytelling circle.",
            div {
                class: "grid md:grid-cols-2 gap-4",
                for realm in REALMS.iter() {
                    Link {
                        key: "{realm.name}",
                        to: Route::MetaphorFlow {},
                        class: "glass-morphism rounded-2xl p-6 hover:opacity-90 transition",
                        h3 {
                            class: "font-semibold text-amber-dark mb-1",
                            "{realm.name}"
                        }
                        p {
                            class: "text-sm text-amber-light",
                            "{realm.description}"
                        }
                    }
                }
            }
        }
    }
}
