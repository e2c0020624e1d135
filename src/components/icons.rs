use dioxus::prelude::*;

use crate::utils::NavIcon;

/// Icon size prop
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    #[props(default = "w-5 h-5".to_string())]
    pub class: String,
}

/// Shared 24x24 stroked frame for the line icons below
#[component]
fn IconFrame(class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn HomeIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { class: props.class,
            path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        }
    }
}

#[component]
pub fn CalendarIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { class: props.class,
            rect { width: "18", height: "18", x: "3", y: "4", rx: "2", ry: "2" }
            line { x1: "16", x2: "16", y1: "2", y2: "6" }
            line { x1: "8", x2: "8", y1: "2", y2: "6" }
            line { x1: "3", x2: "21", y1: "10", y2: "10" }
        }
    }
}

#[component]
pub fn UserIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { class: props.class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

// Brand mark
#[component]
pub fn BrainIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { class: props.class,
            path { d: "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" }
            path { d: "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" }
            path { d: "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4" }
            path { d: "M17.599 6.5a3 3 0 0 0 .399-1.375" }
            path { d: "M6.003 5.125A3 3 0 0 0 6.401 6.5" }
            path { d: "M3.477 10.896a4 4 0 0 1 .585-.396" }
            path { d: "M19.938 10.5a4 4 0 0 1 .585.396" }
            path { d: "M6 18a4 4 0 0 1-1.967-.516" }
            path { d: "M19.967 17.484A4 4 0 0 1 18 18" }
        }
    }
}

// Speaker with waves, ambient sound on
#[component]
pub fn VolumeIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { class: props.class,
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        }
    }
}

// Muted speaker
#[component]
pub fn VolumeXIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { class: props.class,
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            line { x1: "23", y1: "9", x2: "17", y2: "15" }
            line { x1: "17", y1: "9", x2: "23", y2: "15" }
        }
    }
}

#[component]
pub fn MenuIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { class: props.class,
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        }
    }
}

/// Render the glyph for a navigation entry
#[component]
pub fn NavGlyph(icon: NavIcon, #[props(default = "w-5 h-5".to_string())] class: String) -> Element {
    match icon {
        NavIcon::Home => rsx! { HomeIcon { class: class } },
        NavIcon::Calendar => rsx! { CalendarIcon { class: class } },
        NavIcon::User => rsx! { UserIcon { class: class } },
    }
}
