use dioxus::prelude::*;

/// Icon size prop
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    #[props(default = "w-7 h-7".to_string())]
    pub class: String,
}

#[component]
pub fn UserIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn GraduationCapIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z" }
            path { d: "M22 10v6" }
            path { d: "M6 12.5V16a6 3 0 0 0 12 0v-3.5" }
        }
    }
}

#[component]
pub fn BriefcaseIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
            rect { width: "20", height: "14", x: "2", y: "6", rx: "2" }
        }
    }
}
