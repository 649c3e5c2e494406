use dioxus::prelude::*;

use crate::ui::trend::{IconShape, TrendIconSpec};

/// Inline 24x24 stroke icon for an already resolved trend glyph.
#[component]
pub fn TrendIcon(spec: TrendIconSpec) -> Element {
    rsx! {
        svg {
            class: "{spec.class}",
            "data-icon": spec.kind.name(),
            "aria-hidden": "true",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for shape in spec.kind.shapes() {
                {render_shape(*shape)}
            }
        }
    }
}

fn render_shape(shape: IconShape) -> Element {
    match shape {
        IconShape::Polyline(points) => rsx! {
            polyline { points: points }
        },
        IconShape::Path(d) => rsx! {
            path { d: d }
        },
    }
}
