use shared::Color;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ColorfulChipProps {
    pub label: AttrValue,
    pub color: Color,
}

/// Small pill label drawn in `color` over a faded background of the same color.
#[function_component(ColorfulChip)]
pub fn colorful_chip(props: &ColorfulChipProps) -> Html {
    let style = format!(
        "color: {color}; border-color: {color}; background-color: {background};",
        color = props.color,
        background = props.color.fade(0.1),
    );

    html! {
        <span class="colorful-chip" style={style}>
            <span class="colorful-chip-label">{props.label.clone()}</span>
        </span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::components::common::render_to_string;

    #[tokio::test]
    async fn test_chip_colors() {
        let html = render_to_string::<ColorfulChip>(|| ColorfulChipProps {
            label: "+$50.00".into(),
            color: Color::parse("#4caf50").unwrap(),
        })
        .await;

        assert!(html.contains(">+$50.00<"));
        assert!(html.contains(concat!(
            "color: #4caf50; border-color: #4caf50; ",
            "background-color: rgba(76, 175, 80, 0.1);"
        )));
    }
}
