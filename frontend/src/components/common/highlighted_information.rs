use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HighlightedInformationProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(HighlightedInformation)]
pub fn highlighted_information(props: &HighlightedInformationProps) -> Html {
    html! {
        <div class="highlighted-information" role="status">
            <p class="highlighted-information-text">{props.children.clone()}</p>
        </div>
    }
}
