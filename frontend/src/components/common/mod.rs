pub mod colorful_chip;
pub mod enhanced_table_head;
pub mod highlighted_information;
pub mod table_pagination;

pub use colorful_chip::ColorfulChip;
pub use enhanced_table_head::EnhancedTableHead;
pub use highlighted_information::HighlightedInformation;
pub use table_pagination::TablePagination;

/// Render a component to a string for markup assertions.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) async fn render_to_string<C>(
    props: impl FnOnce() -> C::Properties + Send + 'static,
) -> String
where
    C: yew::BaseComponent,
{
    yew::ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// The opening tag of the element carrying `aria-label="{label}"`.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn tag_with_aria_label<'a>(html: &'a str, label: &str) -> &'a str {
    let needle = format!("aria-label=\"{}\"", label);
    let at = html.find(&needle).expect("aria label not rendered");
    let start = html[..at].rfind('<').expect("no opening tag");
    let end = at + html[at..].find('>').expect("unterminated tag");
    &html[start..=end]
}
