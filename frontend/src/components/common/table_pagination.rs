use shared::pagination::{
    displayed_rows_label, has_next, has_previous, next_page, previous_page,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TablePaginationProps {
    pub count: usize,
    pub rows_per_page: usize,
    pub page: usize,
    pub on_change_page: Callback<usize>,
    #[prop_or_default]
    pub on_change_rows_per_page: Option<Callback<usize>>,
    #[prop_or(vec![10, 25, 50, 100])]
    pub rows_per_page_options: Vec<usize>,
    #[prop_or(true)]
    pub show_rows_per_page_selector: bool,
    #[prop_or(true)]
    pub show_caption: bool,
    #[prop_or(true)]
    pub show_actions: bool,
    #[prop_or(AttrValue::Static("Previous Page"))]
    pub back_aria_label: AttrValue,
    #[prop_or(AttrValue::Static("Next Page"))]
    pub next_aria_label: AttrValue,
}

/// Pagination footer: optional rows-per-page selector, a "from–to of count"
/// caption and previous/next buttons.
#[function_component(TablePagination)]
pub fn table_pagination(props: &TablePaginationProps) -> Html {
    let page = props.page;
    let previous_enabled = has_previous(page);
    let next_enabled = has_next(page, props.rows_per_page, props.count);

    let on_previous = {
        let on_change_page = props.on_change_page.clone();
        Callback::from(move |_: MouseEvent| on_change_page.emit(previous_page(page)))
    };

    let on_next = {
        let on_change_page = props.on_change_page.clone();
        Callback::from(move |_: MouseEvent| on_change_page.emit(next_page(page)))
    };

    let selector = if props.show_rows_per_page_selector {
        let on_change = props.on_change_rows_per_page.clone().map(|on_change_rows_per_page| {
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                if let Ok(rows) = select.value().parse::<usize>() {
                    on_change_rows_per_page.emit(rows);
                }
            })
        });

        html! {
            <>
                <label class="pagination-rows-label">{"Rows per page:"}</label>
                <select class="pagination-rows-select" onchange={on_change}>
                    {for props.rows_per_page_options.iter().map(|option| html! {
                        <option
                            key={option.to_string()}
                            value={option.to_string()}
                            selected={*option == props.rows_per_page}
                        >
                            {option.to_string()}
                        </option>
                    })}
                </select>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="table-pagination">
            {selector}
            if props.show_caption {
                <p class="pagination-caption">
                    {displayed_rows_label(page, props.rows_per_page, props.count)}
                </p>
            }
            if props.show_actions {
                <div class="pagination-actions">
                    <button
                        class="pagination-button previous"
                        aria-label={props.back_aria_label.clone()}
                        disabled={!previous_enabled}
                        onclick={on_previous}
                    >
                        {"‹"}
                    </button>
                    <button
                        class="pagination-button next"
                        aria-label={props.next_aria_label.clone()}
                        disabled={!next_enabled}
                        onclick={on_next}
                    >
                        {"›"}
                    </button>
                </div>
            }
        </div>
    }
}
