use std::rc::Rc;

use shared::{
    rows_for_page, PageState, StyleMap, StyleSlot, SubscriptionRow, Theme, TransactionRecord,
    PAGE_SIZE, SUBSCRIPTION_COLUMNS,
};
use yew::prelude::*;

use crate::components::common::{
    ColorfulChip, EnhancedTableHead, HighlightedInformation, TablePagination,
};
use crate::services::logging::Logger;

const COMPONENT: &str = "SubscriptionTable";
pub const EMPTY_MESSAGE: &str = "No transactions received yet.";

#[derive(Properties, PartialEq)]
pub struct SubscriptionTableProps {
    /// `None` renders the same as an empty list
    #[prop_or_default]
    pub transactions: Option<Rc<Vec<TransactionRecord>>>,
    pub theme: Theme,
    pub styles: StyleMap,
}

pub enum Msg {
    ChangePage(usize),
}

/// Paginated list of subscription transactions, or an info banner when there
/// are none.
pub struct SubscriptionTable {
    state: PageState,
}

impl SubscriptionTable {
    /// Apply a message to the page state; returns whether to re-render.
    fn apply(&mut self, msg: Msg) -> bool {
        match msg {
            Msg::ChangePage(page) => {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("page {} -> {}", self.state.page, page),
                );
                self.state.change_page(page);
                true
            }
        }
    }
}

impl Component for SubscriptionTable {
    type Message = Msg;
    type Properties = SubscriptionTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: PageState::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.apply(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view_table(ctx.props(), self.state, ctx.link().callback(Msg::ChangePage))
    }
}

fn view_table(
    props: &SubscriptionTableProps,
    state: PageState,
    on_change_page: Callback<usize>,
) -> Html {
    let transactions = props.transactions.as_deref().map(Vec::as_slice).unwrap_or_default();

    if transactions.is_empty() {
        let wrapper = props.styles.class(StyleSlot::ContentWrapper).to_string();
        return html! {
            <div class={classes!("w-100", wrapper)}>
                <HighlightedInformation>
                    {EMPTY_MESSAGE}
                </HighlightedInformation>
            </div>
        };
    }

    let count = transactions.len();
    let page = state.clamped(count, PAGE_SIZE);
    if page != state.page {
        Logger::warn_with_component(
            COMPONENT,
            &format!(
                "page {} is past the end of {} transactions, showing page {}",
                state.page, count, page
            ),
        );
    }
    let rows = rows_for_page(transactions, page, PAGE_SIZE, &props.theme);
    Logger::debug_with_component(
        COMPONENT,
        &format!("rendering {} of {} transactions on page {}", rows.len(), count, page),
    );

    let wrapper = props.styles.class(StyleSlot::TableWrapper).to_string();
    let first_index = page * PAGE_SIZE;

    html! {
        <div class={classes!("w-100", wrapper)}>
            <table class="table" aria-labelledby="tableTitle">
                <EnhancedTableHead row_count={count} rows={SUBSCRIPTION_COLUMNS.to_vec()} />
                <tbody>
                    {for rows
                        .into_iter()
                        .enumerate()
                        .map(|(i, row)| view_row(first_index + i, row))}
                </tbody>
            </table>
            <TablePagination
                count={count}
                rows_per_page={PAGE_SIZE}
                page={page}
                on_change_page={on_change_page}
                show_rows_per_page_selector={false}
                back_aria_label="Previous Page"
                next_aria_label="Next Page"
            />
        </div>
    }
}

fn view_row(index: usize, row: SubscriptionRow) -> Html {
    let SubscriptionRow { description, balance_change, date, paid_until } = row;

    html! {
        <tr key={index.to_string()} class="table-row hover" tabindex="-1">
            <th scope="row" class="pl-3">{description}</th>
            <th scope="row">
                <ColorfulChip label={balance_change.label} color={balance_change.color} />
            </th>
            <th scope="row">{date}</th>
            <th scope="row">{paid_until}</th>
        </tr>
    }
}

#[cfg(test)]
fn create_test_transactions(count: usize) -> Vec<TransactionRecord> {
    (0..count)
        .map(|i| {
            let timestamp = 1_736_899_200 + i as i64 * 86_400;
            TransactionRecord::new(format!("Transaction {}", i + 1), -9.99, timestamp)
        })
        .collect()
}

#[cfg(test)]
fn table_props(transactions: Option<Vec<TransactionRecord>>) -> SubscriptionTableProps {
    let theme = Theme::default();
    SubscriptionTableProps {
        transactions: transactions.map(Rc::new),
        styles: shared::compute_styles(&theme),
        theme,
    }
}


// Browser tests that click through the mounted component
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn row_count(root: &Element) -> u32 {
        root.query_selector_all("tr.table-row").unwrap().length()
    }

    fn click(root: &Element, selector: &str) {
        let button: HtmlElement =
            root.query_selector(selector).unwrap().unwrap().dyn_into().unwrap();
        button.click();
    }

    #[wasm_bindgen_test]
    async fn test_pagination_buttons_change_page() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let props = table_props(Some(create_test_transactions(30)));
        yew::Renderer::<SubscriptionTable>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::ZERO).await;
        assert_eq!(row_count(&root), 25);

        click(&root, "button[aria-label='Next Page']");
        yew::platform::time::sleep(Duration::ZERO).await;
        assert_eq!(row_count(&root), 5);
        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Transaction 26"));
        assert!(text.contains("26–30 of 30"));

        click(&root, "button[aria-label='Previous Page']");
        yew::platform::time::sleep(Duration::ZERO).await;
        assert_eq!(row_count(&root), 25);
    }
}
