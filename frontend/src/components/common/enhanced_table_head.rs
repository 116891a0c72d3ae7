use shared::HeadCell;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnhancedTableHeadProps {
    pub row_count: usize,
    pub rows: Vec<HeadCell>,
}

/// Table header built from column descriptions; numeric columns are right-aligned.
#[function_component(EnhancedTableHead)]
pub fn enhanced_table_head(props: &EnhancedTableHeadProps) -> Html {
    html! {
        <thead class="table-head" data-row-count={props.row_count.to_string()}>
            <tr class="table-head-row">
                {for props.rows.iter().map(|cell| {
                    let align = if cell.numeric { "right" } else { "left" };
                    html! {
                        <th
                            key={cell.id}
                            class={classes!("table-head-cell", cell.numeric.then_some("numeric"))}
                            align={align}
                            data-column={cell.id}
                        >
                            {cell.label}
                        </th>
                    }
                })}
            </tr>
        </thead>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::components::common::render_to_string;
    use shared::SUBSCRIPTION_COLUMNS;

    #[tokio::test]
    async fn test_renders_columns_in_order() {
        let html = render_to_string::<EnhancedTableHead>(|| EnhancedTableHeadProps {
            row_count: 30,
            rows: SUBSCRIPTION_COLUMNS.to_vec(),
        })
        .await;

        let positions: Vec<usize> = ["Action", "Balance change", "Date", "Paid until"]
            .iter()
            .map(|label| html.find(&format!(">{}<", label)).expect("column missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("data-row-count=\"30\""));
        assert!(!html.contains("numeric"));
    }

    #[tokio::test]
    async fn test_numeric_column_is_right_aligned() {
        let html = render_to_string::<EnhancedTableHead>(|| EnhancedTableHeadProps {
            row_count: 1,
            rows: vec![HeadCell { id: "amount", numeric: true, label: "Amount" }],
        })
        .await;

        assert!(html.contains("align=\"right\""));
        assert!(html.contains("table-head-cell numeric"));
    }
}
