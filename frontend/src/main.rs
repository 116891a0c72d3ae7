use anyhow::{Context, Result};
use shared::{compute_styles, Theme, TransactionRecord};
use yew::prelude::*;

mod components;
mod services;

use components::subscription::SubscriptionTable;
use services::logging::Logger;

const THEME_JSON: &str = include_str!("../fixtures/theme.json");
const TRANSACTIONS_JSON: &str = include_str!("../fixtures/transactions.json");

fn parse_theme(json: &str) -> Result<Theme> {
    Theme::from_json(json).context("failed to parse theme configuration")
}

fn parse_transactions(json: &str) -> Result<Vec<TransactionRecord>> {
    TransactionRecord::list_from_json(json).context("failed to parse transactions")
}

/// Configured theme, or the built-in default when the configuration is invalid.
fn load_theme(json: &str) -> Theme {
    parse_theme(json).unwrap_or_else(|e| {
        Logger::warn_with_component("App", &format!("{:#}, using default theme", e));
        Theme::default()
    })
}

/// Transactions to show; a broken fixture leaves the table empty.
fn load_transactions(json: &str) -> Vec<TransactionRecord> {
    match parse_transactions(json) {
        Ok(transactions) => {
            let message = format!("loaded {} transactions", transactions.len());
            Logger::info_with_component("App", &message);
            transactions
        }
        Err(e) => {
            Logger::error_with_component("App", &format!("{:#}", e));
            Vec::new()
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_memo((), |_| load_theme(THEME_JSON));
    // Computed once per theme
    let styles = use_memo(theme.clone(), |theme| compute_styles(theme));
    let transactions = use_memo((), |_| load_transactions(TRANSACTIONS_JSON));

    html! {
        <>
            <style>{styles.to_css()}</style>
            <main class="container">
                <h2 id="tableTitle">{"Subscription"}</h2>
                <SubscriptionTable
                    transactions={Some(transactions)}
                    theme={(*theme).clone()}
                    styles={(*styles).clone()}
                />
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
