use bookstall_core::{CatalogEntry, PurchaseRequest};
use yew::prelude::*;

use super::book_card::BookCard;

#[derive(Properties, Clone, PartialEq)]
pub struct CatalogGridProps {
    pub entries: Vec<CatalogEntry>,
    pub on_purchase: Callback<PurchaseRequest>,
}

/// Grid of catalog cards, keyed by entry id. Order carries no meaning:
/// snapshots are free to reshuffle it.
#[function_component(CatalogGrid)]
pub fn catalog_grid(props: &CatalogGridProps) -> Html {
    html! {
        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3" data-testid="catalog-grid">
            { for props.entries.iter().map(|entry| html! {
                <BookCard
                    key={entry.id.clone()}
                    entry={entry.clone()}
                    on_purchase={props.on_purchase.clone()}
                />
            }) }
        </div>
    }
}
