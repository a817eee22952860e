use bookstall_core::{CatalogEntry, PurchaseRequest, format_price};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BookCardProps {
    pub entry: CatalogEntry,
    pub on_purchase: Callback<PurchaseRequest>,
}

/// One catalog entry: title, description, formatted price and the
/// purchase action. The request snapshots title and price at click time.
#[function_component(BookCard)]
pub fn book_card(props: &BookCardProps) -> Html {
    let on_click = {
        let entry = props.entry.clone();
        let on_purchase = props.on_purchase.clone();
        Callback::from(move |_| {
            on_purchase.emit(PurchaseRequest {
                entry_id: entry.id.clone(),
                title: entry.title.clone(),
                price: entry.price,
            });
        })
    };
    html! {
        <article
            class="card bg-base-100 shadow-md"
            data-testid="book-card"
            data-book-id={props.entry.id.clone()}
        >
            <div class="card-body">
                <h3 class="card-title">{ props.entry.title.clone() }</h3>
                <p class="text-base-content/70">{ props.entry.description.clone() }</p>
                <div class="card-actions justify-between items-center">
                    <span class="font-bold">{ format_price(props.entry.price) }</span>
                    <button class="btn btn-primary btn-sm" onclick={on_click}>{ "Buy now" }</button>
                </div>
            </div>
        </article>
    }
}
