use std::cell::RefCell;
use std::rc::Rc;

use bookstall_core::{Notice, NotificationSlot, PurchaseRequest, default_catalog};
use bookstall_web::components::ui::storefront_panel::{StorefrontPanel, StorefrontPanelProps};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::{Callback, Renderer};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_root() -> web_sys::Element {
    let doc = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_panel(props: StorefrontPanelProps) {
    Renderer::<StorefrontPanel>::with_root_and_props(ensure_root(), props).render();
}

async fn settle() {
    // Let the scheduler flush the initial render.
    gloo_yield().await;
}

async fn gloo_yield() {
    let promise = js_sys::Promise::resolve(&wasm_bindgen::JsValue::UNDEFINED);
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[wasm_bindgen_test]
async fn buy_button_emits_a_snapshot_request() {
    let captured: Rc<RefCell<Vec<PurchaseRequest>>> = Rc::default();
    let sink = captured.clone();
    render_panel(StorefrontPanelProps {
        ready: true,
        identity: None,
        catalog: default_catalog(),
        slot: NotificationSlot::default(),
        on_purchase: Callback::from(move |request| sink.borrow_mut().push(request)),
        on_dismiss: Callback::noop(),
    });
    settle().await;

    let doc = web_sys::window().unwrap().document().unwrap();
    let button: HtmlElement = doc
        .query_selector("[data-book-id='mern_stack_guide'] button")
        .expect("query buy button")
        .expect("buy button exists")
        .dyn_into()
        .expect("button is clickable");
    button.click();
    settle().await;

    let captured = captured.borrow();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].entry_id, "mern_stack_guide");
    assert_eq!(captured[0].title, "MERN STACK");
    assert_eq!(captured[0].price, 999);
}

#[wasm_bindgen_test]
async fn modal_close_control_emits_dismiss() {
    let dismissed: Rc<RefCell<u32>> = Rc::default();
    let sink = dismissed.clone();
    let mut slot = NotificationSlot::default();
    slot.show(Notice::failure("Ebook ID is missing"));
    render_panel(StorefrontPanelProps {
        ready: true,
        identity: None,
        catalog: default_catalog(),
        slot,
        on_purchase: Callback::noop(),
        on_dismiss: Callback::from(move |()| *sink.borrow_mut() += 1),
    });
    settle().await;

    let doc = web_sys::window().unwrap().document().unwrap();
    let close: HtmlElement = doc
        .query_selector("[data-testid='notification-modal'] [aria-label='Close']")
        .expect("query close control")
        .expect("close control exists")
        .dyn_into()
        .expect("close control is clickable");
    close.click();
    settle().await;

    assert_eq!(*dismissed.borrow(), 1);
}
