//! Collection, detail and home page initialization.

use std::rc::Rc;

use catalog::{CatalogError, ContentRecord, IndexEntry, parse_index, parse_records};
use chrono::Utc;
use foundation::CategorySlug;
use gloo_net::http::Request;
use pages::{
    CollectionHeader, DetailRequest, DetailView, PageError, PageQuery, SiteConfig, messages,
    render_filtered_list, render_home, resolve_detail,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlInputElement, RequestCache, Window};

use crate::dom::{render_into, require_element, set_text};
use crate::log;

async fn fetch_text(url: &str) -> Result<String, CatalogError> {
    let resp = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| CatalogError::Io(e.to_string()))?;
    if !resp.ok() {
        return Err(CatalogError::Http {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    resp.text().await.map_err(|e| CatalogError::Io(e.to_string()))
}

pub async fn fetch_records(site: &SiteConfig, category: &CategorySlug) -> Result<Vec<ContentRecord>, CatalogError> {
    let url = site.category_data_url(category);
    let text = fetch_text(&url).await?;
    parse_records(&text, &url)
}

pub async fn fetch_index(site: &SiteConfig) -> Result<Vec<IndexEntry>, CatalogError> {
    let url = site.index_url();
    let text = fetch_text(&url).await?;
    parse_index(&text, &url)
}

fn query(window: &Window) -> PageQuery {
    PageQuery::parse(&window.location().search().unwrap_or_default())
}

pub fn init_collection(window: &Window, document: &Document, site: SiteConfig) -> Result<(), PageError> {
    let header = CollectionHeader::resolve(&query(window), &site.aliases());
    if let Ok(el) = require_element(document, "collection-title") {
        set_text(&el, &header.title);
    }
    if let Ok(el) = require_element(document, "collection-subtitle") {
        set_text(&el, header.subtitle);
    }
    let list = require_element(document, "collection-list")?;
    let search = document
        .get_element_by_id("collection-search")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let document = document.clone();

    spawn_local(async move {
        let category = header.category;
        let records = match fetch_records(&site, &category).await {
            Ok(records) => Rc::new(records),
            Err(e) => {
                log::error(&format!("collection load failed: {e}"));
                set_text(&list, &messages::load_failed(category.as_str()));
                return;
            }
        };

        let render = {
            let document = document.clone();
            let list = list.clone();
            let category = category.clone();
            let records = records.clone();
            move |term: &str| {
                let nodes = render_filtered_list(&category, &records, term);
                if let Err(e) = render_into(&document, &list, &nodes) {
                    log::error(&format!("render failed: {e:?}"));
                }
            }
        };
        render(&search.as_ref().map(HtmlInputElement::value).unwrap_or_default());

        if let Some(input) = search {
            let source = input.clone();
            let on_input = Closure::<dyn FnMut(Event)>::new(move |_| render(&source.value()));
            if input
                .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
                .is_ok()
            {
                // Lives as long as the page.
                on_input.forget();
            }
        }
        log::info(&format!("{}: {} entries", category, records.len()));
    });
    Ok(())
}

pub fn init_detail(window: &Window, document: &Document, site: SiteConfig) -> Result<(), PageError> {
    let request = DetailRequest::resolve(&query(window), &site.aliases());
    if let Ok(el) = require_element(document, "detail-category") {
        set_text(&el, &request.title);
    }
    let container = require_element(document, "detail-content")?;

    let Some(id) = request.id else {
        show_detail(document, &container, DetailView::missing_id());
        return Ok(());
    };
    let document = document.clone();
    let category = request.category;

    spawn_local(async move {
        let view = match fetch_records(&site, &category).await {
            Ok(records) => resolve_detail(&category, &records, &id),
            Err(e) => {
                log::error(&format!("detail load failed: {e}"));
                DetailView::load_failed(&category)
            }
        };
        show_detail(&document, &container, view);
    });
    Ok(())
}

fn show_detail(document: &Document, container: &web_sys::Element, view: DetailView) {
    match view {
        DetailView::Message(text) => set_text(container, &text),
        DetailView::Record(nodes) => {
            if let Err(e) = render_into(document, container, &nodes) {
                log::error(&format!("render failed: {e:?}"));
            }
        }
    }
}

pub fn init_home(document: &Document, site: SiteConfig) -> Result<(), PageError> {
    let latest = require_element(document, "home-latest")?;
    let categories = document.get_element_by_id("home-categories");
    let document = document.clone();

    spawn_local(async move {
        let entries = match fetch_index(&site).await {
            Ok(entries) => entries,
            Err(e) => {
                log::error(&format!("content index load failed: {e}"));
                set_text(&latest, &messages::load_failed(&site.index_file));
                return;
            }
        };
        let view = render_home(&entries, &site, Utc::now());
        let mut result = render_into(&document, &latest, &view.latest);
        if let Some(categories) = &categories {
            result = result.and_then(|()| render_into(&document, categories, &view.categories));
        }
        if let Err(e) = result {
            log::error(&format!("render failed: {e:?}"));
        }
    });
    Ok(())
}
