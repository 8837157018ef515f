use std::{cmp::Ordering, rc::Rc};

use catalog_lib::{
    catalog::{Card, NSFW_BADGE, REGION_BADGE, Summary},
    classification::Classification,
    surface::{Collator, RenderSurface, Renderer},
};
use dominator::{Dom, clone, html};
use futures_signals::signal::{Mutable, SignalExt};
use js_sys::{Array, JsString, Object};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::{events, query, reveal::Reveal, utils::document};

pub const CONTAINER_ID: &str = "sources-list";
const SUMMARY_SELECTOR: &str = ".guide-section > p:first-child";
const CARD_SELECTOR: &str = ".source-card";

fn browser_collate(a: &str, b: &str) -> Ordering {
    JsString::from(a)
        .locale_compare(b, &Array::new(), &Object::new())
        .cmp(&0)
}

pub struct CatalogPage {
    container: Element,
    renderer: Renderer,
}

impl CatalogPage {
    pub fn new() -> Option<Rc<Self>> {
        let container = document().get_element_by_id(CONTAINER_ID)?;

        Some(Rc::new(Self {
            container,
            renderer: Renderer::with_collator(Classification::default(), browser_collate as Collator),
        }))
    }

    pub fn load(page: Rc<Self>) {
        spawn_local(async move {
            let mut surface = DomSurface::new(page.container.clone());
            if let Ok(summary) = page.renderer.load_and_render(&mut surface, query::fetch_manifest()).await {
                info!("loaded {} sources", summary.total);
            }
        });
    }

    fn render_card(card: &Card) -> Dom {
        let icon_failed = Mutable::new(false);

        html!("div", {
            .class("source-card")
            .style("--index", &card.index.to_string())
            .children(&mut [
                html!("div", {
                    .class("source-header")
                    .children(&mut [
                        html!("img", {
                            .class("source-icon")
                            .attr("src", &card.icon)
                            .attr("alt", &card.name)
                            .visible_signal(icon_failed.signal().map(|failed| !failed))
                            .event(clone!(icon_failed => move |_: events::Error| {
                                icon_failed.set_neq(true);
                            }))
                        }),
                        html!("h3", {
                            .class("source-name")
                            .text(&card.name)
                        }),
                    ])
                }),
                html!("div", {
                    .class("source-status")
                    .children(&mut [
                        html!("span", {
                            .class(["badge", card.status_class()])
                            .text(card.status_badge())
                        }),
                        html!("span", {
                            .class(["badge", "badge-fr"])
                            .text(REGION_BADGE)
                        }),
                    ])
                    .apply_if(card.nsfw, |dom| dom.child(html!("span", {
                        .class(["badge", "badge-nsfw"])
                        .text(NSFW_BADGE)
                    })))
                }),
                html!("div", {
                    .class("source-version")
                    .text(&card.version_line())
                }),
                html!("div", {
                    .class("source-id")
                    .text(&card.id)
                }),
            ])
        })
    }
}

/// Draws into the `#sources-list` container of the page
struct DomSurface {
    container: Element,
}

impl DomSurface {
    fn new(container: Element) -> Self {
        Self { container }
    }

    fn replace(&self, doms: impl IntoIterator<Item = Dom>) {
        self.container.set_inner_html("");
        for dom in doms {
            dominator::append_dom(&self.container, dom);
        }
    }

    fn message(message: &str) -> Dom {
        html!("div", {
            .class("loading")
            .text(message)
        })
    }
}

impl RenderSurface for DomSurface {
    fn show_loading(&mut self, message: &str) {
        self.replace([Self::message(message)]);
    }

    fn show_failure(&mut self, message: &str) {
        self.replace([Self::message(message)]);
    }

    fn render_cards(&mut self, cards: &[Card]) {
        self.replace(cards.iter().map(CatalogPage::render_card));
    }

    fn update_summary(&mut self, summary: &Summary) {
        if let Ok(Some(paragraph)) = document().query_selector(SUMMARY_SELECTOR) {
            paragraph.set_text_content(Some(&summary.description()));
        }

        document().set_title(&summary.title());
    }

    fn register_for_visibility(&mut self) {
        let reveal = match Reveal::new() {
            Ok(reveal) => reveal,
            Err(e) => {
                error!("error create intersection observer: {:?}", e);
                return;
            }
        };

        let Ok(cards) = self.container.query_selector_all(CARD_SELECTOR) else {
            return;
        };

        for i in 0..cards.length() {
            if let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                reveal.observe(&card);
            }
        }
    }
}
