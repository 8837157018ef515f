use std::{cmp::Ordering, future::Future};

use crate::{
    catalog::{self, Card, Summary, FAILURE_MESSAGE, LOADING_MESSAGE},
    classification::Classification,
    error::Error,
    models::Manifest,
};

/// Where a catalog gets drawn: the browser DOM or a static HTML page
pub trait RenderSurface {
    fn show_loading(&mut self, message: &str);
    fn show_failure(&mut self, message: &str);
    /// Replaces whatever the container holds with the cards, in order
    fn render_cards(&mut self, cards: &[Card]);
    fn update_summary(&mut self, summary: &Summary);
    /// Called once the cards are in place
    fn register_for_visibility(&mut self);
}

pub type Collator = fn(&str, &str) -> Ordering;

pub struct Renderer<F = Collator> {
    classification: Classification,
    compare: F,
}

impl Renderer<Collator> {
    pub fn new(classification: Classification) -> Self {
        Self {
            classification,
            compare: catalog::locale_cmp,
        }
    }
}

impl Default for Renderer<Collator> {
    fn default() -> Self {
        Self::new(Classification::default())
    }
}

impl<F> Renderer<F>
where
    F: Fn(&str, &str) -> Ordering,
{
    pub fn with_collator(classification: Classification, compare: F) -> Self {
        Self {
            classification,
            compare,
        }
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Sorts the manifest entries and turns them into cards
    pub fn prepare(&self, manifest: Manifest) -> (Vec<Card>, Summary) {
        let mut sources = manifest.into_sources();
        let summary = Summary::new(&sources, &self.classification);

        catalog::sort_sources(&mut sources, &self.classification, &self.compare);

        let cards = sources
            .iter()
            .enumerate()
            .map(|(index, source)| Card::new(source, &self.classification, index))
            .collect();

        (cards, summary)
    }

    pub fn render<S>(&self, surface: &mut S, manifest: Result<Manifest, Error>) -> Result<Summary, Error>
    where
        S: RenderSurface,
    {
        match manifest {
            Ok(manifest) => {
                let (cards, summary) = self.prepare(manifest);
                debug!("rendering {} sources", cards.len());

                surface.render_cards(&cards);
                surface.update_summary(&summary);
                surface.register_for_visibility();

                Ok(summary)
            }
            Err(e) => {
                error!("Error loading sources: {}", e);
                surface.show_failure(FAILURE_MESSAGE);

                Err(e)
            }
        }
    }

    pub async fn load_and_render<S, Fut>(&self, surface: &mut S, fetch: Fut) -> Result<Summary, Error>
    where
        S: RenderSurface,
        Fut: Future<Output = Result<Manifest, Error>>,
    {
        surface.show_loading(LOADING_MESSAGE);
        let manifest = fetch.await;
        self.render(surface, manifest)
    }
}

#[cfg(test)]
mod test {
    use futures::executor::block_on;

    use super::*;
    use crate::models::SourceDescriptor;

    #[derive(Debug, PartialEq)]
    enum Call {
        Loading(String),
        Failure(String),
        Cards(Vec<String>),
        Summary(Summary),
        Visibility,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl RenderSurface for Recorder {
        fn show_loading(&mut self, message: &str) {
            self.calls.push(Call::Loading(message.to_string()));
        }

        fn show_failure(&mut self, message: &str) {
            self.calls.push(Call::Failure(message.to_string()));
        }

        fn render_cards(&mut self, cards: &[Card]) {
            self.calls
                .push(Call::Cards(cards.iter().map(|c| c.id.clone()).collect()));
        }

        fn update_summary(&mut self, summary: &Summary) {
            self.calls.push(Call::Summary(*summary));
        }

        fn register_for_visibility(&mut self) {
            self.calls.push(Call::Visibility);
        }
    }

    #[test]
    fn test_load_and_render() {
        let renderer = Renderer::default();
        let mut surface = Recorder::default();
        let manifest = Manifest::from_json(
            r#"[{"id":"fr.sushiscan","name":"B","version":1},{"id":"fr.astralmanga","name":"A","version":1}]"#,
        );

        let summary = block_on(renderer.load_and_render(&mut surface, async { manifest })).unwrap();

        assert_eq!(summary, Summary { total: 2, active: 1, offline: 1 });
        assert_eq!(
            surface.calls,
            vec![
                Call::Loading(LOADING_MESSAGE.to_string()),
                Call::Cards(vec!["fr.astralmanga".to_string(), "fr.sushiscan".to_string()]),
                Call::Summary(summary),
                Call::Visibility,
            ]
        );
    }

    #[test]
    fn test_fetch_error_renders_failure_only() {
        let renderer = Renderer::default();
        let mut surface = Recorder::default();

        let result = block_on(
            renderer.load_and_render(&mut surface, async { Err(Error::Fetch { status: 404 }) }),
        );

        assert_eq!(result, Err(Error::Fetch { status: 404 }));
        assert_eq!(
            surface.calls,
            vec![
                Call::Loading(LOADING_MESSAGE.to_string()),
                Call::Failure(FAILURE_MESSAGE.to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_error_renders_failure_only() {
        let renderer = Renderer::default();
        let mut surface = Recorder::default();

        let result = renderer.render(&mut surface, Manifest::from_json("not json"));

        assert!(matches!(result, Err(Error::Parse(_))));
        assert_eq!(surface.calls, vec![Call::Failure(FAILURE_MESSAGE.to_string())]);
    }

    #[test]
    fn test_injected_tables_and_collator() {
        let classification = Classification::new(["x.down"], [("x.up", "Madara")]);
        let renderer = Renderer::with_collator(classification, |a: &str, b: &str| b.cmp(a));
        let manifest = Manifest::from(vec![
            SourceDescriptor::new("x.down", "Down"),
            SourceDescriptor::new("x.a", "Aaa"),
            SourceDescriptor::new("x.up", "Zzz"),
        ]);

        let (cards, summary) = renderer.prepare(manifest);

        let order: Vec<_> = cards.iter().map(|c| (c.index, c.id.as_str())).collect();
        assert_eq!(order, vec![(0, "x.up"), (1, "x.a"), (2, "x.down")]);
        assert_eq!(cards[0].type_label, "Madara");
        assert_eq!(cards[1].type_label, "Unknown");
        assert_eq!(summary.offline, 1);
    }

    #[test]
    fn test_empty_manifest() {
        let renderer = Renderer::default();
        let mut surface = Recorder::default();

        let summary = renderer
            .render(&mut surface, Manifest::from_json(r#"{"sources": []}"#))
            .unwrap();

        assert_eq!(summary, Summary::default());
        assert_eq!(surface.calls[0], Call::Cards(vec![]));
    }
}
