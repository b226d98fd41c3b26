//! Category content loader.

use std::cell::{Cell, RefCell};

use vitrine_core::{LifecyclePhase, RequestId, SiteConfig, TimingContext};
use vitrine_data::{Clock, FetchClient, FetchError, SystemClock, Transport};
use vitrine_observability::{LogLevel, StructuredLogger};
use vitrine_render::{CardTemplate, Category};

use crate::hooks::{PostCommit, TiltAttachment};
use crate::surface::Surface;

/// Result of one load.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Cards committed to the container.
    Rendered { cards: usize },
    /// Container absent. No request was made.
    Skipped,
    /// A newer load committed while this one was in flight. Nothing committed.
    Superseded,
    /// Fetch or decode failed. Container untouched.
    Failed(FetchError),
}

impl LoadOutcome {
    pub fn phase(&self) -> LifecyclePhase {
        match self {
            Self::Rendered { .. } => LifecyclePhase::Committed,
            Self::Skipped => LifecyclePhase::Skipped,
            Self::Superseded => LifecyclePhase::Superseded,
            Self::Failed(e) => LifecyclePhase::Failed(e.to_string()),
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Fetches the category collection, renders it and commits it to one container.
///
/// The surface is shared through a `RefCell` and never borrowed across the fetch,
/// so several loads may be in flight against the same page. A load commits unless
/// a more recently issued load has already committed, so the container always
/// holds the newest successful fetch.
pub struct ContentLoader<T, C = SystemClock> {
    client: FetchClient<T, C>,
    data_url: String,
    container_id: String,
    template: CardTemplate,
    hooks: Vec<Box<dyn PostCommit>>,
    logger: StructuredLogger,
    /// Ticket of the most recently issued load.
    issued: Cell<u64>,
    /// Ticket of the load whose cards the container holds.
    committed: Cell<u64>,
}

impl<T: Transport, C: Clock> ContentLoader<T, C> {
    pub fn new(
        client: FetchClient<T, C>,
        data_url: impl Into<String>,
        container_id: impl Into<String>,
        template: CardTemplate,
    ) -> Self {
        Self {
            client,
            data_url: data_url.into(),
            container_id: container_id.into(),
            template,
            hooks: Vec::new(),
            logger: StructuredLogger::new(RequestId::generate()).with_component("content-loader"),
            issued: Cell::new(0),
            committed: Cell::new(0),
        }
    }

    /// Loader wired from site configuration, with the tilt pass attached.
    pub fn from_config(config: &SiteConfig, transport: T, clock: C) -> Self {
        let client = FetchClient::with_clock(transport, clock)
            .with_cache_bust_param(&config.loader.cache_bust_param);

        Self::new(
            client,
            &config.loader.data_url,
            &config.loader.container_id,
            CardTemplate::from_config(config),
        )
        .with_post_commit(TiltAttachment::new(config.cards.tilt))
    }

    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger.with_component("content-loader");
        self
    }

    pub fn with_post_commit(mut self, hook: impl PostCommit + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn client(&self) -> &FetchClient<T, C> {
        &self.client
    }

    /// Run one load against `surface`.
    ///
    /// Never fails outward: every failure is logged and reported in the outcome,
    /// with the container left exactly as it was.
    #[tracing::instrument(skip_all, fields(container = %self.container_id))]
    pub async fn load<S: Surface>(&self, surface: &RefCell<S>) -> LoadOutcome {
        let mut timing = TimingContext::new();
        timing.mark_phase(&LifecyclePhase::Start);

        if !surface.borrow().has_container(&self.container_id) {
            tracing::debug!("container missing, skipping load");
            return LoadOutcome::Skipped;
        }

        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);

        let categories: Vec<Category> = match self.client.fetch_json(&self.data_url).await {
            Ok(categories) => categories,
            Err(e) => {
                self.logger
                    .at(LogLevel::Error, "Error loading categories")
                    .field("error", e.to_string())
                    .field("kind", e.kind().name())
                    .field("url", self.data_url.as_str())
                    .emit();
                tracing::warn!(error = %e, "category load failed");
                return LoadOutcome::Failed(e);
            }
        };
        timing.mark_phase(&LifecyclePhase::Fetched);

        if ticket <= self.committed.get() {
            self.logger
                .at(LogLevel::Debug, "Discarding superseded category load")
                .field("ticket", ticket)
                .field("committed", self.committed.get())
                .emit();
            return LoadOutcome::Superseded;
        }

        let html = self.template.render_categories(&categories);

        let mut surface = surface.borrow_mut();
        if !surface.replace(&self.container_id, html) {
            return LoadOutcome::Skipped;
        }
        self.committed.set(ticket);
        for hook in &self.hooks {
            hook.after_commit(&mut *surface, &self.container_id);
        }
        timing.mark_phase(&LifecyclePhase::Committed);

        self.logger
            .at(LogLevel::Info, "Categories rendered")
            .field("cards", categories.len())
            .duration_ms(
                "fetch_ms",
                timing.between("start", "fetched").unwrap_or_default(),
            )
            .emit();

        LoadOutcome::Rendered {
            cards: categories.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use http::StatusCode;
    use vitrine_data::{FixedClock, HttpResponse, StaticTransport};
    use vitrine_observability::LogLevel;
    use vitrine_render::count_cards;

    use super::*;
    use crate::surface::Page;

    const CONTAINER: &str = "dynamic-categories";

    const SILK_SAREES: &str = r#"[{"title": "Silk Sarees", "description": "d", "image": "i.jpg", "features": ["A", "B"]}]"#;

    fn loader<T: Transport>(transport: T) -> ContentLoader<T, FixedClock> {
        ContentLoader::from_config(&SiteConfig::default(), transport, FixedClock(1_700_000_000_000))
            .with_logger(
                StructuredLogger::new(RequestId::from_string("test")).with_min_level(LogLevel::Error),
            )
    }

    fn page(initial: &str) -> RefCell<Page> {
        RefCell::new(Page::new().with_container(CONTAINER, initial))
    }

    #[test]
    fn test_renders_one_card_per_record_in_order() {
        let body = r#"[
            {"title": "Silk Sarees", "description": "d", "image": "1.jpg"},
            {"title": "Lehengas", "description": "d", "image": "2.jpg", "reverse": true},
            {"title": "Kurtis", "description": "d", "image": "3.jpg"}
        ]"#;
        let loader = loader(StaticTransport::respond(HttpResponse::ok(body)));
        let page = page("");

        let outcome = block_on(loader.load(&page));
        assert!(matches!(outcome, LoadOutcome::Rendered { cards: 3 }));

        let page = page.borrow();
        let html = page.content(CONTAINER);
        assert_eq!(count_cards(html), 3);
        let silk = html.find("<h3>Silk Sarees</h3>").unwrap();
        let lehengas = html.find("<h3>Lehengas</h3>").unwrap();
        let kurtis = html.find("<h3>Kurtis</h3>").unwrap();
        assert!(silk < lehengas && lehengas < kurtis);
        assert_eq!(html.matches(r#"class="category-card reverse""#).count(), 1);
    }

    #[test]
    fn test_request_is_cache_busted() {
        let loader = loader(StaticTransport::respond(HttpResponse::ok("[]")));
        block_on(loader.load(&page("")));
        assert_eq!(
            loader.client().transport().requests(),
            vec![format!("{}?t=1700000000000", vitrine_core::DEFAULT_DATA_URL)]
        );
    }

    #[test]
    fn test_missing_container_skips_without_request() {
        let loader = loader(StaticTransport::respond(HttpResponse::ok(SILK_SAREES)));
        let page = RefCell::new(Page::new().with_container("other", "keep"));

        let outcome = block_on(loader.load(&page));
        assert!(matches!(outcome, LoadOutcome::Skipped));
        assert_eq!(loader.client().transport().call_count(), 0);
        assert_eq!(page.borrow().content("other"), "keep");
        assert!(page.borrow().scripts().is_empty());
    }

    #[test]
    fn test_connection_failure_leaves_container_untouched() {
        let loader = loader(StaticTransport::fail("connection reset"));
        let page = page("<p>previous</p>");
        let before = page.borrow().clone();

        let outcome = block_on(loader.load(&page));
        assert!(matches!(outcome, LoadOutcome::Failed(FetchError::Connection(_))));
        assert_eq!(*page.borrow(), before);
    }

    #[test]
    fn test_bad_status_leaves_container_untouched() {
        let loader = loader(StaticTransport::respond(HttpResponse::new(
            StatusCode::SERVICE_UNAVAILABLE,
            SILK_SAREES,
        )));
        let page = page("<p>previous</p>");

        let outcome = block_on(loader.load(&page));
        assert!(matches!(outcome, LoadOutcome::Failed(FetchError::Http { status: 503, .. })));
        assert_eq!(page.borrow().content(CONTAINER), "<p>previous</p>");
    }

    #[test]
    fn test_unparsable_body_leaves_container_untouched() {
        for body in ["not json", r#"{"title": "x"}"#, r#"[{"title": "missing fields"}]"#] {
            let loader = loader(StaticTransport::respond(HttpResponse::ok(body)));
            let page = page("");
            let before = page.borrow().clone();

            let outcome = block_on(loader.load(&page));
            assert!(matches!(outcome, LoadOutcome::Failed(FetchError::Deserialization(_))));
            assert_eq!(*page.borrow(), before);
        }
    }

    #[test]
    fn test_silk_sarees_example() {
        let loader = loader(StaticTransport::respond(HttpResponse::ok(SILK_SAREES)));
        let page = page("");
        block_on(loader.load(&page));

        let page = page.borrow();
        let html = page.content(CONTAINER);
        assert_eq!(count_cards(html), 1);
        assert!(html.contains("Silk Sarees"));
        assert!(html.contains("</i> A</li>"));
        assert!(html.contains("</i> B</li>"));
        assert!(html.contains(r#"<i class="fas fa-star"></i>"#));
        assert!(!html.contains("reverse"));
        assert_eq!(html.matches("?text=").count(), 2);
        assert_eq!(html.matches("Silk%20Sarees").count(), 2);
    }

    #[test]
    fn test_tilt_attached_after_commit() {
        let loader = loader(StaticTransport::respond(HttpResponse::ok(SILK_SAREES)));
        let page = page("");
        block_on(loader.load(&page));

        let page = page.borrow();
        assert_eq!(page.scripts().len(), 1);
        assert!(page.scripts()[0].contains(r#"querySelectorAll(".category-card")"#));
    }

    #[test]
    fn test_empty_collection_clears_container() {
        let loader = loader(StaticTransport::respond(HttpResponse::ok("[]")));
        let page = page("<p>stale</p>");
        let outcome = block_on(loader.load(&page));
        assert!(matches!(outcome, LoadOutcome::Rendered { cards: 0 }));
        assert_eq!(page.borrow().content(CONTAINER), "");
    }

    /// Transport whose responses are released by the test.
    struct GatedTransport {
        gates: RefCell<VecDeque<oneshot::Receiver<HttpResponse>>>,
    }

    impl GatedTransport {
        fn new(count: usize) -> (Self, Vec<oneshot::Sender<HttpResponse>>) {
            let (senders, receivers): (Vec<_>, VecDeque<_>) =
                (0..count).map(|_| oneshot::channel()).unzip();
            (
                Self {
                    gates: RefCell::new(receivers),
                },
                senders,
            )
        }
    }

    #[async_trait(?Send)]
    impl Transport for GatedTransport {
        async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
            let gate = self.gates.borrow_mut().pop_front();
            match gate {
                Some(gate) => gate
                    .await
                    .map_err(|_| FetchError::Connection("gate dropped".to_string())),
                None => Err(FetchError::Connection("no gate".to_string())),
            }
        }
    }

    /// Returns pending once so other joined futures get polled.
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    fn named(title: &str) -> HttpResponse {
        HttpResponse::ok(format!(
            r#"[{{"title": "{}", "description": "d", "image": "i.jpg"}}]"#,
            title
        ))
    }

    #[test]
    fn test_older_load_finishing_last_does_not_commit() {
        let (transport, mut gates) = GatedTransport::new(2);
        let loader = loader(transport);
        let page = page("");

        let second_gate = gates.pop().unwrap();
        let first_gate = gates.pop().unwrap();

        let (first, second, ()) = block_on(async {
            futures::join!(loader.load(&page), loader.load(&page), async {
                second_gate.send(named("Newer")).unwrap();
                YieldNow(false).await;
                first_gate.send(named("Older")).unwrap();
            })
        });

        assert!(matches!(second, LoadOutcome::Rendered { cards: 1 }));
        assert!(matches!(first, LoadOutcome::Superseded));
        let page = page.borrow();
        assert!(page.content(CONTAINER).contains("Newer"));
        assert!(!page.content(CONTAINER).contains("Older"));
    }

    #[test]
    fn test_older_load_finishing_first_commits_then_newer_replaces_it() {
        let (transport, mut gates) = GatedTransport::new(2);
        let loader = loader(transport);
        let page = page("");

        let second_gate = gates.pop().unwrap();
        let first_gate = gates.pop().unwrap();

        let (first, second, ()) = block_on(async {
            futures::join!(loader.load(&page), loader.load(&page), async {
                first_gate.send(named("Older")).unwrap();
                YieldNow(false).await;
                second_gate.send(named("Newer")).unwrap();
            })
        });

        assert!(matches!(first, LoadOutcome::Rendered { cards: 1 }));
        assert!(matches!(second, LoadOutcome::Rendered { cards: 1 }));
        let page = page.borrow();
        assert!(page.content(CONTAINER).contains("Newer"));
        assert!(!page.content(CONTAINER).contains("Older"));
    }

    #[test]
    fn test_newer_load_failing_keeps_older_success() {
        let (transport, mut gates) = GatedTransport::new(2);
        let loader = loader(transport);
        let page = page("<p>old</p>");

        let second_gate = gates.pop().unwrap();
        let first_gate = gates.pop().unwrap();

        let (first, second, ()) = block_on(async {
            futures::join!(loader.load(&page), loader.load(&page), async {
                second_gate
                    .send(HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "oops"))
                    .unwrap();
                YieldNow(false).await;
                first_gate.send(named("Fresh")).unwrap();
            })
        });

        assert!(matches!(second, LoadOutcome::Failed(FetchError::Http { status: 500, .. })));
        assert!(matches!(first, LoadOutcome::Rendered { cards: 1 }));
        let page = page.borrow();
        assert_eq!(count_cards(page.content(CONTAINER)), 1);
        assert!(page.content(CONTAINER).contains("Fresh"));
        assert!(!page.content(CONTAINER).contains("<p>old</p>"));
    }

    #[test]
    fn test_outcome_phases() {
        assert_eq!(LoadOutcome::Skipped.phase(), LifecyclePhase::Skipped);
        assert_eq!(
            LoadOutcome::Rendered { cards: 2 }.phase(),
            LifecyclePhase::Committed
        );
        assert!(LoadOutcome::Failed(FetchError::Connection("x".into()))
            .phase()
            .is_terminal());
    }
}
