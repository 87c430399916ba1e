use async_trait::async_trait;
use eviction_scorecard::dashboard::{Dashboard, DashboardOptions};
use eviction_scorecard::geography::{
    load_with_fallback, spawn_source_probe, BoundaryDataset, BoundaryTransport, GeographySource,
    GeographySources, TransportError,
};
use eviction_scorecard::scoring::{IndicatorId, RegionCode, Scorecard};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const PRIMARY: &str = "https://boundaries.invalid/provinces.json";

/// Transport whose every request fails like a dropped connection.
#[derive(Default)]
struct OfflineTransport {
    probes: AtomicUsize,
}

#[async_trait]
impl BoundaryTransport for OfflineTransport {
    async fn probe(&self, url: &str) -> Result<(), TransportError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::Request {
            url: url.to_string(),
            message: "connection refused".to_string(),
        })
    }

    async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        Err(TransportError::Status {
            url: url.to_string(),
            status: 503,
        })
    }
}

/// Transport serving a fixed document.
struct StaticTransport {
    body: String,
}

#[async_trait]
impl BoundaryTransport for StaticTransport {
    async fn probe(&self, _url: &str) -> Result<(), TransportError> {
        Ok(())
    }

    async fn fetch(&self, _url: &str) -> Result<String, TransportError> {
        Ok(self.body.clone())
    }
}

fn sources() -> GeographySources {
    GeographySources {
        primary: GeographySource::Remote(PRIMARY.to_string()),
        fallback: GeographySource::Bundled,
    }
}

#[tokio::test]
async fn failed_probe_switches_to_fallback_and_paints_every_region() {
    let transport = Arc::new(OfflineTransport::default());
    let probe = spawn_source_probe(Arc::clone(&transport), sources());
    let mut updates = probe.subscribe();

    let settled = probe.settled().await;
    assert_eq!(settled, GeographySource::Bundled);
    assert_eq!(*updates.borrow_and_update(), GeographySource::Bundled);
    assert_eq!(transport.probes.load(Ordering::SeqCst), 1);

    let (source, dataset) = load_with_fallback(transport.as_ref(), &settled, &sources())
        .await
        .expect("fallback loads");
    assert_eq!(source, GeographySource::Bundled);

    let scorecard = Arc::new(Scorecard::standard());
    let dashboard = Dashboard::new(
        Arc::clone(&scorecard),
        dataset,
        source,
        DashboardOptions::default(),
    );
    let fills = dashboard.map_scene().region_fills();
    assert_eq!(fills.len(), 13);
    for region in RegionCode::ordered() {
        assert_eq!(
            fills.get(&region).copied(),
            Some(scorecard.score(region, IndicatorId::NoticeTermination).color())
        );
    }
}

#[tokio::test]
async fn failed_load_of_primary_also_falls_back() {
    let transport = OfflineTransport::default();
    let primary = GeographySource::Remote(PRIMARY.to_string());
    let (source, dataset) = load_with_fallback(&transport, &primary, &sources())
        .await
        .expect("fallback loads");
    assert_eq!(source, GeographySource::Bundled);
    assert_eq!(dataset.len(), 13);
}

#[tokio::test]
async fn reachable_primary_is_kept() {
    let body = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"PRNAME": "Ontario / Ontario"},
         "geometry": {"type": "Polygon", "coordinates": [[[-95, 49], [-80, 49], [-80, 56], [-95, 49]]]}}
    ]}"#;
    let transport = Arc::new(StaticTransport {
        body: body.to_string(),
    });
    let probe = spawn_source_probe(Arc::clone(&transport), sources());
    assert_eq!(probe.current(), GeographySource::Remote(PRIMARY.to_string()));

    let settled = probe.settled().await;
    assert_eq!(settled, GeographySource::Remote(PRIMARY.to_string()));

    let (source, dataset) = load_with_fallback(transport.as_ref(), &settled, &sources())
        .await
        .expect("primary loads");
    assert_eq!(source, settled);
    assert_eq!(dataset.len(), 1);
}

#[tokio::test]
async fn session_swaps_geography_after_probe() {
    let transport = Arc::new(OfflineTransport::default());
    let probe = spawn_source_probe(Arc::clone(&transport), sources());

    let mut dashboard = Dashboard::new(
        Arc::new(Scorecard::standard()),
        BoundaryDataset::new(Vec::new()),
        probe.current(),
        DashboardOptions::default(),
    );
    assert!(dashboard.map_scene().shapes.is_empty());

    let source = probe.settled().await;
    dashboard.set_geography(source, BoundaryDataset::bundled().expect("bundled parses"));
    assert_eq!(dashboard.source(), &GeographySource::Bundled);
    assert_eq!(dashboard.map_scene().region_fills().len(), 13);
}
