//! Shared test utilities and mock catalogs.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use async_trait::async_trait;
use neo_lookup::catalog::{AsteroidRecord, BrowsePage, Catalog, CatalogError, NeoSummary};
use neo_lookup::ui::events::AppEvent;
use std::collections::{HashMap, HashSet};
use std::net::TcpListener;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const EROS_JSON: &str = r#"{
    "id": "2000433",
    "name": "433 Eros",
    "nasa_jpl_url": "https://x",
    "is_potentially_hazardous_asteroid": false,
    "estimated_diameter": {}
}"#;

pub fn eros() -> AsteroidRecord {
    AsteroidRecord {
        name: "433 Eros".to_string(),
        jpl_url: "https://x".to_string(),
        hazardous: false,
    }
}

pub fn apophis() -> AsteroidRecord {
    AsteroidRecord {
        name: "99942 Apophis".to_string(),
        jpl_url: "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=2099942".to_string(),
        hazardous: true,
    }
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Wait for the next event without blocking the async runtime.
pub async fn next_event(rx: &Receiver<AppEvent>, timeout: Duration) -> Option<AppEvent> {
    let deadline = Instant::now() + timeout;
    loop {
        match rx.try_recv() {
            Ok(event) => return Some(event),
            Err(TryRecvError::Disconnected) => return None,
            Err(TryRecvError::Empty) => {}
        }
        if Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// In-memory catalog with scripted answers.
///
/// Unknown identifiers answer `NotFound`.
pub struct ScriptedCatalog {
    records: HashMap<String, AsteroidRecord>,
    listing: Result<Vec<String>, u16>,
    delays: HashMap<String, Duration>,
    panics: HashSet<String>,
    lookups: Mutex<Vec<String>>,
    browses: Mutex<usize>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            listing: Ok(Vec::new()),
            delays: HashMap::new(),
            panics: HashSet::new(),
            lookups: Mutex::new(Vec::new()),
            browses: Mutex::new(0),
        }
    }

    pub fn with_record(mut self, id: &str, record: AsteroidRecord) -> Self {
        self.records.insert(id.to_string(), record);
        self
    }

    pub fn with_listing(mut self, ids: &[&str]) -> Self {
        self.listing = Ok(ids.iter().map(|id| id.to_string()).collect());
        self
    }

    pub fn with_listing_error(mut self, status: u16) -> Self {
        self.listing = Err(status);
        self
    }

    /// Delay answers for `id`. Use "browse" for the listing.
    pub fn with_delay(mut self, id: &str, delay: Duration) -> Self {
        self.delays.insert(id.to_string(), delay);
        self
    }

    pub fn panicking_on(mut self, id: &str) -> Self {
        self.panics.insert(id.to_string());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn browse_count(&self) -> usize {
        *self.browses.lock().unwrap()
    }

    async fn pause(&self, key: &str) {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl Catalog for ScriptedCatalog {
    async fn lookup(&self, id: &str) -> Result<AsteroidRecord, CatalogError> {
        self.lookups.lock().unwrap().push(id.to_string());
        self.pause(id).await;
        if self.panics.contains(id) {
            panic!("scripted panic for {}", id);
        }
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    async fn browse(&self) -> Result<BrowsePage, CatalogError> {
        *self.browses.lock().unwrap() += 1;
        self.pause("browse").await;
        match &self.listing {
            Ok(ids) => Ok(BrowsePage {
                near_earth_objects: ids.iter().map(|id| NeoSummary { id: id.clone() }).collect(),
            }),
            Err(status) => Err(CatalogError::Status { status: *status }),
        }
    }
}
