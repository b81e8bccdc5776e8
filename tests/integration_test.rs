//! Integration tests for protodir
//!
//! These run the submission, moderation, catalog and detail flows against a
//! real sled store in a temporary directory.

use protodir::catalog::{CatalogController, CatalogPhase, EmptyState, PageItem, Paginator, featured};
use protodir::commands::list::{ListRequest, prepare};
use protodir::detail::{PageMetadata, lookup, recommended, slug};
use protodir::model::ProtocolStatus;
use protodir::sitemap::{entries, render_xml};
use protodir::store::{RecordStore, SledStore};
use protodir::submission::{SubmissionError, SubmissionForm, submit};
use chrono::Utc;
use tempfile::TempDir;

const BASE: &str = "https://a2aprotocol.com";

fn open_store() -> (SledStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = SledStore::open(dir.path().join("store")).unwrap();
    (store, dir)
}

fn form(name: &str, tags: &str) -> SubmissionForm {
    SubmissionForm {
        name: name.to_string(),
        description: format!("{name} connects agents"),
        features: "Streaming, Discovery".to_string(),
        tags: tags.to_string(),
        created_by: "Example Labs".to_string(),
        contact_email: "team@example.com".to_string(),
        ..SubmissionForm::default()
    }
}

/// Submit and immediately approve
fn publish(store: &SledStore, name: &str, tags: &str) {
    let record = submit(store, &form(name, tags)).unwrap();
    store.set_status(record.id, ProtocolStatus::Approved).unwrap();
}

#[test]
fn test_submission_is_hidden_until_approved() {
    let (store, _dir) = open_store();
    let record = submit(&store, &form("Agent Mesh", "routing")).unwrap();
    assert_eq!(record.status, ProtocolStatus::Pending);

    let mut catalog = CatalogController::default();
    assert!(catalog.load(&store));
    assert_eq!(catalog.view().unwrap().empty, Some(EmptyState::NoSubmissions));
    assert!(lookup(&store, "Agent-Mesh").is_err());

    store.set_status(record.id, ProtocolStatus::Approved).unwrap();

    let mut catalog = CatalogController::default();
    catalog.load(&store);
    let view = catalog.view().unwrap();
    assert_eq!(view.total_matches, 1);
    assert_eq!(view.items[0].name, "Agent Mesh");
    assert_eq!(lookup(&store, "agent-mesh").unwrap().id, record.id);
}

#[test]
fn test_invalid_submission_writes_nothing() {
    let (store, _dir) = open_store();
    let mut incomplete = form("Agent Mesh", "");
    incomplete.contact_email = "  ".to_string();

    let result = submit(&store, &incomplete);
    assert!(matches!(result, Err(SubmissionError::MissingFields(fields)) if fields == vec!["contact_email"]));
    assert_eq!(store.count(), 0);
}

#[test]
fn test_catalog_search_tags_and_pages() {
    let (store, _dir) = open_store();
    for i in 1..=20 {
        let tags = if i % 4 == 0 { "streaming, rpc" } else { "rpc" };
        publish(&store, &format!("Protocol {i:02}"), tags);
    }

    let mut catalog = CatalogController::new(Paginator::new(9));
    catalog.load(&store);
    assert_eq!(catalog.tag_index().as_slice(), ["streaming", "rpc"]);

    let view = catalog.view().unwrap();
    assert_eq!(view.total_pages, 3);
    // Newest first
    assert_eq!(view.items[0].name, "Protocol 20");
    assert_eq!(
        view.page_bar,
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );

    catalog.go_to_page(3);
    assert_eq!(catalog.view().unwrap().items.len(), 2);

    catalog.toggle_tag("streaming");
    let view = catalog.view().unwrap();
    assert_eq!(view.page, 1);
    assert_eq!(view.total_matches, 5);

    catalog.search("protocol 1");
    let names: Vec<_> = catalog.view().unwrap().items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Protocol 16", "Protocol 12"]);
}

#[test]
fn test_list_request_against_sled() {
    let (store, _dir) = open_store();
    publish(&store, "Agent Mesh", "routing");
    publish(&store, "Graph Port", "graphs");

    let request = ListRequest {
        query: Some("MESH".into()),
        tags: Vec::new(),
        page: 1,
    };
    let catalog = prepare(&store, &request, 9).unwrap();
    assert_eq!(catalog.phase(), &CatalogPhase::Ready);
    let view = catalog.view().unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].name, "Agent Mesh");
}

#[test]
fn test_detail_and_recommendations() {
    let (store, _dir) = open_store();
    for name in ["Agent Mesh", "Graph Port", "Quiet Link", "Open Bus", "Relay Hub"] {
        publish(&store, name, "agents");
    }
    submit(&store, &form("Pending One", "agents")).unwrap();

    let record = lookup(&store, &slug("Graph Port")).unwrap();
    assert_eq!(record.feature_list(), vec!["Streaming", "Discovery"]);

    let others = recommended(&store, &record, 3).unwrap();
    assert_eq!(others.len(), 3);
    assert!(others.iter().all(|r| r.id != record.id && r.status == ProtocolStatus::Approved));

    let meta = PageMetadata::from_lookup(&Ok(record), BASE);
    assert_eq!(meta.share.unwrap().url, "https://a2aprotocol.com/protocols/Graph-Port");
}

#[test]
fn test_featured_and_sitemap() {
    let (store, _dir) = open_store();
    for name in ["One", "Two", "Three", "Four"] {
        publish(&store, name, "");
    }
    submit(&store, &form("Hidden", "")).unwrap();

    let names: Vec<_> = featured(&store, 3).unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Four", "Three", "Two"]);

    let sitemap = entries(&store, BASE, Utc::now());
    assert_eq!(sitemap.len(), 6 + 4);
    let xml = render_xml(&sitemap).unwrap();
    assert!(xml.contains("<loc>https://a2aprotocol.com/protocols/Four</loc>"));
    assert!(!xml.contains("Hidden"));
}

#[test]
fn test_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store");
    {
        let store = SledStore::open(&path).unwrap();
        publish(&store, "Agent Mesh", "routing");
        store.flush().unwrap();
    }

    let store = SledStore::open(&path).unwrap();
    let record = lookup(&store, "Agent-Mesh").unwrap();
    assert_eq!(record.tags.as_deref(), Some("routing"));
    assert!(record.updated_at.is_some());
}
