// End-to-end tests for the HTTP transport against an in-memory gharial server

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::middleware::{self, Next};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use mini_arango_client::{
    ArangoClient, ArangoError, ClientConfig, DocumentReadOptions, EdgeCollectionOperations,
    EdgeCreateOptions, EdgeDefinition, EdgeReplaceOptions, EdgeUpdateOptions, ErrorCode,
    GraphCreateOptions, GraphOperations, VertexCollectionOperations,
};

type Params = Query<HashMap<String, String>>;

#[derive(Default)]
struct StoredGraph {
    rev: String,
    edge_definitions: Vec<EdgeDefinition>,
    orphans: Vec<String>,
}

impl StoredGraph {
    fn to_json(&self, name: &str) -> Value {
        json!({
            "_key": name,
            "_id": format!("_graphs/{}", name),
            "_rev": self.rev,
            "name": name,
            "edgeDefinitions": self.edge_definitions,
            "orphanCollections": self.orphans,
        })
    }

    fn is_edge_collection(&self, name: &str) -> bool {
        self.edge_definitions.iter().any(|d| d.collection == name)
    }

    fn vertex_collections(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .edge_definitions
            .iter()
            .flat_map(|d| d.from.iter().chain(d.to.iter()).cloned())
            .chain(self.orphans.iter().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    fn holds(&self, name: &str) -> bool {
        self.is_edge_collection(name) || self.vertex_collections().iter().any(|c| c == name)
    }
}

#[derive(Default)]
struct Store {
    graphs: BTreeMap<String, StoredGraph>,
    documents: HashMap<String, BTreeMap<String, Value>>,
    counter: u64,
    authorizations: Vec<Option<String>>,
}

impl Store {
    fn next_rev(&mut self) -> String {
        self.counter += 1;
        format!("_r{}", self.counter)
    }
}

type Shared = Arc<Mutex<Store>>;

fn error(status: StatusCode, error_num: u32, message: &str) -> Response {
    let body = json!({
        "error": true,
        "code": status.as_u16(),
        "errorNum": error_num,
        "errorMessage": message,
    });
    (status, Json(body)).into_response()
}

fn flag(params: &HashMap<String, String>, name: &str) -> bool {
    params.get(name).map(|v| v == "true").unwrap_or(false)
}

fn write_status(params: &HashMap<String, String>) -> StatusCode {
    if flag(params, "waitForSync") { StatusCode::CREATED } else { StatusCode::ACCEPTED }
}

fn graph_response(store: &Store, name: &str, status: StatusCode) -> Response {
    match store.graphs.get(name) {
        Some(graph) => (status, Json(json!({"error": false, "code": status.as_u16(), "graph": graph.to_json(name)}))).into_response(),
        None => error(StatusCode::NOT_FOUND, 1924, "graph not found"),
    }
}

async fn list_graphs(State(store): State<Shared>) -> Response {
    let store = store.lock();
    let graphs: Vec<Value> = store.graphs.iter().map(|(name, g)| g.to_json(name)).collect();
    Json(json!({"error": false, "code": 200, "graphs": graphs})).into_response()
}

async fn create_graph(State(store): State<Shared>, Query(params): Params, Json(body): Json<Value>) -> Response {
    let mut store = store.lock();
    let Some(name) = body["name"].as_str().map(str::to_string) else {
        return error(StatusCode::BAD_REQUEST, 1922, "graph name is missing");
    };
    if store.graphs.contains_key(&name) {
        return error(StatusCode::CONFLICT, 1925, "graph already exists");
    }
    let edge_definitions: Vec<EdgeDefinition> =
        serde_json::from_value(body["edgeDefinitions"].clone()).unwrap_or_default();
    let orphans: Vec<String> = serde_json::from_value(body["orphanCollections"].clone()).unwrap_or_default();

    let rev = store.next_rev();
    store.graphs.insert(name.clone(), StoredGraph { rev, edge_definitions, orphans });
    graph_response(&store, &name, write_status(&params))
}

async fn get_graph(State(store): State<Shared>, Path((_db, graph)): Path<(String, String)>) -> Response {
    graph_response(&store.lock(), &graph, StatusCode::OK)
}

async fn drop_graph(State(store): State<Shared>, Path((_db, graph)): Path<(String, String)>, Query(params): Params) -> Response {
    let mut store = store.lock();
    let Some(removed) = store.graphs.remove(&graph) else {
        return error(StatusCode::NOT_FOUND, 1924, "graph not found");
    };
    if flag(&params, "dropCollections") {
        let mut collections = removed.vertex_collections();
        collections.extend(removed.edge_definitions.iter().map(|d| d.collection.clone()));
        for collection in collections {
            store.documents.remove(&collection);
        }
    }
    (StatusCode::ACCEPTED, Json(json!({"error": false, "code": 202, "removed": true}))).into_response()
}

async fn list_vertex_collections(State(store): State<Shared>, Path((_db, graph)): Path<(String, String)>) -> Response {
    match store.lock().graphs.get(&graph) {
        Some(g) => Json(json!({"error": false, "code": 200, "collections": g.vertex_collections()})).into_response(),
        None => error(StatusCode::NOT_FOUND, 1924, "graph not found"),
    }
}

async fn add_vertex_collection(
    State(store): State<Shared>,
    Path((_db, graph)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let mut store = store.lock();
    let rev = store.next_rev();
    let Some(g) = store.graphs.get_mut(&graph) else {
        return error(StatusCode::NOT_FOUND, 1924, "graph not found");
    };
    let collection = body["collection"].as_str().unwrap_or_default().to_string();
    if g.holds(&collection) {
        return error(StatusCode::BAD_REQUEST, 1938, "collection already used in orphans");
    }
    g.orphans.push(collection);
    g.rev = rev;
    graph_response(&store, &graph, StatusCode::ACCEPTED)
}

async fn remove_vertex_collection(
    State(store): State<Shared>,
    Path((_db, graph, collection)): Path<(String, String, String)>,
) -> Response {
    let mut store = store.lock();
    let Some(g) = store.graphs.get_mut(&graph) else {
        return error(StatusCode::NOT_FOUND, 1924, "graph not found");
    };
    if g.edge_definitions.iter().any(|d| d.from.contains(&collection) || d.to.contains(&collection)) {
        return error(StatusCode::BAD_REQUEST, 1929, "collection used in edge definition");
    }
    let Some(position) = g.orphans.iter().position(|c| *c == collection) else {
        return error(StatusCode::NOT_FOUND, 1928, "not in orphan collection");
    };
    g.orphans.remove(position);
    graph_response(&store, &graph, StatusCode::ACCEPTED)
}

async fn list_edge_definitions(State(store): State<Shared>, Path((_db, graph)): Path<(String, String)>) -> Response {
    match store.lock().graphs.get(&graph) {
        Some(g) => {
            let collections: Vec<&str> = g.edge_definitions.iter().map(|d| d.collection.as_str()).collect();
            Json(json!({"error": false, "code": 200, "collections": collections})).into_response()
        }
        None => error(StatusCode::NOT_FOUND, 1924, "graph not found"),
    }
}

async fn add_edge_definition(
    State(store): State<Shared>,
    Path((_db, graph)): Path<(String, String)>,
    Json(definition): Json<EdgeDefinition>,
) -> Response {
    let mut store = store.lock();
    let Some(g) = store.graphs.get_mut(&graph) else {
        return error(StatusCode::NOT_FOUND, 1924, "graph not found");
    };
    if g.is_edge_collection(&definition.collection) {
        return error(StatusCode::BAD_REQUEST, 1920, "multi use of edge collection in edge def");
    }
    g.orphans.retain(|c| !definition.from.contains(c) && !definition.to.contains(c));
    g.edge_definitions.push(definition);
    graph_response(&store, &graph, StatusCode::ACCEPTED)
}

async fn replace_edge_definition(
    State(store): State<Shared>,
    Path((_db, graph, collection)): Path<(String, String, String)>,
    Json(definition): Json<EdgeDefinition>,
) -> Response {
    let mut store = store.lock();
    let Some(g) = store.graphs.get_mut(&graph) else {
        return error(StatusCode::NOT_FOUND, 1924, "graph not found");
    };
    let Some(existing) = g.edge_definitions.iter_mut().find(|d| d.collection == collection) else {
        return error(StatusCode::NOT_FOUND, 1930, "edge collection not used in graph");
    };
    *existing = definition;
    graph_response(&store, &graph, StatusCode::ACCEPTED)
}

async fn remove_edge_definition(
    State(store): State<Shared>,
    Path((_db, graph, collection)): Path<(String, String, String)>,
) -> Response {
    let mut store = store.lock();
    let Some(g) = store.graphs.get_mut(&graph) else {
        return error(StatusCode::NOT_FOUND, 1924, "graph not found");
    };
    let before = g.vertex_collections();
    let Some(position) = g.edge_definitions.iter().position(|d| d.collection == collection) else {
        return error(StatusCode::NOT_FOUND, 1930, "edge collection not used in graph");
    };
    g.edge_definitions.remove(position);

    // Vertex collections stay in the graph as orphans
    let remaining = g.vertex_collections();
    for name in before {
        if !remaining.contains(&name) {
            g.orphans.push(name);
        }
    }
    graph_response(&store, &graph, StatusCode::ACCEPTED)
}

fn kind(store: &Store, graph: &str, collection: &str) -> Result<&'static str, Response> {
    match store.graphs.get(graph) {
        Some(g) if g.is_edge_collection(collection) => Ok("edge"),
        Some(g) if g.holds(collection) => Ok("vertex"),
        Some(_) => Err(error(StatusCode::NOT_FOUND, 1203, "collection or view not found")),
        None => Err(error(StatusCode::NOT_FOUND, 1924, "graph not found")),
    }
}

fn meta(doc: &Value) -> Value {
    json!({"_id": doc["_id"], "_key": doc["_key"], "_rev": doc["_rev"]})
}

fn check_if_match(headers: &HeaderMap, doc: &Value) -> Option<Response> {
    let expected = headers.get("if-match")?.to_str().ok()?;
    (doc["_rev"] != expected).then(|| error(StatusCode::PRECONDITION_FAILED, 1200, "conflict"))
}

fn write_response(kind: &str, status: StatusCode, meta: Value, new: Option<Value>, old: Option<Value>) -> Response {
    let mut body = json!({"error": false, "code": status.as_u16()});
    body[kind] = meta;
    if let Some(new) = new {
        body["new"] = new;
    }
    if let Some(old) = old {
        body["old"] = old;
    }
    (status, Json(body)).into_response()
}

async fn insert_document(
    State(store): State<Shared>,
    Path((_db, graph, collection)): Path<(String, String, String)>,
    Query(params): Params,
    Json(mut body): Json<Map<String, Value>>,
) -> Response {
    let mut store = store.lock();
    let kind = match kind(&store, &graph, &collection) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    if kind == "edge" && (!body.contains_key("_from") || !body.contains_key("_to")) {
        return error(StatusCode::BAD_REQUEST, 1233, "edge attribute missing or invalid");
    }

    let rev = store.next_rev();
    let key = match body.get("_key").and_then(Value::as_str) {
        Some(key) => key.to_string(),
        None => format!("k{}", store.counter),
    };
    body.insert("_key".into(), json!(key));
    body.insert("_id".into(), json!(format!("{}/{}", collection, key)));
    body.insert("_rev".into(), json!(rev));

    let documents = store.documents.entry(collection).or_default();
    if documents.contains_key(&key) {
        return error(StatusCode::CONFLICT, 1210, "unique constraint violated");
    }
    let doc = Value::Object(body);
    documents.insert(key, doc.clone());

    let new = flag(&params, "returnNew").then(|| doc.clone());
    write_response(kind, write_status(&params), meta(&doc), new, None)
}

async fn get_document(
    State(store): State<Shared>,
    Path((_db, graph, collection, key)): Path<(String, String, String, String)>,
    headers: HeaderMap,
) -> Response {
    let store = store.lock();
    let kind = match kind(&store, &graph, &collection) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let Some(doc) = store.documents.get(&collection).and_then(|docs| docs.get(&key)) else {
        return error(StatusCode::NOT_FOUND, 1202, "document not found");
    };
    if let Some(rev) = headers.get("if-none-match").and_then(|v| v.to_str().ok()) {
        if doc["_rev"] == rev {
            return StatusCode::NOT_MODIFIED.into_response();
        }
    }
    if let Some(response) = check_if_match(&headers, doc) {
        return response;
    }

    let mut body = json!({"error": false, "code": 200});
    body[kind] = doc.clone();
    Json(body).into_response()
}

async fn change_document(
    store: Shared,
    (graph, collection, key): (String, String, String),
    params: HashMap<String, String>,
    headers: HeaderMap,
    patch: Map<String, Value>,
    merge: bool,
) -> Response {
    let mut store = store.lock();
    let kind = match kind(&store, &graph, &collection) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let rev = store.next_rev();
    let Some(doc) = store.documents.get_mut(&collection).and_then(|docs| docs.get_mut(&key)) else {
        return error(StatusCode::NOT_FOUND, 1202, "document not found");
    };
    if let Some(response) = check_if_match(&headers, doc) {
        return response;
    }

    let old = doc.clone();
    let mut fields = if merge {
        old.as_object().cloned().unwrap_or_default()
    } else {
        Map::new()
    };
    let keep_null = params.get("keepNull").map(|v| v != "false").unwrap_or(true);
    for (name, value) in patch {
        if merge && value.is_null() && !keep_null {
            fields.remove(&name);
        } else {
            fields.insert(name, value);
        }
    }
    for system in ["_id", "_key"] {
        fields.insert(system.into(), old[system].clone());
    }
    fields.insert("_rev".into(), json!(rev));
    *doc = Value::Object(fields);

    let mut written = meta(doc);
    written["_oldRev"] = old["_rev"].clone();
    let new = flag(&params, "returnNew").then(|| doc.clone());
    let old = flag(&params, "returnOld").then_some(old);
    write_response(kind, write_status(&params), written, new, old)
}

async fn replace_document(
    State(store): State<Shared>,
    Path((_db, graph, collection, key)): Path<(String, String, String, String)>,
    Query(params): Params,
    headers: HeaderMap,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    change_document(store, (graph, collection, key), params, headers, body, false).await
}

async fn update_document(
    State(store): State<Shared>,
    Path((_db, graph, collection, key)): Path<(String, String, String, String)>,
    Query(params): Params,
    headers: HeaderMap,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    change_document(store, (graph, collection, key), params, headers, body, true).await
}

async fn delete_document(
    State(store): State<Shared>,
    Path((_db, graph, collection, key)): Path<(String, String, String, String)>,
    Query(params): Params,
    headers: HeaderMap,
) -> Response {
    let mut store = store.lock();
    if let Err(response) = kind(&store, &graph, &collection) {
        return response;
    }
    let Some(docs) = store.documents.get_mut(&collection) else {
        return error(StatusCode::NOT_FOUND, 1202, "document not found");
    };
    let Some(doc) = docs.get(&key) else {
        return error(StatusCode::NOT_FOUND, 1202, "document not found");
    };
    if let Some(response) = check_if_match(&headers, doc) {
        return response;
    }
    let old = docs.remove(&key);

    let mut body = json!({"error": false, "code": write_status(&params).as_u16(), "removed": true});
    if flag(&params, "returnOld") {
        body["old"] = old.unwrap_or(Value::Null);
    }
    (write_status(&params), Json(body)).into_response()
}

async fn record_authorization(State(store): State<Shared>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    store.lock().authorizations.push(authorization);
    next.run(request).await
}

fn app(store: Shared) -> Router {
    let base = "/_db/:db/_api/gharial";
    Router::new()
        .route(base, get(list_graphs).post(create_graph))
        .route(&format!("{base}/:graph"), get(get_graph).delete(drop_graph))
        .route(&format!("{base}/:graph/vertex"), get(list_vertex_collections).post(add_vertex_collection))
        .route(&format!("{base}/:graph/vertex/:collection"), post(insert_document).delete(remove_vertex_collection))
        .route(
            &format!("{base}/:graph/vertex/:collection/:key"),
            get(get_document).put(replace_document).patch(update_document).delete(delete_document),
        )
        .route(&format!("{base}/:graph/edge"), get(list_edge_definitions).post(add_edge_definition))
        .route(
            &format!("{base}/:graph/edge/:collection"),
            post(insert_document).put(replace_edge_definition).delete(remove_edge_definition),
        )
        .route(
            &format!("{base}/:graph/edge/:collection/:key"),
            get(get_document).put(replace_document).patch(update_document).delete(delete_document),
        )
        .layer(middleware::from_fn_with_state(store.clone(), record_authorization))
        .with_state(store)
}

async fn spawn_server(store: Shared) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(store);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn start_server() -> ArangoClient {
    let endpoint = spawn_server(Shared::default()).await;
    let config = ClientConfig::new(endpoint)
        .with_database("social_db")
        .with_credentials("root", "secret");
    ArangoClient::new(config).unwrap()
}

fn knows() -> EdgeDefinition {
    EdgeDefinition::new("knows").with_from(["persons"]).with_to(["persons"])
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Knows {
    #[serde(rename = "_key", skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "_from")]
    from: String,
    #[serde(rename = "_to")]
    to: String,
    since: Option<u32>,
}

fn knows_edge(key: &str, from: &str, to: &str, since: u32) -> Knows {
    Knows {
        key: Some(key.to_string()),
        from: format!("persons/{}", from),
        to: format!("persons/{}", to),
        since: Some(since),
    }
}

#[tokio::test]
async fn test_graph_lifecycle() {
    let client = start_server().await;
    let db = client.db().unwrap();
    let graph = db.graph("social");

    assert!(!graph.exists().await.unwrap());

    let options = GraphCreateOptions::new().orphan_collections(["robots"]).wait_for_sync(true);
    let info = graph.create_with_options(vec![knows()], options).await.unwrap();
    assert_eq!(info.name(), "social");
    assert_eq!(info.orphan_collections, vec!["robots"]);
    assert!(graph.exists().await.unwrap());

    let err = graph.create(vec![knows()]).await.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.error_code(), ErrorCode::GraphDuplicate);

    let graphs = db.get_graphs().await.unwrap();
    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].edge_definition("knows"), Some(&knows()));

    assert_eq!(graph.get_vertex_collections().await.unwrap(), vec!["persons", "robots"]);
    assert_eq!(graph.get_edge_definitions().await.unwrap(), vec!["knows"]);

    graph.drop().await.unwrap();
    assert!(!graph.exists().await.unwrap());
    assert!(graph.drop().await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_edge_definition_management() {
    let client = start_server().await;
    let graph = client.db().unwrap().graph("routes");
    graph.create(vec![]).await.unwrap();

    let info = graph.add_vertex_collection("cities").await.unwrap();
    assert_eq!(info.orphan_collections, vec!["cities"]);

    let connects = EdgeDefinition::new("connects").with_from(["cities"]).with_to(["cities"]);
    let info = graph.add_edge_definition(&connects).await.unwrap();
    assert!(info.orphan_collections.is_empty());
    assert_eq!(info.vertex_collections(), vec!["cities"]);

    let err = graph.add_edge_definition(&connects).await.unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::GraphCollectionMultiUse);

    let wider = connects.clone().with_to(["cities", "ports"]);
    let info = graph.replace_edge_definition(&wider).await.unwrap();
    assert_eq!(info.edge_definition("connects"), Some(&wider));

    let err = graph.vertex_collection("cities").drop().await.unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::GraphCollectionUsedInEdgeDef);

    let info = graph.remove_edge_definition("connects").await.unwrap();
    assert!(info.edge_definitions.is_empty());
    assert_eq!(info.vertex_collections(), vec!["cities", "ports"]);

    graph.vertex_collection("ports").drop().await.unwrap();
    assert_eq!(graph.get_vertex_collections().await.unwrap(), vec!["cities"]);

    let missing = EdgeDefinition::new("flights").with_from(["cities"]).with_to(["cities"]);
    assert!(graph.replace_edge_definition(&missing).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_edge_documents() {
    let client = start_server().await;
    let graph = client.db().unwrap().graph("social");
    graph.create(vec![knows()]).await.unwrap();
    let edges = graph.edge_collection("knows");

    let options = EdgeCreateOptions::new().return_new(true);
    let created = edges
        .insert_edge_with_options(&knows_edge("e1", "alice", "bob", 2019), options)
        .await
        .unwrap();
    assert_eq!(created.meta.id.to_string(), "knows/e1");
    let stored: Knows = created.new_as().unwrap().unwrap();
    assert_eq!(stored.since, Some(2019));

    let duplicate = edges.insert_edge(&knows_edge("e1", "alice", "bob", 2019)).await.unwrap_err();
    assert!(duplicate.is_conflict());

    let fetched: Option<Knows> = edges.get_edge("e1").await.unwrap();
    assert_eq!(fetched.map(|e| e.to), Some("persons/bob".to_string()));

    let unchanged: Option<Knows> = edges
        .get_edge_with_options("e1", DocumentReadOptions::new().if_none_match(created.meta.rev.as_str()))
        .await
        .unwrap();
    assert!(unchanged.is_none());

    let stale = EdgeReplaceOptions::new().if_match("_stale");
    let err = edges
        .replace_edge_with_options("e1", &knows_edge("e1", "alice", "carol", 2020), stale)
        .await
        .unwrap_err();
    assert!(err.is_precondition_failed());

    let replace = EdgeReplaceOptions::new().if_match(created.meta.rev.as_str()).return_old(true);
    let replaced = edges
        .replace_edge_with_options("e1", &knows_edge("e1", "alice", "carol", 2020), replace)
        .await
        .unwrap();
    assert_eq!(replaced.old_rev.as_ref(), Some(&created.meta.rev));
    let old: Knows = replaced.old_as().unwrap().unwrap();
    assert_eq!(old.to, "persons/bob");

    let update = EdgeUpdateOptions::new().keep_null(false).return_new(true);
    let updated = edges
        .update_edge_with_options("e1", &json!({"since": null, "weight": 3}), update)
        .await
        .unwrap();
    let new: Value = updated.new_as().unwrap().unwrap();
    assert!(new.get("since").is_none());
    assert_eq!(new["weight"], 3);
    assert_eq!(new["_to"], "persons/carol");

    edges.delete_edge("e1").await.unwrap();
    let gone: Option<Knows> = edges.get_edge("e1").await.unwrap();
    assert!(gone.is_none());
    assert!(edges.delete_edge("e1").await.unwrap_err().is_not_found());

    let stats = client.stats();
    assert!(stats.requests_sent >= 10);
    assert!(stats.request_errors >= 3);
}

#[tokio::test]
async fn test_vertex_documents_with_encoded_keys() {
    let client = start_server().await;
    let graph = client.db().unwrap().graph("social");
    graph.create(vec![knows()]).await.unwrap();
    let persons = graph.vertex_collection("persons");

    let key = "alice:smith@home";
    persons.insert_vertex(&json!({"_key": key, "name": "Alice"})).await.unwrap();

    let alice: Option<Value> = persons.get_vertex(key).await.unwrap();
    assert_eq!(alice.unwrap()["name"], "Alice");

    persons.update_vertex(key, &json!({"age": 30})).await.unwrap();
    let alice: Value = persons.get_vertex(key).await.unwrap().unwrap();
    assert_eq!(alice["age"], 30);
    assert_eq!(alice["name"], "Alice");

    persons.delete_vertex(key).await.unwrap();
    assert!(persons.get_vertex::<Value>(key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_errors_are_typed() {
    let client = start_server().await;
    let graph = client.db().unwrap().graph("nowhere");

    let err = graph.get_info().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.error_code(), ErrorCode::GraphNotFound);

    let err = graph
        .edge_collection("knows")
        .get_edge_with_options::<Value>("e1", DocumentReadOptions::new().catch_exception(false))
        .await
        .unwrap_err();
    assert!(matches!(err, ArangoError::Server { status: 404, error_num: 1924, .. }));

    let invalid = client.db().unwrap().graph("bad/name");
    assert!(matches!(invalid.get_info().await, Err(ArangoError::Validation(_))));
}

#[tokio::test]
async fn test_read_with_stale_revision_is_none() {
    let client = start_server().await;
    let graph = client.db().unwrap().graph("social");
    graph.create(vec![knows()]).await.unwrap();
    let edges = graph.edge_collection("knows");
    edges.insert_edge(&knows_edge("e1", "alice", "bob", 2019)).await.unwrap();

    let stale: Option<Knows> = edges
        .get_edge_with_options("e1", DocumentReadOptions::new().if_match("_stale"))
        .await
        .unwrap();
    assert!(stale.is_none());

    let err = edges
        .get_edge_with_options::<Knows>("e1", DocumentReadOptions::new().if_match("_stale").catch_exception(false))
        .await
        .unwrap_err();
    assert!(err.is_precondition_failed());
}

#[tokio::test]
async fn test_basic_authentication_is_optional() {
    let store = Shared::default();
    let endpoint = spawn_server(store.clone()).await;

    let with_auth = ClientConfig::new(endpoint.clone())
        .with_database("social_db")
        .with_credentials("root", "secret");
    let graph = ArangoClient::new(with_auth).unwrap().db().unwrap().graph("social");
    assert!(!graph.exists().await.unwrap());

    let anonymous = ClientConfig::new(endpoint)
        .with_database("social_db")
        .without_credentials();
    let graph = ArangoClient::new(anonymous).unwrap().db().unwrap().graph("social");
    assert!(!graph.exists().await.unwrap());

    let seen = store.lock().authorizations.clone();
    assert_eq!(seen, vec![Some("Basic cm9vdDpzZWNyZXQ=".to_string()), None]);
}
