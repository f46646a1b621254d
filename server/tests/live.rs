//! CRUD lifecycle over real HTTP.
//!
//! Starts the server on a random port and drives it with ureq, checking the
//! envelope each endpoint writes to the wire.

use serde_json::{json, Value};

struct Reply {
    status: u16,
    body: Value,
}

/// Disables ureq's status-as-error so 4xx/5xx come back as data.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn send(method: &str, url: &str, body: Option<Value>) -> Reply {
    let agent = agent();
    let mut response = match (method, body) {
        ("GET", _) => agent.get(url).call(),
        ("DELETE", _) => agent.delete(url).call(),
        ("POST", Some(body)) => agent
            .post(url)
            .content_type("application/json")
            .send(body.to_string().as_bytes()),
        ("PUT", Some(body)) => agent
            .put(url)
            .content_type("application/json")
            .send(body.to_string().as_bytes()),
        (other, _) => panic!("unsupported request: {other}"),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let text = response.body_mut().read_to_string().unwrap_or_default();
    Reply {
        status,
        body: serde_json::from_str(&text).unwrap_or(Value::Null),
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/todos")
}

#[test]
fn crud_lifecycle() {
    let base = start_server();

    // Step 1: empty list.
    let reply = send("GET", &base, None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, json!({"status": 200, "data": []}));

    // Step 2: create.
    let reply = send("POST", &base, Some(json!({"task": "buy milk", "completed": false})));
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["data"], json!({"id": 1, "task": "buy milk", "completed": false}));

    // Step 3: get it back.
    let reply = send("GET", &format!("{base}/1"), None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["data"]["task"], "buy milk");

    // Step 4: bad id and bad body never reach the store.
    let reply = send("GET", &format!("{base}/abc"), None);
    assert_eq!(reply.status, 400);
    assert_eq!(reply.body["status"], 400);
    let reply = send("POST", &base, Some(json!({"task": 123, "completed": false})));
    assert_eq!(reply.status, 400);

    // Step 5: partial update.
    let reply = send("PUT", &format!("{base}/1"), Some(json!({"completed": true})));
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["data"], json!({"id": 1, "task": "buy milk", "completed": true}));
    assert_eq!(reply.body["message"], "Todo(#1) was updated successfully.");

    // Step 6: delete, then it is gone.
    let reply = send("DELETE", &format!("{base}/1"), None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["message"], "Todo(#1) was deleted successfully.");

    let reply = send("GET", &format!("{base}/1"), None);
    assert_eq!(reply.status, 404);
    assert_eq!(reply.body["message"], "Todo(#1) not found.");

    let reply = send("DELETE", &format!("{base}/1"), None);
    assert_eq!(reply.status, 404);

    // Step 7: the freed id is not handed out again.
    let reply = send("POST", &base, Some(json!({"task": "eggs", "completed": false})));
    assert_eq!(reply.body["data"]["id"], 2);

    let reply = send("GET", &base, None);
    assert_eq!(reply.body["data"].as_array().unwrap().len(), 1);
}
