use rest_api_helper::net::transports::ReqwestTransport;
use rest_api_helper::{ApiEvent, ClientConfig, RestApi};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Post {
    #[serde(default)]
    id: u32,
    user_id: u32,
    title: String,
    body: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The base url can be passed as the first argument, otherwise we use a public test API
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://jsonplaceholder.typicode.com".to_string());

    let config = ClientConfig::builder()
        .base_url(base_url)
        .user_agent("RestApiHelperDemo/0.1")
        .default_header("Accept", "application/json")
        .default_header("Content-Type", "application/json")
        .build()?;

    // The transport owns its own runtime, so this main does not need to be async
    let transport = Arc::new(ReqwestTransport::new()?);
    let api = RestApi::with_config(config, transport);

    let events = api.subscribe_events();
    std::thread::spawn(move || print_events(events));

    let (tx, rx) = mpsc::channel::<String>();

    let get_tx = tx.clone();
    api.get::<Post>("/posts/1")
        .then(move |post| {
            let _ = get_tx.send(format!("GET  -> #{} {:?}", post.id, post.title));
        })
        .run();

    let new_post = Post {
        id: 0,
        user_id: 1,
        title: "hello from the engine".into(),
        body: "posted through rest-api-helper".into(),
    };
    api.post::<Post, _>("/posts", &new_post)
        .then_result(move |res| {
            let line = match res {
                Ok(post) => format!("POST -> created #{}", post.id),
                Err(e) => format!("POST -> failed: {e}"),
            };
            let _ = tx.send(line);
        })
        .run();

    for _ in 0..2 {
        match rx.recv_timeout(Duration::from_secs(10)) {
            Ok(line) => println!("{line}"),
            Err(_) => {
                println!("no more responses (a failed `then` request never calls back)");
                break;
            }
        }
    }

    Ok(())
}

fn print_events(mut events: tokio::sync::broadcast::Receiver<ApiEvent>) {
    while let Ok(event) = events.blocking_recv() {
        println!("event: {event:?}");
    }
}
