// Boots the backend once per test binary and hands out its base URL.
use std::time::Duration;

use tokio::sync::OnceCell;
use vehicle_chatbot_backend::AppConfig;

static BASE_URL: OnceCell<String> = OnceCell::const_new();

const HEALTH_ATTEMPTS: usize = 50;
const HEALTH_RETRY_DELAY: Duration = Duration::from_millis(20);

// Start the backend if needed and return its base URL once `/api/health` answers.
pub async fn backend_url() -> &'static str {
    BASE_URL.get_or_init(start_backend).await.as_str()
}

async fn start_backend() -> String {
    // Bound here so the address is known before the server thread starts.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral test port");
    listener
        .set_nonblocking(true)
        .expect("set test listener non-blocking");
    let address = listener.local_addr().expect("get local addr");
    let config = AppConfig {
        port: address.port(),
        ..AppConfig::default()
    };

    // Each `#[tokio::test]` has its own runtime; the server needs one that outlives them.
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("backend runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("adopt test listener");
            vehicle_chatbot_backend::run(listener, config)
                .await
                .expect("backend stopped");
        });
    });

    let base_url = format!("http://{address}");
    wait_until_healthy(&base_url).await;
    base_url
}

async fn wait_until_healthy(base_url: &str) {
    let client = reqwest::Client::new();
    let health_url = format!("{base_url}/api/health");

    for _ in 0..HEALTH_ATTEMPTS {
        let healthy = client
            .get(&health_url)
            .send()
            .await
            .is_ok_and(|res| res.status().is_success());
        if healthy {
            return;
        }
        tokio::time::sleep(HEALTH_RETRY_DELAY).await;
    }

    panic!("backend at {base_url} never reported healthy");
}
