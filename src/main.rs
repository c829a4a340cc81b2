use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The cause has already been logged by the time an error gets here.
    match vehicle_chatbot_backend::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
