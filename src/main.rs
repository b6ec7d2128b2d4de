use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match invitation_backend::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
