//! ROI Calculator Server
//!
//! Main entry point for the ROI calculator service

use roi_calculator::ServerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	ServerBuilder::new().start_server().await
}
