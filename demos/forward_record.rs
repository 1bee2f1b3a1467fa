//! Forwards one attribution record to GA4 and prints the outcome.
//! Pass a JSON file path, or pipe the record on stdin. Add `--debug` to hit the validation endpoint.

use std::io::Read;

use ga4_forwarder::forwarder::{
    EventForwarder, ForwarderConfig, InputRecord, MeasurementProtocolEndpoint,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut debug = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--debug" => debug = true,
            _ => path = Some(arg),
        }
    }

    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let record = InputRecord::from_json_str(&raw)?;

    let mut config = ForwarderConfig::new();
    if debug {
        config = config.with_endpoint(MeasurementProtocolEndpoint::DebugCollect);
    }
    let forwarder = EventForwarder::new(config)?;

    let outcome = forwarder.forward(&record).await;
    println!("{}", serde_json::to_string(&outcome)?);

    Ok(())
}
