use std::io;

use srfax::{
    Auth, CallerId, FaxFile, FaxNumber, QueueFax, QueueFaxOptions, Recipients, SenderEmail,
    SrFaxClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_id = std::env::var("SRFAX_ACCESS_ID")
        .map_err(|_| missing("SRFAX_ACCESS_ID"))?
        .parse::<u64>()?;
    let password = std::env::var("SRFAX_ACCESS_PWD").map_err(|_| missing("SRFAX_ACCESS_PWD"))?;
    let caller_id = std::env::var("SRFAX_CALLER_ID").map_err(|_| missing("SRFAX_CALLER_ID"))?;
    let email = std::env::var("SRFAX_SENDER_EMAIL").map_err(|_| missing("SRFAX_SENDER_EMAIL"))?;
    let to = std::env::var("SRFAX_TO").map_err(|_| missing("SRFAX_TO"))?;
    let path = std::env::var("SRFAX_FILE").map_err(|_| missing("SRFAX_FILE"))?;

    let bytes = std::fs::read(&path)?;
    let name = std::path::Path::new(&path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document.pdf");

    let request = QueueFax::new(
        Recipients::single(
            CallerId::new(caller_id)?,
            SenderEmail::new(email)?,
            FaxNumber::new(to)?,
        ),
        vec![FaxFile::from_bytes(name, &bytes)?],
        QueueFaxOptions::default(),
    )?;

    let client = SrFaxClient::new(Auth::new(access_id, password)?)?;
    let queued = client.queue_fax(request).await?;

    println!("queued fax id: {}", queued.details_id);

    Ok(())
}

fn missing(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{name} environment variable is required"),
    )
}
