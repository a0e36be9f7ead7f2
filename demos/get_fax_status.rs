use std::io;

use srfax::{Auth, FaxDetailsId, MultiFaxStatus, SrFaxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_id = std::env::var("SRFAX_ACCESS_ID")
        .map_err(|_| missing("SRFAX_ACCESS_ID"))?
        .parse::<u64>()?;
    let password = std::env::var("SRFAX_ACCESS_PWD").map_err(|_| missing("SRFAX_ACCESS_PWD"))?;
    let ids_raw = std::env::var("SRFAX_FAX_IDS")
        .map_err(|_| missing("SRFAX_FAX_IDS (comma-separated ids)"))?;

    let ids = ids_raw
        .split(',')
        .map(FaxDetailsId::parse)
        .collect::<Result<Vec<_>, _>>()?;

    let client = SrFaxClient::new(Auth::new(access_id, password)?)?;
    let statuses = client.get_multi_fax_status(MultiFaxStatus::new(ids)?).await?;

    for status in statuses {
        println!(
            "{}: {} to {} ({} pages)",
            status.file_name, status.sent_status, status.to_fax_number, status.pages
        );
    }

    Ok(())
}

fn missing(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{name} environment variable is required"),
    )
}
