use std::io;

use srfax::{
    Auth, Direction, FaxFormat, FaxIdentifier, RetrieveFax, RetrieveFaxOptions, SrFaxClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_id = std::env::var("SRFAX_ACCESS_ID")
        .map_err(|_| missing("SRFAX_ACCESS_ID"))?
        .parse::<u64>()?;
    let password = std::env::var("SRFAX_ACCESS_PWD").map_err(|_| missing("SRFAX_ACCESS_PWD"))?;
    let fax = std::env::var("SRFAX_FAX").map_err(|_| missing("SRFAX_FAX (id or file name)"))?;
    let output = std::env::var("SRFAX_OUTPUT").unwrap_or_else(|_| "fax.pdf".to_owned());

    let client = SrFaxClient::new(Auth::new(access_id, password)?)?;
    let retrieved = client
        .retrieve_fax(RetrieveFax {
            fax: FaxIdentifier::parse(&fax)?,
            direction: Direction::Inbound,
            options: RetrieveFaxOptions {
                format: Some(FaxFormat::Pdf),
                ..Default::default()
            },
        })
        .await?;

    std::fs::write(&output, &retrieved.content)?;
    println!("wrote {} bytes to {output}", retrieved.content.len());

    Ok(())
}

fn missing(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{name} environment variable is required"),
    )
}
