use std::io;

use srfax::{Auth, InboxOptions, Period, SrFaxClient, ViewedFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_id = std::env::var("SRFAX_ACCESS_ID")
        .map_err(|_| missing("SRFAX_ACCESS_ID"))?
        .parse::<u64>()?;
    let password = std::env::var("SRFAX_ACCESS_PWD").map_err(|_| missing("SRFAX_ACCESS_PWD"))?;

    // Optional range, e.g. SRFAX_PERIOD=20240101-20240131.
    let period = match std::env::var("SRFAX_PERIOD") {
        Ok(raw) => {
            let (start, end) = raw
                .split_once('-')
                .ok_or_else(|| missing("SRFAX_PERIOD as START-END"))?;
            Some(Period::range(start, end)?)
        }
        Err(_) => None,
    };

    let client = SrFaxClient::new(Auth::new(access_id, password)?)?;
    let inbox = client
        .get_fax_inbox(InboxOptions {
            period,
            viewed: Some(ViewedFilter::Unread),
            include_sub_users: false,
        })
        .await?;

    println!("{} unread faxes", inbox.len());
    for entry in &inbox.entries {
        println!(
            "{} from {} ({} pages, {})",
            entry.file_name, entry.caller_id, entry.pages, entry.date
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
