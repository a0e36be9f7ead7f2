use std::io;

use srfax::{Auth, SrFaxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth = auth_from_env()?;
    let client = SrFaxClient::new(auth)?;
    client.check_auth().await?;

    println!("credentials accepted");

    Ok(())
}

fn auth_from_env() -> Result<Auth, Box<dyn std::error::Error>> {
    let access_id = required_env("SRFAX_ACCESS_ID")?.parse::<u64>()?;
    let password = required_env("SRFAX_ACCESS_PWD")?;
    Ok(Auth::new(access_id, password)?)
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
