//! Auxiliary endpoints: status and greet.

use crate::error::CliResult;
use folio_client::HttpTransport;

/// Prints the server's status report.
pub async fn status(transport: &HttpTransport) -> CliResult<()> {
    let status = transport.server_status().await?;
    println!("Server:  {}", transport.base_url());
    println!("Time:    {}", status.server_time);
    println!("Message: {}", status.message);
    Ok(())
}

/// Prints the server's greeting.
pub async fn greet(transport: &HttpTransport, name: Option<&str>) -> CliResult<()> {
    let response = transport.greet(name).await?;
    println!("{}", response.greeting);
    Ok(())
}
