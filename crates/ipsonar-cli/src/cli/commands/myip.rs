//! `sonar myip` - Look up your own public IP address.

use anyhow::Result;
use tracing::debug;

use super::Context;
use crate::output;

pub async fn execute(ctx: Context) -> Result<()> {
    let client = ctx.client()?;
    debug!(base_url = %ctx.client_config.base_url, "Looking up own address");

    let geo = client.lookup_my_ip_with(&ctx.options).await?;
    output::print_location(&geo, ctx.output_format)
}
