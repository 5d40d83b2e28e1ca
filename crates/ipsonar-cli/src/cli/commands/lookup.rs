//! `sonar lookup` - Look up a single IP address.

use anyhow::Result;

use super::Context;
use crate::cli::args::LookupArgs;
use crate::output;

pub async fn execute(ctx: Context, args: LookupArgs) -> Result<()> {
    let client = ctx.client()?;

    let geo = client.lookup_ip_with(&args.ip, &ctx.options).await?;
    output::print_location(&geo, ctx.output_format)
}
