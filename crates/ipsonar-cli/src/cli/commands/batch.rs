//! `sonar batch` - Look up many IP addresses in one request.

use anyhow::Result;

use super::Context;
use crate::cli::args::BatchArgs;
use crate::output;

pub async fn execute(ctx: Context, args: BatchArgs) -> Result<()> {
    let client = ctx.client()?;

    let results = client
        .batch_lookup_with(args.addresses(), &ctx.options)
        .await?;

    output::print_locations(&results.data, ctx.output_format)
}
