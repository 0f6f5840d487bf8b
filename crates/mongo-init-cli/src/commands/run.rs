use std::sync::Arc;

use clap::Args;

use mongo_init_core::bootstrap::{Bootstrapper, DuplicateUserPolicy};
use mongo_init_core::event::TracingEventSink;
use mongo_init_db::mongo_session::MongoAdminSession;

use super::TargetArgs;

#[derive(Args, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// Leave an existing application user untouched instead of failing
    #[arg(long)]
    pub skip_existing_user: bool,
}

pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    let config = args.target.bootstrap_config();
    let target = args.target.target_config();

    let policy = if args.skip_existing_user {
        DuplicateUserPolicy::Skip
    } else {
        DuplicateUserPolicy::Fail
    };

    let session = MongoAdminSession::connect(&target).await?;

    let mut bootstrapper = Bootstrapper::new(config, session).with_policy(policy);
    bootstrapper.add_event_sink(Arc::new(TracingEventSink));

    let outcome = bootstrapper.run().await?;
    tracing::debug!(?outcome, "Bootstrap finished");

    Ok(())
}
