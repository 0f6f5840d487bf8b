use clap::Args;

use mongo_init_db::verify::verify_app_access;

use super::TargetArgs;

#[derive(Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub async fn execute(args: VerifyArgs) -> anyhow::Result<()> {
    let config = args.target.bootstrap_config();
    let target = args.target.target_config();

    let report = verify_app_access(&target, &config).await?;

    println!("  Login as '{}' on '{}': OK", config.username, report.database);
    if report.collection_found {
        println!("  Collection '{}': OK", report.collection);
        Ok(())
    } else {
        println!("  Collection '{}': NOT FOUND", report.collection);
        anyhow::bail!(
            "collection '{}' is missing from '{}'",
            report.collection,
            report.database
        )
    }
}
