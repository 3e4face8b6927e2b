use crate::{
    Context, GroupOutcome, SubmissionReport, TransactionGroup, chain::ChainError,
};
use futures::future::join_all;
use solana_sdk::{instruction::Instruction, signature::Signature};
use tracing::{debug, error, info};

/// Sign and submit every group concurrently, then wait for all of them.
///
/// All groups are signed against one recent blockhash fetched up front;
/// if that fetch fails nothing is submitted. After that, each group's
/// failure is recorded in its outcome and never aborts the others. There
/// is no retry and no rollback of groups that did confirm.
///
/// # Returns
/// A report with one outcome per group, in group order
pub async fn submit_groups(
    ctx: &Context,
    groups: Vec<TransactionGroup<Instruction>>,
) -> Result<SubmissionReport, ChainError> {
    let blockhash = ctx.client().get_latest_blockhash().await?;
    debug!("Submitting {} groups with blockhash {}", groups.len(), blockhash);

    let mut operation_counts = Vec::with_capacity(groups.len());
    let mut handles = Vec::with_capacity(groups.len());

    for group in groups {
        operation_counts.push(group.len());
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move {
            let result = match ctx.sign_transaction(
                &group.operations,
                &group.lookup_tables,
                &[],
                blockhash,
            ) {
                Ok(transaction) => ctx.client().send_and_confirm(&transaction).await,
                Err(e) => Err(e),
            };
            (result, chrono::Utc::now())
        }));
    }

    let mut report = SubmissionReport::default();
    for (index, (joined, operation_count)) in join_all(handles)
        .await
        .into_iter()
        .zip(operation_counts)
        .enumerate()
    {
        let (result, completed_at): (Result<Signature, ChainError>, _) = match joined {
            Ok(finished) => finished,
            Err(e) => (Err(ChainError::Task(e.to_string())), chrono::Utc::now()),
        };

        match &result {
            Ok(signature) => info!(
                "Group {} confirmed at {}: {}",
                index,
                completed_at.to_rfc3339(),
                signature
            ),
            Err(e) => error!(
                "Group {} failed at {}: {}",
                index,
                completed_at.to_rfc3339(),
                e
            ),
        }

        report.outcomes.push(GroupOutcome {
            index,
            operation_count,
            completed_at,
            result,
        });
    }

    Ok(report)
}
