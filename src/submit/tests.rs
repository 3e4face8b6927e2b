//! Tests for concurrent group submission
//!
//! Uses an in-memory chain client that rejects any transaction invoking a
//! designated program, and optionally panics on another.

#[cfg(test)]
mod tests {
    use crate::{
        Context, TransactionGroup,
        chain::{ChainClient, ChainError},
        submit::submit_groups,
    };
    use async_trait::async_trait;
    use solana_sdk::{
        account::Account,
        clock::Slot,
        hash::Hash,
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        signature::{Keypair, Signature},
        signer::Signer,
        transaction::VersionedTransaction,
    };
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct MockChain {
        reject_program: Pubkey,
        panic_program: Option<Pubkey>,
        submitted: AtomicUsize,
        blockhash_available: bool,
    }

    impl MockChain {
        fn new(reject_program: Pubkey) -> Self {
            Self {
                reject_program,
                panic_program: None,
                submitted: AtomicUsize::new(0),
                blockhash_available: true,
            }
        }
    }

    #[async_trait]
    impl ChainClient for MockChain {
        async fn get_slot(&self) -> Result<Slot, ChainError> {
            Ok(1)
        }

        async fn get_latest_blockhash(&self) -> Result<Hash, ChainError> {
            if self.blockhash_available {
                Ok(Hash::new_unique())
            } else {
                Err(ChainError::Task("blockhash unavailable".to_string()))
            }
        }

        async fn get_minimum_balance_for_rent_exemption(
            &self,
            _data_len: usize,
        ) -> Result<u64, ChainError> {
            Ok(0)
        }

        async fn get_account(&self, address: &Pubkey) -> Result<Account, ChainError> {
            Err(ChainError::AccountNotFound(*address))
        }

        async fn send_and_confirm(
            &self,
            transaction: &VersionedTransaction,
        ) -> Result<Signature, ChainError> {
            self.submitted.fetch_add(1, Ordering::SeqCst);
            let keys = transaction.message.static_account_keys();
            if let Some(program) = &self.panic_program {
                if keys.contains(program) {
                    panic!("client crashed while sending");
                }
            }
            if keys.contains(&self.reject_program) {
                return Err(ChainError::Task("transaction rejected".to_string()));
            }
            Ok(transaction.signatures[0])
        }
    }

    fn memo(program_id: Pubkey, payer: Pubkey, byte: u8) -> Instruction {
        Instruction {
            program_id,
            accounts: vec![AccountMeta::new_readonly(payer, true)],
            data: vec![byte; 16],
        }
    }

    fn group(operations: Vec<Instruction>) -> TransactionGroup<Instruction> {
        TransactionGroup::new(operations, vec![], 0)
    }

    #[tokio::test]
    async fn test_all_groups_confirm() {
        let payer = Keypair::new();
        let payer_key = payer.pubkey();
        let program = Pubkey::new_unique();
        let chain = Arc::new(MockChain::new(Pubkey::new_unique()));
        let ctx = Context::new(chain.clone(), payer);

        let groups = vec![
            group(vec![memo(program, payer_key, 0), memo(program, payer_key, 1)]),
            group(vec![memo(program, payer_key, 2)]),
            group(vec![memo(program, payer_key, 3)]),
        ];

        let started = chrono::Utc::now();
        let report = submit_groups(&ctx, groups).await.unwrap();

        assert!(report.is_complete());
        assert!(report.outcomes.iter().all(|o| o.completed_at >= started));
        assert_eq!(chain.submitted.load(Ordering::SeqCst), 3);
        assert_eq!(report.outcomes.len(), 3);
        let indexes: Vec<usize> = report.outcomes.iter().map(|o| o.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
        assert_eq!(report.outcomes[0].operation_count, 2);
        assert_eq!(report.confirmed().count(), 3);
    }

    #[tokio::test]
    async fn test_partial_failure_is_reported_per_group() {
        let payer = Keypair::new();
        let payer_key = payer.pubkey();
        let good = Pubkey::new_unique();
        let bad = Pubkey::new_unique();
        let chain = Arc::new(MockChain::new(bad));
        let ctx = Context::new(chain.clone(), payer);

        let groups = vec![
            group(vec![memo(good, payer_key, 0)]),
            group(vec![memo(bad, payer_key, 1)]),
            group(vec![memo(good, payer_key, 2)]),
        ];

        let report = submit_groups(&ctx, groups).await.unwrap();

        // Every group is still submitted; the failure does not stop the others
        assert_eq!(chain.submitted.load(Ordering::SeqCst), 3);
        assert!(!report.is_complete());
        let failed: Vec<usize> = report.failed().map(|(index, _)| index).collect();
        assert_eq!(failed, vec![1]);
        let confirmed: Vec<usize> = report.confirmed().map(|(index, _)| index).collect();
        assert_eq!(confirmed, vec![0, 2]);
    }

    #[tokio::test]
    async fn test_panicked_task_fails_only_its_group() {
        let payer = Keypair::new();
        let payer_key = payer.pubkey();
        let good = Pubkey::new_unique();
        let crashing = Pubkey::new_unique();
        let mut mock = MockChain::new(Pubkey::new_unique());
        mock.panic_program = Some(crashing);
        let chain = Arc::new(mock);
        let ctx = Context::new(chain.clone(), payer);

        let groups = vec![
            group(vec![memo(good, payer_key, 0)]),
            group(vec![memo(crashing, payer_key, 1)]),
            group(vec![memo(good, payer_key, 2)]),
        ];

        let report = submit_groups(&ctx, groups).await.unwrap();

        assert_eq!(report.outcomes.len(), 3);
        let failed: Vec<(usize, bool)> = report
            .failed()
            .map(|(index, err)| (index, matches!(err, ChainError::Task(_))))
            .collect();
        assert_eq!(failed, vec![(1, true)]);
        let confirmed: Vec<usize> = report.confirmed().map(|(index, _)| index).collect();
        assert_eq!(confirmed, vec![0, 2]);
    }

    #[tokio::test]
    async fn test_nothing_submitted_without_blockhash() {
        let payer = Keypair::new();
        let payer_key = payer.pubkey();
        let mut mock = MockChain::new(Pubkey::new_unique());
        mock.blockhash_available = false;
        let chain = Arc::new(mock);
        let ctx = Context::new(chain.clone(), payer);

        let result = submit_groups(&ctx, vec![group(vec![memo(Pubkey::new_unique(), payer_key, 0)])]).await;

        assert!(result.is_err());
        assert_eq!(chain.submitted.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_signature_belongs_to_payer() {
        let payer = Keypair::new();
        let payer_key = payer.pubkey();
        let chain = Arc::new(MockChain::new(Pubkey::new_unique()));
        let ctx = Context::new(chain, payer);

        let report = submit_groups(&ctx, vec![group(vec![memo(Pubkey::new_unique(), payer_key, 7)])])
            .await
            .unwrap();

        let (_, signature) = report.confirmed().next().unwrap();
        assert_ne!(*signature, Signature::default());
    }
}
