use anchor_lang::prelude::*;
use std::collections::{BTreeSet, HashMap};

use crate::error::PayoutDistributorError;
use crate::event::PayoutClaimed;
use crate::instructions::process_claim;
use crate::state::*;
use crate::utils::*;


use test_merkle::PayoutTree;

pub(crate) fn key(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

/// Account with `'static` borrows, as the account wrappers require `&'a AccountInfo<'a>`
pub(crate) fn leak_account(
    key: Pubkey,
    owner: Pubkey,
    data: Vec<u8>,
    executable: bool,
) -> &'static AccountInfo<'static> {
    Box::leak(Box::new(AccountInfo::new(
        Box::leak(Box::new(key)),
        false,
        true,
        Box::leak(Box::new(1_000_000_000)),
        Box::leak(data.into_boxed_slice()),
        Box::leak(Box::new(owner)),
        executable,
        0,
    )))
}

/// Asserts that `result` failed with exactly `expected`.
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: PayoutDistributorError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(error)) => {
            assert_eq!(
                error.error_code_number,
                u32::from(expected),
                "expected {:?}, got {}",
                expected,
                error.error_name
            );
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// In-memory claimed set standing in for the claim record accounts
impl ClaimedSet for BTreeSet<[u8; 32]> {
    fn is_claimed(&self, fingerprint: &[u8; 32]) -> bool {
        self.contains(fingerprint)
    }

    fn mark_claimed(&mut self, _leaf: &ClaimLeaf, fingerprint: [u8; 32]) {
        self.insert(fingerprint);
    }
}

/// Token ledger with balances and allowances granted to the distribution
#[derive(Default, Debug)]
pub(crate) struct MockLedger {
    balances: HashMap<Pubkey, u64>,
    allowances: HashMap<Pubkey, u64>,
    pub transfers: Vec<(Pubkey, Pubkey, u64)>,
}

impl MockLedger {
    pub fn fund(&mut self, holder: Pubkey, balance: u64, allowance: u64) {
        self.balances.insert(holder, balance);
        self.allowances.insert(holder, allowance);
    }

    pub fn approve(&mut self, holder: Pubkey, allowance: u64) {
        self.allowances.insert(holder, allowance);
    }

    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn allowance_of(&self, holder: &Pubkey) -> u64 {
        self.allowances.get(holder).copied().unwrap_or(0)
    }
}

impl PayoutLedger for MockLedger {
    fn transfer_from(
        &mut self,
        holder: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<TransferOutcome> {
        let balance = self.balance_of(holder);
        if balance < amount {
            return Ok(TransferOutcome::InsufficientFunds);
        }
        let allowance = self.allowance_of(holder);
        if allowance < amount {
            return Ok(TransferOutcome::InsufficientAllowance);
        }

        self.balances.insert(*holder, balance - amount);
        self.allowances.insert(*holder, allowance - amount);
        *self.balances.entry(*recipient).or_default() += amount;
        self.transfers.push((*holder, *recipient, amount));

        Ok(TransferOutcome::Completed)
    }
}

/// Registry, claimed set and ledger wired together the way the claim
/// instruction wires the on-chain accounts.
pub(crate) struct Harness {
    pub distribution: DistributionState,
    pub claimed: BTreeSet<[u8; 32]>,
    pub ledger: MockLedger,
    pub administrator: Pubkey,
    pub funder: Pubkey,
}

impl Harness {
    pub const FUNDING_BALANCE: u64 = 10_000_000;

    /// Unlocked distribution funded by `funder` with a matching allowance
    pub fn new() -> Self {
        let administrator = key(1);
        let funder = key(3);

        let mut distribution = DistributionState::default();
        distribution.initialize(254, administrator, key(2), false);
        distribution
            .set_funding_address(&administrator, funder)
            .unwrap();

        let mut ledger = MockLedger::default();
        ledger.fund(funder, Self::FUNDING_BALANCE, Self::FUNDING_BALANCE);

        Self {
            distribution,
            claimed: BTreeSet::new(),
            ledger,
            administrator,
            funder,
        }
    }

    /// Builds the payout tree for `leaves` and makes its root the active one
    pub fn publish(&mut self, leaves: &[ClaimLeaf]) -> PayoutTree {
        let tree = PayoutTree::new(leaves);
        let administrator = self.administrator;
        self.distribution
            .set_root(&administrator, tree.root())
            .unwrap();
        tree
    }

    pub fn set_locked(&mut self, locked: bool) {
        let administrator = self.administrator;
        self.distribution.set_locked(&administrator, locked).unwrap();
    }

    pub fn claim(&mut self, leaf: &ClaimLeaf, proof: &[[u8; 32]]) -> Result<PayoutClaimed> {
        process_claim(
            &mut self.distribution,
            &mut self.claimed,
            &mut self.ledger,
            leaf,
            proof,
        )
    }
}
